use crate::utils;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DesignCardProps {
    /// Opaque identifier of the stored rendered image.
    pub design: String,
    /// Disables the email button while a send is in flight.
    pub email_pending: bool,
    pub on_email: Callback<String>,
}

/// Card for a single saved design: the rendered image, a link to view
/// it full size, and the email-as-PDF action.
#[function_component(DesignCard)]
pub fn design_card(props: &DesignCardProps) -> Html {
    let image_url = utils::asset_url(&props.design);

    let on_email = {
        let on_email = props.on_email.clone();
        let design = props.design.clone();
        Callback::from(move |_| on_email.emit(design.clone()))
    };

    html! {
        <div class="design-card">
            <img
                class="design-image"
                src={image_url.clone()}
                alt={props.design.clone()}
            />
            <div class="design-meta">
                <p class="design-name" title={props.design.clone()}>
                    { props.design.clone() }
                </p>
                <a
                    class="design-view-link"
                    href={image_url}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    { "View" }
                </a>
            </div>
            <button
                class="design-email-button"
                onclick={on_email}
                disabled={props.email_pending}
            >
                { "Email Me This as PDF" }
            </button>
        </div>
    }
}
