//! The dashboard controller state machine
//!
//! Sequencing is strict: the session check runs first and exactly once;
//! the listing load starts only after the check succeeds; actions are
//! single-flight per kind. All of it is single-threaded cooperative
//! async; mutual exclusion comes from construction, not locking.

use std::cell::RefCell;

use shared::{endpoints, EmailPdfRequest, StudioApi, UserInfo};

use crate::error::{ActionKind, ControllerError};
use crate::host::HostEnvironment;
use crate::state::{ControllerState, ListingPhase, Projection};

/// Where the controller sends the user when no valid session exists.
pub const LOGIN_PATH: &str = "/login";

const EMAIL_PROMPT: &str = "Enter your email to receive a PDF of this design:";
const EMAIL_FALLBACK: &str = "PDF sent.";

/// Drives the session-gated dashboard over two injected ports: the API
/// transport and the host environment.
///
/// The registered listener receives a fresh [`Projection`] synchronously
/// after every state mutation; the rendering layer redraws from that.
pub struct DashboardController<A, H> {
    api: A,
    host: H,
    state: RefCell<ControllerState>,
    listener: Box<dyn Fn(Projection)>,
}

impl<A: StudioApi, H: HostEnvironment> DashboardController<A, H> {
    pub fn new(api: A, host: H, listener: impl Fn(Projection) + 'static) -> Self {
        Self {
            api,
            host,
            state: RefCell::new(ControllerState::default()),
            listener: Box::new(listener),
        }
    }

    /// Run the session gate, then (on success) the initial listing load.
    ///
    /// Called once per controller lifetime, when the page mounts. A
    /// failed session check navigates to the login entry point and does
    /// not retry; the listing is never fetched in that case.
    pub async fn start(&self) {
        match self.check_session().await {
            Ok(user) => {
                self.state.borrow_mut().session = Some(user);
                self.emit();
                self.load_listing().await;
            }
            Err(err) => {
                log::warn!("{}", err);
                self.host.navigate(LOGIN_PATH);
            }
        }
    }

    /// Explicitly re-fetch the design listing.
    ///
    /// No-op without an established session; the automatic post-gate
    /// load is the only other trigger.
    pub async fn refresh_listing(&self) {
        if self.state.borrow().session.is_none() {
            log::debug!("refresh rejected: no session");
            return;
        }
        self.load_listing().await;
    }

    /// End the session. Single-flight; completion always clears local
    /// state and navigates to the login entry point, even if the
    /// server-side call failed.
    pub async fn logout(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.pending.logout {
                log::debug!("logout already in flight");
                return;
            }
            state.pending.logout = true;
        }
        self.emit();

        if let Err(source) = self.api.logout().await {
            let err = ControllerError::Action {
                kind: ActionKind::Logout,
                source,
            };
            log::warn!("{}", err);
        }

        {
            let mut state = self.state.borrow_mut();
            state.pending.logout = false;
            state.session = None;
            state.designs.clear();
            state.listing = ListingPhase::NotRequested;
        }
        self.emit();
        self.host.navigate(LOGIN_PATH);
    }

    /// Email a rendered design as a PDF. Single-flight; asks the host
    /// for the destination address first, and a cancelled or empty
    /// reply aborts before any network traffic.
    pub async fn email_render(&self, design: &str) {
        if self.state.borrow().pending.email_pdf {
            log::debug!("email-pdf already in flight");
            return;
        }

        let email = match self.host.prompt(EMAIL_PROMPT).await {
            Some(address) if !address.is_empty() => address,
            _ => return,
        };

        {
            // The prompt suspended us; another trigger may have won the
            // flag in the meantime.
            let mut state = self.state.borrow_mut();
            if state.pending.email_pdf {
                log::debug!("email-pdf already in flight");
                return;
            }
            state.pending.email_pdf = true;
        }
        self.emit();

        let request = EmailPdfRequest {
            image: endpoints::result(design),
            products: Vec::new(),
            email,
        };
        let message = match self.api.email_pdf(&request).await {
            Ok(response) => response.status.unwrap_or_else(|| EMAIL_FALLBACK.to_string()),
            Err(source) => {
                let err = ControllerError::Action {
                    kind: ActionKind::EmailPdf,
                    source,
                };
                log::warn!("{}", err);
                EMAIL_FALLBACK.to_string()
            }
        };

        self.state.borrow_mut().pending.email_pdf = false;
        self.emit();
        self.host.show_message(&message);
    }

    /// Current read-only snapshot for the rendering layer.
    pub fn projection(&self) -> Projection {
        self.state.borrow().project()
    }

    async fn check_session(&self) -> Result<UserInfo, ControllerError> {
        self.api.me().await.map_err(ControllerError::Unauthenticated)
    }

    async fn load_listing(&self) {
        {
            let mut state = self.state.borrow_mut();
            // The gate's ordering guarantee makes a session-less load
            // unreachable from public entry points.
            debug_assert!(state.session.is_some(), "listing load without session");
            if state.session.is_none() {
                log::error!("listing load attempted without session");
                return;
            }
            if state.listing == ListingPhase::Loading {
                log::debug!("listing fetch already in flight");
                return;
            }
            state.listing = ListingPhase::Loading;
        }
        self.emit();

        let result = self.api.dashboard().await;
        {
            let mut state = self.state.borrow_mut();
            match result {
                Ok(response) => {
                    state.designs = response.designs;
                    state.listing = ListingPhase::Loaded;
                }
                Err(source) => {
                    let err = ControllerError::Load(source);
                    log::warn!("{}", err);
                    state.designs.clear();
                    state.listing = ListingPhase::Failed;
                }
            }
        }
        self.emit();
    }

    fn emit(&self) {
        let snapshot = self.state.borrow().project();
        (self.listener)(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ApiError, DashboardResponse, EmailPdfResponse};
    use std::rc::Rc;

    /// Everything the fakes observed, shared between the test body and
    /// the ports the controller owns.
    #[derive(Default)]
    struct Recorder {
        api_calls: RefCell<Vec<&'static str>>,
        email_requests: RefCell<Vec<EmailPdfRequest>>,
        prompts: RefCell<Vec<String>>,
        messages: RefCell<Vec<String>>,
        navigations: RefCell<Vec<String>>,
    }

    impl Recorder {
        fn api_call_count(&self, name: &str) -> usize {
            self.api_calls
                .borrow()
                .iter()
                .filter(|c| **c == name)
                .count()
        }
    }

    struct FakeApi {
        recorder: Rc<Recorder>,
        me: Result<UserInfo, ApiError>,
        dashboard: Result<DashboardResponse, ApiError>,
        logout: Result<(), ApiError>,
        email_pdf: Result<EmailPdfResponse, ApiError>,
    }

    impl FakeApi {
        fn new(recorder: Rc<Recorder>) -> Self {
            Self {
                recorder,
                me: Ok(user("u1")),
                dashboard: Ok(DashboardResponse {
                    designs: vec!["a.png".to_string(), "b.png".to_string()],
                }),
                logout: Ok(()),
                email_pdf: Ok(EmailPdfResponse::default()),
            }
        }
    }

    impl StudioApi for FakeApi {
        async fn me(&self) -> Result<UserInfo, ApiError> {
            self.recorder.api_calls.borrow_mut().push("me");
            tokio::task::yield_now().await;
            self.me.clone()
        }

        async fn dashboard(&self) -> Result<DashboardResponse, ApiError> {
            self.recorder.api_calls.borrow_mut().push("dashboard");
            tokio::task::yield_now().await;
            self.dashboard.clone()
        }

        async fn logout(&self) -> Result<(), ApiError> {
            self.recorder.api_calls.borrow_mut().push("logout");
            tokio::task::yield_now().await;
            self.logout.clone()
        }

        async fn email_pdf(
            &self,
            request: &EmailPdfRequest,
        ) -> Result<EmailPdfResponse, ApiError> {
            self.recorder.api_calls.borrow_mut().push("email_pdf");
            self.recorder
                .email_requests
                .borrow_mut()
                .push(request.clone());
            tokio::task::yield_now().await;
            self.email_pdf.clone()
        }
    }

    struct FakeHost {
        recorder: Rc<Recorder>,
        prompt_reply: Option<String>,
    }

    impl HostEnvironment for FakeHost {
        async fn prompt(&self, message: &str) -> Option<String> {
            self.recorder.prompts.borrow_mut().push(message.to_string());
            tokio::task::yield_now().await;
            self.prompt_reply.clone()
        }

        fn show_message(&self, message: &str) {
            self.recorder.messages.borrow_mut().push(message.to_string());
        }

        fn navigate(&self, path: &str) {
            self.recorder.navigations.borrow_mut().push(path.to_string());
        }
    }

    fn user(id: &str) -> UserInfo {
        UserInfo {
            id: id.to_string(),
            email: None,
            name: None,
        }
    }

    fn setup() -> (Rc<Recorder>, FakeApi, FakeHost) {
        let recorder = Rc::new(Recorder::default());
        let api = FakeApi::new(recorder.clone());
        let host = FakeHost {
            recorder: recorder.clone(),
            prompt_reply: Some("x@y.com".to_string()),
        };
        (recorder, api, host)
    }

    fn controller(api: FakeApi, host: FakeHost) -> DashboardController<FakeApi, FakeHost> {
        DashboardController::new(api, host, |_| {})
    }

    #[tokio::test]
    async fn test_unauthenticated_navigates_to_login_once() {
        let (recorder, mut api, host) = setup();
        api.me = Err(ApiError::Auth("unauthorized".to_string()));
        let controller = controller(api, host);

        controller.start().await;

        assert_eq!(*recorder.navigations.borrow(), vec![LOGIN_PATH]);
        assert_eq!(*recorder.api_calls.borrow(), vec!["me"]);
        assert!(controller.projection().user.is_none());
    }

    #[tokio::test]
    async fn test_successful_session_loads_listing_automatically() {
        let (recorder, api, host) = setup();
        let controller = controller(api, host);

        controller.start().await;

        assert_eq!(*recorder.api_calls.borrow(), vec!["me", "dashboard"]);
        assert!(recorder.navigations.borrow().is_empty());

        let projection = controller.projection();
        assert_eq!(projection.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
        assert_eq!(projection.designs, vec!["a.png", "b.png"]);
        assert_eq!(projection.listing, ListingPhase::Loaded);
    }

    #[tokio::test]
    async fn test_empty_listing_is_not_an_error() {
        let (_recorder, mut api, host) = setup();
        api.dashboard = Ok(DashboardResponse::default());
        let controller = controller(api, host);

        controller.start().await;

        let projection = controller.projection();
        assert!(projection.designs.is_empty());
        assert_eq!(projection.listing, ListingPhase::Loaded);
    }

    #[tokio::test]
    async fn test_failed_listing_degrades_without_navigation() {
        let (recorder, mut api, host) = setup();
        api.dashboard = Err(ApiError::Server {
            status: 500,
            message: "boom".to_string(),
        });
        let controller = controller(api, host);

        controller.start().await;

        let projection = controller.projection();
        assert!(projection.user.is_some());
        assert!(projection.designs.is_empty());
        assert_eq!(projection.listing, ListingPhase::Failed);
        assert!(recorder.navigations.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_refresh_reloads_listing() {
        let (recorder, api, host) = setup();
        let controller = controller(api, host);

        controller.start().await;
        controller.refresh_listing().await;

        assert_eq!(recorder.api_call_count("dashboard"), 2);
    }

    #[tokio::test]
    async fn test_refresh_without_session_is_rejected() {
        let (recorder, mut api, host) = setup();
        api.me = Err(ApiError::Auth("unauthorized".to_string()));
        let controller = controller(api, host);

        controller.start().await;
        controller.refresh_listing().await;

        assert_eq!(recorder.api_call_count("dashboard"), 0);
    }

    #[tokio::test]
    async fn test_concurrent_refresh_is_single_flight() {
        let (recorder, api, host) = setup();
        let controller = controller(api, host);
        controller.start().await;

        tokio::join!(controller.refresh_listing(), controller.refresh_listing());

        // One from start, one from the pair of refreshes.
        assert_eq!(recorder.api_call_count("dashboard"), 2);
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_navigates() {
        let (recorder, api, host) = setup();
        let controller = controller(api, host);
        controller.start().await;

        controller.logout().await;

        let projection = controller.projection();
        assert!(projection.user.is_none());
        assert!(projection.designs.is_empty());
        assert_eq!(projection.listing, ListingPhase::NotRequested);
        assert_eq!(*recorder.navigations.borrow(), vec![LOGIN_PATH]);
    }

    #[tokio::test]
    async fn test_logout_proceeds_on_server_error() {
        let (recorder, mut api, host) = setup();
        api.logout = Err(ApiError::Network("offline".to_string()));
        let controller = controller(api, host);
        controller.start().await;

        controller.logout().await;

        assert!(controller.projection().user.is_none());
        assert_eq!(*recorder.navigations.borrow(), vec![LOGIN_PATH]);
    }

    #[tokio::test]
    async fn test_logout_is_single_flight() {
        let (recorder, api, host) = setup();
        let controller = controller(api, host);
        controller.start().await;

        tokio::join!(controller.logout(), controller.logout());

        assert_eq!(recorder.api_call_count("logout"), 1);
        assert_eq!(*recorder.navigations.borrow(), vec![LOGIN_PATH]);
    }

    #[tokio::test]
    async fn test_cancelled_prompt_sends_nothing() {
        let (recorder, api, mut host) = setup();
        host.prompt_reply = None;
        let controller = controller(api, host);
        controller.start().await;

        controller.email_render("a.png").await;

        assert_eq!(recorder.api_call_count("email_pdf"), 0);
        assert!(recorder.messages.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_empty_prompt_sends_nothing() {
        let (recorder, api, mut host) = setup();
        host.prompt_reply = Some(String::new());
        let controller = controller(api, host);
        controller.start().await;

        controller.email_render("a.png").await;

        assert_eq!(recorder.api_call_count("email_pdf"), 0);
        assert!(recorder.messages.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_email_render_posts_asset_and_shows_status() {
        let (recorder, mut api, host) = setup();
        api.email_pdf = Ok(EmailPdfResponse {
            status: Some("PDF on its way to x@y.com".to_string()),
        });
        let controller = controller(api, host);
        controller.start().await;

        controller.email_render("a.png").await;

        let requests = recorder.email_requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].image, "/results/a.png");
        assert!(requests[0].products.is_empty());
        assert_eq!(requests[0].email, "x@y.com");
        assert_eq!(
            *recorder.messages.borrow(),
            vec!["PDF on its way to x@y.com"]
        );
    }

    #[tokio::test]
    async fn test_email_render_falls_back_to_generic_confirmation() {
        let (recorder, api, host) = setup();
        let controller = controller(api, host);
        controller.start().await;

        controller.email_render("b.png").await;

        assert_eq!(*recorder.messages.borrow(), vec![EMAIL_FALLBACK]);
    }

    #[tokio::test]
    async fn test_email_transport_failure_still_reports() {
        let (recorder, mut api, host) = setup();
        api.email_pdf = Err(ApiError::Network("offline".to_string()));
        let controller = controller(api, host);
        controller.start().await;

        controller.email_render("a.png").await;

        assert_eq!(*recorder.messages.borrow(), vec![EMAIL_FALLBACK]);
        assert!(!controller.projection().email_pending);
    }

    #[tokio::test]
    async fn test_email_is_single_flight() {
        let (recorder, api, host) = setup();
        let controller = controller(api, host);
        controller.start().await;

        tokio::join!(
            controller.email_render("a.png"),
            controller.email_render("a.png")
        );

        assert_eq!(recorder.api_call_count("email_pdf"), 1);
        assert_eq!(recorder.messages.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_email_does_not_require_listing_success() {
        // The email action is independent of the listing outcome.
        let (recorder, mut api, host) = setup();
        api.dashboard = Err(ApiError::Server {
            status: 500,
            message: "boom".to_string(),
        });
        let controller = controller(api, host);
        controller.start().await;

        controller.email_render("a.png").await;

        assert_eq!(recorder.api_call_count("email_pdf"), 1);
    }

    #[tokio::test]
    async fn test_projection_snapshots_are_consistent() {
        let recorder = Rc::new(Recorder::default());
        let api = FakeApi::new(recorder.clone());
        let host = FakeHost {
            recorder: recorder.clone(),
            prompt_reply: Some("x@y.com".to_string()),
        };

        let snapshots: Rc<RefCell<Vec<Projection>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = snapshots.clone();
        let controller =
            DashboardController::new(api, host, move |p| sink.borrow_mut().push(p));

        controller.start().await;

        let snapshots = snapshots.borrow();
        assert!(!snapshots.is_empty());
        for snapshot in snapshots.iter() {
            // The listing never outruns the session.
            if snapshot.user.is_none() {
                assert!(snapshot.designs.is_empty());
                assert_eq!(snapshot.listing, ListingPhase::NotRequested);
            }
        }
        assert_eq!(snapshots.last(), Some(&controller.projection()));
    }

    #[tokio::test]
    async fn test_prompt_text_matches_product_copy() {
        let (recorder, api, host) = setup();
        let controller = controller(api, host);
        controller.start().await;

        controller.email_render("a.png").await;

        assert_eq!(*recorder.prompts.borrow(), vec![EMAIL_PROMPT]);
    }
}
