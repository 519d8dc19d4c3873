//! Controller state aggregate and its read-only projection

use shared::UserInfo;

/// Where the design listing stands.
///
/// `Loaded` with an empty listing and `Failed` both render as "no
/// designs" but remain distinct facts. `Loading` doubles as the
/// single-flight guard for the fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingPhase {
    #[default]
    NotRequested,
    Loading,
    Loaded,
    Failed,
}

/// Single-flight flags, one per side-effecting action kind.
#[derive(Debug, Default)]
pub(crate) struct PendingActions {
    pub logout: bool,
    pub email_pdf: bool,
}

/// The one shared mutable aggregate. Mutated only by the controller,
/// always within a single borrow scope so observers never see a
/// half-updated combination.
#[derive(Debug, Default)]
pub(crate) struct ControllerState {
    pub session: Option<UserInfo>,
    pub designs: Vec<String>,
    pub listing: ListingPhase,
    pub pending: PendingActions,
}

/// Read-only snapshot handed to the rendering layer.
///
/// Recomputed synchronously after every state-mutating event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Projection {
    /// Present iff the session check succeeded and logout has not
    /// completed since.
    pub user: Option<UserInfo>,
    /// Saved designs in fetch order; empty until loaded.
    pub designs: Vec<String>,
    pub listing: ListingPhase,
    pub logout_pending: bool,
    pub email_pending: bool,
}

impl ControllerState {
    pub fn project(&self) -> Projection {
        Projection {
            user: self.session.clone(),
            designs: self.designs.clone(),
            listing: self.listing,
            logout_pending: self.pending.logout,
            email_pending: self.pending.email_pdf,
        }
    }
}
