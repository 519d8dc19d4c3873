//! Error types for the dashboard controller

use shared::ApiError;

/// User-initiated actions dispatched against the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Logout,
    EmailPdf,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Logout => write!(f, "logout"),
            ActionKind::EmailPdf => write!(f, "email-pdf"),
        }
    }
}

/// Failures the controller absorbs into state transitions.
///
/// None of these propagate past the controller: `Unauthenticated`
/// resolves to a navigation away, `Load` degrades to an empty listing,
/// and `Action` surfaces (at most) a user-visible message.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("session check failed: {0}")]
    Unauthenticated(#[source] ApiError),

    #[error("design listing fetch failed: {0}")]
    Load(#[source] ApiError),

    #[error("{kind} request failed: {source}")]
    Action {
        kind: ActionKind,
        #[source]
        source: ApiError,
    },
}
