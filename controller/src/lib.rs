//! Session-gated dashboard controller
//!
//! The state machine behind the design dashboard: verifies the session,
//! loads the saved-design listing once the session is established, and
//! drives the user-initiated actions (logout, email-a-design-as-PDF).
//! All browser concerns sit behind injected ports, the API transport
//! ([`shared::StudioApi`]) and the host environment
//! ([`HostEnvironment`]), so the whole flow is testable natively with
//! scripted doubles.

mod controller;
mod error;
mod host;
mod state;

pub use controller::{DashboardController, LOGIN_PATH};
pub use error::{ActionKind, ControllerError};
pub use host::HostEnvironment;
pub use state::{ListingPhase, Projection};
