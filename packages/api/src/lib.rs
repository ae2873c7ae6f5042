//! Identity-provider boundary.
//!
//! Everything the rest of the app knows about sign-in lives here: the
//! [`Session`] the provider hands back, the [`SessionHub`] that fans session
//! changes out to observers, and the [`AuthClient`] that talks to the
//! provider's REST endpoint. The UI never mutates session state directly —
//! it subscribes to the hub and reacts.

mod client;
mod hub;
mod session;

pub use client::{AuthClient, AuthConfig};
pub use hub::{SessionHub, Subscription};
pub use session::{AuthError, Session};
