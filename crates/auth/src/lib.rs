//! `ideaboard-auth` — session identity boundary.
//!
//! Mock authentication behind a provider trait, plus the store that keeps the
//! single current identity and mirrors it into a durable slot. This crate
//! does no file IO itself; slot backends live in `ideaboard-infra`.

pub mod credentials;
pub mod error;
pub mod identity;
pub mod provider;
pub mod slot;
pub mod store;

pub use credentials::{validate_login, validate_signup};
pub use error::{AuthError, SlotError};
pub use identity::Identity;
pub use provider::{IdentityProvider, MockIdentityProvider};
pub use slot::{InMemorySlot, SessionSlot};
pub use store::{IdentityStore, SessionChange};
