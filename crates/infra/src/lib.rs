//! `ideaboard-infra` — storage backends for the domain crates.

pub mod slot;

pub use slot::FileSlot;
