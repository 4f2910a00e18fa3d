//! Ideas domain module: the idea registry and its dashboard aggregates.
//!
//! Everything here is in-memory and synchronous. Ideas are not persisted;
//! the registry lives as long as the process.

pub mod idea;
pub mod reference;
pub mod registry;
pub mod stats;

pub use idea::{Idea, IdeaDraft, Status};
pub use reference::{ReferenceLists, sample_ideas};
pub use registry::{IdeaChange, IdeaRegistry, RegistrySnapshot};
pub use stats::{PersonTotals, StatusTotals, totals_by_status, totals_by_user};
