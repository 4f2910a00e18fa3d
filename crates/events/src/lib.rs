//! Change notification for the in-process stores.
//!
//! Stores publish a message after each effective mutation; presentation code
//! subscribes and re-reads snapshots instead of relying on framework reactivity.

pub mod bus;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
