//! Durable session slot backends.

pub mod file;

pub use file::FileSlot;
