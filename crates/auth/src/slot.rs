//! Durable single-value slot holding the serialized session identity.

use std::sync::{Arc, RwLock};

use crate::error::SlotError;

/// One named storage location, either empty or holding a string.
pub trait SessionSlot: Send + Sync {
    fn read(&self) -> Result<Option<String>, SlotError>;
    fn write(&self, value: &str) -> Result<(), SlotError>;
    /// Empty the slot. Clearing an empty slot succeeds.
    fn clear(&self) -> Result<(), SlotError>;
}

impl<S> SessionSlot for Arc<S>
where
    S: SessionSlot + ?Sized,
{
    fn read(&self) -> Result<Option<String>, SlotError> {
        (**self).read()
    }

    fn write(&self, value: &str) -> Result<(), SlotError> {
        (**self).write(value)
    }

    fn clear(&self) -> Result<(), SlotError> {
        (**self).clear()
    }
}

/// In-memory slot for tests/dev.
///
/// Clones share the same cell, so handing a clone to a second store
/// simulates a process restart.
#[derive(Debug, Clone, Default)]
pub struct InMemorySlot {
    cell: Arc<RwLock<Option<String>>>,
}

impl InMemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot that already holds `value`.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            cell: Arc::new(RwLock::new(Some(value.into()))),
        }
    }
}

impl SessionSlot for InMemorySlot {
    fn read(&self) -> Result<Option<String>, SlotError> {
        let cell = self
            .cell
            .read()
            .map_err(|_| SlotError::Unavailable("lock poisoned".to_string()))?;
        Ok(cell.clone())
    }

    fn write(&self, value: &str) -> Result<(), SlotError> {
        let mut cell = self
            .cell
            .write()
            .map_err(|_| SlotError::Unavailable("lock poisoned".to_string()))?;
        *cell = Some(value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SlotError> {
        let mut cell = self
            .cell
            .write()
            .map_err(|_| SlotError::Unavailable("lock poisoned".to_string()))?;
        *cell = None;
        Ok(())
    }
}
