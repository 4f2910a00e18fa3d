//! Entity trait: identity + continuity across state changes.

/// A record whose identity survives whole-record replacement.
///
/// Ideas keep their id across `update`; identities keep theirs across a
/// save/restore of the session slot.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
