//! Entity trait: a record addressed by a stable key.

/// Anything stored in a keyed collection.
///
/// The key must not change for as long as the entity sits in a collection,
/// since the collection indexes it by `id()` once, at insertion.
pub trait Entity {
    /// Key the collection indexes by.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
