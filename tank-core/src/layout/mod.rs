/// Shared-canvas placement of the two layers.
pub(crate) mod unify;
