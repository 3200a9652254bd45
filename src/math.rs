//!
//! Numeric helpers shared by the berthing and fender calculations.
//
pub mod interpolation;
//
pub(crate) type OwnedSet<T> = std::sync::Arc<[T]>;
