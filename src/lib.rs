//!
//! Marine fender design core.
//!
//! - [berthing] - kinetic energy of a berthing vessel,
//! - [fender] - SCN, MV and pneumatic fender performance under the design conditions,
//! - [catalog] - rated capacities of the catalog fenders,
//! - [selection] - the smallest catalog fender absorbing the design energy.
//
pub mod berthing;
pub mod catalog;
mod error;
pub mod fender;
pub mod math;
pub mod selection;
//
pub use error::Error;
