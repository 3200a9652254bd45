//!
//! Errors of the fender design core.
//!
//! Each variant carries a message already prefixed by the debug id
//! of the component which detected the problem, so the caller can
//! branch on the kind and still show the full context:
//! ```
//! use fender_design::Error;
//! //
//! fn handle(result: Result<f64, Error>) {
//!     match result {
//!         Ok(energy) => println!("energy: {:.2}kNm", energy),
//!         Err(Error::UnknownMethod(why)) => println!("choose another method: {}", why),
//!         Err(Error::CatalogLookup(why)) => println!("choose another fender: {}", why),
//!         Err(err) => println!("{}", err),
//!     }
//! }
//! ```
//
///
/// Error kinds raised by calculations and catalog lookups.
#[derive(Clone, PartialEq)]
pub enum Error {
    ///
    /// Out-of-domain physical input,
    /// e. g. zero or negative depth, beam, draft, or tolerance outside [0, 1).
    Validation(String),
    ///
    /// Unsupported added-mass method or fender kind name.
    UnknownMethod(String),
    ///
    /// Identifier (size, grade, compound, pressure) absent from the catalog.
    CatalogLookup(String),
    ///
    /// Inverse trigonometric argument outside [-1, 1] or zero denominator.
    NumericDomain(String),
    ///
    /// Catalog source unreadable or inconsistent.
    Catalog(String),
}
//
//
impl Error {
    ///
    /// Returns the message without the kind.
    pub fn message(&self) -> &str {
        match self {
            Error::Validation(msg)
            | Error::UnknownMethod(msg)
            | Error::CatalogLookup(msg)
            | Error::NumericDomain(msg)
            | Error::Catalog(msg) => msg,
        }
    }
    ///
    /// Returns the name of the kind.
    fn kind(&self) -> &'static str {
        match self {
            Error::Validation(_) => "ValidationError",
            Error::UnknownMethod(_) => "UnknownMethodError",
            Error::CatalogLookup(_) => "CatalogLookupError",
            Error::NumericDomain(_) => "NumericDomainError",
            Error::Catalog(_) => "CatalogError",
        }
    }
}
//
//
impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.kind(), self.message())
    }
}
//
//
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind(), self.message())
    }
}
//
//
impl std::error::Error for Error {}
