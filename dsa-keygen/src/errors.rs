//!
//! Error type returned by key and parameter generation
//!

/// Result type with the `dsa-keygen` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
///
/// None of the variants carry key material.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Domain parameters, key sizes or key components are missing or malformed
    InvalidArgument,

    /// The random number generator failed to provide randomness
    Rng,

    /// The arithmetic backend reported an internal inconsistency
    Arithmetic,
}

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidArgument => write!(f, "dsa: invalid or missing argument"),
            Error::Rng => write!(f, "dsa: random number generator failure"),
            Error::Arithmetic => write!(f, "dsa: arithmetic backend failure"),
        }
    }
}
