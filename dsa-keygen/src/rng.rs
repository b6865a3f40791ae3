//!
//! Randomness source used for key generation
//!

use crate::{Error, Result};
use crypto_bigint::{BoxedUint, RandomBits};
use rand_core::CryptoRngCore;

/// A cryptographically secure source of uniformly random integers.
///
/// Implemented for every [`CryptoRngCore`] producing [`BoxedUint`]s. The source is always owned by
/// the caller and only borrowed for the duration of a call.
pub trait Csprng<U> {
    /// Draw an integer of `bit_length` fresh uniformly random bits
    ///
    /// Fails with [`Error::Rng`] if no randomness could be provided.
    fn next_bits(&mut self, bit_length: u32) -> Result<U>;
}

impl<R: CryptoRngCore + ?Sized> Csprng<BoxedUint> for R {
    fn next_bits(&mut self, bit_length: u32) -> Result<BoxedUint> {
        let mut rng = self;
        BoxedUint::try_random_bits(&mut rng, bit_length).map_err(|_| Error::Rng)
    }
}
