//!
//! Module containing the definition of the keypair container
//!

use crate::{
    Components, Error, KeySize, PublicKey, Result,
    arithmetic::{Arithmetic, BoxedArithmetic},
};
use core::{cmp::Ordering, fmt};
use crypto_bigint::BoxedUint;
use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

/// DSA keypair: the private component x together with its public component y = g^x mod p.
///
/// `1 <= x <= q - 1` and `y == g^x mod p` hold for as long as the value exists.
/// The private component is zeroized on drop and never printed.
#[derive(Clone)]
#[must_use]
pub struct KeyPair {
    /// Public key
    public_key: PublicKey,

    /// Private component x
    x: Zeroizing<BoxedUint>,
}

impl KeyPair {
    /// Generate a new DSA keypair from existing common components (FIPS 186-4, Appendix B.1.2)
    ///
    /// Fails with [`Error::Rng`] if `rng` fails to provide randomness.
    #[inline]
    pub fn generate<R: CryptoRngCore + ?Sized>(rng: &mut R, components: &Components) -> Result<Self> {
        crate::generate::keypair(rng, components)
    }

    /// Generate new common components of the given size, then a keypair using them
    ///
    /// Nothing is returned unless both steps succeed.
    pub fn generate_with_new_params<R: CryptoRngCore + ?Sized>(
        rng: &mut R,
        key_size: KeySize,
    ) -> Result<(Components, Self)> {
        let components = Components::generate(rng, key_size)?;
        let keypair = Self::generate(rng, &components)?;

        Ok((components, keypair))
    }

    /// Construct a keypair from the common components and both key components
    ///
    /// Fails with [`Error::InvalidArgument`] unless `0 < x < q` and `y == g^x mod p`.
    pub fn from_components(components: Components, x: BoxedUint, y: BoxedUint) -> Result<Self> {
        let arith = BoxedArithmetic;
        let x = Zeroizing::new(x);

        if arith.is_zero(&x) || arith.compare(&x, components.q()) != Ordering::Less {
            return Err(Error::InvalidArgument);
        }

        let expected_y = arith.mod_exp(components.g(), &x, components.p())?;
        if arith.compare(&expected_y, &y) != Ordering::Equal {
            return Err(Error::InvalidArgument);
        }

        Ok(Self::new_unchecked(components, x, y))
    }

    /// Assemble a keypair whose components were just generated
    pub(crate) fn new_unchecked(components: Components, x: Zeroizing<BoxedUint>, y: BoxedUint) -> Self {
        Self {
            public_key: PublicKey::new_unchecked(components, y),
            x,
        }
    }

    /// DSA common components
    pub const fn components(&self) -> &Components {
        self.public_key.components()
    }

    /// DSA public key
    pub const fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// DSA public component
    #[must_use]
    pub const fn y(&self) -> &BoxedUint {
        self.public_key.y()
    }

    /// DSA private component
    ///
    /// If you decide to clone this value, please consider using [`Zeroize::zeroize`](::zeroize::Zeroize::zeroize()) to zero out the memory after you're done using the clone
    #[must_use]
    pub fn x(&self) -> &BoxedUint {
        &self.x
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::KeyPair;
    use crate::{Components, Error};
    use alloc::format;
    use crypto_bigint::BoxedUint;

    fn components() -> Components {
        Components::from_components(
            BoxedUint::from(503u64),
            BoxedUint::from(251u64),
            BoxedUint::from(4u64),
        )
        .unwrap()
    }

    fn uint(value: u64) -> BoxedUint {
        BoxedUint::from(value)
    }

    #[test]
    fn imports_consistent_components() {
        let keypair = KeyPair::from_components(components(), uint(17), uint(257)).unwrap();
        assert_eq!(*keypair.x(), uint(17));
        assert_eq!(*keypair.y(), uint(257));
        assert_eq!(keypair.public_key().y(), keypair.y());
        assert_eq!(keypair.components(), &components());
    }

    #[test]
    fn rejects_private_component_out_of_range() {
        // g^0 = 1, g^q = 1
        assert_eq!(
            KeyPair::from_components(components(), uint(0), uint(1)).unwrap_err(),
            Error::InvalidArgument
        );
        assert_eq!(
            KeyPair::from_components(components(), uint(251), uint(1)).unwrap_err(),
            Error::InvalidArgument
        );
    }

    #[test]
    fn rejects_mismatching_public_component() {
        assert_eq!(
            KeyPair::from_components(components(), uint(17), uint(258)).unwrap_err(),
            Error::InvalidArgument
        );
    }

    #[test]
    fn debug_output_hides_private_component() {
        // x = 0xFA, no other component contains these digits
        let keypair = KeyPair::from_components(components(), uint(250), uint(126)).unwrap();
        let debug = format!("{keypair:?}");
        assert!(debug.contains("KeyPair"));
        assert!(!debug.to_uppercase().contains("FA"));
    }
}
