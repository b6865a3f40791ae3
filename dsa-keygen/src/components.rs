//!
//! Module containing the definition of the common components container
//!

use crate::{
    Error, KeySize, Result,
    arithmetic::{Arithmetic, BoxedArithmetic, resize},
    two,
};
use core::cmp::Ordering;
use crypto_bigint::{BoxedUint, NonZero, Odd};
use rand_core::CryptoRngCore;

/// The common components of a DSA keypair
///
/// (the prime p, quotient q and generator g)
///
/// Components are immutable once constructed and can be shared by any number of keys.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct Components {
    /// Prime p
    p: Odd<BoxedUint>,

    /// Quotient q
    q: NonZero<BoxedUint>,

    /// Generator g
    g: NonZero<BoxedUint>,
}

impl Components {
    /// Construct the common components container from its inner values (p, q and g)
    ///
    /// Fails with [`Error::InvalidArgument`] unless `p` is odd, `2 <= q < p`, `q` divides `p - 1`
    /// and has fewer bits than `p`, `1 < g < p` and `g^q mod p == 1`.
    /// Primality of `p` and `q` is not checked.
    pub fn from_components(p: BoxedUint, q: BoxedUint, g: BoxedUint) -> Result<Self> {
        let arith = BoxedArithmetic;

        let p: Odd<BoxedUint> = Option::from(Odd::new(p)).ok_or(Error::InvalidArgument)?;
        let q: NonZero<BoxedUint> = Option::from(NonZero::new(q)).ok_or(Error::InvalidArgument)?;
        let g: NonZero<BoxedUint> = Option::from(NonZero::new(g)).ok_or(Error::InvalidArgument)?;

        if arith.compare(&q, &two()) == Ordering::Less
            || arith.compare(&q, &p) != Ordering::Less
            || arith.bit_length(&q) >= arith.bit_length(&p)
            || arith.compare(&g, &BoxedUint::one()) != Ordering::Greater
            || arith.compare(&g, &p) != Ordering::Less
        {
            return Err(Error::InvalidArgument);
        }

        // q | p - 1
        let precision = p.bits_precision().max(q.bits_precision());
        let p_minus_one = resize(&p, precision).wrapping_sub(&BoxedUint::one_with_precision(precision));
        let divisor: NonZero<BoxedUint> =
            Option::from(NonZero::new(resize(&q, precision))).ok_or(Error::InvalidArgument)?;
        let (_, rem) = p_minus_one.div_rem(&divisor);
        if !arith.is_zero(&rem) {
            return Err(Error::InvalidArgument);
        }

        // g generates the subgroup of order q
        let order_check = arith.mod_exp(&g, &q, &p)?;
        if arith.compare(&order_check, &BoxedUint::one()) != Ordering::Equal {
            return Err(Error::InvalidArgument);
        }

        Ok(Self { p, q, g })
    }

    /// Generate a new pair of common components
    ///
    /// Please only use the parameter sizes defined by NIST.
    /// We allow you to plug in any numbers you want but just because you can doesn't mean you should!
    pub fn generate<R: CryptoRngCore + ?Sized>(rng: &mut R, key_size: KeySize) -> Result<Self> {
        let (p, q, g) = crate::generate::common_components(rng, key_size)?;
        Self::from_components(p, q, g)
    }

    /// DSA prime p
    #[must_use]
    pub const fn p(&self) -> &Odd<BoxedUint> {
        &self.p
    }

    /// DSA quotient q
    #[must_use]
    pub const fn q(&self) -> &NonZero<BoxedUint> {
        &self.q
    }

    /// DSA generator g
    #[must_use]
    pub const fn g(&self) -> &NonZero<BoxedUint> {
        &self.g
    }
}
