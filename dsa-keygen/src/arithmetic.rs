//!
//! Arbitrary-precision arithmetic backend
//!

use crate::{Error, Result};
use core::cmp::Ordering;
use crypto_bigint::{
    BoxedUint, NonZero, Odd,
    modular::{BoxedMontyForm, BoxedMontyParams},
};
use zeroize::Zeroize;

/// The integer operations key generation relies on.
///
/// Any big integer implementation providing these can drive the generator, test doubles included.
pub trait Arithmetic {
    /// Arbitrary-precision unsigned integer
    type Uint: Clone + Zeroize;

    /// Compare the values of `a` and `b`, regardless of their precision
    fn compare(&self, a: &Self::Uint, b: &Self::Uint) -> Ordering;

    /// Number of significant bits in `a` (zero for zero)
    fn bit_length(&self, a: &Self::Uint) -> u32;

    /// Compute `base^exponent mod modulus`
    ///
    /// Must run in constant time with respect to `exponent`.
    fn mod_exp(
        &self,
        base: &Self::Uint,
        exponent: &Self::Uint,
        modulus: &Self::Uint,
    ) -> Result<Self::Uint>;

    /// Whether `a` is zero
    fn is_zero(&self, a: &Self::Uint) -> bool {
        self.bit_length(a) == 0
    }
}

/// [`Arithmetic`] backend over [`BoxedUint`] using Montgomery exponentiation
#[derive(Clone, Copy, Debug, Default)]
pub struct BoxedArithmetic;

impl Arithmetic for BoxedArithmetic {
    type Uint = BoxedUint;

    fn compare(&self, a: &BoxedUint, b: &BoxedUint) -> Ordering {
        let precision = a.bits_precision().max(b.bits_precision());
        resize(a, precision).cmp(&resize(b, precision))
    }

    fn bit_length(&self, a: &BoxedUint) -> u32 {
        a.bits()
    }

    fn mod_exp(
        &self,
        base: &BoxedUint,
        exponent: &BoxedUint,
        modulus: &BoxedUint,
    ) -> Result<BoxedUint> {
        // Montgomery form needs an odd modulus; 1 would make every result 0
        if modulus.bits() < 2 {
            return Err(Error::Arithmetic);
        }
        let modulus: Odd<BoxedUint> =
            Option::from(Odd::new(modulus.clone())).ok_or(Error::Arithmetic)?;
        let precision = modulus.bits_precision();

        // Bring the base below the modulus, at the modulus' precision
        let wide = base.bits_precision().max(precision);
        let divisor: NonZero<BoxedUint> =
            Option::from(NonZero::new(resize(&modulus, wide))).ok_or(Error::Arithmetic)?;
        let (_, reduced) = resize(base, wide).div_rem(&divisor);
        let reduced = resize(&reduced, precision);

        let params = BoxedMontyParams::new(modulus);
        let form = BoxedMontyForm::new(reduced, params);

        Ok(form.pow(exponent).retrieve())
    }
}

/// Change the precision of `x`, which must fit into `bits_precision`
pub(crate) fn resize(x: &BoxedUint, bits_precision: u32) -> BoxedUint {
    match x.bits_precision().cmp(&bits_precision) {
        Ordering::Less => x.widen(bits_precision),
        Ordering::Greater => x.shorten(bits_precision),
        Ordering::Equal => x.clone(),
    }
}
