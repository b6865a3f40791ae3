//!
//! Module containing the definition of the public key container
//!

use crate::{
    Components, Error, Result,
    arithmetic::{Arithmetic, BoxedArithmetic},
    two,
};
use core::cmp::Ordering;
use crypto_bigint::BoxedUint;

/// DSA public key: the common components and the public component y
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct PublicKey {
    /// common components
    components: Components,

    /// Public component y
    y: BoxedUint,
}

impl PublicKey {
    /// Construct a new public key from the common components and the public component
    ///
    /// `y` has to lie in `[2, p - 1]` and be a member of the subgroup of order q.
    pub fn from_components(components: Components, y: BoxedUint) -> Result<Self> {
        let arith = BoxedArithmetic;

        if arith.compare(&y, &two()) == Ordering::Less
            || arith.compare(&y, components.p()) != Ordering::Less
        {
            return Err(Error::InvalidArgument);
        }

        let order_check = arith.mod_exp(&y, components.q(), components.p())?;
        if arith.compare(&order_check, &BoxedUint::one()) != Ordering::Equal {
            return Err(Error::InvalidArgument);
        }

        Ok(Self { components, y })
    }

    /// Wrap a public component already known to be valid
    pub(crate) fn new_unchecked(components: Components, y: BoxedUint) -> Self {
        Self { components, y }
    }

    /// DSA common components
    pub const fn components(&self) -> &Components {
        &self.components
    }

    /// DSA public component
    #[must_use]
    pub const fn y(&self) -> &BoxedUint {
        &self.y
    }
}
