use crate::{Components, KeyPair, Result, arithmetic::BoxedArithmetic};
use crypto_bigint::BoxedUint;
use crypto_primes::generate_prime_with_rng;
use rand_core::CryptoRngCore;

mod components;
pub(crate) mod keypair;

pub(crate) use self::components::common as common_components;

/// Generate a keypair over existing components using the [`BoxedUint`] backend
#[inline]
pub(crate) fn keypair<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    components: &Components,
) -> Result<KeyPair> {
    let (x, y) = keypair::generate_keypair(
        &BoxedArithmetic,
        rng,
        &**components.p(),
        &**components.q(),
        &**components.g(),
    )?;

    Ok(KeyPair::new_unchecked(components.clone(), x, y))
}

/// Generate a prime number using a cryptographically secure pseudo-random number generator
///
/// This wrapper function mainly exists to enforce the [`CryptoRngCore`] requirement (I might otherwise forget it)
#[inline]
fn generate_prime<R: CryptoRngCore + ?Sized>(bit_length: u32, rng: &mut R) -> BoxedUint {
    let mut rng = rng;
    generate_prime_with_rng(&mut rng, bit_length)
}
