//!
//! Generate DSA key components
//!

use crate::{
    Error, KeySize, Result,
    arithmetic::{Arithmetic, BoxedArithmetic, resize},
    generate::generate_prime,
    rng::Csprng,
};
use core::cmp::Ordering;
use crypto_bigint::{BoxedUint, NonZero};
use crypto_primes::is_prime_with_rng;
use rand_core::CryptoRngCore;

/// Candidates for p tried per q before drawing a new q
const P_CANDIDATES_PER_Q: usize = 4096;

/// Generate the common components p, q, and g
///
/// # Returns
///
/// Tuple of three `BoxedUint`s. Ordered like this `(p, q, g)`
pub(crate) fn common<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    KeySize { l, n }: KeySize,
) -> Result<(BoxedUint, BoxedUint, BoxedUint)> {
    let arith = BoxedArithmetic;
    let precision = BoxedUint::zero_with_precision(l).bits_precision();
    let one = BoxedUint::one_with_precision(precision);

    let (p, q) = 'gen_pq: loop {
        // crypto-primes panics on RNG failure, make sure the source still delivers first
        let _: BoxedUint = rng.next_bits(n)?;
        let q = generate_prime(n, rng);
        if q.bits() != n {
            continue;
        }

        // p = m - (m mod 2q) + 1 makes q a divisor of p - 1
        let wide_q = resize(&q, precision);
        let two_q: NonZero<BoxedUint> = Option::from(NonZero::new(wide_q.wrapping_add(&wide_q)))
            .ok_or(Error::Arithmetic)?;

        // Attempt to find a prime p which has a subgroup of the order q
        for _ in 0..P_CANDIDATES_PER_Q {
            let m: BoxedUint = rng.next_bits(l)?;
            if m.bits() != l {
                continue;
            }

            let m = resize(&m, precision);
            let (_, mr) = m.div_rem(&two_q);
            let p = m.wrapping_sub(&mr).wrapping_add(&one);

            if p.bits() == l && is_prime_with_rng(&mut &mut *rng, &p) {
                break 'gen_pq (p, q);
            }
        }
    };

    // Generate g using the unverifiable method as defined by Appendix A.2.1
    let divisor: NonZero<BoxedUint> =
        Option::from(NonZero::new(resize(&q, precision))).ok_or(Error::Arithmetic)?;
    let (e, _) = p.wrapping_sub(&one).div_rem(&divisor);

    let mut h = one.wrapping_add(&one);
    let g = loop {
        let g = arith.mod_exp(&h, &e, &p)?;
        if arith.compare(&g, &one) != Ordering::Equal {
            break g;
        }

        h = h.wrapping_add(&one);
    };

    Ok((p, q, g))
}
