//!
//! Generate a DSA keypair
//!

use crate::{Error, Result, arithmetic::Arithmetic, rng::Csprng};
use core::cmp::Ordering;
use zeroize::{Zeroize, Zeroizing};

/// Generate the private component x and the public component y = g^x mod p
/// according to FIPS 186-4, Appendix B.1.2
///
/// Each attempt draws exactly `bit_length(q)` fresh bits and keeps them only if they lie in
/// `[1, q - 1]`. The number of attempts is not capped; each one succeeds with probability
/// close to or above one half.
///
/// Fails with [`Error::InvalidArgument`] before drawing any randomness if p or g is zero or q is
/// below 2.
/// Errors of `rng` and `backend` are passed through unchanged.
pub fn generate_keypair<A, R>(
    backend: &A,
    rng: &mut R,
    p: &A::Uint,
    q: &A::Uint,
    g: &A::Uint,
) -> Result<(Zeroizing<A::Uint>, A::Uint)>
where
    A: Arithmetic + ?Sized,
    R: Csprng<A::Uint> + ?Sized,
{
    // q < 2 leaves no value in [1, q - 1]
    if backend.is_zero(p) || backend.bit_length(q) < 2 || backend.is_zero(g) {
        return Err(Error::InvalidArgument);
    }

    let n = backend.bit_length(q);

    let x = loop {
        let mut candidate = rng.next_bits(n)?;

        // 1 <= x <= q - 1
        if !backend.is_zero(&candidate) && backend.compare(&candidate, q) == Ordering::Less {
            break Zeroizing::new(candidate);
        }

        candidate.zeroize();
    };

    let y = backend.mod_exp(g, &*x, p)?;

    Ok((x, y))
}
