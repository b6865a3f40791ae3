#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]

//!
//! # Examples
//!
//! Generate common components and a DSA keypair
//!
//! ```no_run
//! # use dsa_keygen::{Components, KeyPair, KeySize};
//! # fn main() -> dsa_keygen::Result<()> {
//! let mut csprng = rand_core::OsRng;
//! let components = Components::generate(&mut csprng, KeySize::DSA_2048_256)?;
//! let keypair = KeyPair::generate(&mut csprng, &components)?;
//! let _public_key = keypair.public_key();
//! # Ok(())
//! # }
//! ```
//!
//! Generate a keypair for existing components
//!
//! ```
//! # use dsa_keygen::{BoxedUint, Components, KeyPair};
//! # fn main() -> dsa_keygen::Result<()> {
//! # let read_common_parameters = ||
//! #     (
//! #          BoxedUint::from(503u64),
//! #          BoxedUint::from(251u64),
//! #          BoxedUint::from(4u64),
//! #     );
//! let (p, q, g) = read_common_parameters();
//! let components = Components::from_components(p, q, g)?;
//!
//! let keypair = KeyPair::generate(&mut rand_core::OsRng, &components)?;
//! assert!(keypair.x() < &**components.q());
//! # Ok(())
//! # }
//! ```
//!

#[cfg(test)]
extern crate alloc;

pub use crate::{
    components::Components,
    errors::{Error, Result},
    keypair::KeyPair,
    public_key::PublicKey,
    rng::Csprng,
    size::KeySize,
};

pub use crypto_bigint::BoxedUint;
pub use rand_core;

mod arithmetic;
mod components;
mod errors;
mod generate;
mod keypair;
mod public_key;
mod rng;
mod size;

/// Low-level key generation over any [`Arithmetic`](hazmat::Arithmetic) backend
///
/// Everything here skips the validation done by [`Components`] and [`KeyPair`].
#[cfg(feature = "hazmat")]
pub mod hazmat {
    pub use crate::{
        arithmetic::{Arithmetic, BoxedArithmetic},
        generate::keypair::generate_keypair,
    };
}

/// Returns a `BoxedUint` with the value 2
#[inline]
fn two() -> BoxedUint {
    BoxedUint::from(2_u64)
}
