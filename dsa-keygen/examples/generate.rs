use dsa_keygen::{Components, KeyPair, KeySize};
use rand_core::OsRng;

fn main() -> dsa_keygen::Result<()> {
    let mut rng = OsRng;
    let components = Components::generate(&mut rng, KeySize::DSA_2048_256)?;
    let keypair = KeyPair::generate(&mut rng, &components)?;
    let _public_key = keypair.public_key();

    Ok(())
}
