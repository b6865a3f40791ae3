//! Shared fixtures for the integration tests

#![allow(dead_code)]

use dsa_keygen::{BoxedUint, Components};
use hex_literal::hex;

/// Prime p of the RFC 6979 A.2.1 1024-bit DSA key
pub const P_1024: [u8; 128] = hex!(
    "86F5CA03DCFEB225063FF830A0C769B9DD9D6153AD91D7CE27F787C43278B447
    E6533B86B18BED6E8A48B784A14C252C5BE0DBF60B86D6385BD2F12FB763ED88
    73ABFD3F5BA2E0A8C0A59082EAC056935E529DAF7C610467899C77ADEDFC846C
    881870B7B19B2B58F9BE0521A17002E3BDD6B86685EE90B3D9A1B02B782B1779"
);

/// Quotient q of the RFC 6979 A.2.1 1024-bit DSA key
pub const Q_160: [u8; 20] = hex!("996F967F6C8E388D9E28D01E205FBA957A5698B1");

/// Generator g of the RFC 6979 A.2.1 1024-bit DSA key
pub const G_1024: [u8; 128] = hex!(
    "07B0F92546150B62514BB771E2A0C0CE387F03BDA6C56B505209FF25FD3C133D
    89BBCD97E904E09114D9A7DEFDEADFC9078EA544D2E401AEECC40BB9FBBF78FD
    87995A10A1C27CB7789B594BA7EFB5C4326A9FE59A070E136DB77175464ADCA4
    17BE5DCE2F40D10A46A3A3943F26AB7FD9C0398FF8C76EE0A56826A8A88F1DBD"
);

/// Private component x of the RFC 6979 A.2.1 1024-bit DSA key
pub const X_160: [u8; 20] = hex!("411602CB19A6CCC34494D79D98EF1E7ED5AF25F7");

/// Public component y of the RFC 6979 A.2.1 1024-bit DSA key
pub const Y_1024: [u8; 128] = hex!(
    "5DF5E01DED31D0297E274E1691C192FE5868FEF9E19A84776454B100CF16F653
    92195A38B90523E2542EE61871C0440CB87C322FC4B4D2EC5E1E7EC766E1BE8D
    4CE935437DC11C3C8FD426338933EBFE739CB3465F4D3668C5E473508253B1E6
    82F65CBDC4FAE93C2EA212390E54905A86E2223170B44EAA7DA5DD9FFCFB7F3B"
);

/// Small test group: p = 503 = 2 * 251 + 1, q = 251, g = 4 generates the quadratic residues
pub const SMALL_P: u64 = 503;
pub const SMALL_Q: u64 = 251;
pub const SMALL_G: u64 = 4;

/// Decode a big endian integer, left-padded to a whole number of 64-bit words
pub fn uint(bytes: &[u8]) -> BoxedUint {
    let padded_len = bytes.len().next_multiple_of(8);
    let mut padded = vec![0u8; padded_len - bytes.len()];
    padded.extend_from_slice(bytes);
    BoxedUint::from_be_slice(&padded, padded_len as u32 * 8).unwrap()
}

pub fn to_u64(value: &BoxedUint) -> u64 {
    let bytes = value.to_be_bytes();
    let (high, low) = bytes.split_at(bytes.len() - 8);
    assert!(high.iter().all(|&byte| byte == 0), "value exceeds 64 bits");
    u64::from_be_bytes(low.try_into().unwrap())
}

pub fn pow_mod(base: u64, mut exponent: u64, modulus: u64) -> u64 {
    let mut base = base % modulus;
    let mut result = 1;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exponent >>= 1;
    }
    result
}

pub fn components_1024() -> Components {
    Components::from_components(uint(&P_1024), uint(&Q_160), uint(&G_1024))
        .expect("RFC 6979 components are valid")
}

pub fn small_components() -> Components {
    Components::from_components(
        BoxedUint::from(SMALL_P),
        BoxedUint::from(SMALL_Q),
        BoxedUint::from(SMALL_G),
    )
    .expect("small components are valid")
}
