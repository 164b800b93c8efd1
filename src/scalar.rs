//! Scalar arithmetic that does not fit in `curve25519_dalek::scalar::Scalar`.
//!
//! Drawing a scalar uniformly from `[1, l - 1]` needs a reduction modulo `l - 1`.
//! The draw is secret, so it is reduced with fixed width `crypto_bigint`
//! integers. Chain challenges are public digests of arbitrary length read as
//! big-endian integers, those go through `BigUint`.

use crate::error::Error;
use crypto_bigint::{Encoding, NonZero, U320};
use curve25519_dalek::scalar::Scalar;
use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};

/// Bit size of the base field GF(2^255 - 19) underneath Ristretto255
pub const FIELD_BITS: usize = 255;

/// Number of random bytes consumed per scalar. The 8 bytes on top of the field
/// size push the modulo bias of the reduction down to 2^-64.
pub const RANDOM_BYTES: usize = FIELD_BITS / 8 + 8;

/// `l - 1`, wide enough to reduce a whole draw of [`RANDOM_BYTES`]
const ORDER_MINUS_ONE: NonZero<U320> = NonZero::<U320>::from_uint(U320::from_be_hex(
    "00000000000000001000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ec",
));

/// The prime order `l` of the Ristretto255 group
pub fn group_order() -> BigUint {
    to_biguint(&-Scalar::ONE) + 1u32
}

/// Draws a scalar uniformly distributed over `[1, l - 1]`
pub fn random_scalar<CSPRNG: CryptoRng + RngCore>(csprng: &mut CSPRNG) -> Result<Scalar, Error> {
    let mut bytes = [0u8; RANDOM_BYTES];
    csprng
        .try_fill_bytes(&mut bytes)
        .map_err(|_| Error::RandomSource(RANDOM_BYTES))?;
    Ok(Scalar::from_bytes_mod_order(uniform_bytes(&bytes)))
}

/// `(x mod (l - 1)) + 1` for the big-endian integer `x`. Constant time in `x`.
fn reduce_uniform(bytes: &[u8; RANDOM_BYTES]) -> U320 {
    let mut wide = [0u8; 40];
    wide[40 - RANDOM_BYTES..].copy_from_slice(bytes);
    U320::from_be_slice(&wide)
        .rem(&ORDER_MINUS_ONE)
        .wrapping_add(&U320::ONE)
}

/// [`reduce_uniform`] as the 32 byte little-endian encoding `Scalar` expects
fn uniform_bytes(bytes: &[u8; RANDOM_BYTES]) -> [u8; 32] {
    let le = reduce_uniform(bytes).to_le_bytes();
    let mut out = [0u8; 32];
    out.copy_from_slice(&le[..32]);
    out
}

/// Reads a digest as a big-endian integer and reduces it modulo `l`
pub fn challenge_scalar(digest: &[u8]) -> Scalar {
    to_scalar(&BigUint::from_bytes_be(digest))
}

/// Reduces the public `value` modulo `l`
pub fn to_scalar(value: &BigUint) -> Scalar {
    let reduced = value % group_order();
    let mut bytes = [0u8; 32];
    let le = reduced.to_bytes_le();
    bytes[..le.len()].copy_from_slice(&le);
    Scalar::from_bytes_mod_order(bytes)
}

pub fn to_biguint(scalar: &Scalar) -> BigUint {
    BigUint::from_bytes_le(scalar.as_bytes())
}
