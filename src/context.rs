//! A hash function and a randomness source bundled together

use core::marker::PhantomData;

use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use digest::Digest;
use rand_core::{CryptoRng, RngCore};

use crate::aos::AOS;
use crate::error::Error;
use crate::scalar::random_scalar;
use crate::traits::{Sign, Verify};

/// Carries the randomness source across calls and fixes the hash function, so
/// callers do not have to repeat both at every call site.
///
/// The hash is only named here, every digest is computed on a fresh instance.
/// Signing borrows the context mutably, so one context cannot serve two
/// overlapping signing calls.
pub struct SigningContext<Hash, CSPRNG> {
    csprng: CSPRNG,
    hash: PhantomData<fn() -> Hash>,
}

impl<Hash: Digest, CSPRNG: CryptoRng + RngCore> SigningContext<Hash, CSPRNG> {
    pub fn new(csprng: CSPRNG) -> Self {
        SigningContext {
            csprng,
            hash: PhantomData,
        }
    }

    pub fn sign(
        &mut self,
        ring: &[RistrettoPoint],
        secret_index: usize,
        k: &Scalar,
        message: &[u8],
    ) -> Result<AOS, Error> {
        AOS::sign::<Hash, CSPRNG>(k, ring, secret_index, message, &mut self.csprng)
    }

    pub fn verify(
        &self,
        ring: &[RistrettoPoint],
        signature: &AOS,
        message: &[u8],
    ) -> Result<(), Error> {
        signature.verify::<Hash>(ring, message)
    }

    pub fn random_scalar(&mut self) -> Result<Scalar, Error> {
        random_scalar(&mut self.csprng)
    }

    pub fn into_inner(self) -> CSPRNG {
        self.csprng
    }
}

impl<Hash: Digest, CSPRNG: CryptoRng + RngCore + Default> Default for SigningContext<Hash, CSPRNG> {
    fn default() -> Self {
        SigningContext::new(CSPRNG::default())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::vec::Vec;
    use curve25519_dalek::constants;
    use rand::rngs::{OsRng, StdRng};
    use rand::SeedableRng;
    use sha2::{Sha256, Sha512};

    #[test]
    fn sign_and_verify() {
        let mut context = SigningContext::<Sha256, StdRng>::new(StdRng::seed_from_u64(21));
        let ks: Vec<Scalar> = (0..5).map(|_| context.random_scalar().unwrap()).collect();
        let ring: Vec<RistrettoPoint> = ks
            .iter()
            .map(|k| k * constants::RISTRETTO_BASEPOINT_POINT)
            .collect();

        let signature = context.sign(&ring, 2, &ks[2], b"hello").unwrap();
        assert_eq!(context.verify(&ring, &signature, b"hello"), Ok(()));
        assert_eq!(
            context.verify(&ring, &signature, b"hellp"),
            Err(Error::InvalidSignature)
        );

        // The source keeps its position across calls
        let mut replayed = SigningContext::<Sha256, StdRng>::new(StdRng::seed_from_u64(21));
        for _ in 0..5 {
            replayed.random_scalar().unwrap();
        }
        let again = replayed.sign(&ring, 2, &ks[2], b"hello").unwrap();
        assert_eq!(again, signature);
        assert_eq!(
            context.into_inner().next_u64(),
            replayed.into_inner().next_u64()
        );
    }

    #[test]
    fn reused_across_calls() {
        let mut context = SigningContext::<Sha512, OsRng>::default();
        let k = context.random_scalar().unwrap();
        let ring = vec![
            RistrettoPoint::random(&mut OsRng),
            k * constants::RISTRETTO_BASEPOINT_POINT,
        ];

        let first = context.sign(&ring, 1, &k, b"one").unwrap();
        let second = context.sign(&ring, 1, &k, b"one").unwrap();
        assert_ne!(first, second);
        assert_eq!(context.verify(&ring, &first, b"one"), Ok(()));
        assert_eq!(context.verify(&ring, &second, b"one"), Ok(()));
    }

    #[test]
    fn bad_index() {
        let mut context = SigningContext::<Sha256, OsRng>::default();
        let ring = vec![RistrettoPoint::random(&mut OsRng)];
        assert_eq!(
            context.sign(&ring, 1, &Scalar::ONE, b"m"),
            Err(Error::InvalidIndex(1, 1))
        );
    }
}
