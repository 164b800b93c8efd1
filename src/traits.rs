use crate::error::Error;
use digest::Digest;
use rand_core::{CryptoRng, RngCore};

pub trait Sign: Sized {
    type PrivateKey;
    type PublicKey;

    fn sign<Hash: Digest, CSPRNG: CryptoRng + RngCore>(
        k: &Self::PrivateKey,
        ring: &[Self::PublicKey],
        secret_index: usize,
        message: &[u8],
        csprng: &mut CSPRNG,
    ) -> Result<Self, Error>;
}

pub trait Verify {
    type PublicKey;

    fn verify<Hash: Digest>(&self, ring: &[Self::PublicKey], message: &[u8]) -> Result<(), Error>;
}
