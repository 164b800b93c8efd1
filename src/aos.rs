use crate::prelude::*;

use curve25519_dalek::constants;
use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::MultiscalarMul;
use digest::Digest;
use rand_core::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;

use crate::error::Error;
use crate::scalar::{challenge_scalar, random_scalar};
use crate::traits::{Sign, Verify};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Abe-Ohkubo-Suzuki (AOS) 1-out-of-n signatures
///
/// The signature proves that the holder of one of the private keys behind the
/// ring signed the message. It carries no signer index and does not embed the
/// ring, so the verifier has to be handed the same ring in the same order.
///
/// Please read tests at the bottom of the source code for this module for examples on how to use
/// it
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AOS {
    /// Chain value at ring position 0, as raw digest bytes
    pub challenge: Vec<u8>,
    /// One response per ring member. All of them are random except the
    /// signer's, which closes the ring.
    pub responses: Vec<Scalar>,
}

/// `H(commitment || message || member)`, computed on a fresh hasher
fn challenge<Hash: Digest>(
    commitment: &RistrettoPoint,
    message: &[u8],
    member: &RistrettoPoint,
) -> Vec<u8> {
    Hash::new()
        .chain_update(commitment.compress().as_bytes())
        .chain_update(message)
        .chain_update(member.compress().as_bytes())
        .finalize()
        .to_vec()
}

/// `e * member + s * G`
fn commitment(e: &[u8], member: &RistrettoPoint, s: Scalar) -> RistrettoPoint {
    RistrettoPoint::multiscalar_mul(
        &[s, challenge_scalar(e)],
        &[constants::RISTRETTO_BASEPOINT_POINT, *member],
    )
}

/// Position `i` on a ring of `n` members, for any `i` including negative ones
fn ring_index(i: isize, n: usize) -> usize {
    i.rem_euclid(n as isize) as usize
}

impl Sign for AOS {
    type PrivateKey = Scalar;
    type PublicKey = RistrettoPoint;

    /// To sign you need `k` your private key, and `ring` which is the public keys of everyone
    /// including you, your own key sitting at `secret_index`. You are signing the `message`
    fn sign<Hash: Digest, CSPRNG: CryptoRng + RngCore>(
        k: &Scalar,
        ring: &[RistrettoPoint],
        secret_index: usize,
        message: &[u8],
        csprng: &mut CSPRNG,
    ) -> Result<AOS, Error> {
        let n = ring.len();
        if secret_index >= n {
            return Err(Error::InvalidIndex(secret_index, n));
        }
        let j = secret_index as isize;

        let a: Scalar = random_scalar(csprng)?;
        let mut responses: Vec<Scalar> = vec![Scalar::ZERO; n];
        let mut cs: Vec<Vec<u8>> = vec![Vec::new(); n];

        let mut i = ring_index(j + 1, n);
        cs[i] = challenge::<Hash>(
            &(a * constants::RISTRETTO_BASEPOINT_POINT),
            message,
            &ring[i],
        );

        // Every position but the signer's gets a random response
        loop {
            let prev = i;
            i = ring_index(i as isize + 1, n);
            if i == ring_index(j + 1, n) {
                break;
            }
            let s = random_scalar(csprng)?;
            cs[i] = challenge::<Hash>(&commitment(&cs[prev], &ring[prev], s), message, &ring[i]);
            responses[prev] = s;
        }

        responses[secret_index] = a - challenge_scalar(&cs[secret_index]) * k;

        Ok(AOS {
            challenge: core::mem::take(&mut cs[0]),
            responses,
        })
    }
}

impl Verify for AOS {
    type PublicKey = RistrettoPoint;

    /// To verify a signature you need the `ring` it was made over and the `message` too
    fn verify<Hash: Digest>(&self, ring: &[RistrettoPoint], message: &[u8]) -> Result<(), Error> {
        let n = ring.len();
        if n == 0 {
            return Err(Error::EmptyRing);
        }
        if self.responses.len() != n {
            return Err(Error::LengthMismatch(n, self.responses.len()));
        }
        if self.challenge.len() != <Hash as Digest>::output_size() {
            return Err(Error::ChallengeLength(
                <Hash as Digest>::output_size(),
                self.challenge.len(),
            ));
        }

        let mut reconstructed_c: Vec<u8> = self.challenge.clone();
        for i in 1..=n {
            reconstructed_c = challenge::<Hash>(
                &commitment(&reconstructed_c, &ring[i - 1], self.responses[i - 1]),
                message,
                &ring[i % n],
            );
        }

        if bool::from(self.challenge.ct_eq(&reconstructed_c)) {
            Ok(())
        } else {
            Err(Error::InvalidSignature)
        }
    }
}

impl AOS {
    /// The challenge bytes, then every response as a one byte length followed
    /// by its minimal big-endian encoding, in ring order
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.challenge.clone();
        for response in &self.responses {
            let mut be = response.to_bytes();
            be.reverse();
            let skip = be.iter().take_while(|b| **b == 0).count();
            bytes.push((32 - skip) as u8);
            bytes.extend_from_slice(&be[skip..]);
        }
        bytes
    }

    /// Inverse of [`AOS::to_bytes`]. The challenge length is that of `Hash`.
    pub fn from_bytes<Hash: Digest>(bytes: &[u8]) -> Result<AOS, Error> {
        let challenge_len = <Hash as Digest>::output_size();
        if bytes.len() < challenge_len {
            return Err(Error::InvalidEncoding);
        }
        let (challenge, mut rest) = bytes.split_at(challenge_len);

        let mut responses: Vec<Scalar> = Vec::new();
        while let Some((&len, tail)) = rest.split_first() {
            let len = len as usize;
            if len > 32 || tail.len() < len {
                return Err(Error::InvalidEncoding);
            }
            let (be, tail) = tail.split_at(len);
            if be.first() == Some(&0) {
                return Err(Error::InvalidEncoding);
            }
            let mut le = [0u8; 32];
            le[..len].copy_from_slice(be);
            le[..len].reverse();
            let response: Option<Scalar> = Scalar::from_canonical_bytes(le).into();
            responses.push(response.ok_or(Error::InvalidEncoding)?);
            rest = tail;
        }

        Ok(AOS {
            challenge: challenge.to_vec(),
            responses,
        })
    }
}
