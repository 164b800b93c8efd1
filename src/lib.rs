//! # AOS ring
//! A library that implements the 1-out-of-n [Ring Signatures](https://en.wikipedia.org/wiki/Ring_signature)
//! of Abe, Ohkubo and Suzuki:
//!
//!  > M. Abe, M. Ohkubo, K. Suzuki, 1-out-of-n signatures from a variety of keys,
//!  > ASIACRYPT 2002, LNCS 2501, Springer-Verlag, pp. 415-432.
//!
//!  A member of a ring of public keys signs a message. Anyone holding the ring can check that
//!  one of its members signed, but not which one. Signatures are not linkable.
//!
//!  This library works with any hashing function implementing `digest::Digest`, whatever its
//!  output size. It uses the [Ristretto elliptic curve](https://doc.dalek.rs/curve25519_dalek/ristretto/)
//!  as its prime order group.
//!
//!  ```rust
//!  use aos_ring::aos::AOS;
//!  use aos_ring::traits::{Sign, Verify};
//!  use aos_ring::RingSignature;
//!  use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;
//!  use curve25519_dalek::scalar::Scalar;
//!  use rand::rngs::OsRng;
//!  use sha2::Sha512;
//!
//!  let ks: Vec<Scalar> = (0..4).map(|_| Scalar::random(&mut OsRng)).collect();
//!  let ring: Vec<_> = ks.iter().map(|k| k * RISTRETTO_BASEPOINT_POINT).collect();
//!
//!  let signature: RingSignature = AOS::sign::<Sha512, _>(&ks[2], &ring, 2, b"message", &mut OsRng).unwrap();
//!  assert!(signature.verify::<Sha512>(&ring, b"message").is_ok());
//!  ```
//!
//!  The crate is `#![no_std]` and only needs `alloc`. Turn off the default `std` feature and
//!  turn on `no_std` to build it that way.

#![no_std]
#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
extern crate curve25519_dalek;
extern crate digest;
extern crate rand_core;

pub mod aos;
pub mod context;
pub mod error;
pub mod scalar;
pub mod traits;

mod prelude;

pub use crate::aos::AOS;
pub use crate::context::SigningContext;
pub use crate::error::Error;

/// The artifact produced by signing and consumed by verification
pub type RingSignature = AOS;
