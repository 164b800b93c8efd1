//! Errors returned while signing, verifying or decoding ring signatures

use displaydoc::Display;

/// Everything that can go wrong in this crate.
///
/// `InvalidSignature` is the ordinary "no" answer of a verifier. The variants
/// reported by [`Error::is_malformed_input`] mean the inputs never described a
/// checkable signature in the first place.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Error {
    /// Signer index {0} is outside of a ring with {1} members
    InvalidIndex(usize, usize),
    /// The randomness source could not supply {0} bytes
    RandomSource(usize),
    /// The ring must contain at least one public key
    EmptyRing,
    /// The ring has {0} members but the signature carries {1} responses
    LengthMismatch(usize, usize),
    /// Expected a challenge of {0} bytes, found {1}
    ChallengeLength(usize, usize),
    /// The encoded signature is malformed
    InvalidEncoding,
    /// The ring does not close, signature is invalid
    InvalidSignature,
}

impl Error {
    /// True for errors caused by structurally unusable verifier input, as
    /// opposed to a well-formed signature that simply fails to verify.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Error::EmptyRing
                | Error::LengthMismatch(..)
                | Error::ChallengeLength(..)
                | Error::InvalidEncoding
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
