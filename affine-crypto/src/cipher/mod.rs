//! # Affine Cipher Module
//!
//! Provides [`AffineKey`], the validated key of the affine substitution
//! cipher `c = (a*p + b) mod 26`, and its encrypt/decrypt transforms.

use crate::alphabet::{ALPHABET_LEN, COPRIME_MULTIPLIERS, letter_at, letter_position};
use crate::errors::AffineCryptoError;
use crate::ring::{Ring, gcd};

use rand::Rng;

use serde::{Deserialize, Serialize};

/// A validated affine cipher key over the 26-letter Latin alphabet.
///
/// Holds the multiplier `a`, the shift `b` and the multiplicative inverse of
/// `a` modulo 26. The inverse is computed once at construction; after that
/// the key is immutable and every encrypt/decrypt call is a pure function of
/// the key and the input text.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct AffineKey {
    a: i64,
    b: i64,
    inv_a: i64,
    ring: Ring,
}

impl AffineKey {
    /// Creates a new key from the multiplier `a` and the shift `b`.
    ///
    /// `a` must be positive and coprime with 26; `b` is unrestricted and
    /// acts as its residue modulo 26. The coprimality gate runs before the
    /// inverse is computed, so a constructed key always carries a valid
    /// `inv_a` in `[0, 26)`.
    ///
    /// # Errors
    ///
    /// Returns [`AffineCryptoError::InvalidKey`] when `a` fails the gate;
    /// the message lists the 12 usable multipliers.
    ///
    /// # Example
    ///
    /// ```
    /// # use affine_crypto::cipher::AffineKey;
    /// let key = AffineKey::try_with(5, 8).unwrap();
    /// assert_eq!(key.multiplier(), 5);
    /// assert!(AffineKey::try_with(13, 8).is_err());
    /// ```
    pub fn try_with(a: i64, b: i64) -> Result<Self, AffineCryptoError> {
        if a <= 0 || gcd(a, ALPHABET_LEN) != 1 {
            return Err(AffineCryptoError::InvalidKey(a));
        }

        let ring = Ring::try_with(ALPHABET_LEN)?;
        let inv_a = ring.inv(a)?;

        Ok(Self { a, b, inv_a, ring })
    }

    /// Generates a random valid key: a multiplier drawn uniformly from the
    /// 12 coprimes of 26 and a shift in `[0, 26)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, AffineCryptoError> {
        let a = COPRIME_MULTIPLIERS[rng.random_range(0..COPRIME_MULTIPLIERS.len())];
        let b = rng.random_range(0..ALPHABET_LEN);

        Self::try_with(a, b)
    }

    /// The multiplier `a`.
    pub fn multiplier(&self) -> i64 {
        self.a
    }

    /// The shift `b`.
    pub fn shift(&self) -> i64 {
        self.b
    }

    /// The multiplicative inverse of `a` modulo 26, cached at construction.
    pub fn inverse(&self) -> i64 {
        self.inv_a
    }

    /// Encrypts `text`, mapping each ASCII letter at position `p` to the
    /// letter at `(a*p + b) mod 26` under the same case base. Every other
    /// character is copied through unchanged, so the output always has the
    /// same number of characters as the input.
    ///
    /// # Example
    ///
    /// ```
    /// # use affine_crypto::cipher::AffineKey;
    /// let key = AffineKey::try_with(5, 8).unwrap();
    /// assert_eq!(key.encrypt("HELLO"), "RCLLA");
    /// ```
    pub fn encrypt(&self, text: &str) -> String {
        text.chars()
            .map(|ch| match letter_position(ch) {
                Some((base, p)) => letter_at(base, self.ring.add(self.ring.mul(self.a, p), self.b)),
                None => ch,
            })
            .collect()
    }

    /// Decrypts `text`, mapping each ASCII letter at position `c` back to
    /// `inv_a * (c - b) mod 26`. The difference is normalized into
    /// `[0, 26)` before re-basing, so negative shifts and shifts larger
    /// than 26 decrypt correctly.
    ///
    /// # Example
    ///
    /// ```
    /// # use affine_crypto::cipher::AffineKey;
    /// let key = AffineKey::try_with(5, 8).unwrap();
    /// assert_eq!(key.decrypt("RCLLA"), "HELLO");
    /// ```
    pub fn decrypt(&self, text: &str) -> String {
        text.chars()
            .map(|ch| match letter_position(ch) {
                Some((base, c)) => {
                    letter_at(base, self.ring.mul(self.inv_a, self.ring.sub(c, self.b)))
                }
                None => ch,
            })
            .collect()
    }
}
