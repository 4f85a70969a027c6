//! Implementation of ring ops using modular arithmetic.

use crate::errors::AffineCryptoError;

use super::extended_gcd;

use serde::{Deserialize, Serialize};

/// Represents a finite ring Z_m using modular arithmetic.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    modulus: i64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: i64) -> Result<Self, AffineCryptoError> {
        if modulus <= 1 {
            return Err(AffineCryptoError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use affine_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.modulus(), 26);
    /// ```
    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// Floor-mod: negative values land on the non-negative residue.
    ///
    /// # Example
    ///
    /// ```
    /// # use affine_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.normalize(27), 1);
    /// assert_eq!(ring.normalize(-3), 23);
    /// assert_eq!(ring.normalize(26), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        value.rem_euclid(self.modulus)
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use affine_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.add(20, 9), 3);
    /// assert_eq!(ring.add(-4, 2), 24);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        self.normalize(self.normalize(a) + self.normalize(b))
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use affine_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.sub(2, 8), 20);
    /// assert_eq!(ring.sub(8, 2), 6);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        self.normalize(self.normalize(a) - self.normalize(b))
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally so the product cannot overflow before the
    /// modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use affine_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.mul(5, 7), 9); // 35 mod 26 = 9
    /// assert_eq!(ring.mul(-2, 6), 14); // -12 mod 26 = 14
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let product = self.normalize(a) as i128 * self.normalize(b) as i128;

        self.normalize((product % self.modulus as i128) as i64)
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    /// Uses the Extended Euclidean Algorithm.
    ///
    /// # Errors
    ///
    /// Returns `AffineCryptoError::NoInverse` if the inverse does not exist
    /// (i.e., `gcd(a, modulus) != 1`), or if `a` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use affine_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.inv(5).unwrap(), 21); // 5 * 21 = 105 = 1 mod 26
    /// assert_eq!(ring.inv(3).unwrap(), 9);
    /// assert!(ring.inv(13).is_err()); // gcd(13, 26) = 13
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, AffineCryptoError> {
        let a_norm = self.normalize(a);
        if a_norm == 0 {
            return Err(AffineCryptoError::NoInverse(format!(
                "Cannot invert 0 in mod {}",
                self.modulus
            )));
        }

        let (g, x, _) = extended_gcd(a_norm, self.modulus);
        if g != 1 {
            return Err(AffineCryptoError::NoInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm, self.modulus, g
            )));
        }

        Ok(self.normalize(x))
    }
}
