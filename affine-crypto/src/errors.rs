#[derive(thiserror::Error, Debug)]
pub enum AffineCryptoError {
    /// Error when the multiplier of an affine key is not usable over the
    /// 26-letter alphabet (must be positive and coprime with 26).
    #[error(
        "Multiplier 'a' must be coprime with 26, got {0}. The coprimes of 26 are: 1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25"
    )]
    InvalidKey(i64),
    /// Error when creating a ring with an invalid modulus (modulus <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, m) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
}
