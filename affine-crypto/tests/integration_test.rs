use affine_crypto::cipher::AffineKey;
use affine_crypto::errors::AffineCryptoError;

#[test]
fn happy_flow() -> Result<(), AffineCryptoError> {
    let key = AffineKey::try_with(5, 8)?;

    let original_data = "Meet me at the old bridge at 9, come alone!".to_string();

    let ciphertext = key.encrypt(&original_data);
    let decoded_data = key.decrypt(&ciphertext);

    dbg!(&ciphertext);

    assert_ne!(original_data, ciphertext);
    assert_eq!(original_data, decoded_data);

    Ok(())
}

#[test]
fn invalid_multiplier_is_rejected_up_front() {
    let err = AffineKey::try_with(13, 4).unwrap_err();

    assert!(matches!(err, AffineCryptoError::InvalidKey(13)));
}
