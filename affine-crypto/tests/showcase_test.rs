use affine_crypto::cipher::AffineKey;
use affine_crypto::errors::AffineCryptoError;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("info"))
            .unwrap();
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_line_number(false)
            .with_file(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    });
}

#[test]
fn showcase_cipher_decipher_mixed_text() -> Result<(), AffineCryptoError> {
    init_tracing();

    let key = AffineKey::try_with(21, 11)?;

    let original =
        "Greetings to the 12 participants of the seminar, at its 1st session (room B-204)!"
            .to_string();

    let ciphertext = key.encrypt(&original);

    dbg!(&ciphertext);

    let decoded = key.decrypt(&ciphertext);

    dbg!(&original, &decoded);
    assert_eq!(original, decoded);

    Ok(())
}

#[test]
fn showcase_every_key_pair_round_trips_the_alphabet() -> Result<(), AffineCryptoError> {
    init_tracing();

    let pangram = "Sphinx of black quartz, judge my vow";

    for a in [1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25] {
        for b in 0..26 {
            let key = AffineKey::try_with(a, b)?;
            assert_eq!(key.decrypt(&key.encrypt(pangram)), pangram);
        }
    }

    Ok(())
}
