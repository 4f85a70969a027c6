use crate::ring::gcd;

use lazy_static::lazy_static;

/// Number of letters in the Latin alphabet; the modulus of every affine
/// transform in this crate.
pub const ALPHABET_LEN: i64 = 26;

lazy_static! {
    /// The multipliers usable as the `a` parameter of an affine key: every
    /// value in `[1, 26)` coprime with 26. There are exactly 12 of them.
    pub static ref COPRIME_MULTIPLIERS: Vec<i64> = (1..ALPHABET_LEN)
        .filter(|&a| gcd(a, ALPHABET_LEN) == 1)
        .collect();
}

/// Zero-based alphabet position of an ASCII letter, together with the code
/// point of its case base (`b'A'` for uppercase, `b'a'` for lowercase).
///
/// Returns `None` for anything that is not an ASCII letter, which the cipher
/// treats as pass-through.
pub fn letter_position(ch: char) -> Option<(u8, i64)> {
    if !ch.is_ascii_alphabetic() {
        return None;
    }

    let base = if ch.is_ascii_uppercase() { b'A' } else { b'a' };

    Some((base, ch as i64 - base as i64))
}

/// Letter at `position` counted from the case base `base`.
///
/// Inverse of [`letter_position`]; `position` must already be normalized
/// into `[0, 26)`.
pub fn letter_at(base: u8, position: i64) -> char {
    (base + position as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck::TestResult;
    use quickcheck::quickcheck;

    #[test]
    fn coprime_multipliers_match_known_list() {
        assert_eq!(
            *COPRIME_MULTIPLIERS,
            vec![1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25]
        );
    }

    #[test]
    fn letter_positions_span_both_cases() {
        assert_eq!(letter_position('A'), Some((b'A', 0)));
        assert_eq!(letter_position('Z'), Some((b'A', 25)));
        assert_eq!(letter_position('a'), Some((b'a', 0)));
        assert_eq!(letter_position('z'), Some((b'a', 25)));
        assert_eq!(letter_position('0'), None);
        assert_eq!(letter_position(' '), None);
        assert_eq!(letter_position('é'), None);
    }

    quickcheck! {
        fn prop_letter_position_round_trips(ch: char) -> TestResult {
            match letter_position(ch) {
                Some((base, position)) => {
                    if !(0..ALPHABET_LEN).contains(&position) {
                        return TestResult::error(format!(
                            "Position {} for '{}' outside the alphabet range",
                            position, ch
                        ));
                    }

                    TestResult::from_bool(letter_at(base, position) == ch)
                }
                // Not an ASCII letter: the cipher must leave it untouched,
                // so there is nothing to round-trip.
                None => TestResult::from_bool(!ch.is_ascii_alphabetic()),
            }
        }
    }
}
