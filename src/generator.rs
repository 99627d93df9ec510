//! Random password generation.

use rand::Rng;
use secrecy::SecretString;
use thiserror::Error;

use crate::evaluator::Evaluator;
use crate::sections::MIN_LENGTH;

/// Sampling alphabet: ASCII letters, digits and ten symbols.
pub const ALPHABET: &[u8; 72] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()";

pub const DEFAULT_LENGTH: usize = 12;

/// Upper bound on candidates drawn by [`generate_strong_password`].
pub const MAX_ATTEMPTS: usize = 1000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Length {length} is below the minimum of {min} for a strong password")]
    TooShort { length: usize, min: usize },
    #[error("No strong password found after {attempts} attempts")]
    Exhausted { attempts: usize },
}

/// Generates `length` characters drawn uniformly from [`ALPHABET`].
///
/// Every character is sampled independently, so the result is not
/// guaranteed to contain each character class.
pub fn generate_password(length: usize) -> SecretString {
    generate_password_with_rng(length, &mut rand::rng())
}

pub fn generate_password_with_rng<R: Rng + ?Sized>(length: usize, rng: &mut R) -> SecretString {
    let password: String = (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect();
    SecretString::new(password.into())
}

/// Generates passwords until `evaluator` judges one strong.
///
/// # Errors
///
/// - `TooShort` if `length` is below the minimum length, since no candidate
///   could pass
/// - `Exhausted` if [`MAX_ATTEMPTS`] candidates were all rejected
pub fn generate_strong_password(
    length: usize,
    evaluator: &Evaluator,
) -> Result<SecretString, GeneratorError> {
    generate_strong_password_with_rng(length, evaluator, &mut rand::rng())
}

pub fn generate_strong_password_with_rng<R: Rng + ?Sized>(
    length: usize,
    evaluator: &Evaluator,
    rng: &mut R,
) -> Result<SecretString, GeneratorError> {
    if length < MIN_LENGTH {
        return Err(GeneratorError::TooShort {
            length,
            min: MIN_LENGTH,
        });
    }

    for _attempt in 1..=MAX_ATTEMPTS {
        let candidate = generate_password_with_rng(length, rng);
        if evaluator.evaluate(&candidate).is_strong() {
            #[cfg(feature = "tracing")]
            tracing::debug!("strong password found after {} attempt(s)", _attempt);
            return Ok(candidate);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::warn!("gave up generating a strong password after {} attempts", MAX_ATTEMPTS);
    Err(GeneratorError::Exhausted {
        attempts: MAX_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::WordSet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use secrecy::ExposeSecret;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_composition() {
        let chars: HashSet<u8> = ALPHABET.iter().copied().collect();
        assert_eq!(chars.len(), 72);
        assert_eq!(ALPHABET.iter().filter(|c| c.is_ascii_uppercase()).count(), 26);
        assert_eq!(ALPHABET.iter().filter(|c| c.is_ascii_lowercase()).count(), 26);
        assert_eq!(ALPHABET.iter().filter(|c| c.is_ascii_digit()).count(), 10);
        assert!(b"!@#$%^&*()".iter().all(|c| chars.contains(c)));
    }

    #[test]
    fn test_generate_default_length() {
        let password = generate_password(DEFAULT_LENGTH);
        assert_eq!(password.expose_secret().chars().count(), 12);
    }

    #[test]
    fn test_generate_exact_length_from_alphabet() {
        for length in [1, 8, 12, 64, 500] {
            let password = generate_password(length);
            let pwd = password.expose_secret();
            assert_eq!(pwd.chars().count(), length);
            assert!(pwd.bytes().all(|b| ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_generate_zero_length() {
        assert_eq!(generate_password(0).expose_secret(), "");
    }

    #[test]
    fn test_generate_is_not_constant() {
        let passwords: HashSet<String> = (0..1000)
            .map(|_| generate_password(DEFAULT_LENGTH).expose_secret().to_string())
            .collect();
        assert!(passwords.len() > 1);
    }

    #[test]
    fn test_generate_with_seeded_rng_is_reproducible() {
        let a = generate_password_with_rng(16, &mut StdRng::seed_from_u64(7));
        let b = generate_password_with_rng(16, &mut StdRng::seed_from_u64(7));
        assert_eq!(a.expose_secret(), b.expose_secret());
    }

    #[test]
    fn test_generate_strong_passes_evaluation() {
        let evaluator = Evaluator::new(WordSet::empty());
        let mut rng = StdRng::seed_from_u64(42);
        for length in [8, 12, 20] {
            let password = generate_strong_password_with_rng(length, &evaluator, &mut rng)
                .expect("strong password should be found");
            assert_eq!(password.expose_secret().chars().count(), length);
            assert!(evaluator.evaluate(&password).is_strong());
        }
    }

    #[test]
    fn test_generate_strong_too_short() {
        let evaluator = Evaluator::default();
        let result = generate_strong_password(7, &evaluator);
        assert_eq!(result.err(), Some(GeneratorError::TooShort { length: 7, min: 8 }));
    }
}
