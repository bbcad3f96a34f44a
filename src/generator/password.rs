//! Password generation functionality

use rand::Rng;
use serde::{Deserialize, Serialize};
use super::entropy_bits;

const UPPER_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SPECIAL_SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?/\\|";

/// Options for password generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Include uppercase letters (A-Z)
    pub include_uppercase: bool,
    /// Include lowercase letters (a-z)
    pub include_lowercase: bool,
    /// Include digits (0-9)
    pub include_digits: bool,
    /// Include special symbols (!@#$%...)
    pub include_symbols: bool,
    /// Password length
    pub length: usize,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: true,
            length: crate::PASSWORD_DEFAULT_LENGTH,
        }
    }
}

impl GenerationSettings {
    /// Build the alphabet for these settings.
    ///
    /// Classes are always appended in the order uppercase, lowercase,
    /// digits, symbols.
    pub fn alphabet(&self) -> Vec<char> {
        let mut alphabet = String::new();
        if self.include_uppercase {
            alphabet.push_str(UPPER_LETTERS);
        }
        if self.include_lowercase {
            alphabet.push_str(LOWER_LETTERS);
        }
        if self.include_digits {
            alphabet.push_str(DIGITS);
        }
        if self.include_symbols {
            alphabet.push_str(SPECIAL_SYMBOLS);
        }
        alphabet.chars().collect()
    }

    /// Flag string of the enabled classes, e.g. `"ULDS"` or `"LD"`
    pub fn symbols_flags(&self) -> String {
        flags(
            self.include_uppercase,
            self.include_lowercase,
            self.include_digits,
            self.include_symbols,
        )
    }
}

/// A freshly generated password, not yet persisted
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Password text
    pub value: String,
    /// Bits of entropy
    pub entropy: f64,
    /// Number of characters the password was drawn from
    pub alphabet_size: usize,
}

impl GenerationResult {
    /// True for the empty result returned when nothing could be generated
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Generate a random password with the specified settings.
///
/// An empty alphabet or a zero length yields an empty result with zero
/// entropy and zero alphabet size.
///
/// # Example
/// ```
/// use telros::generator::{generate_password, GenerationSettings};
///
/// let settings = GenerationSettings {
///     include_uppercase: false,
///     include_lowercase: false,
///     include_digits: true,
///     include_symbols: false,
///     length: 5,
/// };
/// let result = generate_password(&settings);
/// assert_eq!(result.value.len(), 5);
/// assert_eq!(result.alphabet_size, 10);
/// ```
pub fn generate_password(settings: &GenerationSettings) -> GenerationResult {
    generate_password_with(settings, &mut rand::rng())
}

/// Generate a password drawing characters from the given random source
pub fn generate_password_with<R: Rng + ?Sized>(
    settings: &GenerationSettings,
    rng: &mut R,
) -> GenerationResult {
    let alphabet = settings.alphabet();
    if alphabet.is_empty() || settings.length == 0 {
        return GenerationResult::default();
    }

    let value: String = (0..settings.length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect();

    GenerationResult {
        entropy: entropy_bits(settings.length, alphabet.len()),
        alphabet_size: alphabet.len(),
        value,
    }
}

/// Best-effort class flags for an existing password.
///
/// Digits are ASCII `0-9`; any other non-letter counts as a symbol.
pub fn symbols_from_value(value: &str) -> String {
    flags(
        value.chars().any(char::is_uppercase),
        value.chars().any(char::is_lowercase),
        value.chars().any(|c| c.is_ascii_digit()),
        value.chars().any(|c| !c.is_alphabetic() && !c.is_ascii_digit()),
    )
}

fn flags(upper: bool, lower: bool, digit: bool, symbol: bool) -> String {
    let mut result = String::with_capacity(4);
    for (present, flag) in [(upper, 'U'), (lower, 'L'), (digit, 'D'), (symbol, 'S')] {
        if present {
            result.push(flag);
        }
    }
    result
}
