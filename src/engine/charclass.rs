//! Character-class analysis - determines which classes are present and the
//! effective alphabet size.

/// Assumed cardinality of each character class. Symbols get a fixed span
/// (the printable ASCII punctuation count) no matter which symbols appear.
const LOWERCASE_SIZE: u32 = 26;
const UPPERCASE_SIZE: u32 = 26;
const DIGIT_SIZE: u32 = 10;
const SYMBOL_SIZE: u32 = 32;

/// Which character classes a password draws from, plus its length.
///
/// Length counts characters, not bytes. The alphabet size derives only from
/// which classes are present, never from the specific characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharClassProfile {
    pub length: usize,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
}

impl CharClassProfile {
    /// Number of distinct symbols assumed available to an attacker.
    ///
    /// 0 for the empty password; at least 1 otherwise, even when no class
    /// triggered (a password of only control characters).
    pub fn alphabet_size(&self) -> u32 {
        if self.length == 0 {
            return 0;
        }
        let mut size = 0;
        if self.has_lowercase {
            size += LOWERCASE_SIZE;
        }
        if self.has_uppercase {
            size += UPPERCASE_SIZE;
        }
        if self.has_digit {
            size += DIGIT_SIZE;
        }
        if self.has_symbol {
            size += SYMBOL_SIZE;
        }
        size.max(1)
    }

    /// How many of the four classes are present.
    pub fn class_count(&self) -> usize {
        [
            self.has_lowercase,
            self.has_uppercase,
            self.has_digit,
            self.has_symbol,
        ]
        .iter()
        .filter(|&&b| b)
        .count()
    }
}

/// Scans the password and records which character classes appear.
///
/// Letters are classified Unicode-aware, digits are ASCII `0-9`, and any
/// other non-control character counts as a symbol. Control characters
/// belong to no class (they still count toward the length).
pub fn classify(password: &str) -> CharClassProfile {
    let mut profile = CharClassProfile::default();
    for c in password.chars() {
        profile.length += 1;
        if c.is_lowercase() {
            profile.has_lowercase = true;
        } else if c.is_uppercase() {
            profile.has_uppercase = true;
        } else if c.is_ascii_digit() {
            profile.has_digit = true;
        } else if !c.is_control() {
            profile.has_symbol = true;
        }
    }
    profile
}
