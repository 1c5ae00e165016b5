//! Common-password and trivial-pattern detection.

use crate::wordlist::Wordlist;
use std::fmt;

/// Wordlist entries shorter than this (in characters, not bytes) are matched
/// exactly but never as substrings; short entries inside longer passwords are
/// too noisy a signal.
const MIN_SUBSTRING_LEN: usize = 5;

/// Why a password was flagged as common, strongest signal first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchReason {
    /// The whole password is a wordlist entry.
    ExactMatch,
    /// A wordlist entry occurs inside the password.
    CommonSubstring,
    /// The whole password is one ascending or descending character run.
    SequentialPattern,
    /// The whole password repeats a single character.
    RepeatedCharacters,
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchReason::ExactMatch => "exact match",
            MatchReason::CommonSubstring => "common substring",
            MatchReason::SequentialPattern => "sequential pattern",
            MatchReason::RepeatedCharacters => "repeated characters",
        };
        f.write_str(s)
    }
}

/// Outcome of the detection pass. The reason is advisory; the boolean is
/// what the scorer and status classifier act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatternFlags {
    pub is_common_password: bool,
    pub matched_reason: Option<MatchReason>,
}

impl PatternFlags {
    fn flagged(reason: MatchReason) -> PatternFlags {
        PatternFlags {
            is_common_password: true,
            matched_reason: Some(reason),
        }
    }
}

/// Checks the password against the wordlist and for trivial patterns.
///
/// Returns the richest match found: an exact (case-insensitive) wordlist
/// hit, then a wordlist entry contained in the password, then a whole-
/// password sequential or repeated-character run. The exact lookup is a
/// hash-set membership test, so a large wordlist costs nothing extra.
pub fn detect(password: &str, wordlist: &Wordlist) -> PatternFlags {
    if wordlist.contains(password) {
        return PatternFlags::flagged(MatchReason::ExactMatch);
    }

    let lowered = password.to_lowercase();
    if wordlist
        .entries()
        .any(|entry| entry.chars().count() >= MIN_SUBSTRING_LEN && lowered.contains(entry))
    {
        return PatternFlags::flagged(MatchReason::CommonSubstring);
    }

    let chars: Vec<char> = password.chars().collect();
    if is_sequential_run(&chars) {
        return PatternFlags::flagged(MatchReason::SequentialPattern);
    }
    if is_repeated_run(&chars) {
        return PatternFlags::flagged(MatchReason::RepeatedCharacters);
    }

    PatternFlags::default()
}

/// Whole password is one strictly ascending or strictly descending run of
/// consecutive code points ("abcdef", "98765").
fn is_sequential_run(chars: &[char]) -> bool {
    if chars.len() < 3 {
        return false;
    }
    let ascending = chars.windows(2).all(|w| w[1] as u32 == w[0] as u32 + 1);
    let descending = chars.windows(2).all(|w| w[0] as u32 == w[1] as u32 + 1);
    ascending || descending
}

/// Whole password is a single character repeated ("aaaaaa").
fn is_repeated_run(chars: &[char]) -> bool {
    chars.len() >= 2 && chars.windows(2).all(|w| w[0] == w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_list() -> Wordlist {
        Wordlist::from_lines("password\n123456\nqwerty\nadmin\npass\n")
    }

    #[test]
    fn test_detect_exact_match() {
        let flags = detect("password", &small_list());
        assert!(flags.is_common_password);
        assert_eq!(flags.matched_reason, Some(MatchReason::ExactMatch));
    }

    #[test]
    fn test_detect_exact_match_is_case_insensitive() {
        let flags = detect("PaSsWoRd", &small_list());
        assert_eq!(flags.matched_reason, Some(MatchReason::ExactMatch));
    }

    #[test]
    fn test_detect_common_substring() {
        let flags = detect("MyPassword2024!", &small_list());
        assert!(flags.is_common_password);
        assert_eq!(flags.matched_reason, Some(MatchReason::CommonSubstring));
    }

    #[test]
    fn test_short_entries_do_not_match_as_substrings() {
        // "pass" (4 chars) may only match exactly
        let flags = detect("compass-rose", &small_list());
        assert!(!flags.is_common_password);

        let flags = detect("pass", &small_list());
        assert_eq!(flags.matched_reason, Some(MatchReason::ExactMatch));
    }

    #[test]
    fn test_substring_gate_counts_characters_not_bytes() {
        // "日本語" is 3 characters (9 bytes): exact-only, like any short entry
        let list = Wordlist::from_lines("日本語\nありがとう\n");
        let flags = detect("A日本語x9", &list);
        assert!(!flags.is_common_password);

        // 5 characters participates regardless of byte width
        let flags = detect("Xありがとう7!", &list);
        assert_eq!(flags.matched_reason, Some(MatchReason::CommonSubstring));
    }

    #[test]
    fn test_detect_sequential_ascending() {
        let flags = detect("abcdef", &small_list());
        assert_eq!(flags.matched_reason, Some(MatchReason::SequentialPattern));
    }

    #[test]
    fn test_detect_sequential_descending() {
        let flags = detect("98765", &small_list());
        assert_eq!(flags.matched_reason, Some(MatchReason::SequentialPattern));
    }

    #[test]
    fn test_zigzag_is_not_sequential() {
        let flags = detect("ababab", &small_list());
        assert_eq!(flags.matched_reason, None);
    }

    #[test]
    fn test_detect_repeated_characters() {
        let flags = detect("aaaaaa", &small_list());
        assert_eq!(flags.matched_reason, Some(MatchReason::RepeatedCharacters));
    }

    #[test]
    fn test_two_repeated_chars_still_flagged() {
        let flags = detect("zz", &small_list());
        assert_eq!(flags.matched_reason, Some(MatchReason::RepeatedCharacters));
    }

    #[test]
    fn test_exact_match_wins_over_substring() {
        // "123456" is both an entry and contains no longer entry; exact wins
        let flags = detect("123456", &small_list());
        assert_eq!(flags.matched_reason, Some(MatchReason::ExactMatch));
    }

    #[test]
    fn test_sequential_unicode_run() {
        // consecutive Cyrillic code points
        let flags = detect("абвгд", &small_list());
        assert_eq!(flags.matched_reason, Some(MatchReason::SequentialPattern));
    }

    #[test]
    fn test_clean_password_has_no_flags() {
        let flags = detect("xK9#mQ2!vLnR", &small_list());
        assert!(!flags.is_common_password);
        assert_eq!(flags.matched_reason, None);
    }

    #[test]
    fn test_empty_password_is_clean() {
        let flags = detect("", &small_list());
        assert!(!flags.is_common_password);
    }
}
