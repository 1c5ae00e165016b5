//! Entropy-style scoring - length, alphabet size and class diversity folded
//! into one bounded number.

use super::charclass::CharClassProfile;
use super::patterns::PatternFlags;

/// Upper end of the display scale.
const SCORE_CEILING: f64 = 100.0;

/// Flagged passwords never score above this, whatever their raw entropy;
/// a 16-character wordlist entry must still land in the weak band.
const COMMON_SCORE_CAP: f64 = 10.0;

/// A bounded strength score together with the findings it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreResult {
    /// Display score in `[0, 100]`.
    pub score: f64,
    pub profile: CharClassProfile,
    pub flags: PatternFlags,
}

/// Raw entropy estimate in bits: `length * log2(alphabet_size)`.
///
/// 0.0 when the password is empty. Class diversity feeds in through the
/// alphabet-size sum, which keeps the estimate monotonic both in length
/// and in the number of classes present.
pub fn entropy_bits(profile: &CharClassProfile) -> f64 {
    let alphabet = profile.alphabet_size();
    if profile.length == 0 || alphabet == 0 {
        return 0.0;
    }
    profile.length as f64 * f64::from(alphabet).log2()
}

/// Maps the raw bits onto the `[0, 100]` display scale.
///
/// The map is linear with divisor 1.0, so an 8-character two-class password
/// scores 45.6 and a 12-character four-class password about 78.7; anything
/// past 100 bits pins to the ceiling. Wordlist hits are capped hard at
/// [`COMMON_SCORE_CAP`] on top of the status override, so the number itself
/// already reads as weak. Identical inputs always produce the identical
/// score.
pub fn score(profile: &CharClassProfile, flags: &PatternFlags) -> ScoreResult {
    let mut score = entropy_bits(profile).clamp(0.0, SCORE_CEILING);
    if flags.is_common_password {
        score = score.min(COMMON_SCORE_CAP);
    }
    ScoreResult {
        score,
        profile: *profile,
        flags: *flags,
    }
}
