//! Qualitative status derived from the numeric score.

use std::fmt;

use super::patterns::PatternFlags;

/// Score thresholds, in bits: below the first is [`Status::Weak`], below the
/// second [`Status::Okay`], below the third [`Status::Good`].
const OKAY_BITS: f64 = 28.0;
const GOOD_BITS: f64 = 36.0;
const VERY_STRONG_BITS: f64 = 60.0;

/// Strength verdict, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    Weak,
    Okay,
    Good,
    VeryStrong,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Weak => "Weak",
            Status::Okay => "Okay",
            Status::Good => "Good",
            Status::VeryStrong => "Very strong",
        }
    }

    /// Marker shown next to the status line.
    pub fn emoji(&self) -> &'static str {
        match self {
            Status::Weak | Status::Okay => "⚠️",
            Status::Good | Status::VeryStrong => "✅",
        }
    }

    /// One-sentence verdict for the quick-advice section.
    pub fn advice(&self) -> &'static str {
        match self {
            Status::Weak => "Weak. Change it now.",
            Status::Okay => "Okay. Needs improvement.",
            Status::Good => "Good. You can still improve.",
            Status::VeryStrong => "Very strong. Nice!",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Maps a score to a [`Status`]. A recognized common password is forced to
/// [`Status::Weak`] no matter how large its raw keyspace is.
pub fn classify(score: f64, flags: &PatternFlags) -> Status {
    if flags.is_common_password {
        return Status::Weak;
    }
    if score < OKAY_BITS {
        Status::Weak
    } else if score < GOOD_BITS {
        Status::Okay
    } else if score < VERY_STRONG_BITS {
        Status::Good
    } else {
        Status::VeryStrong
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::patterns::MatchReason;

    fn clean() -> PatternFlags {
        PatternFlags::default()
    }

    fn common() -> PatternFlags {
        PatternFlags {
            is_common_password: true,
            matched_reason: Some(MatchReason::ExactMatch),
        }
    }

    #[test]
    fn test_classify_threshold_bands() {
        assert_eq!(classify(0.0, &clean()), Status::Weak);
        assert_eq!(classify(27.9, &clean()), Status::Weak);
        assert_eq!(classify(28.0, &clean()), Status::Okay);
        assert_eq!(classify(35.9, &clean()), Status::Okay);
        assert_eq!(classify(36.0, &clean()), Status::Good);
        assert_eq!(classify(59.9, &clean()), Status::Good);
        assert_eq!(classify(60.0, &clean()), Status::VeryStrong);
        assert_eq!(classify(100.0, &clean()), Status::VeryStrong);
    }

    #[test]
    fn test_common_password_is_forced_weak() {
        assert_eq!(classify(100.0, &common()), Status::Weak);
        assert_eq!(classify(45.6, &common()), Status::Weak);
    }

    #[test]
    fn test_statuses_are_ordered() {
        assert!(Status::Weak < Status::Okay);
        assert!(Status::Okay < Status::Good);
        assert!(Status::Good < Status::VeryStrong);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Status::Weak.to_string(), "Weak");
        assert_eq!(Status::Okay.to_string(), "Okay");
        assert_eq!(Status::Good.to_string(), "Good");
        assert_eq!(Status::VeryStrong.to_string(), "Very strong");
    }

    #[test]
    fn test_emoji_flips_at_good() {
        assert_eq!(Status::Weak.emoji(), "⚠️");
        assert_eq!(Status::Okay.emoji(), "⚠️");
        assert_eq!(Status::Good.emoji(), "✅");
        assert_eq!(Status::VeryStrong.emoji(), "✅");
    }
}
