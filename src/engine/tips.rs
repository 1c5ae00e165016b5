//! Remediation tips derived from the analysis findings.
//!
//! Ordering contract: warning tips first, constructive tips next in a fixed
//! priority order, and the MFA tip always last. The list never contains
//! duplicates.

use super::charclass::CharClassProfile;
use super::patterns::PatternFlags;
use super::status::Status;

/// Anything at or below this length is "very short" and warned about even
/// when it is not in the common list.
const SHORT_PASSWORD_LEN: usize = 4;
const MIN_RECOMMENDED_LEN: usize = 12;

/// A single piece of advice: an emoji marker plus one sentence of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    pub marker: &'static str,
    pub text: &'static str,
}

pub const COMMON_OR_SHORT: Tip = Tip {
    marker: "⚠️",
    text: "Don't use common or very short passwords.",
};
pub const LONGER: Tip = Tip {
    marker: "➕",
    text: "Make it longer (12+ characters).",
};
pub const ADD_LOWERCASE: Tip = Tip {
    marker: "🔡",
    text: "Add lowercase letters.",
};
pub const ADD_UPPERCASE: Tip = Tip {
    marker: "🔠",
    text: "Add uppercase letters.",
};
pub const ADD_DIGITS: Tip = Tip {
    marker: "🔢",
    text: "Add numbers.",
};
pub const ADD_SYMBOLS: Tip = Tip {
    marker: "🔣",
    text: "Add symbols (e.g. !?@#).",
};
pub const PRAISE: Tip = Tip {
    marker: "✅",
    text: "Nice! Consider a passphrase or a password manager.",
};
pub const USE_MFA: Tip = Tip {
    marker: "🔐",
    text: "Use MFA (Multi-Factor Authentication) when possible.",
};

/// Builds the ordered tip list for one analysis.
///
/// The praise tip appears only when no warning or constructive tip fired and
/// the verdict is at least [`Status::Good`]. The MFA tip closes the list
/// unconditionally.
pub fn generate(profile: &CharClassProfile, flags: &PatternFlags, status: Status) -> Vec<Tip> {
    let mut tips = Vec::new();

    if flags.is_common_password || profile.length <= SHORT_PASSWORD_LEN {
        push_unique(&mut tips, COMMON_OR_SHORT);
    }

    if profile.length < MIN_RECOMMENDED_LEN {
        push_unique(&mut tips, LONGER);
    }
    if !profile.has_lowercase {
        push_unique(&mut tips, ADD_LOWERCASE);
    }
    if !profile.has_uppercase {
        push_unique(&mut tips, ADD_UPPERCASE);
    }
    if !profile.has_digit {
        push_unique(&mut tips, ADD_DIGITS);
    }
    if !profile.has_symbol {
        push_unique(&mut tips, ADD_SYMBOLS);
    }

    if tips.is_empty() && status >= Status::Good {
        push_unique(&mut tips, PRAISE);
    }

    // always present, always the final entry
    tips.push(USE_MFA);
    tips
}

fn push_unique(tips: &mut Vec<Tip>, tip: Tip) {
    if !tips.contains(&tip) {
        tips.push(tip);
    }
}
