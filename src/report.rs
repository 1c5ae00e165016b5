//! The immutable analysis result handed across the crate boundary.

use crate::engine::charclass::CharClassProfile;
use crate::engine::cracktime::{CrackTimeEstimate, SCENARIOS};
use crate::engine::patterns::MatchReason;
use crate::engine::scoring::ScoreResult;
use crate::engine::status::Status;
use crate::engine::tips::{Tip, USE_MFA};

/// Everything one analysis produced.
///
/// [`crate::analyze`] returns this; the renderer and any visualizer consume
/// it. The raw password never appears in it, only derived facts.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Password length in characters, not bytes.
    pub length: usize,
    /// Entropy-style score, clamped to `0..=100`.
    pub score: f64,
    pub status: Status,
    pub is_common_password: bool,
    /// Why the password was flagged, when it was.
    pub matched_reason: Option<MatchReason>,
    pub profile: CharClassProfile,
    /// One estimate per attack scenario, weakest attacker first.
    pub scenarios: [CrackTimeEstimate; 4],
    /// Ordered advice, MFA tip always last.
    pub tips: Vec<Tip>,
}

/// Folds the pipeline outputs into a [`Report`].
///
/// Assembly itself cannot fail. Debug builds assert the cross-stage
/// invariants (estimates in scenario-table order, the MFA tip last, score
/// within the display scale, common passwords classified Weak); a violation
/// is a wiring bug in the caller, not a runtime error.
pub(crate) fn assemble(
    score: ScoreResult,
    scenarios: [CrackTimeEstimate; 4],
    status: Status,
    tips: Vec<Tip>,
) -> Report {
    debug_assert!(
        scenarios
            .iter()
            .zip(SCENARIOS.iter())
            .all(|(estimate, scenario)| estimate.scenario.name == scenario.name),
        "scenario estimates out of table order"
    );
    debug_assert_eq!(tips.last(), Some(&USE_MFA), "tip list must end with the MFA tip");
    debug_assert!(
        (0.0..=100.0).contains(&score.score),
        "score {} outside the display scale",
        score.score
    );
    debug_assert!(
        !score.flags.is_common_password || status == Status::Weak,
        "common password not classified Weak"
    );

    Report {
        length: score.profile.length,
        score: score.score,
        status,
        is_common_password: score.flags.is_common_password,
        matched_reason: score.flags.matched_reason,
        profile: score.profile,
        scenarios,
        tips,
    }
}
