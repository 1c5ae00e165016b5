//! Plain-text rendering of a [`Report`].
//!
//! Pure formatting: the returned string derives entirely from the report,
//! so rendering is as deterministic as the analysis itself.

use crate::engine::patterns::MatchReason;
use crate::report::Report;

/// Formats the report into the multi-section text layout shown to the user:
/// status, length, score, an optional warning banner, the four scenario
/// lines, quick advice, and the tip list with the MFA closing line.
pub fn render_report(report: &Report) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} Status: {}\n",
        report.status.emoji(),
        report.status
    ));
    out.push_str(&format!("🔢 Length: {} characters\n", report.length));
    out.push_str(&format!(
        "(Internal score: {:.1} — not necessary to understand.)\n",
        report.score
    ));

    if let Some(banner) = warning_banner(report.matched_reason) {
        out.push('\n');
        out.push_str(banner);
        out.push('\n');
    }

    out.push_str("\n--- Scenarios (how fast it can be cracked) ---\n");
    for estimate in &report.scenarios {
        out.push_str(&format!(
            "- {} ({}/s): {} — {}\n",
            estimate.scenario.name,
            group_thousands(estimate.scenario.guesses_per_second as u64),
            estimate.display,
            estimate.severity
        ));
    }

    out.push_str("\n--- Quick advice ---\n");
    out.push_str(report.status.advice());
    out.push('\n');

    // the MFA tip is structurally last and renders as the closing line
    // rather than a list entry
    if let Some((mfa, rest)) = report.tips.split_last() {
        out.push_str("\nTips:\n");
        for tip in rest {
            out.push_str(&format!("{} {}\n", tip.marker, tip.text));
        }
        out.push_str(&format!("\n{} Final tip: {} 👍\n", mfa.marker, mfa.text));
    }

    out
}

fn warning_banner(reason: Option<MatchReason>) -> Option<&'static str> {
    match reason? {
        MatchReason::ExactMatch => {
            Some("‼️  WARNING: This is a common password. Very easy to break. ‼️")
        }
        MatchReason::CommonSubstring => {
            Some("⚠️  Warning: Your password contains common word/number parts. ⚠️")
        }
        MatchReason::SequentialPattern | MatchReason::RepeatedCharacters => {
            Some("⚠️  Warning: Your password is a simple pattern. Easy to guess. ⚠️")
        }
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
