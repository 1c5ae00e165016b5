//! Top-level analysis entry points.

use secrecy::{ExposeSecret, SecretString};

use crate::engine::{charclass, cracktime, patterns, scoring, status, tips};
use crate::report::{self, Report};
use crate::wordlist::Wordlist;

/// Analyzes a password against the bundled common-password set.
///
/// # Arguments
/// * `password` - The candidate password. Only derived metrics ever leave
///   this call, never the password itself.
///
/// # Returns
/// A [`Report`] with the score, status, per-scenario crack-time estimates
/// and improvement tips.
pub fn analyze(password: &SecretString) -> Report {
    analyze_with_wordlist(password, Wordlist::bundled())
}

/// Like [`analyze`], but checks against a caller-provided word list instead
/// of the bundled one.
pub fn analyze_with_wordlist(password: &SecretString, wordlist: &Wordlist) -> Report {
    let pwd = password.expose_secret();

    let profile = charclass::classify(pwd);
    let flags = patterns::detect(pwd, wordlist);
    let scored = scoring::score(&profile, &flags);
    let scenarios = cracktime::simulate(&profile);
    let verdict = status::classify(scored.score, &flags);
    let advice = tips::generate(&profile, &flags, verdict);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "analysis complete: length={}, classes={}, score={:.1}, status={}, flagged={}",
        profile.length,
        profile.class_count(),
        scored.score,
        verdict,
        flags.is_common_password
    );

    report::assemble(scored, scenarios, verdict, advice)
}
