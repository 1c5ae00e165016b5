//! Crack-time simulation under a fixed set of attacker profiles.
//!
//! The keyspace is handled in logarithm space: `alphabet_size ^ length`
//! never materializes as an integer, so oversized keyspaces saturate to
//! `f64` infinity instead of wrapping to a nonsense small number.

use super::charclass::CharClassProfile;
use super::scoring::entropy_bits;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
pub(crate) const DAY: f64 = 86_400.0;
const YEAR: f64 = 365.0 * DAY;
pub(crate) const CENTURY: f64 = 100.0 * YEAR;

/// Beyond a billion centuries the number stops meaning anything; render the
/// sentinel instead.
const EFFECTIVELY_FOREVER_SECS: f64 = 1e9 * CENTURY;

/// An attacker capability profile. The four scenarios below are fixed
/// constants of the model, not per-run configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackScenario {
    pub name: &'static str,
    pub guesses_per_second: f64,
}

/// Fixed scenario table, weakest attacker first. Output order always
/// matches this declaration order.
pub static SCENARIOS: [AttackScenario; 4] = [
    AttackScenario {
        name: "Online, very limited (login forms)",
        guesses_per_second: 10.0,
    },
    AttackScenario {
        name: "Online, lightly limited (older sites)",
        guesses_per_second: 100.0,
    },
    AttackScenario {
        name: "Local attack (single GPU)",
        guesses_per_second: 1e9,
    },
    AttackScenario {
        name: "Big attacker (GPU cluster)",
        guesses_per_second: 1e11,
    },
];

/// Expected crack time under one scenario: the average-case seconds, a
/// human-readable rendering, and a qualitative severity label.
#[derive(Debug, Clone, PartialEq)]
pub struct CrackTimeEstimate {
    pub scenario: &'static AttackScenario,
    pub seconds: f64,
    pub display: String,
    pub severity: &'static str,
}

/// Ordered `(max_seconds, label)` tiers; the first satisfied entry wins.
/// Anything past the table (including infinity) takes the last label.
const SEVERITY_TIERS: [(f64, &str); 7] = [
    (1.0, "Broken instantly."),
    (MINUTE, "Broken in under a minute."),
    (HOUR, "Broken in under an hour."),
    (DAY, "Broken within a day."),
    (YEAR, "Broken in months/years."),
    (CENTURY, "Very long to break (years)."),
    (f64::INFINITY, "Practically impossible to break."),
];

/// Simulates all four attack scenarios against the password's keyspace.
///
/// Average-case guesses are half the keyspace: `2^(bits - 1)`. The returned
/// array is in [`SCENARIOS`] order, so seconds are non-increasing as the
/// attacker gets faster.
pub fn simulate(profile: &CharClassProfile) -> [CrackTimeEstimate; 4] {
    let bits = entropy_bits(profile);
    SCENARIOS.each_ref().map(|scenario| {
        let seconds = crack_seconds(bits, scenario.guesses_per_second);
        CrackTimeEstimate {
            scenario,
            seconds,
            display: human_readable(seconds),
            severity: severity_label(seconds),
        }
    })
}

/// Average seconds to crack a `bits`-bit keyspace at the given rate.
fn crack_seconds(bits: f64, guesses_per_second: f64) -> f64 {
    (bits - 1.0).exp2() / guesses_per_second
}

/// Renders seconds in the largest sensible unit, one decimal place
/// (sub-second values in whole milliseconds).
fn human_readable(seconds: f64) -> String {
    if !seconds.is_finite() || seconds >= EFFECTIVELY_FOREVER_SECS {
        return "practically forever".to_string();
    }
    if seconds < 1.0 {
        return format!("{:.0} ms", seconds * 1000.0);
    }
    if seconds < MINUTE {
        return format!("{seconds:.1} s");
    }
    if seconds < HOUR {
        return format!("{:.1} min", seconds / MINUTE);
    }
    if seconds < DAY {
        return format!("{:.1} h", seconds / HOUR);
    }
    if seconds < YEAR {
        return format!("{:.1} days", seconds / DAY);
    }
    if seconds < CENTURY {
        return format!("{:.1} years", seconds / YEAR);
    }
    format!("{:.1} centuries", seconds / CENTURY)
}

fn severity_label(seconds: f64) -> &'static str {
    SEVERITY_TIERS
        .iter()
        .find(|(max, _)| seconds < *max)
        .map(|(_, label)| *label)
        .unwrap_or(SEVERITY_TIERS[SEVERITY_TIERS.len() - 1].1)
}
