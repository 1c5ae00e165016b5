//! Password strength checking library
//!
//! This library estimates how resistant a password is to guessing attacks:
//! an entropy-style score, a qualitative status, projected crack times under
//! four attacker profiles, and concrete improvement tips. Analysis is local
//! and stateless; the password is never stored, logged, or transmitted.
//!
//! # Features
//!
//! - `cli` (default): Builds the interactive `pwd-check` binary with a
//!   hidden prompt and a colored strength bar
//! - `tracing`: Enables logging via tracing crate (metrics only, never
//!   password material)
//!
//! # Example
//!
//! ```rust
//! use pwd_check::analyze;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = analyze(&password);
//!
//! println!("Status: {}", report.status);
//! println!("Score: {:.1}", report.score);
//! for estimate in &report.scenarios {
//!     println!("{}: {}", estimate.scenario.name, estimate.display);
//! }
//! ```

// Internal modules
mod analyzer;
mod engine;
mod report;
mod wordlist;

pub mod render;

#[cfg(feature = "cli")]
pub mod chart;

// Public API
pub use analyzer::{analyze, analyze_with_wordlist};
pub use engine::charclass::CharClassProfile;
pub use engine::cracktime::{AttackScenario, CrackTimeEstimate, SCENARIOS};
pub use engine::patterns::MatchReason;
pub use engine::status::Status;
pub use engine::tips::Tip;
pub use render::render_report;
pub use report::Report;
pub use wordlist::{Wordlist, WordlistError};
