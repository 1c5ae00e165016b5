//! Strength-estimation pipeline stages.
//!
//! [`crate::analyze`] runs these in a fixed linear order: character-class
//! profiling, common-pattern detection, scoring, crack-time simulation,
//! status classification, tip generation. Each stage depends only on the
//! stages before it, so every one is independently testable.

pub mod charclass;
pub mod cracktime;
pub mod patterns;
pub mod scoring;
pub mod status;
pub mod tips;
