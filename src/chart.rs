//! Optional terminal visualization of a [`Report`].

use owo_colors::OwoColorize;

use crate::engine::cracktime::{CENTURY, DAY};
use crate::engine::status::Status;
use crate::report::Report;

/// A charting capability the composition root may or may not provide.
/// The analysis and the textual report never depend on whether one exists.
pub trait Visualizer {
    fn draw(&self, report: &Report);
}

/// Terminal bar chart: a 50-cell strength bar over the 0-100 score, plus one
/// log-scaled bar per attack scenario.
pub struct AsciiBarChart;

const SCORE_CELLS: usize = 50;
const SCENARIO_CELLS: usize = 24;

/// Range of `log10(seconds)` spanned by the scenario bars: 1 ms up to the
/// "practically forever" sentinel.
const LOG_FLOOR: f64 = -3.0;
const LOG_CEIL: f64 = 18.5;

impl Visualizer for AsciiBarChart {
    fn draw(&self, report: &Report) {
        println!();
        println!("{}", score_line(report));
        println!();
        println!("Crack-time outlook (longer bar = safer):");
        for estimate in &report.scenarios {
            let line = format!(
                "  {:<38} [{}] {}",
                estimate.scenario.name,
                bar(scenario_cells(estimate.seconds), SCENARIO_CELLS),
                estimate.display
            );
            if estimate.seconds < DAY {
                println!("{}", line.bright_red());
            } else if estimate.seconds < CENTURY {
                println!("{}", line.yellow());
            } else {
                println!("{}", line.bright_green());
            }
        }
    }
}

fn score_line(report: &Report) -> String {
    let caption = format!(
        "Visual: [{}] {:.0}/100",
        bar(score_cells(report.score), SCORE_CELLS),
        report.score
    );
    match report.status {
        Status::Weak => caption.bright_red().to_string(),
        Status::Okay => caption.yellow().to_string(),
        Status::Good => caption.green().to_string(),
        Status::VeryStrong => caption.bright_green().to_string(),
    }
}

fn bar(filled: usize, width: usize) -> String {
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}

/// Two score points per cell, truncated.
fn score_cells(score: f64) -> usize {
    (score.clamp(0.0, 100.0) / 2.0) as usize
}

fn scenario_cells(seconds: f64) -> usize {
    if !seconds.is_finite() {
        return SCENARIO_CELLS;
    }
    let fraction = ((seconds.log10() - LOG_FLOOR) / (LOG_CEIL - LOG_FLOOR)).clamp(0.0, 1.0);
    (fraction * SCENARIO_CELLS as f64).round() as usize
}
