//! Interactive password checker.
//!
//! Reads a password with a hidden prompt, analyzes it locally, and prints
//! the report. Nothing is stored or transmitted. Without a terminal on
//! stdin it analyzes a built-in sample instead, so piped invocations still
//! demonstrate the output format.

use std::io::{self, IsTerminal, Write};
use std::process;

use clap::Parser;
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

use pwd_check::chart::{AsciiBarChart, Visualizer};
use pwd_check::{analyze, render_report};

/// Sample password analyzed in demo mode.
const DEMO_PASSWORD: &str = "Password1!";

/// Simple password check: local strength analysis, nothing stored or sent
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Analyze the built-in sample password instead of prompting
    #[arg(long)]
    demo: bool,

    /// Skip the bar-chart visualization
    #[arg(long)]
    no_chart: bool,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let password = if args.demo || !io::stdin().is_terminal() {
        if args.demo {
            println!("Demo run. Sample password: {DEMO_PASSWORD}\n");
        } else {
            println!("Demo run (no terminal input). Sample password: {DEMO_PASSWORD}\n");
        }
        SecretString::new(DEMO_PASSWORD.to_string().into())
    } else {
        println!("🔒 Simple Password Check 🔒");
        println!();
        println!("Enter your password. The input is hidden and not stored.");
        print!("Password: ");
        if let Err(err) = io::stdout().flush() {
            eprintln!("Could not prompt for password: {err}");
            return 2;
        }
        let entry = match rpassword::read_password() {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("Could not read password: {err}");
                return 2;
            }
        };
        if entry.is_empty() {
            println!("No password entered. Bye.");
            return 0;
        }
        SecretString::new(entry.into())
    };

    let report = analyze(&password);
    print!("{}", render_report(&report));

    // the chart is a capability the environment may lack; the report above
    // is complete without it
    let chart: Option<&dyn Visualizer> = if args.no_chart || !io::stdout().is_terminal() {
        None
    } else {
        Some(&AsciiBarChart)
    };
    if let Some(chart) = chart {
        chart.draw(&report);
    }

    0
}
