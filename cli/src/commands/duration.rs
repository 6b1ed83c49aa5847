//! # Neurolixir Duration Command
//!
//! File: cli/src/commands/duration.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `neurolixir duration <AMOUNT> <UNIT> [--wait]`, which prints a
//! time span in every unit and can optionally wait it out.
//!
//! ```text
//! $ neurolixir duration 1 year
//!    seconds: 31104000
//!    minutes: 518400
//!      hours: 8640
//!       days: 360
//!      weeks: 51.42857142857143
//!     months: 12
//!      years: 1
//! ```
//!
use crate::common::duration::{TimeSpan, TimeUnit};
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

/// Arguments for `neurolixir duration`.
#[derive(Parser, Debug)]
pub struct DurationArgs {
    /// How many units.
    #[arg(allow_negative_numbers = true)]
    amount: f64,

    /// Unit of AMOUNT: seconds, minutes, hours, days, weeks, months or years (s/m/h/d/w/mo/y).
    unit: TimeUnit,

    /// Sleep for the span before exiting.
    #[arg(long)]
    wait: bool,
}

pub async fn handle_duration(args: DurationArgs) -> Result<()> {
    info!("Handling duration command...");
    let span = TimeSpan::from_unit(args.amount, args.unit);
    for line in breakdown(&span) {
        println!("{}", line);
    }

    if args.wait {
        // Validate before announcing the wait.
        span.to_duration()?;
        println!("Waiting {} {}...", args.amount, args.unit);
        span.sleep().await?;
        println!("Done.");
    }
    Ok(())
}

/// One `unit: value` line per unit, smallest first.
fn breakdown(span: &TimeSpan) -> Vec<String> {
    TimeUnit::ALL
        .iter()
        .map(|unit| format!("{:>10}: {}", unit.name(), span.in_unit(*unit)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_duration() {
        let args = DurationArgs::try_parse_from(["duration", "1.5", "h"]).unwrap();
        assert_eq!(args.amount, 1.5);
        assert_eq!(args.unit, TimeUnit::Hour);
        assert!(!args.wait);
    }

    #[test]
    fn test_parses_negative_amount_and_rejects_bad_unit() {
        let args = DurationArgs::try_parse_from(["duration", "-2", "days"]).unwrap();
        assert_eq!(args.amount, -2.0);
        assert!(DurationArgs::try_parse_from(["duration", "2", "fortnights"]).is_err());
    }

    #[test]
    fn test_breakdown_of_a_year() {
        let lines = breakdown(&TimeSpan::from_years(1.0));
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "   seconds: 31104000");
        assert_eq!(lines[3], "      days: 360");
        assert_eq!(lines[5], "    months: 12");
        assert_eq!(lines[6], "     years: 1");
    }

    #[tokio::test]
    async fn test_wait_rejects_negative_span() {
        let args = DurationArgs::try_parse_from(["duration", "-1", "s", "--wait"]).unwrap();
        assert!(handle_duration(args).await.is_err());
    }
}
