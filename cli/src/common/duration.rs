//! # Neurolixir Time Spans (`common::duration`)
//!
//! File: cli/src/common/duration.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `TimeSpan` is a length of time held in seconds, with constructors and
//! accessors for each calendar-ish unit. All conversions go through one factor
//! table (`TimeUnit::seconds`):
//!
//! | unit   | seconds                  |
//! |--------|--------------------------|
//! | second | 1                        |
//! | minute | 60                       |
//! | hour   | 3 600                    |
//! | day    | 86 400                   |
//! | week   | 604 800                  |
//! | month  | 30 days = 2 592 000      |
//! | year   | 12 months = 31 104 000   |
//!
//! Months and years are therefore nominal (a year is 360 days), which keeps
//! `from_years(1).as_months() == 12` and `from_months(1).as_days() == 30` exact.
//!
use crate::core::error::Result;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Units a `TimeSpan` can be built from or read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Year,
    ];

    /// Length of one unit in seconds.
    pub fn seconds(self) -> f64 {
        const MINUTE: f64 = 60.0;
        const HOUR: f64 = 60.0 * MINUTE;
        const DAY: f64 = 24.0 * HOUR;
        const MONTH: f64 = 30.0 * DAY;
        match self {
            TimeUnit::Second => 1.0,
            TimeUnit::Minute => MINUTE,
            TimeUnit::Hour => HOUR,
            TimeUnit::Day => DAY,
            TimeUnit::Week => 7.0 * DAY,
            TimeUnit::Month => MONTH,
            TimeUnit::Year => 12.0 * MONTH,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TimeUnit::Second => "seconds",
            TimeUnit::Minute => "minutes",
            TimeUnit::Hour => "hours",
            TimeUnit::Day => "days",
            TimeUnit::Week => "weeks",
            TimeUnit::Month => "months",
            TimeUnit::Year => "years",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let unit = match s.trim().to_ascii_lowercase().as_str() {
            "s" | "sec" | "secs" | "second" | "seconds" => TimeUnit::Second,
            "m" | "min" | "mins" | "minute" | "minutes" => TimeUnit::Minute,
            "h" | "hr" | "hrs" | "hour" | "hours" => TimeUnit::Hour,
            "d" | "day" | "days" => TimeUnit::Day,
            "w" | "wk" | "week" | "weeks" => TimeUnit::Week,
            "mo" | "month" | "months" => TimeUnit::Month,
            "y" | "yr" | "year" | "years" => TimeUnit::Year,
            other => return Err(format!("unknown time unit '{}'", other)),
        };
        Ok(unit)
    }
}

/// A span of time stored as seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TimeSpan {
    seconds: f64,
}

impl TimeSpan {
    pub fn from_unit(amount: f64, unit: TimeUnit) -> Self {
        Self {
            seconds: amount * unit.seconds(),
        }
    }

    pub fn from_seconds(amount: f64) -> Self {
        Self::from_unit(amount, TimeUnit::Second)
    }

    pub fn from_minutes(amount: f64) -> Self {
        Self::from_unit(amount, TimeUnit::Minute)
    }

    pub fn from_hours(amount: f64) -> Self {
        Self::from_unit(amount, TimeUnit::Hour)
    }

    pub fn from_days(amount: f64) -> Self {
        Self::from_unit(amount, TimeUnit::Day)
    }

    pub fn from_weeks(amount: f64) -> Self {
        Self::from_unit(amount, TimeUnit::Week)
    }

    pub fn from_months(amount: f64) -> Self {
        Self::from_unit(amount, TimeUnit::Month)
    }

    pub fn from_years(amount: f64) -> Self {
        Self::from_unit(amount, TimeUnit::Year)
    }

    /// This span expressed in `unit`.
    pub fn in_unit(&self, unit: TimeUnit) -> f64 {
        self.seconds / unit.seconds()
    }

    pub fn as_seconds(&self) -> f64 {
        self.seconds
    }

    pub fn as_minutes(&self) -> f64 {
        self.in_unit(TimeUnit::Minute)
    }

    pub fn as_hours(&self) -> f64 {
        self.in_unit(TimeUnit::Hour)
    }

    pub fn as_days(&self) -> f64 {
        self.in_unit(TimeUnit::Day)
    }

    pub fn as_weeks(&self) -> f64 {
        self.in_unit(TimeUnit::Week)
    }

    pub fn as_months(&self) -> f64 {
        self.in_unit(TimeUnit::Month)
    }

    pub fn as_years(&self) -> f64 {
        self.in_unit(TimeUnit::Year)
    }

    /// The span as a `std::time::Duration`; fails for negative or non-finite spans.
    pub fn to_duration(&self) -> Result<Duration> {
        Duration::try_from_secs_f64(self.seconds)
            .map_err(|e| anyhow::anyhow!("cannot wait for {} seconds: {}", self.seconds, e))
    }

    /// Blocks the current thread for the length of the span.
    pub fn wait(&self) -> Result<()> {
        std::thread::sleep(self.to_duration()?);
        Ok(())
    }

    /// Async equivalent of `wait`.
    pub async fn sleep(&self) -> Result<()> {
        tokio::time::sleep(self.to_duration()?).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_breakdown() {
        let span = TimeSpan::from_years(1.0);
        assert_eq!(span.as_months(), 12.0);
        assert_eq!(span.as_days(), 360.0);
        assert_eq!(span.as_hours(), 8640.0);
        assert_eq!(span.as_seconds(), 31_104_000.0);
    }

    #[test]
    fn test_week_and_day() {
        assert_eq!(TimeSpan::from_weeks(2.0).as_days(), 14.0);
        assert_eq!(TimeSpan::from_days(1.0).as_minutes(), 1440.0);
        assert_eq!(TimeSpan::from_days(7.0).as_weeks(), 1.0);
    }

    #[test]
    fn test_small_units_scale_up() {
        assert_eq!(TimeSpan::from_seconds(90.0).as_minutes(), 1.5);
        assert_eq!(TimeSpan::from_minutes(120.0).as_hours(), 2.0);
        assert_eq!(TimeSpan::from_hours(48.0).as_days(), 2.0);
        assert_eq!(TimeSpan::from_months(6.0).as_years(), 0.5);
    }

    #[test]
    fn test_every_unit_round_trips_through_itself() {
        for unit in TimeUnit::ALL {
            assert_eq!(TimeSpan::from_unit(3.0, unit).in_unit(unit), 3.0, "{}", unit);
        }
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!("h".parse::<TimeUnit>(), Ok(TimeUnit::Hour));
        assert_eq!("Days".parse::<TimeUnit>(), Ok(TimeUnit::Day));
        assert_eq!(" mo ".parse::<TimeUnit>(), Ok(TimeUnit::Month));
        assert!("fortnight".parse::<TimeUnit>().is_err());
    }

    #[test]
    fn test_wait_rejects_negative_span() {
        assert!(TimeSpan::from_seconds(-1.0).wait().is_err());
        assert!(TimeSpan::from_seconds(f64::NAN).to_duration().is_err());
    }

    #[test]
    fn test_wait_short_span() {
        let start = std::time::Instant::now();
        TimeSpan::from_seconds(0.05).wait().unwrap();
        assert!(start.elapsed() >= Duration::from_millis(49));
    }

    #[tokio::test]
    async fn test_async_sleep() {
        let start = std::time::Instant::now();
        TimeSpan::from_seconds(0.02).sleep().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(19));
    }
}
