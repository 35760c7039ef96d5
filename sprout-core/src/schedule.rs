//! Due-date math for recurring care events.
//!
//! Every function here is pure: "today" is always passed in, missing data is
//! reported as `None` or `NaN` and never as an error.

use crate::dates::days_from;
use crate::season::{BOUNDARIES, Season};
use anyhow::{Result, anyhow, bail};
use chrono::{Duration, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target number of days between two events, per season.
///
/// A `winter` of `0` means the plant has no winter schedule at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalIntervals {
    pub summer: u32,
    pub winter: u32,
}

/// `summer`, `summer/winter`, `summer/-` or `summer/`
static INTERVAL_SPEC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([^/\s]*)\s*(?:/\s*([^/\s]*)\s*)?$").unwrap());

impl SeasonalIntervals {
    pub fn new(summer: u32, winter: u32) -> Self {
        Self { summer, winter }
    }

    pub fn has_winter_schedule(&self) -> bool {
        self.winter != 0
    }

    /// Interval that applies during `season`.
    pub fn for_season(&self, season: Season) -> u32 {
        match season {
            Season::Summer => self.summer,
            Season::Winter => self.winter,
        }
    }
}

/// Parses an interval spec as typed by the user (e.g. `7/14`, `7`, `7/-`).
pub fn parse_seasonal_intervals(input: &str) -> Result<SeasonalIntervals> {
    let caps = INTERVAL_SPEC
        .captures(input)
        .ok_or_else(|| anyhow!("invalid seasonal interval `{input}`"))?;

    let summer_str = caps.get(1).map_or("", |m| m.as_str());
    let summer: u32 = summer_str
        .parse()
        .map_err(|e| anyhow!("invalid summer interval `{summer_str}`: {e}"))?;

    let winter = match caps.get(2).map(|m| m.as_str()) {
        None => summer,
        Some("") | Some("-") => 0,
        Some(w) => match w.parse() {
            Ok(w) => w,
            Err(e) => bail!("invalid winter interval `{w}`: {e}"),
        },
    };

    Ok(SeasonalIntervals { summer, winter })
}

impl FromStr for SeasonalIntervals {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_seasonal_intervals(s)
    }
}

impl fmt::Display for SeasonalIntervals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_winter_schedule() {
            write!(f, "{}/{}", self.summer, self.winter)
        } else {
            write!(f, "{}/-", self.summer)
        }
    }
}

/// Days until the next event is due, negative when overdue.
///
/// Returns `None` when no prediction is possible, i.e. the log is empty and
/// the current season has an interval. During winter without a winter
/// schedule the due date is the start of summer, independent of history.
pub fn scheduled_in(
    last_event: Option<NaiveDate>,
    intervals: SeasonalIntervals,
    today: NaiveDate,
) -> Option<i64> {
    let season = Season::of(today);
    if season == Season::Winter && !intervals.has_winter_schedule() {
        return Some(BOUNDARIES.days_until_summer(today));
    }

    let last = last_event?;
    let interval = i64::from(intervals.for_season(season));
    Some(days_from(today, last) + interval)
}

/// Human readable form of a day offset: `today`, `in 3 days`, `~2 weeks ago`...
pub fn humanize_offset(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        d if d > 0 => format!("in {}", readable_duration(d.unsigned_abs())),
        d => format!("{} ago", readable_duration(d.unsigned_abs())),
    }
}

fn readable_duration(days: u64) -> String {
    if days < 14 {
        return format!("{days} days");
    }

    let mut weeks = days / 7;
    let remainder = days % 7;
    if remainder > 3 {
        weeks += 1;
    }
    let approx = if remainder != 0 { "~" } else { "" };
    format!("{approx}{weeks} weeks")
}

/// `never` when there is no event, else how long ago it happened.
pub fn format_since(last: Option<NaiveDate>, today: NaiveDate) -> String {
    match last {
        Some(day) => humanize_offset(days_from(today, day)),
        None => "never".to_string(),
    }
}

/// Renders a `scheduled_in` result.
pub fn format_next(offset: Option<i64>) -> String {
    match offset {
        Some(days) => humanize_offset(days),
        None => "unknown".to_string(),
    }
}

/// Average number of days between consecutive events.
///
/// With a non-zero `window_days` only gaps whose earlier event lies within
/// the last `window_days` days count. Returns `NaN` when no gap qualifies.
/// `events` must be sorted.
pub fn average(events: &[NaiveDate], window_days: u32, today: NaiveDate) -> f64 {
    // a window reaching past the representable range is unbounded
    let start = match window_days {
        0 => None,
        days => today.checked_sub_signed(Duration::days(i64::from(days))),
    };

    let (total, count) = events
        .windows(2)
        .filter(|pair| start.is_none_or(|start| pair[0] >= start))
        .fold((0i64, 0u32), |(total, count), pair| {
            (total + days_from(pair[0], pair[1]), count + 1)
        });

    if count < 1 {
        return f64::NAN;
    }
    total as f64 / f64::from(count)
}

/// `n/a` for missing averages, else the rounded number of days.
pub fn format_average(avg: f64) -> String {
    if avg.is_nan() {
        return "n/a".to_string();
    }
    format!("{avg:.0} days")
}
