//! Two-regime season model used by the care schedules.
//!
//! The boundaries approximate mid-March and mid-November for the Northern
//! hemisphere and ignore leap days.

use crate::dates::days_in_year;
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Summer,
    Winter,
}

/// Day-of-year thresholds separating summer from winter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonBoundaries {
    /// First day of year that counts as summer.
    pub summer_starts: u32,
    /// Last day of year that still counts as summer.
    pub winter_starts: u32,
}

pub const BOUNDARIES: SeasonBoundaries = SeasonBoundaries {
    summer_starts: 75,
    winter_starts: 315,
};

impl SeasonBoundaries {
    pub fn season_of(&self, day_of_year: u32) -> Season {
        if day_of_year < self.summer_starts || day_of_year > self.winter_starts {
            Season::Winter
        } else {
            Season::Summer
        }
    }

    /// Days from `today` until the next summer begins, wrapping into the next
    /// year once the current summer start has passed.
    pub fn days_until_summer(&self, today: NaiveDate) -> i64 {
        let doy = i64::from(today.ordinal());
        let start = i64::from(self.summer_starts);
        if doy < start {
            start - doy
        } else {
            i64::from(days_in_year(today.year())) + start - doy
        }
    }
}

impl Season {
    pub fn of(date: NaiveDate) -> Self {
        BOUNDARIES.season_of(date.ordinal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn boundaries_are_inclusive_for_summer() {
        assert_eq!(BOUNDARIES.season_of(74), Season::Winter);
        assert_eq!(BOUNDARIES.season_of(75), Season::Summer);
        assert_eq!(BOUNDARIES.season_of(315), Season::Summer);
        assert_eq!(BOUNDARIES.season_of(316), Season::Winter);
        assert_eq!(BOUNDARIES.season_of(1), Season::Winter);
        assert_eq!(BOUNDARIES.season_of(366), Season::Winter);
    }

    #[test]
    fn calendar_dates_map_to_seasons() {
        assert_eq!(Season::of(d(2025, 1, 10)), Season::Winter);
        assert_eq!(Season::of(d(2025, 7, 1)), Season::Summer);
        assert_eq!(Season::of(d(2025, 12, 24)), Season::Winter);
    }

    #[test]
    fn summer_countdown_before_start() {
        // 2025-01-10 is day 10
        assert_eq!(BOUNDARIES.days_until_summer(d(2025, 1, 10)), 65);
    }

    #[test]
    fn summer_countdown_wraps_with_leap_years() {
        // 2024-12-01 is day 336 of a 366 day year
        assert_eq!(BOUNDARIES.days_until_summer(d(2024, 12, 1)), 366 + 75 - 336);
        // 2023-12-01 is day 335 of a 365 day year
        assert_eq!(BOUNDARIES.days_until_summer(d(2023, 12, 1)), 365 + 75 - 335);
    }
}
