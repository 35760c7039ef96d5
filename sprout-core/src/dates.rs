use anyhow::{Result, anyhow, bail};
use chrono::{Datelike, Months, NaiveDate};

/// Number of days in `year`, 366 for leap years.
pub fn days_in_year(year: i32) -> u32 {
    match NaiveDate::from_ymd_opt(year, 12, 31) {
        Some(last) => last.ordinal(),
        None => 365,
    }
}

/// Returns the first day of the month `offset` months away from the month containing `date`.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use sprout_core::dates::first_of_month;
/// let today = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
///
/// assert_eq!(first_of_month(today, 0), NaiveDate::from_ymd_opt(2025, 1, 1));
/// assert_eq!(first_of_month(today, -2), NaiveDate::from_ymd_opt(2024, 11, 1));
/// ```
pub fn first_of_month(date: NaiveDate, offset: i32) -> Option<NaiveDate> {
    let first = date.with_day(1)?;
    let shift = Months::new(offset.unsigned_abs());
    if offset >= 0 {
        first.checked_add_months(shift)
    } else {
        first.checked_sub_months(shift)
    }
}

/// Last day of the month that starts at `first`.
pub fn last_of_month(first: NaiveDate) -> Option<NaiveDate> {
    first.checked_add_months(Months::new(1))?.pred_opt()
}

/// Signed number of whole days from `today` to `date`. Positive when `date` lies ahead.
pub fn days_from(today: NaiveDate, date: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

/// Parses a `YYYY-MM-DD` date typed by the user.
///
/// Sections may be left out or set to `0`, they are completed with `01`
/// (`2024-3` is the first of March 2024). Days after `today` are rejected.
pub fn parse_input_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let mut sections = [1i64, 1, 1];
    let parts: Vec<&str> = input.trim().split('-').collect();
    if parts.len() > sections.len() {
        bail!("invalid date `{input}`, expected YYYY-MM-DD");
    }
    for (i, part) in parts.iter().enumerate() {
        let part = part.trim();
        if part.is_empty() || part == "0" {
            continue;
        }
        sections[i] = part
            .parse()
            .map_err(|_| anyhow!("invalid date section `{part}` in `{input}`"))?;
    }

    let [year, month, day] = sections;
    let date = i32::try_from(year)
        .ok()
        .zip(u32::try_from(month).ok())
        .zip(u32::try_from(day).ok())
        .and_then(|((y, m), d)| NaiveDate::from_ymd_opt(y, m, d))
        .ok_or_else(|| anyhow!("invalid date `{input}`"))?;

    if date > today {
        bail!("day is in the future");
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn leap_years_have_366_days() {
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2023), 365);
        assert_eq!(days_in_year(1900), 365);
        assert_eq!(days_in_year(2000), 366);
    }

    #[test]
    fn first_of_month_crosses_year_boundaries() {
        assert_eq!(first_of_month(d(2025, 2, 28), -3), Some(d(2024, 11, 1)));
        assert_eq!(first_of_month(d(2024, 12, 31), 1), Some(d(2025, 1, 1)));
    }

    #[test]
    fn last_of_month_handles_february() {
        assert_eq!(last_of_month(d(2024, 2, 1)), Some(d(2024, 2, 29)));
        assert_eq!(last_of_month(d(2023, 2, 1)), Some(d(2023, 2, 28)));
        assert_eq!(last_of_month(d(2023, 12, 1)), Some(d(2023, 12, 31)));
    }

    #[test]
    fn days_from_is_signed() {
        assert_eq!(days_from(d(2025, 3, 10), d(2025, 3, 12)), 2);
        assert_eq!(days_from(d(2025, 3, 10), d(2025, 3, 1)), -9);
    }

    #[test]
    fn input_date_full_and_partial() {
        let today = d(2025, 6, 1);
        assert_eq!(parse_input_date("2025-05-20", today).unwrap(), d(2025, 5, 20));
        assert_eq!(parse_input_date("2024-3", today).unwrap(), d(2024, 3, 1));
        assert_eq!(parse_input_date("2024-0-7", today).unwrap(), d(2024, 1, 7));
        assert_eq!(parse_input_date("2024", today).unwrap(), d(2024, 1, 1));
    }

    #[test]
    fn input_date_rejects_garbage_and_future() {
        let today = d(2025, 6, 1);
        assert!(parse_input_date("2025-06-02", today).is_err());
        assert!(parse_input_date("2025-xx-01", today).is_err());
        assert!(parse_input_date("2025-02-30", today).is_err());
        assert!(parse_input_date("2025-01-01-01", today).is_err());
    }
}
