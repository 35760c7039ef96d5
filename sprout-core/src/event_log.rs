//! Per-category logs of care events, one entry per calendar day.
//!
//! A normalized log is sorted ascending and holds each day at most once.
//! Persisted logs are not trusted to be normalized, see [`normalize`].

use chrono::NaiveDate;

/// Removes `day` from the log if present, otherwise inserts it.
///
/// New days are inserted in sorted position, so toggling the same day twice
/// restores a normalized log exactly.
pub fn toggle(log: &[NaiveDate], day: NaiveDate) -> Vec<NaiveDate> {
    let mut out = log.to_vec();
    match out.iter().position(|d| *d == day) {
        Some(i) => {
            out.remove(i);
        }
        None => {
            let at = out.partition_point(|d| *d < day);
            out.insert(at, day);
        }
    }
    out
}

/// Sorts the log and collapses entries that fall on the same day.
pub fn normalize(log: &[NaiveDate]) -> Vec<NaiveDate> {
    let mut out = log.to_vec();
    out.sort();
    out.dedup();
    out
}

pub fn is_normalized(log: &[NaiveDate]) -> bool {
    log.windows(2).all(|w| w[0] < w[1])
}

/// Most recent event of a normalized log.
pub fn last(log: &[NaiveDate]) -> Option<NaiveDate> {
    log.last().copied()
}

pub fn contains_day(log: &[NaiveDate], day: NaiveDate) -> bool {
    log.contains(&day)
}
