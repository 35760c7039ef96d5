//! Multi-month calendar grid with per-day care markers.
//!
//! ```text
//! July                  August                September
//!              1  2  3   1  2  3  4  5  6  7            1  2  3  4
//!  4  5  6  7  8  9 10   8  9 10 11 12 13 14   5  6  7  8  9 10 11
//! 11 12 13 14 15 16 17  15 16 17 18 19 20 21  12 13 14 15 16 17 18
//! 18 19 20 21 22 23 24  22 23 24 25 26 27 28  19 20 21 22 23 24 25
//! 25 26 27 28 29 30 31  29 30 31              26 27 28 29 30
//! ```

mod grid;
mod marker;

pub use grid::{COLUMN_WIDTH, CalendarGrid, CellStyle, DayCell, MonthBlock, Row, render_calendar};
pub use marker::{CalendarEvent, Marker};
