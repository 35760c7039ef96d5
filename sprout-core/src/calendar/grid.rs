use super::marker::{CalendarEvent, Marker};
use crate::dates::{first_of_month, last_of_month};
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// Visible width of a single day cell: two digits and a separator.
pub const COLUMN_WIDTH: usize = 3;
const WEEK_WIDTH: usize = COLUMN_WIDTH * 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Plain,
    Today,
    Marked(Marker),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub style: CellStyle,
}

impl DayCell {
    /// Day number centered in a [`COLUMN_WIDTH`] wide field.
    pub fn text(&self) -> String {
        format!("{:^width$}", self.day, width = COLUMN_WIDTH)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Header(String),
    /// `padding` empty cells followed by `cells`.
    Week { padding: usize, cells: Vec<DayCell> },
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBlock {
    pub first_day: NaiveDate,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CalendarGrid {
    /// Oldest month first, the month containing "today" last.
    pub months: Vec<MonthBlock>,
}

impl CalendarGrid {
    /// Lays out `months` months ending with the month of `today`.
    ///
    /// Events falling on the same day are folded in order with
    /// [`Marker::merge`]: the later one sets the color and the cell is
    /// flagged as stacked.
    pub fn build(today: NaiveDate, months: u32, events: &[CalendarEvent]) -> Self {
        let mut markers: HashMap<NaiveDate, Marker> = HashMap::new();
        for event in events {
            markers
                .entry(event.day)
                .and_modify(|m| *m = m.merge(event.marker))
                .or_insert(event.marker);
        }

        let months_displayed = i32::try_from(months).unwrap_or(i32::MAX);
        let blocks = (0..months_displayed)
            .filter_map(|k| {
                let month_offset = (k + 1) - months_displayed;
                month_block(today, month_offset, &markers)
            })
            .collect();

        Self { months: blocks }
    }

    /// Composes all months side by side.
    ///
    /// `paint` receives the text of every day cell and returns it styled; the
    /// result may contain escape sequences, widths are computed from the
    /// unstyled text.
    pub fn render_with<F>(&self, paint: F) -> String
    where
        F: Fn(&str, CellStyle) -> String,
    {
        let max_rows = self.months.iter().map(|m| m.rows.len()).max().unwrap_or(0);

        let mut out = String::new();
        for line in 0..max_rows {
            for (position, month) in self.months.iter().enumerate() {
                if position > 0 {
                    out.push(' ');
                }
                let (text, width) = match month.rows.get(line) {
                    Some(row) => render_row(row, &paint),
                    None => (String::new(), 0),
                };
                out.push_str(&text);
                out.push_str(&" ".repeat(WEEK_WIDTH.saturating_sub(width)));
            }
            out.push('\n');
        }
        out.trim().to_string()
    }

    /// Every day cell of the grid, month by month.
    pub fn cells(&self) -> impl Iterator<Item = (&MonthBlock, &DayCell)> {
        self.months.iter().flat_map(|month| {
            month.rows.iter().flat_map(move |row| match row {
                Row::Week { cells, .. } => {
                    cells.iter().map(move |c| (month, c)).collect::<Vec<_>>()
                }
                _ => Vec::new(),
            })
        })
    }
}

/// Plain-text calendar of `months` months ending with the month of `today`.
pub fn render_calendar(today: NaiveDate, months: u32, events: &[CalendarEvent]) -> String {
    CalendarGrid::build(today, months, events).render_with(|text, _| text.to_string())
}

fn month_block(
    today: NaiveDate,
    month_offset: i32,
    markers: &HashMap<NaiveDate, Marker>,
) -> Option<MonthBlock> {
    let first_day = first_of_month(today, month_offset)?;
    let last_day = last_of_month(first_day)?.day();
    let start_offset = first_day.weekday().num_days_from_monday() as usize;

    let mut rows = vec![Row::Header(first_day.format("%B").to_string())];
    let mut padding = start_offset;
    let mut cells = Vec::with_capacity(7);

    for day in 1..=last_day {
        let date = first_day.with_day(day)?;
        let style = match markers.get(&date) {
            Some(marker) => CellStyle::Marked(*marker),
            None if date == today && month_offset == 0 => CellStyle::Today,
            None => CellStyle::Plain,
        };
        cells.push(DayCell { day, style });

        // break after the 7th cell, unless the month ends there
        if (day as usize + start_offset) % 7 == 0 && day != last_day {
            rows.push(Row::Week {
                padding,
                cells: std::mem::take(&mut cells),
            });
            padding = 0;
        }
    }
    rows.push(Row::Week { padding, cells });
    rows.push(Row::Blank);

    Some(MonthBlock { first_day, rows })
}

fn render_row<F>(row: &Row, paint: &F) -> (String, usize)
where
    F: Fn(&str, CellStyle) -> String,
{
    match row {
        Row::Header(name) => (name.clone(), name.chars().count()),
        Row::Week { padding, cells } => {
            let mut text = " ".repeat(padding * COLUMN_WIDTH);
            for cell in cells {
                text.push_str(&paint(&cell.text(), cell.style));
            }
            (text, (padding + cells.len()) * COLUMN_WIDTH)
        }
        Row::Blank => (String::new(), 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::care::CareKind;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn event(day: NaiveDate, kind: CareKind) -> CalendarEvent {
        CalendarEvent {
            day,
            marker: Marker::new(kind),
        }
    }

    fn today_cells(grid: &CalendarGrid) -> Vec<(NaiveDate, u32)> {
        grid.cells()
            .filter(|(_, c)| c.style == CellStyle::Today)
            .map(|(m, c)| (m.first_day, c.day))
            .collect()
    }

    #[test]
    fn cells_are_centered_in_three_columns() {
        let one = DayCell { day: 1, style: CellStyle::Plain };
        let twelve = DayCell { day: 12, style: CellStyle::Plain };
        assert_eq!(one.text(), " 1 ");
        assert_eq!(twelve.text(), "12 ");
    }

    #[test]
    fn month_starting_on_monday_has_no_padding() {
        // February 2021 starts on a Monday and has 28 days
        let grid = CalendarGrid::build(d(2021, 2, 10), 1, &[]);
        let rows = &grid.months[0].rows;
        match &rows[1] {
            Row::Week { padding, cells } => {
                assert_eq!(*padding, 0);
                assert_eq!(cells.len(), 7);
            }
            other => panic!("expected week row, got {other:?}"),
        }
    }

    #[test]
    fn four_week_february_has_four_full_rows_and_no_trailing_line() {
        let out = render_calendar(d(2021, 2, 10), 1, &[]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].trim_end(), "February");
        assert_eq!(lines[1], " 1  2  3  4  5  6  7 ");
        assert_eq!(lines[4], "22 23 24 25 26 27 28");
    }

    #[test]
    fn leading_padding_follows_monday_first_weekday() {
        // July 2022 starts on a Friday
        let out = render_calendar(d(2022, 7, 20), 1, &[]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], format!("{} 1  2  3 ", " ".repeat(12)));
        assert_eq!(lines[2], " 4  5  6  7  8  9 10 ");
        assert_eq!(lines.last().copied(), Some("25 26 27 28 29 30 31"));
    }

    #[test]
    fn three_months_side_by_side() {
        let out = render_calendar(d(2022, 9, 15), 3, &[]);
        let expected = [
            "July                  August                September",
            "             1  2  3   1  2  3  4  5  6  7            1  2  3  4 ",
            " 4  5  6  7  8  9 10   8  9 10 11 12 13 14   5  6  7  8  9 10 11 ",
            "11 12 13 14 15 16 17  15 16 17 18 19 20 21  12 13 14 15 16 17 18 ",
            "18 19 20 21 22 23 24  22 23 24 25 26 27 28  19 20 21 22 23 24 25 ",
            "25 26 27 28 29 30 31  29 30 31              26 27 28 29 30",
        ];
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), expected.len());
        assert_eq!(lines[0].trim_end(), expected[0]);
        for (line, want) in lines.iter().zip(expected.iter()).skip(1) {
            assert_eq!(line, want);
        }
    }

    #[test]
    fn months_cross_year_boundary() {
        let grid = CalendarGrid::build(d(2025, 1, 5), 3, &[]);
        let firsts: Vec<NaiveDate> = grid.months.iter().map(|m| m.first_day).collect();
        assert_eq!(firsts, vec![d(2024, 11, 1), d(2024, 12, 1), d(2025, 1, 1)]);
    }

    #[test]
    fn exactly_one_today_cell() {
        let grid = CalendarGrid::build(d(2025, 3, 10), 3, &[]);
        assert_eq!(today_cells(&grid), vec![(d(2025, 3, 1), 10)]);
    }

    #[test]
    fn marker_takes_precedence_over_today() {
        let today = d(2025, 3, 10);
        let grid = CalendarGrid::build(today, 3, &[event(today, CareKind::Watered)]);
        assert!(today_cells(&grid).is_empty());
    }

    #[test]
    fn events_are_matched_to_their_own_month_and_year() {
        let events = [
            event(d(2024, 12, 24), CareKind::Watered),
            event(d(2023, 12, 24), CareKind::Fertilized),
            event(d(2025, 1, 2), CareKind::Repotted),
        ];
        let grid = CalendarGrid::build(d(2025, 1, 15), 2, &events);
        let marked: Vec<(NaiveDate, u32, CareKind)> = grid
            .cells()
            .filter_map(|(m, c)| match c.style {
                CellStyle::Marked(marker) => Some((m.first_day, c.day, marker.kind)),
                _ => None,
            })
            .collect();
        assert_eq!(
            marked,
            vec![
                (d(2024, 12, 1), 24, CareKind::Watered),
                (d(2025, 1, 1), 2, CareKind::Repotted),
            ]
        );
    }

    #[test]
    fn same_day_events_overlay_in_order() {
        let events = [
            event(d(2025, 3, 5), CareKind::Watered),
            event(d(2025, 3, 5), CareKind::Fertilized),
            event(d(2025, 3, 7), CareKind::Repotted),
        ];
        let grid = CalendarGrid::build(d(2025, 3, 20), 1, &events);
        let marked: Vec<(u32, CareKind, bool)> = grid
            .cells()
            .filter_map(|(_, c)| match c.style {
                CellStyle::Marked(marker) => Some((c.day, marker.kind, marker.stacked)),
                _ => None,
            })
            .collect();
        assert_eq!(
            marked,
            vec![(5, CareKind::Fertilized, true), (7, CareKind::Repotted, false)]
        );
    }

    #[test]
    fn painter_styles_cells_without_breaking_alignment() {
        let today = d(2021, 2, 10);
        let events = [event(d(2021, 2, 3), CareKind::Watered)];
        let out = CalendarGrid::build(today, 1, &events).render_with(|text, style| match style {
            CellStyle::Plain => text.to_string(),
            CellStyle::Today => format!("[{}]", text.trim()),
            CellStyle::Marked(_) => format!("<{}>", text.trim()),
        });
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], " 1  2 <3> 4  5  6  7 ");
        assert_eq!(lines[2], " 8  9 [10]11 12 13 14 ");
    }

    #[test]
    fn zero_months_render_nothing() {
        assert_eq!(render_calendar(d(2025, 3, 10), 0, &[]), "");
        assert!(CalendarGrid::build(d(2025, 3, 10), 0, &[]).months.is_empty());
    }
}
