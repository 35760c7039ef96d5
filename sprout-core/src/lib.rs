pub mod calendar;
pub mod care;
pub mod config;
pub mod dates;
pub mod event_log;
pub mod garden;
pub mod plant;
pub mod schedule;
pub mod season;
pub mod store;

#[cfg(test)]
mod tests;

pub use calendar::{CalendarEvent, CalendarGrid, CellStyle, Marker, render_calendar};
pub use care::CareKind;
pub use config::Config;
pub use garden::Garden;
pub use plant::{FertilizerType, LightLevel, Plant, PlantChanges, StatsWindows};
pub use schedule::{SeasonalIntervals, average, humanize_offset, scheduled_in};
