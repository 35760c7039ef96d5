//! The plant record and the care summaries derived from it.

use crate::calendar::{CalendarEvent, Marker};
use crate::care::CareKind;
use crate::event_log;
use crate::schedule::{
    SeasonalIntervals, average, format_average, format_next, format_since, scheduled_in,
};
use crate::store::day_list;
use anyhow::{Result, anyhow, bail};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

/// A label/value line of an overview or statistics table.
pub type InfoRow = (String, String);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plant {
    pub name: String,
    pub variety: String,
    pub location: String,
    #[serde(with = "day_list")]
    pub watered_at: Vec<NaiveDate>,
    #[serde(with = "day_list")]
    pub fertilized_at: Vec<NaiveDate>,
    #[serde(rename = "fertilizer_type", skip_serializing_if = "Option::is_none")]
    pub fertilized_with: Option<FertilizerType>,
    pub pot_size: u32,
    #[serde(with = "day_list")]
    pub repotted_at: Vec<NaiveDate>,
    pub watering_intervals: SeasonalIntervals,
    pub wet_soil_depth: u32,
    pub fertilizing_intervals: SeasonalIntervals,
    pub light_level: Option<LightLevel>,
    pub comments: String,
    pub sourced_from: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FertilizerType {
    Liquid,
    Granular,
}

impl FromStr for FertilizerType {
    type Err = anyhow::Error;

    /// Accepts any prefix of `liquid` or `granular`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_lowercase();
        if s.is_empty() {
            bail!("missing fertilizer type, expected liquid or granular");
        }
        if "liquid".starts_with(&s) {
            Ok(FertilizerType::Liquid)
        } else if "granular".starts_with(&s) {
            Ok(FertilizerType::Granular)
        } else {
            bail!("invalid fertilizer type `{s}`, expected liquid or granular")
        }
    }
}

impl fmt::Display for FertilizerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// How much light a plant gets, brightest first.
///
/// Persisted as the 1-based position, typed by users as the 0-based one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, EnumIter, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LightLevel {
    Direct,
    BrightIndirect,
    BrightSemiShaded,
    SemiShaded,
}

impl LightLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LightLevel::Direct => "direct sunlight",
            LightLevel::BrightIndirect => "bright, indirect light",
            LightLevel::BrightSemiShaded => "bright / semi-shaded",
            LightLevel::SemiShaded => "semi-shaded / shaded",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        LightLevel::iter().nth(index)
    }
}

impl TryFrom<u8> for LightLevel {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        usize::from(level)
            .checked_sub(1)
            .and_then(LightLevel::from_index)
            .ok_or_else(|| format!("invalid light level: {level}"))
    }
}

impl From<LightLevel> for u8 {
    fn from(level: LightLevel) -> u8 {
        level.index() as u8 + 1
    }
}

impl FromStr for LightLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.parse::<usize>() {
            Ok(i) => LightLevel::from_index(i).ok_or_else(|| anyhow!("light level out of range")),
            Err(_) => LightLevel::iter()
                .find(|level| level.label() == s)
                .ok_or_else(|| anyhow!("invalid light level: {s}")),
        }
    }
}

impl fmt::Display for LightLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.index(), self.label())
    }
}

/// Fields to change on a plant; `None` leaves the value untouched.
#[derive(Debug, Clone, Default)]
pub struct PlantChanges {
    pub name: Option<String>,
    pub variety: Option<String>,
    pub location: Option<String>,
    pub watering_intervals: Option<SeasonalIntervals>,
    pub fertilizing_intervals: Option<SeasonalIntervals>,
    pub pot_size: Option<u32>,
    pub wet_soil_depth: Option<u32>,
    pub light_level: Option<LightLevel>,
    pub fertilized_with: Option<FertilizerType>,
    pub sourced_from: Option<String>,
    pub comments: Option<String>,
}

/// Trailing windows, in days, for the "recent" average intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsWindows {
    pub watering: u32,
    pub fertilizing: u32,
}

impl Default for StatsWindows {
    fn default() -> Self {
        Self {
            watering: 60,
            fertilizing: 90,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub left: Vec<InfoRow>,
    pub right: Vec<InfoRow>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub watering: Vec<InfoRow>,
    pub fertilizing: Vec<InfoRow>,
}

fn row(label: &str, value: impl Into<String>) -> InfoRow {
    (label.to_string(), value.into())
}

impl Plant {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn log(&self, kind: CareKind) -> &[NaiveDate] {
        match kind {
            CareKind::Watered => &self.watered_at,
            CareKind::Fertilized => &self.fertilized_at,
            CareKind::Repotted => &self.repotted_at,
        }
    }

    fn log_mut(&mut self, kind: CareKind) -> &mut Vec<NaiveDate> {
        match kind {
            CareKind::Watered => &mut self.watered_at,
            CareKind::Fertilized => &mut self.fertilized_at,
            CareKind::Repotted => &mut self.repotted_at,
        }
    }

    /// Schedule for `kind`, repotting has none.
    pub fn intervals(&self, kind: CareKind) -> Option<SeasonalIntervals> {
        match kind {
            CareKind::Watered => Some(self.watering_intervals),
            CareKind::Fertilized => Some(self.fertilizing_intervals),
            CareKind::Repotted => None,
        }
    }

    /// Toggles the event on `day` and returns whether it is now recorded.
    pub fn toggle(&mut self, kind: CareKind, day: NaiveDate) -> bool {
        let log = self.log_mut(kind);
        *log = event_log::normalize(&event_log::toggle(log, day));
        event_log::contains_day(log, day)
    }

    /// Normalizes all event logs, returns `true` if any of them changed.
    pub fn normalize(&mut self) -> bool {
        let mut changed = false;
        for kind in CareKind::iter() {
            let log = self.log_mut(kind);
            if !event_log::is_normalized(log) {
                *log = event_log::normalize(log);
                changed = true;
            }
        }
        changed
    }

    pub fn last(&self, kind: CareKind) -> Option<NaiveDate> {
        event_log::last(self.log(kind))
    }

    /// Days until `kind` is due again, `None` if unknown.
    pub fn next_due(&self, kind: CareKind, today: NaiveDate) -> Option<i64> {
        let intervals = self.intervals(kind)?;
        scheduled_in(self.last(kind), intervals, today)
    }

    pub fn apply(&mut self, changes: PlantChanges) {
        let PlantChanges {
            name,
            variety,
            location,
            watering_intervals,
            fertilizing_intervals,
            pot_size,
            wet_soil_depth,
            light_level,
            fertilized_with,
            sourced_from,
            comments,
        } = changes;

        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = variety {
            self.variety = v;
        }
        if let Some(v) = location {
            self.location = v;
        }
        if let Some(v) = watering_intervals {
            self.watering_intervals = v;
        }
        if let Some(v) = fertilizing_intervals {
            self.fertilizing_intervals = v;
        }
        if let Some(v) = pot_size {
            self.pot_size = v;
        }
        if let Some(v) = wet_soil_depth {
            self.wet_soil_depth = v;
        }
        if light_level.is_some() {
            self.light_level = light_level;
        }
        if fertilized_with.is_some() {
            self.fertilized_with = fertilized_with;
        }
        if let Some(v) = sourced_from {
            self.sourced_from = v;
        }
        if let Some(v) = comments {
            self.comments = v;
        }
    }

    /// Calendar markers of all care events, merged per day in processing order.
    pub fn events(&self) -> Vec<CalendarEvent> {
        let mut markers: BTreeMap<NaiveDate, Marker> = BTreeMap::new();
        for kind in CareKind::iter() {
            for day in self.log(kind) {
                let marker = Marker::new(kind);
                markers
                    .entry(*day)
                    .and_modify(|m| *m = m.merge(marker))
                    .or_insert(marker);
            }
        }
        markers
            .into_iter()
            .map(|(day, marker)| CalendarEvent { day, marker })
            .collect()
    }

    /// Text searched when filtering plants.
    pub fn filter_value(&self) -> String {
        format!("{} {} {} ", self.name, self.variety, self.location)
    }

    pub fn matches(&self, filter: &str) -> bool {
        self.filter_value()
            .to_lowercase()
            .contains(&filter.trim().to_lowercase())
    }

    pub fn pot_size_label(&self) -> String {
        if self.pot_size == 0 {
            return "unknown".to_string();
        }
        format!("{}cm", self.pot_size)
    }

    pub fn overview(&self, today: NaiveDate) -> Overview {
        let mut left = vec![
            row("Variety", self.variety.as_str()),
            row("Location", self.location.as_str()),
            row("Last Watered", format_since(self.last(CareKind::Watered), today)),
            row("Last Fertilized", format_since(self.last(CareKind::Fertilized), today)),
        ];
        let mut right = vec![
            row("Watering", self.watering_intervals.to_string()),
            row("Fertilizing", self.fertilizing_intervals.to_string()),
            row(
                "Light Level",
                self.light_level.map(|l| l.to_string()).unwrap_or_default(),
            ),
            row("Soil Dryness", format!("{}cm", self.wet_soil_depth)),
        ];

        let mut additional = Vec::new();
        if let Some(repotted) = self.last(CareKind::Repotted) {
            additional.push(row("Last Repotted", format_since(Some(repotted), today)));
        }
        if self.pot_size != 0 {
            additional.push(row("Pot Size", self.pot_size_label()));
        }
        if let Some(fertilizer) = self.fertilized_with {
            additional.push(row("Fertilizer", fertilizer.to_string()));
        }
        if !self.sourced_from.is_empty() {
            additional.push(row("Sourced From", self.sourced_from.as_str()));
        }
        // spread optional rows over both columns
        for (i, extra) in additional.into_iter().enumerate() {
            if i % 2 == 0 {
                left.push(extra);
            } else {
                right.push(extra);
            }
        }

        Overview {
            left,
            right,
            comments: (!self.comments.is_empty()).then(|| self.comments.clone()),
        }
    }

    pub fn statistics(&self, today: NaiveDate, windows: StatsWindows) -> Statistics {
        let watered = self.log(CareKind::Watered);
        let fertilized = self.log(CareKind::Fertilized);
        Statistics {
            watering: vec![
                row("Next Watering Day", format_next(self.next_due(CareKind::Watered, today))),
                row("Last Watered", format_since(self.last(CareKind::Watered), today)),
                row(
                    &format!("{} Days Avg Interval", windows.watering),
                    format_average(average(watered, windows.watering, today)),
                ),
                row("Total Avg Interval", format_average(average(watered, 0, today))),
            ],
            fertilizing: vec![
                row(
                    "Next Fertilizing Day",
                    format_next(self.next_due(CareKind::Fertilized, today)),
                ),
                row("Last Fertilized", format_since(self.last(CareKind::Fertilized), today)),
                row(
                    &format!("{} Days Avg Interval", windows.fertilizing),
                    format_average(average(fertilized, windows.fertilizing, today)),
                ),
                row("Total Avg Interval", format_average(average(fertilized, 0, today))),
            ],
        }
    }
}

/// Plants ordered by next watering day. Plants without a predictable date come first.
pub fn sorted_by_next_watering(plants: &[Plant], today: NaiveDate) -> Vec<&Plant> {
    let mut sorted: Vec<&Plant> = plants.iter().collect();
    sorted.sort_by_key(|p| match p.next_due(CareKind::Watered, today) {
        None => (false, 0),
        Some(days) => (true, days),
    });
    sorted
}
