//! JSON persistence of the plant collection.
//!
//! The whole document is read once and written back wholesale:
//! `{"plants": [ {...}, ... ]}`.

use crate::plant::Plant;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlantDb {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub plants: Vec<Plant>,
}

impl PlantDb {
    /// Normalizes every event log, returns the number of plants that changed.
    pub fn normalize(&mut self) -> usize {
        self.plants
            .iter_mut()
            .map(|p| p.normalize())
            .filter(|changed| *changed)
            .count()
    }
}

#[derive(Debug, Clone)]
pub struct PlantStore {
    path: PathBuf,
}

impl PlantStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the database; a missing file is an empty collection.
    pub fn open(&self) -> Result<PlantDb> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no database yet, starting empty");
                return Ok(PlantDb::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };

        let mut db: PlantDb = serde_json::from_str(&data)
            .with_context(|| format!("malformed database {}", self.path.display()))?;
        let changed = db.normalize();
        if changed > 0 {
            tracing::debug!(plants = changed, "normalized event logs on load");
        }
        tracing::debug!(path = %self.path.display(), plants = db.plants.len(), "database loaded");
        Ok(db)
    }

    /// Normalizes and writes the whole database.
    pub fn save(&self, db: &mut PlantDb) -> Result<()> {
        db.normalize();
        let data = serde_json::to_string_pretty(db).context("serializing plant database")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating parent directory {}", parent.display()))?;
        }
        fs::write(&self.path, data).with_context(|| format!("writing {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), plants = db.plants.len(), "database saved");
        Ok(())
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serde adapter for day lists.
///
/// Days are written as RFC 3339 timestamps at UTC midnight
/// (`2025-05-01T00:00:00Z`), the form existing databases use. Reading also
/// accepts plain `YYYY-MM-DD`, timestamps in any offset (truncated to their
/// calendar day) and `null`.
pub mod day_list {
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer, de};

    const DAY_FORMAT: &str = "%Y-%m-%d";
    const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT00:00:00Z";

    pub fn serialize<S: Serializer>(days: &[NaiveDate], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(days.iter().map(|d| d.format(TIMESTAMP_FORMAT).to_string()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<NaiveDate>, D::Error> {
        let raw: Option<Vec<String>> = Option::deserialize(deserializer)?;
        raw.unwrap_or_default()
            .iter()
            .map(|s| parse_day(s).map_err(de::Error::custom))
            .collect()
    }

    pub fn parse_day(s: &str) -> Result<NaiveDate, String> {
        if let Ok(day) = NaiveDate::parse_from_str(s, DAY_FORMAT) {
            return Ok(day);
        }
        DateTime::parse_from_rfc3339(s)
            .map(|t| t.date_naive())
            .map_err(|e| format!("invalid day `{s}`: {e}"))
    }
}
