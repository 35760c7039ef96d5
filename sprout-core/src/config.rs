use crate::plant::StatsWindows;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file holding all plants.
    pub db_file: PathBuf,
    /// Preferred editor for plant comments. Optional; the CLI falls back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    /// How many months the calendar shows, ending with the current one.
    pub months_displayed: u32,
    pub windows: StatsWindows,
    /// Format used when printing single days, e.g. "%Y-%m-%d".
    pub date_format: String,
    /// The day treated as "today" by every schedule computation.
    pub reference_date: NaiveDate,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    db_file: Option<PathBuf>,
    editor: Option<String>,
    months_displayed: Option<u32>,
    watering_window_days: Option<u32>,
    fertilizing_window_days: Option<u32>,
    date_format: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    /// A config file that cannot be read or parsed is reported and ignored.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|e| {
            tracing::warn!(error = %format!("{e:#}"), "ignoring config file");
            FileConfig::default()
        });
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let defaults = StatsWindows::default();
        Self {
            db_file: file_config.db_file.unwrap_or_else(Self::default_db_file),
            editor: file_config.editor,
            months_displayed: file_config.months_displayed.unwrap_or(3),
            windows: StatsWindows {
                watering: file_config
                    .watering_window_days
                    .unwrap_or(defaults.watering),
                fertilizing: file_config
                    .fertilizing_window_days
                    .unwrap_or(defaults.fertilizing),
            },
            date_format: file_config
                .date_format
                .unwrap_or_else(|| "%Y-%m-%d".to_string()),
            reference_date: Local::now().date_naive(),
        }
    }

    /// Default database: `{data_dir}/sprout/plants.json`
    /// - macOS:   `~/Library/Application Support/sprout/plants.json`
    /// - Linux:   `$XDG_DATA_HOME/sprout/plants.json` or `~/.local/share/sprout/plants.json`
    /// - Windows: `%APPDATA%\sprout\plants.json`
    fn default_db_file() -> PathBuf {
        let dir = match BaseDirs::new() {
            Some(base) => base.data_dir().join("sprout"),
            None => PathBuf::from("./sprout"),
        };
        dir.join("plants.json")
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("sprout")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("sprout").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            tracing::debug!(path = %path.display(), "reading config");
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
