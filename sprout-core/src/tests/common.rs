use crate::Config;
use crate::plant::StatsWindows;
use chrono::NaiveDate;
use std::path::Path;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(tmp_dir: &Path, reference_date: NaiveDate) -> Config {
    Config {
        db_file: tmp_dir.join("plants.json"),
        editor: None,
        months_displayed: 3,
        windows: StatsWindows::default(),
        date_format: "%Y-%m-%d".to_string(),
        reference_date,
    }
}
