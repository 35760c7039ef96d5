mod cli;
mod cli_modes;
mod render;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use cli::{Cli, Command};
use cli_modes::{add_mode, calendar_mode, care_mode, edit_mode, list_mode, show_mode};
use render::{RenderOptions, Renderer};
use sprout_core::{CareKind, Config, Garden, PlantChanges};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sprout: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr, filtered by `SPROUT_LOG` (e.g. `SPROUT_LOG=debug`).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("SPROUT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;
    if let Some(today) = &cli.today {
        config.reference_date = NaiveDate::parse_from_str(today, "%Y-%m-%d")
            .with_context(|| format!("invalid --today `{today}`, expected YYYY-MM-DD"))?;
    }
    let mut garden = Garden::with_config(config)?;
    tracing::debug!(
        db = %garden.store.path().display(),
        today = %garden.today(),
        plants = garden.db.plants.len(),
        "garden ready"
    );

    let renderer = Renderer::new(Some(RenderOptions {
        date_format: garden.config.date_format.to_string(),
        use_color: cli.color.use_color(),
    }));

    if cli.path {
        renderer.print_info(&format!("{}", garden.store.path().display()));
        return Ok(());
    }

    match cli.command {
        None => list_mode(&garden, &renderer, None),
        Some(Command::List { filter }) => list_mode(&garden, &renderer, filter.as_deref()),
        Some(Command::Show { plant, no_stats }) => show_mode(&garden, &renderer, &plant, no_stats),
        Some(Command::Calendar { plant, months }) => {
            calendar_mode(&garden, &renderer, &plant, months)
        }
        Some(Command::Water { plant, date }) => care_mode(
            &mut garden,
            &renderer,
            &plant,
            CareKind::Watered,
            date.as_deref(),
            None,
        ),
        Some(Command::Fertilize {
            plant,
            date,
            fertilizer,
        }) => care_mode(
            &mut garden,
            &renderer,
            &plant,
            CareKind::Fertilized,
            date.as_deref(),
            fertilizer.map(|fertilizer| PlantChanges {
                fertilized_with: Some(fertilizer),
                ..Default::default()
            }),
        ),
        Some(Command::Repot { plant, date, size }) => care_mode(
            &mut garden,
            &renderer,
            &plant,
            CareKind::Repotted,
            date.as_deref(),
            size.map(|size| PlantChanges {
                pot_size: Some(size),
                ..Default::default()
            }),
        ),
        Some(Command::Add { name, fields }) => add_mode(&mut garden, &renderer, &name, fields),
        Some(Command::Edit {
            plant,
            rename,
            edit_comments,
            fields,
        }) => edit_mode(
            &mut garden,
            &renderer,
            &plant,
            rename,
            edit_comments,
            fields,
        ),
    }
}
