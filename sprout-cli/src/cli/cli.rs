use clap::{Args, Parser, Subcommand};
use sprout_core::{FertilizerType, LightLevel, PlantChanges, SeasonalIntervals};

use crate::render::ColorMode;

/// sprout: keeps track of watering, fertilizing and repotting your plants
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Prints the plant database file
    #[arg(long, short)]
    pub path: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, global = true, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Pretend today is another day (YYYY-MM-DD). Useful to look back or ahead.
    #[arg(long, global = true, env = "SPROUT_TODAY")]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lists all plants, the thirstiest first
    List {
        /// Only show plants whose name, variety or location contains this text
        #[arg(long, short)]
        filter: Option<String>,
    },
    /// Shows a plant's details, calendar and statistics
    Show {
        plant: String,
        /// Skip the statistics table
        #[arg(long)]
        no_stats: bool,
    },
    /// Shows the care calendar of a plant
    Calendar {
        plant: String,
        /// Number of months to show, ending with the current one
        #[arg(long, short)]
        months: Option<u32>,
    },
    /// Marks a plant as watered, or removes the mark if it is already set for that day
    Water {
        plant: String,
        /// Day of the event (e.g. `2025-07-01`, `2025-7`), defaults to today
        #[arg(long, short)]
        date: Option<String>,
    },
    /// Marks a plant as fertilized, or removes the mark if it is already set for that day
    Fertilize {
        plant: String,
        /// Day of the event, defaults to today
        #[arg(long, short)]
        date: Option<String>,
        /// Fertilizer used: liquid or granular (prefixes work)
        #[arg(long = "with", short)]
        fertilizer: Option<FertilizerType>,
    },
    /// Marks a plant as repotted, or removes the mark if it is already set for that day
    Repot {
        plant: String,
        /// Day of the event, defaults to today
        #[arg(long, short)]
        date: Option<String>,
        /// New pot size in cm
        #[arg(long, short)]
        size: Option<u32>,
    },
    /// Adds a new plant
    Add {
        name: String,
        #[command(flatten)]
        fields: PlantFields,
    },
    /// Changes the details of a plant
    Edit {
        plant: String,
        /// New name for the plant
        #[arg(long)]
        rename: Option<String>,
        /// Opens your $EDITOR with the plant's comments
        #[arg(long, conflicts_with = "comments")]
        edit_comments: bool,
        #[command(flatten)]
        fields: PlantFields,
    },
}

#[derive(Args, Debug, Default)]
pub struct PlantFields {
    /// e.g. `monstera deliciosa`
    #[arg(long)]
    pub variety: Option<String>,
    /// e.g. `Kitchen`
    #[arg(long)]
    pub location: Option<String>,
    /// Days between waterings: `summer/winter`, `summer` or `summer/-` (no watering in winter)
    #[arg(long)]
    pub watering: Option<SeasonalIntervals>,
    /// Days between fertilizing: `summer/winter`, `summer` or `summer/-`
    #[arg(long)]
    pub fertilizing: Option<SeasonalIntervals>,
    /// Pot size in cm
    #[arg(long)]
    pub pot_size: Option<u32>,
    /// How deep the soil may dry out before watering, in cm
    #[arg(long)]
    pub soil_depth: Option<u32>,
    /// 0 - direct, 1 - bright, 2 - semi-shaded, 3 - shaded
    #[arg(long)]
    pub light: Option<LightLevel>,
    /// Fertilizer used: liquid or granular
    #[arg(long)]
    pub fertilizer: Option<FertilizerType>,
    /// e.g. `Propagation`
    #[arg(long)]
    pub sourced_from: Option<String>,
    #[arg(long)]
    pub comments: Option<String>,
}

impl PlantFields {
    pub fn into_changes(self, name: Option<String>) -> PlantChanges {
        PlantChanges {
            name,
            variety: self.variety,
            location: self.location,
            watering_intervals: self.watering,
            fertilizing_intervals: self.fertilizing,
            pot_size: self.pot_size,
            wet_soil_depth: self.soil_depth,
            light_level: self.light,
            fertilized_with: self.fertilizer,
            sourced_from: self.sourced_from,
            comments: self.comments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_care_commands() {
        let args = ["sprout", "fertilize", "Basil", "--with", "liq", "-d", "2025-7"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Some(Command::Fertilize {
                plant,
                date,
                fertilizer,
            }) => {
                assert_eq!(plant, "Basil");
                assert_eq!(date.as_deref(), Some("2025-7"));
                assert_eq!(fertilizer, Some(FertilizerType::Liquid));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_plant_fields() {
        let cli = Cli::try_parse_from([
            "sprout", "add", "Friedrich", "--watering", "7/-", "--light", "1", "--pot-size", "14",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Add { name, fields }) => {
                assert_eq!(name, "Friedrich");
                let changes = fields.into_changes(None);
                assert_eq!(changes.watering_intervals, Some(SeasonalIntervals::new(7, 0)));
                assert_eq!(changes.light_level, Some(LightLevel::BrightIndirect));
                assert_eq!(changes.pot_size, Some(14));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_intervals() {
        assert!(Cli::try_parse_from(["sprout", "add", "Basil", "--watering", "weekly"]).is_err());
    }
}
