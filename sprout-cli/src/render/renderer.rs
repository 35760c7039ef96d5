use super::theme::Palette;
use chrono::NaiveDate;
use sprout_core::{
    CalendarGrid, CareKind, CellStyle, Plant,
    plant::{InfoRow, Overview, Statistics},
    schedule::{format_next, format_since},
};
use strum::IntoEnumIterator;
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: Palette::default_garden_skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: "%Y-%m-%d".to_string(),
                    use_color: true,
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            print!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {} |\n|-|\n", escape_cell(message));
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    pub fn format_day(&self, day: NaiveDate) -> String {
        day.format(&self.opts.date_format).to_string()
    }

    pub fn print_plant_line(&self, plant: &Plant, today: NaiveDate) {
        let mut name = plant.name.to_string();
        let mut location = if plant.location.is_empty() {
            String::new()
        } else {
            format!("({})", plant.location)
        };
        let mut next = format!(
            "water {}",
            format_next(plant.next_due(CareKind::Watered, today))
        );
        let mut last = format!(
            "last watered {}",
            format_since(plant.last(CareKind::Watered), today)
        );
        if self.opts.use_color {
            name = name.with(Palette::GREEN).bold().to_string();
            location = location.with(Palette::COMMENT).to_string();
            next = match plant.next_due(CareKind::Watered, today) {
                Some(days) if days <= 0 => next.with(Palette::RED).to_string(),
                _ => next.with(Palette::YELLOW).to_string(),
            };
            last = last.with(Palette::CYAN).to_string();
        }
        println!("{name} {location} - {next}, {last}");
    }

    pub fn print_plants(&self, plants: &[&Plant], today: NaiveDate) {
        for plant in plants {
            self.print_plant_line(plant, today);
        }
    }

    pub fn print_overview(&self, plant: &Plant, overview: &Overview) {
        if self.opts.use_color {
            let mut md = format!("# {}\n|:-|:-|:-|:-|\n", escape_cell(&plant.name));
            for (left, right) in paired(&overview.left, &overview.right) {
                md.push_str(&format!("{}{}|\n", md_cells(left), md_cells(right)));
            }
            md.push_str("|-|\n");
            if let Some(comments) = &overview.comments {
                md.push_str(&format!("\n*{}*\n", comments.trim()));
            }
            self.skin.print_text(&md);
        } else {
            println!("{}", plant.name);
            for (left, right) in paired(&overview.left, &overview.right) {
                let (key, value) = left.cloned().unwrap_or_default();
                let left = format!("{:<17}{:<30}", with_colon(&key), value);
                match right {
                    Some((key, value)) => {
                        println!("{left}{:<13}{value}", with_colon(key))
                    }
                    None => println!("{}", left.trim_end()),
                }
            }
            if let Some(comments) = &overview.comments {
                println!("\n{}", comments.trim());
            }
        }
    }

    pub fn print_statistics(&self, stats: &Statistics) {
        if self.opts.use_color {
            let mut md = String::from("|**Watering**||**Fertilizing**||\n|:-|:-|:-|:-|\n");
            for (left, right) in paired(&stats.watering, &stats.fertilizing) {
                md.push_str(&format!("{}{}|\n", md_cells(left), md_cells(right)));
            }
            md.push_str("|-|\n");
            self.skin.print_text(&md);
        } else {
            for (left, right) in paired(&stats.watering, &stats.fertilizing) {
                let (lk, lv) = left.cloned().unwrap_or_default();
                let (rk, rv) = right.cloned().unwrap_or_default();
                println!(
                    "{:<23}{:<12}{:<26}{}",
                    with_colon(&lk),
                    lv,
                    with_colon(&rk),
                    rv
                );
            }
        }
    }

    pub fn print_calendar(&self, grid: &CalendarGrid) {
        let use_color = self.opts.use_color;
        let calendar = grid.render_with(|text, style| {
            if !use_color {
                return text.to_string();
            }
            match style {
                CellStyle::Plain => text.to_string(),
                CellStyle::Today => text
                    .with(Palette::TODAY_FG)
                    .on(Palette::TODAY_BG)
                    .to_string(),
                CellStyle::Marked(marker) => {
                    let cell = text.with(Color::White).on(Palette::care_color(marker.kind));
                    if marker.stacked {
                        cell.underlined().to_string()
                    } else {
                        cell.to_string()
                    }
                }
            }
        });
        println!("{calendar}");
        if use_color {
            println!("{}", legend());
        }
    }

    pub fn print_toggle(&self, plant: &Plant, kind: CareKind, day: NaiveDate, recorded: bool) {
        let day = self.format_day(day);
        let message = if recorded {
            format!("{} {kind} on {day}", plant.name)
        } else {
            format!("Removed {kind} on {day} from {}", plant.name)
        };
        self.print_info(&message);
    }
}

fn legend() -> String {
    CareKind::iter()
        .map(|kind| {
            format!(" {kind} ")
                .with(Color::White)
                .on(Palette::care_color(kind))
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn paired<'a>(
    left: &'a [InfoRow],
    right: &'a [InfoRow],
) -> impl Iterator<Item = (Option<&'a InfoRow>, Option<&'a InfoRow>)> {
    (0..left.len().max(right.len())).map(|i| (left.get(i), right.get(i)))
}

fn md_cells(row: Option<&InfoRow>) -> String {
    match row {
        Some((key, value)) => format!("|**{}**|{}", escape_cell(key), escape_cell(value)),
        None => "||".to_string(),
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "/").replace('\n', " ")
}

fn with_colon(key: &str) -> String {
    if key.is_empty() {
        String::new()
    } else {
        format!("{key}:")
    }
}
