use crate::{
    Config,
    calendar::CalendarGrid,
    care::CareKind,
    dates::parse_input_date,
    plant::{Plant, PlantChanges, sorted_by_next_watering},
    store::{PlantDb, PlantStore},
};
use anyhow::{Result, bail};
use chrono::NaiveDate;

/// The plant collection together with its configuration and storage.
pub struct Garden {
    pub config: Config,
    pub store: PlantStore,
    pub db: PlantDb,
}

impl Garden {
    /// Creates a new `Garden`, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `Garden` with a specific `Config`, reading the plant database.
    pub fn with_config(config: Config) -> Result<Self> {
        let store = PlantStore::new(config.db_file.clone());
        let db = store.open()?;
        Ok(Self { config, store, db })
    }

    pub fn today(&self) -> NaiveDate {
        self.config.reference_date
    }

    /// Parses a user supplied day relative to the reference date.
    pub fn parse_date(&self, input: &str) -> Result<NaiveDate> {
        parse_input_date(input, self.today())
    }

    /// Finds a plant by exact name (case-insensitive) or by a filter matching a single plant.
    pub fn find_plant(&self, query: &str) -> Result<&Plant> {
        let index = self.find_index(query)?;
        Ok(&self.db.plants[index])
    }

    fn find_index(&self, query: &str) -> Result<usize> {
        let plants = &self.db.plants;
        if let Some(i) = plants
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(query.trim()))
        {
            return Ok(i);
        }

        let matches: Vec<usize> = plants
            .iter()
            .enumerate()
            .filter(|(_, p)| p.matches(query))
            .map(|(i, _)| i)
            .collect();
        match matches.as_slice() {
            [i] => Ok(*i),
            [] => bail!("no plant matches `{query}`"),
            many => {
                let names: Vec<&str> = many.iter().map(|&i| plants[i].name.as_str()).collect();
                bail!("`{query}` matches several plants: {}", names.join(", "))
            }
        }
    }

    /// Plants ordered by next watering day, optionally filtered.
    pub fn sorted_plants(&self, filter: Option<&str>) -> Vec<&Plant> {
        sorted_by_next_watering(&self.db.plants, self.today())
            .into_iter()
            .filter(|p| filter.is_none_or(|f| p.matches(f)))
            .collect()
    }

    /// Toggles a care event and returns the plant and whether the event is now recorded.
    pub fn toggle_event(
        &mut self,
        query: &str,
        kind: CareKind,
        day: NaiveDate,
    ) -> Result<(&Plant, bool)> {
        let index = self.find_index(query)?;
        let plant = &mut self.db.plants[index];
        let recorded = plant.toggle(kind, day);
        tracing::debug!(plant = %plant.name, kind = %kind, %day, recorded, "toggled event");
        Ok((&self.db.plants[index], recorded))
    }

    pub fn add_plant(&mut self, name: &str, changes: PlantChanges) -> Result<&Plant> {
        let name = name.trim();
        if name.is_empty() {
            bail!("a plant needs a name");
        }
        if self.name_taken(name, None) {
            bail!("there already is a plant called `{name}`");
        }
        let mut plant = Plant::new(name);
        plant.apply(PlantChanges {
            name: None,
            ..changes
        });
        self.db.plants.push(plant);
        Ok(&self.db.plants[self.db.plants.len() - 1])
    }

    pub fn update_plant(&mut self, query: &str, changes: PlantChanges) -> Result<&Plant> {
        let index = self.find_index(query)?;
        if let Some(new_name) = changes.name.as_deref() {
            if new_name.trim().is_empty() {
                bail!("a plant needs a name");
            }
            if self.name_taken(new_name, Some(index)) {
                bail!("there already is a plant called `{new_name}`");
            }
        }
        self.db.plants[index].apply(changes);
        Ok(&self.db.plants[index])
    }

    fn name_taken(&self, name: &str, except: Option<usize>) -> bool {
        self.db
            .plants
            .iter()
            .enumerate()
            .any(|(i, p)| Some(i) != except && p.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Calendar of the plant's care events over the last `months` months.
    pub fn calendar(&self, plant: &Plant, months: u32) -> CalendarGrid {
        CalendarGrid::build(self.today(), months, &plant.events())
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save(&mut self.db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CellStyle;
    use crate::schedule::SeasonalIntervals;
    use crate::tests::mk_config;
    use tempfile::tempdir;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn mk_garden(reference_date: NaiveDate) -> (Garden, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let config = mk_config(tmp.path(), reference_date);
        let garden = Garden::with_config(config).expect("garden with config");
        (garden, tmp)
    }

    fn with_plants(garden: &mut Garden) {
        let plants = [
            ("Friedrich", "Kitchen"),
            ("Frieda", "Bedroom"),
            ("Basil", "Kitchen"),
        ];
        for (name, location) in plants {
            garden
                .add_plant(
                    name,
                    PlantChanges {
                        location: Some(location.to_string()),
                        watering_intervals: Some(SeasonalIntervals::new(7, 14)),
                        ..Default::default()
                    },
                )
                .unwrap();
        }
    }

    #[test]
    fn finds_by_exact_name_then_unique_filter() {
        let (mut garden, _tmp) = mk_garden(d(2025, 7, 10));
        with_plants(&mut garden);

        assert_eq!(garden.find_plant("friedrich").unwrap().name, "Friedrich");
        assert_eq!(garden.find_plant("bedroom").unwrap().name, "Frieda");
        assert!(garden.find_plant("Fried").is_err());
        assert!(garden.find_plant("cactus").is_err());
    }

    #[test]
    fn rejects_duplicate_names() {
        let (mut garden, _tmp) = mk_garden(d(2025, 7, 10));
        with_plants(&mut garden);
        assert!(garden.add_plant("basil", PlantChanges::default()).is_err());
        assert!(garden.add_plant("  ", PlantChanges::default()).is_err());

        let rename = PlantChanges {
            name: Some("Frieda".to_string()),
            ..Default::default()
        };
        assert!(garden.update_plant("Basil", rename).is_err());
    }

    #[test]
    fn toggling_twice_removes_the_event() {
        let today = d(2025, 7, 10);
        let (mut garden, _tmp) = mk_garden(today);
        with_plants(&mut garden);

        let (_, recorded) = garden.toggle_event("Basil", CareKind::Watered, today).unwrap();
        assert!(recorded);
        let (plant, recorded) = garden.toggle_event("Basil", CareKind::Watered, today).unwrap();
        assert!(!recorded);
        assert!(plant.watered_at.is_empty());
    }

    #[test]
    fn persists_between_sessions() {
        let today = d(2025, 7, 10);
        let tmp = tempdir().unwrap();
        {
            let mut garden = Garden::with_config(mk_config(tmp.path(), today)).unwrap();
            with_plants(&mut garden);
            garden.toggle_event("Basil", CareKind::Watered, d(2025, 7, 8)).unwrap();
            garden.save().unwrap();
        }
        let garden = Garden::with_config(mk_config(tmp.path(), today)).unwrap();
        let basil = garden.find_plant("Basil").unwrap();
        assert_eq!(basil.watered_at, vec![d(2025, 7, 8)]);
        assert_eq!(basil.next_due(CareKind::Watered, today), Some(5));
    }

    #[test]
    fn sorted_plants_respects_filter() {
        let today = d(2025, 7, 10);
        let (mut garden, _tmp) = mk_garden(today);
        with_plants(&mut garden);
        garden.toggle_event("Friedrich", CareKind::Watered, d(2025, 7, 9)).unwrap();
        garden.toggle_event("Basil", CareKind::Watered, d(2025, 7, 4)).unwrap();

        let names: Vec<&str> = garden.sorted_plants(None).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Frieda", "Basil", "Friedrich"]);

        let kitchen: Vec<&str> = garden
            .sorted_plants(Some("kitchen"))
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(kitchen, vec!["Basil", "Friedrich"]);
    }

    #[test]
    fn calendar_shows_plant_events() {
        let today = d(2025, 7, 10);
        let (mut garden, _tmp) = mk_garden(today);
        with_plants(&mut garden);
        garden.toggle_event("Basil", CareKind::Watered, d(2025, 6, 2)).unwrap();

        let plant = garden.find_plant("Basil").unwrap();
        let grid = garden.calendar(plant, 2);
        let marked = grid
            .cells()
            .filter(|(_, c)| matches!(c.style, CellStyle::Marked(_)))
            .count();
        assert_eq!(marked, 1);
    }

    #[test]
    fn parses_dates_against_reference_day() {
        let (garden, _tmp) = mk_garden(d(2025, 7, 10));
        assert_eq!(garden.parse_date("2025-07-10").unwrap(), d(2025, 7, 10));
        assert!(garden.parse_date("2025-07-11").is_err());
    }
}
