use crate::render::Renderer;
use anyhow::Result;
use sprout_core::{CareKind, Garden, PlantChanges};

/// Toggles `kind` on the given day (today by default) and saves.
/// `changes` are applied only when the event ends up recorded.
pub fn care_mode(
    garden: &mut Garden,
    renderer: &Renderer,
    query: &str,
    kind: CareKind,
    date: Option<&str>,
    changes: Option<PlantChanges>,
) -> Result<()> {
    let day = match date {
        Some(input) => garden.parse_date(input)?,
        None => garden.today(),
    };

    let (name, recorded) = {
        let (plant, recorded) = garden.toggle_event(query, kind, day)?;
        (plant.name.clone(), recorded)
    };
    if let Some(changes) = changes.filter(|_| recorded) {
        garden.update_plant(&name, changes)?;
    }
    garden.save()?;

    let plant = garden.find_plant(&name)?;
    renderer.print_toggle(plant, kind, day, recorded);
    Ok(())
}
