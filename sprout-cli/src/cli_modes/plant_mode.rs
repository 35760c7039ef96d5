use super::editor_utils::{edit_in_buffer, resolve_editor};
use crate::{cli::PlantFields, render::Renderer};
use anyhow::Result;
use sprout_core::Garden;

pub fn add_mode(
    garden: &mut Garden,
    renderer: &Renderer,
    name: &str,
    fields: PlantFields,
) -> Result<()> {
    let name = garden.add_plant(name, fields.into_changes(None))?.name.clone();
    garden.save()?;
    renderer.print_info(&format!("Added {name} to {}", garden.store.path().display()));
    Ok(())
}

pub fn edit_mode(
    garden: &mut Garden,
    renderer: &Renderer,
    query: &str,
    rename: Option<String>,
    edit_comments: bool,
    fields: PlantFields,
) -> Result<()> {
    let mut changes = fields.into_changes(rename);
    if edit_comments {
        let current = garden.find_plant(query)?.comments.clone();
        let editor = resolve_editor(&garden.config.editor);
        let edited = edit_in_buffer(&editor, &current)?;
        changes.comments = Some(edited.trim_end().to_string());
    }

    let plant = garden.update_plant(query, changes)?;
    let name = plant.name.clone();
    garden.save()?;

    let plant = garden.find_plant(&name)?;
    renderer.print_overview(plant, &plant.overview(garden.today()));
    Ok(())
}
