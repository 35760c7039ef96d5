use crate::render::Renderer;
use anyhow::Result;
use sprout_core::Garden;

pub fn list_mode(garden: &Garden, renderer: &Renderer, filter: Option<&str>) -> Result<()> {
    let plants = garden.sorted_plants(filter);
    if plants.is_empty() {
        match filter {
            Some(filter) => renderer.print_info(&format!("No plants match `{filter}`.")),
            None => renderer.print_info("No plants yet. Add one with `sprout add <name>`."),
        }
        return Ok(());
    }
    renderer.print_plants(&plants, garden.today());
    Ok(())
}
