use crate::render::Renderer;
use anyhow::Result;
use sprout_core::Garden;

pub fn show_mode(garden: &Garden, renderer: &Renderer, query: &str, no_stats: bool) -> Result<()> {
    let plant = garden.find_plant(query)?;
    let today = garden.today();

    renderer.print_overview(plant, &plant.overview(today));
    println!();
    renderer.print_calendar(&garden.calendar(plant, garden.config.months_displayed));
    if !no_stats {
        println!();
        renderer.print_statistics(&plant.statistics(today, garden.config.windows));
    }
    Ok(())
}

pub fn calendar_mode(
    garden: &Garden,
    renderer: &Renderer,
    query: &str,
    months: Option<u32>,
) -> Result<()> {
    let plant = garden.find_plant(query)?;
    let months = months.unwrap_or(garden.config.months_displayed);
    renderer.print_calendar(&garden.calendar(plant, months));
    Ok(())
}
