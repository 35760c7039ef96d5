mod care_mode;
mod editor_utils;
mod list_mode;
mod plant_mode;
mod show_mode;

pub use care_mode::care_mode;
pub use list_mode::list_mode;
pub use plant_mode::{add_mode, edit_mode};
pub use show_mode::{calendar_mode, show_mode};
