use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The kinds of care events tracked per plant.
///
/// Declaration order is the order markers are applied on the calendar.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    AsRefStr,
    EnumString,
    Display,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum CareKind {
    Watered,
    Fertilized,
    Repotted,
}
