use crate::care::CareKind;
use chrono::NaiveDate;

/// Style tag of a marked calendar day.
///
/// `kind` decides the background, `stacked` is set once two markers meet on
/// the same day and is shown as an underline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker {
    pub kind: CareKind,
    pub stacked: bool,
}

impl Marker {
    pub fn new(kind: CareKind) -> Self {
        Self {
            kind,
            stacked: false,
        }
    }

    /// Overlays `later` on top of `self`. The later kind wins, stacking is kept.
    pub fn merge(self, later: Marker) -> Marker {
        Marker {
            kind: later.kind,
            stacked: true,
        }
    }
}

/// A marker placed on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarEvent {
    pub day: NaiveDate,
    pub marker: Marker,
}
