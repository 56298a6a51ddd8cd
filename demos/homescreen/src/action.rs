//! Actions the home screen can dispatch
//!
//! Naming convention:
//! - Prefix groups related actions: StatsFetch, StatsDidLoad, PickerOpen
//! - "Did" marks an async result arriving on the action channel
//! - Verbs at the end: Fetch, Open, Move, Quit

use covid_widget_core::{Location, WidgetAction};

use crate::state::StatsBundle;

/// Everything that can happen in the app.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Widget face =====
    /// A tap landed on one of the widget's hit regions.
    WidgetTap(WidgetAction),

    // ===== Location picker =====
    /// Open the picker overlay on the current location.
    PickerOpen,

    /// Move the picker selection by the given offset (clamped).
    PickerMove(i32),

    /// Close the picker without changing the location.
    PickerClose,

    /// A location was chosen from the picker.
    LocationDidSelect(Location),

    // ===== Statistics =====
    /// Request a (re)fetch for the current location.
    StatsFetch,

    /// Result: statistics arrived.
    StatsDidLoad(StatsBundle),

    /// Result: fetch failed.
    StatsDidError(String),

    // ===== Global =====
    /// Periodic tick for the loading animation.
    Tick,

    /// Exit the application.
    Quit,
}

impl Action {
    /// Stable name for dispatch logging. Widget taps report the inner
    /// token so logs read like the persisted reducer trace.
    pub fn name(&self) -> &'static str {
        match self {
            Action::WidgetTap(tap) => tap.name(),
            Action::PickerOpen => "PickerOpen",
            Action::PickerMove(_) => "PickerMove",
            Action::PickerClose => "PickerClose",
            Action::LocationDidSelect(_) => "LocationDidSelect",
            Action::StatsFetch => "StatsFetch",
            Action::StatsDidLoad(_) => "StatsDidLoad",
            Action::StatsDidError(_) => "StatsDidError",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_taps_log_the_token_name() {
        let action = Action::WidgetTap(WidgetAction::StatusCycle);
        assert_eq!(action.name(), "StatusCycle");
    }

    #[test]
    fn test_names_are_stable() {
        assert_eq!(Action::StatsFetch.name(), "StatsFetch");
        assert_eq!(Action::StatsDidError(String::new()).name(), "StatsDidError");
        assert_eq!(Action::Quit.name(), "Quit");
    }
}
