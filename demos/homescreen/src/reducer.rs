//! Reducer - pure function: (state, action) -> state
//!
//! - fn(state: &mut AppState, action: Action) -> bool
//! - Returns true if state changed (triggers re-render)
//! - All state mutations happen here
//! - No side effects - fetches and persistence happen in the main loop
//!
//! Widget taps delegate to [`WidgetState::reduce`]; the one exception is
//! the location region, which opens the picker overlay instead of
//! mutating state (the location is replaced wholesale on selection).

use covid_widget_core::{Location, WidgetAction, LOCATIONS};

use crate::action::Action;
use crate::state::{AppState, PickerState};

/// The reducer handles all state transitions
///
/// # Returns
/// `true` if state changed and UI should re-render
pub fn reducer(state: &mut AppState, action: Action) -> bool {
    match action {
        // ===== Widget face =====
        Action::WidgetTap(WidgetAction::LocationChange) => {
            // The location tap has no cycle; it opens the picker.
            state.picker = Some(PickerState {
                selected: location_index(state.widget.location),
            });
            true
        }

        Action::WidgetTap(tap) => {
            let next = state.widget.reduce(tap);
            let changed = next != state.widget;
            state.widget = next;
            changed
        }

        // ===== Location picker =====
        Action::PickerOpen => {
            state.picker = Some(PickerState {
                selected: location_index(state.widget.location),
            });
            true
        }

        Action::PickerMove(delta) => match state.picker {
            Some(picker) => {
                let last = LOCATIONS.len() - 1;
                let selected = picker
                    .selected
                    .saturating_add_signed(delta as isize)
                    .min(last);
                state.picker = Some(PickerState { selected });
                selected != picker.selected
            }
            None => false,
        },

        Action::PickerClose => {
            let was_open = state.picker.is_some();
            state.picker = None;
            was_open
        }

        Action::LocationDidSelect(location) => {
            state.picker = None;
            if location != state.widget.location {
                // Cached statistics belong to the old location.
                state.widget = state.widget.with_location(location);
                state.stats = None;
            }
            // The main loop fetches for this location either way.
            state.is_loading = true;
            state.error = None;
            true
        }

        // ===== Statistics =====
        Action::StatsFetch => {
            state.is_loading = true;
            state.error = None;
            true // re-render to show loading state
        }

        Action::StatsDidLoad(bundle) => {
            state.stats = Some(bundle);
            state.is_loading = false;
            state.error = None;
            true // re-render with fresh numbers
        }

        Action::StatsDidError(msg) => {
            state.is_loading = false;
            state.error = Some(msg);
            true // re-render to show error
        }

        // ===== Global =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            state.is_loading // only re-render if loading (for spinner animation)
        }

        Action::Quit => {
            // Quit is handled in main loop, not here
            false
        }
    }
}

fn location_index(location: Location) -> usize {
    LOCATIONS
        .iter()
        .position(|&l| l == location)
        .unwrap_or_default()
}
