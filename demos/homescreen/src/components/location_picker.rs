//! Modal list over the location catalog.
//!
//! The selection index lives in `AppState` (the reducer owns it); the
//! component only turns keys into picker actions and paints the list.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use covid_widget_core::LOCATIONS;

use super::{centered_rect, Component};
use crate::action::Action;
use crate::event::EventKind;

pub struct LocationPicker;

pub struct LocationPickerProps {
    /// Index into [`LOCATIONS`].
    pub selected: usize,
    pub is_focused: bool,
}

impl Component<Action> for LocationPicker {
    type Props<'a> = LocationPickerProps;

    fn handle_event(&mut self, event: &EventKind, props: LocationPickerProps) -> Vec<Action> {
        if !props.is_focused {
            return vec![];
        }

        let EventKind::Key(key) = event else {
            return vec![];
        };

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => vec![Action::PickerMove(-1)],
            KeyCode::Down | KeyCode::Char('j') => vec![Action::PickerMove(1)],
            KeyCode::PageUp => vec![Action::PickerMove(-8)],
            KeyCode::PageDown => vec![Action::PickerMove(8)],
            KeyCode::Enter => {
                let selected = props.selected.min(LOCATIONS.len() - 1);
                vec![Action::LocationDidSelect(LOCATIONS[selected])]
            }
            KeyCode::Esc | KeyCode::Char('q') => vec![Action::PickerClose],
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: LocationPickerProps) {
        if area.width < 24 || area.height < 6 {
            return;
        }

        let modal = centered_rect(34, area.height.saturating_sub(2).min(18), area);
        frame.render_widget(Clear, modal);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Location ")
            .title_style(Style::default().fg(Color::Cyan).bold());

        let items: Vec<ListItem> = LOCATIONS
            .iter()
            .map(|location| ListItem::new(format!("{:<6} {}", location.identifier, location.name)))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .add_modifier(Modifier::REVERSED)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = ListState::default().with_selected(Some(props.selected));
        frame.render_stateful_widget(list, modal, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> EventKind {
        EventKind::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn props(selected: usize) -> LocationPickerProps {
        LocationPickerProps {
            selected,
            is_focused: true,
        }
    }

    #[test]
    fn test_arrows_move_the_selection() {
        let mut picker = LocationPicker;
        assert_eq!(
            picker.handle_event(&key(KeyCode::Down), props(0)),
            vec![Action::PickerMove(1)]
        );
        assert_eq!(
            picker.handle_event(&key(KeyCode::Char('k')), props(3)),
            vec![Action::PickerMove(-1)]
        );
        assert_eq!(
            picker.handle_event(&key(KeyCode::PageDown), props(0)),
            vec![Action::PickerMove(8)]
        );
    }

    #[test]
    fn test_enter_selects_the_highlighted_location() {
        let mut picker = LocationPicker;
        let actions = picker.handle_event(&key(KeyCode::Enter), props(2));
        assert_eq!(actions, vec![Action::LocationDidSelect(LOCATIONS[2])]);
    }

    #[test]
    fn test_escape_closes_without_selecting() {
        let mut picker = LocationPicker;
        let actions = picker.handle_event(&key(KeyCode::Esc), props(2));
        assert_eq!(actions, vec![Action::PickerClose]);
    }

    #[test]
    fn test_unfocused_picker_ignores_keys() {
        let mut picker = LocationPicker;
        let mut props = props(0);
        props.is_focused = false;
        assert!(picker.handle_event(&key(KeyCode::Enter), props).is_empty());
    }
}
