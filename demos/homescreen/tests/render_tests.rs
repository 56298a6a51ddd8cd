//! Render tests against an in-memory backend
//!
//! Each test draws components into a test buffer and asserts on the
//! plain text that lands in it. Ready-state tests run over the bundled
//! fixture feeds, so the expected numbers are stable.

use ratatui::{backend::TestBackend, Frame, Terminal};

use covid_widget_core::WidgetAction;
use homescreen_example::{
    action::Action,
    api,
    components::{Component, LocationPicker, LocationPickerProps, WidgetFace, WidgetFaceProps},
    reducer::reducer,
    state::AppState,
};

/// Draw once, dump the buffer as plain text.
struct RenderSurface {
    terminal: Terminal<TestBackend>,
}

impl RenderSurface {
    fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).unwrap();
        Self { terminal }
    }

    fn render_to_string(&mut self, draw: impl FnOnce(&mut Frame)) -> String {
        self.terminal.draw(|frame| draw(frame)).unwrap();
        let buffer = self.terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    out.push_str(cell.symbol());
                }
            }
            out.push('\n');
        }
        out
    }
}

fn face_props(state: &AppState) -> WidgetFaceProps<'_> {
    WidgetFaceProps {
        state,
        is_focused: true,
    }
}

/// Default widget over the fixture feeds: India, confirmed, DLY/LIN/20D.
fn ready_state() -> AppState {
    let mut state = AppState::default();
    state.stats = Some(api::fixture_bundle(state.widget.location).unwrap());
    state
}

#[test]
fn test_render_loading_state() {
    let mut render = RenderSurface::new(60, 14);
    let mut face = WidgetFace;

    let state = AppState {
        is_loading: true,
        ..Default::default()
    };

    let output = render.render_to_string(|frame| {
        face.render(frame, frame.area(), face_props(&state));
    });

    assert!(
        output.contains("Fetching statistics"),
        "should show loading text"
    );
    assert!(output.contains("India"), "should name the location");
}

#[test]
fn test_render_ready_face() {
    let mut render = RenderSurface::new(60, 14);
    let mut face = WidgetFace;
    let state = ready_state();

    let output = render.render_to_string(|frame| {
        face.render(frame, frame.area(), face_props(&state));
    });

    assert!(output.contains("CONFIRMED, IN"), "status and location line");
    assert!(output.contains("2,685"), "grouped headline count");
    assert!(output.contains("(+486)"), "today's delta");
    assert!(output.contains("DLY, LIN, 20D"), "graph preference labels");
}

#[test]
fn test_render_error_state() {
    let mut render = RenderSurface::new(60, 14);
    let mut face = WidgetFace;

    let state = AppState {
        error: Some("request timed out".into()),
        ..Default::default()
    };

    let output = render.render_to_string(|frame| {
        face.render(frame, frame.area(), face_props(&state));
    });

    assert!(output.contains("Statistics unavailable"));
    assert!(output.contains("request timed out"));
    assert!(output.contains("retry"), "should hint at the retry key");
    assert!(!output.contains("DLY"), "no graph labels on the error face");
}

#[test]
fn test_small_face_abbreviates_the_status() {
    let mut render = RenderSurface::new(20, 6);
    let mut face = WidgetFace;
    let state = ready_state();

    let output = render.render_to_string(|frame| {
        face.render(frame, frame.area(), face_props(&state));
    });

    assert!(output.contains("C, IN"), "status shrinks to its initial");
    assert!(output.contains("2,685"), "count survives");
    assert!(!output.contains("CONFIRMED"), "full label does not fit");
    assert!(!output.contains("DLY"), "no graph labels on the small face");
}

#[test]
fn test_status_cycle_reaches_the_face() {
    let mut render = RenderSurface::new(60, 14);
    let mut face = WidgetFace;
    let mut state = ready_state();

    reducer(&mut state, Action::WidgetTap(WidgetAction::StatusCycle));

    let output = render.render_to_string(|frame| {
        face.render(frame, frame.area(), face_props(&state));
    });

    assert!(output.contains("ACTIVE, IN"), "face follows the cycle");
    assert!(output.contains("2,431"), "active headline count");
    assert!(
        !output.contains("(+"),
        "active has no delta, so none is shown"
    );
}

#[test]
fn test_graph_type_cycle_relabels_the_face() {
    let mut render = RenderSurface::new(60, 14);
    let mut face = WidgetFace;
    let mut state = ready_state();

    reducer(&mut state, Action::WidgetTap(WidgetAction::GraphTypeCycle));
    reducer(&mut state, Action::WidgetTap(WidgetAction::GraphScaleCycle));

    let output = render.render_to_string(|frame| {
        face.render(frame, frame.area(), face_props(&state));
    });

    assert!(output.contains("CUM, LOG, 20D"), "labels track preferences");
}

#[test]
fn test_picker_lists_the_catalog() {
    let mut render = RenderSurface::new(60, 20);
    let mut picker = LocationPicker;

    let output = render.render_to_string(|frame| {
        picker.render(
            frame,
            frame.area(),
            LocationPickerProps {
                selected: 1,
                is_focused: true,
            },
        );
    });

    assert!(output.contains("Location"), "modal title");
    assert!(output.contains("IN-MH"), "identifiers listed");
    assert!(output.contains("Maharashtra"), "names listed");
}
