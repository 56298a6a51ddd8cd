//! UI components for the home screen
//!
//! Components are pure: props carry all the read-only data needed to
//! render, `handle_event` returns actions, `render` draws from props.
//! Internal UI state may live in `&mut self`, but data mutations go
//! through actions and the reducer.

pub mod curve_graph;
pub mod help_bar;
pub mod location_picker;
pub mod widget_face;

use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::Frame;

use covid_widget_core::Status;

use crate::action::Action;
use crate::event::EventKind;

pub use curve_graph::{CurveGraph, CurveGraphProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use location_picker::{LocationPicker, LocationPickerProps};
pub use widget_face::{WidgetFace, WidgetFaceProps, ERROR_ICON, SPINNERS};

/// A pure UI component that renders based on props and emits actions
///
/// Focus is passed through props, not read from the terminal; the main
/// loop decides which component sees an event.
pub trait Component<A = Action> {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Handle an event and return actions to dispatch
    ///
    /// Returns any type implementing `IntoIterator<Item = A>`:
    /// `None`, `Some(action)`, or a collection. The default
    /// implementation returns nothing (render-only components).
    /// The returned value may not borrow from `event` or `props`.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> + use<Self, A> {
        None::<A>
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}

/// Terminal color for a status, from the shared palette.
pub fn status_color(status: Status) -> Color {
    let rgb = status.color();
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// A centered sub-rectangle of `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect(100, 100, area);
        assert_eq!(rect, area);

        let rect = centered_rect(20, 4, area);
        assert_eq!(rect, Rect::new(10, 3, 20, 4));
    }
}
