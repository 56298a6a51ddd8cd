//! The widget face: status, location, headline count, graph preference
//! labels and the sparkline, all tinted in the status color.
//!
//! Each tap region of the home-screen widget becomes a key here; a key
//! fires exactly the action its tap region would.

use crossterm::event::KeyCode;
use ratatui::prelude::{Frame, Rect};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use covid_widget_core::WidgetAction;

use super::{status_color, Component, CurveGraph, CurveGraphProps};
use crate::action::Action;
use crate::event::EventKind;
use crate::state::AppState;

pub const ERROR_ICON: &str = "⚠";
pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Props for WidgetFace - read-only view of state
pub struct WidgetFaceProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The widget face component
#[derive(Default)]
pub struct WidgetFace;

impl Component<Action> for WidgetFace {
    type Props<'a> = WidgetFaceProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: WidgetFaceProps<'_>) -> Vec<Action> {
        if !props.is_focused {
            return vec![];
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('s') => vec![Action::WidgetTap(WidgetAction::StatusCycle)],
                KeyCode::Char('l') => vec![Action::WidgetTap(WidgetAction::LocationChange)],
                KeyCode::Char('t') => vec![Action::WidgetTap(WidgetAction::GraphTypeCycle)],
                KeyCode::Char('y') => vec![Action::WidgetTap(WidgetAction::GraphScaleCycle)],
                KeyCode::Char('w') => {
                    vec![Action::WidgetTap(WidgetAction::GraphTimeSeriesCycle)]
                }
                KeyCode::Char('r') | KeyCode::F(5) => vec![Action::StatsFetch],
                KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
                _ => vec![],
            },
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WidgetFaceProps<'_>) {
        let state = props.state;
        let color = status_color(state.widget.status);

        // Loading indicator for title
        let loading_indicator = if state.is_loading {
            let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
            format!(" {} ", spinner)
        } else {
            String::new()
        };

        let outer_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" Covid19{}", loading_indicator))
            .title_style(Style::default().fg(color).bold())
            .title_alignment(Alignment::Center);

        frame.render_widget(outer_block.clone(), area);
        let inner = outer_block.inner(area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if let Some(error) = state.error.as_deref() {
            Self::render_error(frame, inner, error);
            return;
        }

        let Some(stats) = &state.stats else {
            Self::render_loading(frame, inner, state);
            return;
        };

        let small = inner.height < 6 || inner.width < 24;
        let headline = stats.headline(state.widget.status);

        // The small face abbreviates the status to its first letter.
        let label = state.widget.status.label();
        let status_label = if small {
            label.get(..1).unwrap_or(label)
        } else {
            label
        };
        let header = Line::from(vec![
            Span::styled(format!("{},", status_label), Style::default().fg(color).bold()),
            Span::styled(
                format!(" {}", state.widget.location.identifier),
                Style::default().fg(color),
            ),
        ]);

        let mut count_spans = vec![Span::styled(
            format_count(headline.count),
            Style::default().fg(color).bold(),
        )];
        // Today's change rides along unless it is zero.
        if headline.delta != 0 {
            count_spans.push(Span::styled(
                format!(" (+{})", format_count(headline.delta)),
                Style::default().fg(color),
            ));
        }
        let count_line = Line::from(count_spans);

        if small {
            let chunks =
                Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);
            frame.render_widget(Paragraph::new(header), chunks[0]);
            frame.render_widget(Paragraph::new(count_line), chunks[1]);
            return;
        }

        let labels = Line::from(Span::styled(
            format!(
                "{}, {}, {}",
                state.widget.graph.graph_type.label(),
                state.widget.graph.scale_type.label(),
                state.widget.graph.time_series.label(),
            ),
            Style::default().fg(color),
        ));

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

        frame.render_widget(Paragraph::new(header), chunks[0]);
        frame.render_widget(Paragraph::new(count_line), chunks[1]);
        frame.render_widget(Paragraph::new(labels), chunks[2]);

        let counts = stats.window_counts(&state.widget);
        let mut graph = CurveGraph;
        graph.render(
            frame,
            chunks[3],
            CurveGraphProps {
                counts: &counts,
                axis_top: stats.axis_top(state.widget.graph.graph_type),
                scale: state.widget.graph.scale_type,
                color,
            },
        );
    }
}

impl WidgetFace {
    fn render_error(frame: &mut Frame, area: Rect, error: &str) {
        let lines = vec![
            Line::from(""),
            Line::from(format!("{} Statistics unavailable", ERROR_ICON)).bold(),
            Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(Color::Red),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "r retry  q quit",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
        let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
        let lines = vec![
            Line::from(""),
            Line::from(format!("{} Fetching statistics", spinner)),
            Line::from(Span::styled(
                state.widget.location.name,
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

/// Group digits in threes, the way the widget face formats counts.
fn format_count(n: i64) -> String {
    let negative = n < 0;
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if negative {
        format!("-{out}")
    } else {
        out
    }
}
