use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;

pub struct HelpBar;

pub struct HelpBarProps;

impl Component for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, _props: Self::Props<'_>) {
        let help = Line::from(vec![
            Span::styled(" s", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" status  ", Style::default().fg(Color::DarkGray)),
            Span::styled("l", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" location  ", Style::default().fg(Color::DarkGray)),
            Span::styled("t", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" type  ", Style::default().fg(Color::DarkGray)),
            Span::styled("y", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" scale  ", Style::default().fg(Color::DarkGray)),
            Span::styled("w", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" window  ", Style::default().fg(Color::DarkGray)),
            Span::styled("r", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" refresh  ", Style::default().fg(Color::DarkGray)),
            Span::styled("q", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" quit ", Style::default().fg(Color::DarkGray)),
        ])
        .centered();
        frame.render_widget(Paragraph::new(help), area);
    }
}
