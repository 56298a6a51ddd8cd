//! The sparkline: counts projected into the fixed face frame, swept by
//! a cardinal curve and stroked into a braille canvas.

use covid_widget_core::{cardinal_curve, plot, PlotFrame, ScaleType};
use ratatui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::canvas::{Canvas, Line as CanvasLine},
    Frame,
};

use super::Component;

/// Samples per cubic segment when flattening the curve for the canvas.
const CURVE_STEPS: usize = 8;

pub struct CurveGraph;

pub struct CurveGraphProps<'a> {
    /// Windowed, transformed counts, oldest first.
    pub counts: &'a [i64],
    /// Shared y-axis top across all four status series.
    pub axis_top: i64,
    pub scale: ScaleType,
    pub color: Color,
}

impl Component for CurveGraph {
    type Props<'a> = CurveGraphProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let geometry = PlotFrame::WIDGET;
        let points = plot::project(props.counts, props.axis_top, props.scale, geometry);
        let samples = cardinal_curve(&points).flatten(CURVE_STEPS);

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, f64::from(geometry.width)])
            .y_bounds([0.0, f64::from(geometry.height)])
            .paint(|ctx| {
                // Projection y grows downward; the canvas axis grows up.
                for pair in samples.windows(2) {
                    ctx.draw(&CanvasLine {
                        x1: f64::from(pair[0].x),
                        y1: f64::from(geometry.height - pair[0].y),
                        x2: f64::from(pair[1].x),
                        y2: f64::from(geometry.height - pair[1].y),
                        color: props.color,
                    });
                }
            });
        frame.render_widget(canvas, area);
    }
}
