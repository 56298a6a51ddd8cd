//! Projection of a count series into sparkline pixel space.
//!
//! Mirrors the original face geometry: a fixed frame with a uniform
//! stroke inset, x spread evenly across the inner width, y scaled
//! linearly or logarithmically against a shared axis top and flipped
//! into screen coordinates. The projected points feed
//! [`crate::curve::cardinal_curve`].

use crate::curve::Point;
use crate::state::ScaleType;

/// Drawing frame of the graph, in display units. `density` scales the
/// finished coordinates to device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    pub width: f32,
    pub height: f32,
    pub stroke: f32,
    pub density: f32,
}

impl PlotFrame {
    /// The original widget face: 160x35 units with a 2 unit stroke.
    pub const WIDGET: PlotFrame = PlotFrame {
        width: 160.0,
        height: 35.0,
        stroke: 2.0,
        density: 1.0,
    };

    pub const fn with_density(self, density: f32) -> Self {
        Self {
            width: self.width,
            height: self.height,
            stroke: self.stroke,
            density,
        }
    }
}

/// Project `counts` into pixel space, left to right.
///
/// `max_y` is the y-axis top: the maximum transformed count across all
/// four status series, so the axis stays put while the status cycles.
/// The logarithmic scale uses base `exp(ln(max_y) / inner_height)`,
/// which maps `max_y` exactly to the top of the frame; non-finite
/// results (count 0, or a degenerate axis) clamp to the baseline. A
/// single-point series is pinned to the left inset.
pub fn project(counts: &[i64], max_y: i64, scale: ScaleType, frame: PlotFrame) -> Vec<Point> {
    let inner_w = frame.width - frame.stroke * 3.0;
    let inner_h = frame.height - frame.stroke * 3.0;
    let axis_top = max_y as f64;
    let log_base = (axis_top.ln() / f64::from(inner_h)).exp();

    let y_scale = |count: f64| -> f64 {
        let scaled = match scale {
            ScaleType::Linear => count * (f64::from(inner_h) / axis_top),
            ScaleType::Logarithmic => count.log(log_base),
        };
        if scaled.is_finite() {
            scaled
        } else {
            0.0
        }
    };

    let last_index = counts.len().saturating_sub(1);
    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let x = if last_index == 0 {
                0.0
            } else {
                i as f32 * (inner_w / last_index as f32)
            };
            let y = y_scale(count as f64) as f32;
            Point::new(
                (x + frame.stroke) * frame.density,
                ((inner_h - y) + frame.stroke) * frame.density,
            )
        })
        .collect()
}
