//! Application state - single source of truth
//!
//! - Components receive `&AppState` as props
//! - Only the reducer can mutate state
//! - The reducer returns `bool` indicating if a re-render is needed
//!
//! The widget face itself is driven by [`WidgetState`] from
//! `covid-widget-core`; everything else here is host bookkeeping
//! (fetched statistics, loading flags, the location picker overlay).

use chrono::NaiveDate;
use covid_widget_core::{series, GraphType, Status, WidgetState};

/// Milliseconds between loading-spinner animation frames.
pub const LOADING_ANIM_TICK_MS: u64 = 250;

/// Total and today's change for one status, from the summary endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Headline {
    pub count: i64,
    pub delta: i64,
}

/// Everything fetched for one location: a headline and a dated daily
/// series per status, in [`Status::ALL`] order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatsBundle {
    headlines: [Headline; 4],
    series: [Vec<(NaiveDate, i64)>; 4],
}

impl StatsBundle {
    pub fn new(headlines: [Headline; 4], series: [Vec<(NaiveDate, i64)>; 4]) -> Self {
        Self { headlines, series }
    }

    pub fn headline(&self, status: Status) -> Headline {
        self.headlines[status_index(status)]
    }

    pub fn series(&self, status: Status) -> &[(NaiveDate, i64)] {
        &self.series[status_index(status)]
    }

    /// Vertical axis top: the maximum count across all four series after
    /// the daily/cumulative transform. Sharing one axis keeps the curve
    /// comparable while cycling through statuses.
    pub fn axis_top(&self, graph_type: GraphType) -> i64 {
        Status::ALL
            .iter()
            .flat_map(|&status| {
                series::transform(self.series(status), graph_type)
                    .into_iter()
                    .map(|(_, count)| count)
            })
            .max()
            .unwrap_or(0)
    }

    /// Counts to plot for the given preferences: selected status series,
    /// daily/cumulative transform, then the trailing window.
    pub fn window_counts(&self, widget: &WidgetState) -> Vec<i64> {
        let transformed = series::transform(self.series(widget.status), widget.graph.graph_type);
        let counts: Vec<i64> = transformed.into_iter().map(|(_, count)| count).collect();
        series::tail(&counts, widget.graph.time_series.window_len()).to_vec()
    }
}

fn status_index(status: Status) -> usize {
    Status::ALL
        .iter()
        .position(|&s| s == status)
        .unwrap_or_default()
}

/// Location picker overlay state (`None` in `AppState` = closed).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PickerState {
    /// Index into [`covid_widget_core::LOCATIONS`].
    pub selected: usize,
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug)]
pub struct AppState {
    /// Persisted widget preferences (the part that survives restarts)
    pub widget: WidgetState,

    /// Statistics for the current location (None = not yet fetched)
    pub stats: Option<StatsBundle>,

    /// Loading state for async operations
    pub is_loading: bool,

    /// Error message (if last fetch failed)
    pub error: Option<String>,

    /// Location picker overlay (None = closed)
    pub picker: Option<PickerState>,

    /// Animation frame counter (for loading spinner)
    pub tick_count: u32,
}

impl AppState {
    /// Create state around the given widget preferences
    pub fn new(widget: WidgetState) -> Self {
        Self {
            widget,
            stats: None,
            is_loading: false,
            error: None,
            picker: None,
            tick_count: 0,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(WidgetState::initial())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covid_widget_core::{ScaleType, TimeSeries};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 4, day).unwrap()
    }

    fn bundle() -> StatsBundle {
        let confirmed = vec![(date(1), 10), (date(2), 20), (date(3), 5)];
        let active = vec![(date(1), 8), (date(2), 15), (date(3), 2)];
        let recovered = vec![(date(1), 1), (date(2), 4), (date(3), 2)];
        let deceased = vec![(date(1), 1), (date(2), 1), (date(3), 1)];
        StatsBundle::new(
            [Headline::default(); 4],
            [confirmed, active, recovered, deceased],
        )
    }

    #[test]
    fn test_series_lookup_follows_status_order() {
        let bundle = bundle();
        assert_eq!(bundle.series(Status::Confirmed)[0].1, 10);
        assert_eq!(bundle.series(Status::Active)[0].1, 8);
        assert_eq!(bundle.series(Status::Recovered)[0].1, 1);
        assert_eq!(bundle.series(Status::Deceased)[0].1, 1);
    }

    #[test]
    fn test_axis_top_spans_all_statuses() {
        let bundle = bundle();
        // Daily: the largest single-day count anywhere is confirmed day 2.
        assert_eq!(bundle.axis_top(GraphType::Daily), 20);
        // Cumulative: confirmed accumulates to 35.
        assert_eq!(bundle.axis_top(GraphType::Cumulative), 35);
    }

    #[test]
    fn test_window_counts_applies_transform_and_window() {
        let bundle = bundle();
        let mut widget = WidgetState::initial();
        widget.graph.graph_type = GraphType::Cumulative;
        widget.graph.scale_type = ScaleType::Linear;
        widget.graph.time_series = TimeSeries::TenDays;

        // Three days of data, window of ten: everything survives.
        assert_eq!(bundle.window_counts(&widget), [10, 30, 35]);

        widget.graph.graph_type = GraphType::Daily;
        assert_eq!(bundle.window_counts(&widget), [10, 20, 5]);
    }

    #[test]
    fn test_axis_top_of_empty_bundle_is_zero() {
        let bundle = StatsBundle::default();
        assert_eq!(bundle.axis_top(GraphType::Daily), 0);
        assert_eq!(bundle.axis_top(GraphType::Cumulative), 0);
    }
}
