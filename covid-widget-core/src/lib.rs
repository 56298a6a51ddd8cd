//! Core state machine and sparkline geometry for the covid widget
//!
//! This crate holds the two pure pieces every widget host composes into
//! its render pipeline:
//!
//! # Core Concepts
//!
//! - **WidgetState**: the persisted preference snapshot (version,
//!   location, status, graph options) with a compact textual codec and a
//!   pure cyclic reducer
//! - **WidgetAction**: payload-free tap tokens routed by the host
//! - **Catalog**: the static, ordered location table persisted state
//!   refers into
//! - **Curve**: the open cardinal-spline path generator behind the trend
//!   sparkline, with the series transforms and pixel projection that
//!   feed it
//!
//! Everything here is synchronous and free of I/O; hosts own
//! persistence, fetching and drawing.
//!
//! # Basic Example
//!
//! ```
//! use covid_widget_core::{WidgetAction, WidgetState};
//!
//! let state = WidgetState::initial();
//! assert_eq!(state.encode(), "((1),(IN),(CONFIRMED),((1),(2),(1)))");
//!
//! // A tap on the status region cycles it; everything else stays put.
//! let tapped = state.reduce(WidgetAction::StatusCycle);
//! assert_eq!(WidgetState::from_encoded(&tapped.encode()), Ok(tapped));
//! ```
//!
//! # Sparkline Pipeline
//!
//! ```
//! use covid_widget_core::plot::{self, PlotFrame};
//! use covid_widget_core::state::ScaleType;
//! use covid_widget_core::{cardinal_curve, cumulative};
//!
//! let daily = [("30-Jan-20", 1), ("31-Jan-20", 0), ("01-Feb-20", 1), ("02-Feb-20", 2)];
//! let total = cumulative(&daily);
//! let counts: Vec<i64> = total.iter().map(|&(_, count)| count).collect();
//!
//! let points = plot::project(&counts, 4, ScaleType::Linear, PlotFrame::WIDGET);
//! let path = cardinal_curve(&points);
//! assert!(!path.is_empty());
//! ```

pub mod action;
pub mod catalog;
pub mod codec;
pub mod color;
pub mod curve;
pub mod plot;
pub mod series;
pub mod state;

pub use action::WidgetAction;
pub use catalog::{Location, LOCATIONS};
pub use codec::DecodeError;
pub use color::Rgb;
pub use curve::{cardinal_curve, CurvePath, PathCommand, Point};
pub use plot::PlotFrame;
pub use series::cumulative;
pub use state::{Graph, GraphType, ScaleType, Status, TimeSeries, Version, WidgetState};
