//! Persisted widget preferences and their reducer.
//!
//! [`WidgetState`] is the complete snapshot of what one widget instance
//! shows: schema version, location, case status and the three graph
//! options. Values are immutable and `Copy`; [`WidgetState::reduce`]
//! returns a new state instead of mutating. Encoding nests through
//! [`crate::codec`], one list level per structured value, so the initial
//! state persists as `((1),(IN),(CONFIRMED),((1),(2),(1)))`.
//!
//! Decoding is strict: an identifier outside a variant table is a
//! [`DecodeError`], never a silent fall back to a default. A slot that
//! does not decode is corrupt and the host is expected to fail loudly.

use crate::action::WidgetAction;
use crate::catalog::{Location, LOCATIONS};
use crate::codec::{self, DecodeError};
use crate::color::Rgb;

/// Schema version tag, reserved for migration. A single variant exists;
/// decoding still refuses anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    One,
}

impl Version {
    pub const fn identifier(self) -> &'static str {
        match self {
            Version::One => "1",
        }
    }

    pub fn encode(self) -> String {
        codec::encode_list([self.identifier()])
    }

    pub fn from_encoded(encoded: &str) -> Result<Self, DecodeError> {
        let [identifier] = codec::decode_fields::<1>(encoded, "version")?;
        if identifier == Version::One.identifier() {
            Ok(Version::One)
        } else {
            Err(DecodeError::UnknownIdentifier {
                kind: "version",
                identifier,
            })
        }
    }

    /// No action touches the version.
    pub fn reduce(self, _action: WidgetAction) -> Self {
        self
    }
}

/// Epidemiological case category shown on the widget face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Confirmed,
    Active,
    Recovered,
    Deceased,
}

impl Status {
    /// Cycle order under [`WidgetAction::StatusCycle`].
    pub const ALL: [Status; 4] = [
        Status::Confirmed,
        Status::Active,
        Status::Recovered,
        Status::Deceased,
    ];

    pub const fn identifier(self) -> &'static str {
        match self {
            Status::Confirmed => "CONFIRMED",
            Status::Active => "ACTIVE",
            Status::Recovered => "RECOVERED",
            Status::Deceased => "DECEASED",
        }
    }

    /// Text on the face; identical to the identifier for every variant.
    pub const fn label(self) -> &'static str {
        self.identifier()
    }

    /// Tint applied to every element of the face while this status is
    /// selected.
    pub const fn color(self) -> Rgb {
        match self {
            Status::Confirmed => Rgb::new(0xFF, 0x07, 0x3A),
            Status::Active => Rgb::new(0x00, 0x7B, 0xFF),
            Status::Recovered => Rgb::new(0x28, 0xA7, 0x45),
            Status::Deceased => Rgb::new(0x6C, 0x75, 0x7D),
        }
    }

    pub fn encode(self) -> String {
        codec::encode_list([self.identifier()])
    }

    pub fn from_encoded(encoded: &str) -> Result<Self, DecodeError> {
        let [identifier] = codec::decode_fields::<1>(encoded, "status")?;
        match Self::ALL
            .into_iter()
            .find(|status| status.identifier() == identifier)
        {
            Some(status) => Ok(status),
            None => Err(DecodeError::UnknownIdentifier {
                kind: "status",
                identifier,
            }),
        }
    }

    pub fn reduce(self, action: WidgetAction) -> Self {
        match action {
            WidgetAction::StatusCycle => match self {
                Status::Confirmed => Status::Active,
                Status::Active => Status::Recovered,
                Status::Recovered => Status::Deceased,
                Status::Deceased => Status::Confirmed,
            },
            _ => self,
        }
    }
}

/// How the series is presented: new counts per day, or the running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphType {
    Daily,
    Cumulative,
}

impl GraphType {
    pub const ALL: [GraphType; 2] = [GraphType::Daily, GraphType::Cumulative];

    /// Bit-flag identifier, persisted as its decimal string.
    pub const fn identifier(self) -> u32 {
        match self {
            GraphType::Daily => 1 << 0,
            GraphType::Cumulative => 1 << 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            GraphType::Daily => "DLY",
            GraphType::Cumulative => "CUM",
        }
    }

    pub fn encode(self) -> String {
        codec::encode_list([self.identifier().to_string()])
    }

    pub fn from_encoded(encoded: &str) -> Result<Self, DecodeError> {
        let identifier = decode_bit_identifier(encoded, "graph type")?;
        match Self::ALL
            .into_iter()
            .find(|graph_type| graph_type.identifier() == identifier)
        {
            Some(graph_type) => Ok(graph_type),
            None => Err(unknown_bit("graph type", identifier)),
        }
    }

    pub fn reduce(self, action: WidgetAction) -> Self {
        match action {
            WidgetAction::GraphTypeCycle => match self {
                GraphType::Daily => GraphType::Cumulative,
                GraphType::Cumulative => GraphType::Daily,
            },
            _ => self,
        }
    }
}

/// Trailing window of the series shown on the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSeries {
    TenDays,
    TwentyDays,
    OneMonth,
    Beginning,
}

impl TimeSeries {
    pub const ALL: [TimeSeries; 4] = [
        TimeSeries::TenDays,
        TimeSeries::TwentyDays,
        TimeSeries::OneMonth,
        TimeSeries::Beginning,
    ];

    /// Bit-flag identifier, persisted as its decimal string.
    pub const fn identifier(self) -> u32 {
        match self {
            TimeSeries::TenDays => 1 << 0,
            TimeSeries::TwentyDays => 1 << 1,
            TimeSeries::OneMonth => 1 << 2,
            TimeSeries::Beginning => 1 << 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TimeSeries::TenDays => "10D",
            TimeSeries::TwentyDays => "20D",
            TimeSeries::OneMonth => "1M",
            TimeSeries::Beginning => "BEG",
        }
    }

    /// How many trailing entries to keep; `None` keeps the whole series.
    pub const fn window_len(self) -> Option<usize> {
        match self {
            TimeSeries::TenDays => Some(10),
            TimeSeries::TwentyDays => Some(20),
            TimeSeries::OneMonth => Some(30),
            TimeSeries::Beginning => None,
        }
    }

    pub fn encode(self) -> String {
        codec::encode_list([self.identifier().to_string()])
    }

    pub fn from_encoded(encoded: &str) -> Result<Self, DecodeError> {
        let identifier = decode_bit_identifier(encoded, "time series")?;
        match Self::ALL
            .into_iter()
            .find(|series| series.identifier() == identifier)
        {
            Some(series) => Ok(series),
            None => Err(unknown_bit("time series", identifier)),
        }
    }

    pub fn reduce(self, action: WidgetAction) -> Self {
        match action {
            WidgetAction::GraphTimeSeriesCycle => match self {
                TimeSeries::TenDays => TimeSeries::TwentyDays,
                TimeSeries::TwentyDays => TimeSeries::OneMonth,
                TimeSeries::OneMonth => TimeSeries::Beginning,
                TimeSeries::Beginning => TimeSeries::TenDays,
            },
            _ => self,
        }
    }
}

/// Y-axis scale of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleType {
    Linear,
    Logarithmic,
}

impl ScaleType {
    pub const ALL: [ScaleType; 2] = [ScaleType::Linear, ScaleType::Logarithmic];

    /// Bit-flag identifier, persisted as its decimal string.
    pub const fn identifier(self) -> u32 {
        match self {
            ScaleType::Linear => 1 << 0,
            ScaleType::Logarithmic => 1 << 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScaleType::Linear => "LIN",
            ScaleType::Logarithmic => "LOG",
        }
    }

    pub fn encode(self) -> String {
        codec::encode_list([self.identifier().to_string()])
    }

    pub fn from_encoded(encoded: &str) -> Result<Self, DecodeError> {
        let identifier = decode_bit_identifier(encoded, "scale type")?;
        match Self::ALL
            .into_iter()
            .find(|scale| scale.identifier() == identifier)
        {
            Some(scale) => Ok(scale),
            None => Err(unknown_bit("scale type", identifier)),
        }
    }

    pub fn reduce(self, action: WidgetAction) -> Self {
        match action {
            WidgetAction::GraphScaleCycle => match self {
                ScaleType::Linear => ScaleType::Logarithmic,
                ScaleType::Logarithmic => ScaleType::Linear,
            },
            _ => self,
        }
    }
}

/// The three independent graph options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Graph {
    pub graph_type: GraphType,
    pub time_series: TimeSeries,
    pub scale_type: ScaleType,
}

impl Graph {
    pub fn encode(&self) -> String {
        codec::encode_list([
            self.graph_type.encode(),
            self.time_series.encode(),
            self.scale_type.encode(),
        ])
    }

    /// Field order is fixed: type, time series, scale.
    pub fn from_encoded(encoded: &str) -> Result<Self, DecodeError> {
        let [graph_type, time_series, scale_type] = codec::decode_fields::<3>(encoded, "graph")?;
        Ok(Self {
            graph_type: GraphType::from_encoded(&graph_type)?,
            time_series: TimeSeries::from_encoded(&time_series)?,
            scale_type: ScaleType::from_encoded(&scale_type)?,
        })
    }

    pub fn reduce(self, action: WidgetAction) -> Self {
        Self {
            graph_type: self.graph_type.reduce(action),
            time_series: self.time_series.reduce(action),
            scale_type: self.scale_type.reduce(action),
        }
    }
}

/// The complete persisted preference snapshot of one widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetState {
    pub version: Version,
    pub location: Location,
    pub status: Status,
    pub graph: Graph,
}

impl WidgetState {
    /// State installed at first widget placement.
    pub fn initial() -> Self {
        Self {
            version: Version::One,
            location: LOCATIONS[0],
            status: Status::Confirmed,
            graph: Graph {
                graph_type: GraphType::Daily,
                time_series: TimeSeries::TwentyDays,
                scale_type: ScaleType::Linear,
            },
        }
    }

    pub fn encode(&self) -> String {
        codec::encode_list([
            self.version.encode(),
            self.location.encode(),
            self.status.encode(),
            self.graph.encode(),
        ])
    }

    /// Field order is fixed: version, location, status, graph. Children
    /// beyond the fourth are ignored so a later schema version can
    /// append fields without breaking this reader.
    pub fn from_encoded(encoded: &str) -> Result<Self, DecodeError> {
        let [version, location, status, graph] =
            codec::decode_fields::<4>(encoded, "widget state")?;
        Ok(Self {
            version: Version::from_encoded(&version)?,
            location: Location::from_encoded(&location)?,
            status: Status::from_encoded(&status)?,
            graph: Graph::from_encoded(&graph)?,
        })
    }

    /// Apply one tap. Pure; at most one top-level field changes, and a
    /// token no field claims leaves the state untouched.
    pub fn reduce(self, action: WidgetAction) -> Self {
        Self {
            version: self.version.reduce(action),
            location: self.location,
            status: self.status.reduce(action),
            graph: self.graph.reduce(action),
        }
    }

    /// Replace the location. Location changes bypass the reducer: the
    /// picker hands the chosen catalog entry straight in.
    pub fn with_location(self, location: Location) -> Self {
        Self { location, ..self }
    }
}

fn decode_bit_identifier(encoded: &str, kind: &'static str) -> Result<u32, DecodeError> {
    let [value] = codec::decode_fields::<1>(encoded, kind)?;
    value
        .parse()
        .map_err(|_| DecodeError::NotANumber { kind, value })
}

fn unknown_bit(kind: &'static str, identifier: u32) -> DecodeError {
    DecodeError::UnknownIdentifier {
        kind,
        identifier: identifier.to_string(),
    }
}
