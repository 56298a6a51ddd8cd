//! Tap tokens dispatched by the widget host.

/// Which region of the widget face was tapped.
///
/// Tokens carry no payload. `LocationChange` is identity under
/// [`crate::state::WidgetState::reduce`]: the host replaces the location
/// field directly once its picker closes, the token only routes the tap
/// to the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetAction {
    StatusCycle,
    LocationChange,
    GraphTypeCycle,
    GraphScaleCycle,
    GraphTimeSeriesCycle,
}

impl WidgetAction {
    /// Every token, in face order (top to bottom, left to right).
    pub const ALL: [WidgetAction; 5] = [
        WidgetAction::StatusCycle,
        WidgetAction::LocationChange,
        WidgetAction::GraphTypeCycle,
        WidgetAction::GraphScaleCycle,
        WidgetAction::GraphTimeSeriesCycle,
    ];

    /// Stable name for logging and host tap payloads.
    pub const fn name(self) -> &'static str {
        match self {
            WidgetAction::StatusCycle => "StatusCycle",
            WidgetAction::LocationChange => "LocationChange",
            WidgetAction::GraphTypeCycle => "GraphTypeCycle",
            WidgetAction::GraphScaleCycle => "GraphScaleCycle",
            WidgetAction::GraphTimeSeriesCycle => "GraphTimeSeriesCycle",
        }
    }

    /// Parse a host tap payload. `None` means the tap is ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for action in WidgetAction::ALL {
            assert_eq!(WidgetAction::from_name(action.name()), Some(action));
        }
    }

    #[test]
    fn test_unrecognized_name_is_none() {
        assert_eq!(WidgetAction::from_name("SelfDestruct"), None);
        assert_eq!(WidgetAction::from_name(""), None);
    }
}
