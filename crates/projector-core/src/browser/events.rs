use serde::{Deserialize, Serialize};

/// All view-state changes that can result from a dispatched command.
///
/// Each variant describes _what happened_, not what should happen. Only
/// completed dispatches produce events — fetch failures use the `Result`
/// error channel (`Err(BrowserError)`), not the event stream. An ignored
/// selection is an outcome, not a failure, so it travels as an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// A fresh project list was fetched and the list panel rebuilt.
    ProjectsLoaded { count: usize },
    /// The selection moved to a project and its detail view was rendered.
    SelectionChanged { id: String },
    /// The selected project vanished with a refresh; selection, highlight,
    /// and detail were cleared.
    SelectionCleared { id: String },
    /// A select command was ignored; no view state changed.
    SelectionIgnored { id: String, reason: IgnoreReason },
}

/// Why a select command was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The command arrived before the first successful fetch.
    NotLoaded,
    /// No project carries the identifier.
    UnknownProject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serde_roundtrip() {
        let event = Event::SelectionIgnored {
            id: "proj-1".to_string(),
            reason: IgnoreReason::NotLoaded,
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }

    #[test]
    fn test_all_event_variants_serialize() {
        let events = vec![
            Event::ProjectsLoaded { count: 3 },
            Event::SelectionChanged {
                id: "proj-1".to_string(),
            },
            Event::SelectionCleared {
                id: "proj-1".to_string(),
            },
            Event::SelectionIgnored {
                id: "proj-2".to_string(),
                reason: IgnoreReason::UnknownProject,
            },
        ];
        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let _: Event = serde_json::from_str(&json).unwrap();
        }
    }
}
