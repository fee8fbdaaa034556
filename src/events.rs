//! Pane Events
//!
//! Requests a host sends into the pane: filter changes, selection toggles,
//! moves, additions and deletions. Events are serde-decodable so a transport
//! can forward JSON messages without this crate knowing the transport.
//!
//! ```
//! use cardpane::events::{MoveDirection, PaneEvent};
//!
//! let event = PaneEvent::from_json(
//!     r#"{"type":"move","card":"67e55044-10b1-426f-9247-bb680e5fe0c8","direction":"up"}"#,
//! )
//! .unwrap();
//! assert!(matches!(event, PaneEvent::Move { direction: MoveDirection::Up, .. }));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::models::{Card, CardKey, TypeFilters};

/// New search query and type filters
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterUpdate {
    /// Raw search string
    pub search: String,
    /// Enabled output categories
    pub filters: TypeFilters,
}

impl FilterUpdate {
    pub fn new(search: impl Into<String>, filters: TypeFilters) -> Self {
        Self {
            search: search.into(),
            filters,
        }
    }
}

/// Direction for a one-step move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    /// Towards the start of the list
    Up,
    /// Towards the end of the list
    Down,
}

impl MoveDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for MoveDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoveDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(Error::InvalidDirection {
                direction: other.to_string(),
            }),
        }
    }
}

/// A request for the pane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PaneEvent {
    /// Search or type filters changed
    UpdateFilters(FilterUpdate),
    /// Card selection toggled
    Select { card: CardKey, selected: bool },
    /// Card moved one step
    Move { card: CardKey, direction: MoveDirection },
    /// Card appended
    Add { card: Card },
    /// Card removed
    Delete { card: CardKey },
}

impl PaneEvent {
    /// Decode an event from a JSON message
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::EventDecodeFailed {
            reason: e.to_string(),
        })
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::UpdateFilters(_) => "updateFilters",
            Self::Select { .. } => "select",
            Self::Move { .. } => "move",
            Self::Add { .. } => "add",
            Self::Delete { .. } => "delete",
        }
    }
}
