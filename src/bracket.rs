//! Connector requests derived from bracket progression
//!
//! A match's winner advances along a solid orthogonal connector. Its
//! loser, when the bracket has somewhere to send it (the bronze match
//! for semi-final losers), drops along a dashed one.

use serde::{Deserialize, Serialize};

use crate::layout::{ConnectionRequest, ConnectorStyle};

/// A bracket match and where its winner and loser go next
///
/// The match id doubles as the anchor id of its box on screen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BracketMatch {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_win: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_lose: Option<String>,
}

impl BracketMatch {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the match the winner advances to
    pub fn with_next_win(mut self, id: impl Into<String>) -> Self {
        self.next_win = Some(id.into());
        self
    }

    /// Set the match the loser drops to
    pub fn with_next_lose(mut self, id: impl Into<String>) -> Self {
        self.next_lose = Some(id.into());
        self
    }
}

/// Build connection requests for every progression link, in match order
///
/// Winner links come before loser links for the same match. Links are
/// emitted even when the target is not in `matches`; the layout pass
/// drops them if the target box is not on screen.
pub fn connections_for(matches: &[BracketMatch]) -> Vec<ConnectionRequest> {
    let mut requests = Vec::new();

    for m in matches {
        if let Some(next) = link(&m.next_win) {
            requests.push(ConnectionRequest::new(
                m.id.clone(),
                next,
                ConnectorStyle::Orthogonal,
            ));
        }
        if let Some(next) = link(&m.next_lose) {
            requests.push(ConnectionRequest::new(
                m.id.clone(),
                next,
                ConnectorStyle::Dashed,
            ));
        }
    }

    requests
}

// Blank ids come through from serialized brackets with unset links
fn link(id: &Option<String>) -> Option<&str> {
    id.as_deref().filter(|s| !s.trim().is_empty())
}
