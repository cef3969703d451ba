//! Player identification and per-player match records.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players. The id is the
//! player's position in turn order and never changes, even after the
//! leaderboard sort reorders the player list.
//!
//! ## Player
//!
//! A contestant's running totals for the whole match: name, cumulative
//! score and the chronological question log.

use serde::{Deserialize, Serialize};

use crate::quiz::QuestionLog;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a match with `player_count` players.
    ///
    /// ```
    /// use mathquiz::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// Name used when the player did not supply one: `"player <n>"`, 1-indexed.
    #[must_use]
    pub fn default_name(self) -> String {
        format!("player {}", self.index() + 1)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A contestant and everything they accumulated this match.
///
/// Mutated only when a finished turn is folded back in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Turn-order position.
    pub id: PlayerId,
    /// Display name, never blank.
    pub name: String,
    /// Cumulative score across all of this player's turns.
    pub score: u32,
    /// Every question attempted, oldest first.
    pub log: QuestionLog,
}

impl Player {
    /// Create a player, falling back to the default name when `name` is
    /// missing or blank.
    #[must_use]
    pub fn new(id: PlayerId, name: Option<&str>) -> Self {
        let name = match name {
            Some(n) if !n.trim().is_empty() => n.to_string(),
            _ => id.default_name(),
        };

        Self {
            id,
            name,
            score: 0,
            log: QuestionLog::new(),
        }
    }
}
