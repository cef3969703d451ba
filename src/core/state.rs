//! Per-turn state.
//!
//! ## TurnState
//!
//! Everything a turn accumulates: score, question count, lives or clock,
//! and the question log. Seeded from the player's running totals so scores
//! and logs carry across turns of one match.
//!
//! ## StatusLine
//!
//! The lives/time label shown next to the score.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};
use crate::quiz::QuestionLog;

/// Remaining seconds at or below which the clock is flagged as low.
pub const LOW_TIME_SECS: i64 = 10;

/// Mutable state of one player's turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnState {
    /// Whose turn this is.
    pub player: PlayerId,

    /// Running score, including earlier turns.
    pub score: u32,

    /// Questions put to the player this turn.
    pub questions_asked: u32,

    /// Remaining lives, for modes that count them.
    pub lives_remaining: Option<u32>,

    /// Seconds since the clock started.
    pub seconds_elapsed: u32,

    /// Clock budget, for timed modes.
    pub time_limit: Option<u32>,

    /// Questions allowed this turn, for capped modes.
    pub question_cap: Option<u32>,

    /// Running log, including earlier turns.
    pub log: QuestionLog,
}

impl TurnState {
    /// Seed a turn from a player's running totals.
    #[must_use]
    pub fn seeded_from(player: &Player) -> Self {
        Self {
            player: player.id,
            score: player.score,
            questions_asked: 0,
            lives_remaining: None,
            seconds_elapsed: 0,
            time_limit: None,
            question_cap: None,
            log: player.log.clone(),
        }
    }

    /// Seconds left on the clock, `None` for untimed turns. May go negative.
    #[must_use]
    pub fn time_left(&self) -> Option<i64> {
        self.time_limit
            .map(|limit| i64::from(limit) - i64::from(self.seconds_elapsed))
    }

    /// Whether the question cap has been reached.
    #[must_use]
    pub fn cap_reached(&self) -> bool {
        self.question_cap
            .is_some_and(|cap| self.questions_asked >= cap)
    }

    /// Current lives/time label.
    #[must_use]
    pub fn status(&self) -> StatusLine {
        if let Some(left) = self.time_left() {
            StatusLine::Time {
                left,
                low: left <= LOW_TIME_SECS,
            }
        } else if let Some(lives) = self.lives_remaining {
            StatusLine::Lives(lives)
        } else {
            StatusLine::Blank
        }
    }
}

/// Lives/time label next to the score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusLine {
    /// Mode has neither lives nor a clock.
    Blank,
    Lives(u32),
    /// Seconds left; `low` once ten or fewer remain.
    Time { left: i64, low: bool },
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusLine::Blank => Ok(()),
            StatusLine::Lives(lives) => write!(f, "Lives: {lives}"),
            StatusLine::Time { left, .. } => write!(f, "Time: {left}s"),
        }
    }
}
