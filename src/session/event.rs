//! Outbound events for the presentation collaborator.
//!
//! Every entry point of the turn session and match controller returns the
//! events it produced, oldest first. The collaborator renders them and, for
//! `TimerStarted`/`TimerStopped`, starts or stops its one-second ticker.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::controller::Leaderboard;
use crate::core::player::PlayerId;
use crate::core::state::StatusLine;

/// Events produced by one call. Most calls produce two or three.
pub type Events = SmallVec<[QuizEvent; 4]>;

/// Message shown after a correct answer.
pub const CORRECT_MESSAGE: &str = "Correct (+1 point)";

/// Something the collaborator should present or act on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum QuizEvent {
    /// A player's turn has begun.
    TurnStarted {
        player: PlayerId,
        name: String,
        score: u32,
        status: StatusLine,
    },

    /// Start ticking once per second.
    TimerStarted { limit_secs: u32 },

    /// Stop ticking.
    TimerStopped,

    /// A new question is waiting for an answer.
    QuestionAsked {
        text: String,
        score: u32,
        status: StatusLine,
    },

    /// Verdict on the last answer.
    Feedback { correct: bool, message: String },

    /// Lives or time changed.
    StatusChanged(StatusLine),

    /// The clock ran out ("Time's up! Your turn has ended").
    TimeExpired,

    /// A player's turn is over.
    TurnEnded { player: PlayerId, score: u32 },

    /// Announce the upcoming player ("<name> it's your turn!").
    NextPlayer { player: PlayerId, name: String },

    /// All turns are done.
    MatchFinished(Leaderboard),
}

impl QuizEvent {
    /// Feedback for a verdict.
    #[must_use]
    pub fn feedback(correct: bool, expected: f64) -> Self {
        let message = if correct {
            CORRECT_MESSAGE.to_string()
        } else {
            format!(
                "False; the correct answer was {}",
                crate::quiz::format_real(expected)
            )
        };
        QuizEvent::Feedback { correct, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_messages() {
        assert_eq!(
            QuizEvent::feedback(true, 4.0),
            QuizEvent::Feedback {
                correct: true,
                message: "Correct (+1 point)".into()
            }
        );
        assert_eq!(
            QuizEvent::feedback(false, 4.0),
            QuizEvent::Feedback {
                correct: false,
                message: "False; the correct answer was 4.0".into()
            }
        );
    }
}
