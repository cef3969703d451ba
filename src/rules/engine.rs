//! Game-mode rules trait.
//!
//! Each mode implements `GameModeRules` to define:
//! - The allowance a turn starts with (lives, clock, question cap)
//! - Whether an answer, right or wrong, ends the turn
//! - Whether the clock running out ends the turn
//!
//! The turn session calls into the rules but never inspects the mode itself.

use crate::core::config::GameMode;
use crate::core::state::TurnState;

/// Continue the turn or end it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnDecision {
    Continue,
    EndTurn,
}

impl TurnDecision {
    /// `EndTurn` if either decision is `EndTurn`.
    #[must_use]
    pub fn and_then(self, next: impl FnOnce() -> TurnDecision) -> TurnDecision {
        match self {
            TurnDecision::EndTurn => TurnDecision::EndTurn,
            TurnDecision::Continue => next(),
        }
    }
}

/// What a turn starts with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnAllowance {
    pub lives: Option<u32>,
    pub time_limit: Option<u32>,
    pub question_cap: Option<u32>,
}

/// Per-mode turn policy.
///
/// ## Implementation Notes
///
/// - `on_correct_answer`: a correct answer never ends a turn on its own
/// - `on_incorrect_answer`: may spend lives in `state`
/// - `after_each_question`: checked after every answer, right or wrong
pub trait GameModeRules: std::fmt::Debug + Send {
    /// The configuration value these rules were built from.
    fn mode(&self) -> GameMode;

    /// Allowance seeded into a new turn.
    fn initial_turn_state(&self) -> TurnAllowance;

    /// Decide after a correct answer.
    fn on_correct_answer(&self, _state: &TurnState) -> TurnDecision {
        TurnDecision::Continue
    }

    /// Decide after an incorrect answer.
    fn on_incorrect_answer(&self, state: &mut TurnState) -> TurnDecision;

    /// Decide after any answer, once the verdict has been applied.
    fn after_each_question(&self, _state: &TurnState) -> TurnDecision {
        TurnDecision::Continue
    }

    /// Whether the external clock running out ends the turn.
    fn ends_on_time_expiry(&self) -> bool {
        false
    }

    // === Convenience Methods ===

    /// Apply the allowance to a freshly seeded turn.
    fn seed(&self, state: &mut TurnState) {
        let allowance = self.initial_turn_state();
        state.lives_remaining = allowance.lives;
        state.time_limit = allowance.time_limit;
        state.question_cap = allowance.question_cap;
        state.seconds_elapsed = 0;
        state.questions_asked = 0;
    }

    /// Full decision after an answer: the verdict hook, then the per-question check.
    fn decide(&self, state: &mut TurnState, correct: bool) -> TurnDecision {
        let verdict = if correct {
            self.on_correct_answer(state)
        } else {
            self.on_incorrect_answer(state)
        };
        verdict.and_then(|| self.after_each_question(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_then_short_circuits() {
        let mut called = false;
        let decision = TurnDecision::EndTurn.and_then(|| {
            called = true;
            TurnDecision::Continue
        });

        assert_eq!(decision, TurnDecision::EndTurn);
        assert!(!called);

        assert_eq!(
            TurnDecision::Continue.and_then(|| TurnDecision::EndTurn),
            TurnDecision::EndTurn
        );
        assert_eq!(
            TurnDecision::Continue.and_then(|| TurnDecision::Continue),
            TurnDecision::Continue
        );
    }
}
