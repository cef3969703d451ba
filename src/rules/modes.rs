//! The four game modes.
//!
//! | Mode         | Wrong answer         | Other end condition       |
//! |--------------|----------------------|---------------------------|
//! | Make a Wish  | continue             | question target reached   |
//! | No Mistakes  | end turn             | -                         |
//! | Take Chances | lose a life, end at 0| -                         |
//! | Time Trial   | continue             | clock runs out            |

use super::engine::{GameModeRules, TurnAllowance, TurnDecision};
use crate::core::config::{GameMode, STARTING_LIVES};
use crate::core::state::TurnState;

/// A fixed number of questions per turn, regardless of correctness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MakeAWish {
    pub question_target: u32,
}

impl GameModeRules for MakeAWish {
    fn mode(&self) -> GameMode {
        GameMode::MakeAWish {
            question_target: self.question_target,
        }
    }

    fn initial_turn_state(&self) -> TurnAllowance {
        TurnAllowance {
            question_cap: Some(self.question_target),
            ..TurnAllowance::default()
        }
    }

    fn on_incorrect_answer(&self, _state: &mut TurnState) -> TurnDecision {
        TurnDecision::Continue
    }

    fn after_each_question(&self, state: &TurnState) -> TurnDecision {
        if state.questions_asked >= self.question_target {
            TurnDecision::EndTurn
        } else {
            TurnDecision::Continue
        }
    }
}

/// The first wrong answer ends the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoMistakes;

impl GameModeRules for NoMistakes {
    fn mode(&self) -> GameMode {
        GameMode::NoMistakes
    }

    fn initial_turn_state(&self) -> TurnAllowance {
        TurnAllowance::default()
    }

    fn on_incorrect_answer(&self, _state: &mut TurnState) -> TurnDecision {
        TurnDecision::EndTurn
    }
}

/// Each wrong answer costs a life; the turn ends with the last one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TakeChances {
    pub starting_lives: u32,
}

impl Default for TakeChances {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
        }
    }
}

impl GameModeRules for TakeChances {
    fn mode(&self) -> GameMode {
        GameMode::TakeChances
    }

    fn initial_turn_state(&self) -> TurnAllowance {
        TurnAllowance {
            lives: Some(self.starting_lives),
            ..TurnAllowance::default()
        }
    }

    fn on_incorrect_answer(&self, state: &mut TurnState) -> TurnDecision {
        let lives = state.lives_remaining.get_or_insert(self.starting_lives);
        *lives = lives.saturating_sub(1);

        if *lives == 0 {
            TurnDecision::EndTurn
        } else {
            TurnDecision::Continue
        }
    }
}

/// Answer as many as possible before the clock runs out.
///
/// Wrong answers never end the turn; time pressure is the only penalty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeTrial {
    pub time_limit_secs: u32,
}

impl GameModeRules for TimeTrial {
    fn mode(&self) -> GameMode {
        GameMode::TimeTrial {
            time_limit_secs: self.time_limit_secs,
        }
    }

    fn initial_turn_state(&self) -> TurnAllowance {
        TurnAllowance {
            time_limit: Some(self.time_limit_secs),
            ..TurnAllowance::default()
        }
    }

    fn on_incorrect_answer(&self, _state: &mut TurnState) -> TurnDecision {
        TurnDecision::Continue
    }

    fn ends_on_time_expiry(&self) -> bool {
        true
    }
}

impl GameMode {
    /// Build the rules for this mode.
    #[must_use]
    pub fn rules(self) -> Box<dyn GameModeRules> {
        match self {
            GameMode::MakeAWish { question_target } => Box::new(MakeAWish { question_target }),
            GameMode::NoMistakes => Box::new(NoMistakes),
            GameMode::TakeChances => Box::new(TakeChances::default()),
            GameMode::TimeTrial { time_limit_secs } => Box::new(TimeTrial { time_limit_secs }),
        }
    }
}
