//! One player's turn.
//!
//! ## State machine
//!
//! ```text
//! AwaitingQuestion --next_question--> AwaitingAnswer --submit_answer--> AwaitingQuestion
//!        |                                  |                                 |
//!        +----------- cap reached ----------+------- rules say EndTurn -------+--> Ended
//! ```
//!
//! Time expiry forces `Ended` from any non-terminal phase (timed modes only).
//! A `FormatError` leaves the session exactly as it was.

use tracing::{debug, info, warn};

use super::event::{Events, QuizEvent};
use crate::core::error::FormatError;
use crate::core::player::Player;
use crate::core::state::TurnState;
use crate::quiz::{judge, Question, QuestionGenerator, QuestionLog, QuestionRecord};
use crate::rules::{GameModeRules, TurnDecision};

/// Where a turn is in its lifecycle.
#[derive(Clone, Debug, PartialEq)]
pub enum TurnPhase {
    AwaitingQuestion,
    AwaitingAnswer(Question),
    Ended,
}

/// Final totals of a finished turn, to be folded into the player.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnOutcome {
    pub score: u32,
    pub log: QuestionLog,
}

/// A player's in-progress turn.
#[derive(Debug)]
pub struct TurnSession {
    rules: Box<dyn GameModeRules>,
    state: TurnState,
    phase: TurnPhase,
}

impl TurnSession {
    /// Begin a turn seeded from the player's running totals.
    ///
    /// Returns the session in `AwaitingQuestion`; the caller asks for the
    /// first question.
    pub fn begin(player: &Player, rules: Box<dyn GameModeRules>) -> (Self, Events) {
        let mut state = TurnState::seeded_from(player);
        rules.seed(&mut state);

        info!(player = %player.id, name = %player.name, mode = %rules.mode(), "turn started");

        let mut events = Events::new();
        events.push(QuizEvent::TurnStarted {
            player: player.id,
            name: player.name.clone(),
            score: state.score,
            status: state.status(),
        });
        if let Some(limit_secs) = state.time_limit {
            events.push(QuizEvent::TimerStarted { limit_secs });
        }

        let session = Self {
            rules,
            state,
            phase: TurnPhase::AwaitingQuestion,
        };
        (session, events)
    }

    /// Current turn state.
    #[must_use]
    pub fn state(&self) -> &TurnState {
        &self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    /// The question waiting for an answer, if any.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match &self.phase {
            TurnPhase::AwaitingAnswer(question) => Some(question),
            _ => None,
        }
    }

    /// Whether the turn is over.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.phase == TurnPhase::Ended
    }

    /// Put the next question, or end the turn if the question cap is reached.
    pub fn next_question(&mut self, generator: &mut QuestionGenerator) -> Events {
        if self.phase != TurnPhase::AwaitingQuestion {
            warn!(phase = ?self.phase, "next question requested out of turn");
            return Events::new();
        }

        if self.state.cap_reached() {
            return self.end();
        }

        let operator = generator.random_operator();
        let question = generator.generate(operator);
        self.state.questions_asked += 1;

        let mut events = Events::new();
        events.push(QuizEvent::QuestionAsked {
            text: question.text(),
            score: self.state.score,
            status: self.state.status(),
        });
        self.phase = TurnPhase::AwaitingAnswer(question);
        events
    }

    /// Submit raw answer text.
    ///
    /// Blank or non-numeric text is rejected with a [`FormatError`] and
    /// nothing changes: no question slot, life or score is spent.
    pub fn submit_answer(
        &mut self,
        raw: &str,
        generator: &mut QuestionGenerator,
    ) -> Result<Events, FormatError> {
        let TurnPhase::AwaitingAnswer(question) = &self.phase else {
            warn!(phase = ?self.phase, "answer submitted with no question pending");
            return Ok(Events::new());
        };

        let value = parse_answer(raw)?;
        let correct = judge(value, question.answer);
        debug!(question = %question.text(), answer = value, correct, "answer judged");

        self.state.log.push(QuestionRecord::new(question, value, correct));
        if correct {
            self.state.score += 1;
        }

        let mut events = Events::new();
        events.push(QuizEvent::feedback(correct, question.answer));
        self.phase = TurnPhase::AwaitingQuestion;

        let lives_before = self.state.lives_remaining;
        let decision = self.rules.decide(&mut self.state, correct);
        if self.state.lives_remaining != lives_before {
            events.push(QuizEvent::StatusChanged(self.state.status()));
        }

        match decision {
            TurnDecision::Continue => events.extend(self.next_question(generator)),
            TurnDecision::EndTurn => events.extend(self.end()),
        }
        Ok(events)
    }

    /// Advance the clock by one second.
    pub fn on_tick(&mut self) -> Events {
        if self.is_ended() || self.state.time_limit.is_none() {
            warn!(phase = ?self.phase, "tick ignored");
            return Events::new();
        }

        self.state.seconds_elapsed += 1;
        let status = self.state.status();

        let mut events = Events::new();
        events.push(QuizEvent::StatusChanged(status));
        if self.state.time_left().is_some_and(|left| left <= 0) {
            events.extend(self.on_time_expired());
        }
        events
    }

    /// The clock ran out: end the turn whatever it was doing.
    pub fn on_time_expired(&mut self) -> Events {
        if self.is_ended() || !self.rules.ends_on_time_expiry() {
            warn!(phase = ?self.phase, mode = %self.rules.mode(), "time expiry ignored");
            return Events::new();
        }

        let mut events = Events::new();
        events.push(QuizEvent::TimeExpired);
        events.extend(self.end());
        events
    }

    /// Stop the turn without finishing it. Used when the match is reset.
    pub fn abandon(&mut self) -> Events {
        let mut events = Events::new();
        if !self.is_ended() && self.state.time_limit.is_some() {
            events.push(QuizEvent::TimerStopped);
        }
        self.phase = TurnPhase::Ended;
        events
    }

    /// Consume the turn into its final totals.
    #[must_use]
    pub fn into_outcome(self) -> TurnOutcome {
        debug_assert!(self.is_ended(), "outcome taken from a running turn");
        TurnOutcome {
            score: self.state.score,
            log: self.state.log,
        }
    }

    fn end(&mut self) -> Events {
        self.phase = TurnPhase::Ended;
        info!(
            player = %self.state.player,
            score = self.state.score,
            questions = self.state.questions_asked,
            "turn ended"
        );

        let mut events = Events::new();
        if self.state.time_limit.is_some() {
            events.push(QuizEvent::TimerStopped);
        }
        events.push(QuizEvent::TurnEnded {
            player: self.state.player,
            score: self.state.score,
        });
        events
    }
}

fn parse_answer(raw: &str) -> Result<f64, FormatError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        warn!("blank answer");
        return Err(FormatError::Blank);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => {
            warn!(input = raw, "answer is not a number");
            Err(FormatError::NotANumber {
                input: raw.to_string(),
            })
        }
    }
}
