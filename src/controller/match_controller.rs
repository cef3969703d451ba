//! Match orchestration.
//!
//! The controller owns the ordered players, the question generator and the
//! active turn. It advances through the players in turn order and ranks
//! them once the last turn ends.
//!
//! ## Driving a match
//!
//! ```
//! use mathquiz::controller::MatchController;
//! use mathquiz::core::{ModeKind, QuizRng, SetupRequest};
//!
//! let request = SetupRequest::solo(ModeKind::MakeAWish).question_target(2);
//! let mut quiz = MatchController::setup(&request, QuizRng::new(42)).unwrap();
//!
//! quiz.start_match();
//! while !quiz.is_finished() {
//!     let answer = quiz.current_question().unwrap().answer;
//!     quiz.submit_answer(&answer.to_string()).unwrap();
//! }
//!
//! assert_eq!(quiz.leaderboard().unwrap().standings[0].player.score, 2);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::leaderboard::Leaderboard;
use crate::core::config::{GameMode, MatchConfig, PlayStyle, SetupRequest, MAX_PLAYERS};
use crate::core::error::{FormatError, ValidationError};
use crate::core::player::{Player, PlayerId};
use crate::core::rng::QuizRng;
use crate::core::state::TurnState;
use crate::quiz::{GeneratorState, Question, QuestionGenerator};
use crate::session::{Events, QuizEvent, TurnSession};

/// Runs a match from the first turn to the leaderboard.
#[derive(Debug)]
pub struct MatchController {
    config: MatchConfig,
    players: Vec<Player>,
    current: usize,
    session: Option<TurnSession>,
    generator: QuestionGenerator,
    seed: u64,
    leaderboard: Option<Leaderboard>,
}

impl MatchController {
    /// Validate a setup request and prepare the match.
    pub fn setup(request: &SetupRequest, rng: QuizRng) -> Result<Self, ValidationError> {
        Ok(Self::new(request.validate()?, rng))
    }

    /// Prepare a match from an already validated configuration.
    #[must_use]
    pub fn new(config: MatchConfig, rng: QuizRng) -> Self {
        let count = config.player_names().len();
        assert!(count > 0, "Must have at least 1 player");
        assert!(count <= MAX_PLAYERS, "At most {MAX_PLAYERS} players");

        let players = PlayerId::all(count)
            .zip(config.player_names())
            .map(|(id, name)| Player::new(id, Some(name.as_str())))
            .collect();

        info!(
            mode = %config.mode(),
            style = ?config.style(),
            players = config.player_names().len(),
            seed = rng.seed(),
            "match set up"
        );

        Self {
            config,
            players,
            current: 0,
            session: None,
            generator: QuestionGenerator::new(&rng),
            seed: rng.seed(),
            leaderboard: None,
        }
    }

    /// Begin the first player's turn.
    pub fn start_match(&mut self) -> Events {
        if self.session.is_some() || self.leaderboard.is_some() {
            warn!("match already started");
            return Events::new();
        }
        self.begin_turn()
    }

    /// Submit raw answer text for the active turn.
    pub fn submit_answer(&mut self, raw: &str) -> Result<Events, FormatError> {
        let Some(session) = self.session.as_mut() else {
            warn!("answer submitted with no active turn");
            return Ok(Events::new());
        };

        let events = session.submit_answer(raw, &mut self.generator)?;
        Ok(self.settle(events))
    }

    /// One second has passed on the external clock.
    pub fn on_tick(&mut self) -> Events {
        match self.session.as_mut() {
            Some(session) => {
                let events = session.on_tick();
                self.settle(events)
            }
            None => Events::new(),
        }
    }

    /// The external clock reports that time is up.
    pub fn on_time_expired(&mut self) -> Events {
        match self.session.as_mut() {
            Some(session) => {
                let events = session.on_time_expired();
                self.settle(events)
            }
            None => Events::new(),
        }
    }

    /// Fold the finished turn into its player and move on.
    ///
    /// Solo matches finish after the one turn. Competitions announce and
    /// start the next player's turn, or finish after the last one.
    pub fn on_turn_ended(&mut self) -> Events {
        if !self.session.as_ref().is_some_and(TurnSession::is_ended) {
            warn!("turn end reported while no turn has ended");
            return Events::new();
        }
        let Some(session) = self.session.take() else {
            return Events::new();
        };

        let outcome = session.into_outcome();
        let player = &mut self.players[self.current];
        player.score = outcome.score;
        player.log = outcome.log;

        if self.config.style() == PlayStyle::Solo {
            return self.finish();
        }

        self.current += 1;
        match self.players.get(self.current) {
            Some(next) => {
                let mut events = Events::new();
                events.push(QuizEvent::NextPlayer {
                    player: next.id,
                    name: next.name.clone(),
                });
                events.extend(self.begin_turn());
                events
            }
            None => self.finish(),
        }
    }

    /// The final standings, once the match is over.
    #[must_use]
    pub fn leaderboard(&self) -> Option<&Leaderboard> {
        self.leaderboard.as_ref()
    }

    /// Whether every turn has been played.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.leaderboard.is_some()
    }

    /// Players in turn order, or ranked order once finished.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player whose turn is running.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.session.as_ref().map(|_| &self.players[self.current])
    }

    /// The running turn.
    #[must_use]
    pub fn session(&self) -> Option<&TurnSession> {
        self.session.as_ref()
    }

    /// The question waiting for an answer.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.session.as_ref().and_then(TurnSession::current_question)
    }

    /// Selected mode.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.config.mode()
    }

    /// Solo or competition.
    #[must_use]
    pub fn style(&self) -> PlayStyle {
        self.config.style()
    }

    /// Seed the match's questions were drawn from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Serializable view of the match so far.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            style: self.config.style(),
            mode: self.config.mode(),
            players: self.players.clone(),
            current: self.current,
            turn: self.session.as_ref().map(|s| s.state().clone()),
            generator: self.generator.state(),
            finished: self.is_finished(),
        }
    }

    /// Abandon the match. Nothing carries over.
    ///
    /// Returns `TimerStopped` if a timed turn was running.
    pub fn reset_game(mut self) -> Events {
        info!(player = self.current, "match reset");
        match self.session.as_mut() {
            Some(session) => session.abandon(),
            None => Events::new(),
        }
    }

    fn begin_turn(&mut self) -> Events {
        let player = &self.players[self.current];
        let (mut session, mut events) = TurnSession::begin(player, self.config.mode().rules());
        events.extend(session.next_question(&mut self.generator));
        self.session = Some(session);
        self.settle(events)
    }

    fn settle(&mut self, mut events: Events) -> Events {
        if self.session.as_ref().is_some_and(TurnSession::is_ended) {
            events.extend(self.on_turn_ended());
        }
        events
    }

    fn finish(&mut self) -> Events {
        let board = Leaderboard::rank(self.config.style(), self.config.mode(), self.players.clone());
        self.players = board.players().cloned().collect();

        info!(
            mode = %self.config.mode(),
            winner = board.winner().map(|p| p.name.as_str()),
            "match finished"
        );

        let mut events = Events::new();
        events.push(QuizEvent::MatchFinished(board.clone()));
        self.leaderboard = Some(board);
        events
    }
}

/// Point-in-time view of a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub style: PlayStyle,
    pub mode: GameMode,
    pub players: Vec<Player>,
    /// Index of the player whose turn is running.
    pub current: usize,
    /// State of the running turn.
    pub turn: Option<TurnState>,
    pub generator: GeneratorState,
    pub finished: bool,
}
