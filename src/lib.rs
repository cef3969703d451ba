//! # mathquiz
//!
//! A turn-based arithmetic quiz engine for one or more players.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: No I/O, no clocks, no threads. Every entry point takes
//!    one input (a setup request, an answer, a timer tick) and returns the
//!    events the presentation layer should show.
//!
//! 2. **Rules as values**: Each game mode is a `GameModeRules`
//!    implementation. The turn session asks the rules whether to go on and
//!    never branches on the mode itself.
//!
//! 3. **Reproducible**: Questions come from a seeded ChaCha8 stream. The
//!    same seed and setup give the same sequence of operators.
//!
//! ## Game modes
//!
//! - **Make a Wish**: a fixed number of questions per turn
//! - **No Mistakes**: the first wrong answer ends the turn
//! - **Take Chances**: three lives per turn
//! - **Time Trial**: as many answers as the clock allows
//!
//! ## Modules
//!
//! - `core`: Players, turn state, configuration, errors, RNG
//! - `quiz`: Operators, question generation, answer judging, question log
//! - `rules`: `GameModeRules` trait and the four modes
//! - `session`: The per-turn state machine and its events
//! - `controller`: Turn rotation and the leaderboard

pub mod controller;
pub mod core;
pub mod quiz;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    FormatError, GameMode, MatchConfig, ModeKind, PlayStyle, Player, PlayerId, QuizRng,
    QuizRngState, SetupRequest, StatusLine, TurnState, ValidationError,
};

pub use crate::quiz::{
    judge, Operator, OperatorTally, Question, QuestionGenerator, QuestionLog, QuestionRecord,
    TOLERANCE,
};

pub use crate::rules::{GameModeRules, TurnAllowance, TurnDecision};

pub use crate::session::{Events, QuizEvent, TurnOutcome, TurnPhase, TurnSession};

pub use crate::controller::{Leaderboard, MatchController, MatchSnapshot, Standing};
