//! Core types: players, turn state, configuration, errors, RNG.
//!
//! These are the building blocks shared by the rules, the turn session and
//! the match controller.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{
    GameMode, MatchConfig, ModeKind, PlayStyle, SetupRequest, DEFAULT_QUESTION_TARGET,
    DEFAULT_TIME_LIMIT_SECS, MAX_PLAYERS, STARTING_LIVES,
};
pub use error::{FormatError, ValidationError};
pub use player::{Player, PlayerId};
pub use rng::{QuizRng, QuizRngState};
pub use state::{StatusLine, TurnState, LOW_TIME_SECS};
