//! Turn sessions and the events they emit.

pub mod event;
pub mod turn;

pub use event::{Events, QuizEvent, CORRECT_MESSAGE};
pub use turn::{TurnOutcome, TurnPhase, TurnSession};
