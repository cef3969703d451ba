//! Questions, answers and their history.
//!
//! - `operator`: the four arithmetic operators
//! - `question`: question generation with per-operator constraints
//! - `judge`: tolerance-based answer checking
//! - `log`: append-only question history

pub mod judge;
pub mod log;
pub mod operator;
pub mod question;

pub use judge::{judge, TOLERANCE};
pub use log::{format_real, OperatorTally, QuestionLog, QuestionRecord};
pub use operator::Operator;
pub use question::{GeneratorState, Question, QuestionGenerator};
