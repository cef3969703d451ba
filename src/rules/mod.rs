//! Game-mode rules.
//!
//! Modes implement `GameModeRules` to define:
//! - The lives, clock or question cap a turn starts with
//! - Whether an answer ends the turn
//! - Whether the clock running out ends the turn
//!
//! The turn session calls into `GameModeRules` but never interprets
//! mode-specific concepts directly.

pub mod engine;
pub mod modes;

pub use engine::{GameModeRules, TurnAllowance, TurnDecision};
pub use modes::{MakeAWish, NoMistakes, TakeChances, TimeTrial};
