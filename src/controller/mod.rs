//! Match control: turn rotation and the final leaderboard.

pub mod leaderboard;
pub mod match_controller;

pub use leaderboard::{sort_by_score, Leaderboard, Standing};
pub use match_controller::{MatchController, MatchSnapshot};
