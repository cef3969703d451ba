//! Command-line interface for the terminal quiz.

use clap::{Parser, ValueEnum};
use mathquiz::{ModeKind, SetupRequest};

/// Math quiz - arithmetic practice for one or more players
#[derive(Parser, Debug)]
#[command(name = "mathquiz")]
#[command(about = "Turn-based arithmetic quiz in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game mode
    #[arg(short, long, value_enum, default_value_t = ModeArg::MakeAWish)]
    pub mode: ModeArg,

    /// Single-player run (ignores --players)
    #[arg(long)]
    pub solo: bool,

    /// Number of players
    #[arg(short, long, default_value = "2", allow_negative_numbers = true)]
    pub players: i64,

    /// Questions per turn (Make a Wish)
    #[arg(short, long, default_value = "5", allow_negative_numbers = true)]
    pub questions: i64,

    /// Seconds per turn (Time Trial)
    #[arg(short, long, default_value = "60", allow_negative_numbers = true)]
    pub time_limit: i64,

    /// Player name, in turn order; repeat for each player. Missing names are asked for.
    #[arg(short = 'n', long = "name")]
    pub names: Vec<String>,

    /// Seed for reproducible questions
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Game mode as typed on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    MakeAWish,
    NoMistakes,
    TakeChances,
    TimeTrial,
}

impl From<ModeArg> for ModeKind {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::MakeAWish => ModeKind::MakeAWish,
            ModeArg::NoMistakes => ModeKind::NoMistakes,
            ModeArg::TakeChances => ModeKind::TakeChances,
            ModeArg::TimeTrial => ModeKind::TimeTrial,
        }
    }
}

impl Cli {
    /// Setup request for the given names.
    pub fn setup_request(&self, names: Vec<String>) -> SetupRequest {
        let mode = ModeKind::from(self.mode);
        let request = if self.solo {
            SetupRequest::solo(mode)
        } else {
            SetupRequest::competition(mode, self.players)
        };

        request
            .question_target(self.questions)
            .time_limit_secs(self.time_limit)
            .player_names(names)
    }
}
