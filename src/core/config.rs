//! Match configuration.
//!
//! Collaborators describe a match with a `SetupRequest`:
//! - `PlayStyle`: solo run or multi-player competition
//! - `ModeKind` plus its raw numeric parameters
//! - Player names, in turn order
//!
//! `SetupRequest::validate` checks it and produces a `MatchConfig`, the
//! only form the controller accepts. Raw counts are kept signed so that
//! out-of-range input is reported instead of wrapping.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::player::PlayerId;

/// Questions per turn in Make a Wish when the request does not say.
pub const DEFAULT_QUESTION_TARGET: u32 = 5;

/// Seconds per turn in Time Trial when the request does not say.
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 60;

/// Lives per turn in Take Chances. Not configurable.
pub const STARTING_LIVES: u32 = 3;

/// Maximum number of players in one match.
pub const MAX_PLAYERS: usize = 255;

/// Solo run or multi-player competition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayStyle {
    /// Exactly one player; the match ends with that player's turn.
    Solo,
    /// One or more players taking turns, ranked at the end.
    Competition,
}

/// Game mode without its parameters, as picked from a menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeKind {
    MakeAWish,
    NoMistakes,
    TakeChances,
    TimeTrial,
}

/// A fully parameterized game mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// A fixed number of questions per turn, right or wrong.
    MakeAWish { question_target: u32 },
    /// The turn ends at the first wrong answer.
    NoMistakes,
    /// The turn ends when all lives are lost.
    TakeChances,
    /// The turn ends when the clock runs out.
    TimeTrial { time_limit_secs: u32 },
}

impl GameMode {
    /// The mode's kind, without parameters.
    #[must_use]
    pub const fn kind(self) -> ModeKind {
        match self {
            GameMode::MakeAWish { .. } => ModeKind::MakeAWish,
            GameMode::NoMistakes => ModeKind::NoMistakes,
            GameMode::TakeChances => ModeKind::TakeChances,
            GameMode::TimeTrial { .. } => ModeKind::TimeTrial,
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.kind(), f)
    }
}

impl std::fmt::Display for ModeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ModeKind::MakeAWish => "Make a Wish",
            ModeKind::NoMistakes => "No Mistakes",
            ModeKind::TakeChances => "Take Chances",
            ModeKind::TimeTrial => "Time Trial",
        };
        f.write_str(name)
    }
}

/// Unvalidated setup input.
///
/// ## Example
///
/// ```
/// use mathquiz::core::{GameMode, ModeKind, SetupRequest};
///
/// let config = SetupRequest::competition(ModeKind::MakeAWish, 2)
///     .question_target(3)
///     .player_names(["Ada", ""])
///     .validate()
///     .unwrap();
///
/// assert_eq!(config.mode(), GameMode::MakeAWish { question_target: 3 });
/// assert_eq!(config.player_names(), ["Ada", "player 2"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupRequest {
    pub style: PlayStyle,
    pub player_count: i64,
    pub mode: ModeKind,
    /// Make a Wish only.
    pub question_target: Option<i64>,
    /// Time Trial only.
    pub time_limit_secs: Option<i64>,
    /// Names in turn order. Missing or blank entries get a default name.
    pub player_names: Vec<String>,
}

impl SetupRequest {
    /// Start a single-player request.
    #[must_use]
    pub fn solo(mode: ModeKind) -> Self {
        Self {
            style: PlayStyle::Solo,
            player_count: 1,
            mode,
            question_target: None,
            time_limit_secs: None,
            player_names: Vec::new(),
        }
    }

    /// Start a multi-player request.
    #[must_use]
    pub fn competition(mode: ModeKind, player_count: i64) -> Self {
        Self {
            style: PlayStyle::Competition,
            player_count,
            ..Self::solo(mode)
        }
    }

    /// Build a request from raw text fields.
    ///
    /// Only the field the mode uses is parsed, so a stale entry in an
    /// irrelevant field does not block setup.
    pub fn from_fields(
        style: PlayStyle,
        mode: ModeKind,
        player_count: &str,
        question_target: Option<&str>,
        time_limit_secs: Option<&str>,
        player_names: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let question_target = match (mode, question_target) {
            (ModeKind::MakeAWish, Some(raw)) => Some(parse_count("question target", raw)?),
            _ => None,
        };
        let time_limit_secs = match (mode, time_limit_secs) {
            (ModeKind::TimeTrial, Some(raw)) => Some(parse_count("time limit", raw)?),
            _ => None,
        };

        Ok(Self {
            style,
            player_count: parse_count("number of players", player_count)?,
            mode,
            question_target,
            time_limit_secs,
            player_names,
        })
    }

    /// Set the number of players.
    #[must_use]
    pub fn player_count(mut self, count: i64) -> Self {
        self.player_count = count;
        self
    }

    /// Set the Make a Wish question target.
    #[must_use]
    pub fn question_target(mut self, target: i64) -> Self {
        self.question_target = Some(target);
        self
    }

    /// Set the Time Trial limit in seconds.
    #[must_use]
    pub fn time_limit_secs(mut self, secs: i64) -> Self {
        self.time_limit_secs = Some(secs);
        self
    }

    /// Set player names in turn order.
    #[must_use]
    pub fn player_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Check the request and resolve defaults.
    pub fn validate(&self) -> Result<MatchConfig, ValidationError> {
        let count = self.player_count;
        if count < 1 {
            return Err(ValidationError::PlayerCount { count });
        }
        if count > MAX_PLAYERS as i64 {
            return Err(ValidationError::TooManyPlayers {
                count,
                max: MAX_PLAYERS,
            });
        }
        if self.style == PlayStyle::Solo && count != 1 {
            return Err(ValidationError::SoloPlayerCount { count });
        }

        let mode = match self.mode {
            ModeKind::MakeAWish => {
                let value = self
                    .question_target
                    .unwrap_or(i64::from(DEFAULT_QUESTION_TARGET));
                GameMode::MakeAWish {
                    question_target: positive(value)
                        .ok_or(ValidationError::QuestionTarget { value })?,
                }
            }
            ModeKind::NoMistakes => GameMode::NoMistakes,
            ModeKind::TakeChances => GameMode::TakeChances,
            ModeKind::TimeTrial => {
                let value = self
                    .time_limit_secs
                    .unwrap_or(i64::from(DEFAULT_TIME_LIMIT_SECS));
                GameMode::TimeTrial {
                    time_limit_secs: positive(value).ok_or(ValidationError::TimeLimit { value })?,
                }
            }
        };

        let player_names = PlayerId::all(count as usize)
            .map(|id| match self.player_names.get(id.index()) {
                Some(name) if !name.trim().is_empty() => name.clone(),
                _ => id.default_name(),
            })
            .collect();

        Ok(MatchConfig {
            style: self.style,
            mode,
            player_names,
        })
    }
}

/// A validated match configuration.
///
/// Only [`SetupRequest::validate`] builds one, so every mode parameter is
/// positive and the player count is within `1..=MAX_PLAYERS`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchConfig {
    style: PlayStyle,
    mode: GameMode,
    /// One non-blank name per player, in turn order.
    player_names: Vec<String>,
}

impl MatchConfig {
    /// Solo or competition.
    #[must_use]
    pub fn style(&self) -> PlayStyle {
        self.style
    }

    /// Mode with its resolved parameters.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Player names in turn order.
    #[must_use]
    pub fn player_names(&self) -> &[String] {
        &self.player_names
    }
}

fn parse_count(field: &'static str, raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber {
            field,
            input: raw.to_string(),
        })
}

fn positive(value: i64) -> Option<u32> {
    u32::try_from(value).ok().filter(|&v| v >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solo_defaults() {
        let config = SetupRequest::solo(ModeKind::MakeAWish).validate().unwrap();

        assert_eq!(config.style, PlayStyle::Solo);
        assert_eq!(
            config.mode,
            GameMode::MakeAWish {
                question_target: DEFAULT_QUESTION_TARGET
            }
        );
        assert_eq!(config.player_names, vec!["player 1"]);
    }

    #[test]
    fn test_time_trial_default_limit() {
        let config = SetupRequest::solo(ModeKind::TimeTrial).validate().unwrap();
        assert_eq!(config.mode, GameMode::TimeTrial { time_limit_secs: 60 });
    }

    #[test]
    fn test_zero_players_rejected() {
        let err = SetupRequest::competition(ModeKind::NoMistakes, 0)
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::PlayerCount { count: 0 });

        let err = SetupRequest::competition(ModeKind::NoMistakes, -2)
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::PlayerCount { count: -2 });
    }

    #[test]
    fn test_too_many_players_rejected() {
        let err = SetupRequest::competition(ModeKind::NoMistakes, 256)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ValidationError::TooManyPlayers { count: 256, .. }));
    }

    #[test]
    fn test_solo_requires_one_player() {
        let err = SetupRequest::solo(ModeKind::TakeChances)
            .player_count(3)
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::SoloPlayerCount { count: 3 });
    }

    #[test]
    fn test_non_positive_mode_parameters_rejected() {
        let err = SetupRequest::solo(ModeKind::MakeAWish)
            .question_target(0)
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::QuestionTarget { value: 0 });

        let err = SetupRequest::solo(ModeKind::TimeTrial)
            .time_limit_secs(-5)
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::TimeLimit { value: -5 });
    }

    #[test]
    fn test_irrelevant_parameters_ignored() {
        let config = SetupRequest::solo(ModeKind::NoMistakes)
            .question_target(0)
            .time_limit_secs(0)
            .validate()
            .unwrap();
        assert_eq!(config.mode, GameMode::NoMistakes);
    }

    #[test]
    fn test_names_padded_and_truncated() {
        let config = SetupRequest::competition(ModeKind::TakeChances, 3)
            .player_names(["Ada", "  ", "Grace", "Extra"])
            .validate()
            .unwrap();
        assert_eq!(config.player_names, vec!["Ada", "player 2", "Grace"]);

        let config = SetupRequest::competition(ModeKind::TakeChances, 2)
            .validate()
            .unwrap();
        assert_eq!(config.player_names, vec!["player 1", "player 2"]);
    }

    #[test]
    fn test_from_fields_parses_text() {
        let request = SetupRequest::from_fields(
            PlayStyle::Competition,
            ModeKind::TimeTrial,
            " 2 ",
            Some("not used"),
            Some("30"),
            vec![],
        )
        .unwrap();

        assert_eq!(request.player_count, 2);
        assert_eq!(request.question_target, None);
        assert_eq!(request.time_limit_secs, Some(30));
    }

    #[test]
    fn test_from_fields_rejects_non_numeric() {
        let err = SetupRequest::from_fields(
            PlayStyle::Competition,
            ModeKind::NoMistakes,
            "two",
            None,
            None,
            vec![],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotANumber {
                field: "number of players",
                input: "two".into()
            }
        );

        let err = SetupRequest::from_fields(
            PlayStyle::Solo,
            ModeKind::MakeAWish,
            "1",
            Some("5.5"),
            None,
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::NotANumber { field: "question target", .. }));
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(GameMode::MakeAWish { question_target: 1 }.to_string(), "Make a Wish");
        assert_eq!(GameMode::NoMistakes.to_string(), "No Mistakes");
        assert_eq!(GameMode::TakeChances.to_string(), "Take Chances");
        assert_eq!(GameMode::TimeTrial { time_limit_secs: 1 }.to_string(), "Time Trial");
    }

    #[test]
    fn test_request_serde() {
        let request = SetupRequest::competition(ModeKind::MakeAWish, 2).question_target(4);
        let json = serde_json::to_string(&request).unwrap();
        let deserialized: SetupRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, deserialized);
    }
}
