//! Error types.
//!
//! Every anticipated failure is a user-input error that the collaborator
//! recovers from by re-prompting:
//! - [`ValidationError`]: setup input rejected, nothing applied
//! - [`FormatError`]: an answer that is not a number, turn state unchanged

/// Malformed match setup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("must have at least 1 player, got {count}")]
    PlayerCount { count: i64 },

    #[error("at most {max} players supported, got {count}")]
    TooManyPlayers { count: i64, max: usize },

    #[error("a solo match has exactly 1 player, got {count}")]
    SoloPlayerCount { count: i64 },

    #[error("question target must be at least 1, got {value}")]
    QuestionTarget { value: i64 },

    #[error("time limit must be at least 1 second, got {value}")]
    TimeLimit { value: i64 },

    #[error("{field} is not a valid number: {input:?}")]
    NotANumber { field: &'static str, input: String },
}

/// A submitted answer that could not be read as a number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("please enter an answer")]
    Blank,

    #[error("invalid input; please enter a number (got {input:?})")]
    NotANumber { input: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ValidationError::PlayerCount { count: 0 };
        assert_eq!(err.to_string(), "must have at least 1 player, got 0");

        let err = ValidationError::NotANumber {
            field: "time limit",
            input: "abc".into(),
        };
        assert_eq!(err.to_string(), "time limit is not a valid number: \"abc\"");

        let err = FormatError::NotANumber { input: "x".into() };
        assert_eq!(err.to_string(), "invalid input; please enter a number (got \"x\")");
    }

    #[test]
    fn blank_answer_message() {
        assert_eq!(FormatError::Blank.to_string(), "please enter an answer");
    }

    #[test]
    fn errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationError>();
        assert_send_sync::<FormatError>();
    }
}
