//! Question history.
//!
//! ## QuestionRecord
//!
//! One attempted question: operands, operator, the submitted and expected
//! answers, and the verdict. Immutable once appended.
//!
//! ## QuestionLog
//!
//! Append-only, chronological. Backed by an `im` persistent vector so a
//! turn can be seeded with a player's whole history in O(1) and the result
//! handed back without copying.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::operator::Operator;
use super::question::Question;

/// One attempted question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub operands: (u32, u32),
    pub operator: Operator,
    pub user_answer: f64,
    pub expected_answer: f64,
    pub was_correct: bool,
}

impl QuestionRecord {
    /// Record an answer to `question`.
    #[must_use]
    pub fn new(question: &Question, user_answer: f64, was_correct: bool) -> Self {
        Self {
            operands: question.operands,
            operator: question.operator,
            user_answer,
            expected_answer: question.answer,
            was_correct,
        }
    }
}

impl std::fmt::Display for QuestionRecord {
    /// `7+3 = User:10.0 | Actual:10.0 | Correct:true`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{} = User:{} | Actual:{} | Correct:{}",
            self.operands.0,
            self.operator.symbol(),
            self.operands.1,
            format_real(self.user_answer),
            format_real(self.expected_answer),
            self.was_correct,
        )
    }
}

/// Render a real number with at least one fractional digit: `5.0`, `2.5`.
///
/// Always positional, never scientific: `1e7` renders as `10000000.0` and
/// `1e-4` as `0.0001`.
#[must_use]
pub fn format_real(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Per-operator counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorTally {
    pub asked: u32,
    pub correct: u32,
}

/// Chronological list of attempted questions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionLog {
    records: Vector<QuestionRecord>,
}

impl QuestionLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn push(&mut self, record: QuestionRecord) {
        self.records.push_back(record);
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been attempted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &QuestionRecord> {
        self.records.iter()
    }

    /// Most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&QuestionRecord> {
        self.records.last()
    }

    /// Count asked and correct questions per operator.
    #[must_use]
    pub fn tally_by_operator(&self) -> FxHashMap<Operator, OperatorTally> {
        let mut tally: FxHashMap<Operator, OperatorTally> = FxHashMap::default();

        for record in &self.records {
            let entry = tally.entry(record.operator).or_default();
            entry.asked += 1;
            if record.was_correct {
                entry.correct += 1;
            }
        }

        tally
    }
}

impl std::fmt::Display for QuestionLog {
    /// Every record on its own line, each line preceded by a newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for record in &self.records {
            write!(f, "\n{record}")?;
        }
        Ok(())
    }
}
