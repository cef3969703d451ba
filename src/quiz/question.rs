//! Question generation.
//!
//! Numeric constraints per operator:
//! - Addition, multiplication: both operands uniform in `[0, 19]`
//! - Subtraction: same draw, reordered so the result is never negative
//! - Division: divisor in `[1, 5]`, quotient in `[1, 10]`, and the dividend
//!   is built as `divisor * quotient` so the division is always exact

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::operator::Operator;
use crate::core::rng::{QuizRng, QuizRngState};

const OPERAND_RANGE: std::ops::RangeInclusive<u32> = 0..=19;
const DIVISOR_RANGE: std::ops::RangeInclusive<u32> = 1..=5;
const QUOTIENT_RANGE: std::ops::RangeInclusive<u32> = 1..=10;

/// A generated problem and its exact answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub operator: Operator,
    /// Left and right operand as displayed.
    pub operands: (u32, u32),
    /// Expected answer.
    pub answer: f64,
}

impl Question {
    /// Build a question from its operands, computing the answer.
    ///
    /// Callers must keep the operator's invariants: a subtraction's left
    /// operand is at least its right one, and a division's right operand is
    /// non-zero.
    #[must_use]
    pub(crate) fn new(operator: Operator, a: u32, b: u32) -> Self {
        debug_assert!(operator != Operator::Subtraction || a >= b);
        debug_assert!(operator != Operator::Division || b != 0);

        let answer = match operator {
            Operator::Addition => f64::from(a + b),
            Operator::Subtraction => f64::from(a - b),
            Operator::Multiplication => f64::from(a * b),
            Operator::Division => f64::from(a) / f64::from(b),
        };

        Self {
            operator,
            operands: (a, b),
            answer,
        }
    }

    /// Prompt text, e.g. `"What is 7 + 3 ?"`.
    #[must_use]
    pub fn text(&self) -> String {
        let (a, b) = self.operands;
        format!("What is {} {} {} ?", a, self.operator.symbol(), b)
    }
}

/// Draws random questions.
///
/// Operator choice and operand values come from two independent streams of
/// the same seed, so a seed fixes the sequence of operators regardless of
/// which operand values were drawn in between.
#[derive(Clone, Debug)]
pub struct QuestionGenerator {
    operators: QuizRng,
    operands: QuizRng,
}

impl QuestionGenerator {
    /// Create a generator whose streams derive from `rng`.
    #[must_use]
    pub fn new(rng: &QuizRng) -> Self {
        Self {
            operators: rng.for_context("operator"),
            operands: rng.for_context("operands"),
        }
    }

    /// Pick an operator uniformly at random.
    pub fn random_operator(&mut self) -> Operator {
        let index = self.operators.gen_range(0..=3) as usize;
        Operator::ALL[index]
    }

    /// Generate a question for the requested operator.
    pub fn generate(&mut self, operator: Operator) -> Question {
        let question = match operator {
            Operator::Addition | Operator::Multiplication => {
                let a = self.operands.gen_range(OPERAND_RANGE);
                let b = self.operands.gen_range(OPERAND_RANGE);
                Question::new(operator, a, b)
            }
            Operator::Subtraction => {
                let a = self.operands.gen_range(OPERAND_RANGE);
                let b = self.operands.gen_range(OPERAND_RANGE);
                Question::new(operator, a.max(b), a.min(b))
            }
            Operator::Division => {
                let divisor = self.operands.gen_range(DIVISOR_RANGE);
                let quotient = self.operands.gen_range(QUOTIENT_RANGE);
                Question::new(operator, divisor * quotient, divisor)
            }
        };

        debug!(question = %question.text(), answer = question.answer, "generated question");
        question
    }

    /// Current positions of both streams.
    #[must_use]
    pub fn state(&self) -> GeneratorState {
        GeneratorState {
            operators: self.operators.state(),
            operands: self.operands.state(),
        }
    }

    /// Resume a generator from a captured state.
    #[must_use]
    pub fn from_state(state: &GeneratorState) -> Self {
        Self {
            operators: QuizRng::from_state(&state.operators),
            operands: QuizRng::from_state(&state.operands),
        }
    }
}

/// Serializable position of a [`QuestionGenerator`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorState {
    pub operators: QuizRngState,
    pub operands: QuizRngState,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> QuestionGenerator {
        QuestionGenerator::new(&QuizRng::new(42))
    }

    #[test]
    fn test_question_text() {
        assert_eq!(Question::new(Operator::Addition, 7, 3).text(), "What is 7 + 3 ?");
        assert_eq!(Question::new(Operator::Division, 12, 4).text(), "What is 12 / 4 ?");
    }

    #[test]
    fn test_answers() {
        assert_eq!(Question::new(Operator::Addition, 7, 3).answer, 10.0);
        assert_eq!(Question::new(Operator::Subtraction, 7, 3).answer, 4.0);
        assert_eq!(Question::new(Operator::Multiplication, 7, 3).answer, 21.0);
        assert_eq!(Question::new(Operator::Division, 12, 4).answer, 3.0);
    }

    #[test]
    fn test_operand_ranges() {
        let mut gen = generator();

        for op in [Operator::Addition, Operator::Subtraction, Operator::Multiplication] {
            for _ in 0..200 {
                let (a, b) = gen.generate(op).operands;
                assert!(a <= 19 && b <= 19, "{op:?} operands out of range: {a}, {b}");
            }
        }
    }

    #[test]
    fn test_subtraction_never_negative() {
        let mut gen = generator();

        for _ in 0..500 {
            let q = gen.generate(Operator::Subtraction);
            assert!(q.operands.0 >= q.operands.1);
            assert!(q.answer >= 0.0);
        }
    }

    #[test]
    fn test_division_is_exact() {
        let mut gen = generator();

        for _ in 0..500 {
            let q = gen.generate(Operator::Division);
            let (dividend, divisor) = q.operands;

            assert!((1..=5).contains(&divisor));
            assert!((1..=50).contains(&dividend));
            assert_eq!(dividend % divisor, 0);
            assert_eq!(q.answer, f64::from(dividend / divisor));
            assert!((1.0..=10.0).contains(&q.answer));
        }
    }

    #[test]
    fn test_random_operator_covers_all() {
        let mut gen = generator();
        let drawn: Vec<_> = (0..200).map(|_| gen.random_operator()).collect();

        for op in Operator::ALL {
            assert!(drawn.contains(&op), "{op:?} never drawn");
        }
    }

    #[test]
    fn test_operator_stream_ignores_operand_draws() {
        let mut gen1 = generator();
        let mut gen2 = generator();

        let ops1: Vec<_> = (0..20).map(|_| gen1.random_operator()).collect();
        let ops2: Vec<_> = (0..20)
            .map(|_| {
                let op = gen2.random_operator();
                gen2.generate(op);
                op
            })
            .collect();

        assert_eq!(ops1, ops2);
    }

    #[test]
    fn test_state_restore() {
        let mut gen = generator();
        gen.generate(Operator::Addition);

        let state = gen.state();
        let expected = gen.generate(Operator::Multiplication);

        let mut restored = QuestionGenerator::from_state(&state);
        assert_eq!(restored.generate(Operator::Multiplication), expected);
    }
}
