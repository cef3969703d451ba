//! Question generation and turn throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mathquiz::core::{ModeKind, SetupRequest};
use mathquiz::{MatchController, QuestionGenerator, QuizRng};

fn bench_generate(c: &mut Criterion) {
    let mut generator = QuestionGenerator::new(&QuizRng::new(42));

    c.bench_function("generate_question", |b| {
        b.iter(|| {
            let operator = generator.random_operator();
            black_box(generator.generate(operator))
        })
    });
}

fn bench_make_a_wish_match(c: &mut Criterion) {
    let request = SetupRequest::competition(ModeKind::MakeAWish, 4).question_target(20);

    c.bench_function("make_a_wish_4x20", |b| {
        b.iter(|| {
            let Ok(mut quiz) = MatchController::setup(&request, QuizRng::new(7)) else {
                return;
            };
            quiz.start_match();
            while let Some(answer) = quiz.current_question().map(|q| q.answer) {
                let _ = quiz.submit_answer(&answer.to_string());
            }
            black_box(quiz.leaderboard().map(|board| board.standings.len()));
        })
    });
}

fn bench_question_log_clone(c: &mut Criterion) {
    let request = SetupRequest::solo(ModeKind::MakeAWish).question_target(500);
    let Ok(mut quiz) = MatchController::setup(&request, QuizRng::new(3)) else {
        return;
    };
    quiz.start_match();
    for _ in 0..499 {
        let Some(answer) = quiz.current_question().map(|q| q.answer) else {
            break;
        };
        let _ = quiz.submit_answer(&answer.to_string());
    }

    c.bench_function("snapshot_with_499_records", |b| {
        b.iter(|| black_box(quiz.snapshot()))
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_make_a_wish_match,
    bench_question_log_clone
);
criterion_main!(benches);
