//! Benchmarks for the assessment pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use attune_core::{score, Answer, AnswerSet, BankKind, Choice, QuestionBank, QuestionKind};
use attune_profile::{validate_individual, AssessmentEngine, ContentAggregator, SectionBounds};

fn create_answers(bank: &QuestionBank, first: [bool; 4]) -> AnswerSet {
    bank.questions()
        .iter()
        .map(|q| {
            let toward_first = first[q.dimension.index()];
            let answer = match q.kind {
                QuestionKind::Forced { .. } if toward_first => Answer::Forced(Choice::A),
                QuestionKind::Forced { .. } => Answer::Forced(Choice::B),
                QuestionKind::Likert { reverse } if toward_first != reverse => Answer::Likert(6),
                QuestionKind::Likert { .. } => Answer::Likert(2),
            };
            (q.id, answer)
        })
        .collect()
}

fn benchmark_scoring(c: &mut Criterion) {
    let full = QuestionBank::full();
    let snapshot = QuestionBank::snapshot();
    let full_answers = create_answers(&full, [true, false, true, false]);
    let snapshot_answers = create_answers(&snapshot, [true, false, true, false]);

    c.bench_function("score_full_bank", |b| {
        b.iter(|| score(black_box(&full_answers), black_box(&full)))
    });

    c.bench_function("score_snapshot_bank", |b| {
        b.iter(|| score(black_box(&snapshot_answers), black_box(&snapshot)))
    });
}

fn benchmark_aggregation(c: &mut Criterion) {
    let bank = QuestionBank::full();
    let aggregator = ContentAggregator::default();
    let bounds = SectionBounds::individual();
    let scores = score(&create_answers(&bank, [false, true, false, true]), &bank).unwrap();

    c.bench_function("aggregate_individual", |b| {
        b.iter(|| aggregator.build(black_box(&scores)))
    });

    let result = aggregator.build(&scores);
    c.bench_function("validate_individual", |b| {
        b.iter(|| validate_individual(black_box(&result), &bounds, ""))
    });
}

fn benchmark_engine(c: &mut Criterion) {
    let engine = AssessmentEngine::default();
    let bank = QuestionBank::full();
    let answers_a = create_answers(&bank, [true, true, true, true]);
    let answers_b = create_answers(&bank, [false, false, false, false]);

    c.bench_function("assess_full", |b| {
        b.iter(|| engine.assess(BankKind::Full, black_box(&answers_a)))
    });

    c.bench_function("assess_couple_full", |b| {
        b.iter(|| engine.assess_couple(BankKind::Full, black_box(&answers_a), black_box(&answers_b)))
    });
}

criterion_group!(benches, benchmark_scoring, benchmark_aggregation, benchmark_engine);
criterion_main!(benches);
