use std::collections::HashMap;

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use studyforge_core::model::{
    Answer, Difficulty, Exam, ExamConfig, ExamStatus, ExamType, Question, TimeIntensity,
};
use studyforge_core::scorer::score;

fn make_exam(question_count: usize) -> (Exam, HashMap<String, Answer>) {
    let questions: Vec<Question> = (0..question_count)
        .map(|i| Question {
            id: format!("q{i}"),
            exam_type: ExamType::Objective,
            prompt: format!("Question {i}"),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_option: Some(i % 4),
            points: 1,
            topic: Some(format!("Topic {}", i % 8)),
        })
        .collect();

    let answers: HashMap<String, Answer> = questions
        .iter()
        .enumerate()
        .map(|(i, q)| (q.id.clone(), Answer::Choice(i % 3)))
        .collect();

    let mut exam = Exam {
        id: "bench".into(),
        title: "Bench Exam".into(),
        material_id: None,
        config: ExamConfig {
            exam_type: ExamType::Objective,
            difficulty: Difficulty::Intermediate,
            time_intensity: TimeIntensity::Moderate,
            duration_minutes: 30,
            question_count: question_count as u32,
        },
        questions,
        created_at: Utc::now(),
        started_at: None,
        completed_at: None,
        status: ExamStatus::Pending,
    };
    exam.start(Utc::now()).unwrap();

    (exam, answers)
}

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");

    for count in [20usize, 100, 500] {
        let (exam, answers) = make_exam(count);
        group.bench_function(format!("questions={count}"), |b| {
            b.iter(|| score(black_box(&exam), black_box(&answers)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_score);
criterion_main!(benches);
