//! The `studyforge take` command.
//!
//! Runs the whole session in one shot: begin the exam, apply the answers
//! from the file, submit, and persist the result.

use std::path::Path;

use anyhow::{bail, Result};

use studyforge_core::model::ExamResult;
use studyforge_core::session::ExamSession;
use studyforge_store::ProfileStore;

use crate::files;

pub fn execute(store_path: &Path, exam_id: &str, answers_path: &Path) -> Result<()> {
    let mut store = ProfileStore::open_or_create(store_path, "Student", "student@example.com")?;

    let exam = store.exam(exam_id)?.clone();
    let mut session = ExamSession::begin(exam)?;
    // Persist the in-progress transition before grading, matching the
    // lifecycle a live session goes through.
    store.update_exam(session.exam().clone())?;

    for (number, answer) in files::parse_answers_file(answers_path)? {
        let Some(question) = session.exam().questions.get(number - 1) else {
            bail!(
                "answers file refers to question {number}, but the exam has {} questions",
                session.exam().questions.len()
            );
        };
        let question_id = question.id.clone();
        session.answer(&question_id, answer)?;
    }

    tracing::debug!(
        exam_id,
        answered = session.answers().len(),
        questions = session.exam().questions.len(),
        "submitting exam"
    );

    let (exam, result) = session.submit()?;
    store.record_completion(exam, result.clone())?;

    print_score_card(&result);

    Ok(())
}

fn print_score_card(result: &ExamResult) {
    use comfy_table::{Cell, Table};

    println!("Score: {:.1} / {}", result.score, result.total_points);
    println!("Accuracy: {}%", result.accuracy);
    println!();

    let mut table = Table::new();
    table.set_header(vec!["Topic", "Correct", "Total"]);
    for topic in &result.topic_performance {
        table.add_row(vec![
            Cell::new(&topic.topic),
            Cell::new(topic.correct),
            Cell::new(topic.total),
        ]);
    }
    println!("{table}");

    if !result.weak_areas.is_empty() {
        println!("\nAreas to improve: {}", result.weak_areas.join(", "));
    }
    println!("\n{}", result.feedback);
}
