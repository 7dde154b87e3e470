//! The `studyforge results` command.

use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Table};

use studyforge_store::ProfileStore;

pub fn execute(store_path: &Path, exam_id: Option<String>) -> Result<()> {
    let store = ProfileStore::open_or_create(store_path, "Student", "student@example.com")?;

    match exam_id {
        Some(id) => {
            let result = store.result(&id)?;
            let title = store
                .exam(&id)
                .map(|e| e.title.clone())
                .unwrap_or_else(|_| id.clone());

            println!("{title}");
            println!("Score: {:.1} / {}", result.score, result.total_points);
            println!("Accuracy: {}%", result.accuracy);

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
                println!("Areas to improve: {}", result.weak_areas.join(", "));
            }
            println!("{}", result.feedback);
        }
        None => {
            if store.results().is_empty() {
                println!("No results yet. Take an exam with `studyforge take`.");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec!["Exam", "Score", "Accuracy", "Completed"]);
            for result in store.results() {
                let title = store
                    .exam(&result.exam_id)
                    .map(|e| e.title.clone())
                    .unwrap_or_else(|_| result.exam_id.clone());
                table.add_row(vec![
                    Cell::new(title),
                    Cell::new(format!("{:.1}/{}", result.score, result.total_points)),
                    Cell::new(format!("{}%", result.accuracy)),
                    Cell::new(result.completed_at.format("%Y-%m-%d %H:%M").to_string()),
                ]);
            }
            println!("{table}");
        }
    }

    Ok(())
}
