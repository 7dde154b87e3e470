//! The `studyforge list` command.

use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Table};

use studyforge_store::ProfileStore;

pub fn execute(store_path: &Path) -> Result<()> {
    let store = ProfileStore::open_or_create(store_path, "Student", "student@example.com")?;

    if store.materials().is_empty() {
        println!("No course materials uploaded.");
    } else {
        println!("Course materials:");
        let mut table = Table::new();
        table.set_header(vec!["Id", "Name", "Kind", "Topics"]);
        for material in store.materials() {
            table.add_row(vec![
                Cell::new(&material.id),
                Cell::new(&material.name),
                Cell::new(material.kind),
                Cell::new(material.topics.join(", ")),
            ]);
        }
        println!("{table}");
    }

    if store.exams().is_empty() {
        println!("No exams generated.");
    } else {
        println!("Exams:");
        let mut table = Table::new();
        table.set_header(vec!["Id", "Title", "Type", "Questions", "Minutes", "Status"]);
        for exam in store.exams() {
            table.add_row(vec![
                Cell::new(&exam.id),
                Cell::new(&exam.title),
                Cell::new(exam.config.exam_type),
                Cell::new(exam.questions.len()),
                Cell::new(exam.config.duration_minutes),
                Cell::new(exam.status),
            ]);
        }
        println!("{table}");
    }

    Ok(())
}
