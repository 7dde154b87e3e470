//! The `studyforge generate` command.

use std::path::Path;

use anyhow::{anyhow, Result};

use studyforge_content::TemplateSynthesizer;
use studyforge_core::error::ExamError;
use studyforge_core::generator::{ExamGenerator, ExamSelection};
use studyforge_core::model::{Difficulty, ExamType, TimeIntensity};
use studyforge_store::ProfileStore;

pub async fn execute(
    store_path: &Path,
    material_id: Option<String>,
    exam_type: String,
    difficulty: String,
    intensity: String,
    title: Option<String>,
) -> Result<()> {
    let selection = ExamSelection {
        exam_type: exam_type
            .parse::<ExamType>()
            .map_err(|e| anyhow!("{e}"))?,
        difficulty: difficulty
            .parse::<Difficulty>()
            .map_err(|e| anyhow!("{e}"))?,
        time_intensity: intensity
            .parse::<TimeIntensity>()
            .map_err(|e| anyhow!("{e}"))?,
    };

    let mut store = ProfileStore::open_or_create(store_path, "Student", "student@example.com")?;

    let material = match &material_id {
        Some(id) => store.material(id)?,
        None => store.materials().first().ok_or_else(|| {
            anyhow::Error::from(ExamError::InvalidInput(
                "no course materials uploaded; run `studyforge upload` first".into(),
            ))
        })?,
    }
    .clone();

    let generator = ExamGenerator::new(TemplateSynthesizer::new());
    let mut exam = generator.generate_from_material(selection, &material).await?;
    if let Some(title) = title {
        exam.title = title;
    }

    let exam_id = exam.id.clone();
    let question_count = exam.questions.len();
    let duration = exam.config.duration_minutes;
    let exam_title = exam.title.clone();

    store.add_exam(exam)?;

    println!("Generated '{exam_title}'");
    println!("  Questions: {question_count}");
    println!("  Duration:  {duration} minutes");
    println!("Exam id: {exam_id}");

    Ok(())
}
