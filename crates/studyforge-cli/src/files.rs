//! TOML file formats for materials and answer sheets.

use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use studyforge_core::model::{Answer, CourseMaterial, MaterialKind};

/// On-disk material file.
#[derive(Debug, Deserialize)]
struct MaterialFile {
    name: String,
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    topics: Vec<String>,
}

/// Parse a material TOML file into a `CourseMaterial` with a fresh id.
pub fn parse_material_file(path: &Path) -> Result<CourseMaterial> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read material file: {}", path.display()))?;
    let parsed: MaterialFile = toml::from_str(&content)
        .with_context(|| format!("failed to parse TOML: {}", path.display()))?;

    let kind = match parsed.kind {
        Some(k) => k
            .parse::<MaterialKind>()
            .map_err(|e| anyhow::anyhow!("{e}"))?,
        None => MaterialKind::from_file_name(&parsed.name),
    };

    Ok(CourseMaterial {
        id: Uuid::new_v4().to_string(),
        name: parsed.name,
        kind,
        content: parsed.content,
        uploaded_at: Utc::now(),
        topics: parsed.topics,
    })
}

/// On-disk answers file.
#[derive(Debug, Deserialize)]
struct AnswersFile {
    #[serde(default)]
    answer: Vec<AnswerEntry>,
}

#[derive(Debug, Deserialize)]
struct AnswerEntry {
    /// One-based question number.
    question: usize,
    #[serde(default)]
    choice: Option<usize>,
    #[serde(default)]
    text: Option<String>,
}

/// Parse an answers TOML file into (question number, answer) pairs.
///
/// Each entry must carry exactly one of `choice` (zero-based option index)
/// or `text`.
pub fn parse_answers_file(path: &Path) -> Result<Vec<(usize, Answer)>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answers file: {}", path.display()))?;
    let parsed: AnswersFile = toml::from_str(&content)
        .with_context(|| format!("failed to parse TOML: {}", path.display()))?;

    parsed
        .answer
        .into_iter()
        .map(|entry| {
            if entry.question == 0 {
                bail!("question numbers are one-based");
            }
            let answer = match (entry.choice, entry.text) {
                (Some(choice), None) => Answer::Choice(choice),
                (None, Some(text)) => Answer::Text(text),
                _ => bail!(
                    "answer for question {} must have exactly one of `choice` or `text`",
                    entry.question
                ),
            };
            Ok((entry.question, answer))
        })
        .collect()
}
