//! Exam generation.
//!
//! Derives duration and question count from the configuration selections,
//! assigns topics round-robin, and assembles questions from content produced
//! by an injected [`QuestionSynthesizer`].

use chrono::Utc;
use uuid::Uuid;

use crate::error::ExamError;
use crate::model::{
    CourseMaterial, Difficulty, Exam, ExamConfig, ExamStatus, ExamType, Question, TimeIntensity,
};
use crate::traits::{QuestionSlot, QuestionSynthesizer, SynthesisRequest};

/// Topic label used when the source material carries no topics.
pub const FALLBACK_TOPIC: &str = "General";

/// The three user-facing configuration selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamSelection {
    pub exam_type: ExamType,
    pub difficulty: Difficulty,
    pub time_intensity: TimeIntensity,
}

/// Derive the frozen exam configuration from the selections.
///
/// Duration: base minutes by type (30/45/60) times the intensity multiplier
/// (1.5/1.0/0.75). Question count: base count by type (20/10/5) times the
/// difficulty multiplier (0.8/1.0/1.2). Both rounded half-up.
pub fn derive_config(selection: ExamSelection) -> ExamConfig {
    let duration = selection.exam_type.base_duration_minutes()
        * selection.time_intensity.duration_multiplier();
    let questions =
        selection.exam_type.base_question_count() * selection.difficulty.question_multiplier();

    ExamConfig {
        exam_type: selection.exam_type,
        difficulty: selection.difficulty,
        time_intensity: selection.time_intensity,
        duration_minutes: duration.round() as u32,
        question_count: questions.round() as u32,
    }
}

/// Assign topics to question slots round-robin: slot `i` gets
/// `topics[i % len]`, or [`FALLBACK_TOPIC`] when the list is empty.
pub fn assign_topics(topics: &[String], count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            if topics.is_empty() {
                FALLBACK_TOPIC.to_string()
            } else {
                topics[i % topics.len()].clone()
            }
        })
        .collect()
}

/// Exam generator driving an injected synthesis backend.
pub struct ExamGenerator<S> {
    synthesizer: S,
}

impl<S: QuestionSynthesizer> ExamGenerator<S> {
    pub fn new(synthesizer: S) -> Self {
        Self { synthesizer }
    }

    /// Access the underlying synthesis backend.
    pub fn synthesizer(&self) -> &S {
        &self.synthesizer
    }

    /// Generate a pending exam from a course material.
    ///
    /// The exam title follows the material name; topics are taken from the
    /// material's extracted topic list.
    pub async fn generate_from_material(
        &self,
        selection: ExamSelection,
        material: &CourseMaterial,
    ) -> Result<Exam, ExamError> {
        let title = format!("{} - {} Exam", material.name, selection.exam_type);
        self.generate(selection, title, Some(material.id.clone()), &material.topics)
            .await
    }

    /// Generate a pending exam from an explicit topic list.
    pub async fn generate(
        &self,
        selection: ExamSelection,
        title: String,
        material_id: Option<String>,
        topics: &[String],
    ) -> Result<Exam, ExamError> {
        let config = derive_config(selection);
        let assigned = assign_topics(topics, config.question_count as usize);

        tracing::debug!(
            exam_type = %config.exam_type,
            questions = config.question_count,
            duration_minutes = config.duration_minutes,
            backend = self.synthesizer.name(),
            "derived exam configuration"
        );

        let request = SynthesisRequest {
            exam_type: config.exam_type,
            slots: assigned
                .iter()
                .enumerate()
                .map(|(index, topic)| QuestionSlot {
                    index,
                    topic: topic.clone(),
                })
                .collect(),
        };

        let drafts = self.synthesizer.synthesize(&request).await?;
        if drafts.len() != assigned.len() {
            return Err(ExamError::InvalidInput(format!(
                "synthesizer returned {} drafts for {} slots",
                drafts.len(),
                assigned.len()
            )));
        }

        let points = config.exam_type.points_per_question();
        let questions = drafts
            .into_iter()
            .zip(assigned)
            .map(|(draft, topic)| {
                validate_draft_shape(config.exam_type, &draft.options, draft.correct_option)?;
                Ok(Question {
                    id: Uuid::new_v4().to_string(),
                    exam_type: config.exam_type,
                    prompt: draft.prompt,
                    options: draft.options,
                    correct_option: draft.correct_option,
                    points,
                    topic: Some(topic),
                })
            })
            .collect::<Result<Vec<_>, ExamError>>()?;

        tracing::info!(questions = questions.len(), title = %title, "generated exam");

        Ok(Exam {
            id: Uuid::new_v4().to_string(),
            title,
            material_id,
            config,
            questions,
            created_at: Utc::now(),
            started_at: None,
            completed_at: None,
            status: ExamStatus::Pending,
        })
    }
}

/// Reject drafts that do not match the per-type question shape: objective
/// questions carry exactly 4 options and a correct index 0–3, the other
/// types carry neither.
fn validate_draft_shape(
    exam_type: ExamType,
    options: &[String],
    correct_option: Option<usize>,
) -> Result<(), ExamError> {
    match exam_type {
        ExamType::Objective => {
            if options.len() != 4 {
                return Err(ExamError::InvalidInput(format!(
                    "objective draft has {} options, expected 4",
                    options.len()
                )));
            }
            match correct_option {
                Some(i) if i < 4 => Ok(()),
                Some(i) => Err(ExamError::InvalidInput(format!(
                    "correct option index {i} out of range 0-3"
                ))),
                None => Err(ExamError::InvalidInput(
                    "objective draft missing correct option".into(),
                )),
            }
        }
        ExamType::ShortAnswer | ExamType::Essay => {
            if !options.is_empty() || correct_option.is_some() {
                return Err(ExamError::InvalidInput(format!(
                    "{exam_type} draft must not carry options"
                )));
            }
            Ok(())
        }
    }
}
