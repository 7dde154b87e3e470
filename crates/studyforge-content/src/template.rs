//! Deterministic template synthesizer.
//!
//! Produces placeholder question content from fixed templates. This stands in
//! for a real content-generation backend; everything it emits is a pure
//! function of the slot index and topic, so generation is reproducible and
//! tests need no seeding.

use async_trait::async_trait;

use studyforge_core::error::ExamError;
use studyforge_core::model::ExamType;
use studyforge_core::traits::{QuestionDraft, QuestionSynthesizer, SynthesisRequest};

/// Template-based placeholder content backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateSynthesizer;

impl TemplateSynthesizer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl QuestionSynthesizer for TemplateSynthesizer {
    fn name(&self) -> &str {
        "template"
    }

    async fn synthesize(
        &self,
        request: &SynthesisRequest,
    ) -> Result<Vec<QuestionDraft>, ExamError> {
        tracing::debug!(
            exam_type = %request.exam_type,
            slots = request.slots.len(),
            "synthesizing template questions"
        );

        let drafts = request
            .slots
            .iter()
            .map(|slot| {
                let number = slot.index + 1;
                match request.exam_type {
                    ExamType::Objective => QuestionDraft {
                        prompt: format!(
                            "Question {number}: which statement about {} is correct?",
                            slot.topic
                        ),
                        options: vec![
                            "Option A".to_string(),
                            "Option B".to_string(),
                            "Option C".to_string(),
                            "Option D".to_string(),
                        ],
                        // Deterministic stand-in for a graded answer key.
                        correct_option: Some(slot.index % 4),
                    },
                    ExamType::ShortAnswer => QuestionDraft {
                        prompt: format!(
                            "Question {number}: briefly explain the key ideas of {}.",
                            slot.topic
                        ),
                        options: vec![],
                        correct_option: None,
                    },
                    ExamType::Essay => QuestionDraft {
                        prompt: format!(
                            "Question {number}: write a detailed essay discussing {}.",
                            slot.topic
                        ),
                        options: vec![],
                        correct_option: None,
                    },
                }
            })
            .collect();

        Ok(drafts)
    }
}
