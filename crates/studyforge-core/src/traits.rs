//! Question-synthesis trait.
//!
//! The generator derives exam shape (duration, question count, topic
//! assignment) itself and delegates question *content* to an implementation
//! of this trait. The production implementation lives in
//! `studyforge-content`; a real deployment would back it with an AI service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ExamError;
use crate::model::ExamType;

/// Trait for backends that produce question content.
#[async_trait]
pub trait QuestionSynthesizer: Send + Sync {
    /// Human-readable backend name (e.g. "template").
    fn name(&self) -> &str;

    /// Produce one content draft per slot in the request, in slot order.
    async fn synthesize(&self, request: &SynthesisRequest)
        -> Result<Vec<QuestionDraft>, ExamError>;
}

/// Request to synthesize content for a whole exam.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisRequest {
    /// Question type for every slot.
    pub exam_type: ExamType,
    /// One slot per question, topics already assigned round-robin.
    pub slots: Vec<QuestionSlot>,
}

/// A single question position with its assigned topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSlot {
    /// Zero-based position within the exam.
    pub index: usize,
    /// Topic label assigned to this slot.
    pub topic: String,
}

/// Synthesized content for one question, before the generator attaches
/// identity, points, and topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDraft {
    /// Prompt text.
    pub prompt: String,
    /// Answer options; must be exactly 4 for objective drafts, empty
    /// otherwise.
    #[serde(default)]
    pub options: Vec<String>,
    /// Correct option index, objective drafts only.
    #[serde(default)]
    pub correct_option: Option<usize>,
}
