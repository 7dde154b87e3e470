//! Mock synthesizer for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use studyforge_core::error::ExamError;
use studyforge_core::model::ExamType;
use studyforge_core::traits::{QuestionDraft, QuestionSynthesizer, SynthesisRequest};

/// A mock synthesis backend for testing the generator without template text.
///
/// Returns configurable prompts based on topic matching and records the
/// requests it receives.
pub struct MockSynthesizer {
    /// Map of topic → prompt text.
    prompts: HashMap<String, String>,
    /// Prompt used when no topic matches.
    default_prompt: String,
    /// Number of calls made.
    call_count: AtomicU32,
    /// Last request received.
    last_request: Mutex<Option<SynthesisRequest>>,
}

impl MockSynthesizer {
    /// Create a mock with the given topic→prompt mappings.
    pub fn new(prompts: HashMap<String, String>) -> Self {
        Self {
            prompts,
            default_prompt: "placeholder question".to_string(),
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Create a mock that uses the same prompt for every slot.
    pub fn with_fixed_prompt(prompt: &str) -> Self {
        Self {
            prompts: HashMap::new(),
            default_prompt: prompt.to_string(),
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Get the number of calls made to this backend.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the last request made to this backend.
    pub fn last_request(&self) -> Option<SynthesisRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionSynthesizer for MockSynthesizer {
    fn name(&self) -> &str {
        "mock"
    }

    async fn synthesize(
        &self,
        request: &SynthesisRequest,
    ) -> Result<Vec<QuestionDraft>, ExamError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_request.lock().unwrap() = Some(request.clone());

        Ok(request
            .slots
            .iter()
            .map(|slot| {
                let prompt = self
                    .prompts
                    .get(&slot.topic)
                    .cloned()
                    .unwrap_or_else(|| self.default_prompt.clone());
                match request.exam_type {
                    ExamType::Objective => QuestionDraft {
                        prompt,
                        options: vec![
                            "A".to_string(),
                            "B".to_string(),
                            "C".to_string(),
                            "D".to_string(),
                        ],
                        correct_option: Some(0),
                    },
                    ExamType::ShortAnswer | ExamType::Essay => QuestionDraft {
                        prompt,
                        options: vec![],
                        correct_option: None,
                    },
                }
            })
            .collect())
    }
}
