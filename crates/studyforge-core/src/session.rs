//! Exam session: answer accumulation, lifecycle transitions, and the
//! countdown that auto-submits on expiry.
//!
//! The session owns the exam while it is being taken. `submit` consumes the
//! session, so scoring can happen at most once per session regardless of
//! whether the trigger was the user or the timer.

use std::collections::HashMap;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::oneshot;

use crate::error::ExamError;
use crate::model::{Answer, Exam, ExamResult};
use crate::scorer;

/// What ended the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTrigger {
    /// The configured duration elapsed; the caller must auto-submit.
    Expired,
    /// The countdown was cancelled by a manual submission.
    Cancelled,
}

/// Cancellation handle for a running [`Countdown`].
///
/// Dropping the handle without calling [`cancel`](Self::cancel) also stops
/// the countdown; either way a late tick can never fire after scoring.
pub struct CountdownHandle {
    cancel: Option<oneshot::Sender<()>>,
}

impl CountdownHandle {
    /// Stop the countdown. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
    }
}

/// A cancellable deadline for one exam session.
pub struct Countdown {
    deadline: tokio::time::Instant,
    cancelled: oneshot::Receiver<()>,
}

impl Countdown {
    /// Start a countdown for the given duration.
    pub fn start(duration: Duration) -> (CountdownHandle, Countdown) {
        let (tx, rx) = oneshot::channel();
        (
            CountdownHandle { cancel: Some(tx) },
            Countdown {
                deadline: tokio::time::Instant::now() + duration,
                cancelled: rx,
            },
        )
    }

    /// Wait until the deadline passes or the handle cancels, whichever
    /// comes first.
    pub async fn run(self) -> SubmitTrigger {
        tokio::select! {
            _ = tokio::time::sleep_until(self.deadline) => {
                tracing::debug!("exam countdown expired");
                SubmitTrigger::Expired
            }
            _ = self.cancelled => SubmitTrigger::Cancelled,
        }
    }
}

/// An in-progress exam with its accumulating answer sheet.
pub struct ExamSession {
    exam: Exam,
    answers: HashMap<String, Answer>,
}

impl ExamSession {
    /// Open a pending exam for answering, transitioning it to in-progress
    /// and stamping `started_at`.
    pub fn begin(mut exam: Exam) -> Result<Self, ExamError> {
        exam.start(Utc::now())?;
        tracing::info!(exam_id = %exam.id, "exam session started");
        Ok(Self {
            exam,
            answers: HashMap::new(),
        })
    }

    pub fn exam(&self) -> &Exam {
        &self.exam
    }

    pub fn answers(&self) -> &HashMap<String, Answer> {
        &self.answers
    }

    /// Configured session length.
    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.exam.config.duration_minutes) * 60)
    }

    /// Record an answer. Re-answering before submission overwrites the
    /// previous entry; one answer per question id.
    pub fn answer(&mut self, question_id: &str, answer: Answer) -> Result<(), ExamError> {
        if !self.exam.questions.iter().any(|q| q.id == question_id) {
            return Err(ExamError::NotFound(format!(
                "question {question_id} is not part of exam {}",
                self.exam.id
            )));
        }
        self.answers.insert(question_id.to_string(), answer);
        Ok(())
    }

    /// Score the exam and transition it to completed.
    ///
    /// Consumes the session, so both the manual and the timer-driven path
    /// go through this exactly once.
    pub fn submit(mut self) -> Result<(Exam, ExamResult), ExamError> {
        let result = scorer::score(&self.exam, &self.answers)?;
        self.exam.complete(result.completed_at)?;
        tracing::info!(
            exam_id = %self.exam.id,
            accuracy = result.accuracy,
            "exam session submitted"
        );
        Ok((self.exam, result))
    }
}
