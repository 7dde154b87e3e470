//! Core data model types for studyforge.
//!
//! These are the fundamental types the entire studyforge system uses to
//! represent course materials, exam configuration, questions, and results.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ExamError;

/// The kind of questions an exam contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExamType {
    Objective,
    ShortAnswer,
    Essay,
}

impl ExamType {
    /// Base exam duration in minutes, before the time-intensity multiplier.
    pub fn base_duration_minutes(self) -> f64 {
        match self {
            ExamType::Objective => 30.0,
            ExamType::ShortAnswer => 45.0,
            ExamType::Essay => 60.0,
        }
    }

    /// Base question count, before the difficulty multiplier.
    pub fn base_question_count(self) -> f64 {
        match self {
            ExamType::Objective => 20.0,
            ExamType::ShortAnswer => 10.0,
            ExamType::Essay => 5.0,
        }
    }

    /// Point value of a single question of this type.
    pub fn points_per_question(self) -> u32 {
        match self {
            ExamType::Objective => 1,
            ExamType::ShortAnswer => 2,
            ExamType::Essay => 5,
        }
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExamType::Objective => write!(f, "objective"),
            ExamType::ShortAnswer => write!(f, "short-answer"),
            ExamType::Essay => write!(f, "essay"),
        }
    }
}

impl FromStr for ExamType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "objective" | "multiple-choice" => Ok(ExamType::Objective),
            "short-answer" | "short" => Ok(ExamType::ShortAnswer),
            "essay" => Ok(ExamType::Essay),
            other => Err(format!("unknown exam type: {other}")),
        }
    }
}

/// How hard the generated questions should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Multiplier applied to the base question count.
    pub fn question_multiplier(self) -> f64 {
        match self {
            Difficulty::Beginner => 0.8,
            Difficulty::Intermediate => 1.0,
            Difficulty::Advanced => 1.2,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "beginner"),
            Difficulty::Intermediate => write!(f, "intermediate"),
            Difficulty::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// How much time pressure the exam session applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeIntensity {
    Relaxed,
    Moderate,
    Challenging,
}

impl TimeIntensity {
    /// Multiplier applied to the base duration.
    pub fn duration_multiplier(self) -> f64 {
        match self {
            TimeIntensity::Relaxed => 1.5,
            TimeIntensity::Moderate => 1.0,
            TimeIntensity::Challenging => 0.75,
        }
    }
}

impl fmt::Display for TimeIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeIntensity::Relaxed => write!(f, "relaxed"),
            TimeIntensity::Moderate => write!(f, "moderate"),
            TimeIntensity::Challenging => write!(f, "challenging"),
        }
    }
}

impl FromStr for TimeIntensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relaxed" => Ok(TimeIntensity::Relaxed),
            "moderate" => Ok(TimeIntensity::Moderate),
            "challenging" => Ok(TimeIntensity::Challenging),
            other => Err(format!("unknown time intensity: {other}")),
        }
    }
}

/// Content type of an uploaded course material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Pdf,
    Doc,
    Image,
    Text,
}

impl MaterialKind {
    /// Guess the kind from a file name's extension; anything unknown is text.
    pub fn from_file_name(name: &str) -> Self {
        match name.rsplit('.').next().map(str::to_lowercase).as_deref() {
            Some("pdf") => MaterialKind::Pdf,
            Some("doc") | Some("docx") => MaterialKind::Doc,
            Some("jpg") | Some("jpeg") | Some("png") => MaterialKind::Image,
            _ => MaterialKind::Text,
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialKind::Pdf => write!(f, "pdf"),
            MaterialKind::Doc => write!(f, "doc"),
            MaterialKind::Image => write!(f, "image"),
            MaterialKind::Text => write!(f, "text"),
        }
    }
}

impl FromStr for MaterialKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(MaterialKind::Pdf),
            "doc" | "docx" => Ok(MaterialKind::Doc),
            "image" => Ok(MaterialKind::Image),
            "text" => Ok(MaterialKind::Text),
            other => Err(format!("unknown material kind: {other}")),
        }
    }
}

/// An uploaded course material and the topics extracted from it.
///
/// Immutable once created; the topic list is populated at creation time by
/// the extraction collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseMaterial {
    /// Unique identifier within the owning profile.
    pub id: String,
    /// Display name (file name or user-entered title).
    pub name: String,
    /// Content type tag.
    pub kind: MaterialKind,
    /// Raw content, if the material was entered as text.
    #[serde(default)]
    pub content: Option<String>,
    /// When the material was uploaded.
    pub uploaded_at: DateTime<Utc>,
    /// Ordered topic labels associated with this material.
    #[serde(default)]
    pub topics: Vec<String>,
}

/// Frozen exam configuration.
///
/// `duration_minutes` and `question_count` are derived from the three
/// selections at generation time (see `generator::derive_config`) and never
/// change for the exam's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamConfig {
    pub exam_type: ExamType,
    pub difficulty: Difficulty,
    pub time_intensity: TimeIntensity,
    /// Derived session duration in minutes.
    pub duration_minutes: u32,
    /// Derived number of questions.
    pub question_count: u32,
}

/// A single exam question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the exam.
    pub id: String,
    /// Question type, inherited from the exam.
    pub exam_type: ExamType,
    /// Prompt text shown to the user.
    pub prompt: String,
    /// Answer options; exactly 4 for objective questions, empty otherwise.
    #[serde(default)]
    pub options: Vec<String>,
    /// Index into `options` marking the correct answer, objective only.
    #[serde(default)]
    pub correct_option: Option<usize>,
    /// Point value.
    pub points: u32,
    /// Topic label copied from the source material, if any.
    #[serde(default)]
    pub topic: Option<String>,
}

/// Exam lifecycle status. Transitions are monotonic:
/// pending → in-progress → completed, with no skipping and no reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExamStatus {
    Pending,
    InProgress,
    Completed,
}

impl fmt::Display for ExamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExamStatus::Pending => write!(f, "pending"),
            ExamStatus::InProgress => write!(f, "in-progress"),
            ExamStatus::Completed => write!(f, "completed"),
        }
    }
}

/// A generated exam with its fixed question list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    /// Unique identifier within the owning profile.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Back-reference to the originating course material.
    #[serde(default)]
    pub material_id: Option<String>,
    /// Frozen configuration.
    pub config: ExamConfig,
    /// Ordered question list, fixed at creation.
    pub questions: Vec<Question>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    pub status: ExamStatus,
}

impl Exam {
    /// Transition pending → in-progress, recording the start timestamp.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<(), ExamError> {
        if self.status != ExamStatus::Pending {
            return Err(ExamError::invalid_state(ExamStatus::Pending, self.status));
        }
        self.status = ExamStatus::InProgress;
        self.started_at = Some(now);
        Ok(())
    }

    /// Transition in-progress → completed, recording the completion timestamp.
    pub fn complete(&mut self, now: DateTime<Utc>) -> Result<(), ExamError> {
        if self.status != ExamStatus::InProgress {
            return Err(ExamError::invalid_state(
                ExamStatus::InProgress,
                self.status,
            ));
        }
        self.status = ExamStatus::Completed;
        self.completed_at = Some(now);
        Ok(())
    }

    /// Maximum score attainable on this exam.
    pub fn total_points(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }
}

/// A submitted answer to a single question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    /// Selected option index, for objective questions.
    Choice(usize),
    /// Free text, for short-answer and essay questions.
    Text(String),
}

/// Per-topic correctness tally as reported to the user.
///
/// `correct` is the fractional tally rounded to the nearest integer; the
/// accuracy computation uses the unrounded score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicScore {
    pub topic: String,
    pub correct: u32,
    pub total: u32,
}

/// The scored outcome of one completed exam. Created exactly once per exam,
/// immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamResult {
    /// Back-reference to the exam.
    pub exam_id: String,
    /// Awarded points; fractional because of partial credit.
    pub score: f64,
    /// Maximum attainable points.
    pub total_points: u32,
    /// Rounded percentage 0–100.
    pub accuracy: u32,
    /// Per-topic performance in first-appearance order.
    pub topic_performance: Vec<TopicScore>,
    /// Generated feedback message.
    pub feedback: String,
    /// Topics whose correctness ratio fell below the weak-area threshold.
    pub weak_areas: Vec<String>,
    pub completed_at: DateTime<Utc>,
}

/// A user profile owning its materials, exams, and results by value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub materials: Vec<CourseMaterial>,
    #[serde(default)]
    pub exams: Vec<Exam>,
    #[serde(default)]
    pub results: Vec<ExamResult>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            materials: Vec::new(),
            exams: Vec::new(),
            results: Vec::new(),
        }
    }
}
