//! Single-profile repository with JSON persistence.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use studyforge_core::error::ExamError;
use studyforge_core::model::{CourseMaterial, Exam, ExamResult, UserProfile};

/// Repository for one user profile, backed by a JSON file.
///
/// Every mutator persists before returning, so the file is never behind the
/// in-memory state. Domain failures surface as [`ExamError`] values inside
/// `anyhow::Error` and can be downcast by callers.
pub struct ProfileStore {
    path: PathBuf,
    profile: UserProfile,
}

impl ProfileStore {
    /// Create a store for a new profile, writing the file immediately.
    pub fn create(path: &Path, profile: UserProfile) -> Result<Self> {
        let store = Self {
            path: path.to_path_buf(),
            profile,
        };
        store.save()?;
        Ok(store)
    }

    /// Load an existing profile from a JSON file.
    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read profile from {}", path.display()))?;
        let profile: UserProfile =
            serde_json::from_str(&content).context("failed to parse profile JSON")?;
        Ok(Self {
            path: path.to_path_buf(),
            profile,
        })
    }

    /// Open the profile at `path`, creating a fresh one if the file does
    /// not exist yet.
    pub fn open_or_create(path: &Path, name: &str, email: &str) -> Result<Self> {
        if path.exists() {
            Self::open(path)
        } else {
            tracing::info!(path = %path.display(), "creating new profile store");
            Self::create(path, UserProfile::new(name, email))
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn materials(&self) -> &[CourseMaterial] {
        &self.profile.materials
    }

    pub fn exams(&self) -> &[Exam] {
        &self.profile.exams
    }

    pub fn results(&self) -> &[ExamResult] {
        &self.profile.results
    }

    /// Look up a course material by id.
    pub fn material(&self, id: &str) -> Result<&CourseMaterial> {
        self.profile
            .materials
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| ExamError::NotFound(format!("course material {id}")).into())
    }

    /// Look up an exam by id.
    pub fn exam(&self, id: &str) -> Result<&Exam> {
        self.profile
            .exams
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| ExamError::NotFound(format!("exam {id}")).into())
    }

    /// Look up the result for an exam id.
    pub fn result(&self, exam_id: &str) -> Result<&ExamResult> {
        self.profile
            .results
            .iter()
            .find(|r| r.exam_id == exam_id)
            .ok_or_else(|| ExamError::NotFound(format!("result for exam {exam_id}")).into())
    }

    /// Register an uploaded course material.
    pub fn add_material(&mut self, material: CourseMaterial) -> Result<()> {
        if self.profile.materials.iter().any(|m| m.id == material.id) {
            return Err(ExamError::DuplicateId(material.id).into());
        }
        self.profile.materials.push(material);
        self.save()
    }

    /// Store a newly generated exam.
    pub fn add_exam(&mut self, exam: Exam) -> Result<()> {
        if self.profile.exams.iter().any(|e| e.id == exam.id) {
            return Err(ExamError::DuplicateId(exam.id).into());
        }
        self.profile.exams.push(exam);
        self.save()
    }

    /// Replace a stored exam after a status transition.
    pub fn update_exam(&mut self, exam: Exam) -> Result<()> {
        let slot = self
            .profile
            .exams
            .iter_mut()
            .find(|e| e.id == exam.id)
            .ok_or_else(|| anyhow::Error::from(ExamError::NotFound(format!("exam {}", exam.id))))?;
        *slot = exam;
        self.save()
    }

    /// Store the completed exam and its result in one step.
    ///
    /// A result is created exactly once per exam; a second result for the
    /// same exam id is rejected.
    pub fn record_completion(&mut self, exam: Exam, result: ExamResult) -> Result<()> {
        if self
            .profile
            .results
            .iter()
            .any(|r| r.exam_id == result.exam_id)
        {
            return Err(ExamError::DuplicateId(format!(
                "result for exam {} already exists",
                result.exam_id
            ))
            .into());
        }
        let slot = self
            .profile
            .exams
            .iter_mut()
            .find(|e| e.id == exam.id)
            .ok_or_else(|| anyhow::Error::from(ExamError::NotFound(format!("exam {}", exam.id))))?;
        *slot = exam;
        self.profile.results.push(result);
        self.save()
    }

    fn save(&self) -> Result<()> {
        let json =
            serde_json::to_string_pretty(&self.profile).context("failed to serialize profile")?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, json)
            .with_context(|| format!("failed to write profile to {}", self.path.display()))?;
        Ok(())
    }
}
