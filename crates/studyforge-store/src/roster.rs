//! Profile roster: the signup/login stub.
//!
//! No real authentication happens here and no credentials are stored; the
//! roster only maps emails to profiles so the app can pick the active one.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use studyforge_core::error::ExamError;
use studyforge_core::model::UserProfile;

#[derive(Debug, Default, Serialize, Deserialize)]
struct RosterFile {
    profiles: Vec<UserProfile>,
}

/// The set of known profiles, backed by a JSON file.
pub struct Roster {
    path: PathBuf,
    profiles: Vec<UserProfile>,
}

impl Roster {
    /// Load the roster, starting empty if the file does not exist.
    pub fn open_or_default(path: &Path) -> Result<Self> {
        let profiles = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read roster from {}", path.display()))?;
            let file: RosterFile =
                serde_json::from_str(&content).context("failed to parse roster JSON")?;
            file.profiles
        } else {
            Vec::new()
        };
        Ok(Self {
            path: path.to_path_buf(),
            profiles,
        })
    }

    /// Register a new profile. Fails if the email is already taken.
    pub fn signup(&mut self, name: &str, email: &str) -> Result<UserProfile> {
        if self.profiles.iter().any(|p| p.email == email) {
            return Err(ExamError::DuplicateEmail(email.to_string()).into());
        }
        let profile = UserProfile::new(name, email);
        self.profiles.push(profile.clone());
        self.save()?;
        tracing::info!(email, "registered profile");
        Ok(profile)
    }

    /// Find a profile by email.
    pub fn login(&self, email: &str) -> Result<&UserProfile> {
        self.profiles
            .iter()
            .find(|p| p.email == email)
            .ok_or_else(|| ExamError::NotFound(format!("profile for {email}")).into())
    }

    fn save(&self) -> Result<()> {
        let file = RosterFile {
            profiles: self.profiles.clone(),
        };
        let json = serde_json::to_string_pretty(&file).context("failed to serialize roster")?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, json)
            .with_context(|| format!("failed to write roster to {}", self.path.display()))?;
        Ok(())
    }
}
