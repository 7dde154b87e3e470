//! studyforge-core — Exam generation, session, and scoring engine.
//!
//! This crate defines the fundamental data model, the question-synthesis
//! trait, and the generation/scoring logic that the rest of studyforge
//! builds on.

pub mod error;
pub mod generator;
pub mod model;
pub mod scorer;
pub mod session;
pub mod traits;

pub use error::ExamError;
