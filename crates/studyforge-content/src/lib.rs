//! studyforge-content — Question synthesis backends.
//!
//! Implementations of the `QuestionSynthesizer` trait from
//! `studyforge-core`: a deterministic template backend used as the
//! production placeholder, and a mock backend for tests.

pub mod mock;
pub mod template;

pub use mock::MockSynthesizer;
pub use template::TemplateSynthesizer;
