//! User profile — the structured input describing a user's career background
//! and goals. Immutable once submitted; consumed exactly once per advice call.

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Maximum decoded size of an attached resume file (4MB, the Gemini inline limit).
pub const MAX_RESUME_FILE_BYTES: usize = 4 * 1024 * 1024;

/// Self-declared seniority. Serialized to the display strings the advice
/// prompt embeds, so the wire values double as prompt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "Student")]
    Student,
    #[serde(rename = "Entry Level (0-2 years)")]
    EntryLevel,
    #[serde(rename = "Mid Level (3-5 years)")]
    MidLevel,
    #[serde(rename = "Senior (5+ years)")]
    Senior,
    #[serde(rename = "Executive")]
    Executive,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Student => "Student",
            ExperienceLevel::EntryLevel => "Entry Level (0-2 years)",
            ExperienceLevel::MidLevel => "Mid Level (3-5 years)",
            ExperienceLevel::Senior => "Senior (5+ years)",
            ExperienceLevel::Executive => "Executive",
        }
    }

    /// True for the tiers the prompt forbids Senior/Lead/Architect titles for.
    pub fn is_junior(&self) -> bool {
        matches!(self, ExperienceLevel::Student | ExperienceLevel::EntryLevel)
    }
}

/// An attached resume file: declared MIME type plus base64-encoded bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeFile {
    pub name: String,
    pub mime_type: String,
    /// Base64-encoded file bytes, forwarded verbatim as an inline part.
    pub data: String,
}

impl ResumeFile {
    /// Checks the payload decodes as base64 and stays within the inline limit.
    pub fn validate(&self) -> Result<(), AppError> {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(&self.data)
            .map_err(|e| AppError::Validation(format!("resume file is not valid base64: {e}")))?;

        if bytes.len() > MAX_RESUME_FILE_BYTES {
            return Err(AppError::Validation(format!(
                "resume file is {} bytes; the limit is {} bytes",
                bytes.len(),
                MAX_RESUME_FILE_BYTES
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub current_role: String,
    pub experience_level: ExperienceLevel,
    pub skills: String,
    pub interests: String,
    pub career_goals: String,
    #[serde(default)]
    pub location: Option<String>,
    pub resume_text: String,
    #[serde(default)]
    pub resume_file: Option<ResumeFile>,
}
