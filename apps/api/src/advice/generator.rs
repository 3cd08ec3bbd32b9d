//! Advice generation — builds the coaching prompt from a profile, makes the
//! single schema-constrained LLM call, and parses the result.
//!
//! Flow: validate attachment → build prompt → call LLM → CareerAdvice.
//! One request, one response. No retries, no caching, no streaming.

use tracing::info;

use crate::advice::prompts::{ADVICE_PROMPT_TEMPLATE, DEFAULT_LOCATION};
use crate::advice::schema::advice_response_schema;
use crate::errors::AppError;
use crate::llm_client::{InlineData, LlmClient, LlmError};
use crate::models::advice::CareerAdvice;
use crate::models::profile::UserProfile;

/// Runs the advice contract end to end.
///
/// `llm` is `None` when no API credential was configured; that case fails
/// with `Configuration` before any network attempt is made.
pub async fn generate_advice(
    llm: Option<&LlmClient>,
    profile: UserProfile,
) -> Result<CareerAdvice, AppError> {
    let llm = llm.ok_or(AppError::Configuration)?;

    if let Some(file) = &profile.resume_file {
        file.validate()?;
    }

    let prompt = build_advice_prompt(&profile);
    let attachment = profile.resume_file.as_ref().map(|file| InlineData {
        mime_type: file.mime_type.clone(),
        data: file.data.clone(),
    });

    info!(
        "Generating career advice for profile (experience: {}, attachment: {})",
        profile.experience_level.as_str(),
        attachment.is_some()
    );

    let advice: CareerAdvice = llm
        .call_json(&prompt, attachment, advice_response_schema())
        .await
        .map_err(map_llm_error)?;

    info!(
        "Advice generated: {} career paths, {} resume tips",
        advice.career_paths.len(),
        advice.resume_feedback.len()
    );

    Ok(advice)
}

/// Keeps service failures and unparseable answers on separate error codes.
fn map_llm_error(e: LlmError) -> AppError {
    if e.is_generation_failure() {
        AppError::Generation(e.to_string())
    } else {
        AppError::Parse(e.to_string())
    }
}

/// Fills the prompt template with every profile field.
fn build_advice_prompt(profile: &UserProfile) -> String {
    let location = profile
        .location
        .as_deref()
        .filter(|l| !l.trim().is_empty())
        .unwrap_or(DEFAULT_LOCATION);

    ADVICE_PROMPT_TEMPLATE
        .replace("{name}", &profile.name)
        .replace("{current_role}", &profile.current_role)
        .replace("{experience_level}", profile.experience_level.as_str())
        .replace("{location}", location)
        .replace("{skills}", &profile.skills)
        .replace("{interests}", &profile.interests)
        .replace("{career_goals}", &profile.career_goals)
        .replace("{resume_text}", &profile.resume_text)
}
