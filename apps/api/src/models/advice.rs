//! Career advice — the structured output of the generation call.
//!
//! Field names are camelCase on the wire because they are also the property
//! names in the response schema sent to Gemini; the model's output parses
//! straight into these types. `career_paths` arrives sorted by descending fit
//! and is displayed as rank 1..N without re-sorting.

use serde::{Deserialize, Serialize};

/// One phase of a 3-6 month learning roadmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPhase {
    pub phase_name: String,
    pub duration: String,
    pub topics: Vec<String>,
}

/// A portfolio project suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecommendation {
    /// Beginner, Intermediate, or Advanced.
    pub level: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub role_title: String,
    /// 0-100 fit score assigned by the model.
    pub match_percentage: f64,
    pub match_reason: String,
    /// Free-form range, e.g. "$45,000 - $60,000" or "₹4 LPA - ₹8 LPA".
    pub salary_range: String,
    pub future_scope: String,
    #[serde(default)]
    pub must_have_skills: Vec<String>,
    #[serde(default)]
    pub good_to_have_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub roadmap: Vec<RoadmapPhase>,
    #[serde(default)]
    pub projects: Vec<ProjectRecommendation>,
    #[serde(default)]
    pub recommended_courses: Vec<String>,
    #[serde(default)]
    pub search_keywords: Vec<String>,
}

/// The full advice record, produced wholesale by a single generation call.
/// Never partially updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerAdvice {
    pub summary: String,
    pub resume_feedback: Vec<String>,
    pub career_paths: Vec<CareerPath>,
    pub final_action_plan: Vec<String>,
}
