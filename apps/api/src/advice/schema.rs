//! The response schema sent with every advice call.
//!
//! Mirrors `models::advice` exactly, property for property, so the constrained
//! model output deserializes straight into `CareerAdvice`. The salaryRange
//! description repeats the low-band instruction on purpose: schema
//! descriptions are the second place the model sees the pricing policy.

use serde_json::{json, Value};

/// Gemini response schema for `CareerAdvice`.
pub fn advice_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "A professional summary of the user's profile, strengths, and potential.",
            },
            "resumeFeedback": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "3-5 critical, actionable tips to improve the user's resume (e.g., formatting, missing keywords, lack of metrics).",
            },
            "careerPaths": {
                "type": "ARRAY",
                "description": "Top 3 recommended career paths.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "roleTitle": { "type": "STRING" },
                        "matchPercentage": { "type": "NUMBER", "description": "A number between 0 and 100 representing fit." },
                        "matchReason": { "type": "STRING", "description": "Why this role fits the user's profile." },
                        "salaryRange": { "type": "STRING", "description": "Estimated annual salary range. MUST be low and realistic for freshers (e.g. $5k-$12k in Asia, $50k-$70k in US)." },
                        "futureScope": { "type": "STRING", "description": "Market demand and future outlook." },
                        "mustHaveSkills": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "goodToHaveSkills": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "missingSkills": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "Critical skills the user currently lacks." },
                        "roadmap": {
                            "type": "ARRAY",
                            "description": "A 3-6 month learning roadmap.",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "phaseName": { "type": "STRING", "description": "e.g., Month 1-2: Foundations" },
                                    "duration": { "type": "STRING" },
                                    "topics": { "type": "ARRAY", "items": { "type": "STRING" } },
                                },
                            },
                        },
                        "projects": {
                            "type": "ARRAY",
                            "description": "Suggested projects to build portfolio.",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "level": { "type": "STRING", "description": "Beginner, Intermediate, or Advanced" },
                                    "title": { "type": "STRING" },
                                    "description": { "type": "STRING" },
                                    "technologies": { "type": "ARRAY", "items": { "type": "STRING" } },
                                },
                            },
                        },
                        "recommendedCourses": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "Specific course titles or platforms." },
                        "searchKeywords": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "Keywords for LinkedIn/Job boards." },
                    },
                },
            },
            "finalActionPlan": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A concrete, step-by-step action plan to get started immediately.",
            },
        },
        "required": ["summary", "resumeFeedback", "careerPaths", "finalActionPlan"],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_requires_all_four_top_level_fields() {
        let schema = advice_response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            required,
            vec!["summary", "resumeFeedback", "careerPaths", "finalActionPlan"]
        );
    }

    #[test]
    fn test_schema_career_path_properties_match_model() {
        let schema = advice_response_schema();
        let props = &schema["properties"]["careerPaths"]["items"]["properties"];
        for field in [
            "roleTitle",
            "matchPercentage",
            "matchReason",
            "salaryRange",
            "futureScope",
            "mustHaveSkills",
            "goodToHaveSkills",
            "missingSkills",
            "roadmap",
            "projects",
            "recommendedCourses",
            "searchKeywords",
        ] {
            assert!(
                !props[field].is_null(),
                "schema is missing careerPaths field {field}"
            );
        }
    }

    #[test]
    fn test_schema_salary_description_keeps_low_band_instruction() {
        let schema = advice_response_schema();
        let desc = schema["properties"]["careerPaths"]["items"]["properties"]["salaryRange"]
            ["description"]
            .as_str()
            .unwrap();
        assert!(desc.contains("low and realistic"));
    }
}
