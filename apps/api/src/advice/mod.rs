//! Advice — the profile → career-advice contract against the LLM.
//!
//! One prompt, one schema-constrained call, one typed `CareerAdvice` back.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod schema;
