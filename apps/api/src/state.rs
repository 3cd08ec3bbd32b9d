use crate::contact::ContactRelay;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when GEMINI_API_KEY is absent; the advice endpoint reports a
    /// configuration error instead of attempting a call.
    pub llm: Option<LlmClient>,
    pub contact_relay: ContactRelay,
}
