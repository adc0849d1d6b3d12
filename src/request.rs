use crate::{
    config::Config,
    utils::data_types::{ChatMessage, ChatRequest, Role},
};

/// Per-request knobs on top of the prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatOptions {
    pub model: String,
    pub temperature: f64,
    pub stream: bool,
    pub system: Option<String>,
    pub max_tokens: Option<u32>,
}

impl ChatOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            stream: config.stream,
            system: None,
            max_tokens: None,
        }
    }
}

/// Builds the payload for a one-off prompt. The prompt is expected to be
/// validated non-empty by the caller.
pub fn build_chat_request(prompt: &str, opts: &ChatOptions) -> ChatRequest {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = opts.system.as_deref().filter(|s| !s.trim().is_empty()) {
        messages.push(ChatMessage::new(Role::System, system));
    }
    messages.push(ChatMessage::new(Role::User, prompt));

    ChatRequest {
        model: opts.model.clone(),
        messages,
        temperature: opts.temperature,
        stream: opts.stream,
        max_tokens: opts.max_tokens,
    }
}
