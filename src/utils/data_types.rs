use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "is_zero")]
    pub temperature: f64,
    #[serde(skip_serializing_if = "is_false")]
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// A message or delta as the server sends it. Role is kept as text since
/// servers are free to answer with roles we never send.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Delta {
    pub role: Option<String>,
    pub content: Option<String>,
}

impl Delta {
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ChatChoice {
    pub index: Option<u32>,
    pub finish_reason: Option<String>,
    pub message: Option<Delta>,
    pub delta: Option<Delta>,
}

/// Lists sent as `null` decode the same as missing ones.
fn null_as_empty<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(d).map(Option::unwrap_or_default)
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ChatResponse {
    pub id: Option<String>,
    pub object: Option<String>,
    pub created: Option<i64>,
    pub model: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub choices: Vec<ChatChoice>,
}

impl ChatResponse {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }

    pub fn first_choice(&self) -> Option<&ChatChoice> {
        self.choices.first()
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ModelEntry {
    pub id: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ModelsResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<ModelEntry>,
}
