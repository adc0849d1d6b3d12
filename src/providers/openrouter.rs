use crate::error::{Error, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Url,
};

pub const APP_REFERER: &str = "https://github.com/adrienbufort/openrouter-cli";
pub const APP_TITLE: &str = "openrouter-cli";

const CHAT_PATH: &str = "chat/completions";
const MODELS_PATH: &str = "models";

/// Endpoints and headers of an OpenRouter-compatible API rooted at a base URL.
#[derive(Clone, Debug)]
pub struct OpenRouterProvider {
    base_url: Url,
    api_key: String,
}

impl OpenRouterProvider {
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            base_url,
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let url = format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path);
        Url::parse(&url).map_err(|source| Error::InvalidBaseUrl { url, source })
    }

    pub fn models_url(&self) -> Result<Url> {
        self.endpoint(MODELS_PATH)
    }

    pub fn chat_url(&self) -> Result<Url> {
        self.endpoint(CHAT_PATH)
    }

    /// Auth plus the identification headers OpenRouter recommends.
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|_| Error::InvalidApiKey)?;
        headers.insert(AUTHORIZATION, value);
        headers.insert("http-referer", HeaderValue::from_static(APP_REFERER));
        headers.insert("x-title", HeaderValue::from_static(APP_TITLE));
        Ok(headers)
    }
}
