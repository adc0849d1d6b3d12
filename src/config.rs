use crate::{
    cli::GlobalArgs,
    error::{Error, Result},
};
use std::time::Duration;
use url::Url;

/// Resolved settings for one invocation. Passed by reference into every
/// command; nothing here is read from the process environment after parsing.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f64,
    pub stream: bool,
    pub timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub proxy: Option<String>,
    pub proxy_auth: Option<String>,
}

impl Config {
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|source| Error::InvalidBaseUrl {
            url: base_url.to_owned(),
            source,
        })?;

        Ok(Self {
            base_url,
            api_key,
            model: crate::cli::DEFAULT_MODEL.to_owned(),
            temperature: 0.7,
            stream: false,
            timeout: Duration::from_secs(60),
            idle_timeout: Some(Duration::from_secs(60)),
            proxy: None,
            proxy_auth: None,
        })
    }

    pub fn from_args(args: &GlobalArgs) -> Result<Self> {
        let config = Self {
            model: args.model.clone(),
            temperature: args.temperature,
            stream: args.stream,
            timeout: Duration::from_secs(args.timeout),
            idle_timeout: (args.idle_timeout > 0).then(|| Duration::from_secs(args.idle_timeout)),
            proxy: args.proxy.clone(),
            proxy_auth: args.proxy_auth.clone(),
            ..Self::new(&args.base_url, args.api_key.clone())?
        };
        tracing::debug!(
            "Config loaded: base_url={} model={} stream={}",
            config.base_url,
            config.model,
            config.stream
        );
        Ok(config)
    }

    pub fn require_api_key(&self) -> Result<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(Error::MissingApiKey),
        }
    }
}
