use crate::{
    config::Config,
    error::Result,
    providers::OpenRouterProvider,
    utils::{create_client, data_types::ModelsResponse, ensure_success},
};
use std::{io::Write, time::Duration};

const MODELS_TIMEOUT: Duration = Duration::from_secs(30);

/// Prints the id of every model the API offers, one per line.
pub async fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let api_key = config.require_api_key()?;
    let provider = OpenRouterProvider::new(config.base_url.clone(), api_key);
    let client = create_client(
        config.proxy.as_deref(),
        config.proxy_auth.as_deref(),
        Some(MODELS_TIMEOUT),
    )?;

    let url = provider.models_url()?;
    tracing::info!("[GET] {}", url);

    let res = client.get(url).headers(provider.headers()?).send().await?;
    let res = ensure_success(res).await?;
    let body = res.bytes().await?;
    let models: ModelsResponse = serde_json::from_slice(&body)?;
    tracing::debug!("[GET] {} models", models.data.len());

    for model in &models.data {
        writeln!(out, "{}", model.id)?;
    }
    out.flush()?;
    Ok(())
}
