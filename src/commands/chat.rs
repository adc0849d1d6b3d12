use crate::{
    config::Config,
    error::{Error, Result},
    providers::OpenRouterProvider,
    request::{build_chat_request, ChatOptions},
    response::ResponseMode,
    utils::{body_reader, create_client, ensure_success},
};
use std::io::{Read, Write};

/// Joins prompt words; falls back to the whole of stdin when there are none
/// and stdin is piped. The result is trimmed and may be empty.
pub fn read_prompt<R: Read>(words: &[String], mut stdin: R, stdin_is_terminal: bool) -> Result<String> {
    let prompt = words.join(" ").trim().to_owned();
    if !prompt.is_empty() || stdin_is_terminal {
        return Ok(prompt);
    }

    let mut buf = Vec::new();
    stdin.read_to_end(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).trim().to_owned())
}

/// Sends one prompt and writes the reply to `out`, streamed or whole
/// depending on `opts.stream`.
pub async fn run<W: Write>(
    config: &Config,
    prompt: &str,
    opts: &ChatOptions,
    out: &mut W,
) -> Result<()> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(Error::MissingPrompt);
    }
    let api_key = config.require_api_key()?;

    let provider = OpenRouterProvider::new(config.base_url.clone(), api_key);
    let request = build_chat_request(prompt, opts);
    let mode = ResponseMode::new(request.stream, config.idle_timeout);

    // Streaming bodies are bounded per read instead of in total.
    let client_timeout = (!mode.is_stream()).then_some(config.timeout);
    let client = create_client(
        config.proxy.as_deref(),
        config.proxy_auth.as_deref(),
        client_timeout,
    )?;

    let url = provider.chat_url()?;
    tracing::info!(
        "[POST] {} model={} stream={}",
        url,
        request.model,
        request.stream
    );

    let exchange = async {
        let res = client
            .post(url)
            .headers(provider.headers()?)
            .json(&request)
            .send()
            .await?;
        ensure_success(res).await
    };
    let res = match mode {
        ResponseMode::Stream { .. } => tokio::time::timeout(config.timeout, exchange)
            .await
            .map_err(|_| Error::Timeout(config.timeout))??,
        ResponseMode::Complete => exchange.await?,
    };
    tracing::debug!("[POST] {}", res.status());

    mode.consume(body_reader(res), out).await
}
