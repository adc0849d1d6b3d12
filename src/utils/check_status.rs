use crate::error::{Error, Result};
use reqwest as r;

/// Passes 2xx responses through. Anything else is read for its diagnostic
/// body and turned into [`Error::HttpStatus`].
pub async fn ensure_success(resp: r::Response) -> Result<r::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = match resp.text().await {
        Ok(body) => body.trim().to_owned(),
        Err(err) => {
            tracing::debug!("Error reading error body: {}", err);
            String::new()
        }
    };
    tracing::debug!("[HTTP] {} {}", status, body);
    Err(Error::HttpStatus { status, body })
}
