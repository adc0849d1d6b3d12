use reqwest::{self as r};
use std::time::Duration;

/// Builds a client, optionally routed through a proxy for every scheme.
/// `proxy_auth` is `user:pass`; anything else is ignored.
pub fn create_client(
    proxy_addr: Option<&str>,
    proxy_auth: Option<&str>,
    timeout: Option<Duration>,
) -> r::Result<r::Client> {
    let mut client = r::Client::builder();

    if let Some(proxy_str) = proxy_addr {
        let mut proxy = r::Proxy::all(proxy_str)?;
        if let Some(proxy_auth) = proxy_auth {
            let mut s = proxy_auth.splitn(2, ':');
            if let (Some(u), Some(p)) = (s.next(), s.next()) {
                proxy = proxy.basic_auth(u, p);
            } else {
                tracing::warn!("[Proxy] ignoring malformed proxy auth, expected user:pass");
            }
        }
        tracing::debug!("[Proxy] {}", proxy_str);
        client = client.proxy(proxy);
    }

    if let Some(timeout) = timeout {
        client = client.timeout(timeout);
    }
    client.build()
}
