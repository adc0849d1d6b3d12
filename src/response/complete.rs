use crate::{
    error::{Error, Result},
    utils::data_types::{ChatResponse, Delta},
};
use futures::io::{AsyncRead, AsyncReadExt};
use serde::Deserialize;
use std::io::Write;

/// Reads the whole body, decodes it as one response and prints the first
/// choice's message, trimmed, followed by a newline.
pub async fn consume<R, W>(mut body: R, out: &mut W) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: Write,
{
    let mut buf = Vec::new();
    body.read_to_end(&mut buf).await.map_err(Error::BodyRead)?;

    let resp = decode(&buf)?;
    tracing::debug!(
        "[Response] id={:?} model={:?} created={:?} choices={}",
        resp.id,
        resp.model,
        resp.created_at(),
        resp.choices.len()
    );

    let choice = resp.first_choice().ok_or(Error::EmptyResult)?;
    if let Some(reason) = &choice.finish_reason {
        tracing::debug!("[Response] finish_reason={}", reason);
    }
    let text = choice.message.as_ref().map(Delta::text).unwrap_or_default();

    writeln!(out, "{}", text.trim())?;
    out.flush()?;
    Ok(())
}

/// Decodes the first JSON value in the body; anything after it is ignored.
fn decode(bytes: &[u8]) -> Result<ChatResponse> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    Ok(ChatResponse::deserialize(&mut de)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::io::Cursor;

    async fn run(body: &str) -> (Result<()>, String) {
        let mut out = Vec::new();
        let res = consume(Cursor::new(body.as_bytes().to_vec()), &mut out).await;
        (res, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn prints_first_choice_trimmed() {
        let body = r#"{
            "id": "gen-1",
            "object": "chat.completion",
            "created": 1700000000,
            "model": "openai/gpt-4o-mini",
            "choices": [
                {"index": 0, "finish_reason": "stop", "message": {"role": "assistant", "content": "\n  Hello there!  \n"}},
                {"index": 1, "finish_reason": "stop", "message": {"role": "assistant", "content": "ignored"}}
            ]
        }"#;
        let (res, out) = run(body).await;
        res.unwrap();
        assert_eq!(out, "Hello there!\n");
    }

    #[tokio::test]
    async fn empty_choices_emit_nothing() {
        let (res, out) = run(r#"{"id":"gen-1","choices":[]}"#).await;
        assert!(matches!(res, Err(Error::EmptyResult)));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn null_choices_is_empty_result() {
        let (res, out) = run(r#"{"id":"gen-1","choices":null}"#).await;
        assert!(matches!(res, Err(Error::EmptyResult)));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn missing_choices_is_empty_result() {
        let (res, _) = run("{}").await;
        assert!(matches!(res, Err(Error::EmptyResult)));
    }

    #[tokio::test]
    async fn invalid_json_is_decode_error() {
        let (res, out) = run("<html>bad gateway</html>").await;
        assert!(matches!(res, Err(Error::Decode(_))));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn empty_body_is_decode_error() {
        let (res, _) = run("").await;
        assert!(matches!(res, Err(Error::Decode(_))));
    }

    #[tokio::test]
    async fn wrong_shape_is_decode_error() {
        let (res, _) = run(r#"{"choices":"nope"}"#).await;
        assert!(matches!(res, Err(Error::Decode(_))));
    }

    #[tokio::test]
    async fn trailing_data_after_document_is_ignored() {
        let body = "{\"choices\":[{\"message\":{\"role\":\"assistant\",\"content\":\"ok\"}}]}\ngarbage";
        let (res, out) = run(body).await;
        res.unwrap();
        assert_eq!(out, "ok\n");
    }

    #[tokio::test]
    async fn null_content_prints_empty_line() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        let (res, out) = run(body).await;
        res.unwrap();
        assert_eq!(out, "\n");
    }
}
