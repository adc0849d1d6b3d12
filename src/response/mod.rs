//! Turning a chat-completions response body into printed text.
//!
//! A body is either one JSON document ([`ResponseMode::Complete`]) or a
//! sequence of `data:` frames ending with `[DONE]` ([`ResponseMode::Stream`]).

pub mod complete;
pub mod stream;

use crate::error::Result;
use futures::io::AsyncBufRead;
use std::{io::Write, time::Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    Complete,
    Stream { idle_timeout: Option<Duration> },
}

impl ResponseMode {
    pub fn new(stream: bool, idle_timeout: Option<Duration>) -> Self {
        if stream {
            Self::Stream { idle_timeout }
        } else {
            Self::Complete
        }
    }

    pub fn is_stream(&self) -> bool {
        matches!(self, Self::Stream { .. })
    }

    pub async fn consume<R, W>(&self, body: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        match *self {
            Self::Complete => complete::consume(body, out).await,
            Self::Stream { idle_timeout } => stream::consume(body, out, idle_timeout).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::io::Cursor;

    #[test]
    fn mode_follows_stream_flag() {
        assert_eq!(ResponseMode::new(false, None), ResponseMode::Complete);
        assert!(ResponseMode::new(true, None).is_stream());
    }

    #[tokio::test]
    async fn dispatches_on_mode() {
        let whole = r#"{"choices":[{"message":{"role":"assistant","content":" hi "}}]}"#;
        let mut out = Vec::new();
        ResponseMode::Complete
            .consume(Cursor::new(whole), &mut out)
            .await
            .unwrap();
        assert_eq!(out, b"hi\n");

        let frames = "data: {\"choices\":[{\"delta\":{\"content\":\" hi \"}}]}\n\ndata: [DONE]\n";
        let mut out = Vec::new();
        ResponseMode::new(true, None)
            .consume(Cursor::new(frames), &mut out)
            .await
            .unwrap();
        assert_eq!(out, b" hi \n");
    }
}
