use crate::{
    error::{Error, Result},
    utils::data_types::ChatResponse,
};
use futures::io::{AsyncBufRead, AsyncBufReadExt};
use std::{io::Write, time::Duration};

const DATA_PREFIX: &str = "data:";
const DONE_SENTINEL: &str = "[DONE]";

/// What a single body line means to the reader loop.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    /// Blank keep-alives, comments and any other event fields.
    Ignored,
    Done,
    Payload(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    let Some(rest) = line.trim().strip_prefix(DATA_PREFIX) else {
        return Line::Ignored;
    };
    match rest.trim() {
        DONE_SENTINEL => Line::Done,
        payload => Line::Payload(payload),
    }
}

#[derive(Debug, Default)]
struct StreamStats {
    frames: usize,
    skipped: usize,
    sentinel: bool,
}

/// Prints each frame's delta as soon as it arrives, verbatim, and a single
/// newline once the stream ends with `[DONE]` or end of input.
///
/// Frames that fail to decode are skipped. Only a failed read aborts, and
/// with `idle_timeout` set, so does waiting longer than that for a line.
pub async fn consume<R, W>(mut body: R, out: &mut W, idle_timeout: Option<Duration>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut stats = StreamStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = body.read_until(b'\n', &mut buf);
        let n = match idle_timeout {
            Some(limit) => tokio::time::timeout(limit, read)
                .await
                .map_err(|_| Error::Timeout(limit))?,
            None => read.await,
        }
        .map_err(Error::BodyRead)?;
        if n == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let payload = match classify(&line) {
            Line::Ignored => continue,
            Line::Done => {
                stats.sentinel = true;
                break;
            }
            Line::Payload(payload) => payload,
        };
        stats.frames += 1;

        let chunk: ChatResponse = match serde_json::from_str(payload) {
            Ok(chunk) => chunk,
            Err(err) => {
                stats.skipped += 1;
                tracing::debug!("[Stream] skipping malformed frame: {}", err);
                continue;
            }
        };

        let Some(choice) = chunk.first_choice() else {
            continue;
        };
        if let Some(delta) = &choice.delta {
            out.write_all(delta.text().as_bytes())?;
            out.flush()?;
        }
        if let Some(reason) = &choice.finish_reason {
            tracing::debug!("[Stream] finish_reason={}", reason);
        }
    }

    writeln!(out)?;
    out.flush()?;
    tracing::debug!(
        "[Stream] ended: {} frames, {} skipped, sentinel={}",
        stats.frames,
        stats.skipped,
        stats.sentinel
    );
    Ok(())
}
