use futures::{io::AsyncBufRead, TryStreamExt};
use reqwest as r;

/// Adapts the response body into a buffered async reader so it can be
/// consumed line by line. Chunk errors surface as I/O errors on read.
pub fn body_reader(resp: r::Response) -> impl AsyncBufRead + Unpin {
    let data_stream = futures::stream::try_unfold(resp, |mut resp| async move {
        match resp.chunk().await {
            Ok(Some(chunk)) => Ok(Some((chunk, resp))),
            Ok(None) => Ok(None),
            Err(err) => Err(std::io::Error::other(err)),
        }
    });

    Box::pin(data_stream).into_async_read()
}
