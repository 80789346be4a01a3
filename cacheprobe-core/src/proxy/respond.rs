use crate::ctx::RequestId;
use crate::dispatch::ResponseDescriptor;
use pingora::prelude::Session;
use pingora_http::ResponseHeader;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Bodies are written in slices of this size; a full-size image is ~100MB.
const CHUNK_SIZE: usize = 1024 * 1024;

/// Write a dispatcher response to the downstream session.
///
/// HEAD responses keep all headers, `Content-Length` included, but no body.
pub(crate) async fn write_response(
    session: &mut Session,
    request_id: &RequestId,
    response: ResponseDescriptor,
    is_head: bool,
) -> pingora::Result<()> {
    let mut resp = ResponseHeader::build(response.status, None)?;

    for (name, value) in response.headers.iter() {
        resp.insert_header(name, value)?;
    }
    resp.insert_header(REQUEST_ID_HEADER, request_id.0.as_str())?;

    let body = response.body;
    if is_head || body.is_empty() {
        session.write_response_header(Box::new(resp), true).await?;
        return Ok(());
    }

    // Write headers (not end-of-stream yet)
    session.write_response_header(Box::new(resp), false).await?;

    let mut offset = 0;
    while offset < body.len() {
        let end = (offset + CHUNK_SIZE).min(body.len());
        session
            .write_response_body(Some(body.slice(offset..end)), false)
            .await?;
        offset = end;
    }

    // End-of-stream.
    session.write_response_body(None, true).await?;

    Ok(())
}
