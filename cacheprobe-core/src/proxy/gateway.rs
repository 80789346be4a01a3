use crate::ctx::RequestId;
use crate::dispatch::{DispatchError, Dispatcher, RequestDescriptor, ResponseDescriptor};
use crate::proxy::respond::write_response;
use async_trait::async_trait;
use chrono::Utc;
use pingora::prelude::{HttpPeer, ProxyHttp, Session};
use pingora::{Custom, Error};
use std::sync::Arc;

/// Terminal Pingora service: every request is answered locally by the
/// dispatcher and nothing is ever proxied upstream.
pub struct CacheTestGateway {
    dispatcher: Arc<Dispatcher>,
}

impl CacheTestGateway {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl ProxyHttp for CacheTestGateway {
    type CTX = RequestId;

    fn new_ctx(&self) -> Self::CTX {
        RequestId::default()
    }

    async fn upstream_peer(
        &self,
        _session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> pingora::Result<Box<HttpPeer>> {
        // request_filter always responds, so this is never reached.
        Err(Error::new(Custom(
            "CacheTestGateway attempted to proxy upstream (bug)",
        )))
    }

    async fn request_filter(
        &self,
        session: &mut Session,
        ctx: &mut Self::CTX,
    ) -> pingora::Result<bool> {
        let req_header = session.req_header();
        let request = RequestDescriptor::from_uri(req_header.method.clone(), &req_header.uri)
            .with_request_id(ctx.clone());
        let is_head = request.method() == http::Method::HEAD;

        // Generation is CPU bound; keep it off the I/O workers.
        let dispatcher = self.dispatcher.clone();
        let response = match tokio::task::spawn_blocking(move || {
            dispatcher.dispatch(&request, Utc::now())
        })
        .await
        {
            Ok(response) => response,
            Err(join_err) => {
                tracing::error!(request_id = %ctx, error = %join_err, "dispatch task failed");
                ResponseDescriptor::from_error(&DispatchError::Internal)
            }
        };

        write_response(session, ctx, response, is_head).await?;

        Ok(true)
    }
}
