// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::transport::{ChunkStream, RawResponse, ResponseBody, Transport};
use crate::wire::WireRequest;
use bytes::Bytes;
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use gax::options::RequestOptions;

/// The default [Transport], based on `reqwest`.
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    endpoint: String,
    user_agent_prefix: Option<String>,
    api_client_header: Option<String>,
}

impl ReqwestClient {
    pub async fn new(
        config: crate::options::ClientConfig,
        default_endpoint: &str,
    ) -> gax::client_builder::Result<Self> {
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string());
        Ok(Self {
            inner,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            user_agent_prefix: config.user_agent,
            api_client_header: None,
        })
    }

    /// Sets the default `User-Agent`, typically the value formatted by
    /// [ApiClientHeader][crate::api_header::ApiClientHeader].
    pub fn with_api_client_header<V: Into<String>>(mut self, v: V) -> Self {
        self.api_client_header = Some(v.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn user_agent(&self, options: &RequestOptions) -> Option<String> {
        let agent = options
            .user_agent()
            .as_ref()
            .or(self.api_client_header.as_ref());
        match (self.user_agent_prefix.as_ref(), agent) {
            (Some(prefix), Some(agent)) => Some(format!("{prefix} {agent}")),
            (Some(prefix), None) => Some(prefix.clone()),
            (None, agent) => agent.cloned(),
        }
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

impl Transport for ReqwestClient {
    async fn execute(&self, request: WireRequest, options: &RequestOptions) -> Result<RawResponse> {
        let leave_connection_open = request.leave_connection_open();
        let (parts, body) = request.into_http(&self.endpoint)?.into_parts();
        let mut builder = self
            .inner
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .body(body);
        if let Some(agent) = self.user_agent(options) {
            builder = builder.header(http::header::USER_AGENT, agent);
        }
        if let Some(timeout) = options.attempt_timeout() {
            builder = builder.timeout(*timeout);
        }
        let response = builder.send().await.map_err(Self::map_send_error)?;
        to_raw_response(response, leave_connection_open).await
    }
}

/// Converts a `reqwest` response, reading the full body unless the
/// connection must be left open.
pub(crate) async fn to_raw_response(
    response: reqwest::Response,
    leave_connection_open: bool,
) -> Result<RawResponse> {
    let status = response.status().as_u16();
    let headers = response.headers().clone();
    if leave_connection_open {
        let body = ResponseBody::Stream(Box::new(ReqwestStream(response)));
        return Ok(RawResponse::new(status, headers, body));
    }
    let content = response.bytes().await.map_err(Error::io)?;
    let body = if content.is_empty() {
        ResponseBody::Empty
    } else {
        ResponseBody::Full(content)
    };
    Ok(RawResponse::new(status, headers, body))
}

#[derive(Debug)]
struct ReqwestStream(reqwest::Response);

#[async_trait::async_trait]
impl ChunkStream for ReqwestStream {
    async fn next_chunk(&mut self) -> Result<Option<Bytes>> {
        self.0.chunk().await.map_err(Error::io)
    }
}
