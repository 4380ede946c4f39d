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

//! Runs one call: marshall, send, and unmarshall.

use crate::error_dispatch::ErrorDispatcher;
use crate::headers;
use crate::operation::OperationDescriptor;
use crate::options::ClientConfig;
use crate::shape::Marshall;
use crate::transport::{ResponseHandler, Transport};
use crate::wire;
use gax::options::RequestOptions;
use gax::response::{Parts, Response};
use tracing::Instrument;

/// The call orchestration shared by all the generated clients.
#[derive(Clone, Debug)]
pub struct Client<T> {
    transport: T,
    tracing: bool,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T, config: &ClientConfig) -> Self {
        Self {
            transport,
            tracing: crate::options::tracing_enabled(config),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends the request for `operation` and returns its output.
    ///
    /// A missing request fails before anything is sent. Non-2xx responses
    /// are converted to errors by `errors`, successful responses to the
    /// output by `handler`.
    pub async fn call<R, O, H>(
        &self,
        operation: &'static OperationDescriptor,
        errors: &ErrorDispatcher,
        request: Option<&R>,
        handler: H,
        options: RequestOptions,
    ) -> gax::Result<Response<O>>
    where
        R: Marshall + ?Sized,
        H: ResponseHandler<O>,
    {
        // Marshall outside the span, nothing is sent if this fails.
        let mut request = wire::marshall(operation, request)?;
        request.set_leave_connection_open(handler.needs_connection_left_open());
        if !self.tracing {
            return self.send(request, errors, handler, options).await;
        }
        let span = tracing::info_span!(
            "call",
            operation = operation.name(),
            version = operation.version()
        );
        self.send(request, errors, handler, options)
            .instrument(span)
            .await
    }

    async fn send<O, H>(
        &self,
        request: wire::WireRequest,
        errors: &ErrorDispatcher,
        handler: H,
        options: RequestOptions,
    ) -> gax::Result<Response<O>>
    where
        H: ResponseHandler<O>,
    {
        tracing::debug!(
            operation = request.operation(),
            method = %request.method(),
            path = request.path(),
            "sending request"
        );
        let response = self.transport.execute(request, &options).await?;
        if !response.is_success() {
            let (status, headers, body) = response.into_parts();
            let body = match body.collect().await {
                Ok(b) => b,
                Err(e) => {
                    tracing::warn!("cannot read the body of the error response: {e}");
                    bytes::Bytes::new()
                }
            };
            let payload = if body.is_empty() { None } else { Some(&body[..]) };
            return Err(errors.dispatch(status, &headers, payload));
        }
        let response_headers = response.headers().clone();
        let request_id = headers::request_id(&response_headers).map(str::to_string);
        let output = handler.handle(response).await?;
        let mut parts = Parts::new().set_headers(response_headers);
        if let Some(id) = request_id {
            parts = parts.set_request_id(id);
        }
        Ok(Response::from_parts(parts, output))
    }
}
