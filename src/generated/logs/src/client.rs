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

use std::sync::Arc;

/// Implements a client for the log streams API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use cloudsdk_logs::client::Logs;
/// let client = Logs::builder().build().await?;
/// let response = client
///     .get_log_events()
///     .set_log_group_name("my-group")
///     .set_log_stream_name("my-stream")
///     .set_start_from_head(true)
///     .send()
///     .await?;
/// println!("response {:?}", response);
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Log streams hold sequences of log events from the same source. Each log
/// stream belongs to a log group. Use this client to write events to a log
/// stream, and to read them back.
///
/// # Configuration
///
/// To configure `Logs` use the `with_*` methods in the type returned
/// by [builder()][Logs::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://logs.us-east-1.amazonaws.com`). Applications using regional
///   endpoints or running in restricted networks may want to override this
///   default.
///
/// [with_endpoint()]: super::builder::logs::ClientBuilder::with_endpoint
///
/// # Pooling and Cloning
///
/// `Logs` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `Logs` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Logs {
    inner: Arc<crate::transport::Logs>,
}

impl Logs {
    /// Returns a builder for [Logs].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloudsdk_logs::client::Logs;
    /// let client = Logs::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::logs::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::logs::client::Factory)
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = crate::transport::Logs::new(config).await?;
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Lists log events from the specified log stream.
    ///
    /// By default, this operation returns as many log events as can fit in a
    /// response size of 1 MB (up to 10,000 log events). Use the
    /// `next_forward_token` or `next_backward_token` in the response to get
    /// more events.
    pub fn get_log_events(&self) -> super::builder::logs::GetLogEvents {
        super::builder::logs::GetLogEvents::new(self.inner.clone())
    }

    /// Uploads a batch of log events to the specified log stream.
    ///
    /// The events must be in chronological order. A batch cannot span more
    /// than 24 hours.
    pub fn put_log_events(&self) -> super::builder::logs::PutLogEvents {
        super::builder::logs::PutLogEvents::new(self.inner.clone())
    }
}
