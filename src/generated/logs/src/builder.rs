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

pub mod logs {
    use crate::Result;
    use gax::options::RequestOptions;
    use std::sync::Arc;

    /// A builder for [Logs][crate::client::Logs].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloudsdk_logs::*;
    /// # use builder::logs::ClientBuilder;
    /// # use client::Logs;
    /// let builder: ClientBuilder = Logs::builder();
    /// let client = builder
    ///     .with_endpoint("https://logs.us-west-2.amazonaws.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {
        use super::super::super::client::Logs;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Logs;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::Logs] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<crate::transport::Logs>,
        request: R,
        options: RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<crate::transport::Logs>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: RequestOptions::default(),
            }
        }
    }

    /// The request builder for [Logs::get_log_events][crate::client::Logs::get_log_events] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use cloudsdk_logs::builder;
    /// use builder::logs::GetLogEvents;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetLogEvents {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetLogEvents(RequestBuilder<crate::model::GetLogEventsRequest>);

    impl GetLogEvents {
        pub(crate) fn new(stub: Arc<crate::transport::Logs>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogEventsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::GetLogEventsResponse> {
            (*self.0.stub)
                .get_log_events(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [log_group_name][crate::model::GetLogEventsRequest::log_group_name].
        pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.log_group_name = Some(v.into());
            self
        }

        /// Sets the value of [log_stream_name][crate::model::GetLogEventsRequest::log_stream_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_stream_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.log_stream_name = Some(v.into());
            self
        }

        /// Sets the value of [start_time][crate::model::GetLogEventsRequest::start_time].
        pub fn set_start_time<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.start_time = Some(v.into());
            self
        }

        /// Sets the value of [end_time][crate::model::GetLogEventsRequest::end_time].
        pub fn set_end_time<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.end_time = Some(v.into());
            self
        }

        /// Sets or clears the value of [next_token][crate::model::GetLogEventsRequest::next_token].
        pub fn set_or_clear_next_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.next_token = v.map(Into::into);
            self
        }

        /// Sets the value of [next_token][crate::model::GetLogEventsRequest::next_token].
        pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.next_token = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::GetLogEventsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [start_from_head][crate::model::GetLogEventsRequest::start_from_head].
        pub fn set_start_from_head<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.start_from_head = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogEvents {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Logs::put_log_events][crate::client::Logs::put_log_events] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use cloudsdk_logs::builder;
    /// use builder::logs::PutLogEvents;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> PutLogEvents {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct PutLogEvents(RequestBuilder<crate::model::PutLogEventsRequest>);

    impl PutLogEvents {
        pub(crate) fn new(stub: Arc<crate::transport::Logs>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PutLogEventsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::PutLogEventsResponse> {
            (*self.0.stub)
                .put_log_events(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [log_group_name][crate::model::PutLogEventsRequest::log_group_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.log_group_name = Some(v.into());
            self
        }

        /// Sets the value of [log_stream_name][crate::model::PutLogEventsRequest::log_stream_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_stream_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.log_stream_name = Some(v.into());
            self
        }

        /// Sets the value of [log_events][crate::model::PutLogEventsRequest::log_events].
        ///
        /// This is a **required** field for requests.
        pub fn set_log_events<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::InputLogEvent>,
        {
            self.0.request.log_events = Some(v.into_iter().map(Into::into).collect());
            self
        }

        /// Sets or clears the value of [sequence_token][crate::model::PutLogEventsRequest::sequence_token].
        pub fn set_or_clear_sequence_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.sequence_token = v.map(Into::into);
            self
        }

        /// Sets the value of [sequence_token][crate::model::PutLogEventsRequest::sequence_token].
        pub fn set_sequence_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.sequence_token = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for PutLogEvents {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }
}
