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

pub mod object_store {
    use crate::Result;
    use gax::options::RequestOptions;
    use std::sync::Arc;

    /// A builder for [ObjectStore][crate::client::ObjectStore].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloudsdk_objectstore::*;
    /// # use builder::object_store::ClientBuilder;
    /// # use client::ObjectStore;
    /// let builder: ClientBuilder = ObjectStore::builder();
    /// let client = builder
    ///     .with_endpoint("https://s3.us-west-2.amazonaws.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {
        use super::super::super::client::ObjectStore;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = ObjectStore;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::ObjectStore] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<crate::transport::ObjectStore>,
        request: R,
        options: RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<crate::transport::ObjectStore>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: RequestOptions::default(),
            }
        }
    }

    /// The request builder for [ObjectStore::list_objects_v2][crate::client::ObjectStore::list_objects_v2] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use cloudsdk_objectstore::builder;
    /// use builder::object_store::ListObjectsV2;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListObjectsV2 {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListObjectsV2(RequestBuilder<crate::model::ListObjectsV2Request>);

    impl ListObjectsV2 {
        pub(crate) fn new(stub: Arc<crate::transport::ObjectStore>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListObjectsV2Request>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListObjectsV2Response> {
            (*self.0.stub)
                .list_objects_v2(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [bucket][crate::model::ListObjectsV2Request::bucket].
        ///
        /// This is a **required** field for requests.
        pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.bucket = Some(v.into());
            self
        }

        /// Sets the value of [prefix][crate::model::ListObjectsV2Request::prefix].
        pub fn set_prefix<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.prefix = Some(v.into());
            self
        }

        /// Sets the value of [delimiter][crate::model::ListObjectsV2Request::delimiter].
        pub fn set_delimiter<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.delimiter = Some(v.into());
            self
        }

        /// Sets the value of [max_keys][crate::model::ListObjectsV2Request::max_keys].
        pub fn set_max_keys<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.max_keys = Some(v.into());
            self
        }

        /// Sets or clears the value of [continuation_token][crate::model::ListObjectsV2Request::continuation_token].
        pub fn set_or_clear_continuation_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.continuation_token = v.map(Into::into);
            self
        }

        /// Sets the value of [continuation_token][crate::model::ListObjectsV2Request::continuation_token].
        pub fn set_continuation_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.continuation_token = Some(v.into());
            self
        }

        /// Sets the value of [start_after][crate::model::ListObjectsV2Request::start_after].
        pub fn set_start_after<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.start_after = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListObjectsV2 {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ObjectStore::get_object][crate::client::ObjectStore::get_object] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use cloudsdk_objectstore::builder;
    /// use builder::object_store::GetObject;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetObject {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetObject(RequestBuilder<crate::model::GetObjectRequest>);

    impl GetObject {
        pub(crate) fn new(stub: Arc<crate::transport::ObjectStore>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetObjectRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::GetObjectResponse> {
            (*self.0.stub)
                .get_object(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [bucket][crate::model::GetObjectRequest::bucket].
        ///
        /// This is a **required** field for requests.
        pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.bucket = Some(v.into());
            self
        }

        /// Sets the value of [key][crate::model::GetObjectRequest::key].
        ///
        /// This is a **required** field for requests.
        pub fn set_key<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.key = Some(v.into());
            self
        }

        /// Sets the value of [range][crate::model::GetObjectRequest::range].
        pub fn set_range<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.range = Some(v.into());
            self
        }

        /// Sets the value of [if_none_match][crate::model::GetObjectRequest::if_none_match].
        pub fn set_if_none_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_none_match = Some(v.into());
            self
        }

        /// Sets the value of [if_modified_since][crate::model::GetObjectRequest::if_modified_since].
        pub fn set_if_modified_since<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
            self.0.request.if_modified_since = Some(v.into());
            self
        }

        /// Sets the value of [version_id][crate::model::GetObjectRequest::version_id].
        pub fn set_version_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.version_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetObject {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ObjectStore::head_object][crate::client::ObjectStore::head_object] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use cloudsdk_objectstore::builder;
    /// use builder::object_store::HeadObject;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> HeadObject {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct HeadObject(RequestBuilder<crate::model::HeadObjectRequest>);

    impl HeadObject {
        pub(crate) fn new(stub: Arc<crate::transport::ObjectStore>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::HeadObjectRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::HeadObjectResponse> {
            (*self.0.stub)
                .head_object(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [bucket][crate::model::HeadObjectRequest::bucket].
        ///
        /// This is a **required** field for requests.
        pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.bucket = Some(v.into());
            self
        }

        /// Sets the value of [key][crate::model::HeadObjectRequest::key].
        ///
        /// This is a **required** field for requests.
        pub fn set_key<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.key = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::HeadObjectRequest::if_match].
        pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sets the value of [version_id][crate::model::HeadObjectRequest::version_id].
        pub fn set_version_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.version_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for HeadObject {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ObjectStore::put_object][crate::client::ObjectStore::put_object] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use cloudsdk_objectstore::builder;
    /// use builder::object_store::PutObject;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> PutObject {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct PutObject(RequestBuilder<crate::model::PutObjectRequest>);

    impl PutObject {
        pub(crate) fn new(stub: Arc<crate::transport::ObjectStore>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PutObjectRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::PutObjectResponse> {
            (*self.0.stub)
                .put_object(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [bucket][crate::model::PutObjectRequest::bucket].
        ///
        /// This is a **required** field for requests.
        pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.bucket = Some(v.into());
            self
        }

        /// Sets the value of [key][crate::model::PutObjectRequest::key].
        ///
        /// This is a **required** field for requests.
        pub fn set_key<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.key = Some(v.into());
            self
        }

        /// Sets the value of [body][crate::model::PutObjectRequest::body].
        pub fn set_body<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
            self.0.request.body = Some(v.into());
            self
        }

        /// Sets the value of [content_type][crate::model::PutObjectRequest::content_type].
        pub fn set_content_type<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.content_type = Some(v.into());
            self
        }

        /// Sets the value of [metadata][crate::model::PutObjectRequest::metadata].
        pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            self.0.request.metadata = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for PutObject {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ObjectStore::put_bucket_tagging][crate::client::ObjectStore::put_bucket_tagging] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use cloudsdk_objectstore::builder;
    /// use builder::object_store::PutBucketTagging;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> PutBucketTagging {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct PutBucketTagging(RequestBuilder<crate::model::PutBucketTaggingRequest>);

    impl PutBucketTagging {
        pub(crate) fn new(stub: Arc<crate::transport::ObjectStore>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PutBucketTaggingRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::PutBucketTaggingResponse> {
            (*self.0.stub)
                .put_bucket_tagging(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [bucket][crate::model::PutBucketTaggingRequest::bucket].
        ///
        /// This is a **required** field for requests.
        pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.bucket = Some(v.into());
            self
        }

        /// Sets the value of [tagging][crate::model::PutBucketTaggingRequest::tagging].
        ///
        /// This is a **required** field for requests.
        pub fn set_tagging<T: Into<crate::model::Tagging>>(mut self, v: T) -> Self {
            self.0.request.tagging = Some(v.into());
            self
        }

        /// Sets the value of [expected_bucket_owner][crate::model::PutBucketTaggingRequest::expected_bucket_owner].
        pub fn set_expected_bucket_owner<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.expected_bucket_owner = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for PutBucketTagging {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }
}
