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

/// Implements a client for the object storage API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use cloudsdk_objectstore::client::ObjectStore;
/// let client = ObjectStore::builder().build().await?;
/// let response = client
///     .list_objects_v2()
///     .set_bucket("my-bucket")
///     .set_prefix("photos/")
///     .send()
///     .await?;
/// for object in response.contents.unwrap_or_default() {
///     println!("{object:?}");
/// }
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Buckets hold objects. Each object has a key, which may contain `/`
/// characters, its contents, and user-defined metadata.
///
/// # Configuration
///
/// To configure `ObjectStore` use the `with_*` methods in the type returned
/// by [builder()][ObjectStore::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://s3.us-east-1.amazonaws.com`). Applications using regional
///   endpoints or running in restricted networks may want to override this
///   default.
///
/// [with_endpoint()]: super::builder::object_store::ClientBuilder::with_endpoint
///
/// # Pooling and Cloning
///
/// `ObjectStore` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `ObjectStore` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct ObjectStore {
    inner: Arc<crate::transport::ObjectStore>,
}

impl ObjectStore {
    /// Returns a builder for [ObjectStore].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use cloudsdk_objectstore::client::ObjectStore;
    /// let client = ObjectStore::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::object_store::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::object_store::client::Factory)
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = crate::transport::ObjectStore::new(config).await?;
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Lists some or all (up to 1,000) of the objects in a bucket.
    ///
    /// If `is_truncated` is set in the response, send the
    /// `next_continuation_token` back to get the next page.
    pub fn list_objects_v2(&self) -> super::builder::object_store::ListObjectsV2 {
        super::builder::object_store::ListObjectsV2::new(self.inner.clone())
    }

    /// Reads an object.
    ///
    /// The contents are streamed, they are not read until the application
    /// calls [next()][crate::model::GetObjectResponse::next] or
    /// [all_bytes()][crate::model::GetObjectResponse::all_bytes].
    pub fn get_object(&self) -> super::builder::object_store::GetObject {
        super::builder::object_store::GetObject::new(self.inner.clone())
    }

    /// Gets the metadata of an object without reading its contents.
    pub fn head_object(&self) -> super::builder::object_store::HeadObject {
        super::builder::object_store::HeadObject::new(self.inner.clone())
    }

    /// Creates or replaces an object.
    pub fn put_object(&self) -> super::builder::object_store::PutObject {
        super::builder::object_store::PutObject::new(self.inner.clone())
    }

    /// Sets the tags for a bucket, replacing any existing tags.
    pub fn put_bucket_tagging(&self) -> super::builder::object_store::PutBucketTagging {
        super::builder::object_store::PutBucketTagging::new(self.inner.clone())
    }
}
