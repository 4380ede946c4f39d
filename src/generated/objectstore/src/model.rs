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

use bytes::Bytes;
use gaxi::shape::{Marshall, Member, Structure};
use gaxi::transport::{
    ResponseBody, ResponseHeaders, StreamingOutput, header_value, prefixed_headers,
};
use gaxi::xml::{UnmarshallError, XmlContext, XmlStructure};
use http::HeaderMap;
use std::collections::HashMap;
use time::OffsetDateTime;

const METADATA_PREFIX: &str = "x-amz-meta-";

/// The request message for [ObjectStore::list_objects_v2][crate::client::ObjectStore::list_objects_v2].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListObjectsV2Request {
    /// The name of the bucket.
    pub bucket: Option<String>,

    /// Limits the response to keys that begin with this prefix.
    pub prefix: Option<String>,

    /// Groups keys sharing a prefix up to the first occurrence of the
    /// delimiter into a single entry in `common_prefixes`.
    pub delimiter: Option<String>,

    /// The maximum number of keys returned. The default is 1,000.
    pub max_keys: Option<i32>,

    /// Continues a previous listing. Use the `next_continuation_token` from
    /// the previous response.
    pub continuation_token: Option<String>,

    /// Start listing after this key.
    pub start_after: Option<String>,
}

impl ListObjectsV2Request {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bucket][ListObjectsV2Request::bucket].
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket = Some(v.into());
        self
    }

    /// Sets the value of [prefix][ListObjectsV2Request::prefix].
    pub fn set_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.prefix = Some(v.into());
        self
    }

    /// Sets the value of [delimiter][ListObjectsV2Request::delimiter].
    pub fn set_delimiter<T: Into<String>>(mut self, v: T) -> Self {
        self.delimiter = Some(v.into());
        self
    }

    /// Sets the value of [max_keys][ListObjectsV2Request::max_keys].
    pub fn set_max_keys<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_keys = Some(v.into());
        self
    }

    /// Sets or clears the value of [continuation_token][ListObjectsV2Request::continuation_token].
    pub fn set_or_clear_continuation_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.continuation_token = v.map(Into::into);
        self
    }

    /// Sets the value of [continuation_token][ListObjectsV2Request::continuation_token].
    pub fn set_continuation_token<T: Into<String>>(mut self, v: T) -> Self {
        self.continuation_token = Some(v.into());
        self
    }

    /// Sets the value of [start_after][ListObjectsV2Request::start_after].
    pub fn set_start_after<T: Into<String>>(mut self, v: T) -> Self {
        self.start_after = Some(v.into());
        self
    }
}

impl Marshall for ListObjectsV2Request {
    fn marshall(&self) -> Structure {
        Structure::new()
            .member(Member::uri("Bucket"), &self.bucket)
            .member(Member::querystring("Prefix"), &self.prefix)
            .member(Member::querystring("Delimiter"), &self.delimiter)
            .member(Member::querystring("MaxKeys"), &self.max_keys)
            .member(
                Member::querystring("ContinuationToken"),
                &self.continuation_token,
            )
            .member(Member::querystring("StartAfter"), &self.start_after)
    }
}

/// The response message for [ObjectStore::list_objects_v2][crate::client::ObjectStore::list_objects_v2].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListObjectsV2Response {
    /// The name of the bucket.
    pub name: Option<String>,

    pub prefix: Option<String>,

    pub delimiter: Option<String>,

    pub max_keys: Option<i32>,

    /// The number of keys returned with this request.
    pub key_count: Option<i32>,

    /// Set to `true` if more keys are available.
    pub is_truncated: Option<bool>,

    /// The objects in this page of results.
    pub contents: Option<Vec<Object>>,

    /// The key prefixes rolled up by the delimiter.
    pub common_prefixes: Option<Vec<CommonPrefix>>,

    pub continuation_token: Option<String>,

    /// Send this value as the `continuation_token` to get the next page.
    pub next_continuation_token: Option<String>,

    pub start_after: Option<String>,
}

impl ListObjectsV2Response {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][ListObjectsV2Response::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [prefix][ListObjectsV2Response::prefix].
    pub fn set_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.prefix = Some(v.into());
        self
    }

    /// Sets the value of [delimiter][ListObjectsV2Response::delimiter].
    pub fn set_delimiter<T: Into<String>>(mut self, v: T) -> Self {
        self.delimiter = Some(v.into());
        self
    }

    /// Sets the value of [max_keys][ListObjectsV2Response::max_keys].
    pub fn set_max_keys<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_keys = Some(v.into());
        self
    }

    /// Sets the value of [key_count][ListObjectsV2Response::key_count].
    pub fn set_key_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.key_count = Some(v.into());
        self
    }

    /// Sets the value of [is_truncated][ListObjectsV2Response::is_truncated].
    pub fn set_is_truncated<T: Into<bool>>(mut self, v: T) -> Self {
        self.is_truncated = Some(v.into());
        self
    }

    /// Sets the value of [contents][ListObjectsV2Response::contents].
    pub fn set_contents<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Object>,
    {
        self.contents = Some(v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the value of [common_prefixes][ListObjectsV2Response::common_prefixes].
    pub fn set_common_prefixes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<CommonPrefix>,
    {
        self.common_prefixes = Some(v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the value of [continuation_token][ListObjectsV2Response::continuation_token].
    pub fn set_continuation_token<T: Into<String>>(mut self, v: T) -> Self {
        self.continuation_token = Some(v.into());
        self
    }

    /// Sets the value of [next_continuation_token][ListObjectsV2Response::next_continuation_token].
    pub fn set_next_continuation_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_continuation_token = Some(v.into());
        self
    }

    /// Sets the value of [start_after][ListObjectsV2Response::start_after].
    pub fn set_start_after<T: Into<String>>(mut self, v: T) -> Self {
        self.start_after = Some(v.into());
        self
    }
}

impl XmlStructure for ListObjectsV2Response {
    fn unmarshall_member(
        &mut self,
        name: &str,
        ctx: &mut XmlContext,
    ) -> Result<(), UnmarshallError> {
        match name {
            "Name" => self.name = ctx.field()?,
            "Prefix" => self.prefix = ctx.field()?,
            "Delimiter" => self.delimiter = ctx.field()?,
            "MaxKeys" => self.max_keys = ctx.field()?,
            "KeyCount" => self.key_count = ctx.field()?,
            "IsTruncated" => self.is_truncated = ctx.field()?,
            "Contents" => ctx.flattened_element(&mut self.contents)?,
            "CommonPrefixes" => ctx.flattened_element(&mut self.common_prefixes)?,
            "ContinuationToken" => self.continuation_token = ctx.field()?,
            "NextContinuationToken" => self.next_continuation_token = ctx.field()?,
            "StartAfter" => self.start_after = ctx.field()?,
            _ => {}
        }
        Ok(())
    }
}

impl ResponseHeaders for ListObjectsV2Response {}

/// An object stored in a bucket.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Object {
    /// The name of the object.
    pub key: Option<String>,

    /// The time the object was last written.
    pub last_modified: Option<OffsetDateTime>,

    /// The entity tag, a hash of the object contents.
    pub etag: Option<String>,

    /// The size of the object, in bytes.
    pub size: Option<i64>,

    pub storage_class: Option<String>,
}

impl Object {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [key][Object::key].
    pub fn set_key<T: Into<String>>(mut self, v: T) -> Self {
        self.key = Some(v.into());
        self
    }

    /// Sets the value of [last_modified][Object::last_modified].
    pub fn set_last_modified<T: Into<OffsetDateTime>>(mut self, v: T) -> Self {
        self.last_modified = Some(v.into());
        self
    }

    /// Sets the value of [etag][Object::etag].
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = Some(v.into());
        self
    }

    /// Sets the value of [size][Object::size].
    pub fn set_size<T: Into<i64>>(mut self, v: T) -> Self {
        self.size = Some(v.into());
        self
    }

    /// Sets the value of [storage_class][Object::storage_class].
    pub fn set_storage_class<T: Into<String>>(mut self, v: T) -> Self {
        self.storage_class = Some(v.into());
        self
    }
}

impl XmlStructure for Object {
    fn unmarshall_member(
        &mut self,
        name: &str,
        ctx: &mut XmlContext,
    ) -> Result<(), UnmarshallError> {
        match name {
            "Key" => self.key = ctx.field()?,
            "LastModified" => self.last_modified = ctx.field()?,
            "ETag" => self.etag = ctx.field()?,
            "Size" => self.size = ctx.field()?,
            "StorageClass" => self.storage_class = ctx.field()?,
            _ => {}
        }
        Ok(())
    }
}

/// A key prefix rolled up by the listing delimiter.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CommonPrefix {
    pub prefix: Option<String>,
}

impl CommonPrefix {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [prefix][CommonPrefix::prefix].
    pub fn set_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.prefix = Some(v.into());
        self
    }
}

impl XmlStructure for CommonPrefix {
    fn unmarshall_member(
        &mut self,
        name: &str,
        ctx: &mut XmlContext,
    ) -> Result<(), UnmarshallError> {
        if name == "Prefix" {
            self.prefix = ctx.field()?;
        }
        Ok(())
    }
}

/// The request message for [ObjectStore::get_object][crate::client::ObjectStore::get_object].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetObjectRequest {
    pub bucket: Option<String>,

    /// The object key. It may contain `/` characters.
    pub key: Option<String>,

    /// Downloads only the specified range, e.g. `bytes=0-1023`.
    pub range: Option<String>,

    /// Returns the object only if its entity tag is different.
    pub if_none_match: Option<String>,

    /// Returns the object only if it has been modified since this time.
    pub if_modified_since: Option<OffsetDateTime>,

    /// Selects a specific version of the object.
    pub version_id: Option<String>,
}

impl GetObjectRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bucket][GetObjectRequest::bucket].
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket = Some(v.into());
        self
    }

    /// Sets the value of [key][GetObjectRequest::key].
    pub fn set_key<T: Into<String>>(mut self, v: T) -> Self {
        self.key = Some(v.into());
        self
    }

    /// Sets the value of [range][GetObjectRequest::range].
    pub fn set_range<T: Into<String>>(mut self, v: T) -> Self {
        self.range = Some(v.into());
        self
    }

    /// Sets the value of [if_none_match][GetObjectRequest::if_none_match].
    pub fn set_if_none_match<T: Into<String>>(mut self, v: T) -> Self {
        self.if_none_match = Some(v.into());
        self
    }

    /// Sets the value of [if_modified_since][GetObjectRequest::if_modified_since].
    pub fn set_if_modified_since<T: Into<OffsetDateTime>>(mut self, v: T) -> Self {
        self.if_modified_since = Some(v.into());
        self
    }

    /// Sets the value of [version_id][GetObjectRequest::version_id].
    pub fn set_version_id<T: Into<String>>(mut self, v: T) -> Self {
        self.version_id = Some(v.into());
        self
    }
}

impl Marshall for GetObjectRequest {
    fn marshall(&self) -> Structure {
        Structure::new()
            .member(Member::uri("Bucket"), &self.bucket)
            .member(Member::uri("Key"), &self.key)
            .member(Member::header("Range"), &self.range)
            .member(Member::header("If-None-Match"), &self.if_none_match)
            .member(Member::header("If-Modified-Since"), &self.if_modified_since)
            .member(Member::querystring("versionId"), &self.version_id)
    }
}

/// The response for [ObjectStore::get_object][crate::client::ObjectStore::get_object].
///
/// The object contents are not buffered. Read them with [next()] or
/// [all_bytes()].
///
/// [next()]: GetObjectResponse::next
/// [all_bytes()]: GetObjectResponse::all_bytes
#[derive(Debug)]
#[non_exhaustive]
pub struct GetObjectResponse {
    /// The size of the body, in bytes.
    pub content_length: Option<i64>,

    pub content_type: Option<String>,

    pub content_range: Option<String>,

    pub etag: Option<String>,

    pub last_modified: Option<OffsetDateTime>,

    pub version_id: Option<String>,

    /// The user-defined metadata, without the `x-amz-meta-` prefix.
    pub metadata: Option<HashMap<String, String>>,

    body: ResponseBody,
}

impl GetObjectResponse {
    /// Returns the full object contents.
    ///
    /// # Example
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use cloudsdk_objectstore::client::ObjectStore;
    /// # let client = ObjectStore::builder().build().await?;
    /// let contents = client
    ///     .get_object()
    ///     .set_bucket("my-bucket")
    ///     .set_key("my-object")
    ///     .send()
    ///     .await?
    ///     .all_bytes()
    ///     .await?;
    /// println!("object contents={contents:?}");
    /// # Ok::<(), anyhow::Error>(()) });
    /// ```
    pub async fn all_bytes(self) -> crate::Result<Bytes> {
        self.body.collect().await
    }

    /// Streams the next bytes of the object.
    ///
    /// Returns `None` when the contents have been exhausted.
    ///
    /// # Example
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use cloudsdk_objectstore::client::ObjectStore;
    /// # let client = ObjectStore::builder().build().await?;
    /// let mut resp = client
    ///     .get_object()
    ///     .set_bucket("my-bucket")
    ///     .set_key("my-object")
    ///     .send()
    ///     .await?;
    /// while let Some(next) = resp.next().await {
    ///     println!("next={:?}", next?);
    /// }
    /// # Ok::<(), anyhow::Error>(()) });
    /// ```
    pub async fn next(&mut self) -> Option<crate::Result<Bytes>> {
        self.body.next().await.transpose()
    }
}

impl StreamingOutput for GetObjectResponse {
    fn from_stream(headers: &HeaderMap, body: ResponseBody) -> gax::Result<Self> {
        Ok(Self {
            content_length: header_value(headers, "content-length")?,
            content_type: header_value(headers, "content-type")?,
            content_range: header_value(headers, "content-range")?,
            etag: header_value(headers, "etag")?,
            last_modified: header_value(headers, "last-modified")?,
            version_id: header_value(headers, "x-amz-version-id")?,
            metadata: prefixed_headers(headers, METADATA_PREFIX),
            body,
        })
    }
}

/// The request message for [ObjectStore::head_object][crate::client::ObjectStore::head_object].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct HeadObjectRequest {
    pub bucket: Option<String>,

    pub key: Option<String>,

    /// Succeeds only if the entity tag matches.
    pub if_match: Option<String>,

    pub version_id: Option<String>,
}

impl HeadObjectRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bucket][HeadObjectRequest::bucket].
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket = Some(v.into());
        self
    }

    /// Sets the value of [key][HeadObjectRequest::key].
    pub fn set_key<T: Into<String>>(mut self, v: T) -> Self {
        self.key = Some(v.into());
        self
    }

    /// Sets the value of [if_match][HeadObjectRequest::if_match].
    pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
        self.if_match = Some(v.into());
        self
    }

    /// Sets the value of [version_id][HeadObjectRequest::version_id].
    pub fn set_version_id<T: Into<String>>(mut self, v: T) -> Self {
        self.version_id = Some(v.into());
        self
    }
}

impl Marshall for HeadObjectRequest {
    fn marshall(&self) -> Structure {
        Structure::new()
            .member(Member::uri("Bucket"), &self.bucket)
            .member(Member::uri("Key"), &self.key)
            .member(Member::header("If-Match"), &self.if_match)
            .member(Member::querystring("versionId"), &self.version_id)
    }
}

/// The response message for [ObjectStore::head_object][crate::client::ObjectStore::head_object].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct HeadObjectResponse {
    /// The size of the object, in bytes.
    pub content_length: Option<i64>,

    pub content_type: Option<String>,

    pub etag: Option<String>,

    pub last_modified: Option<OffsetDateTime>,

    pub version_id: Option<String>,

    /// The user-defined metadata, without the `x-amz-meta-` prefix.
    pub metadata: Option<HashMap<String, String>>,
}

impl HeadObjectResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [content_length][HeadObjectResponse::content_length].
    pub fn set_content_length<T: Into<i64>>(mut self, v: T) -> Self {
        self.content_length = Some(v.into());
        self
    }

    /// Sets the value of [content_type][HeadObjectResponse::content_type].
    pub fn set_content_type<T: Into<String>>(mut self, v: T) -> Self {
        self.content_type = Some(v.into());
        self
    }

    /// Sets the value of [etag][HeadObjectResponse::etag].
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = Some(v.into());
        self
    }

    /// Sets the value of [last_modified][HeadObjectResponse::last_modified].
    pub fn set_last_modified<T: Into<OffsetDateTime>>(mut self, v: T) -> Self {
        self.last_modified = Some(v.into());
        self
    }

    /// Sets the value of [version_id][HeadObjectResponse::version_id].
    pub fn set_version_id<T: Into<String>>(mut self, v: T) -> Self {
        self.version_id = Some(v.into());
        self
    }

    /// Sets the value of [metadata][HeadObjectResponse::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }
}

impl ResponseHeaders for HeadObjectResponse {
    fn read_headers(&mut self, headers: &HeaderMap) -> gax::Result<()> {
        self.content_length = header_value(headers, "content-length")?;
        self.content_type = header_value(headers, "content-type")?;
        self.etag = header_value(headers, "etag")?;
        self.last_modified = header_value(headers, "last-modified")?;
        self.version_id = header_value(headers, "x-amz-version-id")?;
        self.metadata = prefixed_headers(headers, METADATA_PREFIX);
        Ok(())
    }
}

/// The request message for [ObjectStore::put_object][crate::client::ObjectStore::put_object].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PutObjectRequest {
    pub bucket: Option<String>,

    pub key: Option<String>,

    /// The object contents.
    pub body: Option<Bytes>,

    /// The media type of the contents. The default is
    /// `application/octet-stream`.
    pub content_type: Option<String>,

    /// The user-defined metadata. Each entry is sent as an `x-amz-meta-`
    /// header.
    pub metadata: Option<HashMap<String, String>>,
}

impl PutObjectRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bucket][PutObjectRequest::bucket].
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket = Some(v.into());
        self
    }

    /// Sets the value of [key][PutObjectRequest::key].
    pub fn set_key<T: Into<String>>(mut self, v: T) -> Self {
        self.key = Some(v.into());
        self
    }

    /// Sets the value of [body][PutObjectRequest::body].
    pub fn set_body<T: Into<Bytes>>(mut self, v: T) -> Self {
        self.body = Some(v.into());
        self
    }

    /// Sets the value of [content_type][PutObjectRequest::content_type].
    pub fn set_content_type<T: Into<String>>(mut self, v: T) -> Self {
        self.content_type = Some(v.into());
        self
    }

    /// Sets the value of [metadata][PutObjectRequest::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }
}

impl Marshall for PutObjectRequest {
    fn marshall(&self) -> Structure {
        Structure::new()
            .member(Member::uri("Bucket"), &self.bucket)
            .member(Member::uri("Key"), &self.key)
            .member(Member::payload("Body"), &self.body)
            .member(Member::header("Content-Type"), &self.content_type)
            .member(Member::header(METADATA_PREFIX), &self.metadata)
    }
}

/// The response message for [ObjectStore::put_object][crate::client::ObjectStore::put_object].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PutObjectResponse {
    pub etag: Option<String>,

    /// Set if versioning is enabled for the bucket.
    pub version_id: Option<String>,
}

impl ResponseHeaders for PutObjectResponse {
    fn read_headers(&mut self, headers: &HeaderMap) -> gax::Result<()> {
        self.etag = header_value(headers, "etag")?;
        self.version_id = header_value(headers, "x-amz-version-id")?;
        Ok(())
    }
}

/// The request message for [ObjectStore::put_bucket_tagging][crate::client::ObjectStore::put_bucket_tagging].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PutBucketTaggingRequest {
    pub bucket: Option<String>,

    /// The tags, replacing any existing tags on the bucket.
    pub tagging: Option<Tagging>,

    /// The account expected to own the bucket.
    pub expected_bucket_owner: Option<String>,
}

impl PutBucketTaggingRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bucket][PutBucketTaggingRequest::bucket].
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket = Some(v.into());
        self
    }

    /// Sets the value of [tagging][PutBucketTaggingRequest::tagging].
    pub fn set_tagging<T: Into<Tagging>>(mut self, v: T) -> Self {
        self.tagging = Some(v.into());
        self
    }

    /// Sets the value of [expected_bucket_owner][PutBucketTaggingRequest::expected_bucket_owner].
    pub fn set_expected_bucket_owner<T: Into<String>>(mut self, v: T) -> Self {
        self.expected_bucket_owner = Some(v.into());
        self
    }
}

impl Marshall for PutBucketTaggingRequest {
    fn marshall(&self) -> Structure {
        Structure::new()
            .member(Member::uri("Bucket"), &self.bucket)
            .member(Member::payload("Tagging"), &self.tagging)
            .member(
                Member::header("x-amz-expected-bucket-owner"),
                &self.expected_bucket_owner,
            )
    }
}

/// A set of tags.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Tagging {
    pub tag_set: Option<Vec<Tag>>,
}

impl Tagging {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tag_set][Tagging::tag_set].
    pub fn set_tag_set<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Tag>,
    {
        self.tag_set = Some(v.into_iter().map(Into::into).collect());
        self
    }
}

impl Marshall for Tagging {
    fn marshall(&self) -> Structure {
        Structure::new().member(Member::body("TagSet").with_list_tag("Tag"), &self.tag_set)
    }
}

/// A key-value pair.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Tag {
    pub key: Option<String>,

    pub value: Option<String>,
}

impl Tag {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [key][Tag::key].
    pub fn set_key<T: Into<String>>(mut self, v: T) -> Self {
        self.key = Some(v.into());
        self
    }

    /// Sets the value of [value][Tag::value].
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }
}

impl Marshall for Tag {
    fn marshall(&self) -> Structure {
        Structure::new()
            .member(Member::body("Key"), &self.key)
            .member(Member::body("Value"), &self.value)
    }
}

/// The response message for [ObjectStore::put_bucket_tagging][crate::client::ObjectStore::put_bucket_tagging].
///
/// The service returns no data for this operation.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PutBucketTaggingResponse {}

impl ResponseHeaders for PutBucketTaggingResponse {}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use pretty_assertions::assert_eq;
    use time::macros::datetime;
    type TestResult = anyhow::Result<()>;

    #[test]
    fn list_objects_v2_response() -> TestResult {
        let body = br#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>my-bucket</Name>
  <Prefix>photos/</Prefix>
  <Delimiter>/</Delimiter>
  <MaxKeys>1000</MaxKeys>
  <KeyCount>3</KeyCount>
  <IsTruncated>true</IsTruncated>
  <Contents>
    <Key>photos/a.jpg</Key>
    <LastModified>2015-01-25T08:00:00.000Z</LastModified>
    <ETag>"abc"</ETag>
    <Size>1024</Size>
    <Owner><ID>owner</ID><Key>decoy</Key></Owner>
    <StorageClass>STANDARD</StorageClass>
  </Contents>
  <Contents>
    <Key>photos/b.jpg</Key>
    <Size>0</Size>
  </Contents>
  <CommonPrefixes><Prefix>photos/2015/</Prefix></CommonPrefixes>
  <NextContinuationToken>token-2</NextContinuationToken>
</ListBucketResult>"#;
        let got = gaxi::xml::unmarshall::<ListObjectsV2Response>(body, None)?;
        let want = ListObjectsV2Response::new()
            .set_name("my-bucket")
            .set_prefix("photos/")
            .set_delimiter("/")
            .set_max_keys(1000)
            .set_key_count(3)
            .set_is_truncated(true)
            .set_contents([
                Object::new()
                    .set_key("photos/a.jpg")
                    .set_last_modified(datetime!(2015-01-25 08:00:00 UTC))
                    .set_etag("\"abc\"")
                    .set_size(1024)
                    .set_storage_class("STANDARD"),
                Object::new().set_key("photos/b.jpg").set_size(0),
            ])
            .set_common_prefixes([CommonPrefix::new().set_prefix("photos/2015/")])
            .set_next_continuation_token("token-2");
        assert_eq!(got, Some(want));
        Ok(())
    }

    #[test]
    fn list_objects_v2_empty_bucket() -> TestResult {
        let body = br#"<ListBucketResult><Name>my-bucket</Name><KeyCount>0</KeyCount></ListBucketResult>"#;
        let got = gaxi::xml::unmarshall::<ListObjectsV2Response>(body, None)?;
        let want = ListObjectsV2Response::new()
            .set_name("my-bucket")
            .set_key_count(0);
        assert_eq!(got, Some(want));
        Ok(())
    }

    #[test]
    fn head_object_headers() -> TestResult {
        let mut headers = HeaderMap::new();
        headers.insert("content-length", HeaderValue::from_static("1024"));
        headers.insert("content-type", HeaderValue::from_static("image/jpeg"));
        headers.insert("etag", HeaderValue::from_static("\"abc\""));
        headers.insert(
            "last-modified",
            HeaderValue::from_static("Sun, 25 Jan 2015 08:00:00 GMT"),
        );
        headers.insert("x-amz-meta-camera", HeaderValue::from_static("x100"));
        let mut got = HeadObjectResponse::new();
        got.read_headers(&headers)?;
        let want = HeadObjectResponse::new()
            .set_content_length(1024)
            .set_content_type("image/jpeg")
            .set_etag("\"abc\"")
            .set_last_modified(datetime!(2015-01-25 08:00:00 UTC))
            .set_metadata([("camera", "x100")]);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn head_object_bad_header() {
        let mut headers = HeaderMap::new();
        headers.insert("content-length", HeaderValue::from_static("lots"));
        let mut got = HeadObjectResponse::new();
        let err = got.read_headers(&headers).unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
    }

    #[tokio::test]
    async fn get_object_body() -> TestResult {
        let mut headers = HeaderMap::new();
        headers.insert("content-length", HeaderValue::from_static("5"));
        let body = ResponseBody::Full(Bytes::from_static(b"hello"));
        let mut response = GetObjectResponse::from_stream(&headers, body)?;
        assert_eq!(response.content_length, Some(5));
        assert_eq!(response.metadata, None);
        let chunk = response.next().await.transpose()?;
        assert_eq!(chunk, Some(Bytes::from_static(b"hello")));
        assert!(response.next().await.is_none());
        Ok(())
    }
}
