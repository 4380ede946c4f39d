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

//! The boundary between the marshalling engine and the HTTP client.
//!
//! A [Transport] sends a [WireRequest] and returns the raw status, headers,
//! and body. A [ResponseHandler] turns a successful [RawResponse] into the
//! typed output of an operation.

use crate::wire::WireRequest;
use crate::{json, timestamp, xml};
use bytes::{Bytes, BytesMut};
use gax::error::Error;
use gax::options::RequestOptions;
use http::HeaderMap;
use std::collections::HashMap;
use std::marker::PhantomData;
use time::OffsetDateTime;

/// Sends wire requests.
///
/// Implementations do not retry, sign, or otherwise modify the request.
pub trait Transport: std::fmt::Debug + Send + Sync {
    fn execute(
        &self,
        request: WireRequest,
        options: &RequestOptions,
    ) -> impl Future<Output = gax::Result<RawResponse>> + Send;
}

/// A source of response body chunks.
#[async_trait::async_trait]
pub trait ChunkStream: std::fmt::Debug + Send {
    /// Returns the next chunk, or `None` at the end of the body.
    async fn next_chunk(&mut self) -> gax::Result<Option<Bytes>>;
}

/// The body of a [RawResponse].
#[derive(Debug, Default)]
pub enum ResponseBody {
    #[default]
    Empty,
    /// The transport has read the complete body.
    Full(Bytes),
    /// The connection is still open, the body is read on demand.
    Stream(Box<dyn ChunkStream>),
}

impl ResponseBody {
    /// Returns the next chunk of the body.
    ///
    /// A buffered body is returned as a single chunk.
    pub async fn next(&mut self) -> gax::Result<Option<Bytes>> {
        match self {
            Self::Empty => Ok(None),
            Self::Full(_) => match std::mem::take(self) {
                Self::Full(b) => Ok(Some(b)),
                _ => Ok(None),
            },
            Self::Stream(s) => s.next_chunk().await,
        }
    }

    /// Reads the remainder of the body into a single buffer.
    pub async fn collect(self) -> gax::Result<Bytes> {
        match self {
            Self::Empty => Ok(Bytes::new()),
            Self::Full(b) => Ok(b),
            Self::Stream(mut s) => {
                let mut buffer = BytesMut::new();
                while let Some(chunk) = s.next_chunk().await? {
                    buffer.extend_from_slice(&chunk);
                }
                Ok(buffer.freeze())
            }
        }
    }
}

/// The response as returned by a [Transport].
#[derive(Debug)]
pub struct RawResponse {
    status: u16,
    headers: HeaderMap,
    body: ResponseBody,
}

impl RawResponse {
    pub fn new(status: u16, headers: HeaderMap, body: ResponseBody) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn into_parts(self) -> (u16, HeaderMap, ResponseBody) {
        (self.status, self.headers, self.body)
    }
}

/// Converts successful responses into the output of an operation.
pub trait ResponseHandler<O>: Send + Sync {
    /// Returns true if the handler consumes the body as a stream.
    ///
    /// The transport does not drain the body of such responses.
    fn needs_connection_left_open(&self) -> bool {
        false
    }

    fn handle(&self, response: RawResponse) -> impl Future<Output = gax::Result<O>> + Send;
}

/// Output members bound to response headers.
///
/// Outputs without such members use the default implementation.
pub trait ResponseHeaders {
    fn read_headers(&mut self, _headers: &HeaderMap) -> gax::Result<()> {
        Ok(())
    }
}

/// Outputs that keep the response body as a stream.
pub trait StreamingOutput: Sized {
    fn from_stream(headers: &HeaderMap, body: ResponseBody) -> gax::Result<Self>;
}

/// Decodes JSON bodies. An empty body produces the default output.
pub struct JsonHandler<O>(PhantomData<fn() -> O>);

impl<O> JsonHandler<O> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<O> Default for JsonHandler<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> ResponseHandler<O> for JsonHandler<O>
where
    O: json::JsonUnmarshall + ResponseHeaders + Default + Send,
{
    async fn handle(&self, response: RawResponse) -> gax::Result<O> {
        let (_, headers, body) = response.into_parts();
        let body = body.collect().await?;
        let mut output = json::unmarshall::<O>(&body)
            .map_err(Error::deser)?
            .unwrap_or_default();
        output.read_headers(&headers)?;
        Ok(output)
    }
}

/// Decodes XML bodies.
///
/// With a wrapper the output is the named child of the root element, as in
/// query protocol responses. Otherwise the output is the root element.
pub struct XmlHandler<O> {
    wrapper: Option<&'static str>,
    _output: PhantomData<fn() -> O>,
}

impl<O> XmlHandler<O> {
    pub fn new() -> Self {
        Self {
            wrapper: None,
            _output: PhantomData,
        }
    }

    pub fn with_wrapper(wrapper: &'static str) -> Self {
        Self {
            wrapper: Some(wrapper),
            _output: PhantomData,
        }
    }
}

impl<O> Default for XmlHandler<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> ResponseHandler<O> for XmlHandler<O>
where
    O: xml::XmlUnmarshall + ResponseHeaders + Default + Send,
{
    async fn handle(&self, response: RawResponse) -> gax::Result<O> {
        let (_, headers, body) = response.into_parts();
        let body = body.collect().await?;
        let mut output = xml::unmarshall::<O>(&body, self.wrapper)
            .map_err(Error::deser)?
            .unwrap_or_default();
        output.read_headers(&headers)?;
        Ok(output)
    }
}

/// Builds the output from the headers alone, the body is discarded.
pub struct HeadersHandler<O>(PhantomData<fn() -> O>);

impl<O> HeadersHandler<O> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<O> Default for HeadersHandler<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> ResponseHandler<O> for HeadersHandler<O>
where
    O: ResponseHeaders + Default + Send,
{
    async fn handle(&self, response: RawResponse) -> gax::Result<O> {
        let mut output = O::default();
        output.read_headers(response.headers())?;
        Ok(output)
    }
}

/// Hands the open body to the output.
pub struct StreamingHandler<O>(PhantomData<fn() -> O>);

impl<O> StreamingHandler<O> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<O> Default for StreamingHandler<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> ResponseHandler<O> for StreamingHandler<O>
where
    O: StreamingOutput + Send,
{
    fn needs_connection_left_open(&self) -> bool {
        true
    }

    async fn handle(&self, response: RawResponse) -> gax::Result<O> {
        let (_, headers, body) = response.into_parts();
        O::from_stream(&headers, body)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum HeaderError {
    #[error("the value of header {0} is not valid text")]
    NotText(String),
    #[error("cannot parse header {name}={value}")]
    Invalid { name: String, value: String },
    #[error(transparent)]
    Timestamp(#[from] timestamp::TimestampError),
}

/// Types that can be read from a single response header.
pub trait FromHeader: Sized {
    fn from_header(name: &str, value: &str) -> Result<Self, HeaderError>;
}

impl FromHeader for String {
    fn from_header(_name: &str, value: &str) -> Result<Self, HeaderError> {
        Ok(value.to_string())
    }
}

macro_rules! parsed_header {
    ($($t:ty),*) => {
        $(
            impl FromHeader for $t {
                fn from_header(name: &str, value: &str) -> Result<Self, HeaderError> {
                    value.trim().parse().map_err(|_| HeaderError::Invalid {
                        name: name.to_string(),
                        value: value.to_string(),
                    })
                }
            }
        )*
    };
}
parsed_header!(i32, i64, bool);

impl FromHeader for OffsetDateTime {
    fn from_header(_name: &str, value: &str) -> Result<Self, HeaderError> {
        Ok(timestamp::parse_http_date(value.trim())?)
    }
}

/// Reads an output member bound to a header.
pub fn header_value<T: FromHeader>(headers: &HeaderMap, name: &str) -> gax::Result<Option<T>> {
    let Some(value) = headers.get(name) else {
        return Ok(None);
    };
    let value = value
        .to_str()
        .map_err(|_| Error::deser(HeaderError::NotText(name.to_string())))?;
    T::from_header(name, value).map(Some).map_err(Error::deser)
}

/// Reads an output map bound to all the headers starting with `prefix`.
///
/// The prefix is compared without regard to case, and removed from the keys.
/// Returns `None` when no header matches.
pub fn prefixed_headers(headers: &HeaderMap, prefix: &str) -> Option<HashMap<String, String>> {
    let prefix = prefix.to_ascii_lowercase();
    let map = headers
        .iter()
        .filter_map(|(k, v)| {
            let key = k.as_str().strip_prefix(prefix.as_str())?;
            Some((key.to_string(), v.to_str().ok()?.to_string()))
        })
        .collect::<HashMap<_, _>>();
    if map.is_empty() { None } else { Some(map) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderName, HeaderValue};
    use pretty_assertions::assert_eq;
    type TestResult = anyhow::Result<()>;

    #[derive(Debug)]
    struct Chunks(Vec<&'static str>);

    #[async_trait::async_trait]
    impl ChunkStream for Chunks {
        async fn next_chunk(&mut self) -> gax::Result<Option<Bytes>> {
            if self.0.is_empty() {
                return Ok(None);
            }
            Ok(Some(Bytes::from_static(self.0.remove(0).as_bytes())))
        }
    }

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (k, v) in pairs {
            let name = HeaderName::from_bytes(k.as_bytes()).unwrap();
            map.insert(name, HeaderValue::from_static(v));
        }
        map
    }

    #[tokio::test]
    async fn body_collect() -> TestResult {
        assert_eq!(ResponseBody::Empty.collect().await?, Bytes::new());
        let body = ResponseBody::Full(Bytes::from_static(b"abc"));
        assert_eq!(body.collect().await?, Bytes::from_static(b"abc"));
        let body = ResponseBody::Stream(Box::new(Chunks(vec!["a", "b", "c"])));
        assert_eq!(body.collect().await?, Bytes::from_static(b"abc"));
        Ok(())
    }

    #[tokio::test]
    async fn body_next() -> TestResult {
        let mut body = ResponseBody::Full(Bytes::from_static(b"abc"));
        assert_eq!(body.next().await?, Some(Bytes::from_static(b"abc")));
        assert_eq!(body.next().await?, None);

        let mut body = ResponseBody::Stream(Box::new(Chunks(vec!["a", "b"])));
        assert_eq!(body.next().await?, Some(Bytes::from_static(b"a")));
        assert_eq!(body.next().await?, Some(Bytes::from_static(b"b")));
        assert_eq!(body.next().await?, None);
        Ok(())
    }

    #[derive(Debug, Default, PartialEq)]
    struct Output {
        name: Option<String>,
        length: Option<i64>,
        modified: Option<OffsetDateTime>,
        metadata: Option<HashMap<String, String>>,
    }

    impl json::JsonStructure for Output {
        fn unmarshall_member(
            &mut self,
            name: &str,
            ctx: &mut json::JsonContext,
        ) -> Result<(), json::UnmarshallError> {
            if name == "name" {
                self.name = ctx.field()?;
            }
            Ok(())
        }
    }

    impl ResponseHeaders for Output {
        fn read_headers(&mut self, headers: &HeaderMap) -> gax::Result<()> {
            self.length = header_value(headers, "content-length")?;
            self.modified = header_value(headers, "last-modified")?;
            self.metadata = prefixed_headers(headers, "x-amz-meta-");
            Ok(())
        }
    }

    #[test]
    fn header_values() -> TestResult {
        let h = headers(&[
            ("Content-Length", "42"),
            ("Last-Modified", "Sun, 25 Jan 2015 08:00:00 GMT"),
            ("X-Amz-Meta-Color", "blue"),
            ("x-amz-meta-size", "large"),
        ]);
        let mut output = Output::default();
        output.read_headers(&h)?;
        assert_eq!(output.length, Some(42));
        assert_eq!(
            output.modified,
            Some(time::macros::datetime!(2015-01-25 08:00:00 UTC))
        );
        let want = HashMap::from([
            ("color".to_string(), "blue".to_string()),
            ("size".to_string(), "large".to_string()),
        ]);
        assert_eq!(output.metadata, Some(want));
        Ok(())
    }

    #[test]
    fn header_value_errors() {
        let h = headers(&[("Content-Length", "abc"), ("Last-Modified", "yesterday")]);
        let err = header_value::<i64>(&h, "content-length").unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        let err = header_value::<OffsetDateTime>(&h, "last-modified").unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        let got = header_value::<i64>(&h, "x-missing").unwrap();
        assert_eq!(got, None);
    }

    #[tokio::test]
    async fn json_handler() -> TestResult {
        let response = RawResponse::new(
            200,
            headers(&[("content-length", "17")]),
            ResponseBody::Full(Bytes::from_static(br#"{"name": "hello"}"#)),
        );
        let handler = JsonHandler::<Output>::new();
        assert!(!handler.needs_connection_left_open());
        let got = handler.handle(response).await?;
        assert_eq!(got.name.as_deref(), Some("hello"));
        assert_eq!(got.length, Some(17));
        Ok(())
    }

    #[tokio::test]
    async fn json_handler_empty_body() -> TestResult {
        let response = RawResponse::new(200, HeaderMap::new(), ResponseBody::Empty);
        let got = JsonHandler::<Output>::new().handle(response).await?;
        assert_eq!(got, Output::default());
        Ok(())
    }

    #[tokio::test]
    async fn json_handler_bad_body() {
        let response = RawResponse::new(
            200,
            HeaderMap::new(),
            ResponseBody::Full(Bytes::from_static(br#"{"name": "#)),
        );
        let err = JsonHandler::<Output>::new()
            .handle(response)
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
    }

    #[derive(Debug, Default, PartialEq)]
    struct Tagged {
        key: Option<String>,
    }

    impl xml::XmlStructure for Tagged {
        fn unmarshall_member(
            &mut self,
            name: &str,
            ctx: &mut xml::XmlContext,
        ) -> Result<(), xml::UnmarshallError> {
            if name == "Key" {
                self.key = ctx.field()?;
            }
            Ok(())
        }
    }

    impl ResponseHeaders for Tagged {}

    #[tokio::test]
    async fn xml_handler() -> TestResult {
        let body = "<ActionResponse><ActionResult><Key>k</Key></ActionResult></ActionResponse>";
        let response = RawResponse::new(
            200,
            HeaderMap::new(),
            ResponseBody::Full(Bytes::from_static(body.as_bytes())),
        );
        let got = XmlHandler::<Tagged>::with_wrapper("ActionResult")
            .handle(response)
            .await?;
        assert_eq!(got.key.as_deref(), Some("k"));

        let body = "<Root><Key>r</Key></Root>";
        let response = RawResponse::new(
            200,
            HeaderMap::new(),
            ResponseBody::Full(Bytes::from_static(body.as_bytes())),
        );
        let got = XmlHandler::<Tagged>::new().handle(response).await?;
        assert_eq!(got.key.as_deref(), Some("r"));
        Ok(())
    }

    #[tokio::test]
    async fn headers_handler() -> TestResult {
        let response = RawResponse::new(
            200,
            headers(&[("content-length", "1024")]),
            ResponseBody::Empty,
        );
        let got = HeadersHandler::<Output>::new().handle(response).await?;
        assert_eq!(got.length, Some(1024));
        assert_eq!(got.name, None);
        Ok(())
    }

    #[derive(Debug)]
    struct Download {
        length: Option<i64>,
        body: ResponseBody,
    }

    impl StreamingOutput for Download {
        fn from_stream(headers: &HeaderMap, body: ResponseBody) -> gax::Result<Self> {
            Ok(Self {
                length: header_value(headers, "content-length")?,
                body,
            })
        }
    }

    #[tokio::test]
    async fn streaming_handler() -> TestResult {
        let handler = StreamingHandler::<Download>::new();
        assert!(handler.needs_connection_left_open());
        let response = RawResponse::new(
            200,
            headers(&[("content-length", "6")]),
            ResponseBody::Stream(Box::new(Chunks(vec!["abc", "def"]))),
        );
        let got = handler.handle(response).await?;
        assert_eq!(got.length, Some(6));
        assert_eq!(got.body.collect().await?, Bytes::from_static(b"abcdef"));
        Ok(())
    }

    #[test]
    fn raw_response() {
        let response = RawResponse::new(204, HeaderMap::new(), ResponseBody::Empty);
        assert!(response.is_success());
        assert_eq!(response.status(), 204);
        let response = RawResponse::new(301, HeaderMap::new(), ResponseBody::Empty);
        assert!(!response.is_success());
    }
}
