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

//! Build transport-ready requests from typed requests.
//!
//! [marshall] consumes the [Structure] produced by a generated request type
//! and the [OperationDescriptor] of the operation, and applies the wire
//! conventions of the operation's protocol.

use crate::headers;
use crate::json::{self, JsonWriterError};
use crate::operation::{OperationDescriptor, Protocol};
use crate::query_parameter::{self, format_scalar};
use crate::shape::{Location, Marshall, Member, Structure, Value};
use crate::timestamp::{self, TimestampError};
use crate::uri_template::ENCODED_CHARS;
use crate::xml::{self, XmlWriterError};
use bytes::Bytes;
use gax::error::Error;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use percent_encoding::utf8_percent_encode;
use std::collections::HashMap;

pub(crate) const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

#[derive(thiserror::Error, Debug)]
pub enum MarshallError {
    #[error("invalid argument: the {0} request cannot be null")]
    MissingRequest(&'static str),
    #[error("invalid header name {0:?}")]
    HeaderName(String, #[source] http::header::InvalidHeaderName),
    #[error("invalid value for header {0:?}")]
    HeaderValue(String, #[source] http::header::InvalidHeaderValue),
    #[error("member {0} cannot be sent as a header")]
    UnsupportedHeader(&'static str),
    #[error("member {0} cannot be sent as the request payload")]
    UnsupportedPayload(&'static str),
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
    #[error(transparent)]
    Json(#[from] JsonWriterError),
    #[error(transparent)]
    Xml(#[from] XmlWriterError),
}

impl From<MarshallError> for Error {
    fn from(value: MarshallError) -> Self {
        match value {
            MarshallError::MissingRequest(_) => Error::binding(value),
            _ => Error::ser(value),
        }
    }
}

type Result<T> = std::result::Result<T, MarshallError>;

/// A request ready for the transport.
///
/// Built once per call by [marshall]. The parameters are kept unencoded, the
/// transport renders them as a query string or as a form body.
#[derive(Clone, Debug)]
pub struct WireRequest {
    operation: &'static str,
    method: Method,
    path: String,
    parameters: Vec<(String, Option<String>)>,
    headers: HeaderMap,
    body: Option<Bytes>,
    form_encoded: bool,
    leave_connection_open: bool,
}

impl WireRequest {
    pub fn new(operation: &'static str, method: Method, path: impl Into<String>) -> Self {
        Self {
            operation,
            method,
            path: path.into(),
            parameters: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
            form_encoded: false,
            leave_connection_open: false,
        }
    }

    /// The name of the operation that created this request.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The resource path, already encoded.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn parameters(&self) -> &[(String, Option<String>)] {
        &self.parameters
    }

    /// Returns the first value of parameter `key`.
    ///
    /// The outer `Option` is `None` if the parameter is missing, the inner
    /// one is `None` for bare keys.
    pub fn parameter(&self, key: &str) -> Option<Option<&str>> {
        self.parameters
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_deref())
    }

    pub fn add_parameter<K: Into<String>>(&mut self, key: K, value: Option<String>) {
        self.parameters.push((key.into(), value));
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Sets the body and its `Content-Type` and `Content-Length` headers.
    pub fn set_body(&mut self, body: Bytes, content_type: &'static str) {
        if !self.headers.contains_key(CONTENT_TYPE) {
            self.headers
                .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        self.headers
            .insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
        self.body = Some(body);
    }

    /// If true, the transport must not drain the response body.
    ///
    /// Streaming operations return the body to the application.
    pub fn leave_connection_open(&self) -> bool {
        self.leave_connection_open
    }

    pub fn set_leave_connection_open(&mut self, v: bool) {
        self.leave_connection_open = v;
    }

    /// The parameters, percent-encoded and joined with `&`.
    pub fn query_string(&self) -> String {
        self.parameters
            .iter()
            .map(|(k, v)| {
                let k = utf8_percent_encode(k, ENCODED_CHARS);
                match v {
                    None => k.to_string(),
                    Some(v) => format!("{k}={}", utf8_percent_encode(v, ENCODED_CHARS)),
                }
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// The parameters as an `application/x-www-form-urlencoded` body.
    pub fn form_body(&self) -> String {
        self.query_string()
    }

    /// Sends the parameters as a form body instead of a query string.
    ///
    /// Only the query protocol does this. The body is only produced for POST
    /// requests that carry no other body.
    pub fn set_form_encoded(&mut self, v: bool) {
        self.form_encoded = v;
    }

    /// Returns true if the parameters are sent as a form body.
    pub fn uses_form_body(&self) -> bool {
        self.form_encoded
            && self.method == Method::POST
            && self.body.is_none()
            && !self.parameters.is_empty()
    }

    /// Converts the request into a [http::Request] against `endpoint`.
    pub fn into_http(mut self, endpoint: &str) -> gax::Result<http::Request<Bytes>> {
        let mut uri = format!("{}{}", endpoint.trim_end_matches('/'), self.path);
        let body = if self.uses_form_body() {
            let form = Bytes::from(self.form_body());
            self.set_body(form, FORM_CONTENT_TYPE);
            self.body.take().unwrap_or_default()
        } else {
            if !self.parameters.is_empty() {
                uri.push('?');
                uri.push_str(&self.query_string());
            }
            self.body.take().unwrap_or_default()
        };
        let mut request = http::Request::builder()
            .method(self.method)
            .uri(uri)
            .body(body)
            .map_err(Error::binding)?;
        *request.headers_mut() = self.headers;
        Ok(request)
    }
}

/// Builds the wire request for `operation`.
///
/// Fails with a [binding][Error::is_binding] error if `request` is `None`,
/// and with a [serialization][Error::is_serialization] error if any member
/// cannot be encoded. Either way, nothing is sent.
pub fn marshall<R>(operation: &OperationDescriptor, request: Option<&R>) -> gax::Result<WireRequest>
where
    R: Marshall + ?Sized,
{
    let request = request.ok_or(MarshallError::MissingRequest(operation.name()))?;
    let structure = request.marshall();
    let wire = match operation.protocol() {
        Protocol::Query => marshall_query(operation, &structure)?,
        Protocol::Json { version } => marshall_json(operation, version, &structure)?,
        Protocol::RestJson | Protocol::RestXml => marshall_rest(operation, &structure)?,
    };
    Ok(wire)
}

fn marshall_query(operation: &OperationDescriptor, structure: &Structure) -> Result<WireRequest> {
    let mut wire = WireRequest::new(operation.name(), operation.method().clone(), operation.uri());
    wire.set_form_encoded(true);
    wire.add_parameter("Action", Some(operation.name().to_string()));
    wire.add_parameter("Version", Some(operation.version().to_string()));
    for (k, v) in query_parameter::encode(structure)? {
        wire.add_parameter(k, Some(v));
    }
    Ok(wire)
}

fn marshall_json(
    operation: &OperationDescriptor,
    version: &'static str,
    structure: &Structure,
) -> Result<WireRequest> {
    let mut wire = WireRequest::new(operation.name(), operation.method().clone(), operation.uri());
    if let Some(target) = operation.target() {
        let value = HeaderValue::from_str(&target)
            .map_err(|e| MarshallError::HeaderValue(headers::TARGET.to_string(), e))?;
        wire.headers_mut()
            .insert(HeaderName::from_static(headers::TARGET), value);
    }
    let body = json::to_bytes(structure)?;
    wire.set_body(body, json_content_type(version));
    Ok(wire)
}

fn json_content_type(version: &str) -> &'static str {
    match version {
        "1.0" => "application/x-amz-json-1.0",
        _ => "application/x-amz-json-1.1",
    }
}

fn marshall_rest(operation: &OperationDescriptor, structure: &Structure) -> Result<WireRequest> {
    let template = operation.uri_template();
    let mut labels = HashMap::new();
    let mut extra_parameters = Vec::new();
    let mut headers = HeaderMap::new();
    let mut payload = None;
    let mut body = Structure::new();
    let mut has_body = false;
    for (member, value) in structure.iter() {
        match member.location() {
            Location::Uri => {
                let v = format_scalar(value)?.unwrap_or_default();
                labels.insert(member.name().to_string(), v);
            }
            Location::Querystring if template.has_query_label(member.name()) => {
                let v = format_scalar(value)?.unwrap_or_default();
                labels.insert(member.name().to_string(), v);
            }
            Location::Querystring => add_querystring(&mut extra_parameters, member, value)?,
            Location::Header => add_header(&mut headers, member, value)?,
            Location::Payload => payload = Some((member, value)),
            Location::Body => {
                body = body.member(*member, value);
                has_body = true;
            }
        }
    }

    let resolved = template.resolve(&labels);
    let mut wire = WireRequest::new(operation.name(), operation.method().clone(), resolved.path);
    for (k, v) in resolved.parameters.into_iter().chain(extra_parameters) {
        wire.add_parameter(k, v);
    }
    *wire.headers_mut() = headers;

    let xml = operation.protocol() == Protocol::RestXml;
    match payload {
        Some((_, Value::Blob(b))) => {
            wire.set_body(b.clone(), "application/octet-stream");
        }
        Some((_, Value::String(s))) => {
            wire.set_body(Bytes::from(s.clone()), "text/plain; charset=utf-8");
        }
        Some((member, Value::Structure(s))) if xml => {
            let b = xml::to_bytes(member.name(), operation.xml_namespace(), s)?;
            wire.set_body(b, "application/xml");
        }
        Some((_, Value::Structure(s))) => {
            wire.set_body(json::to_bytes(s)?, "application/json");
        }
        Some((member, _)) => return Err(MarshallError::UnsupportedPayload(member.name())),
        None if !has_body => {}
        None if xml => {
            let root = format!("{}Request", operation.name());
            let b = xml::to_bytes(&root, operation.xml_namespace(), &body)?;
            wire.set_body(b, "application/xml");
        }
        None => {
            wire.set_body(json::to_bytes(&body)?, "application/json");
        }
    }
    Ok(wire)
}

fn add_querystring(
    parameters: &mut Vec<(String, Option<String>)>,
    member: &Member,
    value: &Value,
) -> Result<()> {
    match value {
        Value::List(list) => {
            for v in list.iter().flatten() {
                if let Some(s) = format_scalar(v)? {
                    parameters.push((member.name().to_string(), Some(s)));
                }
            }
        }
        // Maps bound to the query string contribute one parameter per entry.
        Value::Map(entries) => {
            for (k, v) in entries {
                let Some(v) = v else {
                    continue;
                };
                if let Some(s) = format_scalar(v)? {
                    parameters.push((k.clone(), Some(s)));
                }
            }
        }
        scalar => {
            if let Some(s) = format_scalar(scalar)? {
                parameters.push((member.name().to_string(), Some(s)));
            }
        }
    }
    Ok(())
}

fn add_header(headers: &mut HeaderMap, member: &Member, value: &Value) -> Result<()> {
    match value {
        Value::Map(entries) => {
            for (k, v) in entries {
                let Some(v) = v else {
                    continue;
                };
                let name = format!("{}{k}", member.name());
                insert_header(headers, &name, header_scalar(member, v)?)?;
            }
        }
        Value::List(list) => {
            let values = list
                .iter()
                .flatten()
                .map(|v| header_scalar(member, v))
                .collect::<Result<Vec<_>>>()?;
            insert_header(headers, member.name(), values.join(","))?;
        }
        scalar => insert_header(headers, member.name(), header_scalar(member, scalar)?)?,
    }
    Ok(())
}

/// Headers use HTTP-dates for timestamps.
fn header_scalar(member: &Member, value: &Value) -> Result<String> {
    match value {
        Value::Timestamp(t) => Ok(timestamp::http_date(t)?),
        v => format_scalar(v)?.ok_or(MarshallError::UnsupportedHeader(member.name())),
    }
}

fn insert_header(headers: &mut HeaderMap, name: &str, value: String) -> Result<()> {
    let header = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| MarshallError::HeaderName(name.to_string(), e))?;
    let value =
        HeaderValue::from_str(&value).map_err(|e| MarshallError::HeaderValue(name.to_string(), e))?;
    headers.append(header, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;
    use time::macros::datetime;

    type TestResult = anyhow::Result<()>;

    static DESCRIBE: OperationDescriptor =
        OperationDescriptor::query("DescribeAutoScalingGroups", "2011-01-01");
    static GET_LOG_EVENTS: OperationDescriptor =
        OperationDescriptor::json("GetLogEvents", "2014-03-28", "1.1", "Logs_20140328");
    static LIST_THINGS: OperationDescriptor =
        OperationDescriptor::rest_json("ListThings", "2020-01-01", Method::GET, "/things?Marker={Marker}");
    static GET_OBJECT: OperationDescriptor =
        OperationDescriptor::rest_xml("GetObject", "2006-03-01", Method::GET, "/{Bucket}/{Key+}");
    static PUT_TAGGING: OperationDescriptor =
        OperationDescriptor::rest_xml("PutBucketTagging", "2006-03-01", Method::PUT, "/{Bucket}?tagging")
            .with_xml_namespace("http://s3.amazonaws.com/doc/2006-03-01/");
    static CREATE_THING: OperationDescriptor =
        OperationDescriptor::rest_xml("CreateThing", "2020-01-01", Method::POST, "/a/{X}/b");

    struct Request(Structure);

    impl Marshall for Request {
        fn marshall(&self) -> Structure {
            self.0.clone()
        }
    }

    struct Tag {
        key: &'static str,
        value: &'static str,
    }

    impl Marshall for Tag {
        fn marshall(&self) -> Structure {
            Structure::new()
                .member(Member::body("Key"), self.key)
                .member(Member::body("Value"), self.value)
        }
    }

    struct Tagging(Vec<Tag>);

    impl Marshall for Tagging {
        fn marshall(&self) -> Structure {
            Structure::new().member(Member::body("TagSet").with_list_tag("Tag"), &self.0)
        }
    }

    fn body_text(wire: &WireRequest) -> String {
        wire.body()
            .map(|b| String::from_utf8_lossy(b).into_owned())
            .unwrap_or_default()
    }

    #[test]
    fn missing_request() {
        let got = marshall::<Request>(&DESCRIBE, None);
        let err = got.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains("DescribeAutoScalingGroups"), "{err}");
    }

    #[test]
    fn query() -> TestResult {
        let request = Request(
            Structure::new()
                .member(
                    Member::body("AutoScalingGroupNames"),
                    &vec!["a b".to_string(), "c".to_string()],
                )
                .member(Member::body("MaxRecords"), &10),
        );
        let wire = marshall(&DESCRIBE, Some(&request))?;
        assert_eq!(wire.method(), Method::POST);
        assert_eq!(wire.path(), "/");
        assert_eq!(wire.operation(), "DescribeAutoScalingGroups");
        assert_eq!(wire.parameter("Action"), Some(Some("DescribeAutoScalingGroups")));
        assert_eq!(wire.parameter("Version"), Some(Some("2011-01-01")));
        assert_eq!(
            wire.query_string(),
            "Action=DescribeAutoScalingGroups&Version=2011-01-01&AutoScalingGroupNames.member.1=a%20b&AutoScalingGroupNames.member.2=c&MaxRecords=10"
        );
        assert!(wire.body().is_none());
        assert!(wire.uses_form_body());
        Ok(())
    }

    #[test]
    fn query_into_http() -> TestResult {
        let request = Request(Structure::new().member(Member::body("MaxRecords"), &10));
        let wire = marshall(&DESCRIBE, Some(&request))?;
        let http = wire.into_http("https://autoscaling.example.com/")?;
        assert_eq!(http.method(), Method::POST);
        assert_eq!(http.uri(), "https://autoscaling.example.com/");
        let want = "Action=DescribeAutoScalingGroups&Version=2011-01-01&MaxRecords=10";
        assert_eq!(http.body().as_ref(), want.as_bytes());
        assert_eq!(
            http.headers().get(CONTENT_TYPE),
            Some(&HeaderValue::from_static(FORM_CONTENT_TYPE))
        );
        assert_eq!(
            http.headers().get(CONTENT_LENGTH),
            Some(&HeaderValue::from(want.len()))
        );
        Ok(())
    }

    #[test]
    fn json_rpc() -> TestResult {
        let request = Request(
            Structure::new()
                .member(Member::body("logGroupName"), "g")
                .member(Member::body("startFromHead"), &true),
        );
        let wire = marshall(&GET_LOG_EVENTS, Some(&request))?;
        assert_eq!(wire.method(), Method::POST);
        assert_eq!(
            wire.headers().get("x-amz-target"),
            Some(&HeaderValue::from_static("Logs_20140328.GetLogEvents"))
        );
        assert_eq!(
            wire.headers().get(CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/x-amz-json-1.1"))
        );
        assert_eq!(body_text(&wire), r#"{"logGroupName":"g","startFromHead":true}"#);
        assert_eq!(
            wire.headers().get(CONTENT_LENGTH),
            Some(&HeaderValue::from(body_text(&wire).len()))
        );
        assert!(!wire.uses_form_body());
        Ok(())
    }

    #[test]
    fn json_rpc_empty_request() -> TestResult {
        let wire = marshall(&GET_LOG_EVENTS, Some(&Request(Structure::new())))?;
        assert_eq!(body_text(&wire), "{}");
        Ok(())
    }

    #[test]
    fn empty_dynamic_query() -> TestResult {
        for marker in [None, Some(String::new())] {
            let request = Request(Structure::new().member(Member::querystring("Marker"), &marker));
            let wire = marshall(&LIST_THINGS, Some(&request))?;
            assert_eq!(wire.path(), "/things");
            assert_eq!(wire.parameter("Marker"), None);
            let http = wire.into_http("https://example.com")?;
            assert_eq!(http.uri(), "https://example.com/things");
        }
        let request = Request(Structure::new().member(Member::querystring("Marker"), "m 1"));
        let http = marshall(&LIST_THINGS, Some(&request))?.into_http("https://example.com")?;
        assert_eq!(http.uri(), "https://example.com/things?Marker=m%201");
        Ok(())
    }

    #[test]
    fn double_slash_collapse() -> TestResult {
        let request = Request(Structure::new().member(Member::uri("X"), ""));
        let wire = marshall(&CREATE_THING, Some(&request))?;
        assert_eq!(wire.path(), "/a/b");
        assert!(wire.body().is_none());
        Ok(())
    }

    #[test]
    fn rest_path_and_headers() -> TestResult {
        let metadata = BTreeMap::from([("color".to_string(), "blue".to_string())]);
        let request = Request(
            Structure::new()
                .member(Member::uri("Bucket"), "my-bucket")
                .member(Member::uri("Key"), "photos/2015 jan/a.jpg")
                .member(Member::header("If-Match"), "\"etag\"")
                .member(
                    Member::header("If-Modified-Since"),
                    &datetime!(2015-01-25 08:00:00 UTC),
                )
                .member(Member::header("x-amz-meta-"), &metadata)
                .member(
                    Member::header("x-amz-list"),
                    &vec!["a".to_string(), "b".to_string()],
                )
                .member(Member::querystring("versionId"), "v1"),
        );
        let wire = marshall(&GET_OBJECT, Some(&request))?;
        assert_eq!(wire.method(), Method::GET);
        assert_eq!(wire.path(), "/my-bucket/photos/2015%20jan/a.jpg");
        assert_eq!(wire.parameter("versionId"), Some(Some("v1")));
        let h = wire.headers();
        assert_eq!(h.get("if-match"), Some(&HeaderValue::from_static("\"etag\"")));
        assert_eq!(
            h.get("if-modified-since"),
            Some(&HeaderValue::from_static("Sun, 25 Jan 2015 08:00:00 GMT"))
        );
        assert_eq!(h.get("x-amz-meta-color"), Some(&HeaderValue::from_static("blue")));
        assert_eq!(h.get("x-amz-list"), Some(&HeaderValue::from_static("a,b")));
        assert!(wire.body().is_none());
        assert!(!wire.uses_form_body());
        Ok(())
    }

    #[test]
    fn rest_xml_payload() -> TestResult {
        let tagging = Tagging(vec![Tag {
            key: "env",
            value: "prod",
        }]);
        let request = Request(
            Structure::new()
                .member(Member::uri("Bucket"), "b")
                .member(Member::payload("Tagging"), &tagging),
        );
        let wire = marshall(&PUT_TAGGING, Some(&request))?;
        assert_eq!(wire.path(), "/b");
        assert_eq!(wire.parameters(), &[("tagging".to_string(), None)]);
        assert_eq!(
            body_text(&wire),
            r#"<Tagging xmlns="http://s3.amazonaws.com/doc/2006-03-01/"><TagSet><Tag><Key>env</Key><Value>prod</Value></Tag></TagSet></Tagging>"#
        );
        assert_eq!(
            wire.headers().get(CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/xml"))
        );
        let http = wire.into_http("https://s3.example.com")?;
        assert_eq!(http.uri(), "https://s3.example.com/b?tagging");
        Ok(())
    }

    #[test]
    fn rest_post_without_body_keeps_query() -> TestResult {
        static CREATE_UPLOAD: OperationDescriptor = OperationDescriptor::rest_xml(
            "CreateMultipartUpload",
            "2006-03-01",
            Method::POST,
            "/{Bucket}/{Key+}?uploads",
        );
        let request = Request(
            Structure::new()
                .member(Member::uri("Bucket"), "b")
                .member(Member::uri("Key"), "k")
                .member(Member::querystring("versionId"), "v1"),
        );
        let wire = marshall(&CREATE_UPLOAD, Some(&request))?;
        assert!(!wire.uses_form_body());
        let http = wire.into_http("https://example.com")?;
        assert_eq!(http.uri(), "https://example.com/b/k?uploads&versionId=v1");
        assert!(http.body().is_empty());
        assert_eq!(http.headers().get(CONTENT_TYPE), None);

        static START_JOB: OperationDescriptor = OperationDescriptor::rest_json(
            "StartJob",
            "2020-01-01",
            Method::POST,
            "/jobs?Name={Name}",
        );
        let request = Request(Structure::new().member(Member::querystring("Name"), "j"));
        let http = marshall(&START_JOB, Some(&request))?.into_http("https://example.com")?;
        assert_eq!(http.uri(), "https://example.com/jobs?Name=j");
        assert!(http.body().is_empty());
        Ok(())
    }

    #[test]
    fn rest_blob_payload() -> TestResult {
        let request = Request(
            Structure::new()
                .member(Member::uri("Bucket"), "b")
                .member(Member::header("Content-Type"), "image/png")
                .member(Member::payload("Body"), &Bytes::from_static(b"\x89PNG")),
        );
        let wire = marshall(&CREATE_THING, Some(&request))?;
        assert_eq!(wire.body(), Some(&Bytes::from_static(b"\x89PNG")));
        assert_eq!(
            wire.headers().get(CONTENT_TYPE),
            Some(&HeaderValue::from_static("image/png"))
        );
        assert_eq!(wire.headers().get(CONTENT_LENGTH), Some(&HeaderValue::from(4)));
        Ok(())
    }

    #[test]
    fn rest_xml_body_members() -> TestResult {
        let request = Request(
            Structure::new()
                .member(Member::uri("X"), "x")
                .member(Member::body("Name"), "n"),
        );
        let wire = marshall(&CREATE_THING, Some(&request))?;
        assert_eq!(body_text(&wire), "<CreateThingRequest><Name>n</Name></CreateThingRequest>");
        Ok(())
    }

    #[test]
    fn rest_json_body_members() -> TestResult {
        static CREATE: OperationDescriptor =
            OperationDescriptor::rest_json("CreateThing", "2020-01-01", Method::POST, "/things");
        let request = Request(Structure::new().member(Member::body("name"), "n"));
        let wire = marshall(&CREATE, Some(&request))?;
        assert_eq!(body_text(&wire), r#"{"name":"n"}"#);
        assert_eq!(
            wire.headers().get(CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/json"))
        );
        // POST with a body: parameters stay in the query string.
        assert!(!wire.uses_form_body());
        Ok(())
    }

    #[test]
    fn invalid_header_value() {
        let request = Request(Structure::new().member(Member::header("If-Match"), "a\nb"));
        let err = marshall(&GET_OBJECT, Some(&request)).unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
    }

    #[test]
    fn leave_connection_open() {
        let mut wire = WireRequest::new("GetObject", Method::GET, "/b/k");
        assert!(!wire.leave_connection_open());
        wire.set_leave_connection_open(true);
        assert!(wire.leave_connection_open());
    }
}
