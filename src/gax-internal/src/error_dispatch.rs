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

//! Convert error responses into [gax::error::Error].
//!
//! Each service declares the error codes it models in a static table of
//! [ErrorShape]. The code of an error response comes from the
//! `x-amzn-ErrorType` header if present, otherwise from the body. The first
//! shape with a matching code wins. Responses with unknown codes still
//! produce a service error, classified by their HTTP status.

use crate::headers;
use crate::operation::Protocol;
use crate::xml::{XmlContext, XmlEvent};
use gax::error::{Error, ServiceErrorBuilder};
use http::{HeaderMap, StatusCode};
use serde_json::{Map, Value};

/// An error modeled by a service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ErrorShape {
    /// The error code, e.g. `ResourceNotFoundException` or `NoSuchKey`.
    pub code: &'static str,
    /// The body fields copied into the error details.
    pub fields: &'static [&'static str],
}

impl ErrorShape {
    pub const fn new(code: &'static str) -> Self {
        Self { code, fields: &[] }
    }

    pub const fn with_fields(mut self, fields: &'static [&'static str]) -> Self {
        self.fields = fields;
        self
    }
}

/// Selects and populates the error for a failed response.
#[derive(Clone, Copy, Debug)]
pub struct ErrorDispatcher {
    protocol: Protocol,
    shapes: &'static [ErrorShape],
}

impl ErrorDispatcher {
    pub const fn new(protocol: Protocol, shapes: &'static [ErrorShape]) -> Self {
        Self { protocol, shapes }
    }

    /// Converts a failed response into an error.
    ///
    /// `body` is `None` when the response has no body, e.g. for `HEAD`
    /// requests. Bodies that cannot be parsed are treated the same way.
    pub fn dispatch(&self, status: u16, headers: &HeaderMap, body: Option<&[u8]>) -> Error {
        let fields = body
            .filter(|b| !b.iter().all(u8::is_ascii_whitespace))
            .and_then(|b| match self.parse(b) {
                Ok(fields) => Some(fields),
                Err(e) => {
                    tracing::warn!(
                        status,
                        "cannot parse error response body, ignoring it: {e}"
                    );
                    None
                }
            })
            .unwrap_or_default();

        let code = headers::error_type(headers)
            .map(str::to_string)
            .or_else(|| body_code(&fields));
        let shape = code
            .as_deref()
            .and_then(|c| self.shapes.iter().find(|s| s.code == c));

        let mut builder = ServiceErrorBuilder::new(status).with_headers(headers.clone());
        if let Some(c) = code {
            builder = builder.with_code(c);
        }
        let message = first_string(&fields, &["message", "Message", "errorMessage"]).or_else(|| {
            StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .map(str::to_string)
        });
        if let Some(m) = message {
            builder = builder.with_message(m);
        }
        let request_id = first_string(&fields, &["RequestId", "RequestID"])
            .or_else(|| headers::request_id(headers).map(str::to_string));
        if let Some(id) = request_id {
            builder = builder.with_request_id(id);
        }
        let extended = first_string(&fields, &["HostId"])
            .or_else(|| headers::extended_request_id(headers).map(str::to_string));
        if let Some(id) = extended {
            builder = builder.with_extended_request_id(id);
        }
        if let Some(shape) = shape {
            builder = builder.with_modeled(true);
            for name in shape.fields {
                if let Some(v) = fields.get(*name) {
                    builder = builder.with_detail(*name, v.clone());
                }
            }
        }
        Error::service(builder.build())
    }

    fn parse(&self, body: &[u8]) -> Result<Map<String, Value>, Box<dyn std::error::Error>> {
        match self.protocol {
            Protocol::Json { .. } | Protocol::RestJson => match serde_json::from_slice(body)? {
                Value::Object(fields) => Ok(fields),
                other => Err(format!("expected a JSON object, got {other}").into()),
            },
            Protocol::Query | Protocol::RestXml => Ok(xml_fields(body)?),
        }
    }
}

/// Collects the text of every element, at any depth.
///
/// The first occurrence of each element name wins. This finds `Error/Code`
/// in `ErrorResponse/Error`, `Response/Errors/Error` and bare `Error`
/// documents alike.
fn xml_fields(body: &[u8]) -> Result<Map<String, Value>, crate::xml::UnmarshallError> {
    let mut ctx = XmlContext::new(body);
    let mut fields = Map::new();
    loop {
        match ctx.next_event()? {
            XmlEvent::Text(text) if text.trim().is_empty() => {}
            XmlEvent::Text(text) => {
                if let Some(name) = ctx.current_parent() {
                    if !fields.contains_key(name) {
                        fields.insert(name.to_string(), Value::String(text));
                    }
                }
            }
            XmlEvent::Eof => break,
            _ => {}
        }
    }
    Ok(fields)
}

fn body_code(fields: &Map<String, Value>) -> Option<String> {
    if let Some(t) = fields.get("__type").and_then(Value::as_str) {
        let code = t.rsplit('#').next().unwrap_or(t);
        let code = code.split(':').next().unwrap_or(code);
        return Some(code.to_string());
    }
    first_string(fields, &["code", "Code"])
}

fn first_string(fields: &Map<String, Value>, names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|n| fields.get(*n).and_then(Value::as_str))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::Fault;
    use http::HeaderValue;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const LOGS_ERRORS: &[ErrorShape] = &[
        ErrorShape::new("ResourceNotFoundException"),
        ErrorShape::new("InvalidSequenceTokenException").with_fields(&["expectedSequenceToken"]),
    ];
    const OBJECT_ERRORS: &[ErrorShape] = &[
        ErrorShape::new("NoSuchKey").with_fields(&["Key"]),
        ErrorShape::new("NoSuchBucket").with_fields(&["BucketName"]),
    ];

    static JSON: ErrorDispatcher =
        ErrorDispatcher::new(Protocol::Json { version: "1.1" }, LOGS_ERRORS);
    static XML: ErrorDispatcher = ErrorDispatcher::new(Protocol::RestXml, OBJECT_ERRORS);
    static QUERY: ErrorDispatcher = ErrorDispatcher::new(Protocol::Query, &[]);

    #[test_case(503, Fault::Service)]
    #[test_case(500, Fault::Service)]
    #[test_case(404, Fault::Client)]
    #[test_case(400, Fault::Client)]
    fn unknown_code_fault(status: u16, want: Fault) {
        let body = br#"{"__type": "SomethingNew", "message": "m"}"#;
        let err = JSON.dispatch(status, &HeaderMap::new(), Some(&body[..]));
        assert_eq!(err.fault(), Some(want), "{err:?}");
        let svc = err.service_error().unwrap();
        assert_eq!(svc.code(), Some("SomethingNew"));
        assert!(!svc.is_modeled());
        assert_eq!(svc.status_code(), status);
    }

    #[test]
    fn json_type_with_prefix() {
        let body = br#"{
            "__type": "com.amazonaws.logs#InvalidSequenceTokenException",
            "message": "The given sequence token is invalid.",
            "expectedSequenceToken": "4958"
        }"#;
        let err = JSON.dispatch(400, &HeaderMap::new(), Some(&body[..]));
        let svc = err.service_error().unwrap();
        assert_eq!(svc.code(), Some("InvalidSequenceTokenException"));
        assert!(svc.is_modeled());
        assert_eq!(svc.message(), Some("The given sequence token is invalid."));
        assert_eq!(
            svc.detail("expectedSequenceToken"),
            Some(&Value::String("4958".into()))
        );
        assert_eq!(svc.fault(), Fault::Client);
    }

    #[test]
    fn header_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-amzn-errortype",
            HeaderValue::from_static("ResourceNotFoundException:http://internal.example.com/"),
        );
        headers.insert("x-amzn-requestid", HeaderValue::from_static("req-123"));
        let body = br#"{"__type": "InvalidSequenceTokenException", "Message": "gone"}"#;
        let err = JSON.dispatch(400, &headers, Some(&body[..]));
        let svc = err.service_error().unwrap();
        assert_eq!(svc.code(), Some("ResourceNotFoundException"));
        assert!(svc.is_modeled());
        assert_eq!(svc.message(), Some("gone"));
        assert_eq!(svc.request_id(), Some("req-123"));
        assert_eq!(err.request_id(), Some("req-123"));
    }

    #[test]
    fn json_code_field() {
        let body = br#"{"code": "ResourceNotFoundException"}"#;
        let err = JSON.dispatch(400, &HeaderMap::new(), Some(&body[..]));
        let svc = err.service_error().unwrap();
        assert_eq!(svc.code(), Some("ResourceNotFoundException"));
        assert!(svc.is_modeled());
        // Without a message in the body, use the HTTP reason phrase.
        assert_eq!(svc.message(), Some("Bad Request"));
    }

    #[test]
    fn rest_xml_error() {
        let body = br#"<?xml version="1.0" encoding="UTF-8"?>
            <Error>
                <Code>NoSuchKey</Code>
                <Message>The specified key does not exist.</Message>
                <Key>photos/a.jpg</Key>
                <RequestId>4442587FB7D0A2F9</RequestId>
                <HostId>host-id-value</HostId>
            </Error>"#;
        let err = XML.dispatch(404, &HeaderMap::new(), Some(&body[..]));
        let svc = err.service_error().unwrap();
        assert_eq!(svc.code(), Some("NoSuchKey"));
        assert!(svc.is_modeled());
        assert_eq!(svc.message(), Some("The specified key does not exist."));
        assert_eq!(svc.request_id(), Some("4442587FB7D0A2F9"));
        assert_eq!(svc.extended_request_id(), Some("host-id-value"));
        assert_eq!(svc.detail("Key"), Some(&Value::String("photos/a.jpg".into())));
        assert_eq!(svc.fault(), Fault::Client);
    }

    #[test_case(br#"<ErrorResponse><Error><Type>Sender</Type><Code>AlreadyExists</Code><Message>m</Message></Error><RequestId>r1</RequestId></ErrorResponse>"#; "error response")]
    #[test_case(br#"<Response><Errors><Error><Code>AlreadyExists</Code><Message>m</Message></Error></Errors><RequestID>r1</RequestID></Response>"#; "errors list")]
    fn query_error_formats(body: &[u8]) {
        let err = QUERY.dispatch(400, &HeaderMap::new(), Some(&body[..]));
        let svc = err.service_error().unwrap();
        assert_eq!(svc.code(), Some("AlreadyExists"));
        assert_eq!(svc.message(), Some("m"));
        assert_eq!(svc.request_id(), Some("r1"));
        assert!(!svc.is_modeled());
    }

    #[test]
    fn no_body() {
        let mut headers = HeaderMap::new();
        headers.insert("x-amz-request-id", HeaderValue::from_static("r2"));
        headers.insert("x-amz-id-2", HeaderValue::from_static("h2"));
        let err = XML.dispatch(404, &headers, None);
        let svc = err.service_error().unwrap();
        assert_eq!(svc.code(), None);
        assert_eq!(svc.message(), Some("Not Found"));
        assert_eq!(svc.request_id(), Some("r2"));
        assert_eq!(svc.extended_request_id(), Some("h2"));
        assert_eq!(svc.fault(), Fault::Client);
        assert_eq!(svc.headers(), &headers);
    }

    #[test_case(b""; "empty")]
    #[test_case(b"  \n"; "whitespace")]
    #[test_case(b"<Error><Code>NoSuchKey</Cod"; "truncated")]
    #[test_case(b"<html>oops</body>"; "mismatched")]
    fn unparseable_body(body: &[u8]) {
        let err = XML.dispatch(503, &HeaderMap::new(), Some(&body[..]));
        let svc = err.service_error().unwrap();
        assert_eq!(svc.code(), None);
        assert_eq!(svc.message(), Some("Service Unavailable"));
        assert_eq!(svc.fault(), Fault::Service);
    }

    #[test_case(b"not json"; "garbage")]
    #[test_case(b"[1, 2]"; "not an object")]
    fn unparseable_json_body(body: &[u8]) {
        let err = JSON.dispatch(500, &HeaderMap::new(), Some(&body[..]));
        let svc = err.service_error().unwrap();
        assert_eq!(svc.code(), None);
        assert_eq!(svc.fault(), Fault::Service);
        assert_eq!(svc.message(), Some("Internal Server Error"));
    }
}
