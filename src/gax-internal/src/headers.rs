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

use http::HeaderMap;

pub(crate) const REQUEST_ID: &str = "x-amzn-requestid";
pub(crate) const REQUEST_ID_ALT: &str = "x-amz-request-id";
pub(crate) const EXTENDED_REQUEST_ID: &str = "x-amz-id-2";
pub(crate) const ERROR_TYPE: &str = "x-amzn-errortype";
pub(crate) const TARGET: &str = "x-amz-target";

pub(crate) fn get<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

pub(crate) fn request_id(headers: &HeaderMap) -> Option<&str> {
    get(headers, REQUEST_ID).or_else(|| get(headers, REQUEST_ID_ALT))
}

pub(crate) fn extended_request_id(headers: &HeaderMap) -> Option<&str> {
    get(headers, EXTENDED_REQUEST_ID)
}

/// The error code from the error type header, without any `:` suffix.
pub(crate) fn error_type(headers: &HeaderMap) -> Option<&str> {
    get(headers, ERROR_TYPE)
        .map(|v| v.split(':').next().unwrap_or(v).trim())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderName, HeaderValue};
    use test_case::test_case;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (k, v) in pairs {
            let name = HeaderName::from_bytes(k.as_bytes()).unwrap();
            map.insert(name, HeaderValue::from_static(v));
        }
        map
    }

    #[test_case(&[("x-amzn-RequestId", "a")], Some("a"); "json services")]
    #[test_case(&[("x-amz-request-id", "b")], Some("b"); "object storage")]
    #[test_case(&[("x-amzn-RequestId", "a"), ("x-amz-request-id", "b")], Some("a"); "both")]
    #[test_case(&[], None; "none")]
    fn request_ids(pairs: &[(&'static str, &'static str)], want: Option<&str>) {
        assert_eq!(request_id(&headers(pairs)), want);
    }

    #[test]
    fn extended() {
        let h = headers(&[("x-amz-id-2", "host")]);
        assert_eq!(extended_request_id(&h), Some("host"));
    }

    #[test_case("ResourceNotFoundException", Some("ResourceNotFoundException"))]
    #[test_case(
        "ValidationException:http://internal.example.com/",
        Some("ValidationException")
    )]
    #[test_case(":suffix-only", None)]
    fn error_types(value: &'static str, want: Option<&str>) {
        let h = headers(&[("x-amzn-ErrorType", value)]);
        assert_eq!(error_type(&h), want);
    }
}
