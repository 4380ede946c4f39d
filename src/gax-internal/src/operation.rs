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

//! Static metadata describing each service operation.

use crate::uri_template::UriTemplate;
use http::Method;
use std::sync::OnceLock;

/// The wire conventions used by an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Protocol {
    /// Form-encoded parameters with `Action` and `Version`, XML responses.
    Query,
    /// JSON-RPC style: `X-Amz-Target` header and a JSON body.
    Json { version: &'static str },
    /// URI templated resources with JSON bodies.
    RestJson,
    /// URI templated resources with XML bodies.
    RestXml,
}

impl Protocol {
    /// Returns true for the protocols with URI templates and header bindings.
    pub fn is_rest(&self) -> bool {
        matches!(self, Self::RestJson | Self::RestXml)
    }

    /// Returns true for the protocols with XML documents in the body.
    pub fn is_xml(&self) -> bool {
        matches!(self, Self::Query | Self::RestXml)
    }
}

/// Describes one API operation.
///
/// Descriptors are created at compile time, one per operation, and shared by
/// all the calls to that operation.
///
/// # Example
/// ```
/// # use cloudsdk_gax_internal::operation::OperationDescriptor;
/// static GET_OBJECT: OperationDescriptor =
///     OperationDescriptor::rest_xml("GetObject", "2006-03-01", http::Method::GET, "/{Bucket}/{Key+}");
/// assert_eq!(GET_OBJECT.name(), "GetObject");
/// ```
#[derive(Debug)]
pub struct OperationDescriptor {
    name: &'static str,
    version: &'static str,
    method: Method,
    uri: &'static str,
    protocol: Protocol,
    target_prefix: Option<&'static str>,
    xml_namespace: Option<&'static str>,
    template: OnceLock<UriTemplate>,
}

impl OperationDescriptor {
    /// An operation using the query protocol.
    pub const fn query(name: &'static str, version: &'static str) -> Self {
        Self::new(name, version, Method::POST, "/", Protocol::Query)
    }

    /// An operation using the JSON-RPC protocol.
    ///
    /// `json_version` is the version of the content type, typically `1.0` or
    /// `1.1`. The `X-Amz-Target` header is `{target_prefix}.{name}`.
    pub const fn json(
        name: &'static str,
        version: &'static str,
        json_version: &'static str,
        target_prefix: &'static str,
    ) -> Self {
        let mut op = Self::new(
            name,
            version,
            Method::POST,
            "/",
            Protocol::Json {
                version: json_version,
            },
        );
        op.target_prefix = Some(target_prefix);
        op
    }

    /// An operation using the REST-JSON protocol.
    pub const fn rest_json(
        name: &'static str,
        version: &'static str,
        method: Method,
        uri: &'static str,
    ) -> Self {
        Self::new(name, version, method, uri, Protocol::RestJson)
    }

    /// An operation using the REST-XML protocol.
    pub const fn rest_xml(
        name: &'static str,
        version: &'static str,
        method: Method,
        uri: &'static str,
    ) -> Self {
        Self::new(name, version, method, uri, Protocol::RestXml)
    }

    /// Sets the namespace attached to the root element of XML request bodies.
    pub const fn with_xml_namespace(mut self, namespace: &'static str) -> Self {
        self.xml_namespace = Some(namespace);
        self
    }

    const fn new(
        name: &'static str,
        version: &'static str,
        method: Method,
        uri: &'static str,
        protocol: Protocol,
    ) -> Self {
        Self {
            name,
            version,
            method,
            uri,
            protocol,
            target_prefix: None,
            xml_namespace: None,
            template: OnceLock::new(),
        }
    }

    /// The operation (or action) name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The API version.
    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The URI template, before compilation.
    pub fn uri(&self) -> &'static str {
        self.uri
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn xml_namespace(&self) -> Option<&'static str> {
        self.xml_namespace
    }

    /// The value of the `X-Amz-Target` header for JSON-RPC operations.
    pub fn target(&self) -> Option<String> {
        self.target_prefix.map(|p| format!("{p}.{}", self.name))
    }

    /// The compiled URI template, compiled on first use.
    pub fn uri_template(&self) -> &UriTemplate {
        self.template.get_or_init(|| UriTemplate::parse(self.uri))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static QUERY: OperationDescriptor =
        OperationDescriptor::query("DescribeAutoScalingGroups", "2011-01-01");
    static JSON: OperationDescriptor =
        OperationDescriptor::json("GetLogEvents", "2014-03-28", "1.1", "Logs_20140328");
    static REST: OperationDescriptor = OperationDescriptor::rest_xml(
        "PutBucketTagging",
        "2006-03-01",
        Method::PUT,
        "/{Bucket}?tagging",
    )
    .with_xml_namespace("http://s3.amazonaws.com/doc/2006-03-01/");

    #[test]
    fn query() {
        assert_eq!(QUERY.name(), "DescribeAutoScalingGroups");
        assert_eq!(QUERY.version(), "2011-01-01");
        assert_eq!(QUERY.method(), Method::POST);
        assert_eq!(QUERY.uri(), "/");
        assert_eq!(QUERY.protocol(), Protocol::Query);
        assert!(QUERY.protocol().is_xml());
        assert!(!QUERY.protocol().is_rest());
        assert_eq!(QUERY.target(), None);
    }

    #[test]
    fn json() {
        assert_eq!(JSON.protocol(), Protocol::Json { version: "1.1" });
        assert_eq!(JSON.target().as_deref(), Some("Logs_20140328.GetLogEvents"));
        assert!(!JSON.protocol().is_xml());
    }

    #[test]
    fn rest() {
        assert_eq!(REST.method(), Method::PUT);
        assert!(REST.protocol().is_rest());
        assert_eq!(
            REST.xml_namespace(),
            Some("http://s3.amazonaws.com/doc/2006-03-01/")
        );
        let template = REST.uri_template();
        assert!(template.has_path_label("Bucket"), "{template:?}");
        // The template is compiled only once.
        assert!(std::ptr::eq(template, REST.uri_template()));
    }
}
