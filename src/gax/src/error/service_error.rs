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
use serde_json::{Map, Value};

/// Which side of the call is responsible for a service error.
///
/// The classification depends only on the HTTP status code of the failed
/// response: any status below 500 is a [Fault::Client] error, anything else
/// is a [Fault::Service] error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fault {
    /// The request was rejected because of a problem with the request itself.
    Client,
    /// The service could not complete a request that may be valid.
    Service,
}

impl Fault {
    /// Classifies an HTTP status code.
    ///
    /// # Example
    /// ```
    /// # use cloudsdk_gax::error::Fault;
    /// assert_eq!(Fault::from_status(404), Fault::Client);
    /// assert_eq!(Fault::from_status(503), Fault::Service);
    /// ```
    pub fn from_status(status: u16) -> Self {
        if status < 500 {
            Self::Client
        } else {
            Self::Service
        }
    }

    /// A short name for the fault, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Service => "service",
        }
    }
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An error returned by a cloud service.
///
/// Services report failures with a non-successful HTTP status code and,
/// usually, an error document in the response body. The client libraries
/// match the error code in that document (or in the error type header)
/// against the errors modeled for each service. Modeled errors copy the
/// service-specific fields into [details][ServiceError::details]. When no
/// modeled error matches, or the response has no usable body, the client
/// library returns a generic `ServiceError` built from the status code and
/// headers alone.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ServiceError {
    status_code: u16,
    code: Option<String>,
    message: Option<String>,
    modeled: bool,
    request_id: Option<String>,
    extended_request_id: Option<String>,
    headers: HeaderMap,
    details: Map<String, Value>,
}

impl ServiceError {
    /// The HTTP status code of the failed response.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The client vs. service classification of this error.
    pub fn fault(&self) -> Fault {
        Fault::from_status(self.status_code)
    }

    /// The service error code, e.g. `NoSuchKey` or `ResourceNotFoundException`.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// The human readable message returned by the service.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns true if the error code matched one of the errors modeled for
    /// the service.
    pub fn is_modeled(&self) -> bool {
        self.modeled
    }

    /// The request id assigned by the service, useful when contacting support.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// The extended request id (sometimes called host id), if any.
    pub fn extended_request_id(&self) -> Option<&str> {
        self.extended_request_id.as_deref()
    }

    /// The headers in the failed response.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The service-specific fields for modeled errors.
    pub fn details(&self) -> &Map<String, Value> {
        &self.details
    }

    /// A single service-specific field, if present.
    ///
    /// # Example
    /// ```
    /// # use cloudsdk_gax::error::ServiceErrorBuilder;
    /// let error = ServiceErrorBuilder::new(400)
    ///     .with_code("InvalidSequenceTokenException")
    ///     .with_detail("expectedSequenceToken", "123")
    ///     .build();
    /// assert_eq!(
    ///     error.detail("expectedSequenceToken").and_then(|v| v.as_str()),
    ///     Some("123")
    /// );
    /// ```
    pub fn detail(&self, name: &str) -> Option<&Value> {
        self.details.get(name)
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "the service reports a {} error [{}]",
            self.fault(),
            self.status_code
        )?;
        if let Some(c) = &self.code {
            write!(f, " with code {c}")?;
        }
        if let Some(m) = &self.message {
            write!(f, ": {m}")?;
        }
        if let Some(id) = &self.request_id {
            write!(f, " (request id: {id})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ServiceError {}

/// Not part of the public API, subject to change without notice.
///
/// Creates [ServiceError] values, used by the error dispatcher and in mocks.
#[derive(Clone, Debug)]
pub struct ServiceErrorBuilder {
    inner: ServiceError,
}

impl ServiceErrorBuilder {
    pub fn new(status_code: u16) -> Self {
        Self {
            inner: ServiceError {
                status_code,
                code: None,
                message: None,
                modeled: false,
                request_id: None,
                extended_request_id: None,
                headers: HeaderMap::new(),
                details: Map::new(),
            },
        }
    }

    pub fn build(self) -> ServiceError {
        self.inner
    }

    pub fn with_code<T: Into<String>>(mut self, v: T) -> Self {
        self.inner.code = Some(v.into());
        self
    }

    pub fn with_message<T: Into<String>>(mut self, v: T) -> Self {
        self.inner.message = Some(v.into());
        self
    }

    pub fn with_modeled(mut self, v: bool) -> Self {
        self.inner.modeled = v;
        self
    }

    pub fn with_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.inner.request_id = Some(v.into());
        self
    }

    pub fn with_extended_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.inner.extended_request_id = Some(v.into());
        self
    }

    pub fn with_headers<T: Into<HeaderMap>>(mut self, v: T) -> Self {
        self.inner.headers = v.into();
        self
    }

    pub fn with_detail<K, V>(mut self, k: K, v: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.inner.details.insert(k.into(), v.into());
        self
    }
}
