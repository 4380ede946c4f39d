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

//! Compare these codes against [ServiceError::code()].
//!
//! Errors for `HEAD` requests have no body, and therefore no code. Use the
//! [HTTP status code][gax::error::ServiceError::status_code] for those.
//!
//! # Example
//! ```
//! # use cloudsdk_objectstore::errors;
//! fn is_missing(e: &cloudsdk_objectstore::Error) -> bool {
//!     e.service_error().is_some_and(|s| {
//!         s.code() == Some(errors::NO_SUCH_KEY) || s.status_code() == 404
//!     })
//! }
//! ```
//!
//! [ServiceError::code()]: gax::error::ServiceError::code

use gaxi::error_dispatch::{ErrorDispatcher, ErrorShape};
use gaxi::operation::Protocol;

/// The specified key does not exist.
///
/// The error details include the `Key`.
pub const NO_SUCH_KEY: &str = "NoSuchKey";

/// The specified bucket does not exist.
///
/// The error details include the `BucketName`.
pub const NO_SUCH_BUCKET: &str = "NoSuchBucket";

/// The bucket has no tag set.
pub const NO_SUCH_TAG_SET: &str = "NoSuchTagSet";

/// The XML document in the request is not well-formed or does not validate.
pub const MALFORMED_XML: &str = "MalformedXML";

const SHAPES: &[ErrorShape] = &[
    ErrorShape::new(NO_SUCH_KEY).with_fields(&["Key"]),
    ErrorShape::new(NO_SUCH_BUCKET).with_fields(&["BucketName"]),
    ErrorShape::new(NO_SUCH_TAG_SET),
    ErrorShape::new(MALFORMED_XML),
];

pub(crate) static DISPATCHER: ErrorDispatcher = ErrorDispatcher::new(Protocol::RestXml, SHAPES);
