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
//! # Example
//! ```
//! # use cloudsdk_logs::errors;
//! fn is_missing(e: &cloudsdk_logs::Error) -> bool {
//!     e.service_error()
//!         .and_then(|s| s.code())
//!         .is_some_and(|c| c == errors::RESOURCE_NOT_FOUND)
//! }
//! ```
//!
//! [ServiceError::code()]: gax::error::ServiceError::code

use gaxi::error_dispatch::{ErrorDispatcher, ErrorShape};
use gaxi::operation::Protocol;

/// The log group or log stream does not exist.
pub const RESOURCE_NOT_FOUND: &str = "ResourceNotFoundException";

/// The sequence token is not valid.
///
/// The error details include the `expectedSequenceToken`.
pub const INVALID_SEQUENCE_TOKEN: &str = "InvalidSequenceTokenException";

/// The service cannot complete the request.
pub const SERVICE_UNAVAILABLE: &str = "ServiceUnavailableException";

/// A parameter is specified incorrectly.
pub const INVALID_PARAMETER: &str = "InvalidParameterException";

/// The batch of log events was already accepted.
///
/// The error details include the `expectedSequenceToken`.
pub const DATA_ALREADY_ACCEPTED: &str = "DataAlreadyAcceptedException";

const SHAPES: &[ErrorShape] = &[
    ErrorShape::new(RESOURCE_NOT_FOUND),
    ErrorShape::new(INVALID_SEQUENCE_TOKEN).with_fields(&["expectedSequenceToken"]),
    ErrorShape::new(SERVICE_UNAVAILABLE),
    ErrorShape::new(INVALID_PARAMETER),
    ErrorShape::new(DATA_ALREADY_ACCEPTED).with_fields(&["expectedSequenceToken"]),
];

pub(crate) static DISPATCHER: ErrorDispatcher =
    ErrorDispatcher::new(Protocol::Json { version: "1.1" }, SHAPES);
