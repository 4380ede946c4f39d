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
//! # use cloudsdk_autoscaling::errors;
//! fn is_duplicate(e: &cloudsdk_autoscaling::Error) -> bool {
//!     e.service_error()
//!         .and_then(|s| s.code())
//!         .is_some_and(|c| c == errors::ALREADY_EXISTS)
//! }
//! ```
//!
//! [ServiceError::code()]: gax::error::ServiceError::code

use gaxi::error_dispatch::{ErrorDispatcher, ErrorShape};
use gaxi::operation::Protocol;

/// A resource with the same name already exists.
pub const ALREADY_EXISTS: &str = "AlreadyExists";

/// The quota for this kind of resource has been reached.
pub const LIMIT_EXCEEDED: &str = "LimitExceeded";

/// A pending update to the same resource is still in progress.
pub const RESOURCE_CONTENTION: &str = "ResourceContention";

/// The `NextToken` value is not valid.
pub const INVALID_NEXT_TOKEN: &str = "InvalidNextToken";

const SHAPES: &[ErrorShape] = &[
    ErrorShape::new(ALREADY_EXISTS),
    ErrorShape::new(LIMIT_EXCEEDED),
    ErrorShape::new(RESOURCE_CONTENTION),
    ErrorShape::new(INVALID_NEXT_TOKEN),
];

pub(crate) static DISPATCHER: ErrorDispatcher = ErrorDispatcher::new(Protocol::Query, SHAPES);
