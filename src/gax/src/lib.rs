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

//! Cloud SDK API extensions.
//!
//! This crate contains the types shared by every client library in the
//! Cloud SDK for Rust: the error type returned by all operations, the
//! response wrapper, per-request options, and the client builder.
//!
//! <div class="warning">
//! Types and functions marked as "Not part of the public API" are used by
//! the generated client libraries. They are <b>not</b> intended for general
//! use and may change without notice.
//! </div>

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping service operations.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

/// Configure the client libraries and individual requests.
pub mod options;

/// Response types.
pub mod response;

/// Builders for the client libraries.
pub mod client_builder;
