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

//! Errors and error details returned by service operations.
//!
//! The Cloud SDK for Rust distinguishes between errors detected while
//! trying to build a request (e.g. a missing request), errors trying to
//! send or receive the request (e.g. the connection is dropped before the
//! full response), and errors returned by the service itself.
//!
//! # Examples
//!
//! ```
//! use cloudsdk_gax::error::{Error, Fault};
//! fn handle_error(e: Error) {
//!     if let Some(e) = e.service_error() {
//!         if e.fault() == Fault::Service {
//!             println!("the service failed with {:?}, maybe try again", e.code());
//!         }
//!     }
//! }
//! ```

mod core_error;
mod service_error;
pub use core_error::*;
pub use service_error::*;
