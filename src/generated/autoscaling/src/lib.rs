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

//! Cloud SDK Client Libraries for Rust - Compute Autoscaling
//!
//! This crate contains traits, types, and functions to manage groups of
//! compute instances that scale automatically. Most applications will use
//! the [client::AutoScaling] client.
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases.

pub use gax::Result;
pub use gax::error::Error;

/// The messages and enums that are part of this client library.
pub mod model;

/// Concrete implementations of this client library traits.
pub mod client;

/// Request builders.
pub mod builder;

/// The error codes modeled by the service.
pub mod errors;

mod transport;

/// The default host used by the service.
const DEFAULT_HOST: &str = "https://autoscaling.us-east-1.amazonaws.com/";

pub(crate) mod info {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    lazy_static::lazy_static! {
        pub(crate) static ref API_CLIENT_HEADER: String = {
            let ac = gaxi::api_header::ApiClientHeader {
                service: "autoscaling",
                version: VERSION,
            };
            ac.header_value()
        };
    }
}
