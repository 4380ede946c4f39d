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

//! Helpers to create the `User-Agent` header sent with every request.

/// Identifies a client library in the `User-Agent` header.
#[derive(Debug, PartialEq)]
pub struct ApiClientHeader {
    /// The short name of the service, e.g. `logs` or `objectstore`.
    pub service: &'static str,
    /// The version of the client library.
    pub version: &'static str,
}

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

impl ApiClientHeader {
    /// Format the struct as needed for the `User-Agent` header.
    pub fn header_value(&self) -> String {
        // Some toolchains report the version as `rustc 1.2.3`.
        let rustc_version = build_info::RUSTC_VERSION;
        let rustc_version = rustc_version
            .strip_prefix("rustc ")
            .unwrap_or(build_info::RUSTC_VERSION);

        let gax_version = build_info::PKG_VERSION;

        format!(
            "cloudsdk-rust/{rustc_version} gax/{gax_version} {}/{}",
            self.service, self.version
        )
    }
}
