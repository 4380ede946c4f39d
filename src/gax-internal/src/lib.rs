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

//! Implementation details for Cloud SDK client libraries.
//!
//! This crate contains the request/response marshalling engine shared by
//! every generated client. Each service operation is described by a static
//! [OperationDescriptor][operation::OperationDescriptor]. The engine turns a
//! typed request plus that descriptor into a [WireRequest][wire::WireRequest],
//! and turns the response into a typed output or a
//! [gax::error::Error].
//!
//! <div class="warning">
//! All the types, traits, and functions defined in this crate are <b>not</b>
//! intended for general use. The APIs will remain unstable for the
//! foreseeable future, even if used in stable SDKs. We control both and will
//! change both if needed.
//! </div>

pub mod api_header;
pub mod client;
pub mod error_dispatch;
pub mod json;
pub mod operation;
pub mod options;
pub mod query_parameter;
pub mod shape;
pub mod timestamp;
pub mod transport;
pub mod uri_template;
pub mod wire;
pub mod xml;

#[cfg(feature = "_internal-http-client")]
pub mod http;

/// Common (but not universal) headers returned with every response.
pub(crate) mod headers;
