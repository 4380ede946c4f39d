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

//! XML request bodies and responses, for the query and REST-XML protocols.
//!
//! Query protocol responses wrap the result in a `{Operation}Result` element
//! under the root. REST-XML responses use the root element directly.

mod unmarshaller;
mod writer;

pub use unmarshaller::{
    UnmarshallError, XmlContext, XmlEvent, XmlStructure, XmlUnmarshall, unmarshall,
    unmarshall_structure,
};
pub use writer::{XmlWriter, XmlWriterError, to_bytes, write_members};
