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

//! JSON request bodies and responses.
//!
//! Request bodies are produced in a single forward pass by [JsonWriter].
//! Responses are consumed through a [Tokenizer] and reconstructed by the
//! [JsonUnmarshall] implementations, which track the depth of each field to
//! avoid matching fields of nested objects.

mod tokenizer;
mod unmarshaller;
mod writer;

pub use tokenizer::{Token, Tokenizer, TokenizerError};
pub use unmarshaller::{
    JsonContext, JsonStructure, JsonUnmarshall, UnmarshallError, unmarshall,
    unmarshall_structure,
};
pub use writer::{JsonWriter, JsonWriterError, to_bytes, write_structure};
