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

use crate::query_parameter::format_scalar;
use crate::shape::{Member, Structure, Value};
use crate::timestamp::TimestampError;
use bytes::Bytes;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

#[derive(thiserror::Error, Debug)]
pub enum XmlWriterError {
    #[error("i/o error writing XML: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
    #[error("there is no open element")]
    NoOpenElement,
    #[error("the document is incomplete, {0} elements are still open")]
    Unbalanced(usize),
}

type Result<T> = std::result::Result<T, XmlWriterError>;

/// A forward-only XML writer.
///
/// Text is escaped. Every element must be explicitly closed, and the
/// document is only returned by [finish][XmlWriter::finish] if it is
/// balanced.
pub struct XmlWriter {
    writer: Writer<Vec<u8>>,
    stack: Vec<String>,
}

impl std::fmt::Debug for XmlWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XmlWriter")
            .field("stack", &self.stack)
            .finish()
    }
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlWriter {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(Vec::new()),
            stack: Vec::new(),
        }
    }

    pub fn start_element(&mut self, name: &str) -> Result<&mut Self> {
        self.writer
            .write_event(Event::Start(BytesStart::new(name)))?;
        self.stack.push(name.to_string());
        Ok(self)
    }

    /// Starts an element with an `xmlns` attribute, typically the root.
    pub fn start_element_with_namespace(
        &mut self,
        name: &str,
        namespace: &str,
    ) -> Result<&mut Self> {
        let start = BytesStart::new(name).with_attributes([("xmlns", namespace)]);
        self.writer.write_event(Event::Start(start))?;
        self.stack.push(name.to_string());
        Ok(self)
    }

    pub fn text(&mut self, text: &str) -> Result<&mut Self> {
        if self.stack.is_empty() {
            return Err(XmlWriterError::NoOpenElement);
        }
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        Ok(self)
    }

    /// Closes the innermost open element.
    pub fn end_element(&mut self) -> Result<&mut Self> {
        let name = self.stack.pop().ok_or(XmlWriterError::NoOpenElement)?;
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(self)
    }

    /// Returns the document, which must be balanced.
    pub fn finish(self) -> Result<Bytes> {
        if !self.stack.is_empty() {
            return Err(XmlWriterError::Unbalanced(self.stack.len()));
        }
        Ok(Bytes::from(self.writer.into_inner()))
    }
}

/// Writes the members of `structure` as child elements of the current
/// element.
///
/// Members are written in declaration order. Null list elements and map
/// values are skipped. An explicitly empty wrapped list is written as an
/// empty element.
pub fn write_members(writer: &mut XmlWriter, structure: &Structure) -> Result<()> {
    for (member, value) in structure.iter() {
        write_member(writer, member.name(), member, value)?;
    }
    Ok(())
}

fn write_member(writer: &mut XmlWriter, name: &str, member: &Member, value: &Value) -> Result<()> {
    match value {
        Value::Structure(s) => {
            writer.start_element(name)?;
            write_members(writer, s)?;
            writer.end_element()?;
        }
        Value::List(list) => {
            let elements = list.iter().flatten();
            match member.list_tag() {
                None => {
                    for v in elements {
                        write_member(writer, name, &Member::body(""), v)?;
                    }
                }
                Some(tag) => {
                    writer.start_element(name)?;
                    for v in elements {
                        write_member(writer, tag, &Member::body(""), v)?;
                    }
                    writer.end_element()?;
                }
            }
        }
        Value::Map(entries) => {
            writer.start_element(name)?;
            for (k, v) in entries {
                let Some(v) = v else {
                    continue;
                };
                writer.start_element("entry")?;
                writer
                    .start_element(member.map_key())?
                    .text(k)?
                    .end_element()?;
                write_member(writer, member.map_value(), &Member::body(""), v)?;
                writer.end_element()?;
            }
            writer.end_element()?;
        }
        scalar => {
            writer.start_element(name)?;
            if let Some(text) = format_scalar(scalar)? {
                writer.text(&text)?;
            }
            writer.end_element()?;
        }
    }
    Ok(())
}

/// Serializes `structure` as a complete document with the given root
/// element.
pub fn to_bytes(root: &str, namespace: Option<&str>, structure: &Structure) -> Result<Bytes> {
    let mut writer = XmlWriter::new();
    match namespace {
        Some(ns) => writer.start_element_with_namespace(root, ns)?,
        None => writer.start_element(root)?,
    };
    write_members(&mut writer, structure)?;
    writer.end_element()?;
    writer.finish()
}
