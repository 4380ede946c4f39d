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

use crate::shape::{Structure, Value};
use crate::timestamp::{self, EpochSeconds, TimestampError};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use serde_json::ser::{CompactFormatter, Formatter};

#[derive(thiserror::Error, Debug)]
pub enum JsonWriterError {
    #[error("i/o error writing JSON: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot write JSON string: {0}")]
    String(#[from] serde_json::Error),
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
    #[error("a value inside an object must follow a name")]
    ValueWithoutName,
    #[error("names are only valid inside objects, and must be followed by a value")]
    MisplacedName,
    #[error("mismatched end of {0}")]
    Mismatched(&'static str),
    #[error("a JSON document has a single root value")]
    MultipleRoots,
    #[error("the document is incomplete, {0} containers are still open")]
    Unbalanced(usize),
    #[error("cannot represent {0} in JSON")]
    NonFinite(f64),
}

type Result<T> = std::result::Result<T, JsonWriterError>;

#[derive(Debug)]
enum Frame {
    Object { first: bool, has_name: bool },
    Array { first: bool },
}

/// A forward-only JSON writer.
///
/// Every object and array must be explicitly closed. The document is only
/// returned by [finish][JsonWriter::finish], and only if it is balanced.
#[derive(Debug)]
pub struct JsonWriter {
    out: Vec<u8>,
    formatter: CompactFormatter,
    stack: Vec<Frame>,
    has_root: bool,
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonWriter {
    pub fn new() -> Self {
        Self {
            out: Vec::new(),
            formatter: CompactFormatter,
            stack: Vec::new(),
            has_root: false,
        }
    }

    pub fn start_object(&mut self) -> Result<&mut Self> {
        self.before_value()?;
        self.formatter.begin_object(&mut self.out)?;
        self.stack.push(Frame::Object {
            first: true,
            has_name: false,
        });
        Ok(self)
    }

    pub fn end_object(&mut self) -> Result<&mut Self> {
        match self.stack.pop() {
            Some(Frame::Object {
                has_name: false, ..
            }) => {}
            _ => return Err(JsonWriterError::Mismatched("object")),
        }
        self.formatter.end_object(&mut self.out)?;
        self.after_value()?;
        Ok(self)
    }

    pub fn start_array(&mut self) -> Result<&mut Self> {
        self.before_value()?;
        self.formatter.begin_array(&mut self.out)?;
        self.stack.push(Frame::Array { first: true });
        Ok(self)
    }

    pub fn end_array(&mut self) -> Result<&mut Self> {
        match self.stack.pop() {
            Some(Frame::Array { .. }) => {}
            _ => return Err(JsonWriterError::Mismatched("array")),
        }
        self.formatter.end_array(&mut self.out)?;
        self.after_value()?;
        Ok(self)
    }

    /// Writes the name of the next object member.
    pub fn name(&mut self, name: &str) -> Result<&mut Self> {
        let Some(Frame::Object { first, has_name }) = self.stack.last_mut() else {
            return Err(JsonWriterError::MisplacedName);
        };
        if *has_name {
            return Err(JsonWriterError::MisplacedName);
        }
        self.formatter.begin_object_key(&mut self.out, *first)?;
        serde_json::to_writer(&mut self.out, name)?;
        self.formatter.end_object_key(&mut self.out)?;
        self.formatter.begin_object_value(&mut self.out)?;
        *first = false;
        *has_name = true;
        Ok(self)
    }

    pub fn value_string(&mut self, v: &str) -> Result<&mut Self> {
        self.before_value()?;
        serde_json::to_writer(&mut self.out, v)?;
        self.after_value()?;
        Ok(self)
    }

    pub fn value_i64(&mut self, v: i64) -> Result<&mut Self> {
        self.before_value()?;
        self.formatter.write_i64(&mut self.out, v)?;
        self.after_value()?;
        Ok(self)
    }

    pub fn value_f64(&mut self, v: f64) -> Result<&mut Self> {
        if !v.is_finite() {
            return Err(JsonWriterError::NonFinite(v));
        }
        self.before_value()?;
        self.formatter.write_f64(&mut self.out, v)?;
        self.after_value()?;
        Ok(self)
    }

    pub fn value_bool(&mut self, v: bool) -> Result<&mut Self> {
        self.before_value()?;
        self.formatter.write_bool(&mut self.out, v)?;
        self.after_value()?;
        Ok(self)
    }

    /// Returns the document, which must be balanced.
    pub fn finish(self) -> Result<Bytes> {
        if !self.stack.is_empty() {
            return Err(JsonWriterError::Unbalanced(self.stack.len()));
        }
        Ok(Bytes::from(self.out))
    }

    fn before_value(&mut self) -> Result<()> {
        match self.stack.last_mut() {
            None if self.has_root => Err(JsonWriterError::MultipleRoots),
            None => {
                self.has_root = true;
                Ok(())
            }
            Some(Frame::Object {
                has_name: false, ..
            }) => Err(JsonWriterError::ValueWithoutName),
            Some(Frame::Object { .. }) => Ok(()),
            Some(Frame::Array { first }) => {
                self.formatter.begin_array_value(&mut self.out, *first)?;
                *first = false;
                Ok(())
            }
        }
    }

    fn after_value(&mut self) -> Result<()> {
        match self.stack.last_mut() {
            None => Ok(()),
            Some(Frame::Object { has_name, .. }) => {
                self.formatter.end_object_value(&mut self.out)?;
                *has_name = false;
                Ok(())
            }
            Some(Frame::Array { .. }) => {
                self.formatter.end_array_value(&mut self.out)?;
                Ok(())
            }
        }
    }
}

/// Serializes `structure` as a JSON object.
///
/// Members are written in declaration order. Null list elements and map
/// values are skipped. Timestamps are written as epoch seconds, blobs as
/// base64 strings.
pub fn write_structure(writer: &mut JsonWriter, structure: &Structure) -> Result<()> {
    writer.start_object()?;
    for (member, value) in structure.iter() {
        writer.name(member.name())?;
        write_value(writer, value)?;
    }
    writer.end_object()?;
    Ok(())
}

fn write_value(writer: &mut JsonWriter, value: &Value) -> Result<()> {
    match value {
        Value::String(s) => writer.value_string(s)?,
        Value::Integer(i) => writer.value_i64(*i)?,
        Value::Double(d) => writer.value_f64(*d)?,
        Value::Boolean(b) => writer.value_bool(*b)?,
        Value::Timestamp(t) => match timestamp::epoch_seconds(t) {
            EpochSeconds::Integer(i) => writer.value_i64(i)?,
            EpochSeconds::Fractional(f) => writer.value_f64(f)?,
        },
        Value::Blob(b) => writer.value_string(&STANDARD.encode(b))?,
        Value::List(list) => {
            writer.start_array()?;
            for v in list.iter().flatten() {
                write_value(writer, v)?;
            }
            writer.end_array()?
        }
        Value::Map(entries) => {
            writer.start_object()?;
            for (k, v) in entries {
                if let Some(v) = v {
                    writer.name(k)?;
                    write_value(writer, v)?;
                }
            }
            writer.end_object()?
        }
        Value::Structure(s) => {
            write_structure(writer, s)?;
            return Ok(());
        }
    };
    Ok(())
}

/// Serializes `structure` into a complete JSON document.
pub fn to_bytes(structure: &Structure) -> Result<Bytes> {
    let mut writer = JsonWriter::new();
    write_structure(&mut writer, structure)?;
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Member;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;
    use time::macros::datetime;

    type TestResult = anyhow::Result<()>;

    #[test]
    fn explicit_calls() -> TestResult {
        let mut writer = JsonWriter::new();
        writer
            .start_object()?
            .name("a")?
            .value_string("x\"y")?
            .name("b")?
            .start_array()?
            .value_i64(1)?
            .value_f64(2.5)?
            .value_bool(true)?
            .start_object()?
            .end_object()?
            .end_array()?
            .end_object()?;
        let got = writer.finish()?;
        assert_eq!(got.as_ref(), br#"{"a":"x\"y","b":[1,2.5,true,{}]}"#);
        Ok(())
    }

    #[test]
    fn unbalanced() -> TestResult {
        let mut writer = JsonWriter::new();
        writer.start_object()?.name("a")?.start_array()?;
        let got = writer.finish();
        assert!(
            matches!(got, Err(JsonWriterError::Unbalanced(2))),
            "{got:?}"
        );
        Ok(())
    }

    #[test]
    fn value_without_name() -> TestResult {
        let mut writer = JsonWriter::new();
        writer.start_object()?;
        let got = writer.value_string("oops");
        assert!(
            matches!(got, Err(JsonWriterError::ValueWithoutName)),
            "{got:?}"
        );
        Ok(())
    }

    #[test]
    fn misplaced_name() -> TestResult {
        let mut writer = JsonWriter::new();
        writer.start_array()?;
        assert!(matches!(
            writer.name("a"),
            Err(JsonWriterError::MisplacedName)
        ));
        let mut writer = JsonWriter::new();
        writer.start_object()?.name("a")?;
        assert!(matches!(
            writer.name("b"),
            Err(JsonWriterError::MisplacedName)
        ));
        Ok(())
    }

    #[test]
    fn mismatched() -> TestResult {
        let mut writer = JsonWriter::new();
        writer.start_object()?;
        assert!(matches!(
            writer.end_array(),
            Err(JsonWriterError::Mismatched("array"))
        ));
        Ok(())
    }

    #[test]
    fn multiple_roots() -> TestResult {
        let mut writer = JsonWriter::new();
        writer.start_object()?.end_object()?;
        assert!(matches!(
            writer.start_object(),
            Err(JsonWriterError::MultipleRoots)
        ));
        Ok(())
    }

    #[test]
    fn non_finite() -> TestResult {
        let mut writer = JsonWriter::new();
        writer.start_array()?;
        assert!(matches!(
            writer.value_f64(f64::NAN),
            Err(JsonWriterError::NonFinite(_))
        ));
        Ok(())
    }

    struct Event {
        message: String,
    }

    impl crate::shape::Marshall for Event {
        fn marshall(&self) -> Structure {
            Structure::new().member(Member::body("message"), &self.message)
        }
    }

    #[test]
    fn structure() -> TestResult {
        let nested = Event {
            message: "hello".into(),
        };
        let s = Structure::new()
            .member(Member::body("logGroupName"), "my-group")
            .member(Member::body("startFromHead"), &true)
            .member(Member::body("limit"), &10)
            .member(
                Member::body("startTime"),
                &datetime!(2015-01-25 08:00:00 UTC),
            )
            .member(
                Member::body("data"),
                &bytes::Bytes::from_static(b"hello"),
            )
            .member(
                Member::body("names"),
                &vec![Some("a".to_string()), None, Some("b".to_string())],
            )
            .member(Member::body("empty"), &Vec::<String>::new())
            .member(
                Member::body("tags"),
                &BTreeMap::from([("k".to_string(), "v".to_string())]),
            )
            .member(Member::body("event"), &nested);
        let got = to_bytes(&s)?;
        let got: serde_json::Value = serde_json::from_slice(&got)?;
        let want = serde_json::json!({
            "logGroupName": "my-group",
            "startFromHead": true,
            "limit": 10,
            "startTime": 1422172800,
            "data": "aGVsbG8=",
            "names": ["a", "b"],
            "empty": [],
            "tags": {"k": "v"},
            "event": {"message": "hello"},
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn declaration_order() -> TestResult {
        let s = Structure::new()
            .member(Member::body("z"), "1")
            .member(Member::body("a"), "2");
        let got = to_bytes(&s)?;
        assert_eq!(got.as_ref(), br#"{"z":"1","a":"2"}"#);
        Ok(())
    }

    #[test]
    fn nan_fails() {
        let s = Structure::new().member(Member::body("x"), &f64::NAN);
        let got = to_bytes(&s);
        assert!(matches!(got, Err(JsonWriterError::NonFinite(_))), "{got:?}");
    }
}
