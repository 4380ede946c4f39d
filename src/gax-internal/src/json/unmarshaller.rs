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

use super::tokenizer::{Token, Tokenizer, TokenizerError};
use crate::timestamp::{self, TimestampError};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use std::collections::{BTreeMap, HashMap};
use time::OffsetDateTime;

#[derive(thiserror::Error, Debug)]
pub enum UnmarshallError {
    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: &'static str,
    },
    #[error("number {0} is out of range")]
    OutOfRange(String),
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
    #[error("invalid base64 value: {0}")]
    Base64(#[from] base64::DecodeError),
}

type Result<T> = std::result::Result<T, UnmarshallError>;

/// The state of a JSON response being unmarshalled.
///
/// The depth counts the open objects and arrays. Each open container records
/// the name of the field that introduced it (`None` for the root and for
/// array elements), and closing a container records that name as the last
/// parsed parent.
#[derive(Debug)]
pub struct JsonContext<'a> {
    tokenizer: Tokenizer<'a>,
    current: Option<Token>,
    parents: Vec<Option<String>>,
    last_parsed_parent: Option<String>,
    pending_field: Option<String>,
}

impl<'a> JsonContext<'a> {
    pub fn new(body: &'a [u8]) -> Self {
        Self {
            tokenizer: Tokenizer::new(body),
            current: None,
            parents: Vec::new(),
            last_parsed_parent: None,
            pending_field: None,
        }
    }

    /// Consumes the next token, and returns a copy of it.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        let token = self.tokenizer.next_token()?;
        match &token {
            Some(Token::StartObject | Token::StartArray) => {
                self.parents.push(self.pending_field.take());
            }
            Some(Token::EndObject | Token::EndArray) => {
                self.last_parsed_parent = self.parents.pop().flatten();
                self.pending_field = None;
            }
            Some(Token::FieldName(name)) => self.pending_field = Some(name.clone()),
            _ => self.pending_field = None,
        }
        self.current = token.clone();
        Ok(token)
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Result<Option<&Token>> {
        Ok(self.tokenizer.peek()?)
    }

    /// The last consumed token.
    pub fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// The number of open objects and arrays.
    pub fn depth(&self) -> usize {
        self.parents.len()
    }

    /// The name of the field that introduced the innermost open container.
    pub fn current_parent(&self) -> Option<&str> {
        self.parents.last().and_then(|p| p.as_deref())
    }

    pub fn last_parsed_parent(&self) -> Option<&str> {
        self.last_parsed_parent.as_deref()
    }

    /// Advances to the value of the current field and unmarshalls it.
    ///
    /// Generated code calls this from [JsonStructure::unmarshall_member].
    pub fn field<T: JsonUnmarshall>(&mut self) -> Result<Option<T>> {
        self.next_token()?;
        T::unmarshall(self)
    }

    fn unexpected(&self, expected: &'static str) -> UnmarshallError {
        UnmarshallError::UnexpectedToken {
            expected,
            found: self.current.as_ref().map(Token::kind).unwrap_or("end of document"),
        }
    }
}

/// Types that can be unmarshalled from a JSON value.
///
/// On entry the context is positioned on the first token of the value. On
/// exit the context is positioned on the last token of the value. A JSON
/// `null` yields `None`.
pub trait JsonUnmarshall: Sized {
    fn unmarshall(ctx: &mut JsonContext) -> Result<Option<Self>>;
}

/// Implemented by the generated result types, and any structure nested in
/// them.
///
/// # Example
/// ```
/// # use cloudsdk_gax_internal::json::{JsonContext, JsonStructure, UnmarshallError};
/// #[derive(Default)]
/// struct GetLogEventsOutput {
///     next_forward_token: Option<String>,
/// }
/// impl JsonStructure for GetLogEventsOutput {
///     fn unmarshall_member(&mut self, name: &str, ctx: &mut JsonContext) -> Result<(), UnmarshallError> {
///         match name {
///             "nextForwardToken" => self.next_forward_token = ctx.field()?,
///             _ => {}
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait JsonStructure {
    /// Called for each field at the depth of this structure.
    ///
    /// The context is positioned on the field name. Unknown fields must be
    /// ignored without consuming any tokens.
    fn unmarshall_member(&mut self, name: &str, ctx: &mut JsonContext) -> Result<()>;
}

impl<T: JsonStructure + Default> JsonUnmarshall for T {
    fn unmarshall(ctx: &mut JsonContext) -> Result<Option<Self>> {
        unmarshall_structure(ctx)
    }
}

/// Unmarshalls a structure, the context must be positioned on its first
/// token.
///
/// Fields are only matched at the depth of this structure, a field with the
/// same name in a nested object does not match. The loop ends on the close
/// of this structure.
pub fn unmarshall_structure<T>(ctx: &mut JsonContext) -> Result<Option<T>>
where
    T: JsonStructure + Default,
{
    match ctx.current() {
        Some(Token::Null) => return Ok(None),
        Some(Token::StartObject) => {}
        _ => return Err(ctx.unexpected("object")),
    }
    let target_depth = ctx.depth();
    let original_depth = target_depth - 1;
    let parent = ctx.current_parent().map(str::to_string);
    let mut value = T::default();
    loop {
        let Some(token) = ctx.next_token()? else {
            break;
        };
        match token {
            Token::FieldName(name) if ctx.depth() == target_depth => {
                value.unmarshall_member(&name, ctx)?;
            }
            Token::EndObject | Token::EndArray => {
                let last = ctx.last_parsed_parent();
                if (last.is_none() || last == parent.as_deref())
                    && ctx.depth() <= original_depth
                {
                    break;
                }
            }
            _ => {}
        }
    }
    Ok(Some(value))
}

/// Unmarshalls a complete document.
///
/// An empty document, or a top-level `null`, yields `None`. No partial
/// results are returned: any error discards the value.
pub fn unmarshall<T: JsonUnmarshall>(body: &[u8]) -> Result<Option<T>> {
    let mut ctx = JsonContext::new(body);
    if ctx.peek()?.is_none() {
        return Ok(None);
    }
    ctx.next_token()?;
    let value = T::unmarshall(&mut ctx)?;
    // Detects trailing garbage.
    ctx.next_token()?;
    Ok(value)
}

impl JsonUnmarshall for String {
    fn unmarshall(ctx: &mut JsonContext) -> Result<Option<Self>> {
        match ctx.current() {
            Some(Token::Null) => Ok(None),
            Some(Token::String(s)) => Ok(Some(s.clone())),
            _ => Err(ctx.unexpected("string")),
        }
    }
}

impl JsonUnmarshall for bool {
    fn unmarshall(ctx: &mut JsonContext) -> Result<Option<Self>> {
        match ctx.current() {
            Some(Token::Null) => Ok(None),
            Some(Token::Bool(b)) => Ok(Some(*b)),
            _ => Err(ctx.unexpected("boolean")),
        }
    }
}

impl JsonUnmarshall for i64 {
    fn unmarshall(ctx: &mut JsonContext) -> Result<Option<Self>> {
        match ctx.current() {
            Some(Token::Null) => Ok(None),
            Some(Token::Number(n)) => n
                .as_i64()
                .map(Some)
                .ok_or_else(|| UnmarshallError::OutOfRange(n.to_string())),
            _ => Err(ctx.unexpected("integer")),
        }
    }
}

impl JsonUnmarshall for i32 {
    fn unmarshall(ctx: &mut JsonContext) -> Result<Option<Self>> {
        let Some(v) = i64::unmarshall(ctx)? else {
            return Ok(None);
        };
        i32::try_from(v)
            .map(Some)
            .map_err(|_| UnmarshallError::OutOfRange(v.to_string()))
    }
}

impl JsonUnmarshall for f64 {
    fn unmarshall(ctx: &mut JsonContext) -> Result<Option<Self>> {
        match ctx.current() {
            Some(Token::Null) => Ok(None),
            Some(Token::Number(n)) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| UnmarshallError::OutOfRange(n.to_string())),
            _ => Err(ctx.unexpected("number")),
        }
    }
}

impl JsonUnmarshall for Bytes {
    fn unmarshall(ctx: &mut JsonContext) -> Result<Option<Self>> {
        let Some(s) = String::unmarshall(ctx)? else {
            return Ok(None);
        };
        Ok(Some(Bytes::from(STANDARD.decode(s)?)))
    }
}

/// Timestamps are epoch seconds, some services use RFC 3339 strings.
impl JsonUnmarshall for OffsetDateTime {
    fn unmarshall(ctx: &mut JsonContext) -> Result<Option<Self>> {
        match ctx.current() {
            Some(Token::Null) => Ok(None),
            Some(Token::Number(_)) => {
                let Some(seconds) = f64::unmarshall(ctx)? else {
                    return Ok(None);
                };
                Ok(Some(timestamp::from_epoch_seconds(seconds)?))
            }
            Some(Token::String(s)) => Ok(Some(timestamp::parse_iso8601(s)?)),
            _ => Err(ctx.unexpected("timestamp")),
        }
    }
}

/// Null elements are dropped.
impl<T: JsonUnmarshall> JsonUnmarshall for Vec<T> {
    fn unmarshall(ctx: &mut JsonContext) -> Result<Option<Self>> {
        match ctx.current() {
            Some(Token::Null) => return Ok(None),
            Some(Token::StartArray) => {}
            _ => return Err(ctx.unexpected("array")),
        }
        let original_depth = ctx.depth() - 1;
        let mut list = Vec::new();
        loop {
            match ctx.next_token()? {
                None => return Err(TokenizerError::UnexpectedEof.into()),
                Some(Token::EndArray) if ctx.depth() <= original_depth => break,
                Some(_) => {
                    if let Some(v) = T::unmarshall(ctx)? {
                        list.push(v);
                    }
                }
            }
        }
        Ok(Some(list))
    }
}

fn unmarshall_entries<T, F>(ctx: &mut JsonContext, mut insert: F) -> Result<bool>
where
    T: JsonUnmarshall,
    F: FnMut(String, T),
{
    match ctx.current() {
        Some(Token::Null) => return Ok(false),
        Some(Token::StartObject) => {}
        _ => return Err(ctx.unexpected("object")),
    }
    let original_depth = ctx.depth() - 1;
    loop {
        match ctx.next_token()? {
            None => return Err(TokenizerError::UnexpectedEof.into()),
            Some(Token::EndObject) if ctx.depth() <= original_depth => break,
            Some(Token::FieldName(key)) => {
                if let Some(v) = ctx.field::<T>()? {
                    insert(key, v);
                }
            }
            Some(_) => return Err(ctx.unexpected("field name")),
        }
    }
    Ok(true)
}

impl<T: JsonUnmarshall> JsonUnmarshall for HashMap<String, T> {
    fn unmarshall(ctx: &mut JsonContext) -> Result<Option<Self>> {
        let mut map = HashMap::new();
        let found = unmarshall_entries(ctx, |k, v| {
            map.insert(k, v);
        })?;
        Ok(found.then_some(map))
    }
}

impl<T: JsonUnmarshall> JsonUnmarshall for BTreeMap<String, T> {
    fn unmarshall(ctx: &mut JsonContext) -> Result<Option<Self>> {
        let mut map = BTreeMap::new();
        let found = unmarshall_entries(ctx, |k, v| {
            map.insert(k, v);
        })?;
        Ok(found.then_some(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;
    use time::macros::datetime;

    type TestResult = anyhow::Result<()>;

    #[derive(Debug, Default, PartialEq)]
    struct Event {
        timestamp: Option<OffsetDateTime>,
        message: Option<String>,
    }

    impl JsonStructure for Event {
        fn unmarshall_member(&mut self, name: &str, ctx: &mut JsonContext) -> Result<()> {
            match name {
                "timestamp" => self.timestamp = ctx.field()?,
                "message" => self.message = ctx.field()?,
                _ => {}
            }
            Ok(())
        }
    }

    #[derive(Debug, Default, PartialEq)]
    struct Output {
        events: Option<Vec<Event>>,
        next_forward_token: Option<String>,
        count: Option<i32>,
        attributes: Option<HashMap<String, String>>,
        nested: Option<Box<Output>>,
    }

    impl JsonStructure for Output {
        fn unmarshall_member(&mut self, name: &str, ctx: &mut JsonContext) -> Result<()> {
            match name {
                "events" => self.events = ctx.field()?,
                "nextForwardToken" => self.next_forward_token = ctx.field()?,
                "count" => self.count = ctx.field()?,
                "attributes" => self.attributes = ctx.field()?,
                "nested" => self.nested = ctx.field::<Output>()?.map(Box::new),
                _ => {}
            }
            Ok(())
        }
    }

    #[test]
    fn depth_guarded_match() -> TestResult {
        let body = br#"{"events": [{"events": "decoy"}], "nextForwardToken": "t"}"#;
        let got = unmarshall::<Output>(body)?;
        let want = Output {
            events: Some(vec![Event::default()]),
            next_forward_token: Some("t".into()),
            ..Default::default()
        };
        assert_eq!(got, Some(want));
        Ok(())
    }

    #[test]
    fn unknown_fields_are_ignored() -> TestResult {
        let body = br#"{
            "unknown": {"nextForwardToken": "decoy", "deeper": [{"count": 7}]},
            "also": [1, 2, {"count": 3}],
            "scalar": "x",
            "count": 42
        }"#;
        let got = unmarshall::<Output>(body)?;
        let want = Output {
            count: Some(42),
            ..Default::default()
        };
        assert_eq!(got, Some(want));
        Ok(())
    }

    #[test]
    fn nested_structure_with_same_names() -> TestResult {
        let body = br#"{"nested": {"count": 1, "nextForwardToken": "inner"}, "count": 2}"#;
        let got = unmarshall::<Output>(body)?;
        let want = Output {
            count: Some(2),
            nested: Some(Box::new(Output {
                count: Some(1),
                next_forward_token: Some("inner".into()),
                ..Default::default()
            })),
            ..Default::default()
        };
        assert_eq!(got, Some(want));
        Ok(())
    }

    #[test]
    fn collections() -> TestResult {
        let body = br#"{
            "events": [
                {"timestamp": 1422172800, "message": "a"},
                null,
                {"timestamp": 1422172800.5, "message": "b"}
            ],
            "attributes": {"k1": "v1", "k2": null, "k3": "v3"}
        }"#;
        let got = unmarshall::<Output>(body)?.unwrap();
        let want = vec![
            Event {
                timestamp: Some(datetime!(2015-01-25 08:00:00 UTC)),
                message: Some("a".into()),
            },
            Event {
                timestamp: Some(datetime!(2015-01-25 08:00:00.5 UTC)),
                message: Some("b".into()),
            },
        ];
        assert_eq!(got.events, Some(want));
        let want = HashMap::from([
            ("k1".to_string(), "v1".to_string()),
            ("k3".to_string(), "v3".to_string()),
        ]);
        assert_eq!(got.attributes, Some(want));
        Ok(())
    }

    #[test]
    fn explicit_empty_collections() -> TestResult {
        let got = unmarshall::<Output>(br#"{"events": [], "attributes": {}}"#)?.unwrap();
        assert_eq!(got.events, Some(vec![]));
        assert_eq!(got.attributes, Some(HashMap::new()));
        Ok(())
    }

    #[test]
    fn null_fields() -> TestResult {
        let got = unmarshall::<Output>(br#"{"events": null, "nextForwardToken": null}"#)?;
        assert_eq!(got, Some(Output::default()));
        Ok(())
    }

    #[test]
    fn empty_document() -> TestResult {
        assert_eq!(unmarshall::<Output>(b"")?, None);
        assert_eq!(unmarshall::<Output>(b" null ")?, None);
        assert_eq!(unmarshall::<Output>(b"{}")?, Some(Output::default()));
        Ok(())
    }

    #[test]
    fn scalars() -> TestResult {
        assert_eq!(unmarshall::<String>(br#""abc""#)?, Some("abc".into()));
        assert_eq!(unmarshall::<i64>(b"-7")?, Some(-7));
        assert_eq!(unmarshall::<f64>(b"2.5")?, Some(2.5));
        assert_eq!(unmarshall::<bool>(b"true")?, Some(true));
        assert_eq!(
            unmarshall::<Bytes>(br#""aGVsbG8=""#)?,
            Some(Bytes::from_static(b"hello"))
        );
        assert_eq!(
            unmarshall::<OffsetDateTime>(br#""2015-01-25T08:00:00Z""#)?,
            Some(datetime!(2015-01-25 08:00:00 UTC))
        );
        Ok(())
    }

    #[test]
    fn type_mismatch() {
        let got = unmarshall::<Output>(br#"{"count": "many"}"#);
        assert!(
            matches!(
                got,
                Err(UnmarshallError::UnexpectedToken {
                    expected: "integer",
                    found: "string"
                })
            ),
            "{got:?}"
        );
    }

    #[test_case(b"1e300"; "huge")]
    #[test_case(b"-1e300"; "huge negative")]
    #[test_case(b"253402300800"; "year 10000")]
    fn timestamp_out_of_range(input: &[u8]) {
        let got = unmarshall::<OffsetDateTime>(input);
        assert!(matches!(got, Err(UnmarshallError::Timestamp(_))), "{got:?}");
    }

    #[test]
    fn out_of_range() {
        let got = unmarshall::<Output>(br#"{"count": 4294967296}"#);
        assert!(matches!(got, Err(UnmarshallError::OutOfRange(_))), "{got:?}");
    }

    #[test]
    fn truncated() {
        let got = unmarshall::<Output>(br#"{"events": [{"message": "a"}"#);
        assert!(
            matches!(
                got,
                Err(UnmarshallError::Tokenizer(TokenizerError::UnexpectedEof))
            ),
            "{got:?}"
        );
    }

    #[test]
    fn trailing_garbage() {
        let got = unmarshall::<Output>(br#"{} x"#);
        assert!(
            matches!(got, Err(UnmarshallError::Tokenizer(_))),
            "{got:?}"
        );
    }

    #[test]
    fn context_tracking() -> TestResult {
        let mut ctx = JsonContext::new(br#"{"a": {"b": [1]}}"#);
        ctx.next_token()?;
        assert_eq!(ctx.depth(), 1);
        assert_eq!(ctx.current_parent(), None);
        ctx.next_token()?;
        assert_eq!(ctx.current(), Some(&Token::FieldName("a".into())));
        ctx.next_token()?;
        assert_eq!(ctx.depth(), 2);
        assert_eq!(ctx.current_parent(), Some("a"));
        ctx.next_token()?;
        ctx.next_token()?;
        assert_eq!(ctx.depth(), 3);
        assert_eq!(ctx.current_parent(), Some("b"));
        ctx.next_token()?;
        ctx.next_token()?;
        assert_eq!(ctx.current(), Some(&Token::EndArray));
        assert_eq!(ctx.last_parsed_parent(), Some("b"));
        assert_eq!(ctx.depth(), 2);
        ctx.next_token()?;
        assert_eq!(ctx.last_parsed_parent(), Some("a"));
        ctx.next_token()?;
        assert_eq!(ctx.depth(), 0);
        assert_eq!(ctx.next_token()?, None);
        Ok(())
    }
}
