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

use crate::timestamp::{self, TimestampError};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::{BTreeMap, HashMap};
use time::OffsetDateTime;

#[derive(thiserror::Error, Debug)]
pub enum UnmarshallError {
    #[error("malformed XML document: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("unexpected end of document")]
    UnexpectedEof,
    #[error("unexpected element <{0}> inside a scalar value")]
    UnexpectedElement(String),
    #[error("cannot parse {value:?} as {kind}")]
    InvalidValue { value: String, kind: &'static str },
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
    #[error("invalid base64 value: {0}")]
    Base64(#[from] base64::DecodeError),
}

type Result<T> = std::result::Result<T, UnmarshallError>;

/// The events relevant to unmarshalling.
///
/// Element names omit any namespace prefix.
#[derive(Clone, Debug, PartialEq)]
pub enum XmlEvent {
    Start(String),
    End(String),
    Text(String),
    Eof,
}

/// The state of an XML response being unmarshalled.
///
/// The depth is the number of open elements. Starting an element pushes its
/// name on the parent stack, ending it pops the name into the last parsed
/// parent.
pub struct XmlContext<'a> {
    reader: Reader<&'a [u8]>,
    current: XmlEvent,
    parents: Vec<String>,
    last_parsed_parent: Option<String>,
}

impl std::fmt::Debug for XmlContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XmlContext")
            .field("current", &self.current)
            .field("parents", &self.parents)
            .field("last_parsed_parent", &self.last_parsed_parent)
            .finish()
    }
}

impl<'a> XmlContext<'a> {
    pub fn new(body: &'a [u8]) -> Self {
        let mut reader = Reader::from_reader(body);
        // Text is kept verbatim, whitespace between elements is ignored by
        // the structure and list loops.
        reader.config_mut().expand_empty_elements = true;
        Self {
            reader,
            current: XmlEvent::Eof,
            parents: Vec::new(),
            last_parsed_parent: None,
        }
    }

    /// Consumes the next event, and returns a copy of it.
    pub fn next_event(&mut self) -> Result<XmlEvent> {
        let event = loop {
            let event = match self.reader.read_event()? {
                Event::Start(e) => XmlEvent::Start(utf8(e.local_name().as_ref())),
                Event::End(e) => XmlEvent::End(utf8(e.local_name().as_ref())),
                Event::Text(t) => {
                    let text = t.unescape().map_err(quick_xml::Error::from)?;
                    XmlEvent::Text(text.into_owned())
                }
                Event::CData(c) => XmlEvent::Text(utf8(&c.into_inner())),
                Event::Eof if !self.parents.is_empty() => {
                    return Err(UnmarshallError::UnexpectedEof);
                }
                Event::Eof => XmlEvent::Eof,
                // Declarations, comments, processing instructions and
                // doctypes carry no data.
                _ => continue,
            };
            break event;
        };
        match &event {
            XmlEvent::Start(name) => self.parents.push(name.clone()),
            XmlEvent::End(_) => self.last_parsed_parent = self.parents.pop(),
            _ => {}
        }
        self.current = event.clone();
        Ok(event)
    }

    /// The last consumed event.
    pub fn current(&self) -> &XmlEvent {
        &self.current
    }

    /// The number of open elements.
    pub fn depth(&self) -> usize {
        self.parents.len()
    }

    /// The name of the innermost open element.
    pub fn current_parent(&self) -> Option<&str> {
        self.parents.last().map(String::as_str)
    }

    pub fn last_parsed_parent(&self) -> Option<&str> {
        self.last_parsed_parent.as_deref()
    }

    /// Unmarshalls the element that just started.
    ///
    /// Generated code calls this from [XmlStructure::unmarshall_member].
    pub fn field<T: XmlUnmarshall>(&mut self) -> Result<Option<T>> {
        T::unmarshall(self)
    }

    /// Unmarshalls one element of a flattened list, and appends it.
    pub fn flattened_element<T: XmlUnmarshall>(&mut self, list: &mut Option<Vec<T>>) -> Result<()> {
        let v = T::unmarshall(self)?;
        let list = list.get_or_insert_with(Vec::new);
        if let Some(v) = v {
            list.push(v);
        }
        Ok(())
    }

    /// Unmarshalls a wrapped map using custom entry key and value names.
    pub fn map_with_names<T: XmlUnmarshall>(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<Option<HashMap<String, T>>> {
        let mut map = HashMap::new();
        unmarshall_entries(self, key, value, |k, v| {
            map.insert(k, v);
        })?;
        Ok(Some(map))
    }

    /// Reads the text content of the element that just started.
    ///
    /// On exit, the context is positioned on the end of that element.
    pub fn read_text(&mut self) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.next_event()? {
                XmlEvent::Text(t) => text.push_str(&t),
                XmlEvent::End(_) => return Ok(text),
                XmlEvent::Start(name) => return Err(UnmarshallError::UnexpectedElement(name)),
                XmlEvent::Eof => return Err(UnmarshallError::UnexpectedEof),
            }
        }
    }

    /// The depth of the parent of the element that just started.
    ///
    /// Fails if no element is open.
    fn enclosing_depth(&self) -> Result<usize> {
        self.depth()
            .checked_sub(1)
            .ok_or(UnmarshallError::UnexpectedEof)
    }

    /// Skips the element that just started, including all its children.
    pub fn skip_element(&mut self) -> Result<()> {
        let original_depth = self.enclosing_depth()?;
        loop {
            match self.next_event()? {
                XmlEvent::End(_) if self.depth() <= original_depth => return Ok(()),
                XmlEvent::Eof => return Err(UnmarshallError::UnexpectedEof),
                _ => {}
            }
        }
    }
}

fn utf8(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Types that can be unmarshalled from an XML element.
///
/// On entry the context is positioned on the start of the element. On exit
/// the context is positioned on its end.
pub trait XmlUnmarshall: Sized {
    fn unmarshall(ctx: &mut XmlContext) -> Result<Option<Self>>;
}

/// Implemented by the generated result types, and any structure nested in
/// them.
pub trait XmlStructure {
    /// Called for each child element of this structure.
    ///
    /// The context is positioned on the start of the child. Unknown children
    /// must be ignored without consuming any events.
    fn unmarshall_member(&mut self, name: &str, ctx: &mut XmlContext) -> Result<()>;
}

impl<T: XmlStructure + Default> XmlUnmarshall for T {
    fn unmarshall(ctx: &mut XmlContext) -> Result<Option<Self>> {
        unmarshall_structure(ctx).map(Some)
    }
}

/// Unmarshalls a structure, the context must be positioned on the start of
/// its element.
///
/// Only direct children are matched, an element with the same name deeper in
/// the tree does not match. The loop ends on the end of this element.
pub fn unmarshall_structure<T>(ctx: &mut XmlContext) -> Result<T>
where
    T: XmlStructure + Default,
{
    let original_depth = ctx.enclosing_depth()?;
    let target_depth = ctx.depth() + 1;
    let parent = ctx.current_parent().map(str::to_string);
    let mut value = T::default();
    loop {
        match ctx.next_event()? {
            XmlEvent::Start(name) if ctx.depth() == target_depth => {
                value.unmarshall_member(&name, ctx)?;
            }
            XmlEvent::End(_) => {
                let last = ctx.last_parsed_parent();
                if (last.is_none() || last == parent.as_deref()) && ctx.depth() <= original_depth {
                    break;
                }
            }
            XmlEvent::Eof => return Err(UnmarshallError::UnexpectedEof),
            _ => {}
        }
    }
    Ok(value)
}

/// Unmarshalls a complete document.
///
/// Without a `wrapper`, the root element is the result. With a `wrapper`,
/// the result is the child of the root with that name, and `None` if there
/// is no such child. An empty document yields `None`.
pub fn unmarshall<T: XmlUnmarshall>(body: &[u8], wrapper: Option<&str>) -> Result<Option<T>> {
    let mut ctx = XmlContext::new(body);
    loop {
        match ctx.next_event()? {
            XmlEvent::Eof => return Ok(None),
            XmlEvent::Start(_) => break,
            _ => {}
        }
    }
    let Some(wrapper) = wrapper else {
        return T::unmarshall(&mut ctx);
    };
    loop {
        match ctx.next_event()? {
            XmlEvent::Start(name) if ctx.depth() == 2 && name == wrapper => {
                return T::unmarshall(&mut ctx);
            }
            XmlEvent::End(_) if ctx.depth() == 0 => return Ok(None),
            XmlEvent::Eof => return Ok(None),
            _ => {}
        }
    }
}

/// Parses a non-string scalar, ignoring surrounding whitespace.
fn parse<T: std::str::FromStr>(text: String, kind: &'static str) -> Result<Option<T>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| UnmarshallError::InvalidValue { value: text, kind })
}

impl XmlUnmarshall for String {
    fn unmarshall(ctx: &mut XmlContext) -> Result<Option<Self>> {
        ctx.read_text().map(Some)
    }
}

impl XmlUnmarshall for bool {
    fn unmarshall(ctx: &mut XmlContext) -> Result<Option<Self>> {
        parse(ctx.read_text()?, "boolean")
    }
}

impl XmlUnmarshall for i32 {
    fn unmarshall(ctx: &mut XmlContext) -> Result<Option<Self>> {
        parse(ctx.read_text()?, "integer")
    }
}

impl XmlUnmarshall for i64 {
    fn unmarshall(ctx: &mut XmlContext) -> Result<Option<Self>> {
        parse(ctx.read_text()?, "long")
    }
}

impl XmlUnmarshall for f64 {
    fn unmarshall(ctx: &mut XmlContext) -> Result<Option<Self>> {
        parse(ctx.read_text()?, "double")
    }
}

impl XmlUnmarshall for Bytes {
    fn unmarshall(ctx: &mut XmlContext) -> Result<Option<Self>> {
        let text = ctx.read_text()?;
        Ok(Some(Bytes::from(STANDARD.decode(text.trim())?)))
    }
}

impl XmlUnmarshall for OffsetDateTime {
    fn unmarshall(ctx: &mut XmlContext) -> Result<Option<Self>> {
        let text = ctx.read_text()?;
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        Ok(Some(timestamp::parse_iso8601(text)?))
    }
}

/// A wrapped list, the element names of the items are not checked.
impl<T: XmlUnmarshall> XmlUnmarshall for Vec<T> {
    fn unmarshall(ctx: &mut XmlContext) -> Result<Option<Self>> {
        let original_depth = ctx.enclosing_depth()?;
        let item_depth = ctx.depth() + 1;
        let mut list = Vec::new();
        loop {
            match ctx.next_event()? {
                XmlEvent::Start(_) if ctx.depth() == item_depth => {
                    if let Some(v) = T::unmarshall(ctx)? {
                        list.push(v);
                    }
                }
                XmlEvent::End(_) if ctx.depth() <= original_depth => break,
                XmlEvent::Eof => return Err(UnmarshallError::UnexpectedEof),
                _ => {}
            }
        }
        Ok(Some(list))
    }
}

fn unmarshall_entries<T, F>(ctx: &mut XmlContext, key: &str, value: &str, mut insert: F) -> Result<()>
where
    T: XmlUnmarshall,
    F: FnMut(String, T),
{
    let original_depth = ctx.enclosing_depth()?;
    let entry_depth = ctx.depth() + 1;
    let mut entry: (Option<String>, Option<T>) = (None, None);
    loop {
        match ctx.next_event()? {
            XmlEvent::Start(name) if ctx.depth() == entry_depth + 1 => {
                if name == key {
                    entry.0 = String::unmarshall(ctx)?;
                } else if name == value {
                    entry.1 = T::unmarshall(ctx)?;
                } else {
                    ctx.skip_element()?;
                }
            }
            XmlEvent::End(_) if ctx.depth() == entry_depth - 1 && ctx.depth() > original_depth => {
                if let (Some(k), Some(v)) = std::mem::take(&mut entry) {
                    insert(k, v);
                }
            }
            XmlEvent::End(_) if ctx.depth() <= original_depth => break,
            XmlEvent::Eof => return Err(UnmarshallError::UnexpectedEof),
            _ => {}
        }
    }
    Ok(())
}

impl<T: XmlUnmarshall> XmlUnmarshall for HashMap<String, T> {
    fn unmarshall(ctx: &mut XmlContext) -> Result<Option<Self>> {
        ctx.map_with_names("key", "value")
    }
}

impl<T: XmlUnmarshall> XmlUnmarshall for BTreeMap<String, T> {
    fn unmarshall(ctx: &mut XmlContext) -> Result<Option<Self>> {
        let mut map = BTreeMap::new();
        unmarshall_entries(ctx, "key", "value", |k, v| {
            map.insert(k, v);
        })?;
        Ok(Some(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use time::macros::datetime;

    type TestResult = anyhow::Result<()>;

    #[derive(Debug, Default, PartialEq)]
    struct Object {
        key: Option<String>,
        size: Option<i64>,
        last_modified: Option<OffsetDateTime>,
    }

    impl XmlStructure for Object {
        fn unmarshall_member(&mut self, name: &str, ctx: &mut XmlContext) -> Result<()> {
            match name {
                "Key" => self.key = ctx.field()?,
                "Size" => self.size = ctx.field()?,
                "LastModified" => self.last_modified = ctx.field()?,
                _ => {}
            }
            Ok(())
        }
    }

    #[derive(Debug, Default, PartialEq)]
    struct ListResult {
        name: Option<String>,
        key_count: Option<i32>,
        is_truncated: Option<bool>,
        contents: Option<Vec<Object>>,
        names: Option<Vec<String>>,
        attributes: Option<HashMap<String, String>>,
    }

    impl XmlStructure for ListResult {
        fn unmarshall_member(&mut self, name: &str, ctx: &mut XmlContext) -> Result<()> {
            match name {
                "Name" => self.name = ctx.field()?,
                "KeyCount" => self.key_count = ctx.field()?,
                "IsTruncated" => self.is_truncated = ctx.field()?,
                "Contents" => ctx.flattened_element(&mut self.contents)?,
                "Names" => self.names = ctx.field()?,
                "Attributes" => self.attributes = ctx.field()?,
                _ => {}
            }
            Ok(())
        }
    }

    #[test]
    fn root_result() -> TestResult {
        let body = br#"<?xml version="1.0" encoding="UTF-8"?>
            <ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
                <Name>my-bucket</Name>
                <KeyCount>2</KeyCount>
                <IsTruncated>false</IsTruncated>
                <Contents>
                    <Key>a.txt</Key>
                    <Size>10</Size>
                    <LastModified>2015-01-25T08:00:00.000Z</LastModified>
                </Contents>
                <Contents><Key>b &amp; c.txt</Key><Size>20</Size></Contents>
            </ListBucketResult>"#;
        let got = unmarshall::<ListResult>(body, None)?;
        let want = ListResult {
            name: Some("my-bucket".into()),
            key_count: Some(2),
            is_truncated: Some(false),
            contents: Some(vec![
                Object {
                    key: Some("a.txt".into()),
                    size: Some(10),
                    last_modified: Some(datetime!(2015-01-25 08:00:00 UTC)),
                },
                Object {
                    key: Some("b & c.txt".into()),
                    size: Some(20),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        };
        assert_eq!(got, Some(want));
        Ok(())
    }

    #[test]
    fn wrapped_result() -> TestResult {
        let body = br#"<DescribeResponse>
                <DescribeResult>
                    <Names><member>a</member><member>b</member></Names>
                    <Attributes>
                        <entry><key>k1</key><value>v1</value></entry>
                        <entry><key>k2</key><value>v2</value></entry>
                    </Attributes>
                </DescribeResult>
                <ResponseMetadata><RequestId>req-1</RequestId></ResponseMetadata>
            </DescribeResponse>"#;
        let got = unmarshall::<ListResult>(body, Some("DescribeResult"))?.unwrap();
        assert_eq!(got.names, Some(vec!["a".to_string(), "b".to_string()]));
        let want = HashMap::from([
            ("k1".to_string(), "v1".to_string()),
            ("k2".to_string(), "v2".to_string()),
        ]);
        assert_eq!(got.attributes, Some(want));
        Ok(())
    }

    #[test]
    fn missing_wrapper() -> TestResult {
        let body = br#"<CreateResponse><ResponseMetadata><RequestId>r</RequestId></ResponseMetadata></CreateResponse>"#;
        let got = unmarshall::<ListResult>(body, Some("CreateResult"))?;
        assert_eq!(got, None);
        Ok(())
    }

    #[test]
    fn depth_guarded_match() -> TestResult {
        let body = br#"<ListBucketResult>
                <Owner><Name>decoy</Name><KeyCount>99</KeyCount></Owner>
                <Name>real</Name>
            </ListBucketResult>"#;
        let got = unmarshall::<ListResult>(body, None)?.unwrap();
        assert_eq!(got.name.as_deref(), Some("real"));
        assert_eq!(got.key_count, None);
        Ok(())
    }

    #[test]
    fn empty_elements() -> TestResult {
        let body = br#"<R><Name/><KeyCount/><Names/></R>"#;
        let got = unmarshall::<ListResult>(body, None)?.unwrap();
        assert_eq!(got.name.as_deref(), Some(""));
        assert_eq!(got.key_count, None);
        assert_eq!(got.names, Some(vec![]));
        Ok(())
    }

    #[test]
    fn empty_document() -> TestResult {
        assert_eq!(unmarshall::<ListResult>(b"", None)?, None);
        assert_eq!(unmarshall::<ListResult>(b"  ", Some("X"))?, None);
        Ok(())
    }

    #[test]
    fn invalid_scalar() {
        let got = unmarshall::<ListResult>(b"<R><KeyCount>many</KeyCount></R>", None);
        assert!(
            matches!(got, Err(UnmarshallError::InvalidValue { kind: "integer", .. })),
            "{got:?}"
        );
    }

    #[test]
    fn element_inside_scalar() {
        let got = unmarshall::<ListResult>(b"<R><Name><b>x</b></Name></R>", None);
        assert!(
            matches!(got, Err(UnmarshallError::UnexpectedElement(ref n)) if n == "b"),
            "{got:?}"
        );
    }

    #[test]
    fn truncated() {
        let got = unmarshall::<ListResult>(b"<R><Contents><Key>a</Key>", None);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn mismatched_end() {
        let got = unmarshall::<ListResult>(b"<R><Name>a</Key></R>", None);
        assert!(matches!(got, Err(UnmarshallError::Xml(_))), "{got:?}");
    }

    #[test]
    fn text_is_not_trimmed() -> TestResult {
        let body = b"<R>\n  <Contents><Key>  dir/file name  </Key><Size> 10 </Size></Contents>\n</R>";
        let got = unmarshall::<ListResult>(body, None)?.unwrap();
        let want = vec![Object {
            key: Some("  dir/file name  ".into()),
            size: Some(10),
            ..Default::default()
        }];
        assert_eq!(got.contents, Some(want));
        Ok(())
    }

    #[test]
    fn padded_value_round_trip() -> TestResult {
        use crate::shape::{Member, Structure};
        let structure = Structure::new()
            .member(Member::body("Name"), "  padded\tvalue \n")
            .member(Member::body("KeyCount"), &3);
        let body = crate::xml::to_bytes("R", None, &structure)?;
        let got = unmarshall::<ListResult>(&body, None)?.unwrap();
        assert_eq!(got.name.as_deref(), Some("  padded\tvalue \n"));
        assert_eq!(got.key_count, Some(3));
        Ok(())
    }

    #[test]
    fn fresh_context() {
        let mut ctx = XmlContext::new(b"<R><a>1</a></R>");
        let got = ctx.skip_element();
        assert!(matches!(got, Err(UnmarshallError::UnexpectedEof)), "{got:?}");
        let got = Vec::<String>::unmarshall(&mut ctx);
        assert!(matches!(got, Err(UnmarshallError::UnexpectedEof)), "{got:?}");
        let got = unmarshall_structure::<ListResult>(&mut ctx);
        assert!(matches!(got, Err(UnmarshallError::UnexpectedEof)), "{got:?}");
        let got = ctx.map_with_names::<String>("key", "value");
        assert!(matches!(got, Err(UnmarshallError::UnexpectedEof)), "{got:?}");
    }

    #[test]
    fn custom_map_names() -> TestResult {
        let mut ctx = XmlContext::new(
            br#"<Tags><entry><Name>k</Name><Ignored>i</Ignored><Value>v</Value></entry></Tags>"#,
        );
        ctx.next_event()?;
        let got = ctx.map_with_names::<String>("Name", "Value")?;
        assert_eq!(got, Some(HashMap::from([("k".to_string(), "v".to_string())])));
        assert_eq!(ctx.current(), &XmlEvent::End("Tags".into()));
        assert_eq!(ctx.depth(), 0);
        Ok(())
    }

    #[test]
    fn context_tracking() -> TestResult {
        let mut ctx = XmlContext::new(b"<a:R xmlns:a=\"urn:x\"><a:B>t</a:B></a:R>");
        assert_eq!(ctx.next_event()?, XmlEvent::Start("R".into()));
        assert_eq!(ctx.depth(), 1);
        assert_eq!(ctx.next_event()?, XmlEvent::Start("B".into()));
        assert_eq!(ctx.current_parent(), Some("B"));
        assert_eq!(ctx.next_event()?, XmlEvent::Text("t".into()));
        assert_eq!(ctx.next_event()?, XmlEvent::End("B".into()));
        assert_eq!(ctx.last_parsed_parent(), Some("B"));
        assert_eq!(ctx.depth(), 1);
        assert_eq!(ctx.next_event()?, XmlEvent::End("R".into()));
        assert_eq!(ctx.next_event()?, XmlEvent::Eof);
        Ok(())
    }
}
