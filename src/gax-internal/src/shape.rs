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

//! A protocol independent view of request values.
//!
//! Generated request types implement [Marshall], listing their members in
//! declaration order. Each member carries its wire name and where it binds
//! in the HTTP request. The protocol marshallers walk this representation,
//! they never see the generated types.
//!
//! Optionality is explicit: a field set to `None` is never recorded, while
//! `Some(vec![])` is an explicitly empty collection.

use bytes::Bytes;
use std::collections::{BTreeMap, HashMap};
use time::OffsetDateTime;

/// Where a member binds in the HTTP request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    /// Part of the parameters (query protocol) or the body document.
    Body,
    /// A path label in the URI template.
    Uri,
    /// A query string parameter (REST protocols).
    Querystring,
    /// An HTTP header, or a family of prefixed headers for maps.
    Header,
    /// The complete request body.
    Payload,
}

/// How list elements are named on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListStyle {
    /// Elements are wrapped, named `member`.
    Member,
    /// Elements are wrapped, using a service specific name.
    Tag(&'static str),
    /// Elements are not wrapped, they repeat the member name.
    Flattened,
}

/// A request member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Member {
    name: &'static str,
    location: Location,
    list_style: ListStyle,
    map_key: &'static str,
    map_value: &'static str,
}

impl Member {
    const fn new(name: &'static str, location: Location) -> Self {
        Self {
            name,
            location,
            list_style: ListStyle::Member,
            map_key: "key",
            map_value: "value",
        }
    }

    pub const fn body(name: &'static str) -> Self {
        Self::new(name, Location::Body)
    }

    pub const fn uri(name: &'static str) -> Self {
        Self::new(name, Location::Uri)
    }

    pub const fn querystring(name: &'static str) -> Self {
        Self::new(name, Location::Querystring)
    }

    /// A header member. For maps, `name` is the prefix of each header.
    pub const fn header(name: &'static str) -> Self {
        Self::new(name, Location::Header)
    }

    pub const fn payload(name: &'static str) -> Self {
        Self::new(name, Location::Payload)
    }

    /// Wraps list elements with `tag` instead of `member`.
    pub const fn with_list_tag(mut self, tag: &'static str) -> Self {
        self.list_style = ListStyle::Tag(tag);
        self
    }

    pub const fn flattened(mut self) -> Self {
        self.list_style = ListStyle::Flattened;
        self
    }

    /// Changes the names of the map entry key and value.
    pub const fn with_map_names(mut self, key: &'static str, value: &'static str) -> Self {
        self.map_key = key;
        self.map_value = value;
        self
    }

    /// The wire name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn list_style(&self) -> ListStyle {
        self.list_style
    }

    /// The name of the element wrapping each list item, `None` if flattened.
    pub fn list_tag(&self) -> Option<&'static str> {
        match self.list_style {
            ListStyle::Member => Some("member"),
            ListStyle::Tag(t) => Some(t),
            ListStyle::Flattened => None,
        }
    }

    pub fn map_key(&self) -> &'static str {
        self.map_key
    }

    pub fn map_value(&self) -> &'static str {
        self.map_value
    }
}

/// A request value.
///
/// `None` elements in lists and maps represent explicit nulls.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Double(f64),
    Boolean(bool),
    Timestamp(OffsetDateTime),
    Blob(Bytes),
    List(Vec<Option<Value>>),
    Map(Vec<(String, Option<Value>)>),
    Structure(Structure),
}

/// The members of a request, or of a nested structure, in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Structure {
    members: Vec<(Member, Value)>,
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member, unless the value is absent.
    pub fn member<T>(mut self, member: Member, value: &T) -> Self
    where
        T: ToValue + ?Sized,
    {
        if let Some(v) = value.to_value() {
            self.members.push((member, v));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Member, Value)> {
        self.members.iter()
    }

    /// The members bound to `location`.
    pub fn located(&self, location: Location) -> impl Iterator<Item = &(Member, Value)> {
        self.members
            .iter()
            .filter(move |(m, _)| m.location() == location)
    }
}

/// Converts field values into [Value].
///
/// Returns `None` for absent values.
pub trait ToValue {
    fn to_value(&self) -> Option<Value>;
}

/// Implemented by the generated request types and the structures nested in
/// them.
pub trait Marshall {
    fn marshall(&self) -> Structure;
}

impl<T: Marshall> ToValue for T {
    fn to_value(&self) -> Option<Value> {
        Some(Value::Structure(self.marshall()))
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Option<Value> {
        Some(self.clone())
    }
}

impl ToValue for str {
    fn to_value(&self) -> Option<Value> {
        Some(Value::String(self.to_string()))
    }
}

impl ToValue for String {
    fn to_value(&self) -> Option<Value> {
        Some(Value::String(self.clone()))
    }
}

impl ToValue for i32 {
    fn to_value(&self) -> Option<Value> {
        Some(Value::Integer(*self as i64))
    }
}

impl ToValue for i64 {
    fn to_value(&self) -> Option<Value> {
        Some(Value::Integer(*self))
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Option<Value> {
        Some(Value::Double(*self))
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Option<Value> {
        Some(Value::Boolean(*self))
    }
}

impl ToValue for Bytes {
    fn to_value(&self) -> Option<Value> {
        Some(Value::Blob(self.clone()))
    }
}

impl ToValue for OffsetDateTime {
    fn to_value(&self) -> Option<Value> {
        Some(Value::Timestamp(*self))
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Option<Value> {
        self.as_ref().and_then(ToValue::to_value)
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Option<Value> {
        Some(Value::List(self.iter().map(ToValue::to_value).collect()))
    }
}

impl<T: ToValue> ToValue for HashMap<String, T> {
    fn to_value(&self) -> Option<Value> {
        Some(Value::Map(
            self.iter().map(|(k, v)| (k.clone(), v.to_value())).collect(),
        ))
    }
}

impl<T: ToValue> ToValue for BTreeMap<String, T> {
    fn to_value(&self) -> Option<Value> {
        Some(Value::Map(
            self.iter().map(|(k, v)| (k.clone(), v.to_value())).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Ebs {
        volume_size: Option<i32>,
    }

    impl Marshall for Ebs {
        fn marshall(&self) -> Structure {
            Structure::new().member(Member::body("VolumeSize"), &self.volume_size)
        }
    }

    #[test]
    fn absent_members_are_not_recorded() {
        let s = Structure::new()
            .member(Member::body("A"), &None::<String>)
            .member(Member::body("B"), &Some("b".to_string()))
            .member(Member::body("C"), &None::<Vec<String>>);
        let got: Vec<_> = s.iter().map(|(m, _)| m.name()).collect();
        assert_eq!(got, vec!["B"]);
    }

    #[test]
    fn explicit_empty_list_is_recorded() {
        let s = Structure::new().member(Member::body("L"), &Some(Vec::<String>::new()));
        let got: Vec<_> = s.iter().cloned().collect();
        assert_eq!(got, vec![(Member::body("L"), Value::List(vec![]))]);
    }

    #[test]
    fn nested() {
        let s = Structure::new().member(
            Member::body("Ebs"),
            &Some(Ebs {
                volume_size: Some(8),
            }),
        );
        let want = Structure::new().member(Member::body("VolumeSize"), &8);
        let got: Vec<_> = s.iter().cloned().collect();
        assert_eq!(got, vec![(Member::body("Ebs"), Value::Structure(want))]);
    }

    #[test]
    fn list_with_nulls() {
        let v = vec![Some("a".to_string()), None, Some("b".to_string())];
        assert_eq!(
            v.to_value(),
            Some(Value::List(vec![
                Some(Value::String("a".into())),
                None,
                Some(Value::String("b".into())),
            ]))
        );
    }

    #[test]
    fn member_builders() {
        let m = Member::body("Names");
        assert_eq!(m.list_style(), ListStyle::Member);
        assert_eq!(m.list_tag(), Some("member"));
        let m = m.with_list_tag("item");
        assert_eq!(m.list_tag(), Some("item"));
        let m = m.flattened();
        assert_eq!(m.list_tag(), None);

        let m = Member::header("x-amz-meta-").with_map_names("k", "v");
        assert_eq!(m.location(), Location::Header);
        assert_eq!(m.map_key(), "k");
        assert_eq!(m.map_value(), "v");
    }

    #[test]
    fn located() {
        let s = Structure::new()
            .member(Member::uri("Bucket"), "b")
            .member(Member::header("Range"), "bytes=0-9")
            .member(Member::uri("Key"), "k");
        let got: Vec<_> = s.located(Location::Uri).map(|(m, _)| m.name()).collect();
        assert_eq!(got, vec!["Bucket", "Key"]);
    }
}
