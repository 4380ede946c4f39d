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

//! Compile and resolve request URI templates.
//!
//! A URI template is a path with `{Name}` placeholders, optionally followed
//! by a query string, e.g. `/{Bucket}/{Key+}?tagging` or
//! `/{Bucket}?list-type=2&prefix={Prefix}`. Placeholders before the first `?`
//! are path labels. Placeholders after it are dynamic query parameters. The
//! template is split once, when it is compiled, and resolved once per call.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::collections::HashMap;

/// Characters escaped in path labels and query values.
///
/// Everything but the RFC 3986 unreserved characters.
pub(crate) const ENCODED_CHARS: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Greedy labels (`{Key+}`) keep the path separators.
const GREEDY_ENCODED_CHARS: &AsciiSet = &ENCODED_CHARS.remove(b'/');

#[derive(Clone, Debug, PartialEq)]
enum Segment {
    Literal(String),
    Label { name: String, greedy: bool },
}

/// A compiled URI template.
#[derive(Clone, Debug, PartialEq)]
pub struct UriTemplate {
    path: Vec<Segment>,
    static_query: Vec<(String, Option<String>)>,
    // (query key, label name)
    dynamic_query: Vec<(String, String)>,
}

/// The result of resolving a template with the values in a request.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedUri {
    /// The resource path, with all labels substituted and encoded.
    pub path: String,
    /// The query parameters, static ones first. A `None` value is a bare key.
    pub parameters: Vec<(String, Option<String>)>,
}

impl UriTemplate {
    /// Compiles `template`.
    ///
    /// Malformed placeholders (a `{` without a matching `}`) are kept as
    /// literal text.
    pub fn parse(template: &str) -> Self {
        let (path, query) = match template.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (template, None),
        };
        let mut static_query = Vec::new();
        let mut dynamic_query = Vec::new();
        for pair in query.into_iter().flat_map(|q| q.split('&')) {
            if pair.is_empty() {
                continue;
            }
            match pair.split_once('=') {
                Some((k, v)) => match label_name(v) {
                    Some(name) => dynamic_query.push((k.to_string(), name.to_string())),
                    None => static_query.push((k.to_string(), Some(v.to_string()))),
                },
                None => static_query.push((pair.to_string(), None)),
            }
        }
        Self {
            path: parse_path(path),
            static_query,
            dynamic_query,
        }
    }

    /// Returns true if `name` is a path label in this template.
    pub fn has_path_label(&self, name: &str) -> bool {
        self.path
            .iter()
            .any(|s| matches!(s, Segment::Label { name: n, .. } if n == name))
    }

    /// Returns true if `name` is bound to a dynamic query parameter.
    pub fn has_query_label(&self, name: &str) -> bool {
        self.dynamic_query.iter().any(|(_, n)| n == name)
    }

    /// Substitutes the labels with the values in `values`.
    ///
    /// Path labels without a value resolve to the empty string. Dynamic query
    /// parameters without a value, or with an empty value, are omitted.
    /// Repeated slashes in the resulting path are collapsed.
    pub fn resolve(&self, values: &HashMap<String, String>) -> ResolvedUri {
        let mut path = String::new();
        for segment in &self.path {
            match segment {
                Segment::Literal(s) => path.push_str(s),
                Segment::Label { name, greedy } => {
                    let value = values.get(name).map(String::as_str).unwrap_or_default();
                    let set = if *greedy {
                        GREEDY_ENCODED_CHARS
                    } else {
                        ENCODED_CHARS
                    };
                    path.extend(utf8_percent_encode(value, set));
                }
            }
        }
        while path.contains("//") {
            path = path.replace("//", "/");
        }

        let dynamic = self.dynamic_query.iter().filter_map(|(key, name)| {
            values
                .get(name)
                .filter(|v| !v.is_empty())
                .map(|v| (key.clone(), Some(v.clone())))
        });
        let parameters = self.static_query.iter().cloned().chain(dynamic).collect();
        ResolvedUri { path, parameters }
    }
}

fn parse_path(path: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = path;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        if start > 0 {
            segments.push(Segment::Literal(rest[..start].to_string()));
        }
        let label = &rest[start + 1..start + len];
        let (name, greedy) = match label.strip_suffix('+') {
            Some(n) => (n, true),
            None => (label, false),
        };
        segments.push(Segment::Label {
            name: name.to_string(),
            greedy,
        });
        rest = &rest[start + len + 1..];
    }
    if !rest.is_empty() {
        segments.push(Segment::Literal(rest.to_string()));
    }
    segments
}

fn label_name(value: &str) -> Option<&str> {
    value.strip_prefix('{').and_then(|v| v.strip_suffix('}'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parse() {
        let template = UriTemplate::parse("/{Bucket}/{Key+}?tagging&list-type=2&prefix={Prefix}");
        assert!(template.has_path_label("Bucket"), "{template:?}");
        assert!(template.has_path_label("Key"), "{template:?}");
        assert!(!template.has_path_label("Prefix"), "{template:?}");
        assert!(template.has_query_label("Prefix"), "{template:?}");
        assert!(!template.has_query_label("Bucket"), "{template:?}");
        assert_eq!(
            template.static_query,
            vec![
                ("tagging".to_string(), None),
                ("list-type".to_string(), Some("2".to_string())),
            ]
        );
        assert_eq!(
            template.dynamic_query,
            vec![("prefix".to_string(), "Prefix".to_string())]
        );
    }

    #[test_case("/a/{X}/b", &[("X", "")], "/a/b"; "empty label")]
    #[test_case("/a/{X}/b", &[], "/a/b"; "missing label")]
    #[test_case("/a/{X}/b", &[("X", "x")], "/a/x/b"; "simple")]
    #[test_case("/{X}/{Y}/", &[], "/"; "all empty")]
    #[test_case("/{Bucket}/{Key+}", &[("Bucket", "b"), ("Key", "dir/sub/file.txt")], "/b/dir/sub/file.txt"; "greedy")]
    #[test_case("/{Bucket}/{Key}", &[("Bucket", "b"), ("Key", "dir/file")], "/b/dir%2Ffile"; "not greedy")]
    #[test_case("/{Key+}", &[("Key", "a b&c")], "/a%20b%26c"; "escaped")]
    #[test_case("/{Key+}", &[("Key", "a//b")], "/a/b"; "collapse after substitution")]
    fn resolve_path(template: &str, pairs: &[(&str, &str)], want: &str) {
        let template = UriTemplate::parse(template);
        let got = template.resolve(&values(pairs));
        assert_eq!(got.path, want);
    }

    #[test]
    fn empty_dynamic_query_omitted() {
        let template = UriTemplate::parse("/things?Marker={Marker}");
        let got = template.resolve(&values(&[]));
        assert_eq!(got.path, "/things");
        assert!(got.parameters.is_empty(), "{got:?}");

        let got = template.resolve(&values(&[("Marker", "")]));
        assert!(got.parameters.is_empty(), "{got:?}");

        let got = template.resolve(&values(&[("Marker", "m1")]));
        assert_eq!(
            got.parameters,
            vec![("Marker".to_string(), Some("m1".to_string()))]
        );
    }

    #[test]
    fn static_query_verbatim() {
        let template = UriTemplate::parse("/{Bucket}?list-type=2&prefix={Prefix}&tagging");
        let got = template.resolve(&values(&[("Bucket", "b"), ("Prefix", "logs/")]));
        assert_eq!(got.path, "/b");
        assert_eq!(
            got.parameters,
            vec![
                ("list-type".to_string(), Some("2".to_string())),
                ("tagging".to_string(), None),
                ("prefix".to_string(), Some("logs/".to_string())),
            ]
        );
    }

    #[test]
    fn malformed() {
        let template = UriTemplate::parse("/a/{oops");
        let got = template.resolve(&values(&[]));
        assert_eq!(got.path, "/a/{oops");
    }
}
