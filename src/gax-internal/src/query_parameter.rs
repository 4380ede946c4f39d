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

//! Flatten request values into query protocol parameters.
//!
//! Nested structures prefix their member names with `{Name}.`. Lists use
//! `{Name}.member.{i}` (or a custom tag, or `{Name}.{i}` when flattened).
//! Maps use `{Name}.entry.{i}.key` and `{Name}.entry.{i}.value`. Indexes
//! start at 1 and are positional: a null element is skipped but still
//! consumes its index.

use crate::shape::{ListStyle, Member, Structure, Value};
use crate::timestamp::{self, TimestampError};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

type Result<T> = std::result::Result<T, TimestampError>;

/// Encodes all the members of `structure`, in declaration order.
pub fn encode(structure: &Structure) -> Result<Vec<(String, String)>> {
    let mut parameters = Vec::new();
    add_structure(&mut parameters, None, structure)?;
    Ok(parameters)
}

/// Formats a scalar value for a query parameter, URI label, or XML text.
///
/// Returns `None` for collections and structures.
pub fn format_scalar(value: &Value) -> Result<Option<String>> {
    let s = match value {
        Value::String(s) => s.clone(),
        Value::Integer(i) => format!("{i}"),
        Value::Double(d) => format!("{d}"),
        Value::Boolean(b) => format!("{b}"),
        Value::Timestamp(t) => timestamp::iso8601(t)?,
        Value::Blob(b) => STANDARD.encode(b),
        Value::List(_) | Value::Map(_) | Value::Structure(_) => return Ok(None),
    };
    Ok(Some(s))
}

fn add_structure(
    parameters: &mut Vec<(String, String)>,
    prefix: Option<&str>,
    structure: &Structure,
) -> Result<()> {
    for (member, value) in structure.iter() {
        let name = match prefix {
            None => member.name().to_string(),
            Some(p) => format!("{p}.{}", member.name()),
        };
        add(parameters, &name, member, value)?;
    }
    Ok(())
}

fn add(
    parameters: &mut Vec<(String, String)>,
    name: &str,
    member: &Member,
    value: &Value,
) -> Result<()> {
    match value {
        Value::Structure(s) => add_structure(parameters, Some(name), s),
        Value::List(list) => {
            for (index, element) in list.iter().enumerate() {
                let Some(element) = element else {
                    continue;
                };
                let key = match member.list_style() {
                    ListStyle::Member => format!("{name}.member.{}", index + 1),
                    ListStyle::Tag(tag) => format!("{name}.{tag}.{}", index + 1),
                    ListStyle::Flattened => format!("{name}.{}", index + 1),
                };
                // Nested collections use the default conventions.
                add(parameters, &key, &Member::body(""), element)?;
            }
            Ok(())
        }
        Value::Map(entries) => {
            for (index, (k, v)) in entries.iter().enumerate() {
                let Some(v) = v else {
                    continue;
                };
                let entry = format!("{name}.entry.{}", index + 1);
                parameters.push((format!("{entry}.{}", member.map_key()), k.clone()));
                let key = format!("{entry}.{}", member.map_value());
                add(parameters, &key, &Member::body(""), v)?;
            }
            Ok(())
        }
        scalar => {
            if let Some(s) = format_scalar(scalar)? {
                parameters.push((name.to_string(), s));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Marshall;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;
    use time::macros::datetime;

    type TestResult = anyhow::Result<()>;

    fn pairs(p: &[(&str, &str)]) -> Vec<(String, String)> {
        p.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[derive(Default)]
    struct Ebs {
        volume_size: Option<i32>,
        delete_on_termination: Option<bool>,
    }

    impl Marshall for Ebs {
        fn marshall(&self) -> Structure {
            Structure::new()
                .member(Member::body("VolumeSize"), &self.volume_size)
                .member(
                    Member::body("DeleteOnTermination"),
                    &self.delete_on_termination,
                )
        }
    }

    #[derive(Default)]
    struct BlockDeviceMapping {
        device_name: Option<String>,
        ebs: Option<Ebs>,
    }

    impl Marshall for BlockDeviceMapping {
        fn marshall(&self) -> Structure {
            Structure::new()
                .member(Member::body("DeviceName"), &self.device_name)
                .member(Member::body("Ebs"), &self.ebs)
        }
    }

    #[test]
    fn scalars() -> TestResult {
        let s = Structure::new()
            .member(Member::body("Name"), "my-group")
            .member(Member::body("MaxRecords"), &50)
            .member(Member::body("Ratio"), &0.5)
            .member(Member::body("Force"), &true)
            .member(
                Member::body("StartTime"),
                &datetime!(2015-01-25 08:00:00 UTC),
            )
            .member(
                Member::body("UserData"),
                &bytes::Bytes::from_static(b"hello"),
            );
        let got = encode(&s)?;
        assert_eq!(
            got,
            pairs(&[
                ("Name", "my-group"),
                ("MaxRecords", "50"),
                ("Ratio", "0.5"),
                ("Force", "true"),
                ("StartTime", "2015-01-25T08:00:00.000Z"),
                ("UserData", "aGVsbG8="),
            ])
        );
        Ok(())
    }

    #[test]
    fn list_index_is_positional() -> TestResult {
        let names = vec![Some("A".to_string()), None, Some("B".to_string())];
        let s = Structure::new().member(Member::body("AutoScalingGroupNames"), &names);
        let got = encode(&s)?;
        assert_eq!(
            got,
            pairs(&[
                ("AutoScalingGroupNames.member.1", "A"),
                ("AutoScalingGroupNames.member.3", "B"),
            ])
        );
        Ok(())
    }

    #[test]
    fn list_styles() -> TestResult {
        let names = vec!["a".to_string(), "b".to_string()];
        let s = Structure::new()
            .member(Member::body("Tagged").with_list_tag("item"), &names)
            .member(Member::body("Flat").flattened(), &names);
        let got = encode(&s)?;
        assert_eq!(
            got,
            pairs(&[
                ("Tagged.item.1", "a"),
                ("Tagged.item.2", "b"),
                ("Flat.1", "a"),
                ("Flat.2", "b"),
            ])
        );
        Ok(())
    }

    #[test]
    fn empty_list_is_omitted() -> TestResult {
        let s = Structure::new().member(Member::body("Names"), &Some(Vec::<String>::new()));
        assert!(encode(&s)?.is_empty());
        Ok(())
    }

    #[test]
    fn nested_structures() -> TestResult {
        let mappings = vec![
            BlockDeviceMapping {
                device_name: Some("/dev/sda1".into()),
                ..Default::default()
            },
            BlockDeviceMapping {
                device_name: Some("/dev/sdb".into()),
                ebs: Some(Ebs {
                    volume_size: Some(100),
                    delete_on_termination: Some(false),
                }),
            },
        ];
        let s = Structure::new().member(Member::body("BlockDeviceMappings"), &mappings);
        let got = encode(&s)?;
        assert_eq!(
            got,
            pairs(&[
                ("BlockDeviceMappings.member.1.DeviceName", "/dev/sda1"),
                ("BlockDeviceMappings.member.2.DeviceName", "/dev/sdb"),
                ("BlockDeviceMappings.member.2.Ebs.VolumeSize", "100"),
                ("BlockDeviceMappings.member.2.Ebs.DeleteOnTermination", "false"),
            ])
        );
        Ok(())
    }

    #[test]
    fn maps() -> TestResult {
        let mut attributes = BTreeMap::new();
        attributes.insert("color".to_string(), Some("blue".to_string()));
        attributes.insert("shape".to_string(), None);
        attributes.insert("size".to_string(), Some("large".to_string()));
        let s = Structure::new()
            .member(Member::body("Attributes"), &attributes)
            .member(
                Member::body("Renamed").with_map_names("Name", "Value"),
                &BTreeMap::from([("k".to_string(), 1)]),
            );
        let got = encode(&s)?;
        assert_eq!(
            got,
            pairs(&[
                ("Attributes.entry.1.key", "color"),
                ("Attributes.entry.1.value", "blue"),
                ("Attributes.entry.3.key", "size"),
                ("Attributes.entry.3.value", "large"),
                ("Renamed.entry.1.Name", "k"),
                ("Renamed.entry.1.Value", "1"),
            ])
        );
        Ok(())
    }

    #[test]
    fn idempotent() -> TestResult {
        let mappings = vec![BlockDeviceMapping {
            device_name: Some("/dev/sdb".into()),
            ebs: Some(Ebs {
                volume_size: Some(8),
                ..Default::default()
            }),
        }];
        let s = Structure::new()
            .member(Member::body("Name"), "n")
            .member(Member::body("BlockDeviceMappings"), &mappings);
        assert_eq!(encode(&s)?, encode(&s)?);
        Ok(())
    }
}
