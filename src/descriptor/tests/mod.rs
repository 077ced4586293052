//! Unit tests for descriptor mocks
//!
//! Tests effective documentation priority and metadata block rendering.
//! No manifest loading involved - descriptors are constructed directly.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeMap;

use toml::Value;

use crate::descriptor::{Descriptor, DescriptorKind, format_meta_value};

fn metadata(entries: &[(&str, Value)]) -> BTreeMap<String, Value> {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), value.clone()))
        .collect()
}

#[test]
fn docstring_takes_priority_over_doc_key() {
    let descriptor = Descriptor::new(
        DescriptorKind::Attribute,
        Some("explicit docstring".to_string()),
        metadata(&[("doc", Value::String("keyword doc".to_string()))]),
    );

    assert_eq!(descriptor.doc(), "explicit docstring");
}

#[test]
fn doc_key_used_without_docstring() {
    let descriptor = Descriptor::new(
        DescriptorKind::DeviceProperty,
        None,
        metadata(&[("doc", Value::String("Host name".to_string()))]),
    );

    assert_eq!(descriptor.doc(), "Host name");
}

#[test]
fn empty_docstring_falls_back_to_doc_key() {
    let descriptor = Descriptor::new(
        DescriptorKind::Command,
        Some(String::new()),
        metadata(&[("doc", Value::String("keyword doc".to_string()))]),
    );

    assert_eq!(descriptor.doc(), "keyword doc");
}

#[test]
fn doc_empty_without_docstring_or_doc_key() {
    let descriptor = Descriptor::new(DescriptorKind::Attribute, None, BTreeMap::new());

    assert_eq!(descriptor.doc(), "");
}

#[test]
fn metadata_rendered_sorted() {
    let descriptor = Descriptor::new(
        DescriptorKind::Attribute,
        None,
        metadata(&[
            ("unit", Value::String("A".to_string())),
            ("label", Value::String("Current".to_string())),
            ("max_value", Value::Float(8.5)),
        ]),
    );

    let rendered = descriptor.render_metadata();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "Attribute:");
    assert_eq!(lines[1], "    - label : Current");
    assert_eq!(lines[2], "    - max_value : 8.5");
    assert_eq!(lines[3], "    - unit : A");
}

#[test]
fn metadata_rendering_skips_wiring_keys() {
    let descriptor = Descriptor::new(
        DescriptorKind::Attribute,
        None,
        metadata(&[
            ("doc", Value::String("hidden".to_string())),
            ("getter", Value::String("read_voltage".to_string())),
            ("setter", Value::String("write_voltage".to_string())),
            ("validator", Value::String("is_voltage_allowed".to_string())),
            ("label", Value::String("Voltage".to_string())),
        ]),
    );

    let rendered = descriptor.render_metadata();

    assert!(rendered.contains("label"));
    assert!(!rendered.contains("hidden"));
    assert!(!rendered.contains("read_voltage"));
    assert!(!rendered.contains("write_voltage"));
    assert!(!rendered.contains("is_voltage_allowed"));
}

#[test]
fn metadata_rendering_without_visible_keys() {
    let descriptor = Descriptor::new(
        DescriptorKind::Command,
        Some("Ramp the output.".to_string()),
        metadata(&[("doc", Value::String("hidden".to_string()))]),
    );

    assert_eq!(descriptor.render_metadata(), "Command.");
}

#[test]
fn empty_string_values_render_as_none() {
    let descriptor = Descriptor::new(
        DescriptorKind::DeviceProperty,
        None,
        metadata(&[("default_value", Value::String(String::new()))]),
    );

    let rendered = descriptor.render_metadata();

    assert!(rendered.contains("    - default_value : None"));
}

#[test]
fn format_meta_value_types() {
    assert_eq!(format_meta_value(&Value::String("str".to_string())), "str");
    assert_eq!(format_meta_value(&Value::String(String::new())), "None");
    assert_eq!(format_meta_value(&Value::Integer(9788)), "9788");
    assert_eq!(format_meta_value(&Value::Float(8.5)), "8.5");
    assert_eq!(format_meta_value(&Value::Boolean(true)), "true");
}

#[test]
fn section_titles_per_kind() {
    assert_eq!(
        DescriptorKind::ClassProperty.section_title(),
        "Class properties"
    );
    assert_eq!(
        DescriptorKind::DeviceProperty.section_title(),
        "Device properties"
    );
    assert_eq!(DescriptorKind::Attribute.section_title(), "Attributes");
    assert_eq!(DescriptorKind::Command.section_title(), "Commands");
}
