//! Mock descriptor types for device-control declarations.
//!
//! The real hardware-control framework declares device members through
//! `class_property`, `device_property`, `attribute` and `command`
//! declarations. At documentation time those declarations are materialized
//! as [`Descriptor`] values: metadata plus documentation text, no runtime
//! behavior.

use std::collections::BTreeMap;

use toml::Value;

#[cfg(test)]
mod tests;

/// Metadata keys that are wiring rather than documentation.
///
/// These reference getter/setter/validator hooks or duplicate the
/// documentation text and are never rendered in the metadata block.
const HIDDEN_KEYS: [&str; 4] = ["doc", "getter", "setter", "validator"];

/// The kind of a device descriptor declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorKind {
    /// A property shared by every device of the class.
    ClassProperty,
    /// A per-device configuration property.
    DeviceProperty,
    /// A readable (and possibly writable) device attribute.
    Attribute,
    /// A command the device can execute.
    Command,
}

impl DescriptorKind {
    /// All descriptor kinds.
    pub const ALL: [DescriptorKind; 4] = [
        DescriptorKind::ClassProperty,
        DescriptorKind::DeviceProperty,
        DescriptorKind::Attribute,
        DescriptorKind::Command,
    ];

    /// Display title used when rendering a single descriptor.
    pub fn title(self) -> &'static str {
        match self {
            DescriptorKind::ClassProperty => "Class property",
            DescriptorKind::DeviceProperty => "Device property",
            DescriptorKind::Attribute => "Attribute",
            DescriptorKind::Command => "Command",
        }
    }

    /// Section title emitted once per documentation pass.
    pub fn section_title(self) -> &'static str {
        match self {
            DescriptorKind::ClassProperty => "Class properties",
            DescriptorKind::DeviceProperty => "Device properties",
            DescriptorKind::Attribute => "Attributes",
            DescriptorKind::Command => "Commands",
        }
    }
}

/// A mock descriptor extracted from a device class declaration.
///
/// Stores arbitrary named metadata and an optional explicit docstring.
/// Descriptors are created once when a manifest is loaded and are
/// immutable afterwards; construction accepts any input.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    kind: DescriptorKind,
    docstring: Option<String>,
    metadata: BTreeMap<String, Value>,
}

impl Descriptor {
    /// Creates a descriptor from its kind, explicit docstring and metadata.
    pub fn new(
        kind: DescriptorKind,
        docstring: Option<String>,
        metadata: BTreeMap<String, Value>,
    ) -> Self {
        Self {
            kind,
            docstring,
            metadata,
        }
    }

    /// Returns the descriptor kind.
    pub fn kind(&self) -> DescriptorKind {
        self.kind
    }

    /// Returns the effective documentation text for this descriptor.
    ///
    /// An explicit docstring takes priority over the `doc` metadata value;
    /// a descriptor with neither documents as the empty string.
    pub fn doc(&self) -> &str {
        if let Some(doc) = self.docstring.as_deref()
            && !doc.is_empty()
        {
            return doc;
        }

        self.metadata
            .get("doc")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// Renders the descriptor metadata as a human-readable block.
    ///
    /// Produces a title line followed by one line per metadata key in
    /// sorted order. Wiring keys (`doc`, `getter`, `setter`, `validator`)
    /// are skipped and empty string values are shown as `None`. A
    /// descriptor without visible metadata renders as the bare title.
    pub fn render_metadata(&self) -> String {
        let lines: Vec<String> = self
            .metadata
            .iter()
            .filter(|(key, _)| !HIDDEN_KEYS.contains(&key.as_str()))
            .map(|(key, value)| format!("    - {} : {}", key, format_meta_value(value)))
            .collect();

        if lines.is_empty() {
            return format!("{}.", self.kind.title());
        }

        format!("{}:\n{}", self.kind.title(), lines.join("\n"))
    }
}

/// Formats a metadata value for display in a rendered metadata block.
///
/// Strings are shown bare (with the empty string as `None`); other value
/// types use their TOML representation.
pub fn format_meta_value(value: &Value) -> String {
    match value {
        Value::String(s) if s.is_empty() => "None".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
