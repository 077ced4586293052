//! Renderer units for descriptor members.

use crate::descriptor::{Descriptor, DescriptorKind};

use super::{ContentSink, SectionRegistry};

/// Prefix turning a metadata line into a quoted block line.
const QUOTE_PREFIX: &str = "| ";

/// Underline character for section headers.
const SECTION_UNDERLINE: char = '-';

/// A renderer unit for one family of descriptor members.
///
/// Four units cover the specific descriptor kinds and a fifth umbrella
/// unit accepts any descriptor at lower priority, so every descriptor
/// member always has a renderer. Each unit emits its section header once
/// per pass, then the member content: the quoted metadata block followed
/// by the effective documentation text, before anything else.
#[derive(Debug, Clone)]
pub struct ItemDocumenter {
    objtype: &'static str,
    kinds: &'static [DescriptorKind],
    priority: i32,
}

impl ItemDocumenter {
    /// Unit for class property descriptors.
    pub fn class_property() -> Self {
        Self {
            objtype: "deviceclassproperty",
            kinds: &[DescriptorKind::ClassProperty],
            priority: 11,
        }
    }

    /// Unit for device property descriptors.
    pub fn device_property() -> Self {
        Self {
            objtype: "deviceproperty",
            kinds: &[DescriptorKind::DeviceProperty],
            priority: 11,
        }
    }

    /// Unit for attribute descriptors.
    pub fn attribute() -> Self {
        Self {
            objtype: "deviceattribute",
            kinds: &[DescriptorKind::Attribute],
            priority: 11,
        }
    }

    /// Unit for command descriptors.
    pub fn command() -> Self {
        Self {
            objtype: "devicecommand",
            kinds: &[DescriptorKind::Command],
            priority: 11,
        }
    }

    /// Umbrella unit accepting every descriptor kind.
    pub fn umbrella() -> Self {
        Self {
            objtype: "deviceitem",
            kinds: &DescriptorKind::ALL,
            priority: 10,
        }
    }

    /// The unit's object type name, used for registration and logging.
    pub fn objtype(&self) -> &'static str {
        self.objtype
    }

    /// Dispatch priority; higher wins when several units accept a member.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Returns true if this unit renders descriptors of the given kind.
    pub fn can_document(&self, descriptor: &Descriptor) -> bool {
        self.kinds.contains(&descriptor.kind())
    }

    /// Renders one descriptor member into the sink.
    ///
    /// Emits the kind's section header if this is its first member in the
    /// current pass, then the member name, the metadata rendering as a
    /// quoted block, and the effective documentation text.
    pub fn generate(
        &self,
        name: &str,
        descriptor: &Descriptor,
        sections: &mut SectionRegistry,
        sink: &mut dyn ContentSink,
    ) {
        if sections.start(descriptor.kind()) {
            self.emit_section_header(descriptor.kind(), sink);
        }

        sink.add_line(name);

        let indent = sink.indent();
        sink.set_indent(format!("{indent}    "));

        for line in descriptor.render_metadata().lines() {
            sink.add_line(&format!("{QUOTE_PREFIX}{line}"));
        }

        let doc = descriptor.doc();
        if !doc.is_empty() {
            sink.add_blank();
            for line in doc.lines() {
                sink.add_line(line);
            }
        }

        sink.set_indent(indent);
        sink.add_blank();
    }

    // Section headers are emitted flush left even when member content is
    // indented, matching the host generator's header placement.
    fn emit_section_header(&self, kind: DescriptorKind, sink: &mut dyn ContentSink) {
        let title = kind.section_title();
        let previous = sink.indent();
        sink.set_indent(String::new());

        sink.add_line(title);
        sink.add_line(&SECTION_UNDERLINE.to_string().repeat(title.len()));
        sink.add_blank();

        sink.set_indent(previous);
    }
}
