//! Classifier and renderer for device classes.

use tracing::debug;

use crate::descriptor::Descriptor;
use crate::device::ClassInfo;

use super::{ContentSink, DocumenterRegistry, SectionRegistry};

/// Underline character for the device banner.
const BANNER_UNDERLINE: char = '*';

/// A descriptor member selected for documentation.
#[derive(Debug, Clone, Copy)]
pub struct DocumentedMember<'a> {
    /// Member name as declared in the class body.
    pub name: &'a str,

    /// The member's descriptor.
    pub descriptor: &'a Descriptor,

    /// Selected members are documented unconditionally, regardless of
    /// naming convention or visibility.
    pub always_document: bool,
}

/// Classifier and renderer for device classes.
///
/// A class qualifies iff it carries the device marker; its documentable
/// members are exactly the descriptor-valued ones, in declaration order.
#[derive(Debug, Default)]
pub struct DeviceDocumenter;

impl DeviceDocumenter {
    /// Banner template for a documented device class.
    pub const SECTION: &'static str = "{} Device Documentation";

    /// Creates the device documenter unit.
    pub fn new() -> Self {
        Self
    }

    /// Returns true iff the class is marked as a device.
    ///
    /// The decision never looks at the members; a class full of
    /// descriptors without the marker is not a device.
    pub fn can_document(&self, class: &ClassInfo) -> bool {
        class.is_device
    }

    /// Selects the documentable members of a device class.
    ///
    /// Keeps the members whose values are descriptors, preserving
    /// declaration order, each flagged as always documented.
    pub fn filter_members<'a>(&self, class: &'a ClassInfo) -> Vec<DocumentedMember<'a>> {
        class
            .members
            .iter()
            .filter_map(|member| {
                member.value.as_descriptor().map(|descriptor| DocumentedMember {
                    name: &member.name,
                    descriptor,
                    always_document: true,
                })
            })
            .collect()
    }

    /// Renders the full documentation pass for a device class.
    ///
    /// Resets the section registry, emits the class banner and docstring,
    /// then dispatches each documentable member to its renderer unit.
    pub fn generate(
        &self,
        class: &ClassInfo,
        registry: &DocumenterRegistry,
        sections: &mut SectionRegistry,
        sink: &mut dyn ContentSink,
    ) {
        sections.reset();

        let banner = Self::SECTION.replace("{}", &class.name);
        let previous = sink.indent();
        sink.set_indent(String::new());
        sink.add_line(&banner);
        sink.add_line(&BANNER_UNDERLINE.to_string().repeat(banner.len()));
        sink.add_blank();
        sink.set_indent(previous);

        if let Some(doc) = class.doc.as_deref() {
            for line in doc.lines() {
                sink.add_line(line);
            }
            sink.add_blank();
        }

        let members = self.filter_members(class);
        debug!(
            class = %class.name,
            members = members.len(),
            "documenting device class"
        );

        for member in members {
            if let Some(unit) = registry.documenter_for(member.descriptor) {
                unit.generate(member.name, member.descriptor, sections, sink);
            }
        }
    }
}
