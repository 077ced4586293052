//! Device module and class model.
//!
//! Represents the introspectable shape of a device module once its manifest
//! has been loaded: classes in manifest order, each with named members in
//! declaration order. Only the device marker and descriptor-typed members
//! matter to documentation; everything else is opaque.

use crate::descriptor::Descriptor;

/// A loaded device module: a named collection of classes.
#[derive(Debug, Clone)]
pub struct DeviceModule {
    /// Module name, used for logging and lookups.
    pub name: String,

    /// Classes in manifest order.
    pub classes: Vec<ClassInfo>,
}

impl DeviceModule {
    /// Looks up a class by name.
    pub fn class(&self, name: &str) -> Option<&ClassInfo> {
        self.classes.iter().find(|class| class.name == name)
    }
}

/// A single class from a device module.
#[derive(Debug, Clone)]
pub struct ClassInfo {
    /// Class name.
    pub name: String,

    /// Whether the class carries the device base marker.
    ///
    /// Classification as a device depends on this flag alone, never on
    /// the members.
    pub is_device: bool,

    /// Class-level docstring, if any.
    pub doc: Option<String>,

    /// Named members in declaration order.
    pub members: Vec<Member>,
}

/// A named class member.
#[derive(Debug, Clone)]
pub struct Member {
    /// Member name as declared in the class body.
    pub name: String,

    /// The member's value.
    pub value: MemberValue,
}

/// The value of a class member, as far as documentation is concerned.
#[derive(Debug, Clone)]
pub enum MemberValue {
    /// A descriptor declaration (class property, device property,
    /// attribute or command).
    Descriptor(Descriptor),

    /// Anything else: methods, constants, plain fields. Never documented.
    Opaque,
}

impl MemberValue {
    /// Returns the descriptor if this member is descriptor-valued.
    pub fn as_descriptor(&self) -> Option<&Descriptor> {
        match self {
            MemberValue::Descriptor(descriptor) => Some(descriptor),
            MemberValue::Opaque => None,
        }
    }
}
