//! Descriptor resolution seam.
//!
//! The original device-control framework is never imported at documentation
//! time. Instead, a [`DescriptorResolver`] chosen before any manifest is
//! loaded decides which declaration names materialize as mock descriptors
//! and which base-class name marks a class as a device. Swapping the
//! resolver swaps the whole framework vocabulary without touching the
//! loader or the documenters.

use std::collections::BTreeMap;

use toml::Value;

use crate::descriptor::{Descriptor, DescriptorKind};


/// Maps manifest declarations onto mock descriptors.
pub trait DescriptorResolver {
    /// Returns true if `base` is the device base-class marker.
    fn is_device_base(&self, base: &str) -> bool;

    /// Resolves a declaration name into a mock descriptor.
    ///
    /// Returns `None` for declarations the resolver does not recognize;
    /// such members stay opaque and are never documented.
    fn resolve(
        &self,
        declaration: &str,
        docstring: Option<&str>,
        metadata: &BTreeMap<String, Value>,
    ) -> Option<Descriptor>;
}

/// Built-in resolver for the mocked device-control framework.
///
/// Recognizes the four descriptor declarations (`class_property`,
/// `device_property`, `attribute`, `command`) and the `Device` base
/// marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockResolver;

impl MockResolver {
    /// The base-class name that marks a device class.
    pub const DEVICE_BASE: &'static str = "Device";

    fn kind_for(declaration: &str) -> Option<DescriptorKind> {
        match declaration {
            "class_property" => Some(DescriptorKind::ClassProperty),
            "device_property" => Some(DescriptorKind::DeviceProperty),
            "attribute" => Some(DescriptorKind::Attribute),
            "command" => Some(DescriptorKind::Command),
            _ => None,
        }
    }
}

impl DescriptorResolver for MockResolver {
    fn is_device_base(&self, base: &str) -> bool {
        base == Self::DEVICE_BASE
    }

    fn resolve(
        &self,
        declaration: &str,
        docstring: Option<&str>,
        metadata: &BTreeMap<String, Value>,
    ) -> Option<Descriptor> {
        let kind = Self::kind_for(declaration)?;

        Some(Descriptor::new(
            kind,
            docstring.map(ToOwned::to_owned),
            metadata.clone(),
        ))
    }
}
