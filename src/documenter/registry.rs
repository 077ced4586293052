//! Registration and dispatch of documenter units.

use crate::descriptor::Descriptor;
use crate::device::ClassInfo;

use super::{ContentSink, DeviceDocumenter, ItemDocumenter, SectionRegistry};

/// Registry for the classifier/renderer units.
///
/// Holds the device unit plus the item units, ordered by descending
/// priority. Dispatch for a descriptor picks the highest-priority unit
/// that accepts its kind; with the builtin units registered that is the
/// kind-specific unit, with the umbrella unit as the fallback.
pub struct DocumenterRegistry {
    device: DeviceDocumenter,
    items: Vec<ItemDocumenter>,
}

impl DocumenterRegistry {
    /// Creates a registry with only the device unit registered.
    pub fn new() -> Self {
        Self {
            device: DeviceDocumenter::new(),
            items: Vec::new(),
        }
    }

    /// Creates a registry with all builtin units registered: the device
    /// unit, the four kind-specific item units and the umbrella unit.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_item(ItemDocumenter::device_property());
        registry.register_item(ItemDocumenter::class_property());
        registry.register_item(ItemDocumenter::attribute());
        registry.register_item(ItemDocumenter::command());
        registry.register_item(ItemDocumenter::umbrella());
        registry
    }

    /// Registers an item unit, keeping units ordered by priority.
    pub fn register_item(&mut self, unit: ItemDocumenter) {
        self.items.push(unit);
        self.items.sort_by_key(|item| -item.priority());
    }

    /// Returns the device classifier unit.
    pub fn device(&self) -> &DeviceDocumenter {
        &self.device
    }

    /// Returns the registered item units in dispatch order.
    pub fn items(&self) -> &[ItemDocumenter] {
        &self.items
    }

    /// Finds the highest-priority unit accepting the descriptor.
    pub fn documenter_for(&self, descriptor: &Descriptor) -> Option<&ItemDocumenter> {
        self.items.iter().find(|unit| unit.can_document(descriptor))
    }

    /// Runs a full documentation pass over one class.
    ///
    /// Returns false without emitting anything when the class does not
    /// carry the device marker; such classes are never offered to member
    /// classification.
    pub fn document_class(&self, class: &ClassInfo, sink: &mut dyn ContentSink) -> bool {
        if !self.device.can_document(class) {
            return false;
        }

        let mut sections = SectionRegistry::new();
        self.device.generate(class, self, &mut sections, sink);
        true
    }
}

impl Default for DocumenterRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
