//! Per-pass section header bookkeeping.

use std::collections::HashMap;

use crate::descriptor::DescriptorKind;

/// Tracks which section headers have been emitted in the current pass.
///
/// A documentation pass over a device class emits at most one header per
/// descriptor kind, the first time a member of that kind is encountered.
/// The registry is reset explicitly at the start of each pass; headers
/// are per-pass, not global.
#[derive(Debug, Default)]
pub struct SectionRegistry {
    started: HashMap<DescriptorKind, bool>,
}

impl SectionRegistry {
    /// Creates a registry with no sections started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the kind's section as started.
    ///
    /// Returns true if this is the first encounter in the current pass,
    /// meaning the caller should emit the section header now.
    pub fn start(&mut self, kind: DescriptorKind) -> bool {
        let started = self.started.entry(kind).or_insert(false);
        if *started {
            return false;
        }
        *started = true;
        true
    }

    /// Returns whether the kind's section header has been emitted.
    pub fn is_started(&self, kind: DescriptorKind) -> bool {
        self.started.get(&kind).copied().unwrap_or(false)
    }

    /// Clears all started flags, beginning a new pass.
    pub fn reset(&mut self) {
        self.started.clear();
    }
}
