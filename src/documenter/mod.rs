//! Classifier and renderer units for device documentation.
//!
//! Mirrors the host documentation generator's extension surface: one unit
//! decides whether a class is a documentable device and filters its
//! members, and one unit per descriptor kind (plus an umbrella unit)
//! renders member content and emits section headers. Units are registered
//! in a [`DocumenterRegistry`] and dispatched by priority.

mod device;
mod item;
mod registry;
mod section;
mod sink;


pub use device::{DeviceDocumenter, DocumentedMember};
pub use item::ItemDocumenter;
pub use registry::DocumenterRegistry;
pub use section::SectionRegistry;
pub use sink::{ContentSink, StringSink};
