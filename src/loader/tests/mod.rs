//! Unit tests for manifest parsing
//!
//! Tests the manifest format, member resolution and skip policy.
//! No filesystem access - caching and fresh loads are covered by the
//! integration tests.

#![allow(clippy::unwrap_used)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::descriptor::DescriptorKind;
use crate::loader::{ModuleLoader, SkipPolicy};
use crate::resolver::MockResolver;

const MANIFEST: &str = r#"
[module]
name = "powersupply"

[[class]]
name = "PowerSupply"
base = "Device"
doc = "A power supply device."

[[class.member]]
name = "host"
declaration = "device_property"

[class.member.metadata]
dtype = "str"
doc = "Host name"

[[class.member]]
name = "voltage"
declaration = "attribute"
doc = "Complement for voltage attribute documentation"

[[class.member]]
name = "init_device"

[[class.member]]
name = "ramp"
declaration = "command"

[class.member.metadata]
dtype_in = "float"
"#;

#[test]
fn parses_module_and_classes() {
    let resolver = MockResolver;
    let loader = ModuleLoader::new(&resolver);

    let module = loader.parse("powersupply", MANIFEST).unwrap();

    assert_eq!(module.name, "powersupply");
    assert_eq!(module.classes.len(), 1);

    let class = module.class("PowerSupply").unwrap();
    assert!(class.is_device);
    assert_eq!(class.doc.as_deref(), Some("A power supply device."));
    assert_eq!(class.members.len(), 4);
}

#[test]
fn members_keep_declaration_order() {
    let resolver = MockResolver;
    let loader = ModuleLoader::new(&resolver);

    let module = loader.parse("powersupply", MANIFEST).unwrap();
    let class = module.class("PowerSupply").unwrap();

    let names: Vec<&str> = class
        .members
        .iter()
        .map(|member| member.name.as_str())
        .collect();

    assert_eq!(names, ["host", "voltage", "init_device", "ramp"]);
}

#[test]
fn declared_members_resolve_to_descriptors() {
    let resolver = MockResolver;
    let loader = ModuleLoader::new(&resolver);

    let module = loader.parse("powersupply", MANIFEST).unwrap();
    let class = module.class("PowerSupply").unwrap();

    let host = class.members[0].value.as_descriptor().unwrap();
    assert_eq!(host.kind(), DescriptorKind::DeviceProperty);
    assert_eq!(host.doc(), "Host name");

    let voltage = class.members[1].value.as_descriptor().unwrap();
    assert_eq!(voltage.kind(), DescriptorKind::Attribute);
    assert_eq!(
        voltage.doc(),
        "Complement for voltage attribute documentation"
    );

    let ramp = class.members[3].value.as_descriptor().unwrap();
    assert_eq!(ramp.kind(), DescriptorKind::Command);
}

#[test]
fn undeclared_members_stay_opaque() {
    let resolver = MockResolver;
    let loader = ModuleLoader::new(&resolver);

    let module = loader.parse("powersupply", MANIFEST).unwrap();
    let class = module.class("PowerSupply").unwrap();

    assert!(class.members[2].value.as_descriptor().is_none());
}

const GADGET: &str = r#"
[[class]]
name = "Gadget"
base = "Device"

[[class.member]]
name = "stream"
declaration = "pipe"
"#;

/// Collects log output so tests can assert on emitted warnings.
#[derive(Clone, Default)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl CaptureWriter {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs(run: impl FnOnce()) -> String {
    let writer = CaptureWriter::default();
    let sink = writer.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || sink.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    tracing::subscriber::with_default(subscriber, run);

    writer.contents()
}

#[test]
fn unresolved_declarations_stay_opaque_under_silent_policy() {
    let resolver = MockResolver;
    let loader = ModuleLoader::new(&resolver).with_skip_policy(SkipPolicy::Silent);

    let module = loader.parse("gadget", GADGET).unwrap();
    let class = module.class("Gadget").unwrap();

    assert!(class.members[0].value.as_descriptor().is_none());
}

#[test]
fn warn_policy_logs_unresolved_declarations() {
    let logs = capture_logs(|| {
        let resolver = MockResolver;
        let loader = ModuleLoader::new(&resolver).with_skip_policy(SkipPolicy::Warn);

        let module = loader.parse("gadget", GADGET).unwrap();
        let class = module.class("Gadget").unwrap();

        // The member is still omitted, the policy only adds a diagnostic.
        assert!(class.members[0].value.as_descriptor().is_none());
    });

    assert!(logs.contains("unresolved declaration"));
    assert!(logs.contains("stream"));
    assert!(logs.contains("pipe"));
}

#[test]
fn silent_policy_logs_nothing() {
    let logs = capture_logs(|| {
        let resolver = MockResolver;
        let loader = ModuleLoader::new(&resolver).with_skip_policy(SkipPolicy::Silent);

        loader.parse("gadget", GADGET).unwrap();
    });

    assert!(logs.is_empty());
}

#[test]
fn class_without_device_base_is_not_a_device() {
    let manifest = r#"
[[class]]
name = "Helper"

[[class.member]]
name = "voltage"
declaration = "attribute"
"#;

    let resolver = MockResolver;
    let loader = ModuleLoader::new(&resolver);

    let module = loader.parse("helper", manifest).unwrap();
    let class = module.class("Helper").unwrap();

    // Descriptor-typed members alone never make a class a device.
    assert!(!class.is_device);
    assert!(class.members[0].value.as_descriptor().is_some());
}

#[test]
fn module_name_falls_back_to_file_stem() {
    let resolver = MockResolver;
    let loader = ModuleLoader::new(&resolver);

    let module = loader.parse("bare", "[[class]]\nname = \"Empty\"\n").unwrap();

    assert_eq!(module.name, "bare");
}

#[test]
fn invalid_manifest_is_a_parse_error() {
    let resolver = MockResolver;
    let loader = ModuleLoader::new(&resolver);

    let result = loader.parse("broken", "class = \"not a table\"");

    assert!(result.is_err());
}
