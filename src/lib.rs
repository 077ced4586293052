//! Devicedoc - Reference documentation generator for device-control modules.
//!
//! Devicedoc extracts the declarative descriptors (class properties, device
//! properties, attributes and commands) from device class manifests and
//! renders them as structured documentation sections. The main features
//! include:
//!
//! - Mock descriptor types that stand in for the real hardware-control
//!   framework, so device modules can be documented without it installed
//! - Classifier/renderer units for device classes and each descriptor kind
//! - A manifest loader with explicit fresh-load semantics
//! - CLI interface for generating documentation files
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use devicedoc::generator::DocsGenerator;
//! use devicedoc::loader::ModuleLoader;
//! use devicedoc::resolver::MockResolver;
//!
//! let resolver = MockResolver;
//! let mut loader = ModuleLoader::new(&resolver);
//!
//! let generator = DocsGenerator::new().with_output_dir("docs/devices");
//! generator.generate_all(&mut loader, &["powersupply.toml".into()])?;
//! # Ok::<(), devicedoc::DevicedocError>(())
//! ```

/// Core error types and result aliases.
pub mod core;

/// Mock descriptor types and their metadata rendering.
pub mod descriptor;

/// Device module and class model.
pub mod device;

/// Descriptor resolution seam between manifests and mocks.
pub mod resolver;

/// Manifest loading with caching and explicit fresh loads.
pub mod loader;

/// Classifier and renderer units for devices and descriptors.
pub mod documenter;

/// Documentation file generation driver.
pub mod generator;

/// Tracing initialization for the CLI.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{DevicedocError, Result};
