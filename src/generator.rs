//! Documentation file generation.
//!
//! Drives the documentation pass the way the host generator would: load
//! manifests, offer each class to the device classifier, and write one
//! reStructuredText file per documented device class.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{info, warn};

use crate::{
    DevicedocError, Result,
    device::DeviceModule,
    documenter::{DocumenterRegistry, StringSink},
    loader::{ModuleLoader, SkipPolicy},
};

/// Generates documentation files for device modules.
///
/// Creates one file per device class from module manifests, using the
/// registered classifier/renderer units.
pub struct DocsGenerator {
    output_dir: String,
    registry: DocumenterRegistry,
    skip_policy: SkipPolicy,
    fresh: bool,
}

impl Default for DocsGenerator {
    fn default() -> Self {
        Self {
            output_dir: "docs/devices".to_string(),
            registry: DocumenterRegistry::with_builtins(),
            skip_policy: SkipPolicy::default(),
            fresh: false,
        }
    }
}

impl DocsGenerator {
    /// Creates a generator with the builtin units and default output
    /// directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom output directory for generated documentation.
    pub fn with_output_dir(mut self, output_dir: impl Into<String>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Sets the policy applied when a manifest fails to load.
    pub fn with_skip_policy(mut self, skip_policy: SkipPolicy) -> Self {
        self.skip_policy = skip_policy;
        self
    }

    /// Forces manifests to be re-read from disk, bypassing the loader
    /// cache.
    pub fn with_fresh_load(mut self, fresh: bool) -> Self {
        self.fresh = fresh;
        self
    }

    /// Replaces the documenter registry, e.g. with custom units.
    pub fn with_registry(mut self, registry: DocumenterRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Generates documentation for all given module manifests.
    ///
    /// A manifest that fails to load is skipped according to the skip
    /// policy; generation continues with the remaining manifests.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be created or a
    /// documentation file cannot be written.
    pub fn generate_all(&self, loader: &mut ModuleLoader<'_>, paths: &[PathBuf]) -> Result<()> {
        self.ensure_output_dir()?;

        let mut generated = 0usize;
        for path in paths {
            match self.load(loader, path) {
                Ok(module) => generated += self.generate_module_files(&module)?,
                Err(err) => {
                    if self.skip_policy == SkipPolicy::Warn {
                        warn!(path = %path.display(), error = %err, "skipping module");
                    }
                }
            }
        }

        info!(files = generated, "documentation generation finished");
        Ok(())
    }

    /// Renders every device class of a module to an in-memory page.
    ///
    /// Returns `(class name, page content)` pairs in manifest order.
    /// Classes without the device marker are never offered to member
    /// classification and produce no page.
    pub fn generate_module(&self, module: &DeviceModule) -> Vec<(String, String)> {
        module
            .classes
            .iter()
            .filter_map(|class| {
                let mut sink = StringSink::new();
                self.registry
                    .document_class(class, &mut sink)
                    .then(|| (class.name.clone(), sink.into_string()))
            })
            .collect()
    }

    /// Generates documentation for a single device class by name.
    ///
    /// # Errors
    ///
    /// Returns `DevicedocError::UnknownClass` if the manifest declares no
    /// device class with that name, and an error if the manifest cannot
    /// be loaded or the file cannot be written.
    pub fn generate_class(
        &self,
        loader: &mut ModuleLoader<'_>,
        path: &Path,
        class_name: &str,
    ) -> Result<()> {
        self.ensure_output_dir()?;

        let module = self.load(loader, path)?;
        let class = module
            .class(class_name)
            .filter(|class| self.registry.device().can_document(class))
            .ok_or_else(|| DevicedocError::UnknownClass(class_name.to_string()))?;

        let mut sink = StringSink::new();
        self.registry.document_class(class, &mut sink);
        self.write_page(class_name, &sink.into_string())
    }

    /// Lists the device classes of a module manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be loaded.
    pub fn list_classes(
        &self,
        loader: &mut ModuleLoader<'_>,
        path: &Path,
    ) -> Result<Vec<String>> {
        let module = self.load(loader, path)?;

        Ok(module
            .classes
            .iter()
            .filter(|class| self.registry.device().can_document(class))
            .map(|class| class.name.clone())
            .collect())
    }

    fn load(&self, loader: &mut ModuleLoader<'_>, path: &Path) -> Result<DeviceModule> {
        if self.fresh {
            loader.fresh_load(path)
        } else {
            loader.load(path)
        }
    }

    fn generate_module_files(&self, module: &DeviceModule) -> Result<usize> {
        let pages = self.generate_module(module);

        for (class_name, content) in &pages {
            self.write_page(class_name, content)?;
        }

        Ok(pages.len())
    }

    fn ensure_output_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).map_err(|err| DevicedocError::IoError {
            path: PathBuf::from(&self.output_dir),
            details: format!("Failed to create output directory: {err}"),
        })
    }

    fn write_page(&self, class_name: &str, content: &str) -> Result<()> {
        let filename = format!("{class_name}.rst");
        let filepath = Path::new(&self.output_dir).join(filename);

        fs::write(&filepath, content)?;

        info!(file = %filepath.display(), "generated device documentation");
        Ok(())
    }
}
