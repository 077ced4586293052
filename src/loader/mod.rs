//! Device module manifest loading.
//!
//! Device modules are described in TOML manifests so they can be
//! introspected without the real hardware-control framework installed.
//! The loader parses manifests into [`DeviceModule`] values through a
//! [`DescriptorResolver`] and keeps a cache keyed by canonical path;
//! [`ModuleLoader::fresh_load`] is the explicit way to bypass it.

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use toml::Value;
use tracing::warn;

use crate::{
    DevicedocError, Result,
    device::{ClassInfo, DeviceModule, Member, MemberValue},
    resolver::DescriptorResolver,
};

#[cfg(test)]
mod tests;

/// What to do when a declared member cannot be resolved.
///
/// The original behavior is to drop such members from the output without
/// a trace; `Warn` keeps the omission but logs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkipPolicy {
    /// Omit the member without any diagnostic.
    Silent,
    /// Omit the member and log a warning.
    #[default]
    Warn,
}

/// Loads device module manifests into the introspectable module model.
///
/// The resolver is fixed at construction time, before any manifest is
/// read; the loader never consults the framework vocabulary itself.
pub struct ModuleLoader<'r> {
    resolver: &'r dyn DescriptorResolver,
    skip_policy: SkipPolicy,
    cache: HashMap<PathBuf, DeviceModule>,
}

impl<'r> ModuleLoader<'r> {
    /// Creates a loader using the given resolver and the default skip
    /// policy.
    pub fn new(resolver: &'r dyn DescriptorResolver) -> Self {
        Self {
            resolver,
            skip_policy: SkipPolicy::default(),
            cache: HashMap::new(),
        }
    }

    /// Sets the policy applied when a declared member fails to resolve.
    pub fn with_skip_policy(mut self, skip_policy: SkipPolicy) -> Self {
        self.skip_policy = skip_policy;
        self
    }

    /// Returns the active skip policy.
    pub fn skip_policy(&self) -> SkipPolicy {
        self.skip_policy
    }

    /// Loads a module manifest, reusing a previously loaded copy if one
    /// is cached.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or parsed.
    pub fn load(&mut self, path: &Path) -> Result<DeviceModule> {
        let key = cache_key(path);
        if let Some(module) = self.cache.get(&key) {
            return Ok(module.clone());
        }

        self.fresh_load(path)
    }

    /// Parses a manifest from a string without touching the cache.
    ///
    /// The module name falls back to `name` when the manifest does not
    /// declare one.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a valid manifest.
    pub fn parse(&self, name: &str, content: &str) -> Result<DeviceModule> {
        let raw: RawManifest =
            toml::from_str(content).map_err(|e| DevicedocError::manifest_parse(e, None))?;

        Ok(self.build_module(Path::new(name), raw))
    }

    /// Loads a module manifest directly from disk, replacing any cached
    /// copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or parsed.
    pub fn fresh_load(&mut self, path: &Path) -> Result<DeviceModule> {
        let content =
            fs::read_to_string(path).map_err(|e| DevicedocError::module_load(e, path))?;

        let raw: RawManifest = toml::from_str(&content)
            .map_err(|e| DevicedocError::manifest_parse(e, Some(path)))?;

        let module = self.build_module(path, raw);
        self.cache.insert(cache_key(path), module.clone());
        Ok(module)
    }

    fn build_module(&self, path: &Path, raw: RawManifest) -> DeviceModule {
        let name = raw
            .module
            .map(|module| module.name)
            .or_else(|| {
                path.file_stem()
                    .map(|stem| stem.to_string_lossy().to_string())
            })
            .unwrap_or_else(|| "module".to_string());

        let classes = raw
            .classes
            .into_iter()
            .map(|class| self.build_class(&name, class))
            .collect();

        DeviceModule { name, classes }
    }

    fn build_class(&self, module: &str, raw: RawClass) -> ClassInfo {
        let is_device = raw
            .base
            .as_deref()
            .is_some_and(|base| self.resolver.is_device_base(base));

        let members = raw
            .members
            .into_iter()
            .map(|member| self.build_member(module, &raw.name, member))
            .collect();

        ClassInfo {
            name: raw.name,
            is_device,
            doc: raw.doc,
            members,
        }
    }

    fn build_member(&self, module: &str, class: &str, raw: RawMember) -> Member {
        let value = match raw.declaration.as_deref() {
            None => MemberValue::Opaque,
            Some(declaration) => {
                match self
                    .resolver
                    .resolve(declaration, raw.doc.as_deref(), &raw.metadata)
                {
                    Some(descriptor) => MemberValue::Descriptor(descriptor),
                    None => {
                        if self.skip_policy == SkipPolicy::Warn {
                            warn!(
                                module,
                                class,
                                member = %raw.name,
                                declaration,
                                "unresolved declaration, member will not be documented"
                            );
                        }
                        MemberValue::Opaque
                    }
                }
            }
        };

        Member {
            name: raw.name,
            value,
        }
    }
}

fn cache_key(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    module: Option<RawModule>,

    #[serde(default, rename = "class")]
    classes: Vec<RawClass>,
}

#[derive(Debug, Deserialize)]
struct RawModule {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawClass {
    name: String,

    #[serde(default)]
    base: Option<String>,

    #[serde(default)]
    doc: Option<String>,

    #[serde(default, rename = "member")]
    members: Vec<RawMember>,
}

#[derive(Debug, Deserialize)]
struct RawMember {
    name: String,

    #[serde(default)]
    declaration: Option<String>,

    #[serde(default)]
    doc: Option<String>,

    #[serde(default)]
    metadata: BTreeMap<String, Value>,
}
