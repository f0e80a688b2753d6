//! Model discovery.
//! Enumerates the model definitions under `assets/<mod_id>/models/{block,item}`.

use globset::{Glob, GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};
use log::debug;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::model::{ModelKind, ModelRef};

/// Models found by [`scan_models`], sorted by kind and name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub models: Vec<ModelRef>,
}

impl ScanResult {
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    fn names_of(&self, kind: ModelKind) -> impl Iterator<Item = &str> {
        self.models.iter().filter(move |m| m.kind == kind).map(|m| m.name.as_str())
    }

    /// True when blocks were found but no items, so item refs could be derived from the blocks.
    pub fn suggests_item_synthesis(&self) -> bool {
        self.names_of(ModelKind::Block).next().is_some()
            && self.names_of(ModelKind::Item).next().is_none()
    }

    /// Adds one item ref per block. The caller decides whether to apply this.
    pub fn with_synthesized_items(mut self) -> Self {
        let items: Vec<ModelRef> = self
            .names_of(ModelKind::Block)
            .map(|name| ModelRef::new(ModelKind::Item, name))
            .collect();
        self.models.extend(items);
        self
    }
}

/// Compiles the configured exclusion patterns.
///
/// # Errors
/// * `Error::ConfigError` for an invalid glob
pub fn build_exclude_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).map_err(|e| {
            Error::ConfigError(format!("invalid exclude pattern '{}': {}", pattern, e))
        })?);
    }
    builder
        .build()
        .map_err(|e| Error::ConfigError(format!("exclude patterns failed to load: {}", e)))
}

fn json_matcher() -> Result<GlobMatcher> {
    let glob = GlobBuilder::new("*.json")
        .case_insensitive(true)
        .build()
        .map_err(|e| Error::ConfigError(e.to_string()))?;
    Ok(glob.compile_matcher())
}

/// Lists the model definitions of a mod.
///
/// # Arguments
/// * `models_root` - The `assets/<mod_id>/models` directory
/// * `exclude` - Model names to skip
///
/// # Errors
/// * `Error::ModelRootNotFound` if `models_root` does not exist. A missing or empty
///   `block`/`item` directory is not an error and contributes no models.
pub fn scan_models<P: AsRef<Path>>(models_root: P, exclude: &GlobSet) -> Result<ScanResult> {
    let models_root = models_root.as_ref();
    if !models_root.is_dir() {
        return Err(Error::ModelRootNotFound {
            path: models_root.display().to_string(),
        });
    }

    let is_json = json_matcher()?;
    let mut models = Vec::new();
    for kind in ModelKind::ALL {
        let folder = models_root.join(kind.as_str());
        if !folder.is_dir() {
            debug!("No {} models folder at {}", kind, folder.display());
            continue;
        }
        for entry in WalkDir::new(&folder).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            let file_name = entry.file_name();
            if !entry.file_type().is_file() || !is_json.is_match(file_name) {
                continue;
            }
            let Some(name) = entry.path().file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if exclude.is_match(name) {
                debug!("Skipping model {}/{} (excluded)", kind, name);
                continue;
            }
            debug!("Found model {}/{}", kind, name);
            models.push(ModelRef::new(kind, name));
        }
    }
    models.sort();
    Ok(ScanResult { models })
}
