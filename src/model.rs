//! Model identifiers and the per-model unit of work.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use log::debug;

use crate::error::{Error, Result};
use crate::fs::FileSystem;

/// The two kinds of models a mod declares under `models/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModelKind {
    Block,
    Item,
}

impl ModelKind {
    /// Both kinds, in scanning order.
    pub const ALL: [ModelKind; 2] = [ModelKind::Block, ModelKind::Item];

    /// Lowercase name, as used in directory names and lang keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Block => "block",
            ModelKind::Item => "item",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "block" => Ok(ModelKind::Block),
            "item" => Ok(ModelKind::Item),
            other => Err(Error::ValidationError(format!(
                "unknown model kind '{}' (expected 'block' or 'item')",
                other
            ))),
        }
    }
}

/// Identifies one discoverable model. Unique by `(kind, name)` within a mod.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModelRef {
    pub kind: ModelKind,
    pub name: String,
}

impl ModelRef {
    pub fn new<S: Into<String>>(kind: ModelKind, name: S) -> Self {
        Self { kind, name: name.into() }
    }

    /// Generated Java constant, e.g. `BREAD_BLOCK_BLOCK`.
    pub fn constant_name(&self) -> String {
        format!("{}_{}", self.name.to_uppercase(), self.kind.as_str().to_uppercase())
    }

    /// Generated Java class name, e.g. `Bread_blockBlock`.
    pub fn class_name(&self) -> String {
        format!("{}{}", capitalize(&self.name), capitalize(self.kind.as_str()))
    }

    /// Translation key, e.g. `block.sandwich.bread_block`.
    pub fn lang_key(&self, mod_id: &str) -> String {
        format!("{}.{}.{}", self.kind, mod_id, self.name)
    }
}

impl fmt::Display for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.name)
    }
}

impl FromStr for ModelRef {
    type Err = Error;

    /// Parses the `kind/name` form used on the command line and in stdin answers.
    fn from_str(s: &str) -> Result<Self> {
        let (kind, name) = s.split_once('/').ok_or_else(|| {
            Error::ValidationError(format!("model '{}' must be written as 'kind/name'", s))
        })?;
        if name.is_empty() || name.contains('/') {
            return Err(Error::ValidationError(format!("invalid model name in '{}'", s)));
        }
        Ok(Self::new(kind.parse()?, name))
    }
}

/// The unit of work for one generation pass.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub mod_id: String,
    pub model: ModelRef,
    pub display_name: String,
    /// Texture slot name to resource path, as found in the model JSON.
    pub textures: IndexMap<String, String>,
    pub use_aux_feature: bool,
    pub target_version: String,
}

/// Uppercases the first character and leaves the rest as is.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Reads the `textures` object of a model JSON document.
///
/// A missing file or a document without `textures` yields an empty map.
/// Non-string texture values are ignored.
pub fn read_textures(fs: &dyn FileSystem, model_path: &Path) -> Result<IndexMap<String, String>> {
    if !fs.exists(model_path) {
        debug!("No model file at {}, using no textures", model_path.display());
        return Ok(IndexMap::new());
    }
    let document: serde_json::Value = serde_json::from_str(&fs.read_to_string(model_path)?)?;
    let textures = document
        .get("textures")
        .and_then(|t| t.as_object())
        .map(|t| {
            t.iter()
                .filter_map(|(slot, path)| path.as_str().map(|p| (slot.clone(), p.to_string())))
                .collect()
        })
        .unwrap_or_default();
    Ok(textures)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naming_convention() {
        let model = ModelRef::new(ModelKind::Block, "bread_block");
        assert_eq!(model.constant_name(), "BREAD_BLOCK_BLOCK");
        assert_eq!(model.class_name(), "Bread_blockBlock");
        assert_eq!(model.lang_key("sandwich"), "block.sandwich.bread_block");

        let item = ModelRef::new(ModelKind::Item, "toast");
        assert_eq!(item.constant_name(), "TOAST_ITEM");
        assert_eq!(item.class_name(), "ToastItem");
        assert_eq!(item.lang_key("sandwich"), "item.sandwich.toast");
    }

    #[test]
    fn test_model_ref_from_str() {
        let model: ModelRef = "item/toast".parse().unwrap();
        assert_eq!(model, ModelRef::new(ModelKind::Item, "toast"));
        assert_eq!(model.to_string(), "item/toast");

        assert!("toast".parse::<ModelRef>().is_err());
        assert!("entity/toast".parse::<ModelRef>().is_err());
        assert!("block/".parse::<ModelRef>().is_err());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("sandwich"), "Sandwich");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("x"), "X");
    }
}
