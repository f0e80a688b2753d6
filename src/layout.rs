//! Paths of every artifact the generator reads or writes, derived from the
//! project root, the mod id and the project configuration.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::constants::LANG_FILE;
use crate::model::{capitalize, ModelKind};
use crate::version::TargetVersion;

/// Convention-derived locations inside one mod project.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
    mod_id: String,
    package: String,
    resources_dir: String,
    java_dir: String,
    client_java_dir: String,
}

impl ProjectLayout {
    pub fn new<P: AsRef<Path>>(root: P, mod_id: &str, config: &Config) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            mod_id: mod_id.to_string(),
            package: config.package.clone(),
            resources_dir: config.resources_dir.clone(),
            java_dir: config.java_dir.clone(),
            client_java_dir: config.client_java_dir.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn mod_id(&self) -> &str {
        &self.mod_id
    }

    /// Java package of the mod, e.g. `com.tntstudios.sandwich`.
    pub fn java_package(&self) -> String {
        format!("{}.{}", self.package, self.mod_id)
    }

    pub fn resources_root(&self) -> PathBuf {
        self.root.join(&self.resources_dir)
    }

    fn assets(&self) -> PathBuf {
        self.resources_root().join("assets").join(&self.mod_id)
    }

    pub fn models_root(&self) -> PathBuf {
        self.assets().join("models")
    }

    pub fn model_file(&self, kind: ModelKind, name: &str) -> PathBuf {
        self.models_root().join(kind.as_str()).join(format!("{}.json", name))
    }

    pub fn lang_file(&self) -> PathBuf {
        self.assets().join("lang").join(LANG_FILE)
    }

    pub fn loot_table(&self, name: &str, version: TargetVersion) -> PathBuf {
        self.resources_root()
            .join("data")
            .join(&self.mod_id)
            .join(version.loot_table_dir())
            .join("blocks")
            .join(format!("{}.json", name))
    }

    pub fn blockstate(&self, name: &str) -> PathBuf {
        self.assets().join("blockstates").join(format!("{}.json", name))
    }

    pub fn item_model(&self, name: &str) -> PathBuf {
        self.model_file(ModelKind::Item, name)
    }

    fn package_dir(&self, source_root: &str) -> PathBuf {
        let mut dir = self.root.join(source_root);
        for segment in self.package.split('.') {
            dir.push(segment);
        }
        dir.join(&self.mod_id)
    }

    pub fn behavior_class(&self, class_name: &str) -> PathBuf {
        self.package_dir(&self.java_dir)
            .join("blocks")
            .join(format!("{}.java", class_name))
    }

    pub fn registry(&self, kind: ModelKind) -> PathBuf {
        let file = match kind {
            ModelKind::Block => "BlocksRegistry.java",
            ModelKind::Item => "ItemsRegistry.java",
        };
        self.package_dir(&self.java_dir).join("registry").join(file)
    }

    /// Class holding the creative tab, e.g. `SandwichTabs`.
    pub fn tabs_class(&self) -> String {
        format!("{}Tabs", capitalize(&self.mod_id))
    }

    pub fn tabs(&self) -> PathBuf {
        self.package_dir(&self.java_dir)
            .join("registry")
            .join(format!("{}.java", self.tabs_class()))
    }

    pub fn shape_util(&self) -> PathBuf {
        self.package_dir(&self.java_dir).join("util").join("VoxelShapeUtil.java")
    }

    pub fn client_initializer(&self) -> PathBuf {
        self.package_dir(&self.client_java_dir)
            .join("client")
            .join("CutoutRegistrar.java")
    }
}
