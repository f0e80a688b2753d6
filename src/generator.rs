//! Scaffolding generation for one model at a time.
//!
//! Every step is idempotent and fails on its own: an error in one step is
//! logged and recorded in the [`GenerationReport`], and the remaining steps
//! still run.

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::{debug, error, info, warn};
use serde_json::json;

use crate::assets::{Blockstate, ItemModel, LootTable};
use crate::codec::JsonCodec;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::layout::ProjectLayout;
use crate::model::{capitalize, GenerationRequest, ModelKind, ModelRef};
use crate::registry::{Insertion, RegistrySource};
use crate::renderer::{templates, TemplateRenderer};
use crate::version::TargetVersion;

/// The artifacts produced for a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Lang,
    LootTable,
    Blockstate,
    ItemModel,
    BehaviorClass,
    Registry,
    CreativeTab,
    ShapeUtil,
    ClientInitializer,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Lang => "lang entry",
            Step::LootTable => "loot table",
            Step::Blockstate => "blockstate",
            Step::ItemModel => "item model",
            Step::BehaviorClass => "block class",
            Step::Registry => "registry",
            Step::CreativeTab => "creative tab",
            Step::ShapeUtil => "shape util",
            Step::ClientInitializer => "client initializer",
        };
        f.write_str(name)
    }
}

/// What a step did to its artifact.
#[derive(Debug)]
pub enum Outcome {
    Created,
    Updated,
    Unchanged,
    Skipped(String),
    Failed(Error),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Created => f.write_str("Created"),
            Outcome::Updated => f.write_str("Updated"),
            Outcome::Unchanged => f.write_str("Unchanged"),
            Outcome::Skipped(reason) => write!(f, "Skipped ({})", reason),
            Outcome::Failed(err) => write!(f, "Failed ({})", err),
        }
    }
}

#[derive(Debug)]
pub struct StepReport {
    pub step: Step,
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Per-step results of one [`Generator::generate`] call, in execution order.
#[derive(Debug)]
pub struct GenerationReport {
    pub model: ModelRef,
    pub steps: Vec<StepReport>,
}

impl GenerationReport {
    pub fn outcome(&self, step: Step) -> Option<&Outcome> {
        self.steps.iter().find(|s| s.step == step).map(|s| &s.outcome)
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepReport> {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, Outcome::Failed(_)))
    }

    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Writes the artifacts of a mod project through an injected file system.
pub struct Generator<'a> {
    fs: &'a dyn FileSystem,
    renderer: &'a dyn TemplateRenderer,
    codec: &'a JsonCodec,
    layout: &'a ProjectLayout,
    config: &'a Config,
}

impl<'a> Generator<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        renderer: &'a dyn TemplateRenderer,
        codec: &'a JsonCodec,
        layout: &'a ProjectLayout,
        config: &'a Config,
    ) -> Self {
        Self { fs, renderer, codec, layout, config }
    }

    /// Generates or patches every artifact for one model.
    ///
    /// # Errors
    /// * `Error::ValidationError` for an empty mod id, a mod id that does not match
    ///   the layout, or an unsupported target version. Nothing is written then.
    ///
    /// I/O failures of individual steps are not errors; they show up as
    /// [`Outcome::Failed`] in the report.
    pub fn generate(&self, request: &GenerationRequest) -> Result<GenerationReport> {
        if request.mod_id.trim().is_empty() {
            return Err(Error::ValidationError("mod id must not be empty".to_string()));
        }
        if request.mod_id != self.layout.mod_id() {
            return Err(Error::ValidationError(format!(
                "request for mod '{}' does not match project mod '{}'",
                request.mod_id,
                self.layout.mod_id()
            )));
        }
        let version: TargetVersion = request.target_version.parse()?;

        info!("Generating {} ({})", request.model, request.display_name);
        let mut report = GenerationReport {
            model: request.model.clone(),
            steps: Vec::new(),
        };
        let name = request.model.name.as_str();

        self.run_step(&mut report, Step::Lang, self.layout.lang_file(), |path| {
            self.update_lang(path, request)
        });

        match request.model.kind {
            ModelKind::Block => {
                self.run_step(
                    &mut report,
                    Step::LootTable,
                    self.layout.loot_table(name, version),
                    |path| self.write_json(path, &LootTable::self_drop(&request.mod_id, name)),
                );
                self.run_step(&mut report, Step::Blockstate, self.layout.blockstate(name), |path| {
                    self.write_json(path, &Blockstate::horizontal_facing(&request.mod_id, name))
                });
                self.run_step(
                    &mut report,
                    Step::BehaviorClass,
                    self.layout.behavior_class(&request.model.class_name()),
                    |path| self.create_behavior_class(path, request, version),
                );
            }
            ModelKind::Item => {
                self.run_step(&mut report, Step::ItemModel, self.layout.item_model(name), |path| {
                    self.write_item_model(path, request)
                });
            }
        }

        self.run_step(
            &mut report,
            Step::Registry,
            self.layout.registry(request.model.kind),
            |path| self.patch_registry(path, request, version),
        );
        self.run_step(&mut report, Step::CreativeTab, self.layout.tabs(), |path| {
            self.ensure_tabs(path, request, version)
        });
        self.run_step(&mut report, Step::ShapeUtil, self.layout.shape_util(), |path| {
            self.create_once(path, templates::SHAPE_UTIL, &self.base_context())
        });
        self.run_step(
            &mut report,
            Step::ClientInitializer,
            self.layout.client_initializer(),
            |path| self.ensure_client_initializer(path, request),
        );

        if report.is_complete() {
            info!("{} generated", request.model);
        } else {
            warn!("{} generated with {} failed step(s)", request.model, report.failures().count());
        }
        Ok(report)
    }

    fn run_step<F>(&self, report: &mut GenerationReport, step: Step, path: PathBuf, action: F)
    where
        F: FnOnce(&Path) -> Result<Outcome>,
    {
        debug!("{}: {}", step, path.display());
        let outcome = match action(&path) {
            Ok(outcome) => outcome,
            Err(err) => {
                error!("Failed to write {} '{}': {}", step, path.display(), err);
                Outcome::Failed(err)
            }
        };
        report.steps.push(StepReport { step, path, outcome });
    }

    /// Writes `content` unless the file already holds exactly that.
    fn write_if_changed(&self, path: &Path, content: &str) -> Result<Outcome> {
        if !self.fs.exists(path) {
            self.fs.write(path, content)?;
            return Ok(Outcome::Created);
        }
        if self.fs.read_to_string(path)? == content {
            return Ok(Outcome::Unchanged);
        }
        self.fs.write(path, content)?;
        Ok(Outcome::Updated)
    }

    fn write_json<T: serde::Serialize>(&self, path: &Path, document: &T) -> Result<Outcome> {
        let content = self.codec.to_pretty_string(document)?;
        self.write_if_changed(path, &content)
    }

    /// Renders `template` into `path` only if the file does not exist yet.
    fn create_once(&self, path: &Path, template: &str, context: &serde_json::Value) -> Result<Outcome> {
        if self.fs.exists(path) {
            debug!("{} already exists, leaving it untouched", path.display());
            return Ok(Outcome::Unchanged);
        }
        let content = self.renderer.render(template, context)?;
        self.fs.write(path, &content)?;
        Ok(Outcome::Created)
    }

    fn base_context(&self) -> serde_json::Value {
        json!({
            "package": self.layout.java_package(),
            "mod_id": self.layout.mod_id(),
            "tabs_class": self.layout.tabs_class(),
        })
    }

    fn update_lang(&self, path: &Path, request: &GenerationRequest) -> Result<Outcome> {
        let mut entries: IndexMap<String, serde_json::Value> = if self.fs.exists(path) {
            self.codec.parse(&self.fs.read_to_string(path)?)?
        } else {
            IndexMap::new()
        };
        entries.insert(
            request.model.lang_key(&request.mod_id),
            serde_json::Value::String(request.display_name.clone()),
        );
        self.write_json(path, &entries)
    }

    fn write_item_model(&self, path: &Path, request: &GenerationRequest) -> Result<Outcome> {
        let name = &request.model.name;
        let block_model = self.layout.model_file(ModelKind::Block, name);
        if !self.fs.exists(&block_model) {
            debug!("No block model at {}", block_model.display());
            return Ok(Outcome::Skipped(format!("no block model named '{}'", name)));
        }
        self.write_json(path, &ItemModel::from_block(&request.mod_id, name))
    }

    fn create_behavior_class(
        &self,
        path: &Path,
        request: &GenerationRequest,
        version: TargetVersion,
    ) -> Result<Outcome> {
        if self.fs.exists(path) {
            warn!("{} already exists, not overwriting it", path.display());
            return Ok(Outcome::Skipped("already exists".to_string()));
        }
        let textures: Vec<serde_json::Value> = request
            .textures
            .iter()
            .map(|(slot, texture)| json!({"slot": slot, "path": texture}))
            .collect();
        let mut context = self.base_context();
        context["class_name"] = json!(request.model.class_name());
        context["display_name"] = json!(request.display_name);
        context["textures"] = json!(textures);
        context["aux_feature"] = json!(request.use_aux_feature);
        context["codec"] = json!(version.requires_block_codec());

        let content = self.renderer.render(templates::BEHAVIOR_CLASS, &context)?;
        self.fs.write(path, &content)?;
        Ok(Outcome::Created)
    }

    fn declaration(&self, request: &GenerationRequest, version: TargetVersion) -> String {
        let model = &request.model;
        match model.kind {
            ModelKind::Block => format!(
                "    public static final Block {} = register(\"{}\", new {}({}));",
                model.constant_name(),
                model.name,
                model.class_name(),
                self.config.block_settings
            ),
            ModelKind::Item => format!(
                "    public static final Item {} = Registry.register(Registries.ITEM, {}, new Item({}));",
                model.constant_name(),
                version.identifier(&request.mod_id, &model.name),
                self.config.item_settings
            ),
        }
    }

    fn patch_registry(
        &self,
        path: &Path,
        request: &GenerationRequest,
        version: TargetVersion,
    ) -> Result<Outcome> {
        let created = !self.fs.exists(path);
        let content = if created {
            let template = match request.model.kind {
                ModelKind::Block => templates::BLOCKS_REGISTRY,
                ModelKind::Item => templates::ITEMS_REGISTRY,
            };
            let mut context = self.base_context();
            context["identifier_ctor"] = json!(version.identifier_constructor());
            self.renderer.render(template, &context)?
        } else {
            self.fs.read_to_string(path)?
        };

        let constant = request.model.constant_name();
        let mut source = RegistrySource::parse(&content);
        match source.insert_declaration(&constant, &self.declaration(request, version)) {
            Insertion::AlreadyPresent => {
                if source.declared_constants().contains(&constant.as_str()) {
                    debug!("{} already declared in {}", constant, path.display());
                } else {
                    warn!(
                        "{} is mentioned in {} without a declaration of its own, leaving the file untouched",
                        constant,
                        path.display()
                    );
                }
                return Ok(Outcome::Unchanged);
            }
            Insertion::BeforeAnchor(index) => {
                debug!("Declared {} at line {} of {}", constant, index + 1, path.display());
            }
            Insertion::Appended => {
                warn!(
                    "No registerAll function in {}, appended {} at the end",
                    path.display(),
                    constant
                );
            }
        }
        self.fs.write(path, &source.render())?;
        Ok(if created { Outcome::Created } else { Outcome::Updated })
    }

    fn ensure_tabs(
        &self,
        path: &Path,
        request: &GenerationRequest,
        version: TargetVersion,
    ) -> Result<Outcome> {
        let mod_id = &request.mod_id;
        let icon_registry = match request.model.kind {
            ModelKind::Block => "BlocksRegistry",
            ModelKind::Item => "ItemsRegistry",
        };
        let mut context = self.base_context();
        context["tab_constant"] = json!(format!("{}_TAB", mod_id.to_uppercase()));
        context["tab_identifier"] = json!(version.identifier(mod_id, "main"));
        context["tab_title"] = json!(capitalize(mod_id));
        context["icon_registry"] = json!(icon_registry);
        context["icon_constant"] = json!(request.model.constant_name());
        self.create_once(path, templates::TABS, &context)
    }

    fn ensure_client_initializer(&self, path: &Path, request: &GenerationRequest) -> Result<Outcome> {
        let mut context = self.base_context();
        if request.model.kind == ModelKind::Block {
            context["block_constant"] = json!(request.model.constant_name());
        }
        self.create_once(path, templates::CLIENT_INITIALIZER, &context)
    }
}
