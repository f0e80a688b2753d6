//! Template rendering for generated Java sources.
//! Source stubs are MiniJinja templates embedded in the binary.
use crate::error::Result;
use minijinja::Environment;

/// Embedded Java source templates.
pub mod templates {
    pub const BEHAVIOR_CLASS: &str = include_str!("templates/behavior_class.java.j2");
    pub const BLOCKS_REGISTRY: &str = include_str!("templates/blocks_registry.java.j2");
    pub const ITEMS_REGISTRY: &str = include_str!("templates/items_registry.java.j2");
    pub const TABS: &str = include_str!("templates/tabs.java.j2");
    pub const SHAPE_UTIL: &str = include_str!("templates/voxel_shape_util.java.j2");
    pub const CLIENT_INITIALIZER: &str = include_str!("templates/cutout_registrar.java.j2");
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer whose block tags do not leave blank lines behind.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::TemplateError` if the template does not parse or fails to render
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template_owned("temp", template.to_string())?;
        let tmpl = env.get_template("temp")?;
        Ok(tmpl.render(context)?)
    }
}
