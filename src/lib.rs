//! blockbaker generates the boilerplate around Minecraft (Fabric) mod models.
//! It discovers block and item models in a mod's asset tree and writes
//! lang entries, loot tables, blockstates, item models, Java stubs and
//! idempotent registry patches for each of them.

/// Display-name answers from stdin, prompts or defaults
pub mod answers;

/// Typed JSON documents written for each model
pub mod assets;

/// Command-line interface module for the blockbaker application
pub mod cli;

/// Pretty-printing JSON codec shared by all generated assets
pub mod codec;

/// Configuration handling for mod projects
/// Supports JSON and YAML formats (blockbaker.json, blockbaker.yml, blockbaker.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the blockbaker application
pub mod error;

/// Text file access used by the generator
pub mod fs;

/// Per-model artifact generation
pub mod generator;

/// Paths of generated artifacts inside a mod project
pub mod layout;

/// Logging setup for the binary
pub mod logger;

/// Model identifiers and generation requests
pub mod model;

/// User input and interaction handling
pub mod prompt;

/// Line-level editing of registry sources
pub mod registry;

/// Java source templates and their rendering
pub mod renderer;

/// Model discovery under `assets/<mod_id>/models`
pub mod scanner;

/// Supported Minecraft versions
pub mod version;
