//! Common constants used throughout the blockbaker application.

/// Supported configuration file names
pub const CONFIG_FILES: [&str; 3] = ["blockbaker.json", "blockbaker.yml", "blockbaker.yaml"];

/// Minecraft versions the generated sources are written against
pub const SUPPORTED_VERSIONS: [&str; 4] = ["1.20.1", "1.20.4", "1.21", "1.21.1"];

pub const DEFAULT_TARGET_VERSION: &str = "1.20.1";

/// Only language file the generator maintains
pub const LANG_FILE: &str = "en_us.json";

/// Opening line of the bulk registration function in registry sources
pub const REGISTRY_ANCHOR: &str = "public static void registerAll";
