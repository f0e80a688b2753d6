//! Minecraft target versions and the conventions that differ between them.

use std::fmt;
use std::str::FromStr;

use crate::constants::SUPPORTED_VERSIONS;
use crate::error::{Error, Result};

/// A supported Minecraft version, e.g. `1.20.1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TargetVersion {
    minor: u32,
    patch: u32,
}

impl TargetVersion {
    /// 1.21 switched to `Identifier.of` and singular data directory names.
    fn is_1_21_or_later(&self) -> bool {
        self.minor >= 21
    }

    /// Call prefix that builds an `Identifier` from a namespace and a path.
    pub fn identifier_constructor(&self) -> &'static str {
        if self.is_1_21_or_later() {
            "Identifier.of"
        } else {
            "new Identifier"
        }
    }

    /// Java expression building a namespaced identifier.
    pub fn identifier(&self, namespace: &str, path: &str) -> String {
        format!("{}(\"{}\", \"{}\")", self.identifier_constructor(), namespace, path)
    }

    /// Block subclasses must expose a `MapCodec` from 1.20.3 on.
    pub fn requires_block_codec(&self) -> bool {
        self.minor > 20 || (self.minor == 20 && self.patch >= 3)
    }

    /// Data-pack directory holding loot tables.
    pub fn loot_table_dir(&self) -> &'static str {
        if self.is_1_21_or_later() {
            "loot_table"
        } else {
            "loot_tables"
        }
    }
}

impl FromStr for TargetVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let unsupported = || {
            Error::ValidationError(format!(
                "unsupported target version '{}' (supported: {})",
                s,
                SUPPORTED_VERSIONS.join(", ")
            ))
        };
        if !SUPPORTED_VERSIONS.contains(&s) {
            return Err(unsupported());
        }
        let mut parts = s.split('.').skip(1).map(str::parse::<u32>);
        let minor = parts.next().and_then(|p| p.ok()).ok_or_else(unsupported)?;
        let patch = parts.next().and_then(|p| p.ok()).unwrap_or(0);
        Ok(Self { minor, patch })
    }
}

impl fmt::Display for TargetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.patch == 0 {
            write!(f, "1.{}", self.minor)
        } else {
            write!(f, "1.{}.{}", self.minor, self.patch)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_versions() {
        for version in SUPPORTED_VERSIONS {
            let parsed: TargetVersion = version.parse().unwrap();
            assert_eq!(parsed.to_string(), version);
        }
        assert!("1.19.2".parse::<TargetVersion>().is_err());
        assert!("latest".parse::<TargetVersion>().is_err());
    }

    #[test]
    fn test_version_conventions() {
        let old: TargetVersion = "1.20.1".parse().unwrap();
        assert_eq!(old.identifier("sandwich", "main"), "new Identifier(\"sandwich\", \"main\")");
        assert_eq!(old.loot_table_dir(), "loot_tables");
        assert!(!old.requires_block_codec());
        assert!("1.20.4".parse::<TargetVersion>().unwrap().requires_block_codec());

        let new: TargetVersion = "1.21".parse().unwrap();
        assert_eq!(new.identifier("sandwich", "main"), "Identifier.of(\"sandwich\", \"main\")");
        assert_eq!(new.loot_table_dir(), "loot_table");
        assert!(new > old);
    }
}
