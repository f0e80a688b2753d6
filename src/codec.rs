//! JSON encoding shared by every generated asset.

use serde::ser::Serialize;

use crate::error::Result;

/// Pretty-printing JSON codec.
///
/// Output uses two-space indentation, keeps non-ASCII text and characters
/// such as `<`, `>` and `&` verbatim, and ends with a newline.
#[derive(Debug, Clone, Copy)]
pub struct JsonCodec;

impl JsonCodec {
    pub fn new() -> Self {
        Self
    }

    pub fn to_pretty_string<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let mut content = serde_json::to_string_pretty(value)?;
        content.push('\n');
        Ok(content)
    }

    pub fn parse<T: serde::de::DeserializeOwned>(&self, content: &str) -> Result<T> {
        Ok(serde_json::from_str(content)?)
    }
}

impl Default for JsonCodec {
    fn default() -> Self {
        JsonCodec::new()
    }
}
