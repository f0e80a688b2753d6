//! Display-name answers.
//! Names come from a preloaded JSON object (`{"block/bread_block": "Bread Block"}`),
//! from the interactive prompt, or from a title-cased default.

use crate::error::{Error, Result};
use crate::model::ModelRef;
use crate::prompt::Prompter;
use cruet::Inflector;
use std::io::Read;

/// Suggested display name for a model, e.g. `bread_block` becomes `Bread Block`.
pub fn default_display_name(model: &ModelRef) -> String {
    model.name.to_title_case()
}

/// Parses preloaded answers. Empty input means no answers.
///
/// # Errors
/// * `Error::ValidationError` if the input is not a JSON object of strings
pub fn parse_answers(content: &str) -> Result<serde_json::Value> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(serde_json::Value::Null);
    }
    let answers: serde_json::Value = serde_json::from_str(content)?;
    match &answers {
        serde_json::Value::Object(map) if map.values().all(|v| v.is_string()) => Ok(answers),
        _ => Err(Error::ValidationError(
            "answers must be a JSON object mapping 'kind/name' to a display name".to_string(),
        )),
    }
}

pub fn load_from_stdin() -> Result<serde_json::Value> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    parse_answers(&buffer)
}

pub fn get_answers_from(take_from_stdin: bool) -> Result<serde_json::Value> {
    if take_from_stdin {
        load_from_stdin()
    } else {
        Ok(serde_json::Value::Null)
    }
}

/// Resolves the display name of one model.
///
/// A preloaded answer wins; otherwise the user is asked unless `skip_prompt`
/// is set, in which case the default is used. `None` means the user abandoned
/// the prompt and generation should stop.
pub fn get_display_name(
    prompt: &dyn Prompter,
    model: &ModelRef,
    preloaded_answers: &serde_json::Value,
    skip_prompt: bool,
) -> Result<Option<String>> {
    if let Some(answer) = preloaded_answers.get(model.to_string()).and_then(|v| v.as_str()) {
        return Ok(Some(answer.to_string()));
    }
    let default = default_display_name(model);
    if skip_prompt {
        return Ok(Some(default));
    }
    prompt.input(format!("Display name for '{}'?", model), default)
}
