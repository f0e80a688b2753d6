use std::cell::RefCell;

use blockbaker::answers::{default_display_name, get_display_name, parse_answers};
use blockbaker::error::{Error, Result};
use blockbaker::model::{ModelKind, ModelRef};
use blockbaker::prompt::Prompter;
use serde_json::json;

/// Replays canned answers and records the questions asked.
struct ScriptedPrompter {
    answers: RefCell<Vec<Option<String>>>,
    asked: RefCell<Vec<(String, String)>>,
}

impl ScriptedPrompter {
    fn new(answers: Vec<Option<&str>>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().rev().map(|a| a.map(String::from)).collect()),
            asked: RefCell::new(Vec::new()),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, skip: bool, _prompt: String) -> Result<bool> {
        Ok(skip)
    }

    fn input(&self, prompt: String, default: String) -> Result<Option<String>> {
        self.asked.borrow_mut().push((prompt, default));
        Ok(self.answers.borrow_mut().pop().flatten())
    }
}

#[test]
fn test_default_display_name() {
    let model = ModelRef::new(ModelKind::Block, "bread_block");
    assert_eq!(default_display_name(&model), "Bread Block");
}

#[test]
fn test_preloaded_answer_wins() {
    let prompter = ScriptedPrompter::new(vec![]);
    let model = ModelRef::new(ModelKind::Block, "bread_block");
    let answers = json!({"block/bread_block": "Pan de Molde"});

    let name = get_display_name(&prompter, &model, &answers, false).unwrap();
    assert_eq!(name.as_deref(), Some("Pan de Molde"));
    assert!(prompter.asked.borrow().is_empty());
}

#[test]
fn test_prompted_answer() {
    let prompter = ScriptedPrompter::new(vec![Some("Bread")]);
    let model = ModelRef::new(ModelKind::Item, "bread_block");

    let name = get_display_name(&prompter, &model, &serde_json::Value::Null, false).unwrap();
    assert_eq!(name.as_deref(), Some("Bread"));
    assert_eq!(
        prompter.asked.borrow()[0],
        (
            "Display name for 'item/bread_block'?".to_string(),
            "Bread Block".to_string()
        )
    );
}

#[test]
fn test_abandoned_prompt() {
    let prompter = ScriptedPrompter::new(vec![None]);
    let model = ModelRef::new(ModelKind::Block, "bread_block");

    let name = get_display_name(&prompter, &model, &serde_json::Value::Null, false).unwrap();
    assert!(name.is_none());
}

#[test]
fn test_skip_prompt_uses_default() {
    let prompter = ScriptedPrompter::new(vec![]);
    let model = ModelRef::new(ModelKind::Block, "cheese_wheel");

    let name = get_display_name(&prompter, &model, &serde_json::Value::Null, true).unwrap();
    assert_eq!(name.as_deref(), Some("Cheese Wheel"));
    assert!(prompter.asked.borrow().is_empty());
}

#[test]
fn test_parse_answers() {
    assert_eq!(parse_answers("").unwrap(), serde_json::Value::Null);
    assert_eq!(parse_answers("  \n").unwrap(), serde_json::Value::Null);
    assert_eq!(
        parse_answers(r#"{"block/bread_block": "Bread Block"}"#).unwrap(),
        json!({"block/bread_block": "Bread Block"})
    );
    assert!(matches!(parse_answers(r#"{"block/bread_block": 3}"#), Err(Error::ValidationError(_))));
    assert!(matches!(parse_answers("[]"), Err(Error::ValidationError(_))));
    assert!(matches!(parse_answers("{"), Err(Error::JsonError(_))));
}
