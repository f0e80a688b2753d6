use std::fs;
use std::path::Path;

use blockbaker::error::Error;
use blockbaker::fs::LocalFileSystem;
use blockbaker::model::{read_textures, ModelKind, ModelRef};
use blockbaker::scanner::{build_exclude_set, scan_models};
use tempfile::TempDir;

fn touch(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_scan_models() {
    let temp_dir = TempDir::new().unwrap();
    let models = temp_dir.path().join("models");
    touch(&models.join("block/bread_block.json"), "{}");
    touch(&models.join("block/Cheese.JSON"), "{}");
    touch(&models.join("block/notes.txt"), "");
    touch(&models.join("block/nested/deep.json"), "{}");
    touch(&models.join("item/toast.json"), "{}");

    let result = scan_models(&models, &build_exclude_set(&[]).unwrap()).unwrap();

    assert_eq!(
        result.models,
        vec![
            ModelRef::new(ModelKind::Block, "Cheese"),
            ModelRef::new(ModelKind::Block, "bread_block"),
            ModelRef::new(ModelKind::Item, "toast"),
        ]
    );
    assert!(!result.suggests_item_synthesis());
}

#[test]
fn test_missing_model_root_is_distinct_from_no_models() {
    let temp_dir = TempDir::new().unwrap();
    let models = temp_dir.path().join("models");
    let exclude = build_exclude_set(&[]).unwrap();

    match scan_models(&models, &exclude) {
        Err(Error::ModelRootNotFound { path }) => assert!(path.ends_with("models")),
        other => panic!("Expected ModelRootNotFound, got {:?}", other),
    }

    fs::create_dir_all(models.join("block")).unwrap();
    fs::create_dir_all(models.join("item")).unwrap();
    let result = scan_models(&models, &exclude).unwrap();
    assert!(result.is_empty());
    assert!(!result.suggests_item_synthesis());
}

#[test]
fn test_missing_kind_folder_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let models = temp_dir.path().join("models");
    touch(&models.join("item/toast.json"), "{}");

    let result = scan_models(&models, &build_exclude_set(&[]).unwrap()).unwrap();
    assert_eq!(result.models, vec![ModelRef::new(ModelKind::Item, "toast")]);
}

#[test]
fn test_item_synthesis_advisory() {
    let temp_dir = TempDir::new().unwrap();
    let models = temp_dir.path().join("models");
    touch(&models.join("block/bread_block.json"), "{}");
    touch(&models.join("block/cheese.json"), "{}");
    fs::create_dir_all(models.join("item")).unwrap();

    let result = scan_models(&models, &build_exclude_set(&[]).unwrap()).unwrap();
    assert!(result.suggests_item_synthesis());
    assert_eq!(result.models.len(), 2);

    let result = result.with_synthesized_items();
    assert_eq!(
        result.models,
        vec![
            ModelRef::new(ModelKind::Block, "bread_block"),
            ModelRef::new(ModelKind::Block, "cheese"),
            ModelRef::new(ModelKind::Item, "bread_block"),
            ModelRef::new(ModelKind::Item, "cheese"),
        ]
    );
    assert!(!result.suggests_item_synthesis());
}

#[test]
fn test_exclude_patterns() {
    let temp_dir = TempDir::new().unwrap();
    let models = temp_dir.path().join("models");
    touch(&models.join("block/bread_block.json"), "{}");
    touch(&models.join("block/bread_block_template.json"), "{}");

    let exclude = build_exclude_set(&["*_template".to_string()]).unwrap();
    let result = scan_models(&models, &exclude).unwrap();
    assert_eq!(result.models, vec![ModelRef::new(ModelKind::Block, "bread_block")]);

    assert!(matches!(
        build_exclude_set(&["[".to_string()]),
        Err(Error::ConfigError(_))
    ));
}

#[test]
fn test_read_textures() {
    let temp_dir = TempDir::new().unwrap();
    let model = temp_dir.path().join("bread_block.json");
    touch(
        &model,
        r#"{"parent": "block/cube", "textures": {"particle": "sandwich:block/bread", "0": "sandwich:block/crust", "bad": 3}}"#,
    );
    let fs = LocalFileSystem::new();

    let textures = read_textures(&fs, &model).unwrap();
    assert_eq!(textures.len(), 2);
    assert_eq!(textures["particle"], "sandwich:block/bread");
    assert_eq!(textures["0"], "sandwich:block/crust");

    let missing = read_textures(&fs, &temp_dir.path().join("missing.json")).unwrap();
    assert!(missing.is_empty());

    touch(&model, "{\"parent\": \"block/cube\"}");
    assert!(read_textures(&fs, &model).unwrap().is_empty());

    touch(&model, "not json");
    assert!(matches!(read_textures(&fs, &model), Err(Error::JsonError(_))));
}
