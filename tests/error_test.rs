use std::io;

use blockbaker::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }

    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(matches!(Error::from(json_err), Error::JsonError(_)));
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::ValidationError("mod id must not be empty".to_string());
    assert_eq!(err.to_string(), "Validation error: mod id must not be empty.");

    let err = Error::ModelRootNotFound {
        path: "src/main/resources/assets/sandwich/models".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "No model directory found at 'src/main/resources/assets/sandwich/models'."
    );
}
