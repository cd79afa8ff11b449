use std::error::Error as _;

use juggler_util::errors::JugglerError;

#[test]
fn test_invalid_string_display() {
    let err = JugglerError::InvalidString {
        text: "v3.four".to_string(),
    };
    assert_eq!(err.to_string(), "v3.four is not a valid version string");
}

#[test]
fn test_invalid_type_display() {
    let err = JugglerError::InvalidType {
        found: "integer".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid type: expected a version string, got integer"
    );
}

#[test]
fn test_file_not_found_keeps_cause() {
    let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err = JugglerError::FileNotFound {
        location: "repo/juggler_listing.xml".to_string(),
        source: Box::new(cause),
    };
    assert_eq!(
        err.to_string(),
        "repo/juggler_listing.xml could not be accessed: missing"
    );
    assert_eq!(err.source().map(|s| s.to_string()), Some("missing".to_string()));
}

#[test]
fn test_invalid_file_display() {
    let err = JugglerError::InvalidFile {
        location: "listing.xml".to_string(),
        message: "no element found".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Parsing error in listing.xml: no element found"
    );
}

#[test]
fn test_invalid_repository_display() {
    let err = JugglerError::InvalidRepository {
        path: "somefile".to_string(),
    };
    assert!(err.to_string().contains("not a directory"), "got: {err}");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: JugglerError = io_err.into();
    assert!(matches!(err, JugglerError::Io(_)));
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}
