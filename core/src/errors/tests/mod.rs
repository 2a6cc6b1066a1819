//! Unit tests for application and configuration errors

use crate::dictionary::Dictionary;
use crate::errors::{AppError, AppErrorKind, CoreError, DictionaryError};
use crate::translator::Translator;
use nexx_shared::NormalizedError;

fn translator() -> Translator {
    Translator::new(Dictionary::bundled())
}

#[test]
fn test_not_found_uses_dictionary_messages() {
    let error = AppError::not_found(&translator(), None);
    assert_eq!(error.kind(), AppErrorKind::NotFound);
    assert_eq!(error.code(), "202");
    assert_eq!(error.errors().len(), 1);
    assert!(!error.errors()[0].ui_message.is_empty());
}

#[test]
fn test_ui_message_override() {
    let error = AppError::permission(&translator(), Some("You cannot edit this post"));
    assert_eq!(error.code(), "204");
    assert_eq!(error.errors()[0].ui_message, "You cannot edit this post");
}

#[test]
fn test_empty_error_reports_unknown_code() {
    let error = AppError::empty(&translator(), Some("nothing to save"));
    assert_eq!(error.kind(), AppErrorKind::Empty);
    assert_eq!(error.code(), "999");
}

#[test]
fn test_from_errors_requires_entries() {
    assert!(matches!(AppError::from_errors(vec![]), Err(CoreError::EmptyErrors)));

    let error = AppError::from_errors(vec![
        NormalizedError::new("201").with_message("duplicate"),
        NormalizedError::new("100"),
    ])
    .unwrap();
    assert_eq!(error.code(), "201");
    assert_eq!(error.to_string(), "duplicate");
    assert_eq!(error.into_errors().len(), 2);
}

#[test]
fn test_error_display() {
    assert_eq!(CoreError::EmptyCode.to_string(), "Empty error code");
    assert_eq!(
        CoreError::InvalidOptions { kind: "number" }.to_string(),
        "Invalid options data type: number"
    );
    assert_eq!(
        DictionaryError::InvalidLocale("x y".into()).to_string(),
        "Unsupported locale: x y"
    );
}
