//! Unit tests for the error translator

use serde_json::json;

use crate::adapters::{PostgresError, ValidationDetail, ValidationFailure};
use crate::dictionary::{Dictionary, DictionaryConfig};
use crate::errors::CoreError;
use crate::exceptions::DbExceptions;
use crate::input::{NativeException, DB_EXCEPTIONS_TAG, MONGO_EXCEPTIONS_TAG};
use crate::translator::{EmptyCheck, ErrorOptions, Translator};
use nexx_shared::{params, Locale, NormalizedError};

fn translator() -> Translator {
    Translator::new(Dictionary::bundled())
}

fn vietnamese() -> Translator {
    let locale: Locale = "vi".parse().unwrap();
    Translator::new(Dictionary::load(&DictionaryConfig::new(locale)).unwrap())
}

#[test]
fn test_string_becomes_unknown_error() {
    let envelope = translator().translate("connection reset");
    assert_eq!(envelope.len(), 1);

    let error = envelope.first().unwrap();
    assert_eq!(error.code, "999");
    assert_eq!(error.message, "connection reset");
    assert_eq!(error.ui_message, "Unknown error");
    assert_eq!(error.source, "");
}

#[test]
fn test_string_without_dictionary_entry() {
    let translator = Translator::new(Dictionary::empty(Locale::default()));
    let envelope = translator.translate("boom");
    assert_eq!(
        envelope.into_errors(),
        vec![NormalizedError::new("999").with_message("boom")]
    );
}

#[test]
fn test_error_array_is_idempotent() {
    let translator = translator();
    let input = json!([
        {"code": "201", "message": "dup", "uiMessage": "Data already exists", "source": "email"},
        {"code": "100", "message": "", "uiMessage": "name is required", "source": "name"}
    ]);

    let first = translator.translate(&input);
    let second = translator.translate(first.errors.clone());
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
    assert_eq!(first.code(), "201");
}

#[test]
fn test_empty_array_yields_unknown_error() {
    let envelope = translator().translate(json!([]));
    assert_eq!(envelope.len(), 1);
    assert_eq!(envelope.first().unwrap().code, "999");
}

#[test]
fn test_validation_failure() {
    let failure = ValidationFailure::new(vec![
        ValidationDetail::new("any.required", "email", "\"email\" is required"),
        ValidationDetail::new("string.min", "password", "\"password\" length must be at least 8"),
    ]);

    let envelope = translator().translate(failure);
    let errors = envelope.into_errors();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].code, "100");
    assert_eq!(errors[0].source, "email");
    assert_eq!(errors[0].ui_message, "email is required");
    assert_eq!(errors[1].code, "101");
    assert_eq!(errors[1].message, "\"password\" length must be at least 8");
}

#[test]
fn test_validation_failure_from_loose_value() {
    let envelope = translator().translate(json!({
        "isJoi": true,
        "details": [{"type": "string.alphanum", "path": ["profile", "nickname"], "message": "bad"}]
    }));
    let error = envelope.first().unwrap();
    assert_eq!(error.code, "108");
    assert_eq!(error.source, "profile.nickname");
}

#[test]
fn test_coded_object_uses_dictionary() {
    let envelope = translator().translate(json!({"code": "202", "params": {"source": "post"}}));
    let error = envelope.first().unwrap();
    assert_eq!(error.code, "202");
    assert_eq!(error.ui_message, "post not found");
}

#[test]
fn test_coded_object_explicit_values_win() {
    let envelope = translator().translate(json!({
        "code": 201,
        "message": "dup row",
        "uiMessage": "Email taken",
        "source": "email"
    }));
    assert_eq!(
        envelope.into_errors(),
        vec![NormalizedError::new("201")
            .with_message("dup row")
            .with_ui_message("Email taken")
            .with_source("email")]
    );
}

#[test]
fn test_postgres_collection() {
    let envelope = translator().translate(json!({
        "name": DB_EXCEPTIONS_TAG,
        "errors": [
            {"code": "23505", "column": "email", "detail": "Key (email) already exists."},
            {"code": "99999", "message": "odd failure"}
        ]
    }));

    let errors = envelope.into_errors();
    assert_eq!(errors[0].code, "201");
    assert_eq!(errors[0].source, "email");
    assert_eq!(errors[0].ui_message, "Data already exists");
    assert_eq!(errors[1].code, "99999");
    assert_eq!(errors[1].ui_message, "odd failure");
}

#[test]
fn test_db_exceptions_round_trip() {
    let err = PostgresError::new("23502").with_column("name");
    let envelope = translator().translate(DbExceptions::from_postgres(&err));
    let error = envelope.first().unwrap();
    assert_eq!(error.code, "203");
    assert_eq!(error.source, "name");
}

#[test]
fn test_mongo_collection() {
    let envelope = translator().translate(json!({
        "name": MONGO_EXCEPTIONS_TAG,
        "errors": [{"code": 11000, "message": "E11000 duplicate key"}]
    }));
    let error = envelope.first().unwrap();
    assert_eq!(error.code, "11000");
    assert_eq!(error.ui_message, "E11000 duplicate key");
}

#[test]
fn test_empty_collection_yields_unknown_error() {
    let envelope = translator().translate(json!({"name": DB_EXCEPTIONS_TAG, "errors": []}));
    assert_eq!(envelope.len(), 1);
    assert_eq!(envelope.first().unwrap().code, "999");
}

#[test]
fn test_malformed_collection_entry() {
    let envelope = translator().translate(json!({"name": DB_EXCEPTIONS_TAG, "errors": ["oops"]}));
    let error = envelope.first().unwrap();
    assert_eq!(error.code, "999");
    assert_eq!(error.message, "\"oops\"");
}

#[test]
fn test_native_exception() {
    let envelope = translator().translate(json!({"name": "TypeError", "message": "x is undefined"}));
    let error = envelope.first().unwrap();
    assert_eq!(error.code, "999");
    assert_eq!(error.message, "TypeError: x is undefined");

    let envelope = translator().translate(NativeException::new("RangeError", ""));
    assert_eq!(envelope.first().unwrap().message, "RangeError");
}

#[test]
fn test_unknown_value() {
    let envelope = translator().translate(json!({"foo": "bar"}));
    let error = envelope.first().unwrap();
    assert_eq!(error.code, "999");
    assert_eq!(error.message, r#"{"foo":"bar"}"#);

    assert_eq!(translator().translate(json!(null)).first().unwrap().message, "null");
}

#[test]
fn test_create_error_object_explicit_values_win() {
    let empty = Translator::new(Dictionary::empty(Locale::default()));
    let options = ErrorOptions::new().message("m").ui_message("u").source("s");

    for translator in [empty, translator()] {
        let error = translator.create_error_object("201", options.clone()).unwrap();
        assert_eq!(
            error,
            NormalizedError::new("201")
                .with_message("m")
                .with_ui_message("u")
                .with_source("s")
        );
    }
}

#[test]
fn test_create_error_object_lookups() {
    let error = translator()
        .create_error_object("100", ErrorOptions::new().params(params([("field", "email")])))
        .unwrap();
    assert_eq!(error.message, "email is required");
    assert_eq!(error.ui_message, "email is required");

    let error = translator().create_error_object("777", ErrorOptions::new()).unwrap();
    assert_eq!(error.message, "");
    assert_eq!(error.ui_message, "");
}

#[test]
fn test_create_error_object_string_option() {
    let error = translator().create_error_object(204_i64, "Not your post").unwrap();
    assert_eq!(error.code, "204");
    assert_eq!(error.ui_message, "Not your post");
    assert!(!error.message.is_empty());
}

#[test]
fn test_create_error_requires_code() {
    assert!(matches!(
        translator().create_error_object("", ErrorOptions::new()),
        Err(CoreError::EmptyCode)
    ));
    assert_eq!(translator().create_error("203", ErrorOptions::new()).unwrap().len(), 1);
}

#[test]
fn test_ui_message_follows_active_locale() {
    let translator = vietnamese();
    let error = translator.create_error_object("999", ErrorOptions::new()).unwrap();
    assert_eq!(error.message, "Unknown error");
    assert_eq!(error.ui_message, "Lỗi không xác định");
}

#[test]
fn test_not_found_defaults() {
    let errors = translator().not_found(None, None);
    assert_eq!(errors[0].code, "202");
    assert_eq!(errors[0].source, "uid");
    assert_eq!(errors[0].ui_message, "uid not found");

    let errors = translator().not_found(Some("post"), None);
    assert_eq!(errors[0].ui_message, "post not found");
}

#[test]
fn test_canned_errors() {
    let translator = translator();
    assert_eq!(translator.empty_error(ErrorOptions::new())[0].code, "203");
    assert_eq!(translator.unknown_error(ErrorOptions::new())[0].code, "999");
    assert_eq!(translator.disconnected_error(ErrorOptions::new())[0].code, "400");
}

#[test]
fn test_check_empty() {
    let translator = translator();
    let checks = vec![
        EmptyCheck::new(json!({"id": 1}), "user is missing", "user"),
        EmptyCheck::new(json!([]), "no items selected", "items"),
        EmptyCheck::new(json!(null), "never reached", "other"),
    ];

    let errors = translator.check_empty(&checks).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, "203");
    assert_eq!(errors[0].message, "no items selected");
    assert_eq!(errors[0].source, "items");

    assert!(translator.check_empty(&checks[..1]).is_ok());
    assert!(translator.check_empty(&[]).is_ok());
}

#[test]
fn test_get_code_and_classification() {
    let translator = translator();
    assert_eq!(translator.get_code(&json!({"errors": [{"code": "202"}]})), "202");
    assert_eq!(translator.get_code(&json!({})), "1000");
    assert!(translator.is_application_error(&json!("202")));
    assert!(!translator.is_application_error(&json!("999")));
}

#[test]
fn test_serialize() {
    let text = translator().serialize("boom");
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["errors"][0]["code"], "999");
    assert_eq!(value["errors"][0]["message"], "boom");
    assert_eq!(value["errors"][0]["uiMessage"], "Unknown error");
}

#[test]
fn test_shared_translator_uses_bundled_resources() {
    let shared = Translator::shared();
    assert_eq!(shared.get_ui_message("201", None), "Data already exists");
    assert!(std::ptr::eq(shared, Translator::shared()));
}
