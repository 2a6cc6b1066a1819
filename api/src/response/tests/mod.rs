//! Unit tests for the response handler state machine

use crate::response::ResponseHandler;
use nexx_core::{Dictionary, Translator};
use nexx_shared::{FlatResponse, Locale};
use serde_json::json;

fn translator() -> Translator {
    Translator::new(Dictionary::bundled())
}

#[test]
fn test_null_is_neither_data_nor_error() {
    let response = ResponseHandler::response(&json!(null), &translator());
    assert_eq!(response, FlatResponse::default());
    assert_eq!(response.to_value(), json!({"errorCode": 0}));
}

#[test]
fn test_success_payload() {
    let response = ResponseHandler::response(&json!({"data": {"foo": 1}}), &translator());
    assert_eq!(response.to_value(), json!({"errorCode": 0, "data": {"foo": 1}}));
}

#[test]
fn test_zero_error_code_is_success() {
    for error_code in [json!("0"), json!(0)] {
        let response = ResponseHandler::response(
            &json!({"errorCode": error_code, "data": [1, 2]}),
            &translator(),
        );
        assert!(response.is_success());
        assert_eq!(response.data, Some(json!([1, 2])));
    }
}

#[test]
fn test_falsy_data_is_dropped() {
    let response = ResponseHandler::response(&json!({"errorCode": "0", "data": 0}), &translator());
    assert_eq!(response.data, None);
}

#[test]
fn test_normalized_error_with_dictionary_fallback() {
    let response = ResponseHandler::response(&json!({"errorCode": "201", "message": "dup"}), &translator());
    assert_eq!(
        response.to_value(),
        json!({"errorCode": 201, "code": "201", "message": "dup", "uiMessage": "Data already exists"})
    );
}

#[test]
fn test_normalized_error_falls_back_to_message() {
    let translator = Translator::new(Dictionary::empty(Locale::default()));
    let response = ResponseHandler::response(&json!({"errorCode": "201", "message": "dup"}), &translator);
    assert_eq!(response.ui_message.as_deref(), Some("dup"));
}

#[test]
fn test_normalized_error_keeps_explicit_fields() {
    let response = ResponseHandler::response(
        &json!({
            "errorCode": 204,
            "code": "204",
            "message": "forbidden",
            "uiMessage": "Not yours",
            "source": "post",
            "requestId": "req-1"
        }),
        &translator(),
    );
    assert!(response.is_error());
    assert_eq!(response.error_code, 204);
    assert_eq!(response.ui_message.as_deref(), Some("Not yours"));
    assert_eq!(response.source.as_deref(), Some("post"));
    assert_eq!(response.request_id.as_deref(), Some("req-1"));
}

#[test]
fn test_error_list_binds_first_error() {
    let response = ResponseHandler::response(
        &json!([
            {"code": "100", "message": "", "uiMessage": "email is required", "source": "email"},
            {"code": "101", "message": "", "uiMessage": "too short", "source": "password"}
        ]),
        &translator(),
    );
    assert_eq!(response.error_code, 100);
    assert_eq!(response.source.as_deref(), Some("email"));
    assert_eq!(response.ui_message.as_deref(), Some("email is required"));
}

#[test]
fn test_raw_errors_go_through_translator() {
    let response = ResponseHandler::response(&json!({"code": "202", "params": {"source": "post"}}), &translator());
    assert_eq!(response.error_code, 202);
    assert_eq!(response.ui_message.as_deref(), Some("post not found"));

    let response = ResponseHandler::response(&json!("socket hang up"), &translator());
    assert_eq!(response.error_code, 999);
    assert_eq!(response.message.as_deref(), Some("socket hang up"));
}

#[test]
fn test_non_numeric_code_is_reported_as_unknown() {
    let response = ResponseHandler::response(&json!([{"code": "E_DUP", "message": "dup"}]), &translator());
    assert_eq!(response.error_code, 999);
    assert_eq!(response.code.as_deref(), Some("E_DUP"));
}

#[test]
fn test_non_numeric_error_code_is_still_an_error() {
    let response = ResponseHandler::response(&json!({"errorCode": "E_DUP", "message": "dup"}), &translator());
    assert!(response.is_error());
    assert_eq!(response.error_code, 999);
    assert_eq!(response.code.as_deref(), Some("E_DUP"));
    assert_eq!(response.ui_message.as_deref(), Some("dup"));
}
