//! Tests for the error payload constructors and serialisation contract.

use super::*;
use rstest::rstest;
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid UUID");
    let error = trace_id.in_scope(async { Error::not_found("missing") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn serialises_message_under_error_key() {
    let error = Error::invalid_request("NOT NULL constraint failed: users.email")
        .with_trace_id(TRACE_ID);
    let value = serde_json::to_value(&error).expect("serialise error");
    assert_eq!(
        value,
        json!({
            "error": "NOT NULL constraint failed: users.email",
            "code": "invalid_request",
            "traceId": TRACE_ID,
        })
    );
}

#[rstest]
fn omits_trace_id_when_absent() {
    let value = serde_json::to_value(Error::not_found("User not found")).expect("serialise");
    assert!(value.get("traceId").is_none());
    assert_eq!(value.get("error").and_then(Value::as_str), Some("User not found"));
}

#[rstest]
fn deserialises_payload() {
    let error: Error = serde_json::from_value(json!({
        "error": "User not found",
        "code": "not_found",
    }))
    .expect("deserialise error");
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.to_string(), "User not found");
}
