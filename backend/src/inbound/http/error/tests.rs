//! Tests for HTTP error rendering.

use super::*;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

/// Render `error` and return the trace-id header and decoded body.
async fn render(error: &Error) -> (StatusCode, Option<String>, Error) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("trace-id is ASCII").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("Error JSON deserialisation succeeds");
    (status, header, body)
}

#[rstest]
#[actix_web::test]
async fn internal_detail_is_replaced_but_trace_id_kept(trace_id: String) {
    let error = Error::internal("disk I/O error").with_trace_id(trace_id.clone());

    let (status, header, body) = render(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(body.code(), ErrorCode::InternalError);
    assert_eq!(body.message(), INTERNAL_ERROR_MESSAGE);
    assert_eq!(body.trace_id(), Some(trace_id.as_str()));
}

#[rstest]
#[case::storage_rejection(
    Error::invalid_request("NOT NULL constraint failed: users.email"),
    StatusCode::BAD_REQUEST
)]
#[case::missing_user(Error::not_found("User not found"), StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn client_errors_reach_the_caller_unchanged(
    trace_id: String,
    #[case] error: Error,
    #[case] expected_status: StatusCode,
) {
    let error = error.with_trace_id(trace_id);

    let (status, header, body) = render(&error).await;

    assert_eq!(status, expected_status);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(body, error);
    assert!(matches!(client_view(&error), Cow::Borrowed(_)));
}

#[rstest]
#[actix_web::test]
async fn errors_without_trace_id_omit_the_header() {
    let (_, header, body) = render(&Error::not_found("User not found")).await;

    assert_eq!(header, None);
    assert_eq!(body.message(), "User not found");
    assert_eq!(body.trace_id(), None);
}
