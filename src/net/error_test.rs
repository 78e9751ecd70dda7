use super::*;

#[test]
fn rejection_prefers_message_field() {
    let err = ApiError::rejected(400, r#"{"message":"Invalid credentials","msg":"other"}"#);
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(err.status(), Some(400));
}

#[test]
fn rejection_falls_back_to_msg_field() {
    let err = ApiError::rejected(404, r#"{"msg":"no job with id 42"}"#);
    assert_eq!(err.to_string(), "no job with id 42");
}

#[test]
fn rejection_without_structured_body_reports_status() {
    assert_eq!(ApiError::rejected(502, "<html>Bad gateway</html>").to_string(), "request failed: 502");
    assert_eq!(ApiError::rejected(500, r#"{"message":"  "}"#).to_string(), "request failed: 500");
}

#[test]
fn non_rejections_have_no_status() {
    assert_eq!(ApiError::Network("offline".to_owned()).status(), None);
    assert_eq!(ApiError::Unavailable.status(), None);
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "network error: offline");
}
