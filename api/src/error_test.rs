use super::*;

#[test]
fn status_is_reported_for_server_answers() {
    assert_eq!(ApiError::Unauthorized { body: String::new() }.status(), Some(401));
    assert_eq!(ApiError::Status { status: 404, body: "测点不存在".to_owned() }.status(), Some(404));
}

#[test]
fn status_is_absent_for_transport_failures() {
    assert_eq!(ApiError::Request("connection refused".to_owned()).status(), None);
    assert_eq!(ApiError::Parse("eof".to_owned()).status(), None);
}

#[test]
fn only_401_counts_as_unauthorized() {
    assert!(ApiError::Unauthorized { body: String::new() }.is_unauthorized());
    assert!(!ApiError::Status { status: 403, body: String::new() }.is_unauthorized());
}

#[test]
fn store_errors_pass_through_transparently() {
    let err: ApiError = StoreError::Unavailable("no window".to_owned()).into();
    assert_eq!(err.to_string(), "session storage unavailable: no window");
}
