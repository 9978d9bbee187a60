use super::*;
use serde_json::json;

#[test]
fn login_request_serializes_as_json_credentials() {
    let body = serde_json::to_value(LoginRequest { username: "op", password: "pw" }).unwrap();
    assert_eq!(body, json!({ "username": "op", "password": "pw" }));
}

#[test]
fn issued_credentials_reads_token_and_user() {
    let payload = json!({
        "access_token": "t-1",
        "token_type": "bearer",
        "user": { "id": 1, "username": "op" }
    });
    let creds = issued_credentials(&payload).unwrap();
    assert_eq!(creds.token, "t-1");
    assert_eq!(creds.user, Some(&json!({ "id": 1, "username": "op" })));
}

#[test]
fn issued_credentials_without_user() {
    let payload = json!({ "access_token": "t-1", "token_type": "bearer" });
    let creds = issued_credentials(&payload).unwrap();
    assert_eq!(creds.user, None);
}

#[test]
fn null_user_is_treated_as_absent() {
    let payload = json!({ "access_token": "t-1", "user": null });
    assert_eq!(issued_credentials(&payload).unwrap().user, None);
}

#[test]
fn missing_or_empty_token_yields_nothing() {
    assert_eq!(issued_credentials(&json!({ "detail": "ok" })), None);
    assert_eq!(issued_credentials(&json!({ "access_token": "" })), None);
    assert_eq!(issued_credentials(&json!({ "access_token": 42 })), None);
}
