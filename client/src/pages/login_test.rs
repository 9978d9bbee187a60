use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  operator ", "secret"),
        Ok(("operator".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(validate_login_input("op", " pw "), Ok(("op".to_owned(), " pw ".to_owned())));
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("op", ""), Err("Enter both username and password."));
}

#[test]
fn login_failed_message_by_status() {
    let unauthorized = api::ApiError::Unauthorized { body: String::new() };
    assert_eq!(login_failed_message(&unauthorized), "Incorrect username or password.");

    let server = api::ApiError::Status { status: 503, body: String::new() };
    assert_eq!(login_failed_message(&server), "Login failed: server returned 503.");

    let transport = api::ApiError::Request("connection refused".to_owned());
    assert_eq!(login_failed_message(&transport), "Login failed: API request failed: connection refused");
}
