use super::*;
use serde_json::json;

#[test]
fn parses_login_with_explicit_password() {
    let cli = Cli::try_parse_from([
        "hydromap-cli",
        "--base-url",
        "http://api.test",
        "login",
        "--username",
        "operator",
        "--password",
        "s3cret",
    ])
    .unwrap();

    assert_eq!(cli.base_url, "http://api.test");
    let Command::Login(args) = cli.command else { panic!("expected login") };
    assert_eq!(args.username, "operator");
    assert_eq!(args.password.as_deref(), Some("s3cret"));
}

#[test]
fn parses_nested_measurement_commands() {
    let cli = Cli::try_parse_from(["hydromap-cli", "measurements", "stats", "IP01"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Measurements(MeasurementsCommand { command: MeasurementsSubcommand::Stats { ref code } })
            if code == "IP01"
    ));

    let cli = Cli::try_parse_from(["hydromap-cli", "points", "show", "GP02"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Points(PointsCommand { command: PointsSubcommand::Show { ref code } }) if code == "GP02"
    ));
}

#[test]
fn session_file_flag_overrides_default() {
    let cli = Cli::try_parse_from(["hydromap-cli", "--session-file", "/tmp/s.json", "status"]).unwrap();
    assert_eq!(cli.session_file, PathBuf::from("/tmp/s.json"));
}

#[test]
fn unknown_command_is_rejected() {
    assert!(Cli::try_parse_from(["hydromap-cli", "delete-everything"]).is_err());
}

#[test]
fn empty_password_is_missing() {
    assert!(matches!(resolve_password(None), Err(CliError::MissingPassword)));
    assert!(matches!(resolve_password(Some(String::new())), Err(CliError::MissingPassword)));
    assert_eq!(resolve_password(Some("pw".to_owned())).unwrap(), "pw");
}

#[test]
fn require_token_checks_session() {
    let session = Session::in_memory();
    assert!(matches!(require_token(&session), Err(CliError::NotSignedIn)));

    session.begin("t-1", None).unwrap();
    assert!(require_token(&session).is_ok());
}

#[test]
fn redact_token_hides_only_string_tokens() {
    let redacted = redact_token(json!({ "access_token": "abc", "token_type": "bearer" }));
    assert_eq!(redacted["access_token"], "<stored>");
    assert_eq!(redacted["token_type"], "bearer");

    let untouched = redact_token(json!({ "detail": "no token" }));
    assert_eq!(untouched, json!({ "detail": "no token" }));
}
