use super::*;

/// # Safety
///
/// Mutates process environment. Run with `--test-threads=1` if other tests
/// in this binary read the same variables.
unsafe fn set_env(key: &str, value: Option<&str>) {
    unsafe {
        match value {
            Some(v) => std::env::set_var(key, v),
            None => std::env::remove_var(key),
        }
    }
}

#[test]
fn default_matches_dev_server_conventions() {
    let config = ServerConfig::default();
    assert_eq!(config.bind_addr(), "0.0.0.0:5173");
    assert_eq!(config.dist_dir, PathBuf::from("dist"));
}

#[test]
fn from_env_reads_overrides_and_rejects_bad_port() {
    unsafe {
        set_env("HYDROMAP_HOST", Some("127.0.0.1"));
        set_env("PORT", Some("8080"));
        set_env("HYDROMAP_DIST_DIR", Some("client/dist"));
    }
    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    assert_eq!(config.dist_dir, PathBuf::from("client/dist"));

    unsafe { set_env("PORT", Some("not-a-port")) };
    let err = ServerConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("PORT"));

    unsafe {
        set_env("HYDROMAP_HOST", Some("  "));
        set_env("PORT", None);
        set_env("HYDROMAP_DIST_DIR", None);
    }
    assert_eq!(ServerConfig::from_env().unwrap(), ServerConfig::default());

    unsafe { set_env("HYDROMAP_HOST", None) };
}
