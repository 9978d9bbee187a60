use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_api_env() {
    unsafe {
        std::env::remove_var("HYDROMAP_API_URL");
        std::env::remove_var("HYDROMAP_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("HYDROMAP_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn default_points_at_compiled_url() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.base_url, DEFAULT_API_URL);
    assert_eq!(cfg.timeouts, Timeouts { request_secs: 30, connect_secs: 10 });
}

#[test]
fn new_strips_trailing_slashes() {
    let cfg = ApiConfig::new("  http://api.test:8000//  ").unwrap();
    assert_eq!(cfg.base_url, "http://api.test:8000");
}

#[test]
fn new_rejects_blank_url() {
    let err = ApiConfig::new("   ").unwrap_err();
    assert!(matches!(err, ApiError::ConfigParse(_)));
}

#[test]
fn normalize_keeps_path_prefix() {
    assert_eq!(normalize_base_url("https://dam.example/api/").unwrap(), "https://dam.example/api");
}

// Env-mutating cases share one test so parallel runs cannot interleave them.
#[test]
fn from_env_reads_overrides_and_rejects_bad_timeouts() {
    unsafe {
        clear_api_env();
        std::env::set_var("HYDROMAP_API_URL", "https://monitor.example/");
        std::env::set_var("HYDROMAP_REQUEST_TIMEOUT_SECS", "5");
        std::env::set_var("HYDROMAP_CONNECT_TIMEOUT_SECS", " 2 ");
    }

    let cfg = ApiConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, "https://monitor.example");
    assert_eq!(cfg.timeouts, Timeouts { request_secs: 5, connect_secs: 2 });

    unsafe { std::env::set_var("HYDROMAP_REQUEST_TIMEOUT_SECS", "soon") };
    let err = ApiConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("HYDROMAP_REQUEST_TIMEOUT_SECS"));

    unsafe { clear_api_env() };
}
