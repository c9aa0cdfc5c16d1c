use super::*;

// =============================================================
// PORT
// =============================================================

#[test]
fn port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("")).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn port_parses_numbers() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 4000 ")).unwrap(), 4000);
}

#[test]
fn port_rejects_garbage_and_overflow() {
    assert!(matches!(parse_port(Some("http")), Err(ConfigError::InvalidPort(v)) if v == "http"));
    assert!(matches!(parse_port(Some("70000")), Err(ConfigError::InvalidPort(_))));
    assert!(matches!(parse_port(Some("-1")), Err(ConfigError::InvalidPort(_))));
}

// =============================================================
// SITE_DIR
// =============================================================

#[test]
fn site_dir_defaults_to_bundled_public_dir() {
    let dir = resolve_site_dir(None).unwrap();
    assert!(dir.ends_with("public"));
    assert!(dir.join("about.html").is_file());
}

#[test]
fn site_dir_accepts_existing_directory() {
    let tmp = std::env::temp_dir();
    let dir = resolve_site_dir(tmp.to_str()).unwrap();
    assert_eq!(dir, tmp);
}

#[test]
fn site_dir_rejects_missing_directory() {
    let err = resolve_site_dir(Some("/definitely/not/here/listlab")).unwrap_err();
    assert!(matches!(err, ConfigError::MissingSiteDir(_)));
    assert!(err.to_string().contains("/definitely/not/here/listlab"));
}

#[test]
fn config_error_messages_are_readable() {
    assert_eq!(ConfigError::InvalidPort("abc".into()).to_string(), "invalid PORT \"abc\"");
}
