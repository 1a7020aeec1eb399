use cohort::config::{AccountsConfig, AppConfig, GithubConfig, KasmConfig, SessionConfig};
use cohort::config::env::{first_nonempty, optional};
use std::collections::HashMap;

fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

fn empty_source() -> impl Fn(&str) -> Option<String> {
    |_: &str| None
}

#[test]
fn test_first_nonempty_walks_candidates_in_order() {
    let src = source(&[("B", "second"), ("C", "third")]);
    assert_eq!(first_nonempty(&src, &["A", "B", "C"], "fallback"), "second");
}

#[test]
fn test_first_nonempty_skips_empty_values() {
    let src = source(&[("A", ""), ("B", "second")]);
    assert_eq!(first_nonempty(&src, &["A", "B"], "fallback"), "second");
}

#[test]
fn test_first_nonempty_falls_back_to_default() {
    let src = empty_source();
    assert_eq!(first_nonempty(&src, &["A", "B"], "fallback"), "fallback");
}

#[test]
fn test_optional_treats_empty_as_absent() {
    let src = source(&[("KEY", "")]);
    assert_eq!(optional(&src, "KEY"), None);
}

#[test]
fn test_account_defaults() {
    let accounts = AccountsConfig::from_source(&empty_source());

    assert_eq!(accounts.admin.name, "Admin Name");
    assert_eq!(accounts.admin.uid, "admin");
    assert_eq!(accounts.admin.password, "password");
    assert_eq!(accounts.admin.pfp, "default.png");

    assert_eq!(accounts.default_user.name, "User Name");
    assert_eq!(accounts.default_user.uid, "user");
    assert_eq!(accounts.default_user.password, "password");
    assert_eq!(accounts.default_user.pfp, "default.png");

    assert_eq!(accounts.default_password, "password");
    assert_eq!(accounts.default_pfp, "default.png");
}

#[test]
fn test_admin_password_falls_through_to_default_password() {
    let accounts = AccountsConfig::from_source(&source(&[("DEFAULT_PASSWORD", "shared")]));

    assert_eq!(accounts.admin.password, "shared");
    assert_eq!(accounts.default_user.password, "shared");
    assert_eq!(accounts.default_password, "shared");
}

#[test]
fn test_explicit_admin_password_wins_over_default_password() {
    let accounts = AccountsConfig::from_source(&source(&[
        ("ADMIN_PASSWORD", "admin-only"),
        ("DEFAULT_PASSWORD", "shared"),
    ]));

    assert_eq!(accounts.admin.password, "admin-only");
    assert_eq!(accounts.default_user.password, "shared");
}

#[test]
fn test_session_defaults() {
    let session = SessionConfig::from_source(&empty_source());

    assert_eq!(session.secret_key, "SECRET_KEY");
    assert_eq!(session.session_cookie_name, "sess_rust_axum");
    assert_eq!(session.jwt_token_name, "jwt_rust_axum");
}

#[test]
fn test_github_defaults_and_overrides() {
    let github = GithubConfig::from_source(&empty_source());
    assert_eq!(github.api_url, "https://api.github.com");
    assert_eq!(github.token, None);
    assert_eq!(github.target_type, "user");
    assert_eq!(github.target_name, "open-coding-society");

    let github = GithubConfig::from_source(&source(&[
        ("GITHUB_TOKEN", "ghp_abc"),
        ("GITHUB_TARGET_TYPE", "organization"),
        ("GITHUB_TARGET_NAME", "acme"),
    ]));
    assert_eq!(github.token.as_deref(), Some("ghp_abc"));
    assert_eq!(github.target_type, "organization");
    assert_eq!(github.target_name, "acme");
}

#[test]
fn test_kasm_defaults() {
    let kasm = KasmConfig::from_source(&empty_source());

    assert_eq!(kasm.server, "https://kasm.nighthawkcodingsociety.com");
    assert_eq!(kasm.api_key, None);
    assert_eq!(kasm.api_key_secret, None);
}

#[test]
fn test_app_config_resolves_everything_from_empty_environment() {
    let config = AppConfig::from_source(empty_source());

    // Every field holds a defined value even with nothing set.
    assert!(!config.session.secret_key.is_empty());
    assert!(!config.accounts.admin.uid.is_empty());
    assert!(config.database.is_sqlite());
    assert_eq!(config.cors.allowed_origins.len(), 8);
    assert_eq!(config.uploads.max_content_length, 5 * 1024 * 1024);
    assert_eq!(config.groq.api_key, None);
}
