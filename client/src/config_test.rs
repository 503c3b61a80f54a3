use super::*;

#[test]
fn endpoint_joins_with_single_slash() {
    assert_eq!(endpoint("http://localhost:3000", "/login"), "http://localhost:3000/login");
    assert_eq!(endpoint("http://localhost:3000/", "login"), "http://localhost:3000/login");
    assert_eq!(endpoint("http://localhost:3000//", "//signup"), "http://localhost:3000/signup");
}

#[test]
fn default_config_uses_fixed_paths_and_timings() {
    let config = AuthConfig::default();
    assert_eq!(config.signup_path, "/signup");
    assert_eq!(config.post_login_page, POST_LOGIN_PAGE);
    assert_eq!(config.redirect_delay, Duration::from_millis(1000));
    assert_eq!(config.request_timeout, Duration::from_secs(15));
}

#[test]
fn urls_follow_configured_origin() {
    let config = AuthConfig {
        backend_origin: "https://auth.example.com".to_owned(),
        login_path: "/user-login".to_owned(),
        ..AuthConfig::default()
    };
    assert_eq!(config.login_url(), "https://auth.example.com/user-login");
    assert_eq!(config.signup_url(), "https://auth.example.com/signup");
}
