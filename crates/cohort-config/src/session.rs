use crate::env::first_nonempty;

/// Browser session settings: the signing secret and the names under which
/// the session cookie and JWT cookie are set.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub secret_key: String,
    pub session_cookie_name: String,
    pub jwt_token_name: String,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_source(&|key| std::env::var(key).ok())
    }

    pub fn from_source<F>(source: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            secret_key: first_nonempty(source, &["SECRET_KEY"], "SECRET_KEY"),
            session_cookie_name: first_nonempty(
                source,
                &["SESSION_COOKIE_NAME"],
                "sess_rust_axum",
            ),
            jwt_token_name: first_nonempty(source, &["JWT_TOKEN_NAME"], "jwt_rust_axum"),
        }
    }
}
