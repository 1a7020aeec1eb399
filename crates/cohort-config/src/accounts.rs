use crate::env::first_nonempty;

/// Seed credentials for one bootstrap account.
#[derive(Clone, Debug)]
pub struct AccountSeed {
    pub name: String,
    pub uid: String,
    pub password: String,
    pub pfp: String,
}

/// Bootstrap account configuration.
///
/// The admin and default-user seeds are consumed when the user table is
/// first populated; the reset defaults apply whenever an account is
/// restored to a known state.
#[derive(Clone, Debug)]
pub struct AccountsConfig {
    pub admin: AccountSeed,
    pub default_user: AccountSeed,
    /// Password applied on account reset, and the fallback for both seeds.
    pub default_password: String,
    /// Profile picture applied on account reset.
    pub default_pfp: String,
}

impl AccountsConfig {
    pub fn from_env() -> Self {
        Self::from_source(&|key| std::env::var(key).ok())
    }

    pub fn from_source<F>(source: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            admin: AccountSeed {
                name: first_nonempty(source, &["ADMIN_USER"], "Admin Name"),
                uid: first_nonempty(source, &["ADMIN_UID"], "admin"),
                // Falls through to the shared reset password when unset
                password: first_nonempty(
                    source,
                    &["ADMIN_PASSWORD", "DEFAULT_PASSWORD"],
                    "password",
                ),
                pfp: first_nonempty(source, &["ADMIN_PFP"], "default.png"),
            },
            default_user: AccountSeed {
                name: first_nonempty(source, &["DEFAULT_USER"], "User Name"),
                uid: first_nonempty(source, &["DEFAULT_UID"], "user"),
                password: first_nonempty(
                    source,
                    &["DEFAULT_USER_PASSWORD", "DEFAULT_PASSWORD"],
                    "password",
                ),
                pfp: first_nonempty(source, &["DEFAULT_USER_PFP"], "default.png"),
            },
            default_password: first_nonempty(source, &["DEFAULT_PASSWORD"], "password"),
            default_pfp: first_nonempty(source, &["DEFAULT_PFP"], "default.png"),
        }
    }
}
