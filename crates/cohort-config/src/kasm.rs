use crate::env::{first_nonempty, optional};

/// KASM workspace server settings.
#[derive(Clone, Debug)]
pub struct KasmConfig {
    pub server: String,
    pub api_key: Option<String>,
    pub api_key_secret: Option<String>,
}

impl KasmConfig {
    pub fn from_env() -> Self {
        Self::from_source(&|key| std::env::var(key).ok())
    }

    pub fn from_source<F>(source: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            server: first_nonempty(
                source,
                &["KASM_SERVER"],
                "https://kasm.nighthawkcodingsociety.com",
            ),
            api_key: optional(source, "KASM_API_KEY"),
            api_key_secret: optional(source, "KASM_API_KEY_SECRET"),
        }
    }
}
