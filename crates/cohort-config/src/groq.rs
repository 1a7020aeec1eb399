use crate::env::optional;

/// GROQ inference API settings. No key means the integration is disabled.
#[derive(Clone, Debug)]
pub struct GroqConfig {
    pub api_key: Option<String>,
}

impl GroqConfig {
    pub fn from_env() -> Self {
        Self::from_source(&|key| std::env::var(key).ok())
    }

    pub fn from_source<F>(source: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_key: optional(source, "GROQ_API_KEY"),
        }
    }
}
