//! Ordered fallback-chain resolution for environment values.
//!
//! A configuration value is resolved by walking a priority list of sources:
//! explicit environment variable, then any secondary variables, then a
//! literal default. An empty string counts as unset so that
//! `ADMIN_PASSWORD=""` still falls through to `DEFAULT_PASSWORD`.

/// Returns the first present, non-empty value among `keys`, or `default`.
pub fn first_nonempty<F>(source: &F, keys: &[&str], default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    keys.iter()
        .filter_map(|key| optional(source, key))
        .next()
        .unwrap_or_else(|| default.to_string())
}

/// Returns `Some` only if `key` resolves to a non-empty value.
pub fn optional<F>(source: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    source(key).filter(|value| !value.is_empty())
}
