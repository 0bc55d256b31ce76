//! API keys and deployment-specific endpoints read from the environment.

use finquiz_common::ConfigError;

pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const PINECONE_API_KEY: &str = "PINECONE_API_KEY";
pub const PINECONE_INDEX_HOST: &str = "PINECONE_INDEX_HOST";

/// Secrets needed to reach the hosted services.
#[derive(Clone)]
pub struct Secrets {
    pub gemini_api_key: String,
    pub pinecone_api_key: Option<String>,
    pub pinecone_index_host: Option<String>,
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("gemini_api_key", &"[REDACTED]")
            .field(
                "pinecone_api_key",
                &self.pinecone_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("pinecone_index_host", &self.pinecone_index_host)
            .finish()
    }
}

impl Secrets {
    /// Read secrets from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read secrets through an arbitrary lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let gemini_api_key =
            get(GEMINI_API_KEY).ok_or_else(|| ConfigError::MissingEnv(GEMINI_API_KEY.into()))?;

        Ok(Self {
            gemini_api_key,
            pinecone_api_key: get(PINECONE_API_KEY),
            pinecone_index_host: get(PINECONE_INDEX_HOST),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_gemini_key_is_an_error() {
        let err = Secrets::from_lookup(lookup(&[(PINECONE_API_KEY, "pc")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv(ref k) if k == GEMINI_API_KEY));
    }

    #[test]
    fn blank_gemini_key_is_an_error() {
        let err = Secrets::from_lookup(lookup(&[(GEMINI_API_KEY, "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv(_)));
    }

    #[test]
    fn pinecone_values_are_optional() {
        let secrets = Secrets::from_lookup(lookup(&[(GEMINI_API_KEY, "g-key")])).unwrap();
        assert_eq!(secrets.gemini_api_key, "g-key");
        assert!(secrets.pinecone_api_key.is_none());
        assert!(secrets.pinecone_index_host.is_none());
    }

    #[test]
    fn reads_all_values() {
        let secrets = Secrets::from_lookup(lookup(&[
            (GEMINI_API_KEY, "g-key"),
            (PINECONE_API_KEY, "pc-key"),
            (PINECONE_INDEX_HOST, "https://idx.svc.pinecone.io"),
        ]))
        .unwrap();
        assert_eq!(secrets.pinecone_api_key.as_deref(), Some("pc-key"));
        assert_eq!(
            secrets.pinecone_index_host.as_deref(),
            Some("https://idx.svc.pinecone.io")
        );
    }

    #[test]
    fn debug_redacts_keys() {
        let secrets = Secrets::from_lookup(lookup(&[
            (GEMINI_API_KEY, "super-secret"),
            (PINECONE_API_KEY, "also-secret"),
        ]))
        .unwrap();
        let debug = format!("{secrets:?}");
        assert!(!debug.contains("super-secret"));
        assert!(!debug.contains("also-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
