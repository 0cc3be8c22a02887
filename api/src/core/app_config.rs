use vector_search::{SearchConfig, SearchError};

/// Listen address used when `API_ADDRESS` is not set.
pub const DEFAULT_API_ADDRESS: &str = "0.0.0.0:8000";

/// Process-wide configuration, built once before the listener is bound.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address to bind, e.g. "0.0.0.0:8000".
    pub address: String,
    /// Vector store and embedding settings.
    pub search: SearchConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `API_ADDRESS` is read here; every other key belongs to
    /// [`SearchConfig::from_lookup`].
    pub fn from_env() -> Result<Self, SearchError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SearchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let address = lookup("API_ADDRESS")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_ADDRESS.into());
        let search = SearchConfig::from_lookup(&lookup)?;
        Ok(Self { address, search })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_defaults_to_port_8000_on_all_interfaces() {
        let cfg = AppConfig::from_lookup(|key| match key {
            "QDRANT_URL" => Some("http://localhost:6334".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.address, "0.0.0.0:8000");
        assert_eq!(cfg.search.qdrant.collection, "search_data");
    }

    #[test]
    fn address_override() {
        let cfg = AppConfig::from_lookup(|key| match key {
            "QDRANT_URL" => Some("http://localhost:6334".into()),
            "API_ADDRESS" => Some("127.0.0.1:9000".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.address, "127.0.0.1:9000");
    }
}
