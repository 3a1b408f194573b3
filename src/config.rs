use crate::error::{RecallError, Result};

/// Runtime configuration, sourced from the environment.
#[derive(Debug, Clone)]
pub struct RecallConfig {
    pub database_url: String,
    pub bind_address: String,
    /// Default page size for list endpoints when the caller omits `limit`.
    pub default_page_limit: i64,
}

impl Default for RecallConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://data/ars.db".to_string(),
            bind_address: "0.0.0.0:8000".to_string(),
            default_page_limit: 100,
        }
    }
}

impl RecallConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(db_url) = std::env::var("DATABASE_URL") {
            config.database_url = db_url;
        }

        if let Ok(bind) = std::env::var("RECALL_BIND_ADDRESS") {
            config.bind_address = bind;
        }

        if let Ok(limit) = std::env::var("RECALL_PAGE_LIMIT") {
            config.default_page_limit = limit.parse().map_err(|e| {
                RecallError::Configuration(format!("Invalid RECALL_PAGE_LIMIT: {e}"))
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RecallConfig::default();
        assert_eq!(config.bind_address, "0.0.0.0:8000");
        assert_eq!(config.default_page_limit, 100);
    }
}
