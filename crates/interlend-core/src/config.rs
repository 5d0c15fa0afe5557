//! Configuration module for interlend services

use interlend_types::TenantId;
use serde::{Deserialize, Serialize};

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Tenant this service instance runs under
    pub local_tenant: TenantId,

    /// Remote item search configuration
    pub search: SearchConfig,
}

/// Configuration for the consortium-wide item search collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Base URL of the search service
    pub base_url: String,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            local_tenant: "local".to_string(),
            search: SearchConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8081".to_string(),
            timeout_ms: 30_000,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = ServiceConfig::default();

        // Local tenant
        if let Ok(tenant) = std::env::var("INTERLEND_TENANT") {
            config.local_tenant = tenant;
        }

        // Search service URL
        if let Ok(url) = std::env::var("INTERLEND_SEARCH_URL") {
            config.search.base_url = url;
        }

        // Search timeout
        if let Ok(timeout) = std::env::var("INTERLEND_SEARCH_TIMEOUT_MS") {
            if let Ok(timeout) = timeout.parse() {
                config.search.timeout_ms = timeout;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert!(!config.local_tenant.is_empty());
        assert_eq!(config.search.timeout_ms, 30_000);
    }
}
