//! Service configuration loaded via OrthoConfig.
//!
//! Values come from environment variables (`VOTER_SEARCH_*`), a config file,
//! or command-line flags, in OrthoConfig's usual precedence order.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{DEFAULT_RESULT_LIMIT, FilterField, SearchPolicy};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Configuration values controlling the voter search service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "VOTER_SEARCH")]
pub struct VoterSearchSettings {
    /// PostgreSQL connection URL for the electoral roll.
    ///
    /// When absent the service starts against an empty in-memory store,
    /// which is only useful for local smoke testing.
    pub database_url: Option<String>,
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Maximum rows returned by a single search.
    pub result_limit: Option<u32>,
    /// Fields the optional name filter matches against, combined with OR.
    pub filter_fields: Option<Vec<FilterField>>,
    /// Maximum connections held by the database pool.
    pub pool_max_size: Option<u32>,
}

impl VoterSearchSettings {
    /// Return the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Return the configured pool size, falling back to the default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Assemble the search policy from the configured limit and fields.
    pub fn search_policy(&self) -> SearchPolicy {
        SearchPolicy::new(
            self.result_limit.unwrap_or(DEFAULT_RESULT_LIMIT),
            self.filter_fields.clone().unwrap_or_default(),
        )
    }
}
