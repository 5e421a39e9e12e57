//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use backend::config::VoterSearchSettings;
use backend::domain::SearchPolicy;
use backend::outbound::persistence::{DbPool, PoolConfig};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) policy: SearchPolicy,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration with the given address and policy.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, policy: SearchPolicy) -> Self {
        Self {
            bind_addr,
            policy,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for the persistence adapter.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Build the configuration from loaded settings, constructing the
    /// database pool when a connection URL is configured.
    ///
    /// # Errors
    ///
    /// Returns [`std::io::Error`] when the bind address does not parse or the
    /// pool cannot be built.
    pub async fn from_settings(settings: &VoterSearchSettings) -> std::io::Result<Self> {
        let bind_addr: SocketAddr = settings.bind_addr().parse().map_err(|e| {
            std::io::Error::other(format!("invalid bind address {}: {e}", settings.bind_addr()))
        })?;
        let mut config = Self::new(bind_addr, settings.search_policy());

        if let Some(url) = settings.database_url.as_deref() {
            let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.pool_max_size()))
                .await
                .map_err(|e| std::io::Error::other(format!("database pool: {e}")))?;
            config = config.with_db_pool(pool);
        }

        Ok(config)
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
