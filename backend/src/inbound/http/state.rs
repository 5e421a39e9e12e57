//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and depend only on the
//! domain port, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::VoterQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read-only voter lookup port.
    pub voters: Arc<dyn VoterQuery>,
}

impl HttpState {
    /// Construct state over a voter query port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::SearchPolicy;
    /// use backend::domain::ports::FixtureVoterQuery;
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureVoterQuery::empty(SearchPolicy::default())));
    /// let _voters = state.voters.clone();
    /// ```
    pub fn new(voters: Arc<dyn VoterQuery>) -> Self {
        Self { voters }
    }
}
