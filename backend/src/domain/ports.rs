//! Driving port for voter lookups.
//!
//! Inbound adapters (HTTP handlers) use this port so they never import
//! outbound persistence concerns. Production backs it with the Diesel
//! adapter; tests and database-less operation use the deterministic
//! in-memory [`FixtureVoterQuery`].

use async_trait::async_trait;

use super::search::{SearchPolicy, SearchRequest, contains_case_insensitive};
use super::voter::{AreaCode, VoterRecord};
use super::{Error, FilterField};

/// Domain use-case port for read-only voter lookups.
///
/// Both operations are stateless request/response calls, safe for concurrent
/// use. `search` returns at most the configured result limit; ordering is
/// whatever the store yields and callers must not depend on it.
#[async_trait]
pub trait VoterQuery: Send + Sync {
    /// Bounded, filtered search scoped by area code and gender.
    async fn search(&self, request: &SearchRequest) -> Result<Vec<VoterRecord>, Error>;

    /// Full-detail lookup by the unique `(area_code, voter_no)` pair.
    async fn find_voter(
        &self,
        area_code: AreaCode,
        voter_no: &str,
    ) -> Result<Option<VoterRecord>, Error>;
}

/// In-memory [`VoterQuery`] implementation.
///
/// Mirrors the adapter's semantics exactly: equality on area code and
/// gender, literal case-insensitive substring OR-filter over the policy's
/// field set, hard result cap. Backs handler tests and serves as the
/// fixture fallback when no database is configured.
#[derive(Debug, Clone, Default)]
pub struct FixtureVoterQuery {
    records: Vec<VoterRecord>,
    policy: SearchPolicy,
}

impl FixtureVoterQuery {
    /// Build a fixture store over the given records.
    pub fn new(records: Vec<VoterRecord>, policy: SearchPolicy) -> Self {
        Self { records, policy }
    }

    /// Empty store with the given policy; every search returns no rows.
    pub fn empty(policy: SearchPolicy) -> Self {
        Self::new(Vec::new(), policy)
    }

    fn field_value(record: &VoterRecord, field: FilterField) -> &str {
        match field {
            FilterField::Name => &record.name,
            FilterField::Father => &record.father,
            FilterField::Mother => &record.mother,
            FilterField::DateOfBirth => &record.date_of_birth,
        }
    }

    fn matches(&self, record: &VoterRecord, request: &SearchRequest) -> bool {
        if record.area_code != request.area_code() || record.gender != request.gender() {
            return false;
        }
        request.name_filter().is_none_or(|filter| {
            self.policy
                .filter_fields()
                .iter()
                .any(|field| contains_case_insensitive(Self::field_value(record, *field), filter))
        })
    }
}

#[async_trait]
impl VoterQuery for FixtureVoterQuery {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<VoterRecord>, Error> {
        let limit = self.policy.result_limit() as usize;
        Ok(self
            .records
            .iter()
            .filter(|record| self.matches(record, request))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_voter(
        &self,
        area_code: AreaCode,
        voter_no: &str,
    ) -> Result<Option<VoterRecord>, Error> {
        Ok(self
            .records
            .iter()
            .find(|record| record.area_code == area_code && record.voter_no == voter_no)
            .cloned())
    }
}
