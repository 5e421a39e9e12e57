//! Diesel-backed [`VoterQuery`] adapter for PostgreSQL.
//!
//! Every request value reaches the database as a bound parameter. The name
//! filter is escaped for `LIKE` metacharacters and matched case-insensitively
//! with `ILIKE` across the configured filter fields, combined with `OR`.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::Bool;
use diesel_async::RunQueryDsl;
use tracing::error;

use crate::domain::ports::VoterQuery;
use crate::domain::{
    AreaCode, Error, FilterField, SearchPolicy, SearchRequest, VoterRecord, VoterValidationError,
};

use super::models::VoterRow;
use super::pool::{DbPool, PoolError};
use super::schema::voters;

type BoxedPredicate = Box<dyn BoxableExpression<voters::table, Pg, SqlType = Bool>>;

/// Diesel-backed `VoterQuery` implementation over the electoral roll table.
#[derive(Clone)]
pub struct DieselVoterQuery {
    pool: DbPool,
    policy: SearchPolicy,
}

impl DieselVoterQuery {
    /// Create a new query adapter over the given pool and search policy.
    pub fn new(pool: DbPool, policy: SearchPolicy) -> Self {
        Self { pool, policy }
    }
}

/// Escape `LIKE` metacharacters so the filter matches them literally.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for ch in needle.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn field_predicate(field: FilterField, pattern: &str) -> BoxedPredicate {
    let pattern = pattern.to_owned();
    match field {
        FilterField::Name => Box::new(voters::name.ilike(pattern)),
        FilterField::Father => Box::new(voters::father.ilike(pattern)),
        FilterField::Mother => Box::new(voters::mother.ilike(pattern)),
        FilterField::DateOfBirth => Box::new(voters::date_of_birth.ilike(pattern)),
    }
}

/// Build the search statement: mandatory equality on area and gender, the
/// optional name filter as an `OR` group over the policy's fields, capped at
/// the policy's result limit.
fn search_statement(
    request: &SearchRequest,
    policy: &SearchPolicy,
) -> voters::BoxedQuery<'static, Pg> {
    let mut query = voters::table
        .filter(voters::area_code.eq(request.area_code().get()))
        .filter(voters::gender.eq(request.gender().as_db_str()))
        .limit(i64::from(policy.result_limit()))
        .into_boxed();

    if let Some(filter) = request.name_filter() {
        let pattern = format!("%{}%", escape_like(filter));
        let mut fields = policy.filter_fields().iter().copied();
        if let Some(first) = fields.next() {
            let predicate = fields.fold(field_predicate(first, &pattern), |group, field| {
                Box::new(group.or(field_predicate(field, &pattern)))
            });
            query = query.filter(predicate);
        }
    }

    query
}

fn map_pool_error(err: PoolError) -> Error {
    error!(error = %err, "voter store connection failed");
    Error::service_unavailable("voter store unavailable")
}

fn map_diesel_error(err: diesel::result::Error) -> Error {
    error!(error = %err, "voter store query failed");
    Error::internal("voter store query failed")
}

fn map_row_error(err: VoterValidationError) -> Error {
    error!(error = %err, "stored voter row failed validation");
    Error::internal("stored voter record is invalid")
}

#[async_trait]
impl VoterQuery for DieselVoterQuery {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<VoterRecord>, Error> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<VoterRow> = search_statement(request, &self.policy)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter()
            .map(|row| VoterRecord::try_from(row).map_err(map_row_error))
            .collect()
    }

    async fn find_voter(
        &self,
        area_code: AreaCode,
        voter_no: &str,
    ) -> Result<Option<VoterRecord>, Error> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = voters::table
            .filter(voters::area_code.eq(area_code.get()))
            .filter(voters::voter_no.eq(voter_no.to_owned()))
            .first::<VoterRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(|row| VoterRecord::try_from(row).map_err(map_row_error))
            .transpose()
    }
}
