//! PostgreSQL persistence adapter for the electoral roll.
//!
//! The roll is a read-only dataset loaded out of band; this module only ever
//! queries it. Every value that originates from a request travels to the
//! database as a bound parameter.

pub mod diesel_voter_query;
pub mod models;
pub mod pool;
pub mod schema;

pub use diesel_voter_query::DieselVoterQuery;
pub use pool::{DbPool, PoolConfig, PoolError};
