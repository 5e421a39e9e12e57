//! Voter search backend library modules.
//!
//! The crate translates typed, partially optional search inputs into safe,
//! bounded, case-insensitive lookups against a read-only electoral roll.
//! Layout follows ports-and-adapters: `domain` holds the model and query
//! port, `inbound::http` the REST adapter, `outbound::persistence` the
//! Diesel/PostgreSQL adapter.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use doc::ApiDoc;
pub use middleware::trace::Trace;
