//! Domain primitives and the voter query port.
//!
//! Purpose: define the strongly typed model used by the HTTP and persistence
//! layers, keep validation at construction time, and stay free of transport
//! concerns. Each type documents its invariants and serde contract.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`] — API error payload and stable codes.
//! - [`VoterRecord`], [`Gender`], [`AreaCode`] — the electoral roll model.
//! - [`SearchRequest`], [`SearchPolicy`], [`FilterField`] — validated search
//!   inputs and result-shaping configuration.
//! - [`ports::VoterQuery`] — the driving port for lookups.

pub mod error;
pub mod ports;
pub mod search;
pub mod voter;

pub use self::error::{Error, ErrorCode};
pub use self::search::{
    DEFAULT_RESULT_LIMIT, FilterField, SearchPolicy, SearchRequest, contains_case_insensitive,
};
pub use self::voter::{AreaCode, Gender, VoterRecord, VoterValidationError};
