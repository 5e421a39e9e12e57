//! Outbound adapters for external systems.

pub mod persistence;
