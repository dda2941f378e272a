//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: user stores (in-memory and PostgreSQL via Diesel)
//!
//! Adapters translate between domain types and storage representations and
//! contain no business logic.

pub mod persistence;
