//! HTTP inbound adapter exposing the user REST endpoints.

pub mod error;
pub mod extractors;
pub mod health;
pub mod hypermedia;
pub mod links;
pub mod schemas;
pub mod state;
pub mod users;

pub use error::ApiResult;
