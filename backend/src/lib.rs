//! Users API library: domain, HTTP adapter, persistence adapters and
//! middleware shared by the `users-api` binary and the integration tests.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
