//! OpenAPI schema definitions for domain types and hypermedia envelopes.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror the JSON those types and the HAL envelopes produce,
//! and exist only so utoipa can describe them.

use std::collections::HashMap;

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested user does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The user store cannot be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "user 7 not found")]
    message: String,
    /// Correlation identifier, mirrored in the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details, such as `{"source": "query"}`.
    details: Option<serde_json::Value>,
}

/// A single `{"href": ...}` link object.
#[derive(ToSchema)]
#[schema(as = Link)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct LinkSchema {
    /// Absolute target URL.
    #[schema(example = "http://localhost:8080/users/1")]
    href: String,
}

/// A user rendered with its affordance links.
#[derive(ToSchema)]
#[schema(as = UserResource)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserResourceSchema {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    id: i64,
    /// Free-form user name.
    #[schema(example = "Alice")]
    name: String,
    /// Links keyed by relation name.
    _links: HashMap<String, LinkSchema>,
}

/// Embedded users of a listing.
#[derive(ToSchema)]
#[schema(as = UsersEmbedded)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UsersEmbeddedSchema {
    /// Every stored user; empty when the store is empty.
    users: Vec<UserResourceSchema>,
}

/// The user listing.
#[derive(ToSchema)]
#[schema(as = UserCollection)]
pub struct UserCollectionSchema {
    /// Embedded user resources.
    _embedded: UsersEmbeddedSchema,
    /// Collection-level links keyed by relation name.
    _links: HashMap<String, LinkSchema>,
}

/// Acknowledgement of a delete request.
#[derive(ToSchema)]
#[schema(as = DeletedUser)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DeletedUserSchema {
    /// Identifier the delete targeted.
    #[schema(example = 1)]
    id: i64,
    /// Links keyed by relation name.
    _links: HashMap<String, LinkSchema>,
}
