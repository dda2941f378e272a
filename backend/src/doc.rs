//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the user endpoints, the health probes and the schema
//! wrappers from [`crate::inbound::http::schemas`], which describe the domain
//! types and HAL envelopes without coupling them to utoipa.
//!
//! The generated document is served by Swagger UI in debug builds and
//! printed by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    DeletedUserSchema, ErrorCodeSchema, ErrorSchema, LinkSchema, UserCollectionSchema,
    UserResourceSchema, UsersEmbeddedSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        description = "User CRUD with hypermedia links and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserResourceSchema,
        UserCollectionSchema,
        UsersEmbeddedSchema,
        DeletedUserSchema,
        LinkSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "users", description = "Operations on users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
