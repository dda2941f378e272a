//! User CRUD handlers with hypermedia links.
//!
//! ```text
//! GET    /users
//! GET    /users/{id}
//! POST   /users/user/{text}
//! PUT    /users/user/{id}?name={name}
//! DELETE /users/user/{id}
//! ```
//!
//! Every success body carries a `_links` object; see [`super::links`] for the
//! relations each endpoint advertises.

use actix_web::{HttpRequest, Scope, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::IntoParams;

use super::extractors::{path_config, query_config};
use super::hypermedia::{CollectionModel, EntityModel};
use super::links::UserLinks;
use super::state::HttpState;
use crate::domain::{User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    DeletedUserSchema, ErrorSchema, UserCollectionSchema, UserResourceSchema,
};

/// Key the listing embeds its users under.
pub const EMBEDDED_USERS: &str = "users";

/// Query string for `PUT /users/user/{id}`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RenameQuery {
    /// Replacement name.
    pub name: String,
}

/// Body of a delete acknowledgement, echoing the targeted id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeletedUser {
    /// Identifier the delete targeted.
    pub id: UserId,
}

/// All user routes under `/users`, with extractor errors rendered as JSON.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_api::inbound::http::users::scope;
///
/// let app = App::new().service(scope());
/// ```
#[must_use]
pub fn scope() -> Scope {
    web::scope("/users")
        .app_data(path_config())
        .app_data(query_config())
        .service(list_users)
        .service(get_user)
        .service(create_user)
        .service(update_user)
        .service(delete_user)
}

/// List every user with collection affordances.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = UserCollectionSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("")]
pub async fn list_users(
    req: HttpRequest,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<CollectionModel<User>>> {
    let links = UserLinks::from_request(&req)?;
    let users = state.users.list_users().await?;
    debug!(count = users.len(), "listed users");
    let items = users
        .into_iter()
        .map(|user| {
            let user_links = links.for_listed_user(user.id());
            EntityModel::new(user, user_links)
        })
        .collect();
    Ok(web::Json(CollectionModel::new(
        EMBEDDED_USERS,
        items,
        links.for_collection(),
    )))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserResourceSchema),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/{id}")]
pub async fn get_user(
    req: HttpRequest,
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<EntityModel<User>>> {
    let id = UserId::new(path.into_inner());
    let links = UserLinks::from_request(&req)?;
    let user = state.users.fetch_user(id).await?;
    debug!(user_id = %id, "fetched user");
    Ok(web::Json(EntityModel::new(user, links.for_user(id))))
}

/// Create a user named after the final path segment.
#[utoipa::path(
    post,
    path = "/users/user/{text}",
    params(("text" = String, Path, description = "Name of the new user")),
    responses(
        (status = 200, description = "Created user", body = UserResourceSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "newUser"
)]
#[post("/user/{text}")]
pub async fn create_user(
    req: HttpRequest,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<EntityModel<User>>> {
    let text = path.into_inner();
    let links = UserLinks::from_request(&req)?;
    let user = state.users_command.create_user(text.clone()).await?;
    debug!(user_id = %user.id(), "created user");
    Ok(web::Json(EntityModel::new(user, links.for_created(&text))))
}

/// Rename an existing user.
#[utoipa::path(
    put,
    path = "/users/user/{id}",
    params(("id" = i64, Path, description = "User identifier"), RenameQuery),
    responses(
        (status = 200, description = "Renamed user", body = UserResourceSchema),
        (status = 400, description = "Malformed identifier or missing name", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updatedUser"
)]
#[put("/user/{id}")]
pub async fn update_user(
    req: HttpRequest,
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    query: web::Query<RenameQuery>,
) -> ApiResult<web::Json<EntityModel<User>>> {
    let id = UserId::new(path.into_inner());
    let RenameQuery { name } = query.into_inner();
    let links = UserLinks::from_request(&req)?;
    let user = state.users_command.rename_user(id, name.clone()).await?;
    debug!(user_id = %id, "renamed user");
    Ok(web::Json(EntityModel::new(user, links.for_updated(id, &name))))
}

/// Delete a user. Unknown identifiers are acknowledged the same way.
#[utoipa::path(
    delete,
    path = "/users/user/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Delete acknowledged", body = DeletedUserSchema),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/user/{id}")]
pub async fn delete_user(
    req: HttpRequest,
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<EntityModel<DeletedUser>>> {
    let id = UserId::new(path.into_inner());
    let links = UserLinks::from_request(&req)?;
    let id = state.users_command.delete_user(id).await?;
    debug!(user_id = %id, "deleted user");
    Ok(web::Json(EntityModel::new(
        DeletedUser { id },
        links.for_deleted(id),
    )))
}
