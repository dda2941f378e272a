//! Domain primitives, ports and services.
//!
//! Purpose: define the user entity, the transport-agnostic error payload and
//! the use-cases HTTP handlers drive. Nothing here depends on actix-web or
//! Diesel.
//!
//! Public surface:
//! - `User`, `UserId`, `UserDraft`: the user record and its write form.
//! - `Error`, `ErrorCode`: error payload and stable error identifiers.
//! - `TraceId`, `TRACE_ID_HEADER`: request correlation.
//! - `UserService`: implementation of the `UsersQuery`/`UsersCommand` ports.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
mod user_service;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft, UserId};
pub use self::user_service::UserService;
