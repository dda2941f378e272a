//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Stored users. `id` is assigned by a sequence on insert.
    users (id) {
        /// Primary key drawn from `users_id_seq`.
        id -> Int8,
        /// Free-form user name.
        name -> Text,
    }
}
