//! Helpers shared by the integration test crates under `backend/tests/`.

pub mod cluster_skip;
pub mod pg_embed;

pub use cluster_skip::handle_cluster_setup_failure;
pub use pg_embed::shared_cluster;
