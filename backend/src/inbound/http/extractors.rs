//! Extractor configuration turning malformed path and query input into
//! structured `invalid_request` errors instead of Actix's plain-text defaults.

use actix_web::error::{PathError, QueryPayloadError};
use actix_web::web;
use serde_json::json;

use crate::domain::Error;

fn path_error(err: &PathError) -> Error {
    let PathError::Deserialize(inner) = err else {
        return Error::invalid_request("invalid path parameter");
    };
    Error::invalid_request(format!("invalid path parameter: {inner}"))
        .with_details(json!({ "source": "path" }))
}

fn query_error(err: &QueryPayloadError) -> Error {
    let QueryPayloadError::Deserialize(inner) = err else {
        return Error::invalid_request("invalid query string");
    };
    Error::invalid_request(format!("invalid query string: {inner}"))
        .with_details(json!({ "source": "query" }))
}

/// Path extractor settings for the user routes.
#[must_use]
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| path_error(&err).into())
}

/// Query extractor settings for the user routes.
#[must_use]
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| query_error(&err).into())
}
