// ABOUTME: API module containing the HTTP handlers, one sub-module per resource.
// ABOUTME: Input arrives as query parameters; every response body is JSON.

pub mod article_commandes;
pub mod articles;
pub mod categories;
pub mod commandes;

use crate::error::ApiError;

/// Read a path id. Anything that is not an integer cannot name a record, so it
/// is reported with the resource's not-found message.
pub(crate) fn parse_id(raw: &str, not_found: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::NotFound(not_found.to_string()))
}
