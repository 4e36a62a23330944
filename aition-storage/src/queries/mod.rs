//! Query modules, one per concern.

pub mod relationship_crud;
pub mod relationship_query;

use serde::Serialize;

use aition_core::errors::AitionResult;

/// Render a unit enum to its lowercase wire tag for use in a column.
pub(crate) fn enum_tag<T: Serialize>(value: &T) -> AitionResult<String> {
    let json = serde_json::to_string(value)?;
    Ok(json.trim_matches('"').to_string())
}
