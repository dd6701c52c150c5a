//! Ancestry path codec
//!
//! An ancestor chain is stored as a `/`-delimited string ("8/12/31" = root
//! 8, then 12, then 31), ordered top-most first and excluding the component
//! itself. An empty path marks a root.

use crate::error::{ServerError, ServerResult};

/// Decode an ancestry path into its ordered ancestor ids
///
/// An empty path decodes to an empty vec. Any segment that is not a valid
/// id (including the empty segments produced by doubled or trailing
/// delimiters) fails the whole path.
pub fn decode(path: &str) -> ServerResult<Vec<i64>> {
    if path.is_empty() {
        return Ok(Vec::new());
    }
    path.split('/')
        .map(|segment| {
            segment
                .parse::<i64>()
                .map_err(|_| ServerError::MalformedAncestry {
                    path: path.to_string(),
                })
        })
        .collect()
}

/// Encode an ordered ancestor chain back into path form
pub fn encode(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Top-most ancestor named by a path
///
/// `None` when the path is empty: the component itself is the root.
pub fn root_of(path: &str) -> ServerResult<Option<i64>> {
    Ok(decode(path)?.first().copied())
}
