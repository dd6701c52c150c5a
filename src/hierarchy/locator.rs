//! Root component resolution

use crate::error::ServerResult;
use crate::hierarchy::ancestry;
use crate::traits::{Component, ComponentStore};

/// Resolve the top-most ancestor of a component
///
/// A component with an empty ancestry path is its own root; otherwise the
/// first path segment names the root directly, so resolution is at most two
/// fetches. Missing rows (the target or the resolved root) surface as
/// `ComponentNotFound` unchanged - a broken chain is a data problem, not a
/// transient one, so there is nothing to retry.
pub async fn resolve_root(
    store: &dyn ComponentStore,
    component_id: i64,
) -> ServerResult<Component> {
    let target = store.fetch_component(component_id).await?;
    match ancestry::root_of(&target.ancestry)? {
        None => Ok(target),
        Some(root_id) => store.fetch_component(root_id).await,
    }
}
