//! Hierarchy query service
//!
//! Orchestrates root resolution, tree assembly and master file decoration
//! behind the one operation the web layer calls.

use std::sync::Arc;

use serde::Serialize;

use crate::config::ExternalSystems;
use crate::error::ServerResult;
use crate::hierarchy::assembler::{self, ComponentNode};
use crate::hierarchy::locator;
use crate::hierarchy::masterfiles::{self, PageImage};
use crate::traits::ComponentStore;

/// Full hierarchy response: the assembled tree plus the requested
/// component's own master files
///
/// The root's fields flatten to the top level so clients read `children`
/// (and the rest of the component) directly off the response object.
#[derive(Debug, Serialize)]
pub struct ComponentHierarchy {
    #[serde(flatten)]
    pub root: ComponentNode,

    #[serde(rename = "masterFiles")]
    pub master_files: Vec<PageImage>,
}

/// Answers "give me the full hierarchy around component X"
///
/// Stateless beyond its collaborators; one instance serves any number of
/// concurrent requests, each working on its own copy of fetched rows.
#[derive(Clone)]
pub struct HierarchyService {
    store: Arc<dyn ComponentStore>,
    systems: ExternalSystems,
}

impl HierarchyService {
    pub fn new(store: Arc<dyn ComponentStore>, systems: ExternalSystems) -> Self {
        Self { store, systems }
    }

    /// Resolve the tree containing `component_id` and decorate the master
    /// files it directly owns
    ///
    /// The tree is rooted at the component's top-most ancestor; the master
    /// files belong to the requested component itself, not to the root and
    /// not to descendants.
    pub async fn component_hierarchy(
        &self,
        component_id: i64,
    ) -> ServerResult<ComponentHierarchy> {
        let root = locator::resolve_root(self.store.as_ref(), component_id).await?;
        let root_id = root.id;
        tracing::info!(
            component = component_id,
            root = root_id,
            "building component hierarchy"
        );

        let descendants = self.store.fetch_descendants(root_id).await?;
        let tree = assembler::assemble(root, descendants)?;

        let files = self.store.fetch_master_files(component_id).await?;
        let master_files = masterfiles::decorate(&self.systems, files);

        Ok(ComponentHierarchy {
            root: tree,
            master_files,
        })
    }
}
