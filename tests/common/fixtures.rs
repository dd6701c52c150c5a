//! Test fixtures and service setup utilities

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use dtrack_server::{
    Component, ComponentStore, ComponentType, ExternalSystems, HierarchyService, MasterFile,
    MetadataRef, ServerError, ServerResult,
};

/// In-memory ComponentStore backed by plain maps
///
/// Implements the same lookup contract a database-backed store would: exact
/// id fetch, exact-or-prefix ancestry match for descendants, filename-ordered
/// master files.
#[derive(Default)]
pub struct MemoryStore {
    components: HashMap<i64, Component>,
    master_files: HashMap<i64, Vec<MasterFile>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_components(components: Vec<Component>) -> Self {
        let mut store = Self::new();
        for component in components {
            store.add_component(component);
        }
        store
    }

    pub fn add_component(&mut self, component: Component) {
        self.components.insert(component.id, component);
    }

    pub fn add_master_file(&mut self, file: MasterFile) {
        self.master_files
            .entry(file.component_id)
            .or_default()
            .push(file);
    }
}

#[async_trait]
impl ComponentStore for MemoryStore {
    async fn fetch_component(&self, id: i64) -> ServerResult<Component> {
        self.components
            .get(&id)
            .cloned()
            .ok_or(ServerError::ComponentNotFound(id))
    }

    async fn fetch_descendants(&self, root_id: i64) -> ServerResult<Vec<Component>> {
        let exact = root_id.to_string();
        let prefix = format!("{root_id}/");
        Ok(self
            .components
            .values()
            .filter(|c| c.ancestry == exact || c.ancestry.starts_with(&prefix))
            .cloned()
            .collect())
    }

    async fn fetch_master_files(&self, component_id: i64) -> ServerResult<Vec<MasterFile>> {
        let mut files = self
            .master_files
            .get(&component_id)
            .cloned()
            .unwrap_or_default();
        files.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(files)
    }
}

/// Component record with sensible defaults
pub fn component(id: i64, ancestry: &str) -> Component {
    Component {
        id,
        pid: format!("c-{id}"),
        title: format!("Component {id}"),
        label: String::new(),
        content_desc: String::new(),
        date: String::new(),
        level: "series".to_string(),
        barcode: String::new(),
        ead_id: String::new(),
        ancestry: ancestry.to_string(),
        component_type: ComponentType {
            id: 1,
            name: "series".to_string(),
            description: String::new(),
        },
        master_files_count: 0,
        date_dl_ingest: None,
        date_dl_update: None,
    }
}

/// Master file record; `metadata_pid` controls published-item linking
pub fn master_file(
    id: i64,
    component_id: i64,
    filename: &str,
    metadata_pid: Option<&str>,
) -> MasterFile {
    MasterFile {
        id,
        pid: format!("mf-{id}"),
        component_id,
        unit_id: 40,
        filename: filename.to_string(),
        title: format!("Page {id}"),
        description: String::new(),
        metadata: metadata_pid.map(|pid| MetadataRef {
            id: 9,
            pid: pid.to_string(),
        }),
    }
}

/// Service wired to the given store with deterministic external system URLs
pub fn test_service(store: MemoryStore) -> HierarchyService {
    HierarchyService::new(Arc::new(store), test_systems())
}

/// Fixed endpoints so URL assertions stay stable
pub fn test_systems() -> ExternalSystems {
    ExternalSystems {
        iiif_url: "https://iiif.test/iiif".to_string(),
        viewer_url: "https://viewer.test".to_string(),
    }
}
