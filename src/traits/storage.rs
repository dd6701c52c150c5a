//! Async storage trait definition
//!
//! The hierarchy core never queries a database itself; the surrounding
//! service implements this trait over whatever engine holds the rows, and
//! the core treats every fetch as a single authoritative read.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ServerResult;

/// Category reference for a component (collection, series, folder, ...)
#[derive(Debug, Clone, Serialize)]
pub struct ComponentType {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// One level of a finding aid, in flat storage form
///
/// `ancestry` is empty for a root, otherwise a `/`-delimited chain of
/// ancestor ids ordered from the top-most ancestor down to (but excluding)
/// this component. Children exist only on the assembled tree, never here.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: i64,

    /// Public identifier, stable across systems
    pub pid: String,

    pub title: String,
    pub label: String,

    #[serde(rename = "description")]
    pub content_desc: String,

    /// Display date string, free-form ("1912", "ca. 1870-1880")
    pub date: String,

    /// Hierarchy level tag ("collection", "series", "folder", "item")
    pub level: String,

    pub barcode: String,

    /// Identifier of this component in the external finding aid
    #[serde(rename = "eadID")]
    pub ead_id: String,

    pub ancestry: String,

    pub component_type: ComponentType,

    /// Count of master files directly owned by this component (descendants
    /// not included)
    pub master_files_count: u64,

    #[serde(rename = "dateDLIngest", skip_serializing_if = "Option::is_none")]
    pub date_dl_ingest: Option<DateTime<Utc>>,

    #[serde(rename = "dateDLUpdate", skip_serializing_if = "Option::is_none")]
    pub date_dl_update: Option<DateTime<Utc>>,
}

/// Bibliographic metadata reference carried by a published master file
#[derive(Debug, Clone, Serialize)]
pub struct MetadataRef {
    pub id: i64,
    pub pid: String,
}

/// One digitized page image, in flat storage form
///
/// The filename usually encodes a capture sequence (`<name>_<NNNN>.<ext>`)
/// but is not guaranteed well-formed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterFile {
    pub id: i64,
    pub pid: String,

    #[serde(rename = "componentID")]
    pub component_id: i64,

    /// Physical unit the page was digitized from
    #[serde(rename = "unitID")]
    pub unit_id: i64,

    pub filename: String,
    pub title: String,
    pub description: String,

    /// Present when the page belongs to a published item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataRef>,
}

/// Read-only lookup capabilities consumed by the hierarchy core
///
/// Implementations decide engine, caching and retry policy; the core never
/// retries and never writes.
#[async_trait]
pub trait ComponentStore: Send + Sync {
    /// Fetch a single component by id
    ///
    /// A missing row is `ServerError::ComponentNotFound` - a data-integrity
    /// condition, not a transient failure.
    async fn fetch_component(&self, id: i64) -> ServerResult<Component>;

    /// Fetch the complete flat descendant set of a root component
    ///
    /// Every component whose ancestry is exactly `"{root_id}"` or begins
    /// with `"{root_id}/"` (one exact match plus one prefix match against
    /// the ancestry column). Order is not significant; the assembler sorts.
    async fn fetch_descendants(&self, root_id: i64) -> ServerResult<Vec<Component>>;

    /// Fetch the master files directly owned by a component, filename order
    ///
    /// Owned means attached to the component itself; pages of descendant
    /// components are not included.
    async fn fetch_master_files(&self, component_id: i64) -> ServerResult<Vec<MasterFile>>;
}
