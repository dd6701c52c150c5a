//! dtrack-server library exports
//!
//! Component hierarchy core for the digitization tracking backend: rebuilds
//! finding-aid trees from flat, ancestry-encoded rows and decorates each
//! component's directly-owned master files for display.

pub mod config;
pub mod error;
pub mod hierarchy;
pub mod traits;

// Re-exports
pub use config::ExternalSystems;
pub use error::{ServerError, ServerResult, StorageError};
pub use hierarchy::{ComponentHierarchy, ComponentNode, HierarchyService, PageImage};
pub use traits::{Component, ComponentStore, ComponentType, MasterFile, MetadataRef};
