//! Trait definitions for storage collaborators

pub mod storage;

// Re-export all types
pub use storage::{Component, ComponentStore, ComponentType, MasterFile, MetadataRef};
