//! Component hierarchy reconstruction
//!
//! Storage keeps one row per component with its ancestor chain encoded in a
//! single string column. This module turns that flat form back into the
//! nested finding-aid tree and computes the display decorations for a
//! component's own master files.

pub mod ancestry;
pub mod assembler;
pub mod locator;
pub mod masterfiles;
pub mod service;

// Re-export all types
pub use assembler::ComponentNode;
pub use masterfiles::PageImage;
pub use service::{ComponentHierarchy, HierarchyService};
