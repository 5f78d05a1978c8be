//! Template catalog, source resolution, and tree copying
//!
//! This module provides:
//! - The static template catalog (`TemplateId`, `TemplateDescriptor`)
//! - Source directory resolution (packaged location, then cwd fallback)
//! - Recursive template tree copying

pub mod catalog;
pub mod copier;

pub use catalog::{descriptor, resolve_template_dir, TemplateDescriptor, TemplateId, CATALOG};
pub use copier::copy_template_tree;
