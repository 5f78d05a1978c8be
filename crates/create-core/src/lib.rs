//! Create Core - shared library for Float-V project scaffolding
//!
//! This library provides the core functionality for generating new projects
//! from the packaged template catalog. It is designed to be used by branded
//! CLI binaries (e.g. `create-app`) that share the same underlying
//! scaffolding logic but carry different product configurations.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure functions and filesystem steps:
//!   name validation, destination resolution, template tree copying,
//!   manifest patching
//! - **Layer 2: Product Configuration** - The `ProductConfig` trait that
//!   binaries implement to brand the flow
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use create_core::{scaffold, templates, manifest};
//!
//! scaffold::validate_project_name("demo-app")?;
//! let dest = scaffold::resolve_destination("demo-app", &std::env::current_dir()?);
//! let source = templates::resolve_template_dir(templates::TemplateId::Server)?;
//! templates::copy_template_tree(&source, &dest).await?;
//! manifest::patch_manifest(&dest, &[("@float-v/core", "^1.0.0")]).await?;
//! ```

pub mod error;
pub mod manifest;
pub mod product;
pub mod runtime;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use manifest::{patch_manifest, PackageManifest, INITIAL_VERSION};
pub use product::ProductConfig;
pub use scaffold::{resolve_destination, validate_project_name, ScaffoldRequest};
pub use templates::{copy_template_tree, TemplateDescriptor, TemplateId, CATALOG};

#[cfg(feature = "tui")]
pub use tui::run;
