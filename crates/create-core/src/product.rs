//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface a branded binary (e.g. `create-app`)
//! implements to configure the scaffolding flow for its product.

use std::path::Path;

/// Configuration trait for branded create-* CLIs
///
/// Each product implements this trait to define:
/// - Product identity (name, display name, tagline)
/// - The default project-name suggestion
/// - Which framework packages get pinned in the generated manifest
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name shown in the intro banner
    fn display_name(&self) -> &'static str;

    /// One-line tagline shown under the banner
    fn tagline(&self) -> &'static str;

    /// Default suggestion for the project-name prompt
    fn default_project_name(&self) -> &'static str;

    /// Dependency keys rewritten to a published range after the copy,
    /// as `(package, version range)` pairs
    fn pinned_dependencies(&self) -> &'static [(&'static str, &'static str)];

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path) -> Vec<String>;

    /// Closing line printed after the next steps
    fn outro(&self) -> &'static str {
        "Happy coding!"
    }
}
