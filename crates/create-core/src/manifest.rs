//! package.json patching after template copy

use crate::error::ScaffoldError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;

/// Initial version stamped into every generated project
pub const INITIAL_VERSION: &str = "0.1.0";

/// Partial view of a package.json.
///
/// Only the fields the patch touches are typed; everything else rides along
/// untouched in `extra` so a round-trip never loses data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Map<String, Value>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Rewrite the copied project's manifest in place.
///
/// Sets `name` to the destination's base name, resets `version` to
/// [`INITIAL_VERSION`], and rewrites any recognized framework packages in
/// `dependencies` to their published range. Serialization is pretty-printed
/// with two-space indentation, the convention the templates use. A missing
/// package.json is a no-op, not an error. Returns whether a patch was
/// written.
pub async fn patch_manifest(
    dest_dir: &Path,
    pins: &[(&str, &str)],
) -> Result<bool, ScaffoldError> {
    let path = dest_dir.join("package.json");
    if !path.exists() {
        return Ok(false);
    }

    let raw = fs::read_to_string(&path).await?;
    let mut manifest: PackageManifest = serde_json::from_str(&raw)?;

    let base_name = dest_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "app".to_string());
    manifest.name = Some(base_name);
    manifest.version = Some(INITIAL_VERSION.to_string());

    if let Some(deps) = manifest.dependencies.as_mut() {
        for (package, range) in pins {
            if let Some(spec) = deps.get_mut(*package) {
                *spec = Value::String((*range).to_string());
            }
        }
    }

    let out = serde_json::to_string_pretty(&manifest)?;
    fs::write(&path, out).await?;

    Ok(true)
}
