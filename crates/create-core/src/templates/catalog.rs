//! Static template catalog and source-directory resolution

use crate::error::ScaffoldError;
use std::fmt;
use std::path::PathBuf;

/// Identifier for a packaged template.
///
/// A closed set: a selected id needs no further validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    Web,
    Mobile,
    Server,
}

impl TemplateId {
    /// Directory name under `templates/`
    pub fn dir_name(&self) -> &'static str {
        match self {
            TemplateId::Web => "web",
            TemplateId::Mobile => "mobile",
            TemplateId::Server => "server",
        }
    }

    /// Parse a user-supplied template id (case-insensitive)
    pub fn parse(s: &str) -> Option<TemplateId> {
        match s.to_ascii_lowercase().as_str() {
            "web" => Some(TemplateId::Web),
            "mobile" => Some(TemplateId::Mobile),
            "server" => Some(TemplateId::Server),
            _ => None,
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// One entry in the fixed template catalog
#[derive(Debug, Clone, Copy)]
pub struct TemplateDescriptor {
    pub id: TemplateId,
    pub title: &'static str,
    pub description: &'static str,
}

/// Process-wide constant catalog; ordering matches the selection prompt.
pub const CATALOG: [TemplateDescriptor; 3] = [
    TemplateDescriptor {
        id: TemplateId::Web,
        title: "Web (Float-V Core / SSR)",
        description: "High-performance web application with native SSR and file-based routing.",
    },
    TemplateDescriptor {
        id: TemplateId::Mobile,
        title: "Mobile (Expo + @float-v/lite)",
        description: "Cross-platform mobile app for iOS and Android.",
    },
    TemplateDescriptor {
        id: TemplateId::Server,
        title: "Server (Headless + @float-v/core)",
        description: "API-only server for real-time and headless workloads.",
    },
];

/// Look up the catalog entry for an id
pub fn descriptor(id: TemplateId) -> &'static TemplateDescriptor {
    match id {
        TemplateId::Web => &CATALOG[0],
        TemplateId::Mobile => &CATALOG[1],
        TemplateId::Server => &CATALOG[2],
    }
}

/// Locate the packaged source tree for a template.
///
/// The published layout ships `templates/` next to the binary's parent
/// directory, so that is checked first; development runs fall back to
/// `templates/` under the current working directory.
pub fn resolve_template_dir(id: TemplateId) -> Result<PathBuf, ScaffoldError> {
    let mut searched = Vec::new();

    if let Ok(exe) = std::env::current_exe() {
        if let Some(bin_dir) = exe.parent() {
            let packaged = bin_dir.join("..").join("templates").join(id.dir_name());
            if packaged.is_dir() {
                return Ok(packaged);
            }
            searched.push(packaged);
        }
    }

    let cwd = std::env::current_dir()?;
    let local = cwd.join("templates").join(id.dir_name());
    if local.is_dir() {
        return Ok(local);
    }
    searched.push(local);

    Err(ScaffoldError::TemplateNotFound {
        template: id.dir_name().to_string(),
        searched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_covers_each_id_once() {
        let ids: HashSet<_> = CATALOG.iter().map(|d| d.id).collect();
        assert_eq!(CATALOG.len(), 3);
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn descriptor_lookup_matches_id() {
        for entry in &CATALOG {
            assert_eq!(descriptor(entry.id).id, entry.id);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(TemplateId::parse("web"), Some(TemplateId::Web));
        assert_eq!(TemplateId::parse("Mobile"), Some(TemplateId::Mobile));
        assert_eq!(TemplateId::parse("SERVER"), Some(TemplateId::Server));
        assert_eq!(TemplateId::parse("desktop"), None);
        assert_eq!(TemplateId::parse(""), None);
    }

    #[test]
    fn display_matches_dir_name() {
        assert_eq!(TemplateId::Web.to_string(), "web");
        assert_eq!(TemplateId::Mobile.to_string(), "mobile");
        assert_eq!(TemplateId::Server.to_string(), "server");
    }
}
