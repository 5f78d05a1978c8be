//! Recursive template tree copying

use crate::error::ScaffoldError;
use std::io;
use std::path::Path;
use tokio::fs;
use walkdir::WalkDir;

/// Mirror `source` into `dest`, creating `dest` and any parents as needed.
///
/// Files are copied byte-for-byte and relative structure is preserved
/// exactly. Symlinks get no special handling; whatever the underlying read
/// returns is what lands in the copy. Returns the number of files written.
pub async fn copy_template_tree(source: &Path, dest: &Path) -> Result<usize, ScaffoldError> {
    fs::create_dir_all(dest).await?;

    let mut copied = 0;
    for entry in WalkDir::new(source).min_depth(1) {
        let entry = entry.map_err(io::Error::from)?;
        let rel = match entry.path().strip_prefix(source) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let target = dest.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).await?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).await?;
            }
            fs::copy(entry.path(), &target).await?;
            copied += 1;
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn build_fixture(root: &Path) {
        std::fs::create_dir_all(root.join("src/components")).unwrap();
        std::fs::write(root.join("package.json"), br#"{"name":"starter"}"#).unwrap();
        std::fs::write(root.join("src/index.ts"), b"export {};\n").unwrap();
        std::fs::write(
            root.join("src/components/App.tsx"),
            b"export const App = () => null;\n",
        )
        .unwrap();
    }

    fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
        let mut files = BTreeMap::new();
        for entry in WalkDir::new(root).min_depth(1) {
            let entry = entry.unwrap();
            if entry.file_type().is_file() {
                let rel = entry.path().strip_prefix(root).unwrap().to_path_buf();
                files.insert(rel, std::fs::read(entry.path()).unwrap());
            }
        }
        files
    }

    #[tokio::test]
    async fn mirrors_nested_structure_byte_for_byte() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("template");
        let dest = tmp.path().join("project");
        build_fixture(&source);

        let copied = copy_template_tree(&source, &dest).await.unwrap();

        assert_eq!(copied, 3);
        assert_eq!(snapshot(&source), snapshot(&dest));
    }

    #[tokio::test]
    async fn creates_missing_destination_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("template");
        let dest = tmp.path().join("deep/nested/project");
        build_fixture(&source);

        copy_template_tree(&source, &dest).await.unwrap();

        assert!(dest.join("src/components/App.tsx").is_file());
    }

    #[tokio::test]
    async fn two_clean_copies_are_identical() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("template");
        let first = tmp.path().join("first");
        let second = tmp.path().join("second");
        build_fixture(&source);

        copy_template_tree(&source, &first).await.unwrap();
        copy_template_tree(&source, &second).await.unwrap();

        assert_eq!(snapshot(&first), snapshot(&second));
    }

    #[tokio::test]
    async fn missing_source_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("nope");
        let dest = tmp.path().join("project");

        let result = copy_template_tree(&source, &dest).await;

        assert!(result.is_err());
    }
}
