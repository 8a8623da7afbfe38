//! Recursive TypeScript source discovery.

use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory walker that collects `.ts` files, respecting .gitignore rules.
pub struct Walker {
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given root directory.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Walk the directory tree and return all discovered TypeScript files.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkBuilder::new(&self.root)
            .hidden(true) // Skip hidden files
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .ignore(true)
            .parents(true)
            .build();

        for result in walker {
            match result {
                Ok(entry) => {
                    let is_file = entry.file_type().map(|ft| ft.is_file()).unwrap_or(false);
                    if is_file && entry.path().extension().map_or(false, |e| e == "ts") {
                        files.push(entry.path().to_path_buf());
                    }
                }
                Err(e) => {
                    debug!(error = %e, "Walk error");
                    // Don't fail the entire walk for individual errors
                }
            }
        }

        // Sort by path for deterministic ordering
        files.sort();

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    #[test]
    fn test_walker_empty_directory() {
        let temp_dir = tempdir().unwrap();
        let walker = Walker::new(temp_dir.path());

        let files = walker.walk().unwrap();
        assert_eq!(files.len(), 0);
    }

    #[test]
    fn test_walker_collects_only_typescript() {
        let temp_dir = tempdir().unwrap();

        File::create(temp_dir.path().join("a.ts")).unwrap();
        File::create(temp_dir.path().join("b.js")).unwrap();
        File::create(temp_dir.path().join("notes.md")).unwrap();

        let walker = Walker::new(temp_dir.path());
        let files = walker.walk().unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.ts"));
    }

    #[test]
    fn test_walker_handles_nested_directories() {
        let temp_dir = tempdir().unwrap();

        fs::create_dir_all(temp_dir.path().join("src/deep")).unwrap();
        File::create(temp_dir.path().join("top.ts")).unwrap();
        File::create(temp_dir.path().join("src/mid.ts")).unwrap();
        File::create(temp_dir.path().join("src/deep/leaf.ts")).unwrap();

        let walker = Walker::new(temp_dir.path());
        let files = walker.walk().unwrap();

        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_walker_respects_gitignore() {
        let temp_dir = tempdir().unwrap();

        // Initialize git repo so .gitignore is recognized
        fs::create_dir(temp_dir.path().join(".git")).unwrap();
        fs::write(temp_dir.path().join(".gitignore"), "dist/\n").unwrap();

        fs::create_dir(temp_dir.path().join("dist")).unwrap();
        File::create(temp_dir.path().join("dist/generated.ts")).unwrap();
        File::create(temp_dir.path().join("kept.ts")).unwrap();

        let walker = Walker::new(temp_dir.path());
        let files = walker.walk().unwrap();

        let names: Vec<&str> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert!(names.contains(&"kept.ts"), "found: {:?}", names);
        assert!(!names.contains(&"generated.ts"), "found: {:?}", names);
    }

    #[test]
    fn test_walker_results_are_sorted() {
        let temp_dir = tempdir().unwrap();

        File::create(temp_dir.path().join("c.ts")).unwrap();
        File::create(temp_dir.path().join("a.ts")).unwrap();
        File::create(temp_dir.path().join("b.ts")).unwrap();

        let walker = Walker::new(temp_dir.path());
        let files = walker.walk().unwrap();

        let names: Vec<&str> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.ts", "b.ts", "c.ts"]);
    }
}
