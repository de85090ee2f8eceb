use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use console::style;
use miette::{Report, Result};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::constants::input::SKIP_DIRS;
use crate::core::GraphDefinition;
use crate::input::{GraphFile, InputFormat};
use crate::progress::ProgressReporter;

/// A candidate graph file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredInput {
    pub path: PathBuf,
    /// Named directly rather than found by a directory walk or glob.
    /// Only explicit files are required to parse.
    pub explicit: bool,
}

/// Expands CLI paths into graph files and loads them
pub struct InputDiscovery {
    discovered: BTreeMap<PathBuf, bool>,
}

impl Default for InputDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl InputDiscovery {
    pub fn new() -> Self {
        Self {
            discovered: BTreeMap::new(),
        }
    }

    /// Resolve every path to graph files.
    ///
    /// Plain files are taken as-is, directories are walked for `.json` and
    /// `.toml` files, and arguments containing `*` are expanded as glob
    /// patterns. The result is sorted and free of duplicates; a file both
    /// named and found counts as explicit.
    pub fn discover_all(&mut self, paths: &[PathBuf]) -> Result<Vec<DiscoveredInput>> {
        for path in paths {
            let pattern = path.to_string_lossy();
            if pattern.contains('*') {
                self.expand_glob(&pattern)?;
                continue;
            }

            if !path.exists() {
                eprintln!(
                    "{} Path '{}' does not exist",
                    style("⚠").yellow(),
                    path.display()
                );
                continue;
            }

            if path.is_dir() {
                self.walk_directory(path);
            } else {
                self.insert(path.clone(), true);
            }
        }

        log::info!("discovered {} graph files", self.discovered.len());
        Ok(self
            .discovered
            .iter()
            .map(|(path, &explicit)| DiscoveredInput {
                path: path.clone(),
                explicit,
            })
            .collect())
    }

    fn insert(&mut self, path: PathBuf, explicit: bool) {
        *self.discovered.entry(path).or_insert(false) |= explicit;
    }

    fn expand_glob(&mut self, pattern: &str) -> Result<()> {
        let paths = glob::glob(pattern)
            .map_err(|e| crate::error::CycleSearchError::ConfigurationError {
                message: format!("Invalid glob pattern '{pattern}': {e}"),
            })?;

        for entry in paths.flatten() {
            if entry.is_file() && InputFormat::from_path(&entry).is_some() {
                self.insert(entry, false);
            }
        }

        Ok(())
    }

    fn walk_directory(&mut self, dir: &Path) {
        let files: Vec<PathBuf> = WalkDir::new(dir)
            .into_iter()
            .filter_entry(|e| {
                let name = e.file_name();
                !SKIP_DIRS.iter().any(|skip| name == *skip)
            })
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|path| InputFormat::from_path(path).is_some())
            .collect();

        for path in files {
            self.insert(path, false);
        }
    }
}

/// Parse every file in parallel, keeping the input order.
///
/// An explicit file that fails to load fails the whole call. Other files
/// that are not graphs (a `Cargo.toml` met while walking a project, say)
/// are skipped with a warning.
pub fn load_graphs(
    inputs: &[DiscoveredInput],
    progress: Option<&ProgressReporter>,
) -> Result<Vec<GraphDefinition>> {
    let loaded = inputs
        .par_iter()
        .map(|input| -> Result<Option<GraphDefinition>> {
            if let Some(p) = progress {
                p.loading_graph(&input.path);
            }

            match GraphFile::parse_file(&input.path) {
                Ok(graph) => Ok(Some(graph)),
                Err(e) if input.explicit => Err(Report::new(e).wrap_err(format!(
                    "Failed to load graph from '{}'",
                    input.path.display()
                ))),
                Err(e) => {
                    eprintln!(
                        "{} Skipping '{}': not a graph file ({e})",
                        style("⚠").yellow(),
                        input.path.display()
                    );
                    log::warn!("skipped {}: {e}", input.path.display());
                    Ok(None)
                }
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(loaded.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    const TWO_CYCLE: &str = r#"{ "matrix": [[false, true], [true, false]] }"#;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    fn paths(found: &[DiscoveredInput]) -> Vec<PathBuf> {
        found.iter().map(|input| input.path.clone()).collect()
    }

    fn explicit(path: PathBuf) -> DiscoveredInput {
        DiscoveredInput {
            path,
            explicit: true,
        }
    }

    #[test]
    fn test_directory_walk_filters_extensions() {
        let temp = TempDir::new().unwrap();
        let a = write(temp.path(), "a.json", "{}");
        let b = write(temp.path(), "nested/b.toml", "");
        write(temp.path(), "notes.txt", "");
        write(temp.path(), "target/skip.json", "{}");

        let found = InputDiscovery::new()
            .discover_all(&[temp.path().to_path_buf()])
            .unwrap();

        assert_eq!(paths(&found), vec![a, b]);
        assert!(found.iter().all(|input| !input.explicit));
    }

    #[test]
    fn test_glob_and_duplicates() {
        let temp = TempDir::new().unwrap();
        let a = write(temp.path(), "a.json", "{}");
        let b = write(temp.path(), "b.json", "{}");

        let pattern = temp.path().join("*.json");
        let found = InputDiscovery::new()
            .discover_all(&[pattern, a.clone()])
            .unwrap();

        assert_eq!(
            found,
            vec![
                explicit(a),
                DiscoveredInput {
                    path: b,
                    explicit: false
                },
            ]
        );
    }

    #[test]
    fn test_missing_path_is_skipped() {
        let found = InputDiscovery::new()
            .discover_all(&[PathBuf::from("/definitely/not/here.json")])
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_load_graphs_keeps_order() {
        let temp = TempDir::new().unwrap();
        let first = write(temp.path(), "first.json", TWO_CYCLE);
        let second = write(temp.path(), "second.toml", "node_count = 3\nedges = []\n");

        let graphs = load_graphs(&[explicit(first), explicit(second)], None).unwrap();
        let names: Vec<&str> = graphs.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(graphs[1].node_count(), 3);
    }

    #[test]
    fn test_load_graphs_reports_bad_file() {
        let temp = TempDir::new().unwrap();
        let bad = write(temp.path(), "bad.json", "{ not json");

        assert!(load_graphs(&[explicit(bad)], None).is_err());
    }

    #[test]
    fn test_walk_skips_foreign_manifests() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "g.json", TWO_CYCLE);
        write(temp.path(), "Cargo.toml", "[package]\nname = \"x\"\n");
        write(temp.path(), "web/package.json", r#"{ "name": "web" }"#);

        let found = InputDiscovery::new()
            .discover_all(&[temp.path().to_path_buf()])
            .unwrap();
        assert_eq!(found.len(), 3);

        let graphs = load_graphs(&found, None).unwrap();
        assert_eq!(graphs.len(), 1);
        assert_eq!(graphs[0].name, "g");
        assert!(graphs[0].adj_list.has_edge(1, 0));
    }

    #[test]
    fn test_glob_skips_foreign_files() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "g.toml", "node_count = 1\nedges = [[0, 0]]\n");
        write(temp.path(), "Cargo.toml", "[package]\nname = \"x\"\n");

        let found = InputDiscovery::new()
            .discover_all(&[temp.path().join("*.toml")])
            .unwrap();
        let graphs = load_graphs(&found, None).unwrap();

        let names: Vec<&str> = graphs.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["g"]);
    }

    #[test]
    fn test_named_foreign_file_still_fails() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "g.json", TWO_CYCLE);
        let manifest = write(temp.path(), "Cargo.toml", "[package]\nname = \"x\"\n");

        let found = InputDiscovery::new()
            .discover_all(&[temp.path().to_path_buf(), manifest.clone()])
            .unwrap();
        assert!(found.contains(&explicit(manifest)));

        let err = load_graphs(&found, None).unwrap_err();
        assert!(err.to_string().contains("Cargo.toml"));
    }
}
