use globset::{Glob, GlobSet, GlobSetBuilder};
use path_slash::PathExt;
use std::path::Path;
use tracing::warn;

/// Built-in exclude patterns: VCS metadata, dependency/build/cache
/// directories, IDE droppings, logs and temp files.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    // Dependencies
    "node_modules",
    "vendor",
    "packages",
    ".pub-cache",
    // Python
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    ".ruff_cache",
    "venv",
    ".venv",
    "env",
    ".env",
    "*.egg-info",
    // Build output
    "dist",
    "build",
    "out",
    "target",
    "bin",
    "obj",
    // IDE/editor
    ".idea",
    ".vscode",
    ".vs",
    "*.swp",
    "*.swo",
    // Version control
    ".git",
    ".svn",
    ".hg",
    // OS
    ".DS_Store",
    "Thumbs.db",
    // Logs & temp files
    "*.log",
    "logs",
    "tmp",
    "temp",
    ".tmp",
    // Coverage & test harnesses
    "coverage",
    ".coverage",
    "htmlcov",
    ".tox",
    ".nox",
];

/// Compiled exclude patterns. A `*suffix` pattern matches against entry
/// names anywhere in the path; every other pattern excludes a path when it
/// equals a component or occurs as a fragment of the relative path.
#[derive(Debug, Clone)]
pub struct ExcludeMatcher {
    name_globs: GlobSet,
    fragments: Vec<String>,
}

impl Default for ExcludeMatcher {
    fn default() -> Self {
        Self {
            name_globs: GlobSet::empty(),
            fragments: Vec::new(),
        }
    }
}

impl ExcludeMatcher {
    /// Compile patterns; invalid glob patterns are skipped with a warning.
    pub fn new(patterns: &[String]) -> Self {
        let mut builder = GlobSetBuilder::new();
        let mut fragments = Vec::new();
        for raw in patterns {
            let pattern = raw.trim().trim_end_matches('/');
            if pattern.is_empty() {
                continue;
            }
            if pattern.contains(['*', '?', '[']) {
                match Glob::new(pattern) {
                    Ok(glob) => {
                        builder.add(glob);
                    }
                    Err(e) => warn!("invalid exclude pattern {pattern}: {e}"),
                }
            } else {
                fragments.push(pattern.to_string());
            }
        }
        let name_globs = match builder.build() {
            Ok(set) => set,
            Err(e) => {
                warn!("could not compile exclude patterns: {e}");
                GlobSet::empty()
            }
        };
        Self { name_globs, fragments }
    }

    /// True when `rel` (relative to the scan root) should be skipped.
    /// A glob match on any component prunes the whole subtree.
    pub fn is_match(
        &self,
        rel: &Path,
    ) -> bool {
        for comp in rel.components() {
            let name = comp.as_os_str().to_string_lossy();
            if self.name_globs.is_match(name.as_ref()) {
                return true;
            }
            if self.fragments.iter().any(|frag| *frag == name) {
                return true;
            }
        }
        let slash = rel.to_slash_lossy();
        self.fragments.iter().any(|frag| slash.contains(frag.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn matcher(patterns: &[&str]) -> ExcludeMatcher {
        let owned: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
        ExcludeMatcher::new(&owned)
    }

    #[test]
    fn wildcard_matches_name_suffix() {
        let m = matcher(&["*.log"]);
        assert!(m.is_match(Path::new("data.log")));
        assert!(m.is_match(Path::new("sub/deep/run.log")));
        assert!(!m.is_match(Path::new("catalog.txt")));
    }

    #[test]
    fn component_match_prunes_subtree() {
        let m = matcher(&["node_modules"]);
        assert!(m.is_match(Path::new("node_modules")));
        assert!(m.is_match(Path::new("node_modules/left-pad/index.js")));
        assert!(!m.is_match(Path::new("src/modules.js")));
    }

    #[test]
    fn fragment_matches_relative_path_substring() {
        let m = matcher(&["src/generated"]);
        assert!(m.is_match(Path::new("src/generated/schema.py")));
        assert!(!m.is_match(Path::new("src/handwritten/schema.py")));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let m = matcher(&["fixtures/"]);
        assert!(m.is_match(Path::new("fixtures/a.py")));
        assert!(m.is_match(Path::new("fixtures")));
    }

    #[test]
    fn invalid_glob_is_skipped_but_rest_apply() {
        let m = matcher(&["*[", "*.swp"]);
        assert!(m.is_match(Path::new("junk.swp")));
        assert!(!m.is_match(Path::new("keep.py")));
    }

    #[test]
    fn defaults_cover_common_noise() {
        let owned: Vec<String> = DEFAULT_EXCLUDES.iter().map(|p| p.to_string()).collect();
        let m = ExcludeMatcher::new(&owned);
        assert!(m.is_match(Path::new(".git/config")));
        assert!(m.is_match(Path::new("pkg.egg-info/PKG-INFO")));
        assert!(m.is_match(Path::new("sub/__pycache__/mod.cpython-312.pyc")));
        assert!(m.is_match(Path::new("debug.log")));
        assert!(!m.is_match(Path::new("src/main.py")));
    }
}
