use crate::constants::BINARY_SAMPLE_SIZE;
use crate::select::excludes::ExcludeMatcher;
use anyhow::{Result, anyhow};
use ignore::WalkBuilder;
use path_slash::PathExt;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Contents of a collected file with its path metadata
#[derive(Debug, Clone)]
pub struct FileContents {
    pub rel_path: PathBuf,
    pub path: PathBuf,
    pub contents: String,
}

/// Collects files under `base` whose extension is in the merged set,
/// pruning excluded paths. Results are sorted by relative path,
/// case-insensitive, so output is deterministic.
pub fn collect_files(
    base: &Path,
    extensions: &BTreeSet<String>,
    excludes: &ExcludeMatcher,
    skip: Option<&Path>,
) -> Result<Vec<PathBuf>> {
    let root = base.to_path_buf();
    let matcher = excludes.clone();
    let walker = WalkBuilder::new(base)
        .follow_links(false)
        // Selection is governed solely by the exclude rules and the
        // extension set; gitignore/hidden filtering stays off.
        .standard_filters(false)
        .filter_entry(move |entry| match entry.path().strip_prefix(&root) {
            Ok(rel) => !matcher.is_match(rel),
            Err(_) => true,
        })
        .build();

    let mut results = Vec::new();
    for entry_result in walker {
        match entry_result {
            Ok(entry) => {
                if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
                    continue;
                }
                let path = entry.path();
                if skip.is_some_and(|out| path == out) {
                    continue;
                }
                if !matches_extension(path, extensions) {
                    continue;
                }
                results.push(path.to_path_buf());
            }
            Err(e) => {
                warn!("could not process entry under {:?}: {e}", base);
            }
        }
    }

    results.sort_by_key(|p| {
        p.strip_prefix(base)
            .unwrap_or(p)
            .to_slash_lossy()
            .to_ascii_lowercase()
    });
    Ok(results)
}

fn matches_extension(
    path: &Path,
    extensions: &BTreeSet<String>,
) -> bool {
    match path.extension() {
        Some(ext) => {
            let dotted = format!(".{}", ext.to_string_lossy().to_ascii_lowercase());
            extensions.contains(&dotted)
        }
        None => false,
    }
}

/// Reads the contents of each file path into `FileContents`, enforcing a
/// maximum size. Unreadable files are skipped with a warning.
pub fn collect_file_data(
    file_paths: &[PathBuf],
    base: &Path,
    max_size: u64,
) -> Vec<FileContents> {
    let mut results = Vec::new();
    for path in file_paths {
        match read_file(path, base, max_size) {
            Ok(fc) => results.push(fc),
            Err(e) => warn!("{e}"),
        }
    }
    results
}

pub fn read_file(
    path: &Path,
    base: &Path,
    max_size: u64,
) -> Result<FileContents> {
    // Enforce the maximum file size
    let metadata = fs::metadata(path)?;
    if metadata.len() > max_size {
        return Err(anyhow!("{:?} exceeds {} bytes, skipping", path, max_size));
    }
    let content_bytes = fs::read(path)?;
    // Binary detection: invalid UTF-8 in a leading sample means binary
    let sample_size = content_bytes.len().min(BINARY_SAMPLE_SIZE);
    if sample_size > 0 && std::str::from_utf8(&content_bytes[..sample_size]).is_err() {
        return Err(anyhow!("{:?} appears to be a binary file, skipping", path));
    }
    // Convert to UTF-8, recovering lossily from stray invalid sequences
    let contents = String::from_utf8_lossy(&content_bytes).into_owned();
    Ok(FileContents {
        rel_path: path.strip_prefix(base).unwrap_or(path).to_path_buf(),
        path: path.to_path_buf(),
        contents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn ext_set(exts: &[&str]) -> BTreeSet<String> {
        exts.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn collects_only_matching_extensions_sorted() -> Result<()> {
        let dir = tempfile::tempdir()?;
        fs::create_dir(dir.path().join("src"))?;
        fs::write(dir.path().join("src/b.py"), "pass\n")?;
        fs::write(dir.path().join("src/A.py"), "pass\n")?;
        fs::write(dir.path().join("readme.md"), "# hi\n")?;

        let files = collect_files(
            dir.path(),
            &ext_set(&[".py"]),
            &ExcludeMatcher::default(),
            None,
        )?;
        let rels: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_slash_lossy().to_string())
            .collect();
        assert_eq!(rels, vec!["src/A.py", "src/b.py"]);
        Ok(())
    }

    #[test]
    fn excluded_directories_are_pruned() -> Result<()> {
        let dir = tempfile::tempdir()?;
        fs::create_dir(dir.path().join("node_modules"))?;
        fs::write(dir.path().join("node_modules/pkg.js"), "x\n")?;
        fs::write(dir.path().join("app.js"), "x\n")?;

        let patterns = vec!["node_modules".to_string()];
        let files = collect_files(
            dir.path(),
            &ext_set(&[".js"]),
            &ExcludeMatcher::new(&patterns),
            None,
        )?;
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("app.js"));
        Ok(())
    }

    #[test]
    fn skip_path_is_never_collected() -> Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("kept.md"), "# kept\n")?;
        fs::write(dir.path().join("proj_code.md"), "# old export\n")?;

        let skip = dir.path().join("proj_code.md");
        let files = collect_files(
            dir.path(),
            &ext_set(&[".md"]),
            &ExcludeMatcher::default(),
            Some(&skip),
        )?;
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("kept.md"));
        Ok(())
    }

    #[test]
    fn read_file_skips_binary_and_too_large() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let bin = dir.path().join("blob.dat");
        fs::write(&bin, [0u8, 255, 0, 128])?;
        let err = read_file(&bin, dir.path(), 1024).unwrap_err();
        assert!(format!("{err}").contains("binary"), "{err}");

        let huge = dir.path().join("huge.txt");
        fs::write(&huge, "x".repeat(2048))?;
        let err2 = read_file(&huge, dir.path(), 1000).unwrap_err();
        assert!(format!("{err2}").contains("exceeds 1000"), "{err2}");
        Ok(())
    }

    #[test]
    fn utf8_non_ascii_is_not_binary() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let fp = dir.path().join("unicode.txt");
        let s = "é 中文 ";
        fs::write(&fp, s)?;
        let fc = read_file(&fp, dir.path(), u64::MAX)?;
        assert_eq!(fc.contents, s);
        assert_eq!(fc.rel_path, Path::new("unicode.txt"));
        Ok(())
    }
}
