use crate::render::tree;
use crate::select::presets;
use crate::select::walk::FileContents;
use chrono::Local;
use path_slash::PathBufExt;
use std::path::{Path, PathBuf};

/// Assembles the full Markdown document: header, table of contents,
/// optional folder-structure tree, and one fenced block per file.
pub fn build_document(
    files: &[FileContents],
    project_name: &str,
    base_dir: &Path,
    include_tree: bool,
) -> String {
    let mut doc = String::new();

    // Header
    let ts = Local::now().format("%Y-%m-%d %H:%M:%S");
    doc.push_str(&format!("# {project_name}\n\n"));
    doc.push_str(&format!("> Generated on {ts}\n"));
    doc.push_str(&format!("> Base directory: `{}`\n", base_dir.display()));
    doc.push_str(&format!("> File count: {}\n\n", files.len()));

    // Table of contents
    doc.push_str("## Table of Contents\n\n");
    if include_tree {
        doc.push_str("1. [Folder Structure](#folder-structure)\n");
        doc.push_str("2. [Files](#files)\n");
    } else {
        doc.push_str("1. [Files](#files)\n");
    }
    for file in files {
        let rel = file.rel_path.to_slash_lossy();
        doc.push_str(&format!("   - [`{rel}`](#{})\n", anchor(rel.as_ref())));
    }
    doc.push('\n');

    // Folder structure
    if include_tree {
        let rel_paths: Vec<PathBuf> = files.iter().map(|f| f.rel_path.clone()).collect();
        doc.push_str("---\n\n## Folder Structure\n\n");
        doc.push_str("```\n");
        doc.push_str(&format!("{project_name}/\n"));
        doc.push_str(&tree::render(&rel_paths));
        doc.push_str("```\n\n");
    }

    // Files
    doc.push_str("---\n\n## Files\n\n");
    for file in files {
        let rel = file.rel_path.to_slash_lossy();
        let language = presets::fence_language(&file.rel_path);
        let body = file.contents.trim_end();
        let fence = fence_for(body);
        doc.push_str(&format!("### `{rel}`\n\n"));
        doc.push_str(&format!("{fence}{language}\n{body}\n{fence}\n\n"));
    }

    doc
}

/// Anchor slug for a relative path: `/`, `\` and `.` are dropped, `_`
/// becomes `-`, everything is lowercased.
pub fn anchor(rel: &str) -> String {
    rel.chars()
        .filter_map(|c| match c {
            '/' | '\\' | '.' => None,
            '_' => Some('-'),
            c => Some(c.to_ascii_lowercase()),
        })
        .collect()
}

/// Fence long enough not to collide with backtick runs inside the body.
fn fence_for(body: &str) -> String {
    let mut longest = 0usize;
    let mut run = 0usize;
    for c in body.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_drops_separators_and_dots() {
        assert_eq!(anchor("src/main.py"), "srcmainpy");
        assert_eq!(anchor("a_b/C.D.e"), "a-bcde");
        assert_eq!(anchor("win\\path.rs"), "winpathrs");
    }

    #[test]
    fn fence_grows_past_embedded_backticks() {
        assert_eq!(fence_for("no ticks"), "```");
        assert_eq!(fence_for("inline `code`"), "```");
        assert_eq!(fence_for("````\nfour\n````"), "`````");
    }
}
