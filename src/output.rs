use crate::constants::OUTPUT_FILE_SUFFIX;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default output path: `<sanitized project name>_code.md` inside the base
/// directory. Sanitization keeps alphanumerics, `-` and `_`.
pub fn default_output_path(
    base: &Path,
    project_name: &str,
) -> PathBuf {
    let safe: String = project_name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    base.join(format!("{safe}{OUTPUT_FILE_SUFFIX}"))
}

/// Writes the document and returns its size in bytes.
pub fn write_document(
    path: &Path,
    document: &str,
) -> Result<u64> {
    fs::write(path, document).with_context(|| format!("could not write {:?}", path))?;
    Ok(document.len() as u64)
}

/// Human-readable size with the MB/KB thresholds of the summary line.
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if bytes > MIB {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    } else if bytes > KIB {
        format!("{:.2} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} bytes")
    }
}
