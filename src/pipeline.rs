use crate::config::Config;
use crate::output;
use crate::render::markdown;
use crate::select::excludes::{DEFAULT_EXCLUDES, ExcludeMatcher};
use crate::select::presets;
use crate::select::walk::{self, FileContents};
use anyhow::{Result, anyhow};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Pipeline for selecting files and assembling the Markdown document.
#[derive(Default)]
pub struct Pipeline {
    base: PathBuf,
    project_name: String,
    output_path: Option<PathBuf>,
    extensions: BTreeSet<String>,
    excludes: ExcludeMatcher,
    candidate_files: Vec<PathBuf>,
    file_data: Vec<FileContents>,
    document: Option<String>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonicalize the base directory and settle the project name.
    pub fn resolve_base(
        &mut self,
        config: &Config,
    ) -> Result<()> {
        let base = &config.directory;
        if !base.exists() {
            return Err(anyhow!("directory {:?} does not exist", base));
        }
        if !base.is_dir() {
            return Err(anyhow!("{:?} is not a directory", base));
        }
        self.base = dunce::canonicalize(base)?;
        self.project_name = match &config.name {
            Some(name) => name.clone(),
            None => self
                .base
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "project".to_string()),
        };
        Ok(())
    }

    /// Merge preset extensions with user-supplied extras.
    pub fn resolve_extensions(
        &mut self,
        config: &Config,
    ) -> Result<()> {
        let mut extensions = BTreeSet::new();
        for name in &config.types {
            let preset = presets::lookup(name)
                .ok_or_else(|| anyhow!("unknown project type {name:?}; see --list-types"))?;
            extensions.extend(preset.extensions.iter().map(|e| e.to_string()));
        }
        extensions.extend(config.extensions.iter().cloned());
        if extensions.is_empty() {
            return Err(anyhow!("no extensions selected; pass --type or --ext"));
        }
        debug!("selected extensions: {extensions:?}");
        self.extensions = extensions;
        Ok(())
    }

    /// Settle the output target. `None` means stdout mode.
    pub fn resolve_output(
        &mut self,
        config: &Config,
    ) {
        if config.stdout {
            self.output_path = None;
            return;
        }
        self.output_path = Some(match &config.output {
            Some(path) => path.clone(),
            None => output::default_output_path(&self.base, &self.project_name),
        });
    }

    /// Compile default + user exclude patterns.
    pub fn build_excludes(
        &mut self,
        config: &Config,
    ) {
        let mut patterns: Vec<String> = Vec::new();
        if !config.no_default_excludes {
            patterns.extend(DEFAULT_EXCLUDES.iter().map(|p| p.to_string()));
        }
        patterns.extend(config.excludes.iter().cloned());
        debug!("{} exclude patterns", patterns.len());
        self.excludes = ExcludeMatcher::new(&patterns);
    }

    /// Walk the base directory and collect matching files.
    pub fn collect_candidates(&mut self) -> Result<()> {
        let skip = self.absolute_output();
        self.candidate_files =
            walk::collect_files(&self.base, &self.extensions, &self.excludes, skip.as_deref())?;
        if self.candidate_files.is_empty() {
            return Err(anyhow!("no matching files found under {:?}", self.base));
        }
        for path in &self.candidate_files {
            debug!("selected {:?}", path.strip_prefix(&self.base).unwrap_or(path));
        }
        Ok(())
    }

    /// Read file data into memory.
    pub fn collect_file_data(
        &mut self,
        max_size: u64,
    ) {
        self.file_data = walk::collect_file_data(&self.candidate_files, &self.base, max_size);
    }

    /// Assemble the Markdown document.
    pub fn render(
        &mut self,
        include_tree: bool,
    ) {
        self.document = Some(markdown::build_document(
            &self.file_data,
            &self.project_name,
            &self.base,
            include_tree,
        ));
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    pub fn candidate_files(&self) -> &[PathBuf] {
        &self.candidate_files
    }

    pub fn file_count(&self) -> usize {
        self.file_data.len()
    }

    // Absolute form of the output path, so a previous export inside the
    // scanned tree is never collected into the next one.
    fn absolute_output(&self) -> Option<PathBuf> {
        let out = self.output_path.as_ref()?;
        if out.exists() {
            return dunce::canonicalize(out).ok();
        }
        if out.is_absolute() {
            return Some(out.clone());
        }
        std::env::current_dir().ok().map(|cwd| cwd.join(out))
    }
}
