use crate::cli::Cli;
use crate::select::presets;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub directory: PathBuf,
    pub types: Vec<String>,
    pub extensions: Vec<String>,
    pub excludes: Vec<String>,
    pub output: Option<PathBuf>,
    pub name: Option<String>,
    pub no_tree: bool,
    pub list_types: bool,
    pub no_default_excludes: bool,
    pub stdout: bool,
    pub max_size: u64,
    pub verbose: bool,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Self {
        Self::from_args(Cli::parse())
    }

    /// Normalize and validate parsed arguments. Usage errors (missing or
    /// unknown type selection) exit through clap with its usual code 2.
    pub fn from_args(cli: Cli) -> Self {
        if !cli.list_types && cli.types.is_none() && cli.extensions.is_empty() {
            Cli::command()
                .error(
                    ErrorKind::MissingRequiredArgument,
                    "at least one of --type or --ext is required; \
                     use --list-types to see available types",
                )
                .exit();
        }

        let types = split_types(cli.types.as_deref().unwrap_or_default());
        for name in &types {
            if presets::lookup(name).is_none() {
                Cli::command()
                    .error(
                        ErrorKind::ValueValidation,
                        format!(
                            "unknown project type '{name}'; use --list-types to see available types"
                        ),
                    )
                    .exit();
            }
        }

        let extensions = cli.extensions.iter().map(|e| normalize_extension(e)).collect();

        Config {
            directory: cli.directory,
            types,
            extensions,
            excludes: cli.excludes,
            output: cli.output,
            name: cli.name,
            no_tree: cli.no_tree,
            list_types: cli.list_types,
            no_default_excludes: cli.no_default_excludes,
            stdout: cli.stdout,
            max_size: cli.max_size,
            verbose: cli.verbose,
        }
    }
}

/// Split a comma-separated type list, trimmed and lowercased.
pub fn split_types(types: &str) -> Vec<String> {
    types
        .split(',')
        .map(|t| t.trim().to_ascii_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Extensions are stored dotted and lowercase; a missing leading dot is added.
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_ascii_lowercase();
    if ext.starts_with('.') { ext } else { format!(".{ext}") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_types_trims_and_lowercases() {
        assert_eq!(split_types("Python, VUE ,config"), vec!["python", "vue", "config"]);
        assert_eq!(split_types(""), Vec::<String>::new());
        assert_eq!(split_types("python,,go"), vec!["python", "go"]);
    }

    #[test]
    fn normalize_extension_adds_dot_and_lowercases() {
        assert_eq!(normalize_extension("graphql"), ".graphql");
        assert_eq!(normalize_extension(".ENV"), ".env");
        assert_eq!(normalize_extension(" py "), ".py");
    }
}
