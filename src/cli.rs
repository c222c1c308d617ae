use crate::constants::DEFAULT_MAX_FILE_SIZE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "code2md")]
#[command(
    about = "Flatten project source files into a single Markdown document with a \
             folder tree and syntax-highlighted code blocks."
)]
pub struct Cli {
    /// Project directory to scan, defaults to the current directory.
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Project type(s), comma-separated (e.g. python,vue,config).
    #[arg(short = 't', long = "type", value_name = "TYPES")]
    pub types: Option<String>,

    /// Additional file extensions (e.g. .env .graphql).
    #[arg(short = 'e', long = "ext", value_name = "EXT", num_args(1..))]
    pub extensions: Vec<String>,

    /// Additional exclude patterns (names, path fragments, or *suffix globs).
    #[arg(short = 'x', long = "exclude", value_name = "PATTERN", num_args(1..))]
    pub excludes: Vec<String>,

    /// Output file, defaults to <project-name>_code.md inside the project directory.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Project name for the document header, defaults to the directory name.
    #[arg(short = 'n', long = "name")]
    pub name: Option<String>,

    /// Omit the folder-structure tree section.
    #[arg(long = "no-tree")]
    pub no_tree: bool,

    /// List all available project types and exit.
    #[arg(long = "list-types")]
    pub list_types: bool,

    /// Do not apply the built-in exclude patterns.
    #[arg(long = "no-default-excludes")]
    pub no_default_excludes: bool,

    /// Print the document to stdout instead of writing a file.
    #[arg(long = "stdout")]
    pub stdout: bool,

    /// Maximum file size in bytes before skipping files.
    #[arg(short = 's', long = "max-size", default_value_t = DEFAULT_MAX_FILE_SIZE)]
    pub max_size: u64,

    /// Verbose output.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
