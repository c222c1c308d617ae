// Centralized magic numbers & default values
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;
pub const OUTPUT_FILE_SUFFIX: &str = "_code.md";
pub const BINARY_SAMPLE_SIZE: usize = 4096;
