use anyhow::Result;
use code2md::config::Config;
use code2md::output;
use code2md::pipeline::Pipeline;
use code2md::select::presets;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = Config::from_cli();
    init_tracing(config.verbose);

    if config.list_types {
        presets::print_types();
        return ExitCode::SUCCESS;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let mut pipeline = Pipeline::new();
    pipeline.resolve_base(config)?;
    pipeline.resolve_extensions(config)?;
    pipeline.resolve_output(config);
    pipeline.build_excludes(config);
    pipeline.collect_candidates()?;
    pipeline.collect_file_data(config.max_size);
    pipeline.render(!config.no_tree);

    if let Some(document) = pipeline.document() {
        match pipeline.output_path() {
            Some(path) => {
                let bytes = output::write_document(path, document)?;
                println!(
                    "Exported {} files to {} ({})",
                    pipeline.file_count(),
                    path.display(),
                    output::format_size(bytes)
                );
            }
            None => print!("{document}"),
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "code2md=debug" } else { "code2md=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
