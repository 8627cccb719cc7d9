use clap::Parser;
use modelgen::GenerateConfig;
use modelgen_typegen::names;
use std::path::PathBuf;

/// Generate Python object-model classes from a JSON Schema.
#[derive(Parser)]
#[command(name = "modelgen", version)]
struct Cli {
    /// JSON Schema file to generate classes from
    #[arg(short = 's', long)]
    schema_path: PathBuf,

    /// Directory the generated package is written to
    #[arg(short = 'o', long)]
    output_directory: PathBuf,

    /// Name of the generated Python module
    #[arg(short = 'm', long)]
    module_name: String,

    /// Name of the root class (defaults to the schema title)
    #[arg(short = 'r', long)]
    root_class_name: Option<String>,

    /// Code generation hints file
    #[arg(long)]
    hints_file_path: Option<PathBuf>,

    /// Replace a populated output directory
    #[arg(short = 'f', long)]
    force: bool,

    /// Increase output verbosity
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = GenerateConfig {
        schema_path: cli.schema_path,
        hints_path: cli.hints_file_path,
        output_directory: cli.output_directory,
        overwrite_existing: cli.force,
        module_name: names::sanitize_identifier(&cli.module_name).to_lowercase(),
        root_class_name: cli
            .root_class_name
            .as_deref()
            .map(names::sanitize_identifier),
    };

    match modelgen::generate(&config) {
        Ok(manifest) => {
            eprintln!(
                "Generated {} ({} classes on record)",
                config.output_directory.display(),
                manifest.len()
            );
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
