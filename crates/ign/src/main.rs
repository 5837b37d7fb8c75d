//! ign - Entry Point
//!
//! Binary shell around the console kernel: parses its own flags, loads the
//! application configuration, initializes logging, and hands the remaining
//! arguments to the kernel.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use ign::config::ConfigLoader;
use ign::kernel::ConsoleKernel;
use ign::logging::init_logging;

/// Command line interface for the ign bootstrap shell
#[derive(Parser, Debug)]
#[command(name = "ign")]
#[command(about = "Configuration-driven bootstrap for console applications")]
#[command(version)]
struct Cli {
    /// Path to the application configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the declarative documents
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Settings file flattened into the parameter registry
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Command name and arguments handed to the runner
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = match loader.load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Bootstrap error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(dir) = cli.config_dir {
        config.paths.config_dir = dir;
    }
    if let Some(settings) = cli.settings {
        config.paths.settings_file = Some(settings);
    }

    if let Err(err) = init_logging(&config.logging) {
        eprintln!("Bootstrap error: {err}");
        return ExitCode::FAILURE;
    }

    let exit_code = ConsoleKernel::new(config).handle(&cli.args);
    ExitCode::from(u8::try_from(exit_code.clamp(0, 255)).unwrap_or(1))
}
