//! Prefmerge CLI Binary
//!
//! Merges the bundled workbench preferences into an Eclipse workspace.

use clap::Parser;
use prefmerge::cli::{default_prompt, map_error, Cli, RunContext, RunOptions};
use prefmerge::config::{ConfigLoader, PrefmergeConfig};
use prefmerge::logging::{init_logging, resolve_log_file_path, LoggingConfig};
use std::io::IsTerminal;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures.
            if !e.use_stderr() {
                e.exit();
            }
            if e.print().is_err() {
                eprintln!("{}", e);
            }
            process::exit(1);
        }
    };

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Prefmerge starting");

    let options = RunOptions {
        bundle: cli.bundle.clone(),
        dry_run: cli.dry_run,
        format: cli.format.clone(),
        color: std::io::stdout().is_terminal(),
    };
    let context = match RunContext::new(cli.workspace.clone(), config, options) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Invalid invocation: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let mut prompt = default_prompt(cli.force);
    let mut stdout = std::io::stdout();
    match context.execute(&mut stdout, prompt.as_mut()) {
        Ok(output) => {
            info!("Run completed");
            println!("{}", output);
            println!();
        }
        Err(e) => {
            error!("Run failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

fn load_config(cli: &Cli) -> Result<PrefmergeConfig, prefmerge::PrefsError> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => {
            let cwd = std::env::current_dir()
                .map_err(|e| prefmerge::PrefsError::io(".", e))?;
            ConfigLoader::load(&cwd)
        }
    }
}

/// Build logging configuration from CLI args and the loaded config.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: &PrefmergeConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();

    if cli.quiet {
        logging.enabled = false;
    }
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }

    if logging.enabled && logging.output == "file" {
        if let Ok(path) = resolve_log_file_path(cli.log_file.clone(), logging.file.clone()) {
            logging.file = Some(path);
        }
    } else if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    }

    logging
}
