//! rowops - binary entry point.
//!
//! Wires stdin/stdout into [`rowops_shell::Shell`] after setting up logging
//! and reading the optional config file.
//!
//! ```text
//! main() -> init_tracing() -> load_config() -> Shell::run()
//! ```

use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use rowops_config::{ConfigError, RowopsConfig, data_dir};
use rowops_shell::{Shell, ShellOptions};

fn init_tracing(config_path: Option<&Path>) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        let config = config_path
            .map_or_else(|| "none".to_string(), |p| p.display().to_string());
        tracing::info!(
            path = %log_path.display(),
            config = %config,
            version = env!("CARGO_PKG_VERSION"),
            "rowops logging initialized"
        );
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over interleaving them
    // with the interactive prompt on stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.rowops/logs/rowops.log
    if let Some(dir) = data_dir() {
        candidates.push(dir.join("logs").join("rowops.log"));
    }

    // Fallback: ./.rowops/logs/rowops.log
    candidates.push(PathBuf::from(".rowops").join("logs").join("rowops.log"));

    candidates
}

/// Load the config at `path`, keeping any error for the user to see.
///
/// A broken config falls back to defaults rather than stopping the program.
fn load_config(path: Option<PathBuf>) -> (RowopsConfig, Option<ConfigError>) {
    match RowopsConfig::load_at(path) {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Using default config");
            (RowopsConfig::default(), Some(err))
        }
    }
}

fn shell_options(config: &RowopsConfig, config_error: Option<&ConfigError>) -> ShellOptions {
    ShellOptions {
        prompt: config.prompt().to_string(),
        show_result: config.show_result(),
        style: config.grid_style(),
        notices: config_error.map(ToString::to_string).into_iter().collect(),
    }
}

fn run<R: BufRead, W: Write>(input: R, output: W, options: ShellOptions) -> Result<()> {
    let mut shell = Shell::new(input, output, options);
    shell.run()?;
    tracing::info!(operations = shell.session().log_len(), "Session ended");
    Ok(())
}

fn main() -> Result<()> {
    let config_path = RowopsConfig::path();
    init_tracing(config_path.as_deref());

    let (config, config_error) = load_config(config_path);
    let options = shell_options(&config, config_error.as_ref());

    run(io::stdin().lock(), io::stdout().lock(), options)
}
