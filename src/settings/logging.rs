use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::{
    fs,
    io::{stderr, IsTerminal},
    path::PathBuf,
};
use tracing_appender::rolling;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, format::debug_fn},
    prelude::*,
    registry, EnvFilter,
};

use crate::settings::consts::{
    APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, DEFAULT_LOG_LEVEL, LOG_FILE,
};

/// Platform data directory holding `astrokit.log`.
pub fn log_directory() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
        .ok_or_else(|| anyhow!("Could not determine project directories"))?;
    Ok(project_dirs.data_dir().to_path_buf())
}

/// `RUST_LOG` when set, else [`DEFAULT_LOG_LEVEL`] with the HTTP stack kept quiet.
fn console_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},hyper_util=warn,reqwest=warn",
            DEFAULT_LOG_LEVEL
        ))
    })
}

/// Log compact messages to stderr and every event as JSON to the data directory.
pub fn init_logger() -> Result<()> {
    let directory = log_directory()?;
    fs::create_dir_all(&directory)
        .with_context(|| format!("Failed to create log directory: {}", directory.display()))?;

    let file_appender = rolling::never(&directory, LOG_FILE);

    let console_layer = fmt::layer()
        .with_writer(stderr)
        .with_ansi(IsTerminal::is_terminal(&stderr()))
        .with_level(true)
        .with_target(false)
        .without_time()
        .compact()
        .fmt_fields({
            debug_fn(move |writer, field, value| {
                if field.name() == "message" {
                    write!(writer, "{:?}", value)?;
                }
                Ok(())
            })
        })
        .with_filter(console_filter());

    let json_layer = fmt::layer()
        .json()
        .with_writer(file_appender)
        .with_target(true)
        .with_level(true)
        .flatten_event(true)
        .with_filter(LevelFilter::TRACE);

    registry().with(console_layer).with(json_layer).init();

    Ok(())
}
