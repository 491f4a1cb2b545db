use crate::errors::AppResult;
use crate::io::IoError;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::Path;

/// Sends debug logs to `path`. Without this call nothing is logged.
pub fn init(path: &Path) -> AppResult<()> {
    let log_file = File::create(path).map_err(IoError::from)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    log::info!("logging to {}", path.display());
    Ok(())
}
