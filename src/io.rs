use std::fs;
use std::io::{self, ErrorKind, Read};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("I/O error: {0}")]
    Generic(#[from] io::Error),
}

/// Reads the whole input, from `path` or from stdin when it is absent or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String, IoError> {
    match path {
        Some(path) if path != Path::new("-") => read_file(path),
        _ => read_stdin(),
    }
}

pub fn read_file(path: &Path) -> Result<String, IoError> {
    log::debug!("reading {}", path.display());
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => IoError::FileNotFound(path.display().to_string()),
        ErrorKind::PermissionDenied => IoError::PermissionDenied(path.display().to_string()),
        _ => IoError::Generic(e),
    })
}

fn read_stdin() -> Result<String, IoError> {
    log::debug!("reading stdin");
    let mut buffer = String::new();
    io::stdin().lock().read_to_string(&mut buffer)?;
    Ok(buffer)
}
