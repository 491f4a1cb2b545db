use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(dead_code)]
pub const REPORT_FIXTURE: &str = "tests/fixtures/report.txt";

#[allow(dead_code)]
/// Load a fixture relative to the crate root
pub fn load_fixture(path: &str) -> String {
    fs::read_to_string(Path::new(env!("CARGO_MANIFEST_DIR")).join(path))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path, e))
}

#[allow(dead_code)]
/// Write `content` to a file inside `dir` and return its path
pub fn write_temp_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Text with a long run of words and no paragraph breaks
#[allow(dead_code)]
pub fn long_paragraph(words: usize) -> String {
    (0..words)
        .map(|i| match i % 4 {
            0 => "alpha",
            1 => "be",
            2 => "gamma-delta",
            _ => "x",
        })
        .collect::<Vec<_>>()
        .join(" ")
}
