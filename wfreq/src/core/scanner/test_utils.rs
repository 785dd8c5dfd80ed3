use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::env;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

/// A temporary directory under the working directory. `TempDir::path` is
/// still absolute; pass it through `relative_arg` to get an argument.
pub fn relative_temp_dir() -> Result<TempDir> {
    Ok(tempfile::Builder::new().prefix("wfreq-test").tempdir_in(".")?)
}

/// `path` relative to the working directory, as a command-line argument.
pub fn relative_arg(path: &Path) -> Result<String> {
    let cwd = env::current_dir()?;
    Ok(path.strip_prefix(&cwd)?.to_string_lossy().into_owned())
}

/// Four files, two of them nested, with known word counts.
pub fn setup_test_directory() -> Result<TempDir> {
    let dir = relative_temp_dir()?;

    create_test_file(&dir, "one.txt", "The cat sat.\nThe cat ran!")?;
    create_test_file(&dir, "two.txt", "hello world\n")?;
    create_test_file(&dir, "nested/three.txt", "Hello, hello again")?;
    create_test_file(&dir, "nested/deeper/four.txt", "... 42 !!\n\n  the end")?;

    Ok(dir)
}
