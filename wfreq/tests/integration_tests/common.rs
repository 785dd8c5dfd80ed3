// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(
        temp_dir.path(),
        "story.txt",
        "The Cat's-Eye, and the cat!!\nThe end.",
    )?;
    create_test_file(temp_dir.path(), "notes/hello.txt", "hello")?;
    create_test_file(temp_dir.path(), "notes/again/hello.md", "Hello!")?;
    create_test_file(temp_dir.path(), "notes/build.log", "log log log log")?;
    create_test_file(temp_dir.path(), "empty.txt", "")?;

    Ok(temp_dir)
}
