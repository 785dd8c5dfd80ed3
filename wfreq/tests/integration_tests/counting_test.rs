// tests/integration_tests/counting_test.rs
use super::common::{create_test_file, setup_test_directory};
use anyhow::Result;
use tempfile::TempDir;
use wfreq::{Settings, WordCountError, count_file, count_paths, tokenize};

#[test]
fn test_tokenize_scenario() {
    let tokens: Vec<String> = tokenize("The Cat's-Eye, and the cat!!").collect();
    assert_eq!(tokens, vec!["the", "cat's-eye", "and", "the", "cat"]);
}

#[test]
fn test_count_single_file() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let table = count_file(&temp_dir.path().join("story.txt"))?;

    assert_eq!(table.count("the"), 3);
    assert_eq!(table.count("cat's-eye"), 1);
    assert_eq!(table.count("and"), 1);
    assert_eq!(table.count("cat"), 1);
    assert_eq!(table.count("end"), 1);
    Ok(())
}

#[test]
fn test_directory_with_two_hello_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "a/first.txt", "hello")?;
    create_test_file(temp_dir.path(), "b/second.txt", "hello")?;

    let summary = count_paths(&[temp_dir.path().to_path_buf()], &Settings::default())?;
    assert_eq!(summary.table.count("hello"), 2);
    assert_eq!(summary.files_counted, 2);
    Ok(())
}

#[test]
fn test_whole_tree() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let summary = count_paths(&[temp_dir.path().to_path_buf()], &Settings::default())?;

    assert_eq!(summary.files_counted, 5);
    assert_eq!(summary.table.count("hello"), 2);
    assert_eq!(summary.table.count("log"), 4);
    assert_eq!(summary.table.total(), 13);
    Ok(())
}

#[test]
fn test_first_error_aborts() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let paths = [
        temp_dir.path().join("story.txt"),
        temp_dir.path().join("nope"),
    ];

    let err = count_paths(&paths, &Settings::default()).expect_err("missing path must abort");
    let typed = err
        .downcast_ref::<WordCountError>()
        .expect("should be a typed error");
    assert_eq!(typed.to_string(), "Error parsing path.");
    assert_eq!(typed.exit_code(), 1);
    Ok(())
}
