// tests/integration_tests/config_test.rs
use super::common::{create_test_file, setup_test_directory};
use anyhow::Result;
use wfreq::{Exclusions, Settings, count_paths, find_config, load_config};

#[test]
fn test_config_found_from_nested_directory() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_test_file(
        temp_dir.path(),
        ".wfreq.toml",
        "exclude = [\"*.log\"]\nskip_unreadable = true\n",
    )?;

    let found = find_config(&temp_dir.path().join("notes/again"))
        .expect("config should be found in an ancestor");
    let config = load_config(&found)?;

    assert_eq!(config.exclude, vec!["*.log"]);
    assert!(config.skip_unreadable);
    Ok(())
}

#[test]
fn test_exclusions_change_the_count() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let settings = Settings {
        exclusions: Exclusions::new(&["*.log", "*.md"])?,
        ..Settings::default()
    };

    let summary = count_paths(&[temp_dir.path().to_path_buf()], &settings)?;
    assert_eq!(summary.files_counted, 3);
    assert_eq!(summary.table.count("log"), 0);
    assert_eq!(summary.table.count("hello"), 1);
    Ok(())
}

#[test]
fn test_explicit_file_is_never_excluded() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let settings = Settings {
        exclusions: Exclusions::new(&["*.log"])?,
        ..Settings::default()
    };

    let summary = count_paths(&[temp_dir.path().join("notes/build.log")], &settings)?;
    assert_eq!(summary.table.count("log"), 4);
    Ok(())
}
