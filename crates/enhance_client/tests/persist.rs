use std::fs;

use enhance_client::{ensure_state_dir, StateDir};
use tempfile::TempDir;

#[test]
fn creates_missing_state_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("state");
    assert!(!new_dir.exists());
    ensure_state_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn missing_file_reads_as_none() {
    let temp = TempDir::new().unwrap();
    let state = StateDir::new(temp.path());
    assert_eq!(state.read("absent.ron").unwrap(), None);
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let state = StateDir::new(temp.path().join("nested"));

    let first = state.write_atomic("prefs.ron", "hello").unwrap();
    assert_eq!(first.file_name().unwrap(), "prefs.ron");
    assert_eq!(state.read("prefs.ron").unwrap().as_deref(), Some("hello"));

    let second = state.write_atomic("prefs.ron", "world").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "world");
}

#[test]
fn state_dir_that_is_a_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let state = StateDir::new(file_path.clone());
    assert!(state.write_atomic("prefs.ron", "data").is_err());
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "x");
}
