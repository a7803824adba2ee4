//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::pharmadir_cmd;

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    pharmadir_cmd().arg("init").arg(temp.path()).assert().success();

    assert!(temp.path().join(".pharmadir").exists());
    assert!(temp.path().join("pharmacies").is_dir());

    let config_path = temp.path().join(".pharmadir/config.toml");
    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("language = \"fr\""));
    assert!(content.contains("data_dir = \"pharmacies\""));
    assert!(content.contains("demo_fallback = true"));
}

#[test]
fn test_init_with_english_and_demo() {
    let temp = TempDir::new().unwrap();

    pharmadir_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--language")
        .arg("en")
        .arg("--demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized pharmadir directory"));

    let content = fs::read_to_string(temp.path().join(".pharmadir/config.toml")).unwrap();
    assert!(content.contains("language = \"en\""));
    assert!(temp.path().join("pharmacies/demo.toml").is_file());
}

#[test]
fn test_init_invalid_language_fails() {
    let temp = TempDir::new().unwrap();

    pharmadir_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--language")
        .arg("de")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Valid languages: fr, en"));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    pharmadir_cmd().arg("init").arg(temp.path()).assert().success();
    pharmadir_cmd().arg("init").arg(temp.path()).assert().failure();
}

#[test]
fn test_config_get_and_set() {
    let temp = TempDir::new().unwrap();
    pharmadir_cmd().arg("init").arg(temp.path()).assert().success();

    pharmadir_cmd()
        .current_dir(temp.path())
        .args(["config", "language"])
        .assert()
        .success()
        .stdout("fr\n");

    pharmadir_cmd()
        .current_dir(temp.path())
        .args(["config", "location", "33.9716,-6.8498"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set location = 33.9716,-6.8498"));

    pharmadir_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("language = fr"))
        .stdout(predicate::str::contains("demo_fallback = true"))
        .stdout(predicate::str::contains("location = 33.9716,-6.8498"));
}

#[test]
fn test_config_invalid_location() {
    let temp = TempDir::new().unwrap();
    pharmadir_cmd().arg("init").arg(temp.path()).assert().success();

    pharmadir_cmd()
        .current_dir(temp.path())
        .args(["config", "location", "somewhere"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("LATITUDE,LONGITUDE"));
}

#[test]
fn test_config_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    pharmadir_cmd().arg("init").arg(temp.path()).assert().success();

    pharmadir_cmd()
        .current_dir(temp.path().join("pharmacies"))
        .args(["config", "data_dir"])
        .assert()
        .success()
        .stdout("pharmacies\n");
}

#[test]
fn test_config_uses_env_root() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    pharmadir_cmd().arg("init").arg(temp.path()).assert().success();

    pharmadir_cmd()
        .current_dir(elsewhere.path())
        .env("PHARMADIR_ROOT", temp.path())
        .args(["config", "language"])
        .assert()
        .success()
        .stdout("fr\n");
}

#[test]
fn test_outside_directory_fails() {
    let temp = TempDir::new().unwrap();

    pharmadir_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("pharmadir init"));
}
