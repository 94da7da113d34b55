//! Configuration loading tests
//!
//! The working-directory lookup tests change the current directory, so
//! they are serialized.

mod common;

use common::{TEST_CONFIG, write_config};
use eval_dispatch::cli::common::{ConfigSource, load_config, resolve_config_source};
use eval_dispatch::config::{CONFIG_FILE_NAME, DispatchConfig};
use eval_dispatch::{ConfigError, LaunchMode};
use serial_test::serial;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Run `f` with the current directory set to a fresh temp dir
fn in_temp_dir<F>(f: F)
where
    F: FnOnce(&TempDir),
{
    let temp_dir = TempDir::new().unwrap();
    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(temp_dir.path()).unwrap();

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| f(&temp_dir)));

    std::env::set_current_dir(&original_dir).unwrap();
    if let Err(err) = result {
        std::panic::resume_unwind(err);
    }
}

#[test]
#[serial]
fn test_working_dir_file_is_found() {
    in_temp_dir(|dir| {
        write_config(dir.path(), CONFIG_FILE_NAME, TEST_CONFIG);
        assert_eq!(
            resolve_config_source(None, None),
            ConfigSource::WorkingDir(PathBuf::from(CONFIG_FILE_NAME))
        );
    });
}

#[test]
#[serial]
fn test_no_file_falls_back_to_defaults() {
    in_temp_dir(|_| {
        assert_eq!(resolve_config_source(None, None), ConfigSource::Defaults);
    });
}

#[test]
#[serial]
fn test_env_beats_working_dir_file() {
    in_temp_dir(|dir| {
        write_config(dir.path(), CONFIG_FILE_NAME, TEST_CONFIG);
        assert_eq!(
            resolve_config_source(None, Some("/etc/jobs.toml")),
            ConfigSource::Env(PathBuf::from("/etc/jobs.toml"))
        );
    });
}

#[test]
#[serial]
fn test_working_dir_directory_is_not_a_config() {
    in_temp_dir(|dir| {
        std::fs::create_dir(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(resolve_config_source(None, None), ConfigSource::Defaults);
    });
}

#[test]
fn test_load_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        "jobs.toml",
        "[dispatch]\nlaunch = \"wait\"\n[full]\nprogram = \"progA\"\n",
    );

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.dispatch.launch, LaunchMode::Wait);
    assert_eq!(config.full.program, "progA");
    assert_eq!(config.extended, DispatchConfig::default().extended);
}

#[test]
fn test_load_explicit_invalid_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "jobs.toml", "[full\nprogram = 1\n");

    let err = load_config(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_load_explicit_missing_file_names_path() {
    let err = load_config(Some(Path::new("/nope/jobs.toml"))).unwrap_err();
    assert!(err.to_string().contains("/nope/jobs.toml"));
}

#[test]
fn test_suffix_placeholder_in_extended_templates() {
    let config = DispatchConfig::parse(
        r#"
[extended]
ckpt_path = "ckpts/{config}/{suffix}/{config}.{epoch}.pth"
"#,
    )
    .unwrap();
    let inv = eval_dispatch::Invocation::parse(&["cfg", "run7", "3", "x"]).unwrap();
    let cmd = eval_dispatch::CommandLine::build(&inv, &config);
    assert!(cmd.args.contains(&"ckpts/cfg/run7/cfg.3.pth".to_string()));
}

#[test]
fn test_suffix_placeholder_rejected_in_full_template() {
    let err = DispatchConfig::parse("[full]\nexp_config = \"{suffix}.yaml\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Template(_)));
}
