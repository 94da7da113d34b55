//! Dispatcher behavior through the public library API
//!
//! Covers argument-count branching, the command each branch builds, and
//! the guarantee that nothing is launched for too few arguments.

mod common;

use common::{TEST_CONFIG, args};
use eval_dispatch::dispatch::{Launched, RecordingLauncher};
use eval_dispatch::{DispatchConfig, DispatchError, EvalMode, Invocation, dispatch};

fn test_config() -> DispatchConfig {
    DispatchConfig::parse(TEST_CONFIG).unwrap()
}

fn planned(items: &[&str]) -> String {
    let mut launcher = RecordingLauncher::new();
    let result = dispatch(&args(items), &test_config(), &mut launcher).unwrap();
    assert_eq!(result.outcome, Launched::Recorded);
    result.command.to_string()
}

#[test]
fn test_full_mode_scenario() {
    assert_eq!(
        planned(&["cfgX", "/ckpt/path.pth", "unused"]),
        "progA --run-type eval --exp-config cfgs/full/cfgX.on.yaml --ckpt-path /ckpt/path.pth"
    );
}

#[test]
fn test_extended_mode_scenario() {
    assert_eq!(
        planned(&["cfgY", "suffix1", "42", "--extra-flag", "v"]),
        "progB --run-type eval --exp-config cfgs/cfgY.on.yaml --run-suffix suffix1 \
         --ckpt-path ckpts/cfgY/cfgY.42.pth --extra-flag v"
    );
}

#[test]
fn test_full_mode_never_uses_third_argument() {
    let marker = "THIRD-ARGUMENT-MARKER";
    for checkpoint in ["/a.pth", "relative/b.pth", ""] {
        let command = planned(&["cfg", checkpoint, marker]);
        assert!(!command.contains(marker), "leaked into: {command}");
        assert!(command.ends_with(&format!("--ckpt-path {checkpoint}")));
    }
}

#[test]
fn test_extended_checkpoint_path_uses_config_twice_and_epoch_once() {
    let mut launcher = RecordingLauncher::new();
    let result = dispatch(
        &args(&["zebra", "sfx", "epoch77", "x"]),
        &test_config(),
        &mut launcher,
    )
    .unwrap();

    let command = &result.command;
    let position = command
        .args
        .iter()
        .position(|a| a == "--ckpt-path")
        .unwrap();
    let ckpt = &command.args[position + 1];
    assert_eq!(ckpt.matches("zebra").count(), 2);
    assert_eq!(ckpt.matches("epoch77").count(), 1);
}

#[test]
fn test_extended_trailing_tokens_equal_extra_args() {
    let cases: &[&[&str]] = &[
        &["c", "s", "e", "one"],
        &["c", "s", "e", "--flag", "value", "-x", "a b", ""],
        &["c", "s", "e", "--ckpt-path", "override.pth"],
    ];

    for items in cases {
        let mut launcher = RecordingLauncher::new();
        let result = dispatch(&args(items), &test_config(), &mut launcher).unwrap();
        let extra = &items[3..];
        let tail = &result.command.args[result.command.args.len() - extra.len()..];
        assert_eq!(tail, extra);
        assert_eq!(result.command.mode, EvalMode::Extended);
    }
}

#[test]
fn test_too_few_arguments_never_launch() {
    for n in 0..3 {
        let items: Vec<String> = (0..n).map(|i| format!("arg{i}")).collect();
        let mut launcher = RecordingLauncher::new();
        let err = dispatch(&items, &test_config(), &mut launcher).unwrap_err();

        assert!(matches!(err, DispatchError::InvalidArgumentCount { count } if count == n));
        assert!(err.to_string().contains("Invalid config"));
        assert!(launcher.commands.is_empty());
    }
}

#[test]
fn test_single_argument_scenario() {
    let mut launcher = RecordingLauncher::new();
    let result = dispatch(&args(&["only-one"]), &test_config(), &mut launcher);
    assert!(result.is_err());
    assert!(launcher.commands.is_empty());
}

#[test]
fn test_identical_arguments_build_identical_commands() {
    for items in [
        &["cfgX", "/ckpt/path.pth", "unused"][..],
        &["cfgY", "suffix1", "42", "--extra-flag", "v"][..],
    ] {
        let first = planned(items);
        let second = planned(items);
        assert_eq!(first.as_bytes(), second.as_bytes());
    }
}

#[test]
fn test_mode_depends_only_on_count() {
    let full = Invocation::parse(&["--x", "--y", "--z"]).unwrap();
    assert_eq!(full.mode(), EvalMode::Full);

    let extended = Invocation::parse(&["a", "b", "c", "d"]).unwrap();
    assert_eq!(extended.mode(), EvalMode::Extended);
}

#[test]
fn test_default_config_targets_two_programs() {
    let config = DispatchConfig::default();
    let mut launcher = RecordingLauncher::new();

    dispatch(&args(&["c", "p", "u"]), &config, &mut launcher).unwrap();
    dispatch(&args(&["c", "s", "e", "x"]), &config, &mut launcher).unwrap();

    assert_eq!(launcher.commands.len(), 2);
    assert_ne!(launcher.commands[0].program, launcher.commands[1].program);
    assert!(
        launcher.commands[0]
            .to_string()
            .contains("--exp-config habitat_baselines/config/objectnav/full/c.on.yaml")
    );
    assert!(
        launcher.commands[1]
            .to_string()
            .contains("--ckpt-path data/new_checkpoints/c/c.e.pth x")
    );
}
