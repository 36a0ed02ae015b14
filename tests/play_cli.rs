use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde::Deserialize;
use tempfile::tempdir;

#[derive(Deserialize)]
struct MovedOut {
    outcome: OutcomeOut,
    state: StateOut,
}

#[derive(Deserialize)]
struct OutcomeOut {
    pile: usize,
    tile: u32,
    score_delta: u64,
}

#[derive(Deserialize)]
struct StateOut {
    stacks: Vec<Vec<u32>>,
    discards: u32,
    upcoming: Vec<u32>,
    score: u64,
    game_over: bool,
}

fn play(args: &[&str], stdin: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("play")
        .expect("binary exists")
        .args(args)
        .write_stdin(stdin)
        .assert()
}

#[test]
fn text_mode_shows_merge_and_score() {
    play(&["--tiles", "2", "--stacks", "2", "--capacity", "3"], "0\n0\n")
        .success()
        .stdout(predicate::str::contains("Score: 0  Discards: 0/2  Next: 2 2"))
        .stdout(predicate::str::contains("[0] 4"))
        .stdout(predicate::str::contains("[2] discard"))
        .stdout(predicate::str::contains("Final score: 4"));
}

#[test]
fn full_discard_is_reported_and_skipped() {
    play(&["--tiles", "2,4", "--stacks", "2"], "2\n2\n2\n")
        .success()
        .stdout(predicate::str::contains("Discards: 2/2"))
        .stderr(predicate::str::contains("discard pile is full"));
}

#[test]
fn json_mode_emits_one_object_per_line() {
    let out = Command::cargo_bin("play")
        .expect("binary exists")
        .args(["--json", "--tiles", "2,4,8", "--stacks", "3"])
        .write_stdin("1\n9\n")
        .output()
        .expect("run");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).expect("utf8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);

    let moved: MovedOut = serde_json::from_str(lines[0]).expect("moved json");
    assert_eq!(moved.outcome.pile, 1);
    assert_eq!(moved.outcome.tile, 2);
    assert_eq!(moved.outcome.score_delta, 0);
    assert_eq!(moved.state.stacks, vec![vec![], vec![2], vec![]]);
    assert_eq!(moved.state.upcoming, vec![4, 8]);
    assert_eq!(moved.state.discards, 0);
    assert_eq!(moved.state.score, 0);
    assert!(!moved.state.game_over);

    assert!(lines[1].contains("\"error\""));
    assert!(lines[1].contains("unknown pile 9"));
}

#[test]
fn config_file_sets_rules() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("game.toml");
    fs::write(&path, "seed = 3\n[rules]\nstacks = 3\n").expect("write config");
    play(&["--config", path.to_str().expect("utf8 path")], "legal\nq\n")
        .success()
        .stdout(predicate::str::contains("Legal: 0 1 2 3"))
        .stdout(predicate::str::contains("[3] discard"));
}

#[test]
fn invalid_config_fails() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[rules]\nstack_capacity = 1\n").expect("write config");
    play(&["--config", path.to_str().expect("utf8 path")], "")
        .failure()
        .stderr(predicate::str::contains("stack_capacity"));
}

#[test]
fn non_power_of_two_tiles_fail() {
    play(&["--tiles", "2,3"], "0\n")
        .failure()
        .stderr(predicate::str::contains("3 is not a power of two"));
}

#[test]
fn game_ends_when_every_pile_is_full() {
    // 2 -> stack, 4 -> stack (full), 2 -> discard (full).
    play(
        &["--tiles", "2,4", "--stacks", "1", "--capacity", "2", "--discards", "1"],
        "0\n0\n1\n0\n",
    )
    .success()
    .stdout(predicate::str::contains("Game over. Final score: 0"));
}
