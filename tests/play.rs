//! End-to-end tests that drive the hangman binary over piped stdin.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

// three stages, small enough to stay below the bad-guess box threshold
const GALLOWS: &str = "base\n\n\nbase\nhead\n\n\nbase\nhead\nbody";

const WIN_MARK: &str = "|__/|__/_/_/ /_/";
const LOSE_MARK: &str = "The word was:";

fn game_dir(dictionary: &str) -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("default.gallows"), GALLOWS).unwrap();
    fs::write(dir.path().join("words.txt"), dictionary).unwrap();
    dir
}

fn hangman(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hangman").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn missing_gallows_file_aborts() {
    let dir = tempdir().unwrap();
    hangman(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("default.gallows"));
}

#[test]
fn missing_dictionary_file_aborts() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("default.gallows"), GALLOWS).unwrap();
    hangman(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("words.txt"));
}

#[test]
fn dictionary_without_usable_words_aborts() {
    let dir = game_dir("UPPER\n123\n");
    hangman(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no usable words"));
}

#[test]
fn guessing_every_letter_wins() {
    let dir = game_dir("cab\n");
    hangman(dir.path())
        .write_stdin("c\na\nb\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(WIN_MARK))
        .stdout(predicate::str::contains(LOSE_MARK).not());
}

#[test]
fn guessing_the_whole_word_wins() {
    let dir = game_dir("cab\n");
    hangman(dir.path())
        .write_stdin("cab\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(WIN_MARK));
}

#[test]
fn exhausting_the_stages_loses() {
    let dir = game_dir("cab\n");
    hangman(dir.path())
        .write_stdin("x\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The word was: cab"))
        .stdout(predicate::str::contains("base\nhead\nbody"))
        .stdout(predicate::str::contains(WIN_MARK).not());
}

#[test]
fn closed_stdin_quits_without_verdict() {
    let dir = game_dir("cab\n");
    hangman(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(WIN_MARK).not())
        .stdout(predicate::str::contains(LOSE_MARK).not());
}

#[test]
fn custom_file_flags_are_honored() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("frames.txt"), GALLOWS).unwrap();
    fs::write(dir.path().join("animals.txt"), "owl\n").unwrap();
    hangman(dir.path())
        .args(["-g", "frames.txt", "-d", "animals.txt"])
        .write_stdin("owl\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(WIN_MARK));
}

#[test]
fn help_flag_describes_the_files() {
    let dir = tempdir().unwrap();
    hangman(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dictionary"))
        .stdout(predicate::str::contains("--gallows"));
}
