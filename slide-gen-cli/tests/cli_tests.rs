use std::fs;
use std::process::Command;

#[test]
fn fixed_mode_is_forced_on_periodic_corpus() {
    let exe = env!("CARGO_BIN_EXE_slide-gen");
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("corpus.txt");
    fs::write(&corpus, "aabaabaab").unwrap();

    let output = Command::new(exe)
        .args(["2", "aa", "4", "fixed", corpus.to_str().unwrap()])
        .output()
        .expect("failed to run slide-gen");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "aabaab\n");
}

#[test]
fn fixed_mode_is_reproducible() {
    let exe = env!("CARGO_BIN_EXE_slide-gen");
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("corpus.txt");
    fs::write(&corpus, "the cat sat on the mat and the rat ate the hat").unwrap();

    let run = || {
        Command::new(exe)
            .args(["2", "th", "60", "fixed", corpus.to_str().unwrap()])
            .output()
            .expect("failed to run slide-gen")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn zero_window_fails() {
    let exe = env!("CARGO_BIN_EXE_slide-gen");
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("corpus.txt");
    fs::write(&corpus, "abc").unwrap();

    let status = Command::new(exe)
        .args(["0", "a", "4", "random", corpus.to_str().unwrap()])
        .status()
        .expect("failed to run slide-gen");
    assert!(!status.success());
}
