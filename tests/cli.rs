use assert_cmd::Command;

#[test]
fn help_lists_options() {
    let output = Command::cargo_bin("keypace")
        .unwrap()
        .arg("--help")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--theme"));
    assert!(stdout.contains("--log-file"));
}

#[test]
fn rejects_unknown_theme() {
    Command::cargo_bin("keypace")
        .unwrap()
        .args(["--theme", "sepia"])
        .assert()
        .failure();
}

#[test]
fn refuses_non_tty_stdin() {
    Command::cargo_bin("keypace")
        .unwrap()
        .write_stdin("")
        .assert()
        .failure();
}
