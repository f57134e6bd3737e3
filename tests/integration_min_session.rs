// Minimal integration test that drives the compiled binary through a PTY.
// This exercises the real event loop and crossterm input handling.
//
// Notes:
// - Requires a TTY; uses expectrl which allocates a pseudo terminal.
// - Marked Unix-only and ignored by default to avoid CI/platform issues.
// - Run manually via: `cargo test --test integration_min_session -- --ignored`.

#![cfg(unix)]

use std::time::Duration;

use expectrl::{spawn, Eof};

#[test]
#[ignore]
fn minimal_session_types_and_exits() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let prefs = dir.path().join("preferences.json");

    let bin = assert_cmd::cargo::cargo_bin("keypace");
    let cmd = format!("{} --theme dark --config {}", bin.display(), prefs.display());

    let mut p = spawn(cmd)?;

    // Give the app a moment to initialize the terminal/alternate screen
    std::thread::sleep(Duration::from_millis(200));

    p.send("Typing")?;
    std::thread::sleep(Duration::from_millis(300));

    // Toggle dark mode so the preference file gets written
    p.send("\x04")?; // ctrl+d
    std::thread::sleep(Duration::from_millis(100));

    p.send("\x1b")?; // ESC
    p.expect(Eof)?;

    assert!(prefs.exists());
    Ok(())
}
