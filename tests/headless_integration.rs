use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use keypace::app::{App, Control};
use keypace::clock::{Clock, ManualClock};
use keypace::config::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
use keypace::runtime::{AppEvent, Runner, TestEventSource};
use keypace::scorer::evaluate;
use keypace::session::{reset, Session};
use keypace::text::ReferenceText;
use keypace::theme::Theme;

fn key(c: char) -> AppEvent {
    AppEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

// Headless run of the app through the runtime without a TTY.
// Keystrokes arrive over the test channel; ticks come from runner timeouts.
#[test]
fn headless_typing_flow_completes() {
    let clock = ManualClock::new();
    let mut app = App::new(
        ReferenceText::new("cat").unwrap(),
        &clock,
        MemoryPreferenceStore::default(),
        None,
        None,
    );

    let (tx, rx) = mpsc::channel();
    let runner = Runner::with_idle_wait(TestEventSource::new(rx), Duration::from_millis(5));

    for c in "cat".chars() {
        tx.send(key(c)).unwrap();
    }

    for _ in 0..100u32 {
        match runner.step(clock.now(), app.session.next_refresh_due()).unwrap() {
            AppEvent::Tick => {
                app.on_tick();
            }
            AppEvent::Resize => {}
            AppEvent::Key(k) => {
                assert_eq!(app.handle_key(k), Control::Continue);
                clock.advance(Duration::from_secs(1));
            }
        }
        if app.is_finished() {
            break;
        }
    }

    assert!(app.is_finished(), "session should have completed");
    let summary = app.readout.completion.unwrap();
    assert_eq!(summary.accuracy_percent, 100);
    assert_eq!(summary.elapsed_secs, 2.0);
    assert!(!app.session.is_refreshing());
}

#[test]
fn cat_sequence_end_to_end() {
    let clock = ManualClock::new();
    let reference = ReferenceText::new("cat").unwrap();
    let mut session = Session::new(reference.clone(), &clock);
    let mut readout = keypace::app::Readout::new(&reference);

    let mut completed = vec![];
    for (step, input) in ["c", "ca", "cat"].iter().enumerate() {
        if step > 0 {
            clock.advance(Duration::from_secs(1));
        }
        session.on_input(input, &mut readout);
        completed.push(session.last_result().is_complete);
    }

    assert_eq!(completed, vec![false, false, true]);
    assert_eq!(session.last_result().accuracy_percent, 100);
    assert!(session.is_locked());
}

#[test]
fn ticks_refresh_live_metrics_while_typing() {
    let clock = ManualClock::new();
    let reference = ReferenceText::new("hello world").unwrap();
    let mut session = Session::new(reference.clone(), &clock);
    let mut readout = keypace::app::Readout::new(&reference);

    session.on_input("hello", &mut readout);
    let mut refreshes = 0;
    for _ in 0..10 {
        clock.advance(Duration::from_millis(100));
        if session.on_tick(&mut readout) {
            refreshes += 1;
        }
    }

    // one second of 100ms steps at a 200ms cadence
    assert_eq!(refreshes, 5);
    assert_eq!(readout.words_per_minute, 60);
    assert_eq!(readout, {
        let mut expected = keypace::app::Readout::new(&reference);
        let result = evaluate(&reference, "hello", 1.0);
        keypace::session::Presenter::show_progress(&mut expected, &result);
        expected
    });
}

#[test]
fn restart_after_activity_matches_fresh_session() {
    let clock = ManualClock::new();
    let reference = ReferenceText::new("abc").unwrap();
    let mut session = Session::new(reference.clone(), &clock);
    let mut readout = keypace::app::Readout::new(&reference);

    session.on_input("ax", &mut readout);
    clock.advance(Duration::from_millis(600));
    session.on_tick(&mut readout);
    session.restart(&mut readout);

    assert_eq!(session.state(), &reset());
    assert_eq!(readout, keypace::app::Readout::new(&reference));
    assert_eq!(
        evaluate(&reference, session.input(), 0.0),
        evaluate(&reference, "", 0.0)
    );
}

#[test]
fn dark_mode_toggle_persists_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let mut app = App::new(
        ReferenceText::practice(),
        ManualClock::new(),
        FilePreferenceStore::with_path(&path),
        Some(Theme::Light),
        None,
    );
    assert_eq!(app.theme, Theme::Light);

    app.handle_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL));
    assert_eq!(app.theme, Theme::Dark);

    let reloaded = App::new(
        ReferenceText::practice(),
        ManualClock::new(),
        FilePreferenceStore::with_path(&path),
        Some(Theme::Light),
        None,
    );
    assert_eq!(reloaded.theme, Theme::Dark);
    assert_eq!(
        FilePreferenceStore::with_path(&path).load().dark_mode,
        Some(true)
    );
}
