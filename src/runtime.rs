use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};

use crate::error::Error;

/// Cadence of the live readout refresh while a session is running
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(200);

/// How long the runner waits for input when nothing is scheduled
pub const IDLE_WAIT: Duration = Duration::from_secs(1);

/// Unified event type consumed by the app runner
#[derive(Clone, Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait EventSource: Send + 'static {
    /// Block for up to `timeout` waiting for an event.
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError>;
}

/// Production event source using crossterm
pub struct CrosstermEventSource {
    rx: Receiver<AppEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let forwarded = match event::read() {
                // Windows reports releases too
                Ok(CtEvent::Key(key)) if key.kind != KeyEventKind::Release => {
                    tx.send(AppEvent::Key(key))
                }
                Ok(CtEvent::Resize(_, _)) => tx.send(AppEvent::Resize),
                Ok(_) => Ok(()),
                Err(e) => {
                    tracing::error!(error = %e, "terminal event reader stopped");
                    break;
                }
            };
            if forwarded.is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Test event source for unit tests
pub struct TestEventSource {
    rx: Receiver<AppEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<AppEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// A cancellable fixed-period schedule.
///
/// `start` and `cancel` are idempotent, so at most one schedule is ever live.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next_due: Option<Instant>,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Begin firing one period from `now`. No-op when already running.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.period);
        }
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Returns true at most once per call when a deadline has passed.
    /// Missed periods are skipped rather than replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        let mut next = due + self.period;
        while next <= now {
            next += self.period;
        }
        self.next_due = Some(next);
        true
    }
}

/// Runner that advances the application one event/tick at a time
pub struct Runner<E: EventSource> {
    event_source: E,
    idle_wait: Duration,
}

impl<E: EventSource> Runner<E> {
    pub fn new(event_source: E) -> Self {
        Self::with_idle_wait(event_source, IDLE_WAIT)
    }

    pub fn with_idle_wait(event_source: E, idle_wait: Duration) -> Self {
        Self {
            event_source,
            idle_wait,
        }
    }

    /// Blocks until the next event or `deadline`, whichever comes first,
    /// and returns Tick when nothing arrived in time. Fails once the event
    /// source has gone away, since no further input can arrive.
    pub fn step(&self, now: Instant, deadline: Option<Instant>) -> crate::Result<AppEvent> {
        let timeout = deadline
            .map(|d| d.saturating_duration_since(now))
            .unwrap_or(self.idle_wait);

        match self.event_source.recv_timeout(timeout) {
            Ok(ev) => Ok(ev),
            Err(RecvTimeoutError::Timeout) => Ok(AppEvent::Tick),
            Err(RecvTimeoutError::Disconnected) => Err(Error::EventSourceClosed),
        }
    }
}
