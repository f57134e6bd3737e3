use std::time::Instant;

use crate::clock::Clock;
use crate::runtime::{Interval, REFRESH_INTERVAL};
use crate::scorer::{evaluate, EvaluationResult};
use crate::text::ReferenceText;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub started: bool,
    pub start_timestamp: Option<Instant>,
    /// Also the cursor position.
    pub total_typed: usize,
    pub correct_count: usize,
    pub error_count: usize,
    pub completed: bool,
}

impl SessionState {
    pub fn reset(&mut self) {
        *self = reset();
    }

    pub fn apply(&mut self, result: &EvaluationResult) {
        self.total_typed = result.total_typed;
        self.correct_count = result.correct_count;
        self.error_count = result.error_count;
        self.completed = result.is_complete;
    }
}

/// Initial state of a practice attempt
pub fn reset() -> SessionState {
    SessionState::default()
}

/// Metrics frozen at the moment the input matched the reference
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinalResult {
    pub words_per_minute: u32,
    pub accuracy_percent: u32,
    pub elapsed_secs: f64,
}

/// Whatever displays the session. The driver only ever pushes to it.
pub trait Presenter {
    fn show_progress(&mut self, result: &EvaluationResult);
    fn show_completion(&mut self, result: &FinalResult);
    /// Back to the initial readout: nothing typed, no summary.
    fn clear(&mut self);
}

/// Drives one practice attempt at a time: keystrokes and refresh ticks both
/// go through `evaluate`, results go to a `Presenter`.
#[derive(Debug)]
pub struct Session<C: Clock> {
    reference: ReferenceText,
    input: String,
    state: SessionState,
    refresh: Interval,
    last: EvaluationResult,
    final_result: Option<FinalResult>,
    locked: bool,
    clock: C,
}

impl<C: Clock> Session<C> {
    pub fn new(reference: ReferenceText, clock: C) -> Self {
        let last = EvaluationResult::untouched(&reference);
        Self {
            reference,
            input: String::new(),
            state: reset(),
            refresh: Interval::new(REFRESH_INTERVAL),
            last,
            final_result: None,
            locked: false,
            clock,
        }
    }

    pub fn reference(&self) -> &ReferenceText {
        &self.reference
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn last_result(&self) -> &EvaluationResult {
        &self.last
    }

    pub fn final_result(&self) -> Option<&FinalResult> {
        self.final_result.as_ref()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh.is_running()
    }

    pub fn next_refresh_due(&self) -> Option<Instant> {
        self.refresh.next_due()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.state
            .start_timestamp
            .map_or(0.0, |start| self.clock.secs_since(start))
    }

    /// Replace the whole input, as a text field would. Returns false when
    /// the session is locked and the edit was ignored.
    pub fn on_input<P: Presenter>(&mut self, new_input: &str, presenter: &mut P) -> bool {
        if self.locked {
            return false;
        }
        self.input = new_input.to_string();

        if !self.state.started && !self.input.is_empty() {
            let now = self.clock.now();
            self.state.started = true;
            self.state.start_timestamp = Some(now);
            self.refresh.start(now);
            tracing::info!(reference_len = self.reference.len(), "session started");
        }

        let elapsed = self.elapsed_secs();
        let result = evaluate(&self.reference, &self.input, elapsed);
        self.state.apply(&result);
        presenter.show_progress(&result);

        if result.is_complete {
            self.complete(&result, elapsed, presenter);
        }
        self.last = result;
        true
    }

    pub fn type_char<P: Presenter>(&mut self, c: char, presenter: &mut P) -> bool {
        if self.locked {
            return false;
        }
        let mut next = self.input.clone();
        next.push(c);
        self.on_input(&next, presenter)
    }

    pub fn backspace<P: Presenter>(&mut self, presenter: &mut P) -> bool {
        if self.locked || self.input.is_empty() {
            return false;
        }
        let mut next = self.input.clone();
        next.pop();
        self.on_input(&next, presenter)
    }

    /// Periodic refresh. Only does work while the refresh is running and due.
    pub fn on_tick<P: Presenter>(&mut self, presenter: &mut P) -> bool {
        if !self.refresh.poll(self.clock.now()) {
            return false;
        }
        let result = evaluate(&self.reference, &self.input, self.elapsed_secs());
        presenter.show_progress(&result);
        self.last = result;
        true
    }

    pub fn restart<P: Presenter>(&mut self, presenter: &mut P) {
        self.refresh.cancel();
        self.state.reset();
        self.input.clear();
        self.locked = false;
        self.final_result = None;
        self.last = EvaluationResult::untouched(&self.reference);
        presenter.clear();
        tracing::info!("session restarted");
    }

    fn complete<P: Presenter>(
        &mut self,
        result: &EvaluationResult,
        elapsed: f64,
        presenter: &mut P,
    ) {
        self.refresh.cancel();
        self.locked = true;

        let final_result = FinalResult {
            words_per_minute: result.words_per_minute,
            accuracy_percent: result.accuracy_percent,
            elapsed_secs: elapsed,
        };
        tracing::info!(
            wpm = final_result.words_per_minute,
            accuracy = final_result.accuracy_percent,
            elapsed_secs = final_result.elapsed_secs,
            "session completed"
        );
        presenter.show_completion(&final_result);
        self.final_result = Some(final_result);
    }
}
