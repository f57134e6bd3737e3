use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::clock::Clock;
use crate::config::{PreferenceStore, Preferences};
use crate::scorer::{Classification, EvaluationResult};
use crate::session::{FinalResult, Presenter, Session};
use crate::text::ReferenceText;
use crate::theme::Theme;

/// What the screen currently shows: the presenter side of a session
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    reference_len: usize,
    pub classifications: Vec<Classification>,
    pub words_per_minute: u32,
    pub accuracy_percent: u32,
    pub completion: Option<FinalResult>,
}

impl Readout {
    pub fn new(reference: &ReferenceText) -> Self {
        Self {
            reference_len: reference.len(),
            classifications: vec![Classification::Untyped; reference.len()],
            words_per_minute: 0,
            accuracy_percent: 100,
            completion: None,
        }
    }

    pub fn classification(&self, idx: usize) -> Classification {
        self.classifications
            .get(idx)
            .copied()
            .unwrap_or(Classification::Untyped)
    }

    /// Index of the next character to type
    pub fn cursor(&self) -> Option<usize> {
        self.classifications
            .iter()
            .position(|c| *c == Classification::Untyped)
    }
}

impl Presenter for Readout {
    fn show_progress(&mut self, result: &EvaluationResult) {
        self.classifications.clone_from(&result.classifications);
        self.words_per_minute = result.words_per_minute;
        self.accuracy_percent = result.accuracy_percent;
    }

    fn show_completion(&mut self, result: &FinalResult) {
        self.words_per_minute = result.words_per_minute;
        self.accuracy_percent = result.accuracy_percent;
        self.completion = Some(*result);
    }

    fn clear(&mut self) {
        self.classifications = vec![Classification::Untyped; self.reference_len];
        self.words_per_minute = 0;
        self.accuracy_percent = 100;
        self.completion = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct App<C: Clock, S: PreferenceStore> {
    pub session: Session<C>,
    pub readout: Readout,
    pub theme: Theme,
    prefs: Preferences,
    store: S,
}

impl<C: Clock, S: PreferenceStore> App<C, S> {
    /// `theme_override` wins over the stored preference for this run only.
    pub fn new(
        reference: ReferenceText,
        clock: C,
        store: S,
        ambient: Option<Theme>,
        theme_override: Option<Theme>,
    ) -> Self {
        let prefs = store.load();
        let theme = theme_override.unwrap_or_else(|| prefs.theme(ambient));
        tracing::debug!(%theme, stored = ?prefs.dark_mode, "theme resolved");

        Self {
            readout: Readout::new(&reference),
            session: Session::new(reference, clock),
            theme,
            prefs,
            store,
        }
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn is_finished(&self) -> bool {
        self.session.final_result().is_some()
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.prefs.dark_mode = Some(self.theme.is_dark());
        if let Err(e) = self.store.save(&self.prefs) {
            tracing::warn!(error = %e, "could not persist dark mode preference");
        }
        tracing::info!(theme = %self.theme, "theme toggled");
    }

    pub fn restart(&mut self) {
        self.session.restart(&mut self.readout);
    }

    pub fn on_tick(&mut self) -> bool {
        self.session.on_tick(&mut self.readout)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Char('c') if ctrl => return Control::Quit,
            KeyCode::Char('d') if ctrl => self.toggle_theme(),
            KeyCode::Char('r') if ctrl => self.restart(),
            KeyCode::Tab => self.restart(),
            KeyCode::Char('r') if self.is_finished() => self.restart(),
            KeyCode::Backspace => {
                self.session.backspace(&mut self.readout);
            }
            KeyCode::Char(c) if !ctrl => {
                self.session.type_char(c, &mut self.readout);
            }
            _ => {}
        }
        Control::Continue
    }
}
