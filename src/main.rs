use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    cursor::Show,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use keypace::{
    app::{App, Control},
    clock::{Clock, SystemClock},
    config::{FilePreferenceStore, PreferenceStore},
    runtime::{AppEvent, CrosstermEventSource, EventSource, Runner},
    text::ReferenceText,
    theme::{self, Theme},
    ui,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin, Write},
    path::PathBuf,
};

/// typing speed practice with live wpm and accuracy
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type the practice paragraph as fast and accurately as you can. Mistakes must be corrected before the run counts as complete."
)]
pub struct Cli {
    /// color theme for this run (the stored dark mode preference is left untouched)
    #[clap(short = 't', long, value_enum)]
    theme: Option<Theme>,

    /// preferences file to read and write instead of the platform default
    #[clap(long)]
    config: Option<PathBuf>,

    /// write diagnostics to this file
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// most verbose level written to the log file
    #[clap(long, default_value = "info")]
    log_level: tracing::Level,
}

impl Cli {
    fn preference_store(&self) -> FilePreferenceStore {
        self.config
            .as_ref()
            .map(FilePreferenceStore::with_path)
            .unwrap_or_default()
    }
}

/// Raw mode plus alternate screen for as long as it lives. Dropping it puts
/// the terminal back, including on early returns and panics.
struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
}

impl<W: Write> TerminalGuard<W> {
    fn new(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self {
            out,
            raw_mode: true,
        };
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, LeaveAlternateScreen, Show);
        if self.raw_mode {
            let _ = disable_raw_mode();
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    keypace::logging::init(cli.log_file.as_deref(), cli.log_level)?;

    let mut app = App::new(
        ReferenceText::practice(),
        SystemClock,
        cli.preference_store(),
        theme::ambient_theme(),
        cli.theme,
    );

    let guard = TerminalGuard::new(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let runner = Runner::new(CrosstermEventSource::new());
    let outcome = start_tui(&mut terminal, &mut app, &runner);
    drop(guard);

    if let Err(ref e) = outcome {
        tracing::error!(error = %e, "event loop failed");
    }
    outcome
}

fn start_tui<B: Backend, C: Clock, S: PreferenceStore, E: EventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App<C, S>,
    runner: &Runner<E>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| ui::draw(app, f))?;

    loop {
        let now = app.session.clock().now();
        match runner.step(now, app.session.next_refresh_due())? {
            AppEvent::Tick => {
                if app.on_tick() {
                    terminal.draw(|f| ui::draw(app, f))?;
                }
            }
            AppEvent::Resize => {
                terminal.draw(|f| ui::draw(app, f))?;
            }
            AppEvent::Key(key) => {
                if app.handle_key(key) == Control::Quit {
                    break;
                }
                terminal.draw(|f| ui::draw(app, f))?;
            }
        }
    }

    Ok(())
}
