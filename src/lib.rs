// Library surface for headless/integration tests and reuse.
// The binary in main.rs only adds argument parsing and terminal setup.
pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod scorer;
pub mod session;
pub mod text;
pub mod theme;
pub mod ui;

pub use error::{Error, Result};
