mod args;
mod commands;
mod inputs;
mod repl;
pub(crate) mod theme;
mod timeline;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use args::CliArgs;
pub use repl::{AppState, Mode, run_repl};
