pub mod cli;
pub mod commands;
pub mod errors;
pub mod repl;
pub mod session;
pub mod signals;
pub mod style;
pub mod tokenizer;

pub use cli::Config;
use commands::BUILTINS;
use errors::ShellResult;
use repl::Exit;
use session::Session;
use std::io;
use style::Style;

/// Main entry point for the shell REPL on the process's stdin/stdout.
///
/// Signal handlers are armed before the first prompt is drawn.
pub fn run_shell(config: &Config) -> ShellResult<Exit> {
    let session = Session::new(&config.prompt, Style::new(config.color));
    signals::install(session.prompt_cell(), config.color)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    tracing::debug!(commands = BUILTINS.len(), "starting shell");
    repl::run(&session, &BUILTINS, &mut input, &mut out)
}
