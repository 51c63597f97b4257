pub mod builtins;
pub mod confirm;
pub mod help;
pub mod registry;

use crate::errors::ShellResult;
use crate::session::Session;
use crate::style;
use crate::tokenizer::ArgVector;
use std::io::{BufRead, Write};

pub use help::{Category, CommandHelp};
pub use registry::{report_error, BuiltinCommand, BuiltinRegistry, BUILTINS};

/// What a command sees while it runs: the session, the registry it was
/// found in, and the console.
pub struct Context<'a> {
    pub session: &'a Session,
    pub registry: &'a BuiltinRegistry,
    /// Shared with the REPL so confirmations read from the same stream
    pub input: &'a mut dyn BufRead,
    pub out: &'a mut dyn Write,
}

/// Result of dispatching one argument vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Blank line, nothing ran
    Empty,
    /// A registered command ran to completion
    Ran,
    /// No command with that name
    Unknown,
    /// The command asked for the process to end with this status
    Exit(i32),
}

/// Resolve args[0] against the registry and run the matching command
pub fn dispatch(args: &ArgVector<'_>, ctx: &mut Context<'_>) -> ShellResult<Outcome> {
    let Some(name) = args.command() else {
        return Ok(Outcome::Empty);
    };

    let registry = ctx.registry;
    match registry.find(name) {
        Some(cmd) => {
            tracing::debug!(command = name, argc = args.len(), "dispatching");
            cmd.execute(args, ctx);
            Ok(match cmd.exit_code(args) {
                Some(code) => Outcome::Exit(code),
                None => Outcome::Ran,
            })
        }
        None => {
            tracing::debug!(command = name, "unknown command");
            report_unknown(name, ctx)?;
            Ok(Outcome::Unknown)
        }
    }
}

fn report_unknown(name: &str, ctx: &mut Context<'_>) -> ShellResult<()> {
    let style = ctx.session.style();
    writeln!(
        ctx.out,
        "{}{}",
        style.paint(style::RED, "Comando desconocido: "),
        style.paint(style::BOLD, name)
    )?;
    writeln!(
        ctx.out,
        "Escribe {} para ver los comandos disponibles.",
        style.paint(style::CYAN, "'ayuda'")
    )?;
    Ok(())
}
