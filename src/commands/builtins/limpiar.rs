use crate::commands::help::{Category, CommandHelp};
use crate::commands::registry::BuiltinCommand;
use crate::commands::Context;
use crate::errors::ShellResult;
use crate::tokenizer::ArgVector;

/// Erase screen, erase scrollback, cursor home
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[3J\x1b[H";

pub struct LimpiarCommand;

static HELP: CommandHelp = CommandHelp {
    category: Category::System,
    usage: "limpiar",
    summary: "Limpia la pantalla.",
    description: "Limpia la pantalla de la terminal.",
    examples: &["limpiar"],
    notes: &["Usa secuencias de escape ANSI. Equivalente a 'clear' en Unix."],
};

impl BuiltinCommand for LimpiarCommand {
    fn name(&self) -> &'static str {
        "limpiar"
    }

    fn help(&self) -> &'static CommandHelp {
        &HELP
    }

    fn run(&self, _args: &ArgVector<'_>, ctx: &mut Context<'_>) -> ShellResult<()> {
        ctx.out.write_all(CLEAR_SCREEN.as_bytes())?;
        ctx.out.flush()?;
        Ok(())
    }
}
