use crate::commands::help::{Category, CommandHelp};
use crate::commands::registry::BuiltinCommand;
use crate::commands::Context;
use crate::errors::ShellResult;
use crate::style;
use crate::tokenizer::ArgVector;

pub struct SalirCommand;

static HELP: CommandHelp = CommandHelp {
    category: Category::Shell,
    usage: "salir",
    summary: "Termina la sesión.",
    description: "Termina la sesión de EAFITos y cierra el programa.",
    examples: &["salir"],
    notes: &["Devuelve el código de salida 0 al sistema operativo."],
};

impl BuiltinCommand for SalirCommand {
    fn name(&self) -> &'static str {
        "salir"
    }

    fn help(&self) -> &'static CommandHelp {
        &HELP
    }

    fn run(&self, _args: &ArgVector<'_>, ctx: &mut Context<'_>) -> ShellResult<()> {
        let style = ctx.session.style();
        writeln!(ctx.out, "{}", style.paint(style::CYAN, "Saliendo de EAFITos. ¡Hasta pronto!"))?;
        Ok(())
    }

    fn exit_code(&self, _args: &ArgVector<'_>) -> Option<i32> {
        Some(0)
    }
}
