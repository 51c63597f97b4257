use crate::commands::help::{Category, CommandHelp};
use crate::commands::registry::BuiltinCommand;
use crate::commands::Context;
use crate::errors::{ShellError, ShellResult};
use crate::style;
use crate::tokenizer::ArgVector;
use std::fs;

pub struct LeerCommand;

static HELP: CommandHelp = CommandHelp {
    category: Category::Files,
    usage: "leer <archivo>",
    summary: "Muestra el contenido de un archivo.",
    description: "Muestra el contenido completo de un archivo de texto en pantalla.",
    examples: &["leer README.md"],
    notes: &[
        "El archivo debe existir y ser legible.",
        "Similar al comando 'cat' de Unix.",
    ],
};

const RULE: &str = "─────────────────────────────────";

impl BuiltinCommand for LeerCommand {
    fn name(&self) -> &'static str {
        "leer"
    }

    fn help(&self) -> &'static CommandHelp {
        &HELP
    }

    fn run(&self, args: &ArgVector<'_>, ctx: &mut Context<'_>) -> ShellResult<()> {
        let path = args
            .get(1)
            .ok_or_else(|| ShellError::Usage("leer <nombre_archivo>".to_string()))?;

        let contents = fs::read(path).map_err(|_| {
            ShellError::Command(format!("No se pudo abrir '{}'. Verifique que exista.", path))
        })?;

        let style = ctx.session.style();
        writeln!(ctx.out)?;
        writeln!(ctx.out, "{}", style.paint(style::CYAN, &format!(" ── Contenido de '{}' ──", path)))?;
        writeln!(ctx.out, "{}", style.paint(style::DIM, RULE))?;
        ctx.out.write_all(&contents)?;
        writeln!(ctx.out)?;
        writeln!(ctx.out, "{}", style.paint(style::DIM, RULE))?;
        writeln!(ctx.out)?;
        Ok(())
    }
}
