use crate::commands::help::{Category, CommandHelp};
use crate::commands::registry::BuiltinCommand;
use crate::commands::Context;
use crate::errors::{ShellError, ShellResult};
use crate::style;
use crate::tokenizer::ArgVector;
use std::fs;

pub struct ListarCommand;

static HELP: CommandHelp = CommandHelp {
    category: Category::Files,
    usage: "listar",
    summary: "Lista archivos del directorio actual.",
    description: "Lista todos los archivos y directorios del directorio actual.",
    examples: &["listar"],
    notes: &["Equivalente a 'ls' en Unix. No acepta argumentos adicionales."],
};

const RULE: &str = " ─────────────────────────────";

impl BuiltinCommand for ListarCommand {
    fn name(&self) -> &'static str {
        "listar"
    }

    fn help(&self) -> &'static CommandHelp {
        &HELP
    }

    fn run(&self, _args: &ArgVector<'_>, ctx: &mut Context<'_>) -> ShellResult<()> {
        let style = ctx.session.style();

        let entries = fs::read_dir(".").map_err(|e| {
            ShellError::Command(format!("No se pudo abrir el directorio actual: {}", e))
        })?;

        // read_dir never yields "." or ".."
        let mut listing: Vec<(String, bool)> = entries
            .flatten()
            .map(|entry| {
                let is_dir = entry.path().is_dir();
                (entry.file_name().to_string_lossy().into_owned(), is_dir)
            })
            .collect();
        listing.sort();

        writeln!(ctx.out, "{}", style.paint(style::CYAN, " Contenido del directorio actual:"))?;
        writeln!(ctx.out, "{}", style.paint(style::DIM, RULE))?;
        for (name, is_dir) in &listing {
            if *is_dir {
                writeln!(ctx.out, "{}", style.paint(style::BLUE, &format!("  📁 {}/", name)))?;
            } else {
                writeln!(ctx.out, "  📄 {}", name)?;
            }
        }
        writeln!(ctx.out, "{}", style.paint(style::DIM, RULE))?;
        writeln!(
            ctx.out,
            "{}",
            style.paint(style::DIM, &format!("  Total: {} elemento(s)", listing.len()))
        )?;
        Ok(())
    }
}
