use crate::commands::help::{Category, CommandHelp};
use crate::commands::registry::BuiltinCommand;
use crate::commands::Context;
use crate::errors::{ShellError, ShellResult};
use crate::style;
use crate::tokenizer::ArgVector;
use std::fs;

pub struct BuscarCommand;

static HELP: CommandHelp = CommandHelp {
    category: Category::Files,
    usage: "buscar <texto> <archivo>",
    summary: "Busca texto dentro de un archivo.",
    description: "Busca una cadena de texto dentro de un archivo línea por línea.",
    examples: &["buscar hola notas.txt"],
    notes: &[
        "Muestra el número de línea y el contenido donde se encontró el texto.",
        "La búsqueda distingue mayúsculas de minúsculas.",
    ],
};

/// Lines of `contents` containing `needle`, with 1-based line numbers
pub fn find_matches<'a>(contents: &'a str, needle: &str) -> Vec<(usize, &'a str)> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| line.contains(needle))
        .map(|(index, line)| (index + 1, line))
        .collect()
}

impl BuiltinCommand for BuscarCommand {
    fn name(&self) -> &'static str {
        "buscar"
    }

    fn help(&self) -> &'static CommandHelp {
        &HELP
    }

    fn run(&self, args: &ArgVector<'_>, ctx: &mut Context<'_>) -> ShellResult<()> {
        let (Some(needle), Some(path)) = (args.get(1), args.get(2)) else {
            return Err(ShellError::Usage("buscar <texto> <nombre_archivo>".to_string()));
        };

        let bytes = fs::read(path).map_err(|_| {
            ShellError::Command(format!("No se pudo abrir '{}'. Verifique que exista.", path))
        })?;
        let contents = String::from_utf8_lossy(&bytes);

        let style = ctx.session.style();
        let matches = find_matches(&contents, needle);
        if matches.is_empty() {
            writeln!(ctx.out, "No se encontró '{}' en '{}'.", needle, path)?;
            return Ok(());
        }

        for (number, line) in &matches {
            writeln!(ctx.out, "  {}: {}", style.paint(style::YELLOW, &number.to_string()), line)?;
        }
        writeln!(
            ctx.out,
            "{}",
            style.paint(style::DIM, &format!("  {} coincidencia(s) en '{}'", matches.len(), path))
        )?;
        Ok(())
    }
}
