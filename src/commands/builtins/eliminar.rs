use crate::commands::confirm::confirm;
use crate::commands::help::{Category, CommandHelp};
use crate::commands::registry::BuiltinCommand;
use crate::commands::Context;
use crate::errors::{ShellError, ShellResult};
use crate::style;
use crate::tokenizer::ArgVector;
use std::fs;
use std::path::Path;

pub struct EliminarCommand;

static HELP: CommandHelp = CommandHelp {
    category: Category::Files,
    usage: "eliminar <archivo>",
    summary: "Elimina un archivo con confirmación.",
    description: "Elimina un archivo del sistema con confirmación previa.",
    examples: &["eliminar viejo.txt"],
    notes: &["Siempre pide confirmación antes de borrar. La operación es irreversible."],
};

impl BuiltinCommand for EliminarCommand {
    fn name(&self) -> &'static str {
        "eliminar"
    }

    fn help(&self) -> &'static CommandHelp {
        &HELP
    }

    fn run(&self, args: &ArgVector<'_>, ctx: &mut Context<'_>) -> ShellResult<()> {
        let name = args
            .get(1)
            .ok_or_else(|| ShellError::Usage("eliminar <nombre_archivo>".to_string()))?;

        let path = Path::new(name);
        if !path.is_file() {
            return Err(ShellError::Command(format!(
                "El archivo '{}' no existe o no es un archivo regular.",
                name
            )));
        }

        let question = format!("¿Está seguro de que desea eliminar '{}'?", name);
        if !confirm(ctx, &question)? {
            writeln!(ctx.out, "Operación cancelada. El archivo no fue eliminado.")?;
            return Ok(());
        }

        fs::remove_file(path)
            .map_err(|e| ShellError::Command(format!("No se pudo eliminar '{}': {}", name, e)))?;

        let style = ctx.session.style();
        writeln!(
            ctx.out,
            "{}",
            style.paint(style::GREEN, &format!("Archivo '{}' eliminado correctamente.", name))
        )?;
        Ok(())
    }
}
