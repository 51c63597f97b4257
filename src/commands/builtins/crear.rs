use crate::commands::confirm::confirm;
use crate::commands::help::{Category, CommandHelp};
use crate::commands::registry::BuiltinCommand;
use crate::commands::Context;
use crate::errors::{ShellError, ShellResult};
use crate::style;
use crate::tokenizer::ArgVector;
use std::fs::File;
use std::path::Path;

pub struct CrearCommand;

static HELP: CommandHelp = CommandHelp {
    category: Category::Files,
    usage: "crear <archivo>",
    summary: "Crea un archivo nuevo.",
    description: "Crea un archivo vacío. Si ya existe, pide confirmación antes de sobrescribirlo.",
    examples: &["crear nuevo.txt"],
    notes: &["Si el archivo existe, verás una pregunta de confirmación (s/n)."],
};

impl BuiltinCommand for CrearCommand {
    fn name(&self) -> &'static str {
        "crear"
    }

    fn help(&self) -> &'static CommandHelp {
        &HELP
    }

    fn run(&self, args: &ArgVector<'_>, ctx: &mut Context<'_>) -> ShellResult<()> {
        let name = args
            .get(1)
            .ok_or_else(|| ShellError::Usage("crear <nombre_archivo>".to_string()))?;

        if Path::new(name).exists() {
            let question = format!("El archivo '{}' ya existe. ¿Desea sobrescribirlo?", name);
            if !confirm(ctx, &question)? {
                writeln!(ctx.out, "Operación cancelada. Volviendo al menú principal.")?;
                return Ok(());
            }
        }

        File::create(name).map_err(|e| {
            ShellError::Command(format!("No se pudo crear o sobrescribir el archivo '{}': {}", name, e))
        })?;

        let style = ctx.session.style();
        writeln!(
            ctx.out,
            "{}",
            style.paint(style::GREEN, &format!("Archivo '{}' creado correctamente.", name))
        )?;
        Ok(())
    }
}
