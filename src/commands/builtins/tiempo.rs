use crate::commands::help::{Category, CommandHelp};
use crate::commands::registry::BuiltinCommand;
use crate::commands::Context;
use crate::errors::ShellResult;
use crate::style;
use crate::tokenizer::ArgVector;
use chrono::Local;

pub struct TiempoCommand;

static HELP: CommandHelp = CommandHelp {
    category: Category::System,
    usage: "tiempo",
    summary: "Muestra la fecha y hora actual.",
    description: "Muestra la fecha y hora actual del sistema.",
    examples: &["tiempo"],
    notes: &["Usa la hora local del sistema operativo. No acepta argumentos."],
};

const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

impl BuiltinCommand for TiempoCommand {
    fn name(&self) -> &'static str {
        "tiempo"
    }

    fn help(&self) -> &'static CommandHelp {
        &HELP
    }

    fn run(&self, _args: &ArgVector<'_>, ctx: &mut Context<'_>) -> ShellResult<()> {
        let style = ctx.session.style();
        let now = Local::now().format(TIMESTAMP_FORMAT).to_string();
        writeln!(
            ctx.out,
            "  {}{}",
            style.paint(style::CYAN, "Fecha y Hora del Sistema: "),
            style.paint(style::BOLD, &now)
        )?;
        Ok(())
    }
}
