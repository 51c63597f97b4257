use crate::commands::help::{Category, CommandHelp};
use crate::commands::registry::BuiltinCommand;
use crate::commands::Context;
use crate::errors::ShellResult;
use crate::session::PROMPT_CAPACITY;
use crate::style;
use crate::tokenizer::ArgVector;

pub struct PromptCommand;

static HELP: CommandHelp = CommandHelp {
    category: Category::Shell,
    usage: "prompt <texto>",
    summary: "Cambia el indicador de la shell.",
    description: "Cambia el texto que aparece como indicador (prompt) de la shell.",
    examples: &["prompt MiShell", "prompt [SO]"],
    notes: &[
        "El prompt nuevo se mantiene durante toda la sesión.",
        "Máximo 63 caracteres; el resto se descarta.",
    ],
};

impl BuiltinCommand for PromptCommand {
    fn name(&self) -> &'static str {
        "prompt"
    }

    fn help(&self) -> &'static CommandHelp {
        &HELP
    }

    fn run(&self, args: &ArgVector<'_>, ctx: &mut Context<'_>) -> ShellResult<()> {
        let style = ctx.session.style();

        if args.params().is_empty() {
            writeln!(ctx.out, "{}prompt <nuevo_texto>", style.paint(style::YELLOW, "Uso: "))?;
            writeln!(
                ctx.out,
                "{}",
                style.paint(style::DIM, &format!("Prompt actual: '{}'", ctx.session.prompt()))
            )?;
            return Ok(());
        }

        let requested = args.params().join(" ");
        let stored = ctx.session.set_prompt(&requested);
        if stored.len() < requested.len() {
            tracing::debug!(max = PROMPT_CAPACITY, "prompt truncated");
        }

        writeln!(
            ctx.out,
            "{}{}",
            style.paint(style::GREEN, "Prompt actualizado a: "),
            style.paint(style::BOLD, &format!("'{}'", stored))
        )?;
        Ok(())
    }
}
