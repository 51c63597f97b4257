use crate::commands::help::{Category, CommandHelp};
use crate::commands::registry::BuiltinCommand;
use crate::commands::Context;
use crate::errors::ShellResult;
use crate::style::{self, Style};
use crate::tokenizer::ArgVector;
use std::io::Write;

pub struct AyudaCommand;

static HELP: CommandHelp = CommandHelp {
    category: Category::Shell,
    usage: "ayuda [comando]",
    summary: "Muestra esta ayuda o la de un comando.",
    description: "Muestra la lista de comandos disponibles o la ayuda detallada de uno específico.",
    examples: &["ayuda", "ayuda calc", "ayuda buscar"],
    notes: &[
        "Sin argumentos: lista todos los comandos.",
        "Con argumento: muestra descripción detallada del comando indicado.",
    ],
};

const BANNER: &str = "\
╔══════════════════════════════════════════╗
║         EAFITos — Comandos Disponibles   ║
╚══════════════════════════════════════════╝";

const HEAVY_RULE: &str = "═══════════════════════════════════════";

impl AyudaCommand {
    fn general(&self, ctx: &mut Context<'_>) -> ShellResult<()> {
        let style = ctx.session.style();
        let registry = ctx.registry;

        writeln!(ctx.out)?;
        writeln!(ctx.out, "{}", style.paint2(style::CYAN, style::BOLD, BANNER))?;

        for category in Category::ALL {
            let mut commands = registry.iter().filter(|c| c.help().category == category).peekable();
            if commands.peek().is_none() {
                continue;
            }
            writeln!(ctx.out)?;
            writeln!(ctx.out, "{}", style.paint(style::YELLOW, &format!("  {}:", category.title())))?;
            for cmd in commands {
                let help = cmd.help();
                let args = help.usage.strip_prefix(cmd.name()).unwrap_or("").trim();
                writeln!(
                    ctx.out,
                    "    {} {:<16} {}",
                    style.paint(style::GREEN, &format!("{:<8}", cmd.name())),
                    args,
                    help.summary
                )?;
            }
        }

        writeln!(ctx.out)?;
        writeln!(
            ctx.out,
            "  {}{}{}",
            style.paint(style::DIM, "Tip: escribe "),
            style.paint(style::CYAN, "'ayuda <comando>'"),
            style.paint(style::DIM, " para ver detalles, uso y ejemplos.")
        )?;
        writeln!(ctx.out)?;
        Ok(())
    }

    fn detailed(name: &str, help: &CommandHelp, style: Style, out: &mut dyn Write) -> ShellResult<()> {
        writeln!(out)?;
        writeln!(out, "{}", style.paint2(style::CYAN, style::BOLD, HEAVY_RULE))?;
        writeln!(out, "{}{}", style.paint(style::BOLD, " Comando: "), style.paint(style::CYAN, name))?;
        writeln!(out, "{}", style.paint(style::CYAN, HEAVY_RULE))?;

        writeln!(out, "{}", style.paint(style::YELLOW, " Descripción:"))?;
        writeln!(out, "   {}", help.description)?;
        writeln!(out)?;

        writeln!(out, "{}", style.paint(style::YELLOW, " Uso:"))?;
        writeln!(out, "   {}", style.paint(style::GREEN, help.usage))?;
        writeln!(out)?;

        writeln!(out, "{}", style.paint(style::YELLOW, " Ejemplo(s):"))?;
        for example in help.examples {
            writeln!(out, "   {}", style.paint(style::GREEN_N, example))?;
        }
        writeln!(out)?;

        if !help.notes.is_empty() {
            writeln!(out, "{}", style.paint(style::YELLOW, " Notas:"))?;
            for note in help.notes {
                writeln!(out, "   {}", style.paint(style::DIM, note))?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

impl BuiltinCommand for AyudaCommand {
    fn name(&self) -> &'static str {
        "ayuda"
    }

    fn help(&self) -> &'static CommandHelp {
        &HELP
    }

    fn run(&self, args: &ArgVector<'_>, ctx: &mut Context<'_>) -> ShellResult<()> {
        let Some(topic) = args.get(1) else {
            return self.general(ctx);
        };

        let style = ctx.session.style();
        let registry = ctx.registry;
        match registry.find(topic) {
            Some(cmd) => Self::detailed(cmd.name(), cmd.help(), style, ctx.out),
            None => {
                writeln!(
                    ctx.out,
                    "{}{}",
                    style.paint(style::RED, "No existe ayuda para el comando: "),
                    style.paint(style::BOLD, &format!("'{}'", topic))
                )?;
                writeln!(
                    ctx.out,
                    "Escribe {} sin argumentos para ver todos los comandos.",
                    style.paint(style::CYAN, "'ayuda'")
                )?;
                Ok(())
            }
        }
    }
}
