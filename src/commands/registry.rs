use super::help::CommandHelp;
use super::Context;
use crate::errors::{ShellError, ShellResult};
use crate::style;
use crate::tokenizer::ArgVector;
use once_cell::sync::Lazy;

/// Trait that all builtin commands implement
pub trait BuiltinCommand: Send + Sync {
    /// The command name (e.g., "listar", "calc")
    fn name(&self) -> &'static str;

    /// Help entry shown by `ayuda`
    fn help(&self) -> &'static CommandHelp;

    /// Command body. args[0] is the command name itself
    fn run(&self, args: &ArgVector<'_>, ctx: &mut Context<'_>) -> ShellResult<()>;

    /// Run the command and report any failure on the console.
    /// Errors stop here; the caller only learns that the command finished.
    fn execute(&self, args: &ArgVector<'_>, ctx: &mut Context<'_>) {
        if let Err(e) = self.run(args, ctx) {
            report_error(&e, ctx);
        }
    }

    /// Some(code) if the shell should terminate after this command
    fn exit_code(&self, _args: &ArgVector<'_>) -> Option<i32> {
        None
    }
}

/// Print a command-local error in the shell's format
pub fn report_error(err: &ShellError, ctx: &mut Context<'_>) {
    let style = ctx.session.style();
    let result = match err {
        ShellError::Usage(usage) => writeln!(ctx.out, "{}{}", style.paint(style::YELLOW, "Uso: "), usage),
        other => writeln!(ctx.out, "{} {}", style.paint(style::RED, "[ERROR]"), other),
    };
    if let Err(write_err) = result {
        tracing::warn!(error = %write_err, original = %err, "failed to report command error");
    }
}

/// Central registry for all builtin commands
pub struct BuiltinRegistry {
    commands: Vec<Box<dyn BuiltinCommand>>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Add a command. A second command with the same name replaces the first,
    /// so names stay unique.
    pub fn register<C: BuiltinCommand + 'static>(&mut self, cmd: C) {
        match self.commands.iter().position(|c| c.name() == cmd.name()) {
            Some(index) => {
                tracing::warn!(command = cmd.name(), "replacing already registered command");
                self.commands[index] = Box::new(cmd);
            }
            None => self.commands.push(Box::new(cmd)),
        }
    }

    /// Exact, case-sensitive lookup
    pub fn find(&self, name: &str) -> Option<&(dyn BuiltinCommand + 'static)> {
        self.commands
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Command names in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(dyn BuiltinCommand + 'static)> {
        self.commands.iter().map(|c| c.as_ref())
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global registry instance
pub static BUILTINS: Lazy<BuiltinRegistry> = Lazy::new(|| {
    let mut registry = BuiltinRegistry::new();

    registry.register(super::builtins::ListarCommand);
    registry.register(super::builtins::LeerCommand);
    registry.register(super::builtins::TiempoCommand);
    registry.register(super::builtins::CalcCommand);
    registry.register(super::builtins::AyudaCommand);
    registry.register(super::builtins::SalirCommand);
    registry.register(super::builtins::CrearCommand);
    registry.register(super::builtins::LimpiarCommand);
    registry.register(super::builtins::EliminarCommand);
    registry.register(super::builtins::BuscarCommand);
    registry.register(super::builtins::PromptCommand);

    registry
});
