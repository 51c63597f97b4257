use super::Context;
use crate::errors::{ShellError, ShellResult};

/// Ask a yes/no question on the console. Only an answer starting with
/// `s` or `S` counts as yes.
pub fn confirm(ctx: &mut Context<'_>, question: &str) -> ShellResult<bool> {
    write!(ctx.out, "{} (s/n): ", question)?;
    ctx.out.flush()?;

    let mut answer = String::new();
    if ctx.input.read_line(&mut answer)? == 0 {
        writeln!(ctx.out)?;
        return Err(ShellError::Command(
            "No se pudo leer la respuesta. Operación cancelada.".to_string(),
        ));
    }

    Ok(matches!(answer.trim_start().chars().next(), Some('s' | 'S')))
}
