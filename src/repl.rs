use crate::commands::{dispatch, BuiltinRegistry, Context, Outcome};
use crate::errors::{ShellError, ShellResult};
use crate::session::Session;
use crate::style;
use crate::tokenizer::tokenize;
use std::io::{BufRead, ErrorKind, Write};

const INITIAL_LINE_CAPACITY: usize = 128;

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Input was exhausted
    EndOfInput,
    /// A command asked for the process to end with this status
    Requested(i32),
}

/// Draw the prompt and flush so it shows before the read blocks
pub fn render_prompt(session: &Session, out: &mut dyn Write) -> ShellResult<()> {
    let style = session.style();
    write!(out, "{}> ", style.paint2(style::CYAN, style::BOLD, &session.prompt()))?;
    out.flush()?;
    Ok(())
}

/// Read one line, newline included. `None` means end of input.
///
/// The buffer grows as needed; there is no length limit. Every growth step
/// is fallible: if it fails, the rest of the line is discarded and
/// `OutOfMemory` is returned, so the next call starts on a fresh line.
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn read_line(input: &mut dyn BufRead) -> ShellResult<Option<String>> {
    let mut buf = Vec::new();
    buf.try_reserve(INITIAL_LINE_CAPACITY)
        .map_err(|e| ShellError::OutOfMemory(format!("line buffer: {}", e)))?;

    loop {
        let chunk = match input.fill_buf() {
            Ok(chunk) => chunk,
            // a handled signal never looks like end of input
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if chunk.is_empty() {
            break;
        }

        let (take, line_done) = match chunk.iter().position(|&b| b == b'\n') {
            Some(newline) => (newline + 1, true),
            None => (chunk.len(), false),
        };

        if let Err(e) = buf.try_reserve(take) {
            input.consume(take);
            if !line_done {
                discard_line(input)?;
            }
            return Err(ShellError::OutOfMemory(format!("line buffer: {}", e)));
        }
        buf.extend_from_slice(&chunk[..take]);
        input.consume(take);

        if line_done {
            break;
        }
    }

    if buf.is_empty() {
        return Ok(None);
    }

    let line = match String::from_utf8(buf) {
        Ok(line) => line,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    };
    Ok(Some(line))
}

/// Skip input up to and including the next newline without buffering it
fn discard_line(input: &mut dyn BufRead) -> ShellResult<()> {
    loop {
        let chunk = match input.fill_buf() {
            Ok(chunk) => chunk,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if chunk.is_empty() {
            return Ok(());
        }
        match chunk.iter().position(|&b| b == b'\n') {
            Some(newline) => {
                input.consume(newline + 1);
                return Ok(());
            }
            None => {
                let len = chunk.len();
                input.consume(len);
            }
        }
    }
}

/// Tokenize one line and dispatch it
pub fn handle_line(line: &str, ctx: &mut Context<'_>) -> ShellResult<Outcome> {
    let args = tokenize(line)?;
    dispatch(&args, ctx)
}

/// Run the read-eval-print loop until input runs out or a command asks to exit.
///
/// The line and its tokens live for exactly one iteration. Errors that only
/// affect one iteration are reported on stderr and the loop goes on; errors
/// reading the input or drawing the prompt end the loop.
pub fn run(
    session: &Session,
    registry: &BuiltinRegistry,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> ShellResult<Exit> {
    loop {
        render_prompt(session, out)?;

        let line = match read_line(input) {
            Ok(Some(line)) => line,
            Ok(None) => {
                writeln!(out)?;
                out.flush()?;
                tracing::info!("end of input");
                return Ok(Exit::EndOfInput);
            }
            Err(e @ ShellError::OutOfMemory(_)) => {
                tracing::warn!(error = %e, "dropping input line");
                eprintln!("{}", e);
                continue;
            }
            Err(e) => return Err(e),
        };

        let mut ctx = Context {
            session,
            registry,
            input: &mut *input,
            out: &mut *out,
        };
        match handle_line(&line, &mut ctx) {
            Ok(Outcome::Exit(code)) => {
                out.flush()?;
                tracing::info!(code, "exit requested");
                return Ok(Exit::Requested(code));
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "iteration aborted");
                eprintln!("{}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor};

    #[test]
    fn read_line_keeps_the_newline() {
        let mut input = Cursor::new(b"calc 1 + 2\nlistar\n".to_vec());
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("calc 1 + 2\n"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("listar\n"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn last_line_without_newline_is_still_returned() {
        let mut input = Cursor::new(b"salir".to_vec());
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("salir"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn long_lines_are_not_truncated() {
        let long = format!("buscar {} x\n", "a".repeat(10_000));
        let mut input = Cursor::new(long.clone().into_bytes());
        assert_eq!(read_line(&mut input).unwrap(), Some(long));
    }

    #[test]
    fn line_spanning_many_buffer_fills_is_read_whole() {
        let long = format!("leer {}\nsalir\n", "b".repeat(1_000));
        let mut input = BufReader::with_capacity(16, long.as_bytes());
        let first = read_line(&mut input).unwrap().unwrap();
        assert_eq!(first.len(), 1_006);
        assert!(first.ends_with("b\n"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("salir\n"));
    }

    #[test]
    fn discard_line_stops_after_the_newline() {
        let mut input = BufReader::with_capacity(4, &b"basura larga\ncalc 1 + 1\n"[..]);
        discard_line(&mut input).unwrap();
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("calc 1 + 1\n"));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut input = Cursor::new(vec![b'l', 0xff, b'\n']);
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("l\u{fffd}\n"));
    }

    #[test]
    fn prompt_render_is_text_and_marker() {
        let session = Session::new("EAFITos", style::Style::plain());
        let mut out = Vec::new();
        render_prompt(&session, &mut out).unwrap();
        assert_eq!(out, b"EAFITos> ");
    }
}
