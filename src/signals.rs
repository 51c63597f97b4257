//! Ctrl+C / Ctrl+Z interception.
//!
//! Neither signal stops the shell. The handlers print a notice and redraw
//! the prompt using only `write(2)` on a stack buffer: no allocation, no
//! locks, no buffered stdout. Handlers are installed with `SA_RESTART` so a
//! blocked read resumes instead of failing.

use crate::errors::{ShellError, ShellResult};
use crate::session::{PromptCell, PROMPT_CAPACITY};
use crate::style;
use once_cell::sync::OnceCell;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Prompt seen by the handlers, set once by `install`
static PROMPT: OnceCell<Arc<PromptCell>> = OnceCell::new();
static COLOR: AtomicBool = AtomicBool::new(true);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Interrupt,
    Suspend,
}

impl Notice {
    fn text(self, color: bool) -> &'static [u8] {
        match (self, color) {
            (Notice::Interrupt, true) => concat!(
                "\n\x1b[1;33m[Ctrl+C]\x1b[0m",
                " Usa 'salir' para terminar la shell.\n"
            )
            .as_bytes(),
            (Notice::Interrupt, false) => b"\n[Ctrl+C] Usa 'salir' para terminar la shell.\n",
            (Notice::Suspend, true) => concat!(
                "\n\x1b[1;33m[Ctrl+Z]\x1b[0m",
                " Suspensión de procesos no disponible en EAFITos.\n"
            )
            .as_bytes(),
            (Notice::Suspend, false) => {
                "\n[Ctrl+Z] Suspensión de procesos no disponible en EAFITos.\n".as_bytes()
            }
        }
    }
}

/// Large enough for the longest notice, the color codes and a full prompt
pub const NOTICE_BUF_LEN: usize = 256;

const PROMPT_SUFFIX: &[u8] = b"> ";

/// Build the notice followed by the redrawn prompt into `buf`.
///
/// Runs inside the signal handler, so it only copies bytes.
pub fn compose(notice: Notice, prompt: &PromptCell, color: bool, buf: &mut [u8; NOTICE_BUF_LEN]) -> usize {
    let mut prompt_bytes = [0u8; PROMPT_CAPACITY];
    let prompt_len = prompt.snapshot(&mut prompt_bytes);

    let mut len = 0;
    let mut push = |bytes: &[u8]| {
        let take = bytes.len().min(NOTICE_BUF_LEN - len);
        buf[len..len + take].copy_from_slice(&bytes[..take]);
        len += take;
    };

    push(notice.text(color));
    if color {
        push(style::CYAN.as_bytes());
    }
    push(&prompt_bytes[..prompt_len]);
    if color {
        push(style::RESET.as_bytes());
    }
    push(PROMPT_SUFFIX);
    len
}

/// Write all of `bytes` to stdout with raw `write(2)` calls
fn write_stdout(mut bytes: &[u8]) {
    while !bytes.is_empty() {
        // SAFETY: the pointer and length describe a live slice
        let written = unsafe { libc::write(libc::STDOUT_FILENO, bytes.as_ptr().cast(), bytes.len()) };
        if written < 0 {
            if io::Error::last_os_error().kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return;
        }
        if written == 0 {
            return;
        }
        bytes = &bytes[written as usize..];
    }
}

fn notify(notice: Notice) {
    let Some(prompt) = PROMPT.get() else {
        return;
    };
    let mut buf = [0u8; NOTICE_BUF_LEN];
    let len = compose(notice, prompt, COLOR.load(Ordering::Relaxed), &mut buf);
    write_stdout(&buf[..len]);
}

extern "C" fn on_interrupt(_sig: libc::c_int) {
    notify(Notice::Interrupt);
}

extern "C" fn on_suspend(_sig: libc::c_int) {
    notify(Notice::Suspend);
}

fn install_handler(signal: libc::c_int, handler: extern "C" fn(libc::c_int)) -> io::Result<()> {
    // SAFETY: the sigaction struct is fully initialised before use and the
    // handler only performs async-signal-safe work
    unsafe {
        let mut action: libc::sigaction = std::mem::zeroed();
        action.sa_sigaction = handler as libc::sighandler_t;
        action.sa_flags = libc::SA_RESTART;
        if libc::sigemptyset(&mut action.sa_mask) != 0 {
            return Err(io::Error::last_os_error());
        }
        if libc::sigaction(signal, &action, std::ptr::null_mut()) != 0 {
            return Err(io::Error::last_os_error());
        }
    }
    Ok(())
}

/// Arm both handlers. Must run before the first read from stdin.
///
/// The prompt handle is fixed by the first call; later calls only refresh
/// the color choice and re-install the handlers.
pub fn install(prompt: Arc<PromptCell>, color: bool) -> ShellResult<()> {
    COLOR.store(color, Ordering::Relaxed);
    if PROMPT.set(prompt).is_err() {
        tracing::debug!("signal prompt handle already set");
    }

    install_handler(libc::SIGINT, on_interrupt)
        .map_err(|e| ShellError::Signal(format!("SIGINT: {}", e)))?;
    install_handler(libc::SIGTSTP, on_suspend)
        .map_err(|e| ShellError::Signal(format!("SIGTSTP: {}", e)))?;

    tracing::info!("signal handlers installed");
    Ok(())
}
