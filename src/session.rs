//! Process-wide session state: the prompt text.
//!
//! The prompt is read from the REPL, from command handlers and from the
//! signal handlers. The signal path may preempt the REPL thread at any
//! point, so the storage is a fixed-capacity, double-buffered cell of
//! atomics: the writer fills the inactive slot and then publishes it with a
//! single store. A reader never observes a half-written value and never
//! takes a lock or allocates.

use crate::style::Style;
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::Arc;

/// Size of the prompt buffer including the terminator slot.
pub const MAX_PROMPT_LEN: usize = 64;

/// Longest prompt actually stored, in bytes.
pub const PROMPT_CAPACITY: usize = MAX_PROMPT_LEN - 1;

pub const DEFAULT_PROMPT: &str = "EAFITos";

struct Slot {
    len: AtomicUsize,
    bytes: [AtomicU8; PROMPT_CAPACITY],
}

impl Slot {
    fn empty() -> Self {
        Self {
            len: AtomicUsize::new(0),
            bytes: std::array::from_fn(|_| AtomicU8::new(0)),
        }
    }
}

/// Fixed-capacity prompt storage that is safe to read from a signal handler.
pub struct PromptCell {
    slots: [Slot; 2],
    active: AtomicUsize,
}

impl PromptCell {
    pub fn new(initial: &str) -> Self {
        let cell = Self {
            slots: [Slot::empty(), Slot::empty()],
            active: AtomicUsize::new(0),
        };
        cell.set(initial);
        cell
    }

    /// Replace the prompt, truncating to `PROMPT_CAPACITY` bytes on a char
    /// boundary. Returns the number of bytes stored.
    ///
    /// Only the REPL thread writes; readers may run at any time.
    pub fn set(&self, text: &str) -> usize {
        let stored = truncate_on_boundary(text, PROMPT_CAPACITY);
        let next = 1 - self.active.load(Ordering::Acquire);
        let slot = &self.slots[next];

        for (dst, src) in slot.bytes.iter().zip(stored.bytes()) {
            dst.store(src, Ordering::Relaxed);
        }
        slot.len.store(stored.len(), Ordering::Relaxed);
        self.active.store(next, Ordering::Release);
        stored.len()
    }

    /// Copy the current prompt into `buf` and return its length.
    ///
    /// No allocation, no locking: usable from a signal handler.
    pub fn snapshot(&self, buf: &mut [u8; PROMPT_CAPACITY]) -> usize {
        let slot = &self.slots[self.active.load(Ordering::Acquire)];
        let len = slot.len.load(Ordering::Relaxed).min(PROMPT_CAPACITY);
        for (dst, src) in buf.iter_mut().zip(slot.bytes.iter()).take(len) {
            *dst = src.load(Ordering::Relaxed);
        }
        len
    }

    /// Current prompt as an owned string, for normal (non-signal) callers.
    pub fn get(&self) -> String {
        let mut buf = [0u8; PROMPT_CAPACITY];
        let len = self.snapshot(&mut buf);
        String::from_utf8_lossy(&buf[..len]).into_owned()
    }
}

impl Default for PromptCell {
    fn default() -> Self {
        Self::new(DEFAULT_PROMPT)
    }
}

impl std::fmt::Debug for PromptCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PromptCell").field(&self.get()).finish()
    }
}

fn truncate_on_boundary(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Everything a command may read or mutate about the running shell.
#[derive(Debug, Clone)]
pub struct Session {
    prompt: Arc<PromptCell>,
    style: Style,
}

impl Session {
    pub fn new(prompt: &str, style: Style) -> Self {
        Self {
            prompt: Arc::new(PromptCell::new(prompt)),
            style,
        }
    }

    pub fn prompt(&self) -> String {
        self.prompt.get()
    }

    /// Replace the prompt and return the value actually stored.
    pub fn set_prompt(&self, text: &str) -> String {
        self.prompt.set(text);
        self.prompt.get()
    }

    /// Shared handle used by the signal path.
    pub fn prompt_cell(&self) -> Arc<PromptCell> {
        Arc::clone(&self.prompt)
    }

    pub fn style(&self) -> Style {
        self.style
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_PROMPT, Style::default())
    }
}
