// SPDX-License-Identifier: MIT OR Apache-2.0

//! Write targets for a [`Logger`](crate::Logger).
//!
//! A sink is anything implementing [`std::io::Write`] that can move between threads.  The
//! logger only ever appends to it.  By default a logger writes to standard output; on
//! `wasm32` targets, where there is no standard output, it writes to the browser console
//! instead.

use std::io::Write;

/// The write target owned by a logger.
pub type Sink = Box<dyn Write + Send>;

/// Controls whether caller messages end with a newline.
///
/// Framing lines written by [`Logger::begin`](crate::Logger::begin) and
/// [`Logger::end`](crate::Logger::end) always end with a newline; this only affects
/// messages whose text the caller supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineMode {
    /// Write the message as given.  Callers add `\n` themselves.
    #[default]
    WithoutNewline,
    /// Append `\n` after every message.
    WithNewline,
}

impl LineMode {
    pub(crate) const fn terminator(self) -> &'static str {
        match self {
            LineMode::WithoutNewline => "",
            LineMode::WithNewline => "\n",
        }
    }
}

/// The sink a logger uses when none is configured.
pub fn default_sink() -> Sink {
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(std::io::stdout())
    }
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(ConsoleWriter::default())
    }
}

/**
Writes complete lines to the browser console.

The console has no notion of a partial line, so bytes are held until a `\n` arrives.
*/
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
struct ConsoleWriter {
    pending: Vec<u8>,
}

#[cfg(target_arch = "wasm32")]
impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.pending.extend_from_slice(buf);
        while let Some(pos) = self.pending.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            let msg = String::from_utf8_lossy(&line[..line.len() - 1]).into_owned();
            web_sys::console::log_1(&msg.into());
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        if !self.pending.is_empty() {
            let msg = String::from_utf8_lossy(&self.pending).into_owned();
            web_sys::console::log_1(&msg.into());
            self.pending.clear();
        }
        Ok(())
    }
}
