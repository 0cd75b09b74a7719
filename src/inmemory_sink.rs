// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! This module provides a sink that captures log output in memory rather than writing it
//! to standard output, making it useful for:
//!
//! - Unit testing code that logs through a [`Logger`](crate::Logger)
//! - Programmatically examining log output
//! - Capturing logs where standard output is unavailable (e.g. WASM in browsers)
//!
//! ## Architecture
//!
//! An [`InMemorySink`] is a cheap handle around an `Arc<Mutex<Vec<u8>>>`.  Clone the handle,
//! give one clone to the logger, and keep the other to read back what was written.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

/// A sink that stores everything written to it.
///
/// # Example
///
/// ```rust
/// use prefixlog::{InMemorySink, Logger};
///
/// let sink = InMemorySink::new();
/// let logger = Logger::builder().output(sink.clone()).build();
///
/// logger.warn("disk almost full");
/// assert_eq!(sink.contents(), "WARN: disk almost full");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Clone: derived, and shares the buffer.  Two clones observe the same writes.
// - Default: derived, empty buffer
// - PartialEq/Eq/Hash: NOT implemented, handle identity vs contents is ambiguous
// - Display: NOT implemented, use contents()
// - Send/Sync: automatic through Arc<Mutex<_>>

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded lossily as UTF-8.  The buffer is kept.
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Returns everything written so far and clears the buffer.
    ///
    /// ```rust
    /// use prefixlog::{InMemorySink, Logger};
    ///
    /// let sink = InMemorySink::new();
    /// let logger = Logger::builder().output(sink.clone()).build();
    /// logger.print("first");
    /// assert_eq!(sink.drain(), "first");
    /// assert_eq!(sink.drain(), "");
    /// ```
    pub fn drain(&self) -> String {
        let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        let result = String::from_utf8_lossy(&buffer).into_owned();
        buffer.clear();
        result
    }

    /// Whether nothing has been written since creation or the last drain.
    pub fn is_empty(&self) -> bool {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// Writes the captured output to stderr (or the console on WASM) and clears the buffer.
    pub fn drain_to_console(&self) {
        let logs = self.drain();
        if logs.is_empty() {
            return;
        }
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&logs.into());
        #[cfg(not(target_arch = "wasm32"))]
        eprint!("{}", logs);
    }
}

impl Write for InMemorySink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
