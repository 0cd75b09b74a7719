// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record type.
//!
//! A [`LogRecord`] is one composed line: the logger's accumulated prefix, an optional tier
//! tag, the message body, and a terminator.  Parts are kept separately and only joined when
//! the record is written, so composing a record never concatenates strings.
//!
//! ```rust
//! use prefixlog::{LogRecord, Tier};
//!
//! let mut record = LogRecord::new(Some(Tier::Inform));
//! record.log("server: ");
//! record.log(Tier::Inform.tag());
//! record.log_owned(format!("listening on {}", 8080));
//! assert_eq!(record.to_string(), "server: INFORM: listening on 8080");
//! ```

use crate::level::Tier;
use std::fmt::{Debug, Display};

/**
A log record.

Records are built on the calling thread and handed to the dispatch engine, which writes
the parts to the sink in order.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LogRecord {
    pub(crate) parts: Vec<String>,
    tier: Option<Tier>,
}

impl LogRecord {
    /// An empty record.  `None` marks output that is not severity-gated.
    pub fn new(tier: Option<Tier>) -> Self {
        Self {
            parts: Vec::new(),
            tier,
        }
    }

    /**
    Append the message to the record.

    This is called in the case that a message is not already owned.
    */
    pub fn log(&mut self, message: &str) {
        if !message.is_empty() {
            self.parts.push(message.to_string());
        }
    }

    /// Append the message to the record, taking ownership of it.
    pub fn log_owned(&mut self, message: String) {
        if !message.is_empty() {
            self.parts.push(message);
        }
    }

    /// The tier this record was composed for, or `None` for unranked output.
    pub fn tier(&self) -> Option<Tier> {
        self.tier
    }
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for part in &self.parts {
            f.write_str(part)?;
        }
        Ok(())
    }
}
/*
Boilerplate notes for LogRecord:

IMPLEMENTED:
- Debug, Clone, PartialEq/Eq, Hash: derived
- Default: derived, an unranked empty record
- Display: the joined parts, exactly as they will be written

NOT IMPLEMENTED:
- Copy: owns heap data
- Ord/PartialOrd: no meaningful ordering for log records
- From/Into: no obvious conversions
*/
