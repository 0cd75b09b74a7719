// SPDX-License-Identifier: MIT OR Apache-2.0

//! Composing and writing log records.
//!
//! Every line a [`Logger`](crate::Logger) writes goes through this module.  The flow follows
//! a pre/post pattern:
//!
//! 1. The message body is rendered with [`render`] or [`render_fmt`], outside any lock
//! 2. A `*_pre` function creates a [`LogRecord`] carrying the prefix and, for ranked
//!    output, the tier tag
//! 3. The caller appends the body with [`write_body`]
//! 4. [`post`] writes the record to the sink
//!
//! Steps 2 to 4 run under the logger's lock, after the gate has been checked again.  A
//! message that fails the gate before step 1 is never rendered.
//!
//! # Errors
//!
//! Logging is best-effort.  [`post`] discards write and flush failures so a broken sink
//! never interrupts the program that is logging.  Build with the `prefixlog_internal`
//! feature to have discarded errors reported on stderr.

use crate::level::Tier;
use crate::log_record::LogRecord;
use crate::sink::LineMode;
use std::fmt::{Arguments, Display};
use std::io::Write;

/// Creates a record for a message at `tier`: the prefix followed by the tier tag.
pub fn tiered_pre(prefix: &str, tier: Tier) -> LogRecord {
    let mut record = LogRecord::new(Some(tier));
    record.log(prefix);
    record.log(tier.tag());
    record
}

/// Creates a record for output that is not severity-gated: just the prefix.
pub fn unranked_pre(prefix: &str) -> LogRecord {
    let mut record = LogRecord::new(None);
    record.log(prefix);
    record
}

/// Renders a message body.
pub fn render(message: impl Display) -> String {
    message.to_string()
}

/// Renders a message body from format arguments.
///
/// Bodies without substitutions skip the formatting machinery.
pub fn render_fmt(args: Arguments<'_>) -> String {
    match args.as_str() {
        Some(literal) => literal.to_string(),
        None => std::fmt::format(args),
    }
}

/// Appends a rendered body.
pub fn write_body(record: &mut LogRecord, body: String) {
    record.log_owned(body);
}

/// Appends a body straight from format arguments, for lines composed under the lock.
pub fn write_body_fmt(record: &mut LogRecord, args: Arguments<'_>) {
    match args.as_str() {
        Some(literal) => record.log(literal),
        None => record.log_owned(std::fmt::format(args)),
    }
}

/// Terminates the record according to `line_mode`.
pub fn finish(record: &mut LogRecord, line_mode: LineMode) {
    record.log(line_mode.terminator());
}

/// Writes the record to `sink` as a single write.
pub fn post<W: Write + ?Sized>(record: LogRecord, sink: &mut W) {
    let line = record.to_string();
    let result = sink.write_all(line.as_bytes()).and_then(|_| sink.flush());
    if let Err(_e) = result {
        #[cfg(feature = "prefixlog_internal")]
        match record.tier() {
            Some(tier) => eprintln!("prefixlog: discarded {tier} record: {_e}"),
            None => eprintln!("prefixlog: discarded unranked record: {_e}"),
        }
    }
}
