// SPDX-License-Identifier: MIT OR Apache-2.0

//! Constructing a [`Logger`].
//!
//! A logger is configured once, up front.  There are two equivalent ways to do it:
//!
//! * chain setters on a [`LoggerBuilder`] and call [`LoggerBuilder::build`]
//! * collect [`LogOption`] values and hand them to [`Logger::with_options`]
//!
//! Either way the directives are applied in the order given.  A later directive for the same
//! setting replaces an earlier one, except [`LoggerBuilder::prefix`], which appends.
//!
//! ```
//! use prefixlog::{InMemorySink, LogOption, Logger, Verbosity};
//!
//! let sink = InMemorySink::new();
//! let logger = Logger::with_options([
//!     LogOption::output(sink.clone()),
//!     LogOption::prefix(["api"]),
//!     LogOption::level(Verbosity::WARN),
//!     LogOption::prefix(["v2"]),
//! ]);
//! assert_eq!(logger.get_prefix(), "api: v2: ");
//!
//! logger.warn("slow response");
//! logger.inform("not written");
//! assert_eq!(sink.contents(), "api: v2: WARN: slow response");
//! ```

use crate::level::Verbosity;
use crate::logger::Logger;
use crate::sink::{LineMode, Sink, default_sink};
use std::fmt::Debug;
use std::io::Write;

/// Written after every prefix segment.
pub const SEPARATOR: &str = ": ";

pub(crate) fn append_segments<I, S>(prefix: &mut String, segments: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for segment in segments {
        prefix.push_str(segment.as_ref());
        prefix.push_str(SEPARATOR);
    }
}

/**
Draft settings for a [`Logger`].

Defaults: enabled, writing to standard output, threshold [`Verbosity::MAX`], empty prefix,
[`LineMode::WithoutNewline`].
*/
pub struct LoggerBuilder {
    pub(crate) enabled: bool,
    pub(crate) sink: Sink,
    pub(crate) level: Verbosity,
    pub(crate) prefix: String,
    pub(crate) line_mode: LineMode,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            enabled: true,
            sink: default_sink(),
            level: Verbosity::MAX,
            prefix: String::new(),
            line_mode: LineMode::default(),
        }
    }
}

impl Debug for LoggerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("enabled", &self.enabled)
            .field("level", &self.level)
            .field("prefix", &self.prefix)
            .field("line_mode", &self.line_mode)
            .finish_non_exhaustive()
    }
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the logger writes anything at all.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Where the logger writes.
    pub fn output(mut self, output: impl Write + Send + 'static) -> Self {
        self.sink = Box::new(output);
        self
    }

    /// Appends each segment, followed by `": "`, to the prefix.
    pub fn prefix<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        append_segments(&mut self.prefix, segments);
        self
    }

    /**
    The initial threshold.

    Programs that take `-v` style flags typically pass [`Verbosity::from_flags`] here.
    */
    pub fn level(mut self, level: impl Into<Verbosity>) -> Self {
        self.level = level.into();
        self
    }

    pub fn line_mode(mut self, line_mode: LineMode) -> Self {
        self.line_mode = line_mode;
        self
    }

    /// Applies a functional option.
    pub fn apply(self, option: LogOption) -> Self {
        (option.0)(self)
    }

    pub fn build(self) -> Logger {
        Logger::from_builder(self)
    }
}

/**
A single configuration directive, usable with [`Logger::with_options`].

Options are values, so a program can assemble them in one place (say, from its command line)
and construct the logger somewhere else.
*/
pub struct LogOption(Box<dyn FnOnce(LoggerBuilder) -> LoggerBuilder + Send>);

impl Debug for LogOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("LogOption")
    }
}

impl LogOption {
    /// An option running arbitrary code against the draft.
    pub fn custom(f: impl FnOnce(LoggerBuilder) -> LoggerBuilder + Send + 'static) -> Self {
        LogOption(Box::new(f))
    }

    pub fn enabled(enabled: bool) -> Self {
        Self::custom(move |b| b.enabled(enabled))
    }

    pub fn output(output: impl Write + Send + 'static) -> Self {
        Self::custom(move |b| b.output(output))
    }

    pub fn prefix<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments: Vec<String> = segments
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        Self::custom(move |b| b.prefix(segments))
    }

    pub fn level(level: impl Into<Verbosity>) -> Self {
        let level = level.into();
        Self::custom(move |b| b.level(level))
    }

    pub fn line_mode(line_mode: LineMode) -> Self {
        Self::custom(move |b| b.line_mode(line_mode))
    }
}
