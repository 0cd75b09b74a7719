// SPDX-License-Identifier: MIT OR Apache-2.0

//! The logger itself.
//!
//! A [`Logger`] owns a sink, an enabled flag, a [`Verbosity`] threshold and an accumulated
//! prefix.  Every line it writes is `prefix + tag + message`, where the tag names the tier
//! (`"WARN: "`) and is absent for unranked output.
//!
//! # Operations
//!
//! [`Logger::begin`] opens a timed operation.  It appends the calling function's name to the
//! prefix (once, if the same function calls it repeatedly) and writes the start time.
//! [`Logger::end`] writes the end time and the elapsed duration.  Operations don't nest; a
//! second `begin` restarts the clock and extends the prefix.
//!
//! ```
//! use prefixlog::{InMemorySink, Logger};
//!
//! fn handle_request(logger: &Logger) {
//!     let lg = logger.begin();
//!     lg.inform("request received\n");
//!     lg.end();
//! }
//!
//! let sink = InMemorySink::new();
//! let logger = Logger::builder().output(sink.clone()).prefix(["http"]).build();
//! handle_request(&logger);
//!
//! let out = sink.contents();
//! assert!(out.contains("BEGIN"));
//! assert!(out.contains("INFORM: request received"));
//! assert!(out.contains("Execution duration:"));
//! ```
//!
//! # Thread safety
//!
//! All state lives behind one mutex, so a `Logger` can be shared (for instance in an `Arc`)
//! and every method takes `&self`.  Each call writes its line with a single write while
//! holding the lock, so lines from different threads never interleave.  Message bodies are
//! formatted before the lock is taken, which means a `Display` impl may itself log.  The
//! gate, prefix, line mode and sink are all read under the lock that performs the write, so
//! a line never outlives a `disable` that returned before it was written.

use crate::caller;
use crate::config::{LogOption, LoggerBuilder, append_segments};
use crate::dispatch;
use crate::level::{Tier, Verbosity};
use crate::operation::OperationGuard;
use crate::sink::{LineMode, Sink};
use crate::sys::{Duration, Instant};
use chrono::{DateTime, Local, SecondsFormat};
use std::fmt::{Arguments, Debug, Display};
use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

struct State {
    enabled: bool,
    sink: Sink,
    level: Verbosity,
    line_mode: LineMode,
    prefix: String,
    last_caller: String,
    started: Instant,
    started_at: DateTime<Local>,
}

impl State {
    /// The gate.  `None` is unranked output, which only the enabled flag stops.
    fn admits(&self, tier: Option<Tier>) -> bool {
        self.enabled && tier.is_none_or(|tier| self.level.allows(tier))
    }

    /// Writes a framing line: unranked, always newline-terminated.
    fn frame_line(&mut self, args: Arguments<'_>) {
        if !self.enabled {
            return;
        }
        let mut record = dispatch::unranked_pre(&self.prefix);
        dispatch::write_body_fmt(&mut record, args);
        dispatch::finish(&mut record, LineMode::WithNewline);
        dispatch::post(record, &mut self.sink);
    }
}

fn rfc3339(time: &DateTime<Local>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/**
A leveled, prefix-scoped logger.

Build one with [`Logger::builder`], [`Logger::with_options`], or [`Logger::new`] for the
defaults (enabled, standard output, [`Verbosity::MAX`], no prefix).
*/
pub struct Logger {
    state: Mutex<State>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: implemented by hand, the sink is not Debug
// - Default: same as Logger::new()
// - Clone: NOT implemented, the sink is owned.  Share a logger with Arc instead.
// - PartialEq/Eq/Hash: NOT implemented, no meaningful equality for loggers
// - Send/Sync: automatic through Mutex<State> with a Send sink

impl Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("Logger")
            .field("enabled", &state.enabled)
            .field("level", &state.level)
            .field("line_mode", &state.line_mode)
            .field("prefix", &state.prefix)
            .finish_non_exhaustive()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates the plain and formatted entry points for each tier.
macro_rules! tier_methods {
    ($($tier:ident => $plain:ident, $formatted:ident;)*) => {
        $(
            #[doc = concat!("Writes `message` at [`Tier::", stringify!($tier), "`].")]
            pub fn $plain(&self, message: impl Display) {
                self.emit(Tier::$tier, message)
            }

            #[doc = concat!("Writes formatted arguments at [`Tier::", stringify!($tier), "`].")]
            pub fn $formatted(&self, args: Arguments<'_>) {
                self.emit_fmt(Tier::$tier, args)
            }
        )*
    };
}

impl Logger {
    /// A logger with the default configuration.
    pub fn new() -> Self {
        LoggerBuilder::default().build()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Builds a logger from functional options, applied in order.
    pub fn with_options(options: impl IntoIterator<Item = LogOption>) -> Self {
        options
            .into_iter()
            .fold(LoggerBuilder::default(), LoggerBuilder::apply)
            .build()
    }

    pub(crate) fn from_builder(builder: LoggerBuilder) -> Self {
        let now = Local::now();
        Self {
            state: Mutex::new(State {
                enabled: builder.enabled,
                sink: builder.sink,
                level: builder.level,
                line_mode: builder.line_mode,
                prefix: builder.prefix,
                last_caller: String::new(),
                started: Instant::now(),
                started_at: now,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn enable(&self) {
        self.lock().enabled = true;
    }

    pub fn disable(&self) {
        self.lock().enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.lock().enabled
    }

    /// Sends subsequent output to `output`.  The previous sink is dropped.
    pub fn set_output(&self, output: impl Write + Send + 'static) {
        self.replace_output(output);
    }

    /// Sends subsequent output to `output` and returns the previous sink.
    pub fn replace_output(&self, output: impl Write + Send + 'static) -> Sink {
        let mut state = self.lock();
        let _ = state.sink.flush();
        std::mem::replace(&mut state.sink, Box::new(output))
    }

    /// Sets the threshold.  Returns `self` for chaining.
    pub fn set_level(&self, level: impl Into<Verbosity>) -> &Self {
        self.lock().level = level.into();
        self
    }

    pub fn level(&self) -> Verbosity {
        self.lock().level
    }

    pub fn set_line_mode(&self, line_mode: LineMode) -> &Self {
        self.lock().line_mode = line_mode;
        self
    }

    pub fn line_mode(&self) -> LineMode {
        self.lock().line_mode
    }

    /// Whether a message at `tier` would currently be written.
    pub fn enabled_for(&self, tier: Tier) -> bool {
        self.lock().admits(Some(tier))
    }

    /**
    Appends each segment, followed by `": "`, to the prefix.  Returns `self` for chaining.

    The prefix only ever grows.  To start over, build a new logger.
    */
    pub fn prefix<I, S>(&self, segments: I) -> &Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        append_segments(&mut self.lock().prefix, segments);
        self
    }

    /// The rendered prefix, e.g. `"http: serve: "`.
    pub fn get_prefix(&self) -> String {
        self.lock().prefix.clone()
    }

    /// Early gate check, so a suppressed message is never rendered.
    fn pre(&self, tier: Option<Tier>) -> bool {
        self.lock().admits(tier)
    }

    /// Composes and writes a rendered body.  The gate is checked again under the lock that
    /// performs the write, since rendering may have run arbitrary code.
    fn post(&self, tier: Option<Tier>, body: String) {
        let mut guard = self.lock();
        let state = &mut *guard;
        if !state.admits(tier) {
            return;
        }
        let mut record = match tier {
            Some(tier) => dispatch::tiered_pre(&state.prefix, tier),
            None => dispatch::unranked_pre(&state.prefix),
        };
        dispatch::write_body(&mut record, body);
        dispatch::finish(&mut record, state.line_mode);
        dispatch::post(record, &mut state.sink);
    }

    /// Writes `message` at `tier`, if the logger is enabled and the threshold allows it.
    pub fn emit(&self, tier: Tier, message: impl Display) {
        if self.pre(Some(tier)) {
            self.post(Some(tier), dispatch::render(message));
        }
    }

    /// Like [`Logger::emit`], with a body built from [`format_args!`].
    pub fn emit_fmt(&self, tier: Tier, args: Arguments<'_>) {
        if self.pre(Some(tier)) {
            self.post(Some(tier), dispatch::render_fmt(args));
        }
    }

    /// Writes `message` with the prefix and no tag.  Only the enabled flag applies.
    pub fn print(&self, message: impl Display) {
        if self.pre(None) {
            self.post(None, dispatch::render(message));
        }
    }

    /// Like [`Logger::print`], with a body built from [`format_args!`].
    pub fn printf(&self, args: Arguments<'_>) {
        if self.pre(None) {
            self.post(None, dispatch::render_fmt(args));
        }
    }

    tier_methods! {
        Alert => alert, alertf;
        Error => error, errorf;
        Warn => warn, warnf;
        Highlight => highlight, highlightf;
        Inform => inform, informf;
        Log => log, logf;
        Trace => trace, tracef;
    }

    /**
    Opens an operation named after the calling function.

    Appends the caller's name to the prefix unless the previous `begin` came from the same
    function, records the start time, and writes `BEGIN` and `Execution started at: <time>`.
    If the caller can't be identified no name is appended.

    Framing lines are written whenever the logger is enabled, regardless of threshold.

    The name comes from walking the stack, which needs the caller's frame to still exist.
    When `begin()` is the last call in a function, an optimized build may turn it into a
    tail call and drop that frame, so an outer function's name is appended instead.  Use
    [`begin!`](crate::begin), which resolves the name at compile time, where that matters.
    */
    #[inline(never)]
    pub fn begin(&self) -> &Self {
        let name = caller::caller_name(2);
        self.begin_named(&name, std::iter::empty::<&str>())
    }

    /// [`Logger::begin`], additionally appending `extra` segments after the caller's name.
    ///
    /// Subject to the same tail-call caveat as `begin`.
    #[inline(never)]
    pub fn begin_with<I, S>(&self, extra: I) -> &Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = caller::caller_name(2);
        self.begin_named(&name, extra)
    }

    /**
    [`Logger::begin`] with an explicit operation name instead of the caller's.

    An empty `name` appends nothing.  The repeated-name rule applies as for `begin`.
    */
    pub fn begin_named<I, S>(&self, name: &str, extra: I) -> &Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = self.lock();
        if !name.is_empty() && state.last_caller != name {
            state.last_caller = name.to_string();
            append_segments(&mut state.prefix, [name]);
        }
        append_segments(&mut state.prefix, extra);

        state.started = Instant::now();
        state.started_at = Local::now();
        let started_at = rfc3339(&state.started_at);
        state.frame_line(format_args!("BEGIN"));
        state.frame_line(format_args!("Execution started at: {started_at}"));
        self
    }

    /**
    Closes the current operation.

    Writes `END`, `Execution ended at: <time>` and `Execution duration: <elapsed>`.  Without a
    prior `begin`, the duration is measured from the logger's construction.
    */
    pub fn end(&self) {
        let mut state = self.lock();
        let ended = Instant::now();
        let ended_at = rfc3339(&Local::now());
        let duration = ended.duration_since(state.started);
        state.frame_line(format_args!("END"));
        state.frame_line(format_args!("Execution ended at: {ended_at}"));
        state.frame_line(format_args!("Execution duration: {duration:?}"));
    }

    /// Time since the last `begin`, or since construction.
    pub fn elapsed(&self) -> Duration {
        self.lock().started.elapsed()
    }

    /**
    Opens an operation named `name` and closes it when the returned guard drops.

    ```
    use prefixlog::{InMemorySink, Logger};

    let sink = InMemorySink::new();
    let logger = Logger::builder().output(sink.clone()).build();
    {
        let _op = logger.operation("migrate");
        logger.log("step 1\n");
    }
    let out = sink.contents();
    assert!(out.starts_with("migrate: BEGIN\n"));
    assert!(out.contains("migrate: LOG: step 1\n"));
    assert!(out.contains("migrate: END\n"));
    ```
    */
    pub fn operation(&self, name: &str) -> OperationGuard<'_> {
        self.begin_named(name, std::iter::empty::<&str>());
        OperationGuard::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemorySink;

    fn capture() -> (Logger, InMemorySink) {
        let sink = InMemorySink::new();
        let logger = Logger::builder().output(sink.clone()).build();
        (logger, sink)
    }

    #[test]
    fn default_logger_is_enabled_at_max() {
        let logger = Logger::new();
        assert!(logger.is_enabled());
        assert_eq!(logger.level(), Verbosity::MAX);
        assert_eq!(logger.get_prefix(), "");
    }

    #[test]
    fn print_is_raw() {
        let (logger, sink) = capture();
        logger.print("Test message");
        assert_eq!(sink.contents(), "Test message");
    }

    #[test]
    fn printf_substitutes() {
        let (logger, sink) = capture();
        logger.printf(format_args!("The name was {:?}, {} years old.", "Ramil", 22));
        assert_eq!(sink.contents(), "The name was \"Ramil\", 22 years old.");
    }

    #[test]
    fn tiered_output_has_tag() {
        let (logger, sink) = capture();
        logger.logf(format_args!("The name was {:?}, {} years old.", "Ramil", 22));
        assert_eq!(sink.contents(), "LOG: The name was \"Ramil\", 22 years old.");
    }

    #[test]
    fn gating_is_inclusive() {
        let (logger, sink) = capture();
        logger.set_level(Verbosity::WARN);
        logger.highlight("hidden");
        assert!(sink.is_empty());
        logger.set_level(Verbosity::HIGHLIGHT);
        logger.highlight("shown");
        assert_eq!(sink.drain(), "HIGHLIGHT: shown");
        assert!(!logger.enabled_for(Tier::Inform));
        assert!(logger.enabled_for(Tier::Error));
    }

    #[test]
    fn disabled_writes_nothing() {
        let (logger, sink) = capture();
        logger.disable();
        logger.print("x");
        logger.alert("x");
        logger.begin();
        logger.end();
        assert!(sink.is_empty());
        assert!(!logger.enabled_for(Tier::Alert));
        logger.enable();
        logger.print("y");
        assert_eq!(sink.contents(), "y");
    }

    #[test]
    fn prefix_grows() {
        let (logger, sink) = capture();
        logger.prefix(["a", "b"]).prefix(["c"]);
        assert_eq!(logger.get_prefix(), "a: b: c: ");
        logger.warn("w");
        assert_eq!(sink.contents(), "a: b: c: WARN: w");
    }

    #[test]
    fn newline_mode() {
        let (logger, sink) = capture();
        logger.set_line_mode(LineMode::WithNewline).inform("one");
        logger.print("two");
        assert_eq!(sink.contents(), "INFORM: one\ntwo\n");
        assert_eq!(logger.line_mode(), LineMode::WithNewline);
    }

    #[test]
    fn replace_output_returns_previous() {
        let (logger, first) = capture();
        let second = InMemorySink::new();
        logger.print("1");
        let _previous = logger.replace_output(second.clone());
        logger.print("2");
        assert_eq!(first.contents(), "1");
        assert_eq!(second.contents(), "2");
    }

    #[test]
    fn begin_named_appends_once_per_name() {
        let (logger, _sink) = capture();
        logger.begin_named("load", ["db"]);
        logger.begin_named("load", std::iter::empty::<&str>());
        assert_eq!(logger.get_prefix(), "load: db: ");
        logger.begin_named("save", std::iter::empty::<&str>());
        logger.begin_named("load", std::iter::empty::<&str>());
        assert_eq!(logger.get_prefix(), "load: db: save: load: ");
    }

    #[test]
    fn begin_then_end_writes_framing_in_order() {
        let (logger, sink) = capture();
        logger.set_level(Verbosity::NONE);
        logger.begin_named("job", std::iter::empty::<&str>()).end();
        let out = sink.contents();
        let order = [
            "job: BEGIN\n",
            "job: Execution started at: ",
            "job: END\n",
            "job: Execution ended at: ",
            "job: Execution duration: ",
        ];
        let mut from = 0;
        for needle in order {
            let at = out[from..].find(needle).unwrap_or_else(|| panic!("{needle:?} missing from {out:?}"));
            from += at + needle.len();
        }
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn timestamps_are_rfc3339() {
        let (logger, sink) = capture();
        logger.begin_named("", std::iter::empty::<&str>());
        let out = sink.contents();
        let line = out
            .lines()
            .find_map(|l| l.strip_prefix("Execution started at: "))
            .unwrap();
        assert!(DateTime::parse_from_rfc3339(line).is_ok(), "{line}");
    }

    #[test]
    fn reentrant_display_does_not_deadlock() {
        struct Nested<'a>(&'a Logger);
        impl Display for Nested<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.print("inner ");
                f.write_str("outer")
            }
        }
        let (logger, sink) = capture();
        logger.inform(Nested(&logger));
        assert_eq!(sink.contents(), "inner INFORM: outer");
    }

    #[test]
    fn display_that_disables_suppresses_its_own_line() {
        struct Disabling<'a>(&'a Logger);
        impl Display for Disabling<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.disable();
                f.write_str("body")
            }
        }
        let (logger, sink) = capture();
        logger.inform(Disabling(&logger));
        logger.print(Disabling(&logger));
        assert!(!logger.is_enabled());
        assert!(sink.is_empty(), "{:?}", sink.contents());
    }

    #[test]
    fn display_that_lowers_level_suppresses_its_own_line() {
        struct Quieting<'a>(&'a Logger);
        impl Display for Quieting<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.set_level(Verbosity::NONE);
                f.write_str("body")
            }
        }
        let (logger, sink) = capture();
        logger.trace(Quieting(&logger));
        assert!(sink.is_empty(), "{:?}", sink.contents());
    }

    #[test]
    fn line_uses_prefix_and_sink_current_at_write() {
        struct Moving<'a>(&'a Logger, InMemorySink);
        impl Display for Moving<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.prefix(["moved"]);
                self.0.set_output(self.1.clone());
                f.write_str("body")
            }
        }
        let (logger, first) = capture();
        let second = InMemorySink::new();
        logger.warn(Moving(&logger, second.clone()));
        assert!(first.is_empty());
        assert_eq!(second.contents(), "moved: WARN: body");
    }

    #[test]
    fn logger_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Logger>();
    }
}
