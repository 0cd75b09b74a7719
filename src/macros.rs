// SPDX-License-Identifier: MIT OR Apache-2.0

//! Formatting macros.
//!
//! Each tier has a macro taking a logger followed by [`format!`]-style arguments.  The
//! arguments are only formatted when the message passes the logger's gate.
//!
//! ```rust
//! use prefixlog::{InMemorySink, Logger, Verbosity};
//!
//! let sink = InMemorySink::new();
//! let logger = Logger::builder()
//!     .output(sink.clone())
//!     .level(Verbosity::WARN)
//!     .build();
//!
//! let user = "Ramil";
//! prefixlog::warn!(logger, "user {user:?} retried {} times\n", 3);
//! prefixlog::trace!(logger, "suppressed {}\n", 1);
//! assert_eq!(sink.contents(), "WARN: user \"Ramil\" retried 3 times\n");
//! ```

/// Writes a formatted message at [`Tier::Alert`](crate::Tier::Alert).
#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $logger.emit_fmt($crate::Tier::Alert, ::core::format_args!($($arg)+))
    };
}

/// Writes a formatted message at [`Tier::Error`](crate::Tier::Error).
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.emit_fmt($crate::Tier::Error, ::core::format_args!($($arg)+))
    };
}

/// Writes a formatted message at [`Tier::Warn`](crate::Tier::Warn).
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.emit_fmt($crate::Tier::Warn, ::core::format_args!($($arg)+))
    };
}

/// Writes a formatted message at [`Tier::Highlight`](crate::Tier::Highlight).
#[macro_export]
macro_rules! highlight {
    ($logger:expr, $($arg:tt)+) => {
        $logger.emit_fmt($crate::Tier::Highlight, ::core::format_args!($($arg)+))
    };
}

/// Writes a formatted message at [`Tier::Inform`](crate::Tier::Inform).
#[macro_export]
macro_rules! inform {
    ($logger:expr, $($arg:tt)+) => {
        $logger.emit_fmt($crate::Tier::Inform, ::core::format_args!($($arg)+))
    };
}

/// Writes a formatted message at [`Tier::Log`](crate::Tier::Log).
#[macro_export]
macro_rules! log {
    ($logger:expr, $($arg:tt)+) => {
        $logger.emit_fmt($crate::Tier::Log, ::core::format_args!($($arg)+))
    };
}

/// Writes a formatted message at [`Tier::Trace`](crate::Tier::Trace).
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $logger.emit_fmt($crate::Tier::Trace, ::core::format_args!($($arg)+))
    };
}

/// Writes a formatted message that is not severity-gated, like [`Logger::printf`](crate::Logger::printf).
#[macro_export]
macro_rules! emit {
    ($logger:expr, $($arg:tt)+) => {
        $logger.printf(::core::format_args!($($arg)+))
    };
}

/**
Opens an operation named after the enclosing function.

Unlike [`Logger::begin`](crate::Logger::begin), which inspects the stack at runtime, the name
is resolved at compile time, so it survives inlining and stripped binaries.  Extra prefix
segments may follow the logger.  Evaluates to the logger reference returned by
[`Logger::begin_named`](crate::Logger::begin_named).

```rust
use prefixlog::{InMemorySink, Logger};

fn import_rows(logger: &Logger, table: &str) {
    let lg = prefixlog::begin!(logger, table);
    lg.log("importing\n");
    lg.end();
}

let sink = InMemorySink::new();
let logger = Logger::builder().output(sink.clone()).build();
import_rows(&logger, "users");
assert_eq!(logger.get_prefix(), "import_rows: users: ");
assert!(sink.contents().contains("import_rows: users: LOG: importing\n"));
```
*/
#[macro_export]
macro_rules! begin {
    ($logger:expr $(, $segment:expr)* $(,)?) => {{
        fn __prefixlog_here() {}
        let name = $crate::caller::enclosing_function($crate::caller::type_name_of(__prefixlog_here));
        $logger.begin_named(
            name,
            ::core::iter::empty::<&str>()
                $(.chain(::core::iter::once(::core::convert::AsRef::<str>::as_ref(&$segment))))*,
        )
    }};
}
