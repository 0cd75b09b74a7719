//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# prefixlog

prefixlog is a small leveled logger for programs that want readable, scoped output without
an observability stack.

# The model

A [Logger] writes lines of the form

```text
<prefix><TAG: ><message>
```

to a sink (standard output by default, or anything implementing [std::io::Write]).

* The **prefix** is an accumulated list of context labels, `"http: serve_http: "`.  It only
  grows: [Logger::prefix] appends labels, and [Logger::begin] appends the name of the calling
  function.
* The **tag** names the message's [Tier].  Tiers have ranks from 1 to 6 and a logger has a
  [Verbosity] threshold; a message is written when the threshold is at least its rank.

| Rank | Tier                  | Methods                           |
|------|-----------------------|-----------------------------------|
| 1    | ALERT, ERROR          | `alert`, `alertf`, `error`, `errorf` |
| 2    | WARN                  | `warn`, `warnf`                   |
| 3    | HIGHLIGHT             | `highlight`, `highlightf`         |
| 4    | INFORM                | `inform`, `informf`               |
| 5    | LOG                   | `log`, `logf`                     |
| 6    | TRACE                 | `trace`, `tracef`                 |

Threshold 0 suppresses every tier.  [Logger::print] and [Logger::printf] write without a tag
and ignore the threshold; only [Logger::disable] silences them.

# The API

```rust
use prefixlog::{InMemorySink, Logger, Verbosity};

fn serve_http(logger: &Logger) {
    let lg = logger.begin();
    lg.log("Receive HTTP Request\n");
    lg.trace("too detailed for this threshold\n");
    prefixlog::inform!(lg, "created user {:?}\n", "Ramil");
    lg.end();
}

let sink = InMemorySink::new();
let logger = Logger::builder()
    .output(sink.clone())
    .level(Verbosity::LOG)
    .build();
serve_http(&logger);

let out = sink.contents();
assert!(out.contains("BEGIN\n"));
assert!(out.contains("LOG: Receive HTTP Request\n"));
assert!(!out.contains("TRACE"));
assert!(out.contains("INFORM: created user \"Ramil\"\n"));
```

Messages are written exactly as given.  Add `\n` yourself, or configure
[LineMode::WithNewline].

# Initial verbosity

[Verbosity::from_flags] turns `-v` … `-vvvvvv` flags into a threshold for
[LoggerBuilder::level]:

```rust
let logger = prefixlog::Logger::builder()
    .level(prefixlog::Verbosity::from_flags(["-vvv"]))
    .build();
assert_eq!(logger.level(), prefixlog::Verbosity::HIGHLIGHT);
```

# Errors

Logging never fails from the caller's point of view.  Sink errors are discarded, and a caller
name that can't be resolved is left out of the prefix.

# Multithreading

A [Logger] is `Send + Sync`; share it with an `Arc`.  Each line is written with a single write
under an internal lock.
*/

mod level;
mod verbosity;
mod sys;
mod sink;
mod inmemory_sink;
mod log_record;
mod dispatch;
pub mod caller;
mod config;
mod logger;
mod operation;
mod macros;

pub use level::{Tier, Verbosity};
pub use verbosity::ParseVerbosityError;
pub use sink::{LineMode, Sink, default_sink};
pub use inmemory_sink::InMemorySink;
pub use log_record::LogRecord;
pub use config::{LogOption, LoggerBuilder, SEPARATOR};
pub use logger::Logger;
pub use operation::OperationGuard;

pub use prefixlog_proc::operation;

pub use sys::Duration;
