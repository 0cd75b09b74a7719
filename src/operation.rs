// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Operation guards.

An operation is a begin/end pair on a [Logger].  [OperationGuard] ties the end to a scope, so
every exit path, including `?` and early `return`, writes the end lines.
*/

use crate::logger::Logger;

/**
Closes an operation when dropped.

Created by [Logger::operation], or by the `#[prefixlog::operation]` attribute.

```
use prefixlog::{InMemorySink, Logger};

fn parse(logger: &Logger, input: &str) -> Result<u32, std::num::ParseIntError> {
    let _op = logger.operation("parse");
    let value = input.parse()?;
    logger.log(format_args!("parsed {value}\n"));
    Ok(value)
}

let sink = InMemorySink::new();
let logger = Logger::builder().output(sink.clone()).build();
assert!(parse(&logger, "x").is_err());
assert!(sink.contents().contains("parse: Execution duration:"));
```
*/
#[derive(Debug)]
#[must_use = "the operation ends as soon as the guard is dropped"]
pub struct OperationGuard<'a> {
    logger: &'a Logger,
}

impl<'a> OperationGuard<'a> {
    pub(crate) fn new(logger: &'a Logger) -> Self {
        Self { logger }
    }

    /// The logger this operation writes to.
    pub fn logger(&self) -> &'a Logger {
        self.logger
    }
}

impl Drop for OperationGuard<'_> {
    fn drop(&mut self) {
        self.logger.end();
    }
}
