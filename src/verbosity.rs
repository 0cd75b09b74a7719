// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolving an initial [`Verbosity`] from command-line style flags.
//!
//! Programs conventionally raise verbosity with a repeated `v`: `-v` selects rank 1 and
//! `-vvvvvv` selects rank 6.  This module turns such flags into a threshold that can be
//! handed to [`LoggerBuilder::level`](crate::LoggerBuilder::level).  Nothing is stored
//! globally; the caller decides where the arguments come from.
//!
//! ```
//! use prefixlog::Verbosity;
//!
//! let level = Verbosity::from_flags(["server", "-vv", "--port", "80", "-vvvv"]);
//! assert_eq!(level, Verbosity::INFORM);
//!
//! let parsed: Verbosity = "-vvv".parse().unwrap();
//! assert_eq!(parsed, Verbosity::HIGHLIGHT);
//! ```

use crate::level::Verbosity;
use std::str::FromStr;

/// The longest flag we recognize.
const MAX_FLAG_LEN: usize = Verbosity::MAX.rank() as usize;

/// Errors from parsing a [`Verbosity`] out of a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseVerbosityError {
    #[error("empty verbosity")]
    Empty,
    #[error("invalid verbosity {0:?}: expected a rank or a flag like -vv")]
    Invalid(String),
}

/// Boolean flag values in the spellings command-line parsers conventionally accept.
fn flag_value(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

/**
Rank for a single flag like `-vvv`, `--vv` or `-vv=true`, or `None` if it isn't one.

A flag explicitly set to false (`-vv=false`) contributes nothing.
*/
fn flag_rank(arg: &str) -> Option<u8> {
    let (name, value) = match arg.split_once('=') {
        Some((name, value)) => (name, flag_value(value)?),
        None => (arg, true),
    };
    let body = name.strip_prefix("--").or_else(|| name.strip_prefix('-'))?;
    if body.is_empty() || body.len() > MAX_FLAG_LEN || !body.bytes().all(|b| b == b'v') {
        return None;
    }
    value.then_some(body.len() as u8)
}

impl Verbosity {
    /**
    Scans `args` for verbosity flags and returns the highest one found.

    Recognized shapes are `-v` through `-vvvvvv`, with either one or two leading dashes and
    an optional boolean value (`-vv=true`, `-vvv=false`).  Other arguments are ignored.  When no flag is present the result is [`Verbosity::NONE`].
    */
    pub fn from_flags<I, S>(args: I) -> Verbosity
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        args.into_iter()
            .filter_map(|arg| flag_rank(arg.as_ref()))
            .max()
            .map(Verbosity)
            .unwrap_or(Verbosity::NONE)
    }

    /// [`Verbosity::from_flags`] over the arguments of the current process.
    pub fn from_process_args() -> Verbosity {
        Verbosity::from_flags(std::env::args().skip(1))
    }
}

impl FromStr for Verbosity {
    type Err = ParseVerbosityError;

    /// Accepts a numeric rank (`"4"`) or a flag shape (`"vvvv"`, `"-vvvv"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseVerbosityError::Empty);
        }
        if let Ok(rank) = s.parse::<u8>() {
            return Ok(Verbosity(rank));
        }
        let flag = if s.starts_with('-') { s.to_string() } else { format!("-{s}") };
        flag_rank(&flag)
            .map(Verbosity)
            .ok_or_else(|| ParseVerbosityError::Invalid(s.to_string()))
    }
}
