//SPDX-License-Identifier: MIT OR Apache-2.0

//! # prefixlog procedural macros
//!
//! This crate provides the `#[operation]` attribute for prefixlog.  Use it through the
//! re-export, `prefixlog::operation`.
//!
//! The attribute wraps a function body in an operation on a logger: the body starts with
//! `begin` under the function's name and `end` runs when the body exits, on any path.
//!
//! ```
//! use prefixlog::{InMemorySink, Logger};
//!
//! #[prefixlog::operation(logger)]
//! fn checkout(logger: &Logger, items: u32) -> u32 {
//!     logger.inform(format_args!("{items} items\n"));
//!     items * 2
//! }
//!
//! let sink = InMemorySink::new();
//! let logger = Logger::builder().output(sink.clone()).build();
//! assert_eq!(checkout(&logger, 3), 6);
//! let out = sink.contents();
//! assert!(out.contains("checkout: INFORM: 3 items\n"));
//! assert!(out.contains("checkout: END\n"));
//! ```

use proc_macro::TokenStream;

mod operation_attr;

/// Wraps a function in a named operation on the logger given as the attribute argument.
///
/// The argument is any expression with a `.operation(&str)` method in scope, typically a
/// `&Logger` parameter, `self.logger`, or an `Arc<Logger>`.
#[proc_macro_attribute]
pub fn operation(attr: TokenStream, item: TokenStream) -> TokenStream {
    operation_attr::operation_attr_impl(attr, item)
}
