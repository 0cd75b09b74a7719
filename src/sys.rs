// SPDX-License-Identifier: MIT OR Apache-2.0

//! Platform-specific time types.
//!
//! On native platforms `Instant` and `Duration` come from `std::time`; on WebAssembly,
//! where `std::time::Instant::now` panics, they come from `web_time`.
//!
//! [`Duration`] is re-exported at the crate root since it appears in
//! [`Logger::elapsed`](crate::Logger::elapsed).

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::{Duration, Instant};
#[cfg(target_arch = "wasm32")]
pub use web_time::{Duration, Instant};
