// SPDX-License-Identifier: MIT OR Apache-2.0

//! A message at tier T appears iff the logger is enabled and its threshold is at least T.

use prefixlog::{InMemorySink, Logger, Tier, Verbosity};
use proptest::prelude::*;

fn capture(level: Verbosity, enabled: bool) -> (Logger, InMemorySink) {
    let sink = InMemorySink::new();
    let logger = Logger::builder()
        .output(sink.clone())
        .level(level)
        .enabled(enabled)
        .build();
    (logger, sink)
}

fn emit_every_tier(logger: &Logger) {
    logger.alert("a\n");
    logger.error("e\n");
    logger.warn("w\n");
    logger.highlight("h\n");
    logger.inform("i\n");
    logger.log("l\n");
    logger.trace("t\n");
}

#[test]
fn threshold_zero_then_six_round_trip() {
    let (logger, sink) = capture(Verbosity::NONE, true);
    emit_every_tier(&logger);
    assert_eq!(sink.drain(), "");

    logger.set_level(Verbosity::NONE).set_level(Verbosity::TRACE);
    emit_every_tier(&logger);
    assert_eq!(
        sink.drain(),
        "ALERT: a\nERROR: e\nWARN: w\nHIGHLIGHT: h\nINFORM: i\nLOG: l\nTRACE: t\n"
    );
}

#[test]
fn highlight_boundary() {
    for rank in 0..=6u8 {
        let (logger, sink) = capture(Verbosity(rank), true);
        logger.highlightf(format_args!("rank {rank}"));
        assert_eq!(!sink.is_empty(), rank >= 3, "rank {rank}");
    }
}

#[test]
fn ranks_above_six_write_everything() {
    let (logger, sink) = capture(Verbosity(42), true);
    emit_every_tier(&logger);
    assert_eq!(sink.contents().lines().count(), 7);
}

proptest! {
    #[test]
    fn tier_written_iff_enabled_and_threshold_allows(
        rank in 0u8..=6,
        tier_index in 0usize..7,
        enabled in any::<bool>(),
    ) {
        let tier = Tier::ALL[tier_index];
        let (logger, sink) = capture(Verbosity(rank), enabled);
        logger.emit(tier, "message");
        let written = sink.contents();
        if enabled && rank >= tier.rank() {
            prop_assert_eq!(written, format!("{}message", tier.tag()));
        } else {
            prop_assert_eq!(written, "");
        }
    }

    #[test]
    fn formatted_entry_point_gates_like_plain(rank in 0u8..=6, tier_index in 0usize..7) {
        let tier = Tier::ALL[tier_index];
        let (logger, sink) = capture(Verbosity(rank), true);
        logger.emit_fmt(tier, format_args!("{}-{}", rank, tier_index));
        prop_assert_eq!(!sink.is_empty(), Verbosity(rank).allows(tier));
    }
}
