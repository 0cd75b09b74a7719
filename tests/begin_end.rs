// SPDX-License-Identifier: MIT OR Apache-2.0

//! Begin/end framing and caller naming.

use prefixlog::{InMemorySink, Logger, Verbosity};

fn capture() -> (Logger, InMemorySink) {
    let sink = InMemorySink::new();
    let logger = Logger::builder().output(sink.clone()).build();
    (logger, sink)
}

fn assert_in_order(out: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match out[from..].find(needle) {
            Some(at) => from += at + needle.len(),
            None => panic!("{needle:?} missing or out of order in {out:?}"),
        }
    }
}

#[test]
fn framing_lines_appear_in_order() {
    let (logger, sink) = capture();
    logger.begin();
    logger.end();
    assert_in_order(
        &sink.contents(),
        &[
            "BEGIN",
            "Execution started at:",
            "END",
            "Execution ended at:",
            "Execution duration:",
        ],
    );
}

#[test]
fn framing_ignores_threshold() {
    let (logger, sink) = capture();
    logger.set_level(Verbosity::NONE);
    logger.begin_named("quiet", std::iter::empty::<&str>());
    logger.log("suppressed\n");
    logger.end();
    let out = sink.contents();
    assert!(out.contains("quiet: BEGIN\n"));
    assert!(!out.contains("suppressed"));
    assert!(out.contains("quiet: Execution duration: "));
}

#[test]
fn end_without_begin_measures_from_construction() {
    let (logger, sink) = capture();
    std::thread::sleep(std::time::Duration::from_millis(5));
    assert!(logger.elapsed() >= std::time::Duration::from_millis(5));
    logger.end();
    assert!(sink.contents().contains("Execution duration: "));
}

#[test]
fn begin_with_appends_extra_segments_after_name() {
    let (logger, _sink) = capture();
    logger.begin_named("sync", ["users", "batch-1"]);
    assert_eq!(logger.get_prefix(), "sync: users: batch-1: ");
}

#[test]
fn second_begin_restarts_the_clock() {
    let (logger, _sink) = capture();
    logger.begin_named("slow", std::iter::empty::<&str>());
    std::thread::sleep(std::time::Duration::from_millis(20));
    logger.begin_named("slow", std::iter::empty::<&str>());
    assert!(logger.elapsed() < std::time::Duration::from_millis(20));
    assert_eq!(logger.get_prefix(), "slow: ");
}

#[inline(never)]
fn load_config(logger: &Logger) {
    logger.begin();
}

#[inline(never)]
fn apply_config(logger: &Logger) {
    logger.begin_with(["v2"]);
}

#[test]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
fn begin_names_the_calling_function() {
    let (logger, sink) = capture();
    load_config(&logger);
    assert_eq!(logger.get_prefix(), "load_config: ");
    assert!(sink.contents().starts_with("load_config: BEGIN\n"));
}

#[test]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
fn repeated_begin_from_same_function_appends_once() {
    let (logger, _sink) = capture();
    load_config(&logger);
    load_config(&logger);
    assert_eq!(logger.get_prefix(), "load_config: ");

    apply_config(&logger);
    assert_eq!(logger.get_prefix(), "load_config: apply_config: v2: ");

    load_config(&logger);
    assert_eq!(
        logger.get_prefix(),
        "load_config: apply_config: v2: load_config: "
    );
}

#[test]
fn unnamed_begin_still_frames() {
    let (logger, sink) = capture();
    logger.begin_named("", ["manual"]);
    assert_eq!(logger.get_prefix(), "manual: ");
    assert!(sink.contents().starts_with("manual: BEGIN\n"));
}
