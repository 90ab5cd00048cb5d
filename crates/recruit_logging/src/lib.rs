#![deny(missing_docs)]
//! Shared logging utilities for the recruiting dashboard workspace.
//!
//! Every crate logs through the `recruit_*` macros below so the backend can be
//! swapped in one place. The app loop stamps each tick into a thread-local
//! counter, which lets log lines be lined up against simulator progress.

use std::cell::Cell;

thread_local! {
    /// Tick counter for the message loop running on this thread.
    static LOOP_TICK: Cell<u64> = const { Cell::new(0) };
}

/// Records the current message-loop tick for this thread.
pub fn set_tick(tick: u64) {
    LOOP_TICK.with(|v| v.set(tick));
}

/// Returns the message-loop tick recorded for this thread, or 0.
pub fn current_tick() -> u64 {
    LOOP_TICK.with(|v| v.get())
}

/// Logs a trace-level message tagged with the current loop tick.
///
/// Per-tick simulator detail, such as individual progress steps.
#[macro_export]
macro_rules! recruit_trace {
    ($($arg:tt)*) => {{
        log::trace!("[tick {}] {}", $crate::current_tick(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message tagged with the current loop tick.
///
/// Store writes and preview handle traffic.
#[macro_export]
macro_rules! recruit_debug {
    ($($arg:tt)*) => {{
        log::debug!("[tick {}] {}", $crate::current_tick(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message tagged with the current loop tick.
///
/// Session milestones: logins, job and CV changes, finished analyses.
#[macro_export]
macro_rules! recruit_info {
    ($($arg:tt)*) => {{
        log::info!("[tick {}] {}", $crate::current_tick(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message tagged with the current loop tick.
///
/// Fail-soft recoveries, such as discarded store entries or a broken config.
#[macro_export]
macro_rules! recruit_warn {
    ($($arg:tt)*) => {{
        log::warn!("[tick {}] {}", $crate::current_tick(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message tagged with the current loop tick.
///
/// Failed effects the session keeps running after.
#[macro_export]
macro_rules! recruit_error {
    ($($arg:tt)*) => {{
        log::error!("[tick {}] {}", $crate::current_tick(), format_args!($($arg)*));
    }};
}

/// Installs a terminal logger for tests.
///
/// Safe to call from every test: a second installation attempt is ignored.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
}
