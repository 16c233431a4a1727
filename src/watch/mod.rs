// src/watch/mod.rs

//! File watching and debounce.
//!
//! This module turns raw filesystem notifications on a single path into
//! at-most-one-per-window fire callbacks:
//!
//! - `debounce.rs` is the pure leading-edge state machine.
//! - `watcher.rs` bridges a `notify` subscription into an async loop that
//!   drives the state machine.
//! - `unit.rs` pairs one watched file with its shell command.
//!
//! It does not know about config parsing or the watch set as a whole; it
//! only turns changes on one path into dispatches.

pub mod debounce;
pub mod unit;
pub mod watcher;

pub use debounce::Debouncer;
pub use unit::WatchUnit;
pub use watcher::{debounce_loop, subscribe, DebouncedWatch};
