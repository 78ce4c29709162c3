//! Filesystem utilities for goplay.
//!
//! Atomic writes for files that must never be left half-written, such as the
//! config file.

pub mod atomic;

pub use atomic::atomic_write_file;
