#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Core type definitions for the upkeep retention tool
//!
//! This crate provides the data carried between the scanner, evaluator,
//! eviction selector and notifier. Nothing here touches the filesystem;
//! every value is built per run and discarded afterwards.

pub mod inventory;
pub mod policy;

// Re-export commonly used types
pub use inventory::{ExpiredFile, FileRecord, Inventory};
pub use policy::{FolderPolicy, SlackAuth};

/// Multiplier from configured megabyte thresholds to internal byte values
pub const BYTES_PER_MEGABYTE: u64 = 1_048_576;

/// Format a byte count with thousands separators for operator messages
#[must_use]
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
