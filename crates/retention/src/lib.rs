#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Retention policy enforcement for upkeep
//!
//! This crate implements the per-folder pipeline: scan the directory tree
//! into an inventory (deleting expired files), evaluate the storage
//! thresholds, evict oldest-first when over the cap, and report every
//! action through the notifier.
//!
//! Classification is kept separate from deletion: `classify` and
//! `select_victims` are pure, while `scan` and `evict` apply the deletions
//! they imply. Filesystem failures during deletion are fatal to the run.

mod ctx;
mod evaluate;
mod evict;
mod folder;
mod fsops;
mod report;
mod scan;

pub use ctx::MaintenanceCtx;
pub use evaluate::{evaluate, RetentionDecision};
pub use evict::{evict, select_victims, Eviction};
pub use folder::{process_folder, FolderOutcome};
pub use report::{eviction_report_title, expired_report_title, render_deleted_files};
pub use scan::{classify, scan, Partition};
