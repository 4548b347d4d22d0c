//! Per-folder orchestration: Scanner → Evaluator → Eviction → Notifier

use tracing::debug;
use upkeep_errors::Error;
use upkeep_notify::Notifier;
use upkeep_types::{group_digits, FolderPolicy};

use crate::ctx::MaintenanceCtx;
use crate::evaluate::{evaluate, RetentionDecision};
use crate::evict::evict;
use crate::report::{eviction_report_title, expired_report_title, render_deleted_files};
use crate::scan::scan;

/// Summary of one folder's processing, for run logging
#[derive(Debug, Clone, Copy, Default)]
pub struct FolderOutcome {
    /// Files deleted because they were past the age cutoff
    pub expired_deleted: usize,
    /// Files deleted to get under the storage target
    pub evicted: usize,
    /// Retained bytes after any eviction
    pub remaining_bytes: u64,
}

/// Posts the folder's report header exactly once, before the first
/// substantive report, and never when nothing is reported.
struct ReportHeader<'a> {
    folder_name: &'a str,
    posted: bool,
}

impl<'a> ReportHeader<'a> {
    fn new(folder_name: &'a str) -> Self {
        Self {
            folder_name,
            posted: false,
        }
    }

    async fn ensure_posted(&mut self, notifier: &Notifier) {
        if self.posted {
            return;
        }
        notifier
            .post_message(
                Some(&format!("*Maintenance report for {}*", self.folder_name)),
                &format!("Maintenance report for {}", self.folder_name),
            )
            .await;
        self.posted = true;
    }
}

/// Check one configured folder and take any appropriate action.
///
/// # Errors
///
/// Returns an error if the scan fails or a deletion is refused; the run
/// terminates without processing remaining folders.
pub async fn process_folder(
    ctx: &MaintenanceCtx,
    policy: &FolderPolicy,
) -> Result<FolderOutcome, Error> {
    let cutoff = policy.cutoff(ctx.now);
    debug!(
        folder = %policy.name,
        path = %policy.upload_path.display(),
        %cutoff,
        "scanning folder"
    );

    let inventory = scan(&policy.upload_path, cutoff).await?;
    let mut header = ReportHeader::new(&policy.name);
    let mut outcome = FolderOutcome {
        expired_deleted: inventory.expired.len(),
        remaining_bytes: inventory.total_bytes,
        ..FolderOutcome::default()
    };
    let today = ctx.now.date_naive();

    if !inventory.expired.is_empty() {
        header.ensure_posted(&ctx.notifier).await;
        ctx.notifier
            .post_message(
                None,
                &format!(
                    "A number of files have been deleted because they are over {} days old",
                    policy.max_age_days
                ),
            )
            .await;
        ctx.notifier
            .upload_report(
                &render_deleted_files(&inventory.expired),
                &expired_report_title(today),
            )
            .await;
    }

    match evaluate(
        inventory.total_bytes,
        policy.max_storage_bytes,
        policy.warn_storage_bytes,
    ) {
        RetentionDecision::Evict { target, excess } => {
            header.ensure_posted(&ctx.notifier).await;
            ctx.notifier
                .post_message(
                    None,
                    &format!(
                        "Storage is over-limit. Need to free up {} bytes",
                        group_digits(excess)
                    ),
                )
                .await;

            let eviction = evict(&inventory.retained, inventory.total_bytes, target).await?;
            outcome.evicted = eviction.deleted.len();
            outcome.remaining_bytes = inventory.total_bytes.saturating_sub(eviction.freed_bytes);

            ctx.notifier
                .upload_report(
                    &render_deleted_files(&eviction.deleted),
                    &eviction_report_title(today),
                )
                .await;
        }
        RetentionDecision::Warn { total, threshold } => {
            header.ensure_posted(&ctx.notifier).await;
            let total = group_digits(total);
            let threshold = group_digits(threshold);
            ctx.notifier
                .post_message(
                    Some(&format!(
                        "*_WARNING!_* Total usage is {total} bytes; warning threshold is {threshold} bytes"
                    )),
                    &format!(
                        "WARNING! Total usage is {total} bytes; warning threshold is {threshold} bytes"
                    ),
                )
                .await;
        }
        RetentionDecision::WithinLimits => {}
    }

    Ok(outcome)
}
