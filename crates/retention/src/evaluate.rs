//! Retention evaluator
//!
//! Decides, from the retained total and the policy thresholds, whether
//! eviction or a warning is required. The over-limit check always wins;
//! an unset warning threshold means the warning check never fires.

/// Outcome of evaluating one folder's retained total against its policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionDecision {
    /// Total exceeds the hard cap; evict oldest-first down to `target`
    Evict {
        /// Byte threshold to bring usage under (warn threshold if set,
        /// else the hard maximum)
        target: u64,
        /// Bytes that must be freed to reach the target
        excess: u64,
    },
    /// Total exceeds the warning threshold but not the hard cap
    Warn { total: u64, threshold: u64 },
    /// Under all thresholds; nothing to report
    WithinLimits,
}

/// Evaluate the retained total against the storage thresholds.
#[must_use]
pub fn evaluate(total_bytes: u64, max_storage: u64, warn_storage: Option<u64>) -> RetentionDecision {
    if total_bytes > max_storage {
        let target = warn_storage.unwrap_or(max_storage);
        return RetentionDecision::Evict {
            target,
            excess: total_bytes.saturating_sub(target),
        };
    }

    match warn_storage {
        Some(threshold) if total_bytes > threshold => RetentionDecision::Warn {
            total: total_bytes,
            threshold,
        },
        _ => RetentionDecision::WithinLimits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_all_thresholds() {
        assert_eq!(evaluate(50, 100, Some(80)), RetentionDecision::WithinLimits);
        assert_eq!(evaluate(50, 100, None), RetentionDecision::WithinLimits);
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        // Equality does not fire either check
        assert_eq!(evaluate(100, 100, None), RetentionDecision::WithinLimits);
        assert_eq!(evaluate(80, 100, Some(80)), RetentionDecision::WithinLimits);
    }

    #[test]
    fn test_warning_fires_between_thresholds() {
        assert_eq!(
            evaluate(90, 100, Some(80)),
            RetentionDecision::Warn {
                total: 90,
                threshold: 80
            }
        );
    }

    #[test]
    fn test_over_limit_targets_warn_threshold() {
        assert_eq!(
            evaluate(110, 100, Some(80)),
            RetentionDecision::Evict {
                target: 80,
                excess: 30
            }
        );
    }

    #[test]
    fn test_over_limit_without_warn_targets_max() {
        assert_eq!(
            evaluate(110, 100, None),
            RetentionDecision::Evict {
                target: 100,
                excess: 10
            }
        );
    }

    #[test]
    fn test_over_limit_wins_over_warning() {
        // Eviction fires regardless of the warning threshold
        assert!(matches!(
            evaluate(150, 100, Some(80)),
            RetentionDecision::Evict { .. }
        ));
    }

    #[test]
    fn test_unset_warning_never_fires() {
        // The warning comparison must not be performed against an absent
        // threshold
        assert_eq!(evaluate(99, 100, None), RetentionDecision::WithinLimits);
    }
}
