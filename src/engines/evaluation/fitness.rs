//! Cost function for a proposed share allocation.
//!
//! The cost is the squared distance to the target total value plus, for every
//! target (domain, part), the squared distance between the desired bucket
//! amount and the value actually landing in that bucket. Desired amounts are
//! percentages of the *realized* total. Overshooting the target total squares
//! the whole error sum again.

use crate::types::Dataset;
use std::collections::BTreeMap;

/// Realized value of an allocation, total and per (domain, part)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllocationBreakdown {
    pub total_value: f64,
    pub buckets: BTreeMap<String, BTreeMap<String, f64>>,
}

impl AllocationBreakdown {
    /// Compute realized values of `counts` against the dataset shares.
    ///
    /// `counts` must hold one entry per share, in dataset order.
    pub fn compute(counts: &[i64], dataset: &Dataset) -> Self {
        debug_assert_eq!(counts.len(), dataset.share_count());

        let mut breakdown = Self::default();

        for (count, share) in counts.iter().zip(dataset.shares()) {
            let value = share.value_of(*count);
            breakdown.total_value += value;

            for (domain, allocation) in &share.allocations {
                let bucket = breakdown.buckets.entry(domain.clone()).or_default();
                for (part, percentage) in allocation {
                    *bucket.entry(part.clone()).or_insert(0.0) += value * percentage / 100.0;
                }
            }
        }

        breakdown
    }

    /// Value landing in (domain, part), 0 when no share declares it
    pub fn achieved(&self, domain: &str, part: &str) -> f64 {
        self.buckets
            .get(domain)
            .and_then(|parts| parts.get(part))
            .copied()
            .unwrap_or(0.0)
    }
}

/// Evaluate the cost of `counts`. Lower is better, 0 is a perfect match.
pub fn evaluate(counts: &[i64], dataset: &Dataset, target_value: f64) -> f64 {
    let breakdown = AllocationBreakdown::compute(counts, dataset);
    let total_value = breakdown.total_value;

    let mut error = (target_value - total_value).powi(2);
    for target in dataset.targets() {
        for (part, percentage) in &target.allocation {
            let d = percentage / 100.0 * total_value - breakdown.achieved(&target.name, part);
            error += d.powi(2);
        }
    }

    if total_value > target_value {
        error.powi(2)
    } else {
        error
    }
}
