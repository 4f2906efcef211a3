use crate::error::{AllocationError, Result};
use crate::types::{Allocation, Dataset};
use std::collections::HashSet;

const PERCENT_TOLERANCE: f64 = 1e-6;

pub struct DataValidator;

impl DataValidator {
    /// Validate share fields: codes, owned floor, prices, ratios, percentages
    pub fn validate_shares(dataset: &Dataset) -> Result<()> {
        let mut codes = HashSet::new();

        for (i, share) in dataset.shares().iter().enumerate() {
            if !codes.insert(share.code.as_str()) {
                return Err(AllocationError::Validation(format!(
                    "Duplicate share code '{}' at index {}",
                    share.code, i
                )));
            }
            if share.owned < 0 {
                return Err(AllocationError::Validation(format!(
                    "Share '{}': owned count must be non-negative, got {}",
                    share.code, share.owned
                )));
            }
            if !share.price.is_finite() || share.price <= 0.0 {
                return Err(AllocationError::Validation(format!(
                    "Share '{}': price must be positive, got {}",
                    share.code, share.price
                )));
            }
            if !share.curr_ratio.is_finite() || share.curr_ratio <= 0.0 {
                return Err(AllocationError::Validation(format!(
                    "Share '{}': currency ratio must be positive, got {}",
                    share.code, share.curr_ratio
                )));
            }
            for (domain, allocation) in &share.allocations {
                Self::validate_percentages(&format!("Share '{}' domain '{}'", share.code, domain), allocation)?;
            }
        }

        Ok(())
    }

    /// Validate target percentages
    pub fn validate_targets(dataset: &Dataset) -> Result<()> {
        let mut names = HashSet::new();

        for target in dataset.targets() {
            if !names.insert(target.name.as_str()) {
                return Err(AllocationError::Validation(format!(
                    "Duplicate target domain '{}'",
                    target.name
                )));
            }
            Self::validate_percentages(&format!("Target '{}'", target.name), &target.allocation)?;
        }

        Ok(())
    }

    fn validate_percentages(context: &str, allocation: &Allocation) -> Result<()> {
        for (part, percentage) in allocation {
            if !percentage.is_finite() || *percentage < 0.0 || *percentage > 100.0 {
                return Err(AllocationError::Validation(format!(
                    "{} part '{}': percentage must be within 0-100, got {}",
                    context, part, percentage
                )));
            }
        }
        Ok(())
    }

    /// Report targets that are usable but probably not what the user meant
    pub fn check_coverage(dataset: &Dataset) -> Vec<String> {
        let mut warnings = Vec::new();

        for target in dataset.targets() {
            let sum: f64 = target.allocation.values().sum();
            if !target.allocation.is_empty() && (sum - 100.0).abs() > PERCENT_TOLERANCE {
                warnings.push(format!(
                    "Target '{}' percentages sum to {} instead of 100",
                    target.name, sum
                ));
            }

            let declared = dataset
                .shares()
                .iter()
                .any(|s| s.allocations.contains_key(&target.name));
            if !declared {
                warnings.push(format!(
                    "Target '{}' is not declared by any share; its parts can never be reached",
                    target.name
                ));
            }
        }

        warnings
    }
}
