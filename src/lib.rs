//! Search for an integer allocation of shares that matches a target
//! portfolio value and a set of diversification targets.

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod report;
pub mod types;

pub use engines::AllocationSearch;
pub use error::{AllocationError, Result};
pub use types::{Dataset, Share, Target};
