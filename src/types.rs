use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Classification axis name, e.g. "sector" or "geography"
pub type Domain = String;
/// Bucket inside a domain, e.g. "tech" or "europe"
pub type Part = String;
/// Percentage in the 0-100 range
pub type Percentage = f64;

/// Part name -> percentage. Ordered so that value accumulation is reproducible.
pub type Allocation = BTreeMap<Part, Percentage>;

/// Domain name -> allocation inside that domain
pub type Allocations = BTreeMap<Domain, Allocation>;

/// Desired split of total portfolio value across the parts of one domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub name: Domain,
    #[serde(default)]
    pub allocation: Allocation,
}

/// A holding that the search may buy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    pub code: String,
    /// Count already held; the search never goes below it once mutated
    #[serde(default)]
    pub owned: i64,
    pub price: f64,
    #[serde(default = "default_curr_ratio")]
    pub curr_ratio: f64,
    #[serde(default)]
    pub allocations: Allocations,
}

fn default_curr_ratio() -> f64 {
    1.0
}

impl Share {
    /// Value of `count` shares in the portfolio currency
    pub fn value_of(&self, count: i64) -> f64 {
        count as f64 * self.price * self.curr_ratio
    }

    /// Value of `count` shares before currency conversion
    pub fn raw_value_of(&self, count: i64) -> f64 {
        count as f64 * self.price
    }
}

/// Shares and targets loaded once at startup.
///
/// Fields are private: once built, a dataset can only be read. The search
/// shares it between every candidate through an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    targets: Vec<Target>,
    #[serde(default)]
    shares: Vec<Share>,
}

impl Dataset {
    pub fn new(targets: Vec<Target>, shares: Vec<Share>) -> Self {
        Self { targets, shares }
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    pub fn share_count(&self) -> usize {
        self.shares.len()
    }
}
