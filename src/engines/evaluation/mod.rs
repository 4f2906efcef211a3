pub mod fitness;

pub use fitness::{evaluate, AllocationBreakdown};
