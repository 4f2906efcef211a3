pub mod evaluation;
pub mod generation;
pub mod search;

pub use search::AllocationSearch;
