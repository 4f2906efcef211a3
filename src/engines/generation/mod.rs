pub mod evolution_engine;
pub mod genome;
pub mod hall_of_fame;
pub mod operators;
pub mod progress;

pub use evolution_engine::{EvolutionConfig, EvolutionEngine, EvolutionResult, ProgressCallback};
pub use genome::{Candidate, Genome, SearchBounds};
pub use hall_of_fame::{EliteCandidate, HallOfFame};
pub use progress::{ConsoleProgressCallback, LogProgressCallback};
