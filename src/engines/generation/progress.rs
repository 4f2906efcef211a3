use super::evolution_engine::ProgressCallback;
use super::hall_of_fame::EliteCandidate;
use std::fmt::Display;
use std::time::Duration;

pub struct ConsoleProgressCallback;

impl<G: Display> ProgressCallback<G> for ConsoleProgressCallback {
    fn on_generation_complete(
        &mut self,
        generation: usize,
        elapsed: Duration,
        best: &EliteCandidate<G>,
        _hall_of_fame_size: usize,
    ) {
        println!("{}", format_progress(generation, elapsed, best));
    }
}

/// Reports through the `log` facade instead of stdout
pub struct LogProgressCallback;

impl<G: Display> ProgressCallback<G> for LogProgressCallback {
    fn on_generation_complete(
        &mut self,
        generation: usize,
        elapsed: Duration,
        best: &EliteCandidate<G>,
        hall_of_fame_size: usize,
    ) {
        log::info!(
            "{} (hall of fame size: {})",
            format_progress(generation, elapsed, best),
            hall_of_fame_size
        );
    }
}

pub fn format_progress<G: Display>(generation: usize, elapsed: Duration, best: &EliteCandidate<G>) -> String {
    format!(
        "Best fitness at generation {} ({:.3?}): {:.2} {}",
        generation, elapsed, best.cost, best.genome
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_progress() {
        let best = EliteCandidate {
            genome: "[1 2]".to_string(),
            cost: 12.5,
            generation: 3,
            canonical_string: "[1 2]".to_string(),
        };

        let line = format_progress(40, Duration::from_millis(1500), &best);
        assert_eq!(line, "Best fitness at generation 40 (1.500s): 12.50 [1 2]");
    }
}
