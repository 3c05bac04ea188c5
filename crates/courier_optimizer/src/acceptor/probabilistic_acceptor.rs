use crate::solver::accepted_solution::AcceptedSolution;

use super::accept_solution::{AcceptSolution, AcceptSolutionContext};

/// Adopts the candidate with a fixed probability, whatever its cost.
#[derive(Debug, Clone, Copy)]
pub struct ProbabilisticAcceptor {
    probability: f64,
}

impl ProbabilisticAcceptor {
    /// `probability` must lie in `[0, 1]`.
    pub fn new(probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Acceptance probability {probability} is outside [0, 1]"
        );
        ProbabilisticAcceptor { probability }
    }
}

impl AcceptSolution for ProbabilisticAcceptor {
    fn accept<R: rand::Rng>(
        &self,
        _current: &AcceptedSolution,
        _candidate: &AcceptedSolution,
        context: AcceptSolutionContext<R>,
    ) -> bool {
        context.rng.random_bool(self.probability)
    }
}
