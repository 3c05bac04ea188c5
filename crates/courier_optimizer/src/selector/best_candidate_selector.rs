use std::cmp::Ordering;

use crate::{
    problem::pickup_delivery_problem::PickupDeliveryProblem,
    solver::{accepted_solution::AcceptedSolution, solution::solution::Solution},
};

/// Keeps the cheapest candidate offered so far.
///
/// Exact cost ties go to the candidate whose longest vehicle sequence is
/// shorter, then to the one offered first.
#[derive(Default)]
pub struct BestCandidateSelector {
    best: Option<AcceptedSolution>,
    candidates: usize,
}

impl BestCandidateSelector {
    pub fn offer(&mut self, problem: &PickupDeliveryProblem, candidate: Solution) {
        self.candidates += 1;
        let candidate = AcceptedSolution::evaluate(problem, candidate);

        let replace = match &self.best {
            None => true,
            Some(best) => match candidate.cost.total_cmp(&best.cost) {
                Ordering::Less => true,
                Ordering::Equal => {
                    candidate.solution.longest_sequence_len()
                        < best.solution.longest_sequence_len()
                }
                Ordering::Greater => false,
            },
        };

        if replace {
            self.best = Some(candidate);
        }
    }

    pub fn candidates(&self) -> usize {
        self.candidates
    }

    pub fn into_best(self) -> Option<AcceptedSolution> {
        self.best
    }
}
