use std::fmt::Display;

use jiff::{SignedDuration, Timestamp};
use serde::Serialize;

use crate::problem::transport_network::Distance;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TerminationReason {
    MaxIterations,
    Deadline,
    /// No vehicle has anything left to rearrange.
    NothingToImprove,
}

impl Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::MaxIterations => write!(f, "maximum iterations reached"),
            TerminationReason::Deadline => write!(f, "deadline reached"),
            TerminationReason::NothingToImprove => write!(f, "nothing to improve"),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct CostEvolutionRow {
    pub timestamp: Timestamp,
    pub iteration: usize,
    pub cost: Distance,
}

#[derive(Clone, Debug, Serialize)]
pub struct SearchStatistics {
    started_at: Timestamp,
    elapsed: SignedDuration,
    iterations: usize,
    candidates: usize,
    accepted: usize,
    improvements: usize,
    initial_cost: Distance,
    final_cost: Distance,
    termination: Option<TerminationReason>,
    cost_evolution: Vec<CostEvolutionRow>,
}

impl SearchStatistics {
    pub fn new(started_at: Timestamp, initial_cost: Distance) -> Self {
        SearchStatistics {
            started_at,
            elapsed: SignedDuration::ZERO,
            iterations: 0,
            candidates: 0,
            accepted: 0,
            improvements: 0,
            initial_cost,
            final_cost: initial_cost,
            termination: None,
            cost_evolution: vec![CostEvolutionRow {
                timestamp: started_at,
                iteration: 0,
                cost: initial_cost,
            }],
        }
    }

    pub fn record_iteration(&mut self, candidates: usize) {
        self.iterations += 1;
        self.candidates += candidates;
    }

    pub fn record_accepted(&mut self, iteration: usize, previous_cost: Distance, cost: Distance) {
        self.accepted += 1;
        self.final_cost = cost;

        if cost < previous_cost {
            self.improvements += 1;
            self.cost_evolution.push(CostEvolutionRow {
                timestamp: Timestamp::now(),
                iteration,
                cost,
            });
        }
    }

    pub fn record_termination(&mut self, reason: TerminationReason) {
        self.termination = Some(reason);
        self.elapsed = Timestamp::now().duration_since(self.started_at);
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn elapsed(&self) -> SignedDuration {
        self.elapsed
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn candidates(&self) -> usize {
        self.candidates
    }

    pub fn accepted(&self) -> usize {
        self.accepted
    }

    pub fn improvements(&self) -> usize {
        self.improvements
    }

    pub fn initial_cost(&self) -> Distance {
        self.initial_cost
    }

    pub fn final_cost(&self) -> Distance {
        self.final_cost
    }

    pub fn termination(&self) -> Option<TerminationReason> {
        self.termination
    }

    pub fn cost_evolution(&self) -> &[CostEvolutionRow] {
        &self.cost_evolution
    }
}
