use jiff::{SignedDuration, Timestamp};
use rand::Rng;
use tracing::{debug, info};

use crate::{
    acceptor::{
        accept_solution::{AcceptSolution, AcceptSolutionContext},
        solution_acceptor::SolutionAcceptor,
    },
    problem::pickup_delivery_problem::PickupDeliveryProblem,
    selector::best_candidate_selector::BestCandidateSelector,
};

use super::{
    accepted_solution::AcceptedSolution,
    error::SolverError,
    neighborhood::neighborhood_move::{NeighborhoodFocus, generate_neighbors},
    solution::solution::Solution,
    solver_params::SolverParams,
    statistics::{SearchStatistics, TerminationReason},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchState {
    Running,
    Done(TerminationReason),
}

/// Randomized local search over a single current solution.
///
/// Each step samples a vehicle among those with work, then one of its tasks,
/// generates the neighborhood around them, keeps the cheapest candidate and
/// adopts it according to the acceptor.
pub struct LocalSearch<'a, R> {
    problem: &'a PickupDeliveryProblem,
    acceptor: SolutionAcceptor,
    max_iterations: Option<usize>,
    time_limit: Option<SignedDuration>,
    rng: R,
    current: AcceptedSolution,
    iteration: usize,
    started_at: Timestamp,
    state: SearchState,
    statistics: SearchStatistics,
}

impl<'a, R> LocalSearch<'a, R>
where
    R: Rng,
{
    /// Fails with [`SolverError::InvalidParams`] before anything is
    /// evaluated when `params` do not validate.
    pub fn new(
        problem: &'a PickupDeliveryProblem,
        params: &SolverParams,
        initial_solution: Solution,
        rng: R,
    ) -> Result<Self, SolverError> {
        params.validate()?;

        let started_at = Timestamp::now();
        let current = AcceptedSolution::evaluate(problem, initial_solution);

        Ok(LocalSearch {
            problem,
            acceptor: params.solution_acceptor(),
            max_iterations: params.max_iterations(),
            time_limit: params.search_time_limit(),
            rng,
            statistics: SearchStatistics::new(started_at, current.cost),
            current,
            iteration: 0,
            started_at,
            state: SearchState::Running,
        })
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn current(&self) -> &AcceptedSolution {
        &self.current
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    fn termination_reason(&self) -> Option<TerminationReason> {
        if self
            .max_iterations
            .is_some_and(|max_iterations| self.iteration >= max_iterations)
        {
            return Some(TerminationReason::MaxIterations);
        }

        if let Some(time_limit) = self.time_limit {
            if Timestamp::now().duration_since(self.started_at) >= time_limit {
                return Some(TerminationReason::Deadline);
            }
        }

        None
    }

    fn finish(&mut self, reason: TerminationReason) -> SearchState {
        debug!(iteration = self.iteration, "Search stopped: {reason}");
        self.statistics.record_termination(reason);
        self.state = SearchState::Done(reason);
        self.state
    }

    /// Advances the search by one iteration. Once done, further calls are
    /// no-ops.
    pub fn step(&mut self) -> SearchState {
        if let SearchState::Done(_) = self.state {
            return self.state;
        }

        if let Some(reason) = self.termination_reason() {
            return self.finish(reason);
        }

        let Some(vehicle_id) = self.current.solution.random_non_empty_vehicle(&mut self.rng)
        else {
            return self.finish(TerminationReason::NothingToImprove);
        };

        let tasks = self.current.solution.distinct_tasks(vehicle_id);
        let task_id = tasks[self.rng.random_range(0..tasks.len())];

        let problem = self.problem;
        let mut selector = BestCandidateSelector::default();
        generate_neighbors(
            problem,
            &self.current.solution,
            NeighborhoodFocus {
                vehicle_id,
                task_id,
            },
            |candidate| selector.offer(problem, candidate),
        );

        self.statistics.record_iteration(selector.candidates());
        self.iteration += 1;

        let Some(best) = selector.into_best() else {
            return self.state;
        };

        let accepted = self.acceptor.accept(
            &self.current,
            &best,
            AcceptSolutionContext { rng: &mut self.rng },
        );

        if accepted {
            if best.cost < self.current.cost {
                debug!(
                    iteration = self.iteration,
                    cost = best.cost,
                    "Accepted improving candidate"
                );
            }

            self.statistics
                .record_accepted(self.iteration, self.current.cost, best.cost);
            self.current = best;
        }

        self.state
    }

    /// Steps until done and returns the last current solution.
    pub fn run(mut self) -> (AcceptedSolution, SearchStatistics) {
        info!(
            initial_cost = self.current.cost,
            max_iterations = self.max_iterations,
            "Starting local search"
        );

        while self.step() == SearchState::Running {}

        info!(
            iterations = self.iteration,
            final_cost = self.current.cost,
            improvements = self.statistics.improvements(),
            "Local search finished"
        );

        (self.current, self.statistics)
    }
}
