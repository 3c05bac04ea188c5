use jiff::Timestamp;
use parking_lot::RwLock;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use serde::Serialize;
use tracing::info;

use crate::{problem::pickup_delivery_problem::PickupDeliveryProblem, timer_debug};

use super::{
    accepted_solution::AcceptedSolution, construction::initial_solution::construct_initial_solution,
    error::SolverError, search::LocalSearch, solver_params::SolverParams,
    statistics::SearchStatistics,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum SolverStatus {
    Pending,
    Running,
    Completed,
}

pub struct Solver {
    problem: PickupDeliveryProblem,
    params: SolverParams,
    status: RwLock<SolverStatus>,
    statistics: RwLock<Option<SearchStatistics>>,
    created_at: Timestamp,
}

impl Solver {
    pub fn new(problem: PickupDeliveryProblem, params: SolverParams) -> Self {
        Solver {
            problem,
            params,
            status: RwLock::new(SolverStatus::Pending),
            statistics: RwLock::new(None),
            created_at: Timestamp::now(),
        }
    }

    /// Runs the search with a generator seeded from the parameters.
    pub fn solve(&self) -> Result<AcceptedSolution, SolverError> {
        self.solve_with_rng(SmallRng::seed_from_u64(self.params.seed))
    }

    pub fn solve_with_rng<R>(&self, rng: R) -> Result<AcceptedSolution, SolverError>
    where
        R: Rng,
    {
        self.params.validate()?;

        *self.status.write() = SolverStatus::Running;
        let result = self.run_search(rng);
        *self.status.write() = SolverStatus::Completed;

        result
    }

    fn run_search<R>(&self, rng: R) -> Result<AcceptedSolution, SolverError>
    where
        R: Rng,
    {
        info!(
            vehicles = self.problem.vehicles().len(),
            tasks = self.problem.tasks().len(),
            seed = self.params.seed,
            "Solving pickup and delivery problem"
        );

        let initial_solution = timer_debug!(
            "Initial solution",
            construct_initial_solution(&self.problem)?
        );

        let search = LocalSearch::new(&self.problem, &self.params, initial_solution, rng)?;
        let (solution, statistics) = timer_debug!("Local search", search.run());

        *self.statistics.write() = Some(statistics);

        Ok(solution)
    }

    pub fn status(&self) -> SolverStatus {
        *self.status.read()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn problem(&self) -> &PickupDeliveryProblem {
        &self.problem
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    /// Statistics of the last completed search.
    pub fn statistics(&self) -> Option<SearchStatistics> {
        self.statistics.read().clone()
    }
}
