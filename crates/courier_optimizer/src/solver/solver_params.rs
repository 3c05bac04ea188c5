use jiff::SignedDuration;

use crate::acceptor::{
    probabilistic_acceptor::ProbabilisticAcceptor, solution_acceptor::SolutionAcceptor,
};

use super::error::SolverError;

#[derive(Clone, Debug)]
pub struct SolverParams {
    pub terminations: Vec<Termination>,

    /// Subtracted from the deadline so the search stops with time to spare.
    pub deadline_margin: SignedDuration,

    pub solver_acceptor: SolverAcceptorStrategy,
    pub acceptance_probability: f64,

    pub seed: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Termination {
    Duration(SignedDuration),
    Iterations(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolverAcceptorStrategy {
    Probabilistic,
    Any,
}

pub const DEFAULT_SEED: u64 = 2427121;

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            terminations: vec![
                Termination::Iterations(10000),
                Termination::Duration(SignedDuration::from_secs(30)),
            ],
            deadline_margin: SignedDuration::from_millis(500),
            solver_acceptor: SolverAcceptorStrategy::Probabilistic,
            acceptance_probability: 0.3,
            seed: DEFAULT_SEED,
        }
    }
}

impl SolverParams {
    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.acceptance_probability.is_finite()
            || !(0.0..=1.0).contains(&self.acceptance_probability)
        {
            return Err(SolverError::InvalidParams(format!(
                "acceptance probability must be within [0, 1], got {}",
                self.acceptance_probability
            )));
        }

        if self.terminations.is_empty() {
            return Err(SolverError::InvalidParams(
                "at least one termination is required".to_owned(),
            ));
        }

        if self.deadline_margin.is_negative() {
            return Err(SolverError::InvalidParams(format!(
                "deadline margin must not be negative, got {}",
                self.deadline_margin
            )));
        }

        for termination in &self.terminations {
            if let Termination::Duration(duration) = termination {
                if duration.is_negative() {
                    return Err(SolverError::InvalidParams(format!(
                        "deadline must not be negative, got {duration}"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Smallest iteration cap, if any.
    pub fn max_iterations(&self) -> Option<usize> {
        self.terminations
            .iter()
            .filter_map(|termination| match termination {
                Termination::Iterations(iterations) => Some(*iterations),
                _ => None,
            })
            .min()
    }

    /// Smallest deadline, if any.
    pub fn deadline(&self) -> Option<SignedDuration> {
        self.terminations
            .iter()
            .filter_map(|termination| match termination {
                Termination::Duration(duration) => Some(*duration),
                _ => None,
            })
            .min()
    }

    /// Time the search may run: the deadline minus the margin, never below
    /// zero.
    pub fn search_time_limit(&self) -> Option<SignedDuration> {
        self.deadline().map(|deadline| {
            deadline
                .saturating_sub(self.deadline_margin)
                .max(SignedDuration::ZERO)
        })
    }

    pub fn solution_acceptor(&self) -> SolutionAcceptor {
        match self.solver_acceptor {
            SolverAcceptorStrategy::Probabilistic => SolutionAcceptor::Probabilistic(
                ProbabilisticAcceptor::new(self.acceptance_probability),
            ),
            SolverAcceptorStrategy::Any => SolutionAcceptor::Any,
        }
    }
}
