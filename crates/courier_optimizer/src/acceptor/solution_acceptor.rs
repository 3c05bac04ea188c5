use crate::solver::accepted_solution::AcceptedSolution;

use super::{
    accept_solution::{AcceptSolution, AcceptSolutionContext},
    probabilistic_acceptor::ProbabilisticAcceptor,
};

#[derive(Debug, Clone, Copy)]
pub enum SolutionAcceptor {
    Probabilistic(ProbabilisticAcceptor),
    Any,
}

impl AcceptSolution for SolutionAcceptor {
    fn accept<R: rand::Rng>(
        &self,
        current: &AcceptedSolution,
        candidate: &AcceptedSolution,
        context: AcceptSolutionContext<R>,
    ) -> bool {
        match self {
            SolutionAcceptor::Probabilistic(acceptor) => {
                acceptor.accept(current, candidate, context)
            }
            SolutionAcceptor::Any => true,
        }
    }
}
