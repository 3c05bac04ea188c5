use crate::solver::accepted_solution::AcceptedSolution;

pub struct AcceptSolutionContext<'a, R> {
    pub rng: &'a mut R,
}

pub trait AcceptSolution {
    fn accept<R: rand::Rng>(
        &self,
        current: &AcceptedSolution,
        candidate: &AcceptedSolution,
        context: AcceptSolutionContext<R>,
    ) -> bool;
}
