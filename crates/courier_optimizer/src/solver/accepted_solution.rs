use crate::problem::{pickup_delivery_problem::PickupDeliveryProblem, transport_network::Distance};

use super::{cost::total_transport_cost, solution::solution::Solution};

/// Solution paired with its total transport cost.
#[derive(Clone, Debug, PartialEq)]
pub struct AcceptedSolution {
    pub solution: Solution,
    pub cost: Distance,
}

impl AcceptedSolution {
    pub fn evaluate(problem: &PickupDeliveryProblem, solution: Solution) -> Self {
        let cost = total_transport_cost(problem, &solution);
        AcceptedSolution { solution, cost }
    }
}
