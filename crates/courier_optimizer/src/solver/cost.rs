use crate::problem::{
    pickup_delivery_problem::PickupDeliveryProblem, transport_network::Distance,
    vehicle::VehicleIdx,
};

use super::solution::solution::Solution;

/// Distance travelled by `vehicle_id`: from its start location to the first
/// event, then between consecutive events. Zero for an empty sequence.
pub fn transport_cost(
    problem: &PickupDeliveryProblem,
    solution: &Solution,
    vehicle_id: VehicleIdx,
) -> Distance {
    let sequence = solution.sequence(vehicle_id);
    let Some(first) = sequence.first() else {
        return 0.0;
    };

    let start = problem.vehicle(vehicle_id).start_location_id();
    let mut cost = problem.distance(start, first.location_id(problem));

    for window in sequence.windows(2) {
        cost += problem.distance(
            window[0].location_id(problem),
            window[1].location_id(problem),
        );
    }

    cost
}

pub fn total_transport_cost(problem: &PickupDeliveryProblem, solution: &Solution) -> Distance {
    solution
        .vehicle_ids()
        .map(|vehicle_id| transport_cost(problem, solution, vehicle_id))
        .sum()
}
