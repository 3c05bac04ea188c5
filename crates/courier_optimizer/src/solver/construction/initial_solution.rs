use tracing::{Level, debug, instrument, warn};

use crate::{
    problem::pickup_delivery_problem::PickupDeliveryProblem,
    solver::{
        error::SolverError,
        solution::{solution::Solution, task_event::TaskEvent},
    },
};

/// Loads every task onto the vehicle with the largest capacity, pickup
/// immediately followed by delivery, in input order.
///
/// The other vehicles start empty. Fails without a partial assignment when a
/// task is heavier than that vehicle can carry.
#[instrument(skip_all, level = Level::DEBUG)]
pub fn construct_initial_solution(
    problem: &PickupDeliveryProblem,
) -> Result<Solution, SolverError> {
    let mut solution = Solution::empty(problem);

    if problem.tasks().is_empty() {
        return Ok(solution);
    }

    let Some(vehicle_id) = problem.largest_vehicle() else {
        warn!(
            tasks = problem.tasks().len(),
            "No vehicle available, returning an empty solution"
        );
        return Ok(solution);
    };

    let vehicle = problem.vehicle(vehicle_id);

    for task_id in problem.task_ids() {
        let task = problem.task(task_id);
        if !vehicle.can_carry(task.weight()) {
            return Err(SolverError::InfeasibleInput {
                task: task_id,
                weight: task.weight(),
                capacity: vehicle.capacity(),
            });
        }

        solution.push(vehicle_id, TaskEvent::Pickup(task_id));
        solution.push(vehicle_id, TaskEvent::Delivery(task_id));
    }

    debug!(
        vehicle = vehicle.external_id(),
        capacity = vehicle.capacity(),
        "Initial solution assigns every task to the largest vehicle"
    );

    Ok(solution)
}
