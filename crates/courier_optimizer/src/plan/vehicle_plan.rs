use serde::Serialize;

use crate::{
    problem::{
        location::LocationIdx, pickup_delivery_problem::PickupDeliveryProblem,
        transport_network::Distance, vehicle::VehicleIdx,
    },
    solver::solution::{solution::Solution, task_event::TaskEvent},
};

use super::action::Action;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VehiclePlan {
    vehicle_id: VehicleIdx,
    start_location_id: LocationIdx,
    actions: Vec<Action>,
}

impl VehiclePlan {
    /// Walks the network path to each event's location, then handles the
    /// event. Consecutive events at the same location produce no move.
    pub fn from_sequence(
        problem: &PickupDeliveryProblem,
        vehicle_id: VehicleIdx,
        sequence: &[TaskEvent],
    ) -> Self {
        let start_location_id = problem.vehicle(vehicle_id).start_location_id();
        let mut current = start_location_id;
        let mut actions = Vec::with_capacity(sequence.len() * 2);

        for event in sequence {
            let target = event.location_id(problem);
            actions.extend(problem.path(current, target).into_iter().map(Action::Move));
            current = target;

            actions.push(match event {
                TaskEvent::Pickup(task_id) => Action::Pickup(*task_id),
                TaskEvent::Delivery(task_id) => Action::Delivery(*task_id),
            });
        }

        VehiclePlan {
            vehicle_id,
            start_location_id,
            actions,
        }
    }

    pub fn vehicle_id(&self) -> VehicleIdx {
        self.vehicle_id
    }

    pub fn start_location_id(&self) -> LocationIdx {
        self.start_location_id
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Sum of the network distances of every move.
    pub fn total_distance(&self, problem: &PickupDeliveryProblem) -> Distance {
        let mut current = self.start_location_id;
        let mut distance = 0.0;

        for action in &self.actions {
            if let Action::Move(next) = action {
                distance += problem.distance(current, *next);
                current = *next;
            }
        }

        distance
    }
}

/// One plan per vehicle, in fleet order.
pub fn build_plans(problem: &PickupDeliveryProblem, solution: &Solution) -> Vec<VehiclePlan> {
    solution
        .vehicle_ids()
        .map(|vehicle_id| {
            VehiclePlan::from_sequence(problem, vehicle_id, solution.sequence(vehicle_id))
        })
        .collect()
}
