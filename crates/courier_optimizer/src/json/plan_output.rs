use serde::Serialize;

use crate::{
    plan::{action::Action, vehicle_plan::VehiclePlan},
    problem::{pickup_delivery_problem::PickupDeliveryProblem, transport_network::Distance},
};

pub trait FromProblem<T> {
    fn from_problem(value: T, problem: &PickupDeliveryProblem) -> Self;
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename = "Plans")]
pub struct JsonPlans {
    pub total_distance: Distance,
    pub vehicles: Vec<JsonVehiclePlan>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename = "VehiclePlan")]
pub struct JsonVehiclePlan {
    pub vehicle: String,
    pub start: String,
    pub distance: Distance,
    pub actions: Vec<JsonAction>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JsonAction {
    Move { location: String },
    Pickup { task: String },
    Delivery { task: String },
}

impl FromProblem<&Action> for JsonAction {
    fn from_problem(value: &Action, problem: &PickupDeliveryProblem) -> Self {
        match value {
            Action::Move(location_id) => JsonAction::Move {
                location: problem.location(*location_id).external_id().to_owned(),
            },
            Action::Pickup(task_id) => JsonAction::Pickup {
                task: problem.task(*task_id).external_id().to_owned(),
            },
            Action::Delivery(task_id) => JsonAction::Delivery {
                task: problem.task(*task_id).external_id().to_owned(),
            },
        }
    }
}

impl FromProblem<&VehiclePlan> for JsonVehiclePlan {
    fn from_problem(value: &VehiclePlan, problem: &PickupDeliveryProblem) -> Self {
        JsonVehiclePlan {
            vehicle: problem.vehicle(value.vehicle_id()).external_id().to_owned(),
            start: problem
                .location(value.start_location_id())
                .external_id()
                .to_owned(),
            distance: value.total_distance(problem),
            actions: value
                .actions()
                .iter()
                .map(|action| JsonAction::from_problem(action, problem))
                .collect(),
        }
    }
}

impl FromProblem<&[VehiclePlan]> for JsonPlans {
    fn from_problem(value: &[VehiclePlan], problem: &PickupDeliveryProblem) -> Self {
        let vehicles = value
            .iter()
            .map(|plan| JsonVehiclePlan::from_problem(plan, problem))
            .collect::<Vec<_>>();

        JsonPlans {
            total_distance: vehicles.iter().map(|plan| plan.distance).sum(),
            vehicles,
        }
    }
}
