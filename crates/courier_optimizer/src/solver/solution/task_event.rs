use std::fmt::Display;

use serde::Serialize;

use crate::problem::{
    capacity::Load, location::LocationIdx, pickup_delivery_problem::PickupDeliveryProblem,
    task::TaskIdx,
};

/// Pickup or delivery half of a task. Two events are equal when they refer to
/// the same task with the same polarity.
#[derive(Serialize, Hash, Debug, Clone, Copy, Eq, PartialEq)]
pub enum TaskEvent {
    Pickup(TaskIdx),
    Delivery(TaskIdx),
}

impl TaskEvent {
    pub fn task_id(&self) -> TaskIdx {
        match self {
            TaskEvent::Pickup(id) | TaskEvent::Delivery(id) => *id,
        }
    }

    pub fn is_pickup(&self) -> bool {
        matches!(self, TaskEvent::Pickup(_))
    }

    pub fn is_delivery(&self) -> bool {
        matches!(self, TaskEvent::Delivery(_))
    }

    /// The other half of the same task.
    pub fn counterpart(&self) -> TaskEvent {
        match self {
            TaskEvent::Pickup(id) => TaskEvent::Delivery(*id),
            TaskEvent::Delivery(id) => TaskEvent::Pickup(*id),
        }
    }

    pub fn location_id(&self, problem: &PickupDeliveryProblem) -> LocationIdx {
        match self {
            TaskEvent::Pickup(id) => problem.task(*id).pickup_location_id(),
            TaskEvent::Delivery(id) => problem.task(*id).delivery_location_id(),
        }
    }

    /// Change of the vehicle load once this event has been handled.
    pub fn load_delta(&self, problem: &PickupDeliveryProblem) -> Load {
        match self {
            TaskEvent::Pickup(id) => Load::from(problem.task(*id).weight()),
            TaskEvent::Delivery(id) => -Load::from(problem.task(*id).weight()),
        }
    }
}

impl Display for TaskEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskEvent::Pickup(id) => write!(f, "Pickup({})", id.get()),
            TaskEvent::Delivery(id) => write!(f, "Delivery({})", id.get()),
        }
    }
}
