use std::fmt::Display;

use serde::Serialize;

use crate::problem::{location::LocationIdx, task::TaskIdx};

/// Primitive step of a vehicle plan.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Travel to the next location on the path.
    Move(LocationIdx),
    Pickup(TaskIdx),
    Delivery(TaskIdx),
}

impl Action {
    pub fn is_move(&self) -> bool {
        matches!(self, Action::Move(_))
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move(location_id) => write!(f, "Move({})", location_id.get()),
            Action::Pickup(task_id) => write!(f, "Pickup({})", task_id.get()),
            Action::Delivery(task_id) => write!(f, "Delivery({})", task_id.get()),
        }
    }
}
