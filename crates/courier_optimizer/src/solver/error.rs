use thiserror::Error;

use crate::problem::{
    capacity::{Capacity, Weight},
    task::TaskIdx,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("task {task} weighs {weight} but the largest vehicle only carries {capacity}")]
    InfeasibleInput {
        task: TaskIdx,
        weight: Weight,
        capacity: Capacity,
    },
    #[error("invalid solver parameters: {0}")]
    InvalidParams(String),
}
