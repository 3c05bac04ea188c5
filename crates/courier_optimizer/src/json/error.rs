use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum JsonProblemError {
    #[error("location '{0}' is defined more than once")]
    DuplicateLocation(String),
    #[error("vehicle '{0}' is defined more than once")]
    DuplicateVehicle(String),
    #[error("task '{0}' is defined more than once")]
    DuplicateTask(String),
    #[error("{referenced_by} references unknown location '{location}'")]
    UnknownLocation {
        referenced_by: String,
        location: String,
    },
    #[error("location '{location}' has non-finite coordinates")]
    InvalidCoordinates { location: String },
    #[error("road '{from}' -> '{to}' has an invalid length {length}")]
    InvalidRoadLength { from: String, to: String, length: f64 },
    #[error("vehicle '{0}' must have a positive capacity")]
    InvalidCapacity(String),
    #[error("task '{0}' must have a positive weight")]
    InvalidWeight(String),
    #[error("location '{to}' cannot be reached from '{from}'")]
    UnreachableLocation { from: String, to: String },
}
