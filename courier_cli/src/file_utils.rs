use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use courier_optimizer::json::types::JsonPickupDeliveryProblem;
use serde::Serialize;

pub fn read_problem(path: &Path) -> Result<JsonPickupDeliveryProblem, anyhow::Error> {
    let file = File::open(path)?;
    Ok(JsonPickupDeliveryProblem::from_reader(BufReader::new(file))?)
}

/// Pretty-prints `value` to `path`, creating missing parent folders.
pub fn write_json<T>(path: &Path, value: &T) -> Result<(), anyhow::Error>
where
    T: Serialize,
{
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)?;

    Ok(())
}
