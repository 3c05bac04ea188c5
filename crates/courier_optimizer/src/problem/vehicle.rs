use serde::Serialize;

use crate::define_index_newtype;

use super::{
    capacity::{Capacity, Weight},
    location::LocationIdx,
};

define_index_newtype!(VehicleIdx, Vehicle);

#[derive(Serialize, Debug, Clone)]
pub struct Vehicle {
    external_id: String,
    capacity: Capacity,
    start_location_id: LocationIdx,
}

impl Vehicle {
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Location the vehicle is at when planning starts.
    pub fn start_location_id(&self) -> LocationIdx {
        self.start_location_id
    }

    pub fn can_carry(&self, weight: Weight) -> bool {
        weight <= self.capacity
    }
}

#[derive(Default)]
pub struct VehicleBuilder {
    external_id: Option<String>,
    capacity: Option<Capacity>,
    start_location_id: Option<usize>,
}

impl VehicleBuilder {
    pub fn set_vehicle_id(&mut self, external_id: String) -> &mut VehicleBuilder {
        self.external_id = Some(external_id);
        self
    }

    pub fn set_capacity(&mut self, capacity: Capacity) -> &mut VehicleBuilder {
        self.capacity = Some(capacity);
        self
    }

    pub fn set_start_location_id(&mut self, start_location_id: usize) -> &mut VehicleBuilder {
        self.start_location_id = Some(start_location_id);
        self
    }

    pub fn build(self) -> Vehicle {
        Vehicle {
            external_id: self.external_id.expect("External ID is required"),
            capacity: self.capacity.expect("Capacity is required"),
            start_location_id: self
                .start_location_id
                .expect("Start location is required")
                .into(),
        }
    }
}
