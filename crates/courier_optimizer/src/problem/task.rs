use serde::Serialize;

use crate::define_index_newtype;

use super::{capacity::Weight, location::LocationIdx};

define_index_newtype!(TaskIdx, Task);

/// A transport request: `weight` units are loaded at the pickup location and
/// unloaded at the delivery location by the same vehicle.
#[derive(Serialize, Debug, Clone)]
pub struct Task {
    external_id: String,
    weight: Weight,
    pickup_location_id: LocationIdx,
    delivery_location_id: LocationIdx,
}

impl Task {
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn pickup_location_id(&self) -> LocationIdx {
        self.pickup_location_id
    }

    pub fn delivery_location_id(&self) -> LocationIdx {
        self.delivery_location_id
    }
}

#[derive(Default)]
pub struct TaskBuilder {
    external_id: Option<String>,
    weight: Option<Weight>,
    pickup_location_id: Option<usize>,
    delivery_location_id: Option<usize>,
}

impl TaskBuilder {
    pub fn set_external_id(&mut self, external_id: String) -> &mut TaskBuilder {
        self.external_id = Some(external_id);
        self
    }

    pub fn set_weight(&mut self, weight: Weight) -> &mut TaskBuilder {
        self.weight = Some(weight);
        self
    }

    pub fn set_pickup_location_id(&mut self, location_id: usize) -> &mut TaskBuilder {
        self.pickup_location_id = Some(location_id);
        self
    }

    pub fn set_delivery_location_id(&mut self, location_id: usize) -> &mut TaskBuilder {
        self.delivery_location_id = Some(location_id);
        self
    }

    pub fn build(self) -> Task {
        Task {
            external_id: self.external_id.expect("External ID is required"),
            weight: self.weight.expect("Weight is required"),
            pickup_location_id: self
                .pickup_location_id
                .expect("Pickup location is required")
                .into(),
            delivery_location_id: self
                .delivery_location_id
                .expect("Delivery location is required")
                .into(),
        }
    }
}
