use rand::RngCore;

use crate::problem::{
    location::Location,
    pickup_delivery_problem::{PickupDeliveryProblem, PickupDeliveryProblemBuilder},
    task::{Task, TaskBuilder},
    vehicle::{Vehicle, VehicleBuilder},
};

/// Locations at integer coordinates, row by row: index `y * cols + x`.
pub fn create_location_grid(rows: usize, cols: usize) -> Vec<Location> {
    let mut locations = Vec::new();

    for y in 0..rows {
        for x in 0..cols {
            let location = Location::from_cartesian(x as f64, y as f64);
            locations.push(location);
        }
    }

    locations
}

pub fn create_locations(locations: Vec<(f64, f64)>) -> Vec<Location> {
    locations
        .iter()
        .map(|&(x, y)| Location::from_cartesian(x, y))
        .collect()
}

/// `(start location, capacity)` per vehicle.
pub fn create_basic_vehicles(vehicles: Vec<(usize, u32)>) -> Vec<Vehicle> {
    vehicles
        .iter()
        .enumerate()
        .map(|(index, &(location_id, capacity))| {
            let mut builder = VehicleBuilder::default();
            builder.set_vehicle_id(format!("vehicle-{index}"));
            builder.set_capacity(capacity);
            builder.set_start_location_id(location_id);
            builder.build()
        })
        .collect()
}

/// `(weight, pickup location, delivery location)` per task.
pub fn create_basic_tasks(tasks: Vec<(u32, usize, usize)>) -> Vec<Task> {
    tasks
        .iter()
        .enumerate()
        .map(|(index, &(weight, pickup, delivery))| {
            let mut builder = TaskBuilder::default();
            builder.set_external_id(format!("task-{index}"));
            builder.set_weight(weight);
            builder.set_pickup_location_id(pickup);
            builder.set_delivery_location_id(delivery);
            builder.build()
        })
        .collect()
}

/// Problem over a complete straight-line network.
pub fn create_test_problem(
    locations: Vec<Location>,
    vehicles: Vec<Vehicle>,
    tasks: Vec<Task>,
) -> PickupDeliveryProblem {
    let mut builder = PickupDeliveryProblemBuilder::default();

    builder.set_vehicles(vehicles);
    builder.set_tasks(tasks);
    builder.set_locations(locations);

    builder.build()
}

pub struct MockRng {
    data: Vec<u64>,
    index: usize,
}

impl MockRng {
    pub fn new(data: Vec<u64>) -> Self {
        MockRng { data, index: 0 }
    }
}

impl RngCore for MockRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.data[self.index % self.data.len()];
        self.index = (self.index + 1) % self.data.len();
        value
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for byte in dst.iter_mut() {
            *byte = 0;
        }
    }
}
