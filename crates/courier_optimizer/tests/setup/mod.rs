#![allow(dead_code)]

use courier_optimizer::problem::{
    location::Location,
    pickup_delivery_problem::{PickupDeliveryProblem, PickupDeliveryProblemBuilder},
    task::{Task, TaskBuilder},
    vehicle::{Vehicle, VehicleBuilder},
};

pub fn create_location_grid(rows: usize, cols: usize) -> Vec<Location> {
    (0..rows)
        .flat_map(|y| (0..cols).map(move |x| Location::from_cartesian(x as f64, y as f64)))
        .collect()
}

/// `(start location, capacity)` per vehicle.
pub fn create_vehicles(vehicles: &[(usize, u32)]) -> Vec<Vehicle> {
    vehicles
        .iter()
        .enumerate()
        .map(|(index, &(location_id, capacity))| {
            let mut builder = VehicleBuilder::default();
            builder
                .set_vehicle_id(format!("vehicle-{index}"))
                .set_capacity(capacity)
                .set_start_location_id(location_id);
            builder.build()
        })
        .collect()
}

/// `(weight, pickup location, delivery location)` per task.
pub fn create_tasks(tasks: &[(u32, usize, usize)]) -> Vec<Task> {
    tasks
        .iter()
        .enumerate()
        .map(|(index, &(weight, pickup, delivery))| {
            let mut builder = TaskBuilder::default();
            builder
                .set_external_id(format!("task-{index}"))
                .set_weight(weight)
                .set_pickup_location_id(pickup)
                .set_delivery_location_id(delivery);
            builder.build()
        })
        .collect()
}

pub fn create_test_problem(
    locations: Vec<Location>,
    vehicles: Vec<Vehicle>,
    tasks: Vec<Task>,
) -> PickupDeliveryProblem {
    let mut builder = PickupDeliveryProblemBuilder::default();

    builder
        .set_locations(locations)
        .set_vehicles(vehicles)
        .set_tasks(tasks);

    builder.build()
}

/// Two vehicles with capacities 10 and 5 and three tasks weighing 4, 3 and 6
/// on a 3x3 grid.
pub fn create_two_vehicle_problem() -> PickupDeliveryProblem {
    create_test_problem(
        create_location_grid(3, 3),
        create_vehicles(&[(0, 10), (8, 5)]),
        create_tasks(&[(4, 1, 7), (3, 2, 6), (6, 3, 5)]),
    )
}
