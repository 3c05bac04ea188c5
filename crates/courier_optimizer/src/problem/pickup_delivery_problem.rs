use crate::utils::enumerate_idx::EnumerateIdx;

use super::{
    capacity::Capacity,
    euclidean_network::EuclideanNetwork,
    location::{Location, LocationIdx},
    task::{Task, TaskIdx},
    transport_network::{Distance, TransportNetwork},
    vehicle::{Vehicle, VehicleIdx},
};

/// Immutable input of the planner: the fleet, the tasks to carry and the
/// network they travel on.
pub struct PickupDeliveryProblem {
    locations: Vec<Location>,
    vehicles: Vec<Vehicle>,
    tasks: Vec<Task>,
    network: Box<dyn TransportNetwork>,
}

impl PickupDeliveryProblem {
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location(&self, location_id: LocationIdx) -> &Location {
        &self.locations[location_id]
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle(&self, vehicle_id: VehicleIdx) -> &Vehicle {
        &self.vehicles[vehicle_id]
    }

    pub fn vehicle_ids(&self) -> impl ExactSizeIterator<Item = VehicleIdx> + use<> {
        (0..self.vehicles.len()).map(VehicleIdx::new)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, task_id: TaskIdx) -> &Task {
        &self.tasks[task_id]
    }

    pub fn task_ids(&self) -> impl ExactSizeIterator<Item = TaskIdx> + use<> {
        (0..self.tasks.len()).map(TaskIdx::new)
    }

    pub fn network(&self) -> &dyn TransportNetwork {
        self.network.as_ref()
    }

    #[inline(always)]
    pub fn distance(&self, from: LocationIdx, to: LocationIdx) -> Distance {
        self.network.distance(from, to)
    }

    pub fn path(&self, from: LocationIdx, to: LocationIdx) -> Vec<LocationIdx> {
        self.network.path(from, to)
    }

    /// First vehicle with the strictly greatest capacity, in fleet order.
    pub fn largest_vehicle(&self) -> Option<VehicleIdx> {
        let mut largest: Option<(VehicleIdx, Capacity)> = None;

        for (vehicle_id, vehicle) in self.vehicles.iter().enumerate_idx() {
            match largest {
                Some((_, capacity)) if vehicle.capacity() <= capacity => {}
                _ => largest = Some((vehicle_id, vehicle.capacity())),
            }
        }

        largest.map(|(vehicle_id, _)| vehicle_id)
    }
}

#[derive(Default)]
pub struct PickupDeliveryProblemBuilder {
    locations: Option<Vec<Location>>,
    vehicles: Option<Vec<Vehicle>>,
    tasks: Option<Vec<Task>>,
    network: Option<Box<dyn TransportNetwork>>,
}

impl PickupDeliveryProblemBuilder {
    pub fn set_locations(&mut self, locations: Vec<Location>) -> &mut Self {
        self.locations = Some(locations);
        self
    }

    pub fn set_vehicles(&mut self, vehicles: Vec<Vehicle>) -> &mut Self {
        self.vehicles = Some(vehicles);
        self
    }

    pub fn set_tasks(&mut self, tasks: Vec<Task>) -> &mut Self {
        self.tasks = Some(tasks);
        self
    }

    pub fn set_network<N>(&mut self, network: N) -> &mut Self
    where
        N: TransportNetwork + 'static,
    {
        self.network = Some(Box::new(network));
        self
    }

    /// Without an explicit network, every pair of locations is linked by a
    /// straight road.
    pub fn build(self) -> PickupDeliveryProblem {
        let locations = self.locations.unwrap_or_default();
        let network = self
            .network
            .unwrap_or_else(|| Box::new(EuclideanNetwork::new(&locations)));

        let problem = PickupDeliveryProblem {
            vehicles: self.vehicles.unwrap_or_default(),
            tasks: self.tasks.unwrap_or_default(),
            locations,
            network,
        };

        let num_locations = problem.locations.len();
        for vehicle in &problem.vehicles {
            assert!(
                vehicle.start_location_id().get() < num_locations,
                "Vehicle {} starts at an unknown location",
                vehicle.external_id()
            );
        }
        for task in &problem.tasks {
            assert!(
                task.pickup_location_id().get() < num_locations
                    && task.delivery_location_id().get() < num_locations,
                "Task {} references an unknown location",
                task.external_id()
            );
        }

        problem
    }
}
