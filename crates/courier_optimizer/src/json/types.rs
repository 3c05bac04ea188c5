use fxhash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::problem::{
    euclidean_network::EuclideanNetwork,
    location::{Location, LocationIdx},
    pickup_delivery_problem::{PickupDeliveryProblem, PickupDeliveryProblemBuilder},
    road_network::{Road, RoadNetwork},
    task::{Task, TaskBuilder},
    vehicle::{Vehicle, VehicleBuilder},
};

use super::error::JsonProblemError;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields, rename = "PickupDeliveryProblem")]
pub struct JsonPickupDeliveryProblem {
    pub locations: Vec<JsonLocation>,
    /// Without roads every pair of locations is directly connected.
    pub roads: Option<Vec<JsonRoad>>,
    pub vehicles: Vec<JsonVehicle>,
    pub tasks: Vec<JsonTask>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields, rename = "Location")]
pub struct JsonLocation {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields, rename = "Road")]
pub struct JsonRoad {
    pub from: String,
    pub to: String,
    /// Straight-line distance when missing.
    pub length: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields, rename = "Vehicle")]
pub struct JsonVehicle {
    pub id: String,
    pub location: String,
    pub capacity: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields, rename = "Task")]
pub struct JsonTask {
    pub id: String,
    pub weight: u32,
    pub pickup: String,
    pub delivery: String,
}

struct LocationLookup(FxHashMap<String, usize>);

impl LocationLookup {
    fn resolve(&self, referenced_by: String, location: &str) -> Result<usize, JsonProblemError> {
        self.0
            .get(location)
            .copied()
            .ok_or_else(|| JsonProblemError::UnknownLocation {
                referenced_by,
                location: location.to_owned(),
            })
    }
}

impl JsonPickupDeliveryProblem {
    pub fn from_reader<R>(reader: R) -> Result<Self, serde_json::Error>
    where
        R: std::io::Read,
    {
        serde_json::from_reader(reader)
    }

    #[instrument(skip_all)]
    pub fn build_problem(&self) -> Result<PickupDeliveryProblem, JsonProblemError> {
        let lookup = self.location_lookup()?;
        let locations = self
            .locations
            .iter()
            .map(|location| Location::new(location.id.clone(), location.x, location.y))
            .collect::<Vec<_>>();

        let vehicles = self.build_vehicles(&lookup)?;
        let tasks = self.build_tasks(&lookup)?;

        let mut builder = PickupDeliveryProblemBuilder::default();

        match &self.roads {
            Some(roads) => {
                let roads = self.build_roads(roads, &lookup, &locations)?;
                let network = RoadNetwork::new(locations.len(), &roads);
                self.check_reachability(&network, &vehicles, &tasks)?;
                builder.set_network(network);
            }
            None => {
                builder.set_network(EuclideanNetwork::new(&locations));
            }
        }

        builder
            .set_locations(locations)
            .set_vehicles(vehicles)
            .set_tasks(tasks);

        Ok(builder.build())
    }

    fn location_lookup(&self) -> Result<LocationLookup, JsonProblemError> {
        let mut lookup = FxHashMap::default();

        for (index, location) in self.locations.iter().enumerate() {
            if !location.x.is_finite() || !location.y.is_finite() {
                return Err(JsonProblemError::InvalidCoordinates {
                    location: location.id.clone(),
                });
            }

            if lookup.insert(location.id.clone(), index).is_some() {
                return Err(JsonProblemError::DuplicateLocation(location.id.clone()));
            }
        }

        Ok(LocationLookup(lookup))
    }

    fn build_roads(
        &self,
        roads: &[JsonRoad],
        lookup: &LocationLookup,
        locations: &[Location],
    ) -> Result<Vec<Road>, JsonProblemError> {
        roads
            .iter()
            .map(|road| {
                let referenced_by = format!("road '{}' -> '{}'", road.from, road.to);
                let from = LocationIdx::new(lookup.resolve(referenced_by.clone(), &road.from)?);
                let to = LocationIdx::new(lookup.resolve(referenced_by, &road.to)?);

                match road.length {
                    Some(length) if !length.is_finite() || length < 0.0 => {
                        Err(JsonProblemError::InvalidRoadLength {
                            from: road.from.clone(),
                            to: road.to.clone(),
                            length,
                        })
                    }
                    Some(length) => Ok(Road::new(from, to, length)),
                    None => Ok(Road::euclidean(locations, from, to)),
                }
            })
            .collect()
    }

    fn build_vehicles(&self, lookup: &LocationLookup) -> Result<Vec<Vehicle>, JsonProblemError> {
        let mut ids = FxHashSet::default();

        self.vehicles
            .iter()
            .map(|vehicle| {
                if !ids.insert(vehicle.id.as_str()) {
                    return Err(JsonProblemError::DuplicateVehicle(vehicle.id.clone()));
                }

                if vehicle.capacity == 0 {
                    return Err(JsonProblemError::InvalidCapacity(vehicle.id.clone()));
                }

                let location_id =
                    lookup.resolve(format!("vehicle '{}'", vehicle.id), &vehicle.location)?;

                let mut builder = VehicleBuilder::default();
                builder
                    .set_vehicle_id(vehicle.id.clone())
                    .set_capacity(vehicle.capacity)
                    .set_start_location_id(location_id);
                Ok(builder.build())
            })
            .collect()
    }

    fn build_tasks(&self, lookup: &LocationLookup) -> Result<Vec<Task>, JsonProblemError> {
        let mut ids = FxHashSet::default();

        self.tasks
            .iter()
            .map(|task| {
                if !ids.insert(task.id.as_str()) {
                    return Err(JsonProblemError::DuplicateTask(task.id.clone()));
                }

                if task.weight == 0 {
                    return Err(JsonProblemError::InvalidWeight(task.id.clone()));
                }

                let referenced_by = format!("task '{}'", task.id);
                let pickup = lookup.resolve(referenced_by.clone(), &task.pickup)?;
                let delivery = lookup.resolve(referenced_by, &task.delivery)?;

                let mut builder = TaskBuilder::default();
                builder
                    .set_external_id(task.id.clone())
                    .set_weight(task.weight)
                    .set_pickup_location_id(pickup)
                    .set_delivery_location_id(delivery);
                Ok(builder.build())
            })
            .collect()
    }

    /// Any vehicle may end up serving any task, so every vehicle must reach
    /// every pickup and every pickup its delivery.
    fn check_reachability(
        &self,
        network: &RoadNetwork,
        vehicles: &[Vehicle],
        tasks: &[Task],
    ) -> Result<(), JsonProblemError> {
        let unreachable = |from: LocationIdx, to: LocationIdx| JsonProblemError::UnreachableLocation {
            from: self.locations[from.get()].id.clone(),
            to: self.locations[to.get()].id.clone(),
        };

        for task in tasks {
            if !network.is_reachable(task.pickup_location_id(), task.delivery_location_id()) {
                return Err(unreachable(
                    task.pickup_location_id(),
                    task.delivery_location_id(),
                ));
            }

            for vehicle in vehicles {
                if !network.is_reachable(vehicle.start_location_id(), task.pickup_location_id()) {
                    return Err(unreachable(
                        vehicle.start_location_id(),
                        task.pickup_location_id(),
                    ));
                }
            }
        }

        Ok(())
    }
}
