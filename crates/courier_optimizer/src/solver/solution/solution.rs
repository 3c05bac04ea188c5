use fxhash::FxHashMap;
use thiserror::Error;

use crate::{
    problem::{
        capacity::{Load, is_capacity_satisfied},
        pickup_delivery_problem::PickupDeliveryProblem,
        task::TaskIdx,
        vehicle::VehicleIdx,
    },
    utils::enumerate_idx::EnumerateIdx,
};

use super::task_event::TaskEvent;

/// Assignment of task events to vehicles. `sequences[v]` is the visiting
/// order of vehicle `v`, in fleet order.
///
/// Cloning a solution deep-copies every sequence, so candidates derived from
/// a solution never observe each other's edits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    sequences: Vec<Vec<TaskEvent>>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolutionViolation {
    #[error("solution has {actual} sequences but the fleet has {expected} vehicles")]
    FleetMismatch { expected: usize, actual: usize },
    #[error("{event} appears more than once")]
    DuplicateEvent { event: TaskEvent },
    #[error("{event} on vehicle {vehicle} has no matching {missing}")]
    MissingCounterpart {
        vehicle: VehicleIdx,
        event: TaskEvent,
        missing: TaskEvent,
    },
    #[error("{event} on vehicle {vehicle} happens before its pickup")]
    DeliveryBeforePickup { vehicle: VehicleIdx, event: TaskEvent },
    #[error("vehicle {vehicle} carries {load} after position {position}, capacity is {capacity}")]
    CapacityExceeded {
        vehicle: VehicleIdx,
        position: usize,
        load: Load,
        capacity: u32,
    },
}

impl Solution {
    /// One empty sequence per vehicle of the fleet.
    pub fn empty(problem: &PickupDeliveryProblem) -> Self {
        Solution {
            sequences: vec![Vec::new(); problem.vehicles().len()],
        }
    }

    pub fn from_sequences(sequences: Vec<Vec<TaskEvent>>) -> Self {
        Solution { sequences }
    }

    pub fn vehicle_ids(&self) -> impl ExactSizeIterator<Item = VehicleIdx> + use<> {
        (0..self.sequences.len()).map(VehicleIdx::new)
    }

    pub fn sequence(&self, vehicle_id: VehicleIdx) -> &[TaskEvent] {
        &self.sequences[vehicle_id.get()]
    }

    pub fn sequences(&self) -> &[Vec<TaskEvent>] {
        &self.sequences
    }

    pub fn event_count(&self, vehicle_id: VehicleIdx) -> usize {
        self.sequences[vehicle_id.get()].len()
    }

    pub fn total_event_count(&self) -> usize {
        self.sequences.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.iter().all(Vec::is_empty)
    }

    pub fn longest_sequence_len(&self) -> usize {
        self.sequences.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn non_empty_vehicle_ids(&self) -> impl Iterator<Item = VehicleIdx> + '_ {
        self.sequences
            .iter()
            .enumerate_idx()
            .filter(|(_, sequence): &(VehicleIdx, &Vec<TaskEvent>)| !sequence.is_empty())
            .map(|(vehicle_id, _)| vehicle_id)
    }

    /// Picks uniformly among vehicles with a non-empty sequence by drawing an
    /// index from their count.
    pub fn random_non_empty_vehicle<R>(&self, rng: &mut R) -> Option<VehicleIdx>
    where
        R: rand::Rng,
    {
        let non_empty = self.non_empty_vehicle_ids().collect::<Vec<_>>();
        if non_empty.is_empty() {
            return None;
        }

        Some(non_empty[rng.random_range(0..non_empty.len())])
    }

    /// Tasks handled by `vehicle_id`, in order of first appearance.
    pub fn distinct_tasks(&self, vehicle_id: VehicleIdx) -> Vec<TaskIdx> {
        self.sequence(vehicle_id)
            .iter()
            .filter(|event| event.is_pickup())
            .map(TaskEvent::task_id)
            .collect()
    }

    pub fn contains(&self, vehicle_id: VehicleIdx, event: TaskEvent) -> bool {
        self.sequence(vehicle_id).contains(&event)
    }

    pub fn vehicle_of_task(&self, task_id: TaskIdx) -> Option<VehicleIdx> {
        let pickup = TaskEvent::Pickup(task_id);
        self.vehicle_ids()
            .find(|&vehicle_id| self.contains(vehicle_id, pickup))
    }

    pub fn insert(&mut self, vehicle_id: VehicleIdx, index: usize, event: TaskEvent) {
        self.sequences[vehicle_id.get()].insert(index, event);
    }

    pub fn push(&mut self, vehicle_id: VehicleIdx, event: TaskEvent) {
        self.sequences[vehicle_id.get()].push(event);
    }

    /// Removes the first event equal to `event`. Returns whether one was found.
    pub fn remove(&mut self, vehicle_id: VehicleIdx, event: TaskEvent) -> bool {
        let sequence = &mut self.sequences[vehicle_id.get()];
        match sequence.iter().position(|&e| e == event) {
            Some(index) => {
                sequence.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes both events of `task_id` from the vehicle.
    pub fn remove_task(&mut self, vehicle_id: VehicleIdx, task_id: TaskIdx) -> bool {
        let removed_pickup = self.remove(vehicle_id, TaskEvent::Pickup(task_id));
        let removed_delivery = self.remove(vehicle_id, TaskEvent::Delivery(task_id));
        removed_pickup && removed_delivery
    }

    /// Load carried after each event of the sequence.
    pub fn running_loads(
        &self,
        problem: &PickupDeliveryProblem,
        vehicle_id: VehicleIdx,
    ) -> Vec<Load> {
        self.sequence(vehicle_id)
            .iter()
            .scan(0 as Load, |load, event| {
                *load += event.load_delta(problem);
                Some(*load)
            })
            .collect()
    }

    /// Tasks represented in the solution, sorted.
    pub fn assigned_tasks(&self) -> Vec<TaskIdx> {
        let mut tasks = self
            .sequences
            .iter()
            .flatten()
            .filter(|event| event.is_pickup())
            .map(TaskEvent::task_id)
            .collect::<Vec<_>>();
        tasks.sort();
        tasks
    }

    /// Verifies the pairing, precedence and capacity invariants.
    pub fn check(&self, problem: &PickupDeliveryProblem) -> Result<(), SolutionViolation> {
        if self.sequences.len() != problem.vehicles().len() {
            return Err(SolutionViolation::FleetMismatch {
                expected: problem.vehicles().len(),
                actual: self.sequences.len(),
            });
        }

        let mut seen: FxHashMap<TaskEvent, VehicleIdx> = FxHashMap::default();

        for vehicle_id in self.vehicle_ids() {
            let capacity = problem.vehicle(vehicle_id).capacity();
            let mut load: Load = 0;

            for (position, &event) in self.sequence(vehicle_id).iter().enumerate() {
                if seen.insert(event, vehicle_id).is_some() {
                    return Err(SolutionViolation::DuplicateEvent { event });
                }

                if event.is_delivery() && !seen.contains_key(&event.counterpart()) {
                    return Err(
                        if self.contains(vehicle_id, event.counterpart()) {
                            SolutionViolation::DeliveryBeforePickup {
                                vehicle: vehicle_id,
                                event,
                            }
                        } else {
                            SolutionViolation::MissingCounterpart {
                                vehicle: vehicle_id,
                                event,
                                missing: event.counterpart(),
                            }
                        },
                    );
                }

                load += event.load_delta(problem);
                if !is_capacity_satisfied(capacity, load) {
                    return Err(SolutionViolation::CapacityExceeded {
                        vehicle: vehicle_id,
                        position,
                        load,
                        capacity,
                    });
                }
            }
        }

        for (&event, &vehicle_id) in &seen {
            let counterpart = event.counterpart();
            if seen.get(&counterpart) != Some(&vehicle_id) {
                return Err(SolutionViolation::MissingCounterpart {
                    vehicle: vehicle_id,
                    event,
                    missing: counterpart,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    fn p(task: usize) -> TaskEvent {
        TaskEvent::Pickup(TaskIdx::new(task))
    }

    fn d(task: usize) -> TaskEvent {
        TaskEvent::Delivery(TaskIdx::new(task))
    }

    fn two_vehicle_problem() -> PickupDeliveryProblem {
        test_utils::create_test_problem(
            test_utils::create_location_grid(3, 3),
            test_utils::create_basic_vehicles(vec![(0, 10), (8, 5)]),
            test_utils::create_basic_tasks(vec![(4, 1, 2), (3, 3, 4), (6, 5, 6)]),
        )
    }

    #[test]
    fn test_remove_first_structurally_equal_event() {
        let mut solution = Solution::from_sequences(vec![vec![p(0), p(1), d(1), d(0)], vec![]]);

        assert!(solution.remove(VehicleIdx::new(0), d(1)));
        assert_eq!(solution.sequence(VehicleIdx::new(0)), &[p(0), p(1), d(0)]);
        assert!(!solution.remove(VehicleIdx::new(0), d(1)));
        assert!(!solution.remove(VehicleIdx::new(1), p(0)));
    }

    #[test]
    fn test_clone_is_deep() {
        let original = Solution::from_sequences(vec![vec![p(0), d(0)], vec![]]);
        let mut copy = original.clone();

        copy.remove_task(VehicleIdx::new(0), TaskIdx::new(0));
        copy.push(VehicleIdx::new(1), p(0));

        assert_eq!(original.sequence(VehicleIdx::new(0)), &[p(0), d(0)]);
        assert!(original.sequence(VehicleIdx::new(1)).is_empty());
    }

    #[test]
    fn test_insert_and_counts() {
        let mut solution = Solution::from_sequences(vec![vec![p(0), d(0)], vec![]]);

        solution.insert(VehicleIdx::new(0), 0, p(1));
        solution.insert(VehicleIdx::new(0), 2, d(1));

        assert_eq!(solution.sequence(VehicleIdx::new(0)), &[p(1), p(0), d(1), d(0)]);
        assert_eq!(solution.event_count(VehicleIdx::new(0)), 4);
        assert_eq!(solution.total_event_count(), 4);
        assert_eq!(solution.longest_sequence_len(), 4);
        assert_eq!(
            solution.distinct_tasks(VehicleIdx::new(0)),
            vec![TaskIdx::new(1), TaskIdx::new(0)]
        );
        assert_eq!(
            solution.non_empty_vehicle_ids().collect::<Vec<_>>(),
            vec![VehicleIdx::new(0)]
        );
        assert_eq!(
            solution.vehicle_of_task(TaskIdx::new(0)),
            Some(VehicleIdx::new(0))
        );
        assert_eq!(solution.vehicle_of_task(TaskIdx::new(2)), None);
    }

    #[test]
    fn test_running_loads() {
        let problem = two_vehicle_problem();
        let solution =
            Solution::from_sequences(vec![vec![p(0), p(1), d(0), p(2), d(1), d(2)], vec![]]);

        assert_eq!(
            solution.running_loads(&problem, VehicleIdx::new(0)),
            vec![4, 7, 3, 9, 6, 0]
        );
        assert_eq!(solution.check(&problem), Ok(()));
    }

    #[test]
    fn test_check_capacity_exceeded() {
        let problem = two_vehicle_problem();
        let solution = Solution::from_sequences(vec![
            vec![p(0), d(0), p(2), d(2)],
            vec![p(1), d(1)],
        ]);
        assert_eq!(solution.check(&problem), Ok(()));

        let overloaded = Solution::from_sequences(vec![
            vec![p(0), d(0)],
            vec![p(1), p(2), d(1), d(2)],
        ]);
        assert!(matches!(
            overloaded.check(&problem),
            Err(SolutionViolation::CapacityExceeded { position: 0, .. })
                | Err(SolutionViolation::CapacityExceeded { position: 1, .. })
        ));
    }

    #[test]
    fn test_check_precedence_and_pairing() {
        let problem = two_vehicle_problem();

        let reversed = Solution::from_sequences(vec![vec![d(0), p(0)], vec![]]);
        assert_eq!(
            reversed.check(&problem),
            Err(SolutionViolation::DeliveryBeforePickup {
                vehicle: VehicleIdx::new(0),
                event: d(0),
            })
        );

        let split = Solution::from_sequences(vec![vec![p(0)], vec![d(0)]]);
        assert!(matches!(
            split.check(&problem),
            Err(SolutionViolation::MissingCounterpart { .. })
        ));

        let duplicated = Solution::from_sequences(vec![vec![p(0), d(0), p(0), d(0)], vec![]]);
        assert_eq!(
            duplicated.check(&problem),
            Err(SolutionViolation::DuplicateEvent { event: p(0) })
        );
    }
}
