use smallvec::SmallVec;
use tracing::{Level, instrument};

use crate::{
    problem::{
        capacity::{Capacity, Load, Weight, headroom},
        pickup_delivery_problem::PickupDeliveryProblem,
    },
    solver::solution::{solution::Solution, task_event::TaskEvent},
};

use super::neighborhood_move::{NeighborhoodFocus, NeighborhoodMove};

/// Inclusive range of insertion positions in a sequence where the vehicle
/// has room for an extra weight after every prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionWindow {
    pub start: usize,
    pub end: usize,
}

/// Maximal runs of positions `k` in `0..=sequence.len()` where the load after
/// `sequence[..k]` leaves at least `weight` of headroom.
///
/// A task picked up at position `i` and delivered before `sequence[j]` is on
/// board for every position between `i` and `j`, so both must lie in the same
/// window.
pub fn insertion_windows(
    problem: &PickupDeliveryProblem,
    sequence: &[TaskEvent],
    capacity: Capacity,
    weight: Weight,
) -> SmallVec<[InsertionWindow; 4]> {
    let mut windows = SmallVec::new();
    let mut open: Option<usize> = None;
    let mut load: Load = 0;

    for position in 0..=sequence.len() {
        if position > 0 {
            load += sequence[position - 1].load_delta(problem);
        }

        let fits = headroom(capacity, load) >= Load::from(weight);
        match (open, fits) {
            (None, true) => open = Some(position),
            (Some(start), false) => {
                windows.push(InsertionWindow {
                    start,
                    end: position - 1,
                });
                open = None;
            }
            _ => {}
        }
    }

    if let Some(start) = open {
        windows.push(InsertionWindow {
            start,
            end: sequence.len(),
        });
    }

    windows
}

/// **Change Order**
///
/// Removes the focal task from its vehicle and reinserts it at every pair of
/// positions that keeps the vehicle within capacity.
///
/// ```text
/// REDUCED:
///    V: (A) -> (B) -> (C)
///
/// CANDIDATE (pickup at 1, delivery at 2):
///    V: (A) -> [P] -> (B) -> [D] -> (C)
/// ```
///
/// The original placement is always among the candidates, so the set is
/// never empty when the task is on the vehicle.
#[derive(Debug)]
pub struct ChangeOrderMove;

impl NeighborhoodMove for ChangeOrderMove {
    #[instrument(skip_all, level = Level::DEBUG)]
    fn generate_candidates<C>(
        problem: &PickupDeliveryProblem,
        solution: &Solution,
        focus: NeighborhoodFocus,
        mut consumer: C,
    ) where
        C: FnMut(Solution),
    {
        let NeighborhoodFocus {
            vehicle_id,
            task_id,
        } = focus;
        let pickup = TaskEvent::Pickup(task_id);
        let delivery = TaskEvent::Delivery(task_id);

        if !solution.contains(vehicle_id, pickup) {
            return;
        }

        let mut reduced = solution.clone();
        reduced.remove_task(vehicle_id, task_id);

        let windows = insertion_windows(
            problem,
            reduced.sequence(vehicle_id),
            problem.vehicle(vehicle_id).capacity(),
            problem.task(task_id).weight(),
        );

        debug_assert!(
            !windows.is_empty(),
            "{task_id} fits nowhere on {vehicle_id}"
        );

        for InsertionWindow { start, end } in windows {
            for pickup_position in start..=end {
                for delivery_position in pickup_position..=end {
                    let mut candidate = reduced.clone();
                    candidate.insert(vehicle_id, pickup_position, pickup);
                    candidate.insert(vehicle_id, delivery_position + 1, delivery);

                    consumer(candidate);
                }
            }
        }
    }
}
