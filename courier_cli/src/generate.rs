use std::path::PathBuf;

use clap::Subcommand;
use courier_optimizer::json::types::{
    JsonLocation, JsonPickupDeliveryProblem, JsonRoad, JsonTask, JsonVehicle,
};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::info;

use crate::file_utils;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// Random problem on a square grid of locations
    Problem {
        /// Output JSON file
        #[arg(long, short = 'o')]
        out: PathBuf,

        /// Locations per side of the grid
        #[arg(long, default_value_t = 10)]
        grid: usize,

        #[arg(long, default_value_t = 3)]
        vehicles: usize,

        #[arg(long, default_value_t = 20)]
        tasks: usize,

        #[arg(long, default_value_t = 30)]
        max_capacity: u32,

        /// Link every pair of locations directly instead of using grid streets
        #[arg(long)]
        complete: bool,

        #[arg(long, short = 's', default_value_t = 0)]
        seed: u64,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::Problem {
            out,
            grid,
            vehicles,
            tasks,
            max_capacity,
            complete,
            seed,
        } => {
            anyhow::ensure!(grid > 0, "The grid needs at least one location");
            anyhow::ensure!(max_capacity > 0, "The maximum capacity must be positive");

            let problem = generate_problem(
                &mut SmallRng::seed_from_u64(seed),
                grid,
                vehicles,
                tasks,
                max_capacity,
                complete,
            );

            file_utils::write_json(&out, &problem)?;
            info!(
                "Generated {} vehicles and {} tasks into {}",
                vehicles,
                tasks,
                out.display()
            );
        }
    }

    Ok(())
}

fn location_id(x: usize, y: usize) -> String {
    format!("{x}-{y}")
}

/// The first vehicle always gets `max_capacity` and task weights stay within
/// it, so the problem is feasible.
fn generate_problem<R>(
    rng: &mut R,
    grid: usize,
    vehicles: usize,
    tasks: usize,
    max_capacity: u32,
    complete: bool,
) -> JsonPickupDeliveryProblem
where
    R: Rng,
{
    let mut locations = Vec::with_capacity(grid * grid);
    let mut roads = Vec::new();

    for y in 0..grid {
        for x in 0..grid {
            locations.push(JsonLocation {
                id: location_id(x, y),
                x: x as f64,
                y: y as f64,
            });

            if x + 1 < grid {
                roads.push(JsonRoad {
                    from: location_id(x, y),
                    to: location_id(x + 1, y),
                    length: None,
                });
            }
            if y + 1 < grid {
                roads.push(JsonRoad {
                    from: location_id(x, y),
                    to: location_id(x, y + 1),
                    length: None,
                });
            }
        }
    }

    let random_location =
        |rng: &mut R| locations[rng.random_range(0..locations.len())].id.clone();

    let vehicles = (0..vehicles)
        .map(|index| JsonVehicle {
            id: format!("vehicle-{index}"),
            location: random_location(rng),
            capacity: if index == 0 {
                max_capacity
            } else {
                rng.random_range(1..=max_capacity)
            },
        })
        .collect();

    let tasks = (0..tasks)
        .map(|index| JsonTask {
            id: format!("task-{index}"),
            weight: rng.random_range(1..=max_capacity),
            pickup: random_location(rng),
            delivery: random_location(rng),
        })
        .collect();

    JsonPickupDeliveryProblem {
        roads: if complete { None } else { Some(roads) },
        locations,
        vehicles,
        tasks,
    }
}
