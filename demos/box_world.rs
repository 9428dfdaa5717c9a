// MIT License
//
// Copyright (c) 2024 Erik Holum
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Plans a path through a randomly generated field of box obstacles and
//! prints the waypoints as `x,y,z` rows. Run with `cargo run --example
//! box_world`; pass a seed argument for a reproducible world.

use frontier_rrt::geometry::{Bounds3, Point3};
use frontier_rrt::obstacles::{Obstacle, ObstacleField};
use frontier_rrt::planning::frontier::{find_path, SearchParams};
use frontier_rrt::PlanError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;

const NUM_BOXES: usize = 15;

fn random_field(rng: &mut StdRng) -> ObstacleField {
    // Box half-extents and placement limits from the original workspace
    let extent_range = (0.125, 0.175);
    let centers = Bounds3::new((-0.7, 0.7), (-0.7, 0.7), (-1.0, 0.8));

    let obstacles = (0..NUM_BOXES)
        .map(|_| {
            let half_extents = Point3::new(
                rng.gen_range(extent_range.0..=extent_range.1),
                rng.gen_range(extent_range.0..=extent_range.1),
                rng.gen_range(extent_range.0..=extent_range.1),
            );
            let center = centers.sample(rng);
            Obstacle::new(half_extents, center).expect("generated extents are valid")
        })
        .collect();
    ObstacleField::new(obstacles)
}

fn print_waypoints(waypoints: &[Point3]) {
    println!("x,y,z");
    for p in waypoints {
        println!("{},{},{}", p.x, p.y, p.z);
    }
}

pub fn main() {
    let seed: u64 = env::args()
        .nth(1)
        .map(|arg| arg.parse().expect("Invalid seed"))
        .unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    println!("World seed: {seed}");

    let field = random_field(&mut rng);
    let endpoints = Bounds3::new((-0.4, 0.4), (-0.6, 0.6), (0.0, 0.7));
    let start = endpoints.sample(&mut rng);
    let dest = endpoints.sample(&mut rng);
    println!("Start: {start}");
    println!("Destination: {dest}");

    match find_path(start, dest, &field, &SearchParams::default(), &mut rng) {
        Ok(path) => {
            println!("The point arrived at its destination in {} rounds", path.rounds);
            print_waypoints(&path.waypoints);
        }
        Err(PlanError::Exhausted { rounds, partial }) => {
            println!("No path found within {rounds} rounds; partial path:");
            print_waypoints(&partial);
        }
        Err(e) => {
            eprintln!("Planning failed: {e}");
        }
    }
}
