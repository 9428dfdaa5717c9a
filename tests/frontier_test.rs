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

use frontier_rrt::geometry::{Distance, Point3, Sphere};
use frontier_rrt::obstacles::{CollisionEnvironment, ObstacleField};
use frontier_rrt::planning::frontier::{find_path, SearchParams};
use frontier_rrt::PlanError;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Every waypoint in the path must be collision-free against the field.
fn assert_collision_free(waypoints: &[Point3], field: &ObstacleField, probe_radius: f64) {
    for (i, p) in waypoints.iter().enumerate() {
        assert!(
            !field.collides(&Sphere::new(*p, probe_radius)),
            "waypoint {i} at {p} collides with an obstacle"
        );
    }
}

/// Distance to the destination must never increase across committed waypoints.
fn assert_non_increasing_distances(waypoints: &[Point3], destination: &Point3) {
    let mut previous = f64::MAX;
    for (i, p) in waypoints.iter().enumerate() {
        let d = p.distance(destination);
        assert!(
            d <= previous,
            "waypoint {i} moved away from the destination ({d} > {previous})"
        );
        previous = d;
    }
}

#[test]
fn test_empty_field_end_to_end() {
    let field = ObstacleField::default();
    let params = SearchParams::default();
    let start = Point3::new(0.0, 0.0, 0.0);
    let dest = Point3::new(0.0, 0.0, 1.0);

    // Seed the generator for consistency
    let mut rng = StdRng::seed_from_u64(1);
    let result = find_path(start, dest, &field, &params, &mut rng);
    assert!(result.is_ok(), "Expected Ok result, got Err");

    let path = result.unwrap();
    assert!(!path.waypoints.is_empty(), "Path should not be empty");
    assert_eq!(path.waypoints[0], start, "Path should start at the start point");
    assert_eq!(path.waypoints.len(), path.rounds + 1);

    // Each round advances at most sample_radius toward a 1.0 distant target,
    // so the round count should stay in the low tens.
    assert!(
        path.rounds < 500,
        "Expected a small bounded number of rounds, took {}",
        path.rounds
    );

    // Verify it ends touching the destination region
    let end = path.waypoints.last().unwrap();
    assert!(
        end.distance(&dest) <= 2.0 * params.probe_radius + 1e-9,
        "Path should end touching the destination"
    );

    assert_non_increasing_distances(&path.waypoints, &dest);
}

#[test]
fn test_deterministic_under_fixed_seed() {
    let field = ObstacleField::from_rows(&[[0.1, 0.1, 0.1, 0.2, 0.1, 0.5]]).unwrap();
    let params = SearchParams::default();
    let start = Point3::new(0.0, 0.0, 0.0);
    let dest = Point3::new(0.0, 0.0, 1.0);

    let mut rng_a = StdRng::seed_from_u64(7);
    let mut rng_b = StdRng::seed_from_u64(7);
    let a = find_path(start, dest, &field, &params, &mut rng_a).unwrap();
    let b = find_path(start, dest, &field, &params, &mut rng_b).unwrap();

    assert_eq!(a.rounds, b.rounds, "Seeded runs should take the same rounds");
    assert_eq!(a.waypoints, b.waypoints, "Seeded runs should produce identical paths");
}

#[test]
fn test_path_avoids_obstacles() {
    // A box sitting beside the straight-line route from start to dest
    let field = ObstacleField::from_rows(&[[0.05, 0.05, 0.05, 0.15, 0.0, 0.5]]).unwrap();
    let params = SearchParams::default();
    let start = Point3::new(0.0, 0.0, 0.0);
    let dest = Point3::new(0.0, 0.0, 1.0);

    let mut rng = StdRng::seed_from_u64(13);
    match find_path(start, dest, &field, &params, &mut rng) {
        Ok(path) => assert_collision_free(&path.waypoints, &field, params.probe_radius),
        Err(PlanError::Exhausted { partial, .. }) => {
            // Even a failed search must only ever commit collision-free waypoints
            assert_collision_free(&partial, &field, params.probe_radius);
            panic!("Expected the search to route past an off-path obstacle");
        }
        Err(e) => panic!("Unexpected error: {e}"),
    }
}

#[test]
fn test_exhaustion_on_enclosed_destination() {
    // Destination buried in the middle of a solid box is unreachable: any
    // probe near it collides, so the arrival test can never pass.
    let field = ObstacleField::from_rows(&[[0.5, 0.5, 0.5, 1.0, 1.0, 1.0]]).unwrap();
    let params = SearchParams {
        max_rounds: 5,
        ..SearchParams::default()
    };
    let start = Point3::new(0.0, 0.0, 0.0);
    let dest = Point3::new(1.0, 1.0, 1.0);

    let mut rng = StdRng::seed_from_u64(99);
    match find_path(start, dest, &field, &params, &mut rng) {
        Err(PlanError::Exhausted { rounds, partial }) => {
            assert_eq!(rounds, 5, "Search must stop exactly at the round budget");
            assert_eq!(partial.len(), 6, "One committed waypoint per round, plus the start");
            assert_eq!(partial[0], start);
            assert_collision_free(&partial, &field, params.probe_radius);
            assert_non_increasing_distances(&partial, &dest);
        }
        other => panic!("Expected Exhausted, got {other:?}"),
    }
}

#[test]
fn test_start_touching_destination() {
    // With start inside the destination region the first committed round
    // already terminates the search.
    let field = ObstacleField::default();
    let params = SearchParams::default();
    let start = Point3::new(0.0, 0.0, 0.0);

    let mut rng = StdRng::seed_from_u64(5);
    let path = find_path(start, start, &field, &params, &mut rng).unwrap();
    assert_eq!(path.rounds, 1);
    assert_eq!(path.waypoints, vec![start, start]);
}
