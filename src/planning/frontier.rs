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

//! Greedy frontier search: a simplified RRT variant that samples locally
//! around the most recently committed waypoint and greedily advances toward
//! the destination.
//!
//! Unlike a real RRT there is no tree, no rewiring, and no backtracking. Each
//! round samples a fixed number of candidates on a sphere around the frontier
//! node, keeps the best collision-free one that strictly improves the
//! distance to the destination, and commits it as the next waypoint.

use std::f64::consts::{PI, TAU};

use log::{debug, info};
use rand::Rng;

use crate::error::PlanError;
use crate::geometry::{Collide, Distance, Point3, Sphere};
use crate::obstacles::CollisionEnvironment;

/// Tuning parameters for [`find_path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParams {
    /// Number of local samples attempted per round before committing the
    /// best one found.
    pub iterations_per_round: usize,

    /// Radius of the local sampling sphere around the frontier node.
    pub sample_radius: f64,

    /// Radius of the probe sphere used for collision testing, and of the
    /// virtual destination sphere used for the arrival test.
    pub probe_radius: f64,

    /// Maximum number of rounds before the search gives up with
    /// [`PlanError::Exhausted`].
    pub max_rounds: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            iterations_per_round: 10,
            sample_radius: 0.1,
            probe_radius: 0.04,
            max_rounds: 1000,
        }
    }
}

impl SearchParams {
    /// Checks that all parameters are usable.
    ///
    /// # Errors
    ///
    /// If a count is zero or a radius is non-positive or non-finite.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.iterations_per_round == 0 {
            return Err(PlanError::InvalidParameter {
                name: "iterations_per_round",
                value: 0.0,
            });
        }
        if self.max_rounds == 0 {
            return Err(PlanError::InvalidParameter {
                name: "max_rounds",
                value: 0.0,
            });
        }
        if !(self.sample_radius.is_finite() && self.sample_radius > 0.0) {
            return Err(PlanError::InvalidParameter {
                name: "sample_radius",
                value: self.sample_radius,
            });
        }
        if !(self.probe_radius.is_finite() && self.probe_radius > 0.0) {
            return Err(PlanError::InvalidParameter {
                name: "probe_radius",
                value: self.probe_radius,
            });
        }
        Ok(())
    }
}

/// A completed frontier path.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedPath {
    /// Ordered waypoints from the start to a point touching the destination
    /// region. Always begins with the start point.
    pub waypoints: Vec<Point3>,

    /// Number of rounds it took to arrive.
    pub rounds: usize,
}

/// Samples a point on the sphere of the given radius around `center` using
/// spherical coordinates: θ ~ U(0, 2π), φ ~ U(0, π).
///
/// This is deliberately not uniform over the sphere surface; samples cluster
/// toward the poles. The bias is kept for fidelity with the original demo,
/// since changing it changes the output distribution.
pub fn sample_around<R: Rng>(center: Point3, radius: f64, rng: &mut R) -> Point3 {
    let theta = rng.gen_range(0.0..TAU);
    let phi = rng.gen_range(0.0..PI);
    Point3::new(
        center.x + radius * phi.sin() * theta.cos(),
        center.y + radius * phi.sin() * theta.sin(),
        center.z + radius * phi.cos(),
    )
}

/// Greedy frontier search from `start` to a neighborhood of `destination`.
///
/// Each round samples `iterations_per_round` candidates on a sphere around
/// the last committed waypoint. A candidate is accepted as the round's best
/// if it is strictly closer to the destination than the current best and its
/// probe sphere is collision-free against `environment`. The round's best is
/// committed as a new waypoint whether or not it improved. The search
/// finishes when the committed waypoint's probe sphere touches a virtual
/// destination sphere of the same radius.
///
/// # Parameters
///
/// - `start`, `destination`: endpoints of the search
/// - `environment`: collision query capability, e.g. an
///   [`ObstacleField`](crate::obstacles::ObstacleField)
/// - `params`: sampling and budget parameters
/// - `rng`: random source; seed it for reproducible paths
///
/// # Returns
///
/// Returns a `Result` containing either:
/// - `Ok(PlannedPath)`: the waypoints from `start` to a point touching the
///   destination region, and the number of rounds taken.
/// - `Err(PlanError)`: a configuration problem, or
///   [`PlanError::Exhausted`] with the partial path if the round budget ran
///   out before arrival.
///
/// # Errors
///
/// If an endpoint has a non-finite coordinate, a parameter fails validation,
/// or the round budget is exhausted.
pub fn find_path<C, R>(
    start: Point3,
    destination: Point3,
    environment: &C,
    params: &SearchParams,
    rng: &mut R,
) -> Result<PlannedPath, PlanError>
where
    C: CollisionEnvironment,
    R: Rng,
{
    params.validate()?;
    if !start.is_finite() {
        return Err(PlanError::NonFiniteCoordinate("start"));
    }
    if !destination.is_finite() {
        return Err(PlanError::NonFiniteCoordinate("destination"));
    }

    let goal = Sphere::new(destination, params.probe_radius);
    let mut waypoints = vec![start];
    let mut best = start;
    let mut best_distance = best.distance(&destination);
    let mut rounds = 0;

    while rounds < params.max_rounds {
        // The sampling center stays fixed on the committed frontier node for
        // the whole round, even as the round's best improves.
        let frontier = best;
        for _ in 0..params.iterations_per_round {
            let candidate = sample_around(frontier, params.sample_radius, rng);
            let candidate_distance = candidate.distance(&destination);
            if candidate_distance < best_distance
                && !environment.collides(&Sphere::new(candidate, params.probe_radius))
            {
                best = candidate;
                best_distance = candidate_distance;
                if goal.collides(&Sphere::new(best, params.probe_radius)) {
                    break;
                }
            }
        }

        rounds += 1;
        waypoints.push(best);
        if best == frontier {
            debug!("round {rounds}: no progress, frontier stays at {frontier}");
        } else {
            debug!("round {rounds}: frontier advanced to {best}, {best_distance:.3} to go");
        }

        if goal.collides(&Sphere::new(best, params.probe_radius)) {
            info!("destination reached after {rounds} rounds, {} waypoints", waypoints.len());
            return Ok(PlannedPath { waypoints, rounds });
        }
    }

    Err(PlanError::Exhausted {
        rounds,
        partial: waypoints,
    })
}

//
// Unit tests
//
