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

//! Greedy frontier-based motion planning around box obstacle fields.
//!
//! A simplified, greedy RRT variant: repeatedly sample candidate points near
//! the most recently committed waypoint, reject candidates that collide with
//! a field of axis-aligned box obstacles, and greedily advance toward a
//! destination until the path touches the destination region or a round
//! budget runs out.
//!
//! ```
//! use frontier_rrt::{find_path, ObstacleField, Point3, SearchParams};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let field = ObstacleField::from_rows(&[[0.1, 0.1, 0.1, 0.3, 0.0, 0.5]]).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let path = find_path(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//!     &field,
//!     &SearchParams::default(),
//!     &mut rng,
//! )
//! .unwrap();
//! assert!(!path.waypoints.is_empty());
//! ```

pub mod error;
pub mod geometry;
pub mod obstacles;
pub mod planning;

pub use error::PlanError;
pub use geometry::{Aabb, Bounds3, Collide, Distance, Point3, Sphere};
pub use obstacles::{CollisionEnvironment, Obstacle, ObstacleField};
pub use planning::frontier::{find_path, sample_around, PlannedPath, SearchParams};
