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

//! Box obstacle fields and the collision query capability the planner
//! consumes.

use crate::error::PlanError;
use crate::geometry::{Aabb, Collide, Point3, Sphere};

/// Collision query capability consumed by the search.
///
/// Implementors answer whether a probe sphere intersects anything in the
/// environment. Only the boolean existence of a collision is load-bearing,
/// never which obstacle was hit.
pub trait CollisionEnvironment {
    fn collides(&self, probe: &Sphere) -> bool;
}

/// A single axis-aligned box obstacle. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    aabb: Aabb,
}

impl Obstacle {
    /// Constructs an obstacle from its half-extents and center.
    ///
    /// # Errors
    ///
    /// If any coordinate is non-finite, or any half-extent is negative.
    pub fn new(half_extents: Point3, center: Point3) -> Result<Self, PlanError> {
        if !half_extents.is_finite() || !center.is_finite() {
            return Err(PlanError::NonFiniteCoordinate("obstacle"));
        }
        if half_extents.x < 0.0 || half_extents.y < 0.0 || half_extents.z < 0.0 {
            return Err(PlanError::NegativeExtent(half_extents));
        }
        Ok(Obstacle {
            aabb: Aabb::new(center, half_extents),
        })
    }

    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }
}

/// An ordered, immutable collection of box obstacles.
#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        ObstacleField { obstacles }
    }

    /// Builds a field from rows of
    /// `(scale_x, scale_y, scale_z, pos_x, pos_y, pos_z)`, where the scales
    /// are half-extents and the position is the box center.
    ///
    /// # Errors
    ///
    /// If any row fails [`Obstacle::new`] validation.
    pub fn from_rows(rows: &[[f64; 6]]) -> Result<Self, PlanError> {
        let obstacles = rows
            .iter()
            .map(|row| {
                Obstacle::new(
                    Point3::new(row[0], row[1], row[2]),
                    Point3::new(row[3], row[4], row[5]),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ObstacleField::new(obstacles))
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.obstacles.iter()
    }
}

impl CollisionEnvironment for ObstacleField {
    fn collides(&self, probe: &Sphere) -> bool {
        self.obstacles.iter().any(|o| o.aabb.collides(probe))
    }
}

//
// Unit tests
//
