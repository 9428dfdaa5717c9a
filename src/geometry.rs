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

//! Minimal 3D geometry for the planner: points, the two shapes it collides
//! (axis-aligned boxes and spheres), and uniform per-axis sampling bounds.

use std::fmt;

use rand::Rng;

/// Define a distance trait for planner waypoint values.
pub trait Distance {
    fn distance(&self, other: &Self) -> f64;
}

/// A 3D coordinate. Pure value type, no identity beyond its coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }

    /// Returns true if all three coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

// Euclidean norm distance for 3D points
impl Distance for Point3 {
    fn distance(&self, other: &Self) -> f64 {
        let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

// Handy for debugging
impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

/// Collision capability over pairs of shapes.
///
/// The planner only ever needs box-vs-sphere and sphere-vs-sphere queries,
/// so those are the only impls provided. Touching counts as colliding.
pub trait Collide<Other> {
    fn collides(&self, other: &Other) -> bool;
}

/// An axis-aligned box given by its center and half-extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Point3,
    pub half_extents: Point3,
}

impl Aabb {
    pub fn new(center: Point3, half_extents: Point3) -> Self {
        Aabb {
            center,
            half_extents,
        }
    }
}

/// A sphere given by its center and radius. Used for collision probes and
/// the virtual destination region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64) -> Self {
        Sphere { center, radius }
    }
}

// Clamp the sphere center onto the box and compare against the radius.
impl Collide<Sphere> for Aabb {
    fn collides(&self, other: &Sphere) -> bool {
        let closest = Point3::new(
            other.center.x.clamp(
                self.center.x - self.half_extents.x,
                self.center.x + self.half_extents.x,
            ),
            other.center.y.clamp(
                self.center.y - self.half_extents.y,
                self.center.y + self.half_extents.y,
            ),
            other.center.z.clamp(
                self.center.z - self.half_extents.z,
                self.center.z + self.half_extents.z,
            ),
        );
        closest.distance(&other.center) <= other.radius
    }
}

impl Collide<Aabb> for Sphere {
    fn collides(&self, other: &Aabb) -> bool {
        other.collides(self)
    }
}

impl Collide<Sphere> for Sphere {
    fn collides(&self, other: &Sphere) -> bool {
        self.center.distance(&other.center) <= self.radius + other.radius
    }
}

/// Per-axis inclusive ranges for uniformly sampling points, e.g. workspace
/// limits for random start and destination locations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds3 {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub z: (f64, f64),
}

impl Bounds3 {
    pub fn new(x: (f64, f64), y: (f64, f64), z: (f64, f64)) -> Self {
        Bounds3 { x, y, z }
    }

    /// Draws a point uniformly within the bounds, one axis at a time.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Point3 {
        Point3::new(
            rng.gen_range(self.x.0..=self.x.1),
            rng.gen_range(self.y.0..=self.y.1),
            rng.gen_range(self.z.0..=self.z.1),
        )
    }
}

//
// Unit tests
//
