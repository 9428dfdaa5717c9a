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

use thiserror::Error;

use crate::geometry::Point3;

/// Errors surfaced by obstacle construction and path search.
///
/// Configuration problems abort immediately at construction or validation.
/// An exhausted search is a typed result, not a crash, and carries the
/// partial frontier path built so far for diagnostics.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A coordinate in the named input was NaN or infinite.
    #[error("non-finite coordinate in {0}")]
    NonFiniteCoordinate(&'static str),

    /// An obstacle was constructed with a negative half-extent.
    #[error("obstacle half-extents must be non-negative, got {0}")]
    NegativeExtent(Point3),

    /// A search parameter failed validation.
    #[error("search parameter {name} must be positive and finite, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// The destination was not reached within the configured round budget.
    #[error("search exhausted after {rounds} rounds without reaching the destination")]
    Exhausted {
        rounds: usize,
        /// The waypoints committed before the budget ran out.
        partial: Vec<Point3>,
    },
}
