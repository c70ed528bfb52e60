// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Progress values are `f64` fractions derived from `f32` readings, so exact
//! equality is the wrong tool in assertions.

pub use approx::assert_abs_diff_eq;

/// Tolerance for comparing progress fractions converted from `f32`.
pub const PROGRESS_TOLERANCE: f64 = 1e-6;
