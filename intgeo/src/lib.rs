#![doc = document_features::document_features!()]
//! Exact integer 2D geometry: points, segments, lines, rays and circles with
//! translation, containment and shape-vs-segment intersection predicates.
//!
//! All coordinates are `i64`. Predicates are evaluated with integer arithmetic only,
//! except [`DistanceTo`](geometry::geo_traits::DistanceTo) which returns an `f64`.
//! Coordinates must stay within [`MAX_COORD`] for the products to fit in an `i64`.

/// Geometric primitives and the shared shape contract
pub mod geometry;

/// Helper functions and configuration which do not belong to any specific primitive
pub mod util;

/// Largest coordinate magnitude (and radius) for which every cross product, dot product,
/// line coefficient and squared distance computed by this crate fits in an `i64`.
///
/// Nothing is checked at runtime unless debug assertions or the `strict-coords` feature are enabled.
pub const MAX_COORD: i64 = (1 << 30) - 1;
