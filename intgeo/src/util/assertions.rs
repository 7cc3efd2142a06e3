use log::error;

use crate::MAX_COORD;
use crate::geometry::GeoShape;
use crate::geometry::primitives::Point;

//Checks to verify that coordinates stay within the range where no product overflows.
//Used in debug_assert!() blocks, or as hard assertions with the `strict-coords` feature

pub fn coord_in_range(c: i64) -> bool {
    (-MAX_COORD..=MAX_COORD).contains(&c)
}

pub fn point_in_range(p: &Point) -> bool {
    let in_range = coord_in_range(p.0) && coord_in_range(p.1);
    if !in_range {
        error!("[GEO] point {p:?} exceeds the supported coordinate range of ±{MAX_COORD}");
    }
    in_range
}

pub fn radius_in_range(radius: i64) -> bool {
    let in_range = (0..=MAX_COORD).contains(&radius);
    if !in_range {
        error!("[GEO] radius {radius} is negative or exceeds {MAX_COORD}");
    }
    in_range
}

/// Checks every point that defines `shape`.
/// For a line this is its anchor, since the coefficients are derived from it.
pub fn shape_in_range(shape: &GeoShape) -> bool {
    match shape {
        GeoShape::Point(p) => point_in_range(p),
        GeoShape::Segment(s) => point_in_range(&s.start) && point_in_range(&s.end),
        GeoShape::Line(l) => point_in_range(&l.anchor()),
        GeoShape::Ray(r) => point_in_range(&r.start()) && point_in_range(&r.through()),
        GeoShape::Circle(c) => point_in_range(&c.center) && radius_in_range(c.radius),
    }
}

/// Asserts all `points` are in range. Only active in debug builds, unless `strict-coords` is enabled.
#[inline(always)]
pub(crate) fn enforce_range(points: &[Point]) {
    if cfg!(feature = "strict-coords") {
        assert!(
            points.iter().all(point_in_range),
            "coordinates out of range: {points:?}"
        );
    } else {
        debug_assert!(
            points.iter().all(point_in_range),
            "coordinates out of range: {points:?}"
        );
    }
}

/// Asserts `radius` is non-negative and within [`MAX_COORD`], under the same conditions as [`enforce_range`].
#[inline(always)]
pub(crate) fn enforce_radius(radius: i64) {
    if cfg!(feature = "strict-coords") {
        assert!(radius_in_range(radius), "radius out of range: {radius}");
    } else {
        debug_assert!(radius_in_range(radius), "radius out of range: {radius}");
    }
}
