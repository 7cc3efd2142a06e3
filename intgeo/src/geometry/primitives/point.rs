use std::ops::{Add, Sub};

use anyhow::{Result, ensure};

use crate::geometry::Vector;
use crate::geometry::geo_traits::{ContainsPoint, CrossesSegment, Translatable};
use crate::geometry::primitives::Segment;
use crate::util::assertions;

/// Geometric primitive representing a point with integer coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point(pub i64, pub i64);

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        let p = Point(x, y);
        assertions::enforce_range(&[p]);
        p
    }

    /// Like [`Point::new`], but returns an error instead of relying on debug assertions
    /// when a coordinate exceeds [`MAX_COORD`](crate::MAX_COORD).
    pub fn try_new(x: i64, y: i64) -> Result<Self> {
        let p = Point(x, y);
        ensure!(
            assertions::point_in_range(&p),
            "point {p:?} outside of the supported coordinate range"
        );
        Ok(p)
    }

    pub fn x(&self) -> i64 {
        self.0
    }

    pub fn y(&self) -> i64 {
        self.1
    }

    pub fn sq_distance(&self, other: &Point) -> i64 {
        Vector::between(self, other).sq_length()
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.sq_distance(other) as f64).sqrt()
    }
}

impl Translatable for Point {
    fn translate(&mut self, v: &Vector) -> &mut Self {
        let Point(x, y) = self;
        *x += v.dx;
        *y += v.dy;
        self
    }
}

impl ContainsPoint for Point {
    fn contains_point(&self, point: &Point) -> bool {
        self == point
    }
}

impl CrossesSegment for Point {
    /// A point crosses a segment exactly when the segment contains it.
    fn crosses_segment(&self, segment: &Segment) -> bool {
        segment.contains_point(self)
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, other: Point) -> Vector {
        Vector::between(&other, &self)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, v: Vector) -> Point {
        Point(self.0 + v.dx, self.1 + v.dy)
    }
}

impl From<Point> for (i64, i64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(i64, i64)> for Point {
    fn from(p: (i64, i64)) -> Self {
        Point(p.0, p.1)
    }
}
