use anyhow::{Result, ensure};
use log::warn;

use crate::geometry::Vector;
use crate::geometry::geo_traits::{ContainsPoint, CrossesSegment, Translatable};
use crate::geometry::primitives::{Point, Segment};
use crate::geometry::vector::strictly_opposite;
use crate::util::CrossingPolicy;
use crate::util::assertions;

/// Half-infinite line starting at `start`, passing through `through` and continuing beyond.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Ray {
    start: Point,
    through: Point,
}

impl Ray {
    pub fn new(start: Point, through: Point) -> Self {
        assertions::enforce_range(&[start, through]);
        if start == through {
            warn!("[GEO] degenerate ray without direction at {start:?}");
        }
        Ray { start, through }
    }

    pub fn try_new(start: Point, through: Point) -> Result<Self> {
        ensure!(start != through, "degenerate ray, {start:?} == {through:?}");
        ensure!(
            assertions::point_in_range(&start) && assertions::point_in_range(&through),
            "ray from {start:?} through {through:?} outside of the supported coordinate range"
        );
        Ok(Ray { start, through })
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn through(&self) -> Point {
        self.through
    }

    pub fn direction(&self) -> Vector {
        self.through - self.start
    }

    /// Same as [`CrossesSegment::crosses_segment`] under [`CrossingPolicy::Compatible`].
    ///
    /// Under [`CrossingPolicy::Exact`], a segment straddling the supporting line only
    /// crosses if the intersection lies forward of `start`.
    pub fn crosses_segment_with(&self, segment: &Segment, policy: CrossingPolicy) -> bool {
        let d = self.direction();
        let e1 = segment.start - self.start;
        let e2 = segment.end - self.start;
        let (side1, side2) = (d.cross(&e1), d.cross(&e2));

        let forward_on_line = |side: i64, e: &Vector| side == 0 && d.dot(e) >= 0;
        if forward_on_line(side1, &e1) || forward_on_line(side2, &e2) {
            return true;
        }
        if !strictly_opposite(side1, side2) {
            return false;
        }
        match policy {
            CrossingPolicy::Compatible => true,
            CrossingPolicy::Exact => {
                //intersection at start + s·d, with s = (e1 × f) / (d × f)
                let f = segment.direction();
                let (num, denom) = (e1.cross(&f), d.cross(&f));
                num == 0 || num.signum() == denom.signum()
            }
        }
    }
}

impl Translatable for Ray {
    fn translate(&mut self, v: &Vector) -> &mut Self {
        let Ray { start, through } = self;
        start.translate(v);
        through.translate(v);
        self
    }
}

impl ContainsPoint for Ray {
    fn contains_point(&self, point: &Point) -> bool {
        let to_point = *point - self.start;
        let d = self.direction();
        to_point.cross(&d) == 0 && to_point.dot(&d) >= 0
    }
}

impl CrossesSegment for Ray {
    fn crosses_segment(&self, segment: &Segment) -> bool {
        self.crosses_segment_with(segment, CrossingPolicy::Compatible)
    }
}
