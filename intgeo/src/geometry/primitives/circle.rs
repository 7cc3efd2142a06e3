use anyhow::{Result, ensure};

use crate::geometry::Vector;
use crate::geometry::geo_traits::{ContainsPoint, CrossesSegment, DistanceTo, Translatable};
use crate::geometry::primitives::{Point, Segment};
use crate::util::CrossingPolicy;
use crate::util::assertions;

/// Geometric primitive representing a circle (disk, for containment) with an integer radius
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Circle {
    pub center: Point,
    pub radius: i64,
}

impl Circle {
    pub fn new(center: Point, radius: i64) -> Self {
        assertions::enforce_range(&[center]);
        assertions::enforce_radius(radius);

        Self { center, radius }
    }

    pub fn try_new(center: Point, radius: i64) -> Result<Self> {
        ensure!(radius >= 0, "invalid circle radius: {radius}");
        ensure!(
            assertions::point_in_range(&center) && assertions::radius_in_range(radius),
            "circle at {center:?} with radius {radius} outside of the supported coordinate range"
        );
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> i64 {
        self.radius
    }

    /// Same as [`CrossesSegment::crosses_segment`] under [`CrossingPolicy::Compatible`].
    ///
    /// Under [`CrossingPolicy::Exact`], the distance is compared without truncation and
    /// segments lying strictly inside the circle cross as well.
    pub fn crosses_segment_with(&self, segment: &Segment, policy: CrossingPolicy) -> bool {
        let distance = segment.distance(&self.center);
        match policy {
            CrossingPolicy::Exact => distance <= self.radius as f64,
            CrossingPolicy::Compatible => {
                let sq_radius = self.radius * self.radius;
                let not_inside = |p: &Point| self.center.sq_distance(p) >= sq_radius;
                //distance truncated toward zero before the comparison
                distance as i64 <= self.radius
                    && (not_inside(&segment.start) || not_inside(&segment.end))
            }
        }
    }
}

impl Translatable for Circle {
    fn translate(&mut self, v: &Vector) -> &mut Self {
        let Circle { center, radius: _ } = self;
        center.translate(v);
        self
    }
}

impl ContainsPoint for Circle {
    fn contains_point(&self, point: &Point) -> bool {
        point.sq_distance(&self.center) <= self.radius * self.radius
    }
}

impl CrossesSegment for Circle {
    /// True if the segment's distance to the center, truncated to an integer, is at most
    /// `radius` and at least one endpoint lies on or outside the circle.
    /// A segment strictly inside the circle does not cross.
    fn crosses_segment(&self, segment: &Segment) -> bool {
        self.crosses_segment_with(segment, CrossingPolicy::Compatible)
    }
}
