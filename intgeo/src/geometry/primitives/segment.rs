use anyhow::{Result, ensure};

use crate::geometry::Vector;
use crate::geometry::geo_traits::{ContainsPoint, CrossesSegment, DistanceTo, Translatable};
use crate::geometry::primitives::Point;
use crate::geometry::vector::strictly_opposite;
use crate::util::assertions;

/// Line segment between two [`Point`]s.
///
/// The endpoints are not required to be ordered, and may coincide.
/// All predicates are symmetric in `start` and `end`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        assertions::enforce_range(&[start, end]);
        Segment { start, end }
    }

    pub fn try_new(start: Point, end: Point) -> Result<Self> {
        ensure!(
            assertions::point_in_range(&start) && assertions::point_in_range(&end),
            "segment {start:?} -> {end:?} outside of the supported coordinate range"
        );
        Ok(Segment { start, end })
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Vector from `start` to `end`
    pub fn direction(&self) -> Vector {
        self.end - self.start
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Returns the point on the segment closest to `point`.
    ///
    /// The foot of the perpendicular is clamped to the segment's extent.
    /// A degenerate segment always returns `start`.
    pub fn closest_point(&self, point: &Point) -> (f64, f64) {
        //from https://stackoverflow.com/a/6853926
        let Point(x1, y1) = self.start;
        let Point(x2, y2) = self.end;

        let dot = (*point - self.start).dot(&self.direction()) as f64;
        let len_sq = self.direction().sq_length() as f64;
        let param = match self.is_degenerate() {
            true => -1.0,
            false => dot / len_sq,
        };

        let (x1, y1, x2, y2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);
        match param {
            p if p < 0.0 => (x1, y1), //start is the closest point
            p if p > 1.0 => (x2, y2), //end is the closest point
            p => (x1 + p * (x2 - x1), y1 + p * (y2 - y1)), //closest point is on the segment
        }
    }
}

/// Whether `p` lies on the line through `a` and `b`, within their span.
#[inline(always)]
fn touches(p: &Point, a: &Point, b: &Point) -> bool {
    let collinear = (*b - *a).cross(&(*p - *a)) == 0;
    collinear && (*a - *p).dot(&(*b - *p)) <= 0
}

impl Translatable for Segment {
    fn translate(&mut self, v: &Vector) -> &mut Self {
        let Segment { start, end } = self;
        start.translate(v);
        end.translate(v);
        self
    }
}

impl ContainsPoint for Segment {
    fn contains_point(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        let collinear = (*point - self.start).cross(&self.direction()) == 0;
        // collinear points can still lie beyond either endpoint
        let within_x = self.start.0.min(self.end.0) <= x && x <= self.start.0.max(self.end.0);
        let within_y = self.start.1.min(self.end.1) <= y && y <= self.start.1.max(self.end.1);
        collinear && within_x && within_y
    }
}

impl CrossesSegment for Segment {
    fn crosses_segment(&self, other: &Segment) -> bool {
        let (a, b) = (&self.start, &self.end);
        let (c, d) = (&other.start, &other.end);
        let (ab, cd) = (self.direction(), other.direction());

        // each segment's endpoints strictly on opposite sides of the other's line
        let proper = strictly_opposite(ab.cross(&(*c - *a)), ab.cross(&(*d - *a)))
            && strictly_opposite(cd.cross(&(*a - *c)), cd.cross(&(*b - *c)));

        proper || touches(c, a, b) || touches(a, c, d) || touches(b, c, d) || touches(d, a, b)
    }
}

impl DistanceTo<Point> for Segment {
    #[inline(always)]
    fn distance(&self, point: &Point) -> f64 {
        f64::sqrt(self.sq_distance(point))
    }

    #[inline(always)]
    fn sq_distance(&self, point: &Point) -> f64 {
        let (xx, yy) = self.closest_point(point);
        let (dx, dy) = (point.0 as f64 - xx, point.1 as f64 - yy);
        dx.powi(2) + dy.powi(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: i64, y1: i64, x2: i64, y2: i64) -> Segment {
        Segment::new(Point(x1, y1), Point(x2, y2))
    }

    #[test]
    fn contains_collinear_points_within_extent() {
        let s = seg(0, 0, 2, 2);
        assert!(s.contains_point(&Point(1, 1)));
        assert!(s.contains_point(&Point(0, 0)));
        assert!(s.contains_point(&Point(2, 2)));
        assert!(!s.contains_point(&Point(3, 3)));
        assert!(!s.contains_point(&Point(-1, -1)));
        assert!(!s.contains_point(&Point(1, 0)));
    }

    #[test]
    fn reversed_segment_contains_same_points() {
        let s = seg(4, 2, -2, -1);
        let r = seg(-2, -1, 4, 2);
        for p in [Point(0, 0), Point(2, 1), Point(6, 3), Point(-2, -1), Point(1, 1)] {
            assert_eq!(s.contains_point(&p), r.contains_point(&p), "{p:?}");
        }
    }

    #[test]
    fn degenerate_segment_contains_its_point() {
        let s = seg(3, 3, 3, 3);
        assert!(s.contains_point(&Point(3, 3)));
        assert!(!s.contains_point(&Point(3, 4)));
    }

    #[test]
    fn crossing_cases() {
        let s = seg(0, 0, 2, 0);
        //perpendicular
        assert!(s.crosses_segment(&seg(1, -1, 1, 1)));
        //T-junction
        assert!(s.crosses_segment(&seg(1, 0, 1, 5)));
        //shared endpoint
        assert!(s.crosses_segment(&seg(2, 0, 3, 7)));
        //collinear overlap
        assert!(s.crosses_segment(&seg(1, 0, 5, 0)));
        //collinear containment
        assert!(s.crosses_segment(&seg(-1, 0, 5, 0)));
        //collinear, disjoint
        assert!(!s.crosses_segment(&seg(3, 0, 5, 0)));
        //parallel
        assert!(!s.crosses_segment(&seg(0, 1, 2, 1)));
        //would cross if extended
        assert!(!s.crosses_segment(&seg(3, -1, 3, 1)));
    }

    #[test]
    fn degenerate_segments_cross_when_touching() {
        let s = seg(0, 0, 4, 4);
        assert!(s.crosses_segment(&seg(2, 2, 2, 2)));
        assert!(!s.crosses_segment(&seg(2, 3, 2, 3)));
        assert!(seg(1, 1, 1, 1).crosses_segment(&seg(1, 1, 1, 1)));
    }

    #[test]
    fn distance_to_interior_foot() {
        assert_eq!(seg(0, 0, 4, 0).distance(&Point(2, 3)), 3.0);
        assert_eq!(seg(0, 0, 4, 0).closest_point(&Point(2, 3)), (2.0, 0.0));
    }

    #[test]
    fn distance_clamps_to_endpoints() {
        let s = seg(0, 0, 4, 0);
        assert_eq!(s.distance(&Point(-3, 4)), 5.0);
        assert_eq!(s.distance(&Point(7, -4)), 5.0);
        assert_eq!(s.sq_distance(&Point(4, 0)), 0.0);
    }

    #[test]
    fn distance_to_degenerate_segment() {
        let s = seg(1, 1, 1, 1);
        assert_eq!(s.closest_point(&Point(4, 5)), (1.0, 1.0));
        assert_eq!(s.distance(&Point(4, 5)), 5.0);
    }

    #[test]
    fn translate_moves_both_endpoints() {
        let mut s = seg(0, 0, 2, 1);
        s.translate(&Vector::new(-1, 3));
        assert_eq!(s, seg(-1, 3, 1, 4));
        assert_eq!(s.direction(), Vector::new(2, 1));
    }
}
