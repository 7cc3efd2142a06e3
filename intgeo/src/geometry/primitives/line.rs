use anyhow::{Result, bail, ensure};
use log::warn;

use crate::geometry::Vector;
use crate::geometry::geo_traits::{ContainsPoint, CrossesSegment, Translatable};
use crate::geometry::primitives::{Point, Segment};
use crate::geometry::vector::strictly_opposite;
use crate::MAX_COORD;
use crate::util::assertions;

/// Infinite line in general form: `a·x + b·y + c = 0`.
///
/// The anchor is a point on the line, kept alongside the coefficients so the line
/// can be reasoned about with vectors as well as algebraically.
/// A line built from two coincident points has `a == b == 0` and no geometric meaning.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Line {
    a: i64,
    b: i64,
    c: i64,
    anchor: Point,
}

impl Line {
    /// Line through `p1` and `p2`, anchored at `p1`.
    pub fn new(p1: Point, p2: Point) -> Self {
        assertions::enforce_range(&[p1, p2]);
        if p1 == p2 {
            warn!("[GEO] degenerate line through a single point {p1:?}");
        }
        let a = p2.1 - p1.1;
        let b = p1.0 - p2.0;
        let c = -(a * p1.0 + b * p1.1);
        Line { a, b, c, anchor: p1 }
    }

    pub fn try_new(p1: Point, p2: Point) -> Result<Self> {
        ensure!(p1 != p2, "degenerate line, {p1:?} == {p2:?}");
        ensure!(
            assertions::point_in_range(&p1) && assertions::point_in_range(&p2),
            "line through {p1:?} and {p2:?} outside of the supported coordinate range"
        );
        Ok(Line::new(p1, p2))
    }

    /// Line `a·x + b·y + c = 0` given by its coefficients, which are kept as is.
    ///
    /// The anchor is an integer point on the line near the y-axis (the x-axis for
    /// vertical lines). Fails if `a` and `b` are both zero, if the line holds no integer
    /// point, or if that point lies outside the supported coordinate range.
    pub fn from_coefficients(a: i64, b: i64, c: i64) -> Result<Self> {
        ensure!(a != 0 || b != 0, "degenerate line, a == b == 0");
        let bound = 2 * MAX_COORD;
        ensure!(
            a.abs() <= bound && b.abs() <= bound,
            "line coefficients ({a}, {b}) exceed ±{bound}"
        );

        let (g, s, t) = ext_gcd(a as i128, b as i128);
        ensure!(
            c as i128 % g == 0,
            "line {a}x + {b}y + {c} = 0 holds no integer point"
        );
        let m = -(c as i128) / g;
        let (x, y) = (s * m, t * m);

        //slide along the direction until the anchor is as close to the axis as possible
        let (dx, dy) = (b as i128 / g, -(a as i128) / g);
        let k = if dx != 0 { x / dx } else { y / dy };
        let (x, y) = (x - k * dx, y - k * dy);

        let anchor = match (i64::try_from(x), i64::try_from(y)) {
            (Ok(x), Ok(y)) => Point(x, y),
            _ => bail!("line {a}x + {b}y + {c} = 0 has no anchor within i64"),
        };
        ensure!(
            assertions::point_in_range(&anchor),
            "line {a}x + {b}y + {c} = 0 outside of the supported coordinate range"
        );
        Ok(Line { a, b, c, anchor })
    }

    pub fn a(&self) -> i64 {
        self.a
    }

    pub fn b(&self) -> i64 {
        self.b
    }

    pub fn c(&self) -> i64 {
        self.c
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Direction vector `(b, -a)`, pointing from the second construction point to the first
    pub fn direction(&self) -> Vector {
        Vector::new(self.b, -self.a)
    }

    /// `a·x + b·y + c` evaluated at `point`: zero on the line, its sign tells the side otherwise.
    pub fn side_of(&self, point: &Point) -> i64 {
        self.a * point.0 + self.b * point.1 + self.c
    }
}

/// Extended Euclid: `(g, s, t)` with `g = gcd(a, b) ≥ 0` and `a·s + b·t = g`.
fn ext_gcd(a: i128, b: i128) -> (i128, i128, i128) {
    if b == 0 {
        (a.abs(), a.signum(), 0)
    } else {
        let (g, s, t) = ext_gcd(b, a % b);
        (g, t, s - (a / b) * t)
    }
}

impl Translatable for Line {
    /// Only `c` changes: the direction `(a, b)` is translation invariant.
    fn translate(&mut self, v: &Vector) -> &mut Self {
        self.c = self.c - self.a * v.dx - self.b * v.dy;
        self.anchor.translate(v);
        self
    }
}

impl ContainsPoint for Line {
    fn contains_point(&self, point: &Point) -> bool {
        self.side_of(point) == 0
    }
}

impl CrossesSegment for Line {
    /// The line crosses the segment unless both endpoints lie strictly on the same side.
    fn crosses_segment(&self, segment: &Segment) -> bool {
        let dir = self.direction();
        let side_start = dir.cross(&(segment.start - self.anchor));
        let side_end = dir.cross(&(segment.end - self.anchor));

        side_start == 0 || side_end == 0 || strictly_opposite(side_start, side_end)
    }
}
