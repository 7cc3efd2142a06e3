use crate::geometry::Vector;
use crate::geometry::geo_traits::{ContainsPoint, CrossesSegment, Translatable};
use crate::geometry::primitives::{Circle, Line, Point, Ray, Segment};
use crate::util::{CrossingPolicy, KernelConfig};

/// Closed set of all primitives, dispatching the shared contract by exhaustive matching.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GeoShape {
    Point(Point),
    Segment(Segment),
    Line(Line),
    Ray(Ray),
    Circle(Circle),
}

impl GeoShape {
    /// Heap-allocated copy, exclusively owned by the caller.
    pub fn boxed_clone(&self) -> Box<GeoShape> {
        Box::new(self.clone())
    }

    /// Like [`CrossesSegment::crosses_segment`], with circles and rays following `config.crossing`.
    pub fn crosses_segment_with(&self, segment: &Segment, config: &KernelConfig) -> bool {
        match (self, config.crossing) {
            (_, CrossingPolicy::Compatible) => self.crosses_segment(segment),
            (GeoShape::Circle(c), policy) => c.crosses_segment_with(segment, policy),
            (GeoShape::Ray(r), policy) => r.crosses_segment_with(segment, policy),
            (other, CrossingPolicy::Exact) => other.crosses_segment(segment),
        }
    }

    /// The points a shape is constructed from.
    pub fn defining_points(&self) -> Vec<Point> {
        match self {
            GeoShape::Point(p) => vec![*p],
            GeoShape::Segment(s) => vec![s.start, s.end],
            GeoShape::Line(l) => vec![l.anchor()],
            GeoShape::Ray(r) => vec![r.start(), r.through()],
            GeoShape::Circle(c) => vec![c.center],
        }
    }
}

impl Translatable for GeoShape {
    fn translate(&mut self, v: &Vector) -> &mut Self {
        match self {
            GeoShape::Point(p) => {
                p.translate(v);
            }
            GeoShape::Segment(s) => {
                s.translate(v);
            }
            GeoShape::Line(l) => {
                l.translate(v);
            }
            GeoShape::Ray(r) => {
                r.translate(v);
            }
            GeoShape::Circle(c) => {
                c.translate(v);
            }
        }
        self
    }
}

impl ContainsPoint for GeoShape {
    fn contains_point(&self, point: &Point) -> bool {
        match self {
            GeoShape::Point(p) => p.contains_point(point),
            GeoShape::Segment(s) => s.contains_point(point),
            GeoShape::Line(l) => l.contains_point(point),
            GeoShape::Ray(r) => r.contains_point(point),
            GeoShape::Circle(c) => c.contains_point(point),
        }
    }
}

impl CrossesSegment for GeoShape {
    fn crosses_segment(&self, segment: &Segment) -> bool {
        match self {
            GeoShape::Point(p) => p.crosses_segment(segment),
            GeoShape::Segment(s) => s.crosses_segment(segment),
            GeoShape::Line(l) => l.crosses_segment(segment),
            GeoShape::Ray(r) => r.crosses_segment(segment),
            GeoShape::Circle(c) => c.crosses_segment(segment),
        }
    }
}

impl From<Point> for GeoShape {
    fn from(p: Point) -> Self {
        GeoShape::Point(p)
    }
}

impl From<Segment> for GeoShape {
    fn from(s: Segment) -> Self {
        GeoShape::Segment(s)
    }
}

impl From<Line> for GeoShape {
    fn from(l: Line) -> Self {
        GeoShape::Line(l)
    }
}

impl From<Ray> for GeoShape {
    fn from(r: Ray) -> Self {
        GeoShape::Ray(r)
    }
}

impl From<Circle> for GeoShape {
    fn from(c: Circle) -> Self {
        GeoShape::Circle(c)
    }
}
