use crate::geometry::Vector;
use crate::geometry::primitives::{Point, Segment};

/// Trait for types that can be translated by a [`Vector`].
pub trait Translatable: Clone {
    /// Translates `self` in place.
    fn translate(&mut self, v: &Vector) -> &mut Self;

    /// Translates a clone, leaving `self` untouched.
    fn translate_clone(&self, v: &Vector) -> Self {
        let mut clone = self.clone();
        clone.translate(v);
        clone
    }
}

/// Trait for types that can decide whether a [`Point`] lies inside or on their boundary.
pub trait ContainsPoint {
    fn contains_point(&self, point: &Point) -> bool;
}

/// Trait for types that can decide whether they share at least one point with a [`Segment`].
///
/// Only segments are accepted as the other operand: there is no general shape-vs-shape intersection.
pub trait CrossesSegment {
    fn crosses_segment(&self, segment: &Segment) -> bool;
}

/// Trait for types that can compute the minimum distance between `Self` and `T`.
pub trait DistanceTo<T> {
    /// Minimum distance between `self` and `other`, 0 if `other` lies on `self`.
    fn distance(&self, other: &T) -> f64;

    /// Squared version of [DistanceTo::distance]
    fn sq_distance(&self, other: &T) -> f64;
}

/// The full contract shared by every primitive.
pub trait Shape: Translatable + ContainsPoint + CrossesSegment {}

impl<T> Shape for T where T: Translatable + ContainsPoint + CrossesSegment {}
