use serde::{Deserialize, Serialize};

use crate::MAX_COORD;
use crate::geometry::GeoShape;
use crate::util::assertions;

///Configuration of the geometry kernel
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct KernelConfig {
    ///Largest coordinate magnitude accepted by [`KernelConfig::accepts`], capped at [`MAX_COORD`]
    pub max_coord: i64,
    ///Rule used by [`GeoShape::crosses_segment_with`] for circles and rays
    pub crossing: CrossingPolicy,
}

/// How circles and rays decide whether they cross a segment.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CrossingPolicy {
    /// Circles ignore segments lying strictly inside them, and rays report any segment
    /// straddling their supporting line, even behind the start.
    #[default]
    Compatible,
    /// True set intersection for every shape.
    Exact,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            max_coord: MAX_COORD,
            crossing: CrossingPolicy::Compatible,
        }
    }
}

impl KernelConfig {
    /// Whether every point defining `shape` lies within `±max_coord`.
    pub fn accepts(&self, shape: &GeoShape) -> bool {
        let limit = self.max_coord.min(MAX_COORD);
        let fits = |c: i64| (-limit..=limit).contains(&c);
        let radius_fits = match shape {
            GeoShape::Circle(circle) => circle.radius <= limit,
            _ => true,
        };
        assertions::shape_in_range(shape)
            && radius_fits
            && shape.defining_points().iter().all(|p| fits(p.0) && fits(p.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives::{Circle, Point, Segment};

    #[test]
    fn default_preserves_compatible_crossing() {
        let config = KernelConfig::default();
        assert_eq!(config.max_coord, MAX_COORD);
        assert_eq!(config.crossing, CrossingPolicy::Compatible);
    }

    #[test]
    fn accepts_respects_custom_limit() {
        let config = KernelConfig {
            max_coord: 100,
            ..KernelConfig::default()
        };
        assert!(config.accepts(&Segment::new(Point(-100, 0), Point(100, 100)).into()));
        assert!(!config.accepts(&Segment::new(Point(-101, 0), Point(0, 0)).into()));
        assert!(!config.accepts(&Circle::new(Point(0, 0), 101).into()));
    }

    #[test]
    fn deserializes_from_json() {
        let config: KernelConfig =
            serde_json::from_str(r#"{"max_coord": 1000, "crossing": "Exact"}"#).unwrap();
        assert_eq!(config.max_coord, 1000);
        assert_eq!(config.crossing, CrossingPolicy::Exact);
    }
}
