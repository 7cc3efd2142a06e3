pub mod geo_enums;
pub mod geo_traits;
pub mod primitives;

mod vector;

#[doc(inline)]
pub use geo_enums::GeoShape;
#[doc(inline)]
pub use vector::Vector;
