mod circle;
mod line;
mod point;
mod ray;
mod segment;

#[doc(inline)]
pub use circle::Circle;
#[doc(inline)]
pub use line::Line;
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use ray::Ray;
#[doc(inline)]
pub use segment::Segment;
