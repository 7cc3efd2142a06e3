use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::geometry::primitives::Point;

/// Free 2D integer displacement.
///
/// Products of two vectors only fit in an `i64` while both components stay within
/// twice [`MAX_COORD`](crate::MAX_COORD), which is what the differences of two in-range points are.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector {
    pub dx: i64,
    pub dy: i64,
}

impl Vector {
    pub const ZERO: Vector = Vector { dx: 0, dy: 0 };

    pub fn new(dx: i64, dy: i64) -> Self {
        Vector { dx, dy }
    }

    /// Displacement leading from `from` to `to`
    pub fn between(from: &Point, to: &Point) -> Self {
        Vector {
            dx: to.0 - from.0,
            dy: to.1 - from.1,
        }
    }

    pub fn x(&self) -> i64 {
        self.dx
    }

    pub fn y(&self) -> i64 {
        self.dy
    }

    #[inline(always)]
    pub fn dot(&self, other: &Vector) -> i64 {
        self.dx * other.dx + self.dy * other.dy
    }

    /// z-component of the 3D cross product.
    /// Positive if `other` turns counter-clockwise from `self`, zero if they are collinear.
    #[inline(always)]
    pub fn cross(&self, other: &Vector) -> i64 {
        self.dx * other.dy - self.dy * other.dx
    }

    /// Multiplies both components in place and returns the scaled value.
    pub fn scale(&mut self, factor: i64) -> Self {
        *self *= factor;
        *self
    }

    pub fn negate(&self) -> Self {
        -*self
    }

    pub fn sq_length(&self) -> i64 {
        self.dot(self)
    }

    /// Euclidean length truncated toward zero
    pub fn length(&self) -> i64 {
        self.sq_length().isqrt()
    }

    pub fn is_zero(&self) -> bool {
        *self == Vector::ZERO
    }
}

/// True if `a` and `b` are both non-zero and have different signs.
#[inline(always)]
pub(crate) fn strictly_opposite(a: i64, b: i64) -> bool {
    a.signum() * b.signum() < 0
}

impl Add for Vector {
    type Output = Vector;

    fn add(mut self, other: Vector) -> Vector {
        self += other;
        self
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(mut self, other: Vector) -> Vector {
        self -= other;
        self
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, other: Vector) {
        self.dx += other.dx;
        self.dy += other.dy;
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, other: Vector) {
        self.dx -= other.dx;
        self.dy -= other.dy;
    }
}

impl Mul<i64> for Vector {
    type Output = Vector;

    fn mul(mut self, factor: i64) -> Vector {
        self *= factor;
        self
    }
}

impl MulAssign<i64> for Vector {
    fn mul_assign(&mut self, factor: i64) {
        self.dx *= factor;
        self.dy *= factor;
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self * -1
    }
}

impl From<(i64, i64)> for Vector {
    fn from((dx, dy): (i64, i64)) -> Self {
        Vector { dx, dy }
    }
}

impl From<Vector> for (i64, i64) {
    fn from(v: Vector) -> Self {
        (v.dx, v.dy)
    }
}
