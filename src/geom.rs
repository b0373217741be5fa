//! 3D vector math for landmark geometry.
//!
//! The classification rules only need a handful of operations over 3D points, so this module
//! provides a small, self-contained [`Point3`] type instead of pulling in a full linear algebra
//! library.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A position or displacement in 3D space.
///
/// Coordinates are `f64`, matching the precision the angle thresholds were tuned with. A
/// [`Point3`] has no identity beyond its coordinates and is freely copied.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Creates a [`Point3`] from its coordinates.
///
/// # Examples
///
/// ```
/// # use mudra::geom::pt3;
/// let p = pt3(0.5, 0.25, -0.02);
/// assert_eq!(p.x, 0.5);
/// ```
#[inline]
pub const fn pt3(x: f64, y: f64, z: f64) -> Point3 {
    Point3 { x, y, z }
}

impl Point3 {
    /// The origin (or the zero displacement).
    pub const ZERO: Self = pt3(0.0, 0.0, 0.0);

    /// Computes the dot product of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mudra::geom::pt3;
    /// let a = pt3(1.0, 3.0, -5.0);
    /// let b = pt3(4.0, -2.0, -1.0);
    /// assert_eq!(a.dot(b), 3.0);
    /// ```
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs; swapping the arguments inverts its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mudra::geom::pt3;
    /// let x = pt3(1.0, 0.0, 0.0);
    /// let y = pt3(0.0, 1.0, 0.0);
    /// assert_eq!(x.cross(y), pt3(0.0, 0.0, 1.0));
    /// assert_eq!(y.cross(x), pt3(0.0, 0.0, -1.0));
    /// ```
    pub fn cross(self, other: Self) -> Self {
        pt3(
            self.y * other.z - self.z * other.y,
            -(self.x * other.z - self.z * other.x),
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns the squared length of this vector.
    pub fn length2(self) -> f64 {
        self.dot(self)
    }

    /// Returns the length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mudra::geom::pt3;
    /// assert_eq!(pt3(0.0, 3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(self) -> f64 {
        self.length2().sqrt()
    }

    /// Computes the Euclidean distance between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mudra::geom::pt3;
    /// let a = pt3(1.0, 0.0, 0.0);
    /// let b = pt3(1.0, 3.0, 4.0);
    /// assert_eq!(a.distance_to(b), 5.0);
    /// ```
    pub fn distance_to(self, other: Self) -> f64 {
        (other - self).length()
    }

    /// Computes the smallest positive angle between `self` and `other`, in degrees.
    ///
    /// The result is NaN when either vector has zero length. Callers compare angles against
    /// thresholds, and any comparison involving NaN is `false`, so degenerate geometry naturally
    /// classifies as "not extended" instead of panicking.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mudra::geom::pt3;
    /// let a = pt3(0.0, 3.0, 4.0);
    /// assert_eq!(a.angle_to(a), 0.0);
    /// assert!((a.angle_to(-a) - 180.0).abs() < 1e-9);
    /// ```
    pub fn angle_to(self, other: Self) -> f64 {
        let cos = self.dot(other) / (self.length() * other.length());
        // Rounding can push the cosine of (anti)parallel vectors just outside [-1, 1], where
        // `acos` returns NaN; `clamp` keeps those finite while still passing NaN through.
        cos.clamp(-1.0, 1.0).acos().to_degrees()
    }
}

/// Computes the angle between the segments `p11 → p12` and `p21 → p22`, in degrees.
///
/// Shorthand for taking the two displacement vectors and calling [`Point3::angle_to`]; the NaN
/// behavior is the same.
pub fn segment_angle(p11: Point3, p12: Point3, p21: Point3, p22: Point3) -> f64 {
    (p12 - p11).angle_to(p22 - p21)
}

impl fmt::Debug for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<[f64; 3]> for Point3 {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        pt3(x, y, z)
    }
}

/// Element-wise addition.
impl Add for Point3 {
    type Output = Point3;

    fn add(self, rhs: Point3) -> Point3 {
        pt3(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Element-wise subtraction; `b - a` is the displacement from `a` to `b`.
impl Sub for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Point3) -> Point3 {
        pt3(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Scaling by a scalar.
impl Mul<f64> for Point3 {
    type Output = Point3;

    fn mul(self, rhs: f64) -> Point3 {
        pt3(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Element-wise negation.
impl Neg for Point3 {
    type Output = Point3;

    fn neg(self) -> Point3 {
        pt3(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn angle_between_axes() {
        let x = pt3(1.0, 0.0, 0.0);
        let y = pt3(0.0, 1.0, 0.0);
        assert_relative_eq!(x.angle_to(y), 90.0, epsilon = 1e-9);
        assert_relative_eq!(y.angle_to(x), 90.0, epsilon = 1e-9);
        assert_relative_eq!(x.angle_to(x), 0.0, epsilon = 1e-9);
        assert_relative_eq!(x.angle_to(-x), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn antiparallel_angle_is_half_turn() {
        // The squared length of this vector is not exactly representable, so the unclamped
        // cosine lands just below -1.0; the angle must stay finite regardless.
        let v = pt3(0.25, 0.433, -0.01);
        let angle = v.angle_to(-v);
        assert!(!angle.is_nan());
        assert_relative_eq!(angle, 180.0, epsilon = 1e-9);
        assert_relative_eq!(v.angle_to(v), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = pt3(0.1, 0.7, -0.3);
        let b = pt3(0.9, 0.2, 0.4);
        assert_eq!(a.distance_to(b), b.distance_to(a));
        assert_eq!(a.distance_to(a), 0.0);
    }

    #[test]
    fn displacement_length_equals_distance() {
        let a = pt3(0.25, 0.5, 0.0);
        let b = pt3(-1.0, 2.0, 3.5);
        assert_relative_eq!((b - a).length(), a.distance_to(b));
    }

    #[test]
    fn cross_handedness() {
        let x = pt3(1.0, 0.0, 0.0);
        let z = pt3(0.0, 0.0, 1.0);
        // x × z = -y
        assert_eq!(x.cross(z), pt3(0.0, -1.0, 0.0));
    }

    #[test]
    fn degenerate_angle_is_nan() {
        let v = pt3(0.0, 1.0, 0.0);
        assert!(Point3::ZERO.angle_to(v).is_nan());
        assert!(v.angle_to(Point3::ZERO).is_nan());
        // NaN compares false against any threshold, which is what the classifier relies on.
        assert!(!(Point3::ZERO.angle_to(v) > 0.0));
        assert!(!(Point3::ZERO.angle_to(v) < 180.0));
    }

    #[test]
    fn segment_angle_matches_vector_angle() {
        let base = pt3(0.5, 0.5, 0.0);
        let up = pt3(0.5, 0.0, 0.0);
        let right = pt3(1.0, 0.5, 0.0);
        assert_relative_eq!(segment_angle(base, up, base, right), 90.0, epsilon = 1e-9);
        assert_relative_eq!(segment_angle(base, up, base, up), 0.0, epsilon = 1e-9);
    }
}
