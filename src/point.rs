//! An immutable 2D point/vector with the affine operations the rest of the
//! kernel is built from.

use glam::DVec2;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered pair `(x, y)` of finite real numbers, with value semantics:
/// every operation below returns a fresh `Point` rather than mutating `self`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const ORIGIN: Point = Point { x: 0., y: 0. };

	pub fn new(x: f64, y: f64) -> Self {
		Point { x, y }
	}

	pub(crate) fn from_dvec2(v: DVec2) -> Self {
		Point { x: v.x, y: v.y }
	}

	pub(crate) fn as_dvec2(self) -> DVec2 {
		DVec2::new(self.x, self.y)
	}

	/// True when this point is exactly the origin.
	pub fn is_origin(self) -> bool {
		self.x == 0. && self.y == 0.
	}

	/// This vector scaled to the given length, or `None` at the origin.
	pub fn normalization(self, len: f64) -> Option<Point> {
		let v = self.as_dvec2();
		if v == DVec2::ZERO {
			None
		} else {
			Some(Point::from_dvec2(v.normalize() * len))
		}
	}

	/// The perpendicular vector `(y, -x)`, a quarter-turn clockwise.
	pub fn perpendicular(self) -> Point {
		Point::new(self.y, -self.x)
	}

	/// The angle of this point as seen from `about` (default the origin).
	/// When `negative` is true the result is in `[-pi, pi]`, otherwise `[0, 2*pi)`.
	pub fn radian(self, about: Option<Point>, negative: bool) -> f64 {
		let origin = about.unwrap_or(Point::ORIGIN);
		let v = self - origin;
		let angle = v.y.atan2(v.x);
		if negative {
			angle
		} else if angle < 0. {
			angle + 2. * std::f64::consts::PI
		} else {
			angle
		}
	}

	/// Rotate this point by `radian` about `center` (default the origin).
	pub fn rotate(self, radian: f64, center: Option<Point>) -> Point {
		let origin = center.unwrap_or(Point::ORIGIN);
		let v = self - origin;
		let (sin, cos) = radian.sin_cos();
		let rotated = Point::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos);
		origin + rotated
	}

	/// Reflect this point across the infinite line through `p1` and `p2`.
	pub fn mirror(self, p1: Point, p2: Point) -> Point {
		let dir = (p2 - p1).as_dvec2();
		let to_self = (self - p1).as_dvec2();
		let len_sq = dir.length_squared();
		if len_sq <= f64::EPSILON {
			return self;
		}
		let projection = dir * (to_self.dot(dir) / len_sq);
		let foot = p1 + Point::from_dvec2(projection);
		foot + (foot - self)
	}

	/// Euclidean distance between this point and `other`.
	pub fn distance(self, other: Point) -> f64 {
		self.as_dvec2().distance(other.as_dvec2())
	}

	/// Squared-distance comparison: true when `distance(self, pos) < v^2`... actually
	/// compares against `v` as a squared-distance threshold directly, matching the
	/// original's `distanceOffset`.
	pub fn distance_offset(self, pos: Point, v: f64) -> bool {
		self.as_dvec2().distance_squared(pos.as_dvec2()) < v * v
	}

	/// Scale this point by `k` about `about` (default the origin).
	pub fn scale(self, k: f64, about: Option<Point>) -> Point {
		let origin = about.unwrap_or(Point::ORIGIN);
		origin + (self - origin) * k
	}

	/// The dot product of this point (as a vector) with `other`.
	pub fn dot_product(self, other: Point) -> f64 {
		self.as_dvec2().dot(other.as_dvec2())
	}

	/// The cross (perp-dot) product of this point (as a vector) with `other`.
	pub fn cross(self, other: Point) -> f64 {
		self.x * other.y - self.y * other.x
	}
}

impl Add for Point {
	type Output = Point;
	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Point;
	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl Mul<f64> for Point {
	type Output = Point;
	fn mul(self, rhs: f64) -> Point {
		Point::new(self.x * rhs, self.y * rhs)
	}
}

impl Div<f64> for Point {
	type Output = Point;
	fn div(self, rhs: f64) -> Point {
		Point::new(self.x / rhs, self.y / rhs)
	}
}

impl Neg for Point {
	type Output = Point;
	fn neg(self) -> Point {
		Point::new(-self.x, -self.y)
	}
}

impl From<DVec2> for Point {
	fn from(v: DVec2) -> Self {
		Point::from_dvec2(v)
	}
}

impl From<Point> for DVec2 {
	fn from(p: Point) -> Self {
		p.as_dvec2()
	}
}

// `Point` equality/hashing is bit-exact on the underlying `f64`s, per the
// design notes: tolerance-aware comparison is the caller's job via
// `distance`/`distance_offset`, not `Point`'s own `Eq`.
impl Eq for Point {}
impl Hash for Point {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.x.to_bits().hash(state);
		self.y.to_bits().hash(state);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn compare_points(a: Point, b: Point) -> bool {
		(a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
	}

	#[test]
	fn perpendicular() {
		assert!(compare_points(Point::new(1., 0.).perpendicular(), Point::new(0., -1.)));
	}

	#[test]
	fn rotate_quarter_turn() {
		let rotated = Point::new(1., 0.).rotate(std::f64::consts::FRAC_PI_2, None);
		assert!(compare_points(rotated, Point::new(0., 1.)));
	}

	#[test]
	fn mirror_across_x_axis() {
		let mirrored = Point::new(2., 3.).mirror(Point::new(0., 0.), Point::new(1., 0.));
		assert!(compare_points(mirrored, Point::new(2., -3.)));
	}

	#[test]
	fn distance_offset_matches_distance() {
		let p = Point::new(0., 0.);
		assert!(p.distance_offset(Point::new(3., 4.), 6.));
		assert!(!p.distance_offset(Point::new(3., 4.), 4.));
	}

	#[test]
	fn normalization_is_none_at_origin() {
		assert!(Point::ORIGIN.normalization(1.).is_none());
		assert!(Point::new(3., 4.).normalization(5.).unwrap() == Point::new(3., 4.));
	}
}
