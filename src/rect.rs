//! Axis-aligned rectangle.

use crate::point::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its left-bottom and right-top corners.
/// Invariant: `lb.x <= rt.x` and `lb.y <= rt.y`; [`Rect::from_bounds`]
/// normalises unordered input, so out-of-order corners should only reach
/// [`Rect::new`] when the caller already knows they're ordered.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
	pub lb: Point,
	pub rt: Point,
}

impl Rect {
	pub fn new(lb: Point, rt: Point) -> Self {
		Rect { lb, rt }
	}

	/// Build a rect from two arbitrary corners, normalising min/max per axis.
	pub fn from_bounds(a: Point, b: Point) -> Self {
		Rect {
			lb: Point::new(a.x.min(b.x), a.y.min(b.y)),
			rt: Point::new(a.x.max(b.x), a.y.max(b.y)),
		}
	}

	/// The union of several rects, or `None` if the slice is empty.
	pub fn union_all(rects: &[Rect]) -> Option<Rect> {
        rects.iter().copied().reduce(|a, b| {
            Rect::from_bounds(Point::new(a.lb.x.min(b.lb.x), a.lb.y.min(b.lb.y)), Point::new(a.rt.x.max(b.rt.x), a.rt.y.max(b.rt.y)))
        })
	}

	pub fn width(&self) -> f64 {
		self.rt.x - self.lb.x
	}

	pub fn height(&self) -> f64 {
		self.rt.y - self.lb.y
	}

	pub fn left(&self) -> f64 {
		self.lb.x
	}

	pub fn bottom(&self) -> f64 {
		self.lb.y
	}

	pub fn right(&self) -> f64 {
		self.rt.x
	}

	pub fn top(&self) -> f64 {
		self.rt.y
	}

	pub fn area(&self) -> f64 {
		self.width() * self.height()
	}

	pub fn center(&self) -> Point {
		(self.lb + self.rt) / 2.
	}

	/// Strict overlap test: after subtracting `offset` from this rect's span,
	/// is there still a strictly positive overlap with `other`?
	pub fn intersects(&self, other: &Rect, offset: f64) -> bool {
		self.left() - offset < other.right() && other.left() - offset < self.right() && self.bottom() - offset < other.top() && other.bottom() - offset < self.top()
	}

	/// Whether `other` lies entirely within this rect, after expanding this
	/// rect's span by `offset` on every side.
	pub fn contains(&self, other: &Rect, offset: f64) -> bool {
		self.left() - offset <= other.left() && other.right() <= self.right() + offset && self.bottom() - offset <= other.bottom() && other.top() <= self.top() + offset
	}

	/// Whether the point `p` lies within this rect, expanded by `offset`.
	pub fn contains_point(&self, p: Point, offset: f64) -> bool {
		p.x >= self.left() - offset && p.x <= self.right() + offset && p.y >= self.bottom() - offset && p.y <= self.top() + offset
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn area_and_dimensions() {
		let rect = Rect::new(Point::new(0., 0.), Point::new(10., 4.));
		assert_eq!(rect.width(), 10.);
		assert_eq!(rect.height(), 4.);
		assert_eq!(rect.area(), 40.);
	}

	#[test]
	fn intersects_strict() {
		let a = Rect::new(Point::new(0., 0.), Point::new(10., 10.));
		let b = Rect::new(Point::new(10., 10.), Point::new(20., 20.));
		// Touching corners: not a strict overlap.
		assert!(!a.intersects(&b, 0.));
		assert!(a.intersects(&b, 1.));
	}

	#[test]
	fn contains() {
		let outer = Rect::new(Point::new(0., 0.), Point::new(200., 200.));
		let inner = Rect::new(Point::new(50., 50.), Point::new(150., 150.));
		assert!(outer.contains(&inner, 0.));
		assert!(!inner.contains(&outer, 0.));
	}

	#[test]
	fn union_all_matches_bounds() {
		let a = Rect::new(Point::new(0., 0.), Point::new(10., 10.));
		let b = Rect::new(Point::new(5., -5.), Point::new(20., 5.));
		let union = Rect::union_all(&[a, b]).unwrap();
		assert_eq!(union, Rect::new(Point::new(0., -5.), Point::new(20., 10.)));
	}
}
