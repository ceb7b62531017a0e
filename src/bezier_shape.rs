//! `BezierShape`: an ordered list of [`BezierPath`]s, with the SVG-style
//! path-data serialisation used by the external adapter (see `lib.rs` docs).

use crate::bezier_path::BezierPath;
use crate::consts;
use crate::point::Point;
use crate::rect::Rect;
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A list of independent paths, e.g. the contents of one SVG `<path>`
/// element's `d` attribute (which may itself hold several `M...Z` subpaths)
/// or a whole document's drawable geometry.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BezierShape {
	paths: Vec<BezierPath>,
}

impl BezierShape {
	pub fn new() -> Self {
		BezierShape { paths: Vec::new() }
	}

	pub fn add(&mut self, path: BezierPath) {
		self.paths.push(path);
	}

	pub fn extend(&mut self, paths: impl IntoIterator<Item = BezierPath>) {
		self.paths.extend(paths);
	}

	pub fn len(&self) -> usize {
		self.paths.len()
	}

	pub fn is_empty(&self) -> bool {
		self.paths.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, BezierPath> {
		self.paths.iter()
	}

	/// Union of every path's bounding box.
	pub fn bounding_box(&self) -> Rect {
		let boxes: Vec<Rect> = self.paths.iter().map(|p| p.bounding_box()).collect();
		Rect::union_all(&boxes).unwrap_or(Rect::new(Point::ORIGIN, Point::ORIGIN))
	}

	/// Rotates every path by `radian` about `center` (default the origin).
	pub fn rotate(&self, radian: f64, center: Option<Point>) -> BezierShape {
		BezierShape {
			paths: self.paths.iter().map(|p| p.rotate(radian, center)).collect(),
		}
	}

	/// Serialises this shape as the body of an SVG path-data `d` attribute:
	/// one absolute `M` per path, each segment as `l`/`h`/`v` when both
	/// controls are zero (preferring `h`/`v` when one axis has zero delta),
	/// otherwise an absolute `C`, with a trailing `z` for closed paths.
	pub fn to_path_data(&self) -> String {
		let mut out = String::new();
		for path in &self.paths {
			let start = path.start_pos;
			out.push_str(consts::SVG_ARG_MOVE);
			out.push(' ');
			push_coords(&mut out, start.x, start.y);

			let mut cursor = start;
			for seg in path.segments() {
				if seg.p1.is_origin() && seg.p2_or_default().is_origin() {
					if seg.pos.x == 0. {
						out.push_str(consts::SVG_ARG_VERTICAL);
						out.push(' ');
						push_one(&mut out, seg.pos.y);
					} else if seg.pos.y == 0. {
						out.push_str(consts::SVG_ARG_HORIZONTAL);
						out.push(' ');
						push_one(&mut out, seg.pos.x);
					} else {
						out.push_str(consts::SVG_ARG_LINEAR);
						out.push(' ');
						push_coords(&mut out, seg.pos.x, seg.pos.y);
					}
				} else {
					out.push_str(consts::SVG_ARG_CUBIC);
					out.push(' ');
					let p1 = cursor + seg.p1;
					let p2 = cursor + seg.p2_or_default();
					let end = cursor + seg.pos;
					push_coords(&mut out, p1.x, p1.y);
					push_coords(&mut out, p2.x, p2.y);
					push_coords(&mut out, end.x, end.y);
				}
				cursor = cursor + seg.pos;
			}

			if path.is_closed() {
				out.push_str(consts::SVG_ARG_CLOSED);
				out.push(' ');
			}
		}
		out.trim_end().to_string()
	}
}

fn push_one(out: &mut String, v: f64) {
	out.push_str(&format!("{:.3} ", v));
}

fn push_coords(out: &mut String, x: f64, y: f64) {
	out.push_str(&format!("{:.3},{:.3} ", x, y));
}

impl Index<usize> for BezierShape {
	type Output = BezierPath;
	fn index(&self, index: usize) -> &BezierPath {
		&self.paths[index]
	}
}

impl IndexMut<usize> for BezierShape {
	fn index_mut(&mut self, index: usize) -> &mut BezierPath {
		&mut self.paths[index]
	}
}

impl<'a> IntoIterator for &'a BezierShape {
	type Item = &'a BezierPath;
	type IntoIter = std::slice::Iter<'a, BezierPath>;
	fn into_iter(self) -> Self::IntoIter {
		self.paths.iter()
	}
}

impl FromIterator<BezierPath> for BezierShape {
	fn from_iter<T: IntoIterator<Item = BezierPath>>(iter: T) -> Self {
		BezierShape { paths: iter.into_iter().collect() }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rect_path_data_matches_straight_commands() {
		let mut shape = BezierShape::new();
		shape.add(BezierPath::from_rect(0., 0., 10., 20.));
		let data = shape.to_path_data();
		assert!(data.starts_with("M 0.000,0.000"));
		assert!(data.contains('h') || data.contains('v') || data.contains('l'));
		assert!(data.trim_end().ends_with('z'));
	}

	#[test]
	fn circle_path_data_uses_cubic_commands() {
		let mut shape = BezierShape::new();
		shape.add(BezierPath::from_circle(Point::ORIGIN, 50.));
		let data = shape.to_path_data();
		assert!(data.contains('C'));
		assert!(data.trim_end().ends_with('z'));
	}

	#[test]
	fn bounding_box_is_union_of_paths() {
		let mut shape = BezierShape::new();
		shape.add(BezierPath::from_rect(0., 0., 10., 10.));
		shape.add(BezierPath::from_rect(50., 50., 10., 10.));
		let bbox = shape.bounding_box();
		assert!((bbox.width() - 60.).abs() < 1e-6);
		assert!((bbox.height() - 60.).abs() < 1e-6);
	}

	#[test]
	fn rotate_moves_start_pos_about_center() {
		let mut shape = BezierShape::new();
		shape.add(BezierPath::from_line(Point::new(10., 0.), Point::new(20., 0.)));
		let rotated = shape.rotate(std::f64::consts::FRAC_PI_2, Some(Point::ORIGIN));
		assert!(rotated[0].start_pos.distance(Point::new(0., 10.)) < 1e-9);
	}
}
