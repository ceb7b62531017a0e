//! Curve-curve and curve-line intersection.
//!
//! Line intersections are solved in closed form by rotating the curve so the
//! line lies on the x-axis and finding roots of the resulting cubic. General
//! curve-curve intersections use recursive bounding-box subdivision: when two
//! segments' boxes shrink below `error`, their midpoint parameters are an
//! intersection.

use crate::bezier_ctrl::BezierCtrl;
use crate::consts::MAX_SUBDIVISION_DEPTH;
use crate::point::Point;
use crate::rect::Rect;
use crate::utils;

fn rects_overlap(a: &Rect, b: &Rect) -> bool {
	a.left() <= b.right() && b.left() <= a.right() && a.bottom() <= b.top() && b.bottom() <= a.top()
}

/// Parameters `t` (on `ctrl`) at which `ctrl` crosses the infinite line
/// through `line_p`/`line_q`, restricted to the segment `[line_p, line_q]`.
pub fn line_intersections(ctrl: &BezierCtrl, start: Point, line_p: Point, line_q: Point, tol: f64) -> Vec<f64> {
	let direction = line_q - line_p;
	let Some(_) = direction.normalization(1.) else {
		return Vec::new();
	};
	let angle = -direction.radian(None, true);

	let rotated = ctrl.rotate(angle);
	let rotated_start = start.rotate(angle, None);
	let rotated_p = line_p.rotate(angle, None);
	// After rotation the line is horizontal: both endpoints share a y coordinate.
	let target_y = rotated_p.y;

	let ts = rotated.roots(None, Some(target_y), rotated_start, tol, (0., 1.));

	let min_x = line_p.x.min(line_q.x);
	let max_x = line_p.x.max(line_q.x);
	let min_y = line_p.y.min(line_q.y);
	let max_y = line_p.y.max(line_q.y);

	ts.into_iter()
		.filter(|&t| {
			let p = ctrl.value_at(t, Some(start));
			utils::f64_approximately_in_range(p.x, min_x, max_x, tol) && utils::f64_approximately_in_range(p.y, min_y, max_y, tol)
		})
		.collect()
}

/// Intersection parameters `(t_on_a, t_on_b)` between two curve segments,
/// via recursive bounding-box subdivision. `error` is the bounding-box side
/// length below which a pair of boxes is accepted as an intersection.
pub fn curve_intersections(a: &BezierCtrl, a_start: Point, b: &BezierCtrl, b_start: Point, error: f64) -> Vec<(f64, f64)> {
	subdivide(a, a_start, (0., 1.), b, b_start, (0., 1.), error, 0)
}

#[allow(clippy::too_many_arguments)]
fn subdivide(a: &BezierCtrl, a_start: Point, a_interval: (f64, f64), b: &BezierCtrl, b_start: Point, b_interval: (f64, f64), error: f64, depth: u32) -> Vec<(f64, f64)> {
	let box_a = a.bounding_box(Some(a_start));
	let box_b = b.bounding_box(Some(b_start));

	if !rects_overlap(&box_a, &box_b) {
		return Vec::new();
	}

	let (a0, a1) = a_interval;
	let a_mid_t = (a0 + a1) / 2.;
	let (b0, b1) = b_interval;
	let b_mid_t = (b0 + b1) / 2.;

	if box_a.width() < error && box_a.height() < error && box_b.width() < error && box_b.height() < error {
		return vec![(a_mid_t, b_mid_t)];
	}

	if depth >= MAX_SUBDIVISION_DEPTH {
		#[cfg(feature = "logging")]
		log::warn!("curve_intersections hit the subdivision depth limit ({MAX_SUBDIVISION_DEPTH}) before the bounding boxes shrank below {error}; treating the midpoint as an intersection");
		return vec![(a_mid_t, b_mid_t)];
	}

	let (a_left, a_right) = a.splitting(0.5);
	let (b_left, b_right) = b.splitting(0.5);
	let a_mid_start = a_start + a_left.pos;
	let b_mid_start = b_start + b_left.pos;

	let mut result = Vec::new();
	result.extend(subdivide(&a_left, a_start, (a0, a_mid_t), &b_left, b_start, (b0, b_mid_t), error, depth + 1));
	result.extend(subdivide(&a_left, a_start, (a0, a_mid_t), &b_right, b_mid_start, (b_mid_t, b1), error, depth + 1));
	result.extend(subdivide(&a_right, a_mid_start, (a_mid_t, a1), &b_left, b_start, (b0, b_mid_t), error, depth + 1));
	result.extend(subdivide(&a_right, a_mid_start, (a_mid_t, a1), &b_right, b_mid_start, (b_mid_t, b1), error, depth + 1));
	result
}

/// Intersections between `a` and `b`, dispatching to the closed-form line
/// solver when `b` is a line (per [`BezierCtrl::is_line`]).
pub fn intersections(a: &BezierCtrl, a_start: Point, b: &BezierCtrl, b_start: Point, error: f64) -> Vec<(f64, f64)> {
	if b.is_line() {
		let tol = error / a.approximated_length(12).max(1e-6);
		line_intersections(a, a_start, b_start, b_start + b.pos, tol).into_iter().map(|t| (t, estimate_line_param(b, b_start, a.value_at(t, Some(a_start))))).collect()
	} else if a.is_line() {
		let tol = error / b.approximated_length(12).max(1e-6);
		line_intersections(b, b_start, a_start, a_start + a.pos, tol).into_iter().map(|t| (estimate_line_param(a, a_start, b.value_at(t, Some(b_start))), t)).collect()
	} else {
		curve_intersections(a, a_start, b, b_start, error)
	}
}

fn estimate_line_param(line: &BezierCtrl, start: Point, point: Point) -> f64 {
	let direction = line.pos;
	let len_sq = direction.dot_product(direction);
	if len_sq <= f64::EPSILON {
		0.
	} else {
		(point - start).dot_product(direction) / len_sq
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn line_intersects_diagonal_cubic() {
		// cubic from (0,0) to (100,0) with controls (25,100)/(75,-100), crossing y=0 three times.
		let c = BezierCtrl::new(Point::new(25., 100.), Some(Point::new(75., -100.)), Point::new(100., 0.));
		let ts = line_intersections(&c, Point::ORIGIN, Point::new(-10., 0.), Point::new(110., 0.), 1e-3);
		assert_eq!(ts.len(), 3);
	}

	#[test]
	fn crossing_diagonals_intersect_at_center() {
		// Two straight segments crossing at (50, 50): (0,0)-(100,100) and (0,100)-(100,0).
		let a = BezierCtrl::line(Point::new(100., 100.));
		let b = BezierCtrl::line(Point::new(100., -100.));
		let hits = curve_intersections(&a, Point::ORIGIN, &b, Point::new(0., 100.), 0.5);
		assert_eq!(hits.len(), 1);
		let (ta, tb) = hits[0];
		let pa = a.value_at(ta, None);
		let pb = b.value_at(tb, Some(Point::new(0., 100.)));
		assert!(pa.distance(Point::new(50., 50.)) < 1.0);
		assert!(pa.distance(pb) < 1.0);
	}

	#[test]
	fn disjoint_bounding_boxes_have_no_intersections() {
		let a = BezierCtrl::line(Point::new(10., 0.));
		let b_start = Point::new(0., 100.);
		let b = BezierCtrl::line(Point::new(10., 100.));
		let hits = curve_intersections(&a, Point::ORIGIN, &b, b_start, 0.5);
		assert!(hits.is_empty());
	}
}
