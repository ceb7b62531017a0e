//! `BezierCtrl`: one cubic segment stored in start-relative coordinates.
//!
//! Every method here treats the segment as if it started at the origin;
//! the enclosing [`crate::bezier_path::BezierPath`] threads the cumulative
//! absolute start position through as an explicit `start` argument where one
//! is needed.

use crate::consts::STRICT_MAX_ABSOLUTE_DIFFERENCE;
use crate::point::Point;
use crate::rect::Rect;
use crate::utils::{self, f64_compare};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The de Casteljau evaluation hierarchy at a single parameter `t`, kept
/// around because splitting, tangents and evaluation all reuse it.
pub struct CasteljauPoints {
	pub n3: [Point; 3],
	pub n2: [Point; 2],
	pub n1: Point,
}

/// A single cubic Bézier segment, in coordinates relative to an implicit
/// `(0, 0)` start: the curve runs from `(0,0)` through control vectors `p1`
/// and `p2` to endpoint `pos`.
///
/// `p2` is `Option`: when absent, the segment behaves as if `p2 == pos` (a
/// "no second control" segment equivalent to a quadratic-looking cubic).
/// This sentinel is preserved explicitly rather than collapsed at
/// construction time, per the source's load-bearing use of the distinction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BezierCtrl {
	pub p1: Point,
	pub p2: Option<Point>,
	pub pos: Point,
}

impl BezierCtrl {
	pub fn new(p1: Point, p2: Option<Point>, pos: Point) -> Self {
		BezierCtrl { p1, p2, pos }
	}

	/// A straight segment: both controls collinear with `(0,0) -> pos`, using the sentinel.
	pub fn line(pos: Point) -> Self {
		BezierCtrl { p1: Point::ORIGIN, p2: None, pos }
	}

	/// `p2`, falling back to `pos` when absent.
	pub fn p2_or_default(&self) -> Point {
		self.p2.unwrap_or(self.pos)
	}

	/// De Casteljau evaluation hierarchy at parameter `t`.
	pub fn casteljau_points(&self, t: f64) -> CasteljauPoints {
		let p0 = Point::ORIGIN;
		let p1 = self.p1;
		let p2 = self.p2_or_default();
		let p3 = self.pos;

		let n3 = [lerp(p0, p1, t), lerp(p1, p2, t), lerp(p2, p3, t)];
		let n2 = [lerp(n3[0], n3[1], t), lerp(n3[1], n3[2], t)];
		let n1 = lerp(n2[0], n2[1], t);
		CasteljauPoints { n3, n2, n1 }
	}

	/// The point on the curve at parameter `t`, offset by `start` (default origin).
	pub fn value_at(&self, t: f64, start: Option<Point>) -> Point {
		start.unwrap_or(Point::ORIGIN) + self.casteljau_points(t).n1
	}

	/// Monomial coefficients `(c3, c2, c1)` of the relative curve (the
	/// constant term is always zero since the relative curve starts at the
	/// origin): `C(t) = c3*t^3 + c2*t^2 + c1*t`.
	fn monomial_coefficients(&self) -> (Point, Point, Point) {
		let p1 = self.p1;
		let p2 = self.p2_or_default();
		let pos = self.pos;
		let c3 = p1 * 3. - p2 * 3. + pos;
		let c2 = p1 * -6. + p2 * 3.;
		let c1 = p1 * 3.;
		(c3, c2, c1)
	}

	/// Splits this segment at parameter `t`, returning two new `BezierCtrl`s
	/// (each in its own start-relative coordinates) whose concatenation
	/// reproduces the original curve.
	pub fn splitting(&self, t: f64) -> (BezierCtrl, BezierCtrl) {
		let cp = self.casteljau_points(t);
		let left = BezierCtrl::new(cp.n3[0], Some(cp.n2[0]), cp.n1).normalize_sentinel();
		let right = BezierCtrl::new(cp.n2[1] - cp.n1, Some(cp.n3[2] - cp.n1), self.pos - cp.n1).normalize_sentinel();
		(left, right)
	}

	/// Splits at an ordered list of parameters, re-parameterising each
	/// subsequent split by `(t - t_prev) / (1 - t_prev)`.
	pub fn splittings(&self, t_list: &[f64]) -> Vec<BezierCtrl> {
		let mut result = Vec::with_capacity(t_list.len() + 1);
		let mut remainder = *self;
		let mut previous_t = 0.0;
		for &t in t_list {
			let local_t = (t - previous_t) / (1. - previous_t);
			let (left, right) = remainder.splitting(local_t);
			result.push(left);
			remainder = right;
			previous_t = t;
		}
		result.push(remainder);
		result
	}

	/// Collapse `p1 == origin, p2 == pos` back to the line sentinel, used
	/// after operations (split, reverse) that would otherwise materialize it.
	fn normalize_sentinel(mut self) -> Self {
		if self.p1 == Point::ORIGIN {
			if let Some(p2) = self.p2 {
				if p2 == self.pos {
					self.p2 = None;
				}
			}
		}
		self
	}

	/// The analytic first, second or third derivative vector at `t`.
	/// `n = 1, 2, 3`.
	pub fn derivation(&self, t: f64, n: u8) -> Point {
		let (c3, c2, c1) = self.monomial_coefficients();
		match n {
			1 => (c3 * 3.) * (t * t) + (c2 * 2.) * t + c1,
			2 => (c3 * 6.) * t + (c2 * 2.),
			3 => c3 * 6.,
			_ => panic!("derivation order must be 1, 2 or 3"),
		}
	}

	/// Normalised tangent direction at `t`.
	pub fn tangent(&self, t: f64) -> Point {
		let has_p1 = self.p1 != Point::ORIGIN;
		let has_p2 = self.p2_or_default() != self.pos;
		let direction = if !has_p1 && !has_p2 {
			self.pos
		} else if !has_p1 {
			let cp = self.casteljau_points(t);
			cp.n3[2] - cp.n3[1]
		} else if !has_p2 {
			let cp = self.casteljau_points(t);
			cp.n3[1] - cp.n3[0]
		} else {
			self.derivation(t, 1)
		};
		direction.normalization(1.).unwrap_or(Point::new(1., 0.))
	}

	/// Normalised normal (perpendicular to the tangent) at `t`, scaled to
	/// `len` and offset by `start`. Returns the scaled normal vector and the
	/// absolute point `start + value_at(t)`.
	pub fn normals(&self, t: f64, len: f64, start: Option<Point>) -> (Point, Point) {
		let normal = self.tangent(t).perpendicular() * len;
		(normal, self.value_at(t, start))
	}

	/// Axis-aligned bounding box, in coordinates offset by `start` (default origin).
	pub fn bounding_box(&self, start: Option<Point>) -> Rect {
		let origin = start.unwrap_or(Point::ORIGIN);
		let mut xs = vec![0., self.pos.x];
		let mut ys = vec![0., self.pos.y];

		let (c3, c2, c1) = self.monomial_coefficients();
		// B'(t) = 0 per axis: 3*c3*t^2 + 2*c2*t + c1 = 0
		for t in utils::solve_quadratic(4. * c2.x * c2.x - 12. * c3.x * c1.x, 6. * c3.x, 2. * c2.x, c1.x) {
			if (0. ..=1.).contains(&t) {
				xs.push(self.value_at(t, None).x);
			}
		}
		for t in utils::solve_quadratic(4. * c2.y * c2.y - 12. * c3.y * c1.y, 6. * c3.y, 2. * c2.y, c1.y) {
			if (0. ..=1.).contains(&t) {
				ys.push(self.value_at(t, None).y);
			}
		}
		// Inflection point: B''(t) = 0, i.e. 6*c3*t + 2*c2 = 0, per axis; include both coordinates at that t.
		for t in utils::solve_linear(6. * c3.x, 2. * c2.x).into_iter().chain(utils::solve_linear(6. * c3.y, 2. * c2.y)) {
			if (0. ..=1.).contains(&t) {
				let p = self.value_at(t, None);
				xs.push(p.x);
				ys.push(p.y);
			}
		}

		let lb = Point::new(xs.iter().cloned().fold(f64::INFINITY, f64::min), ys.iter().cloned().fold(f64::INFINITY, f64::min));
		let rt = Point::new(xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max), ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max));
		Rect::new(origin + lb, origin + rt)
	}

	/// The segment rotated by `radian` about the origin, then the roots of
	/// its first and second derivatives in x and y, each filtered to `(0,1)`.
	/// Returns `(first_derivative_roots, second_derivative_roots)`.
	pub fn extremes(&self, radian: f64) -> (Vec<f64>, Vec<f64>) {
		let rotated = if radian == 0. { *self } else { self.rotate(radian) };
		let (c3, c2, c1) = rotated.monomial_coefficients();

		let mut first = Vec::new();
		first.extend(utils::solve_quadratic(4. * c2.x * c2.x - 12. * c3.x * c1.x, 6. * c3.x, 2. * c2.x, c1.x));
		first.extend(utils::solve_quadratic(4. * c2.y * c2.y - 12. * c3.y * c1.y, 6. * c3.y, 2. * c2.y, c1.y));
		first.retain(|t| (0. ..=1.).contains(t));

		let mut second = Vec::new();
		second.extend(utils::solve_linear(6. * c3.x, 2. * c2.x));
		second.extend(utils::solve_linear(6. * c3.y, 2. * c2.y));
		second.retain(|t| (0. ..=1.).contains(t));

		(first, second)
	}

	/// Parameters `t` at which the curve attains the given absolute `x`
	/// and/or `y` coordinate, given the segment's absolute `start`. When
	/// both are given the result is the union of the per-axis solutions.
	/// Filtered to `interval`, snapped to its endpoints within `tol`, and
	/// deduplicated so no two retained roots are within `tol` of each other.
	pub fn roots(&self, x: Option<f64>, y: Option<f64>, start: Point, tol: f64, interval: (f64, f64)) -> Vec<f64> {
		let (c3, c2, c1) = self.monomial_coefficients();
		let mut raw = Vec::new();
		if let Some(target_x) = x {
			raw.extend(utils::solve_cubic(c3.x, c2.x, c1.x, start.x - target_x));
		}
		if let Some(target_y) = y {
			raw.extend(utils::solve_cubic(c3.y, c2.y, c1.y, start.y - target_y));
		}

		let (lo, hi) = interval;
		let filtered: Vec<f64> = raw
			.into_iter()
			.filter_map(|t| {
				if f64_compare(t, lo, tol) {
					Some(lo)
				} else if f64_compare(t, hi, tol) {
					Some(hi)
				} else if t >= lo && t <= hi {
					Some(t)
				} else {
					None
				}
			})
			.collect();
		utils::dedupe_sorted_params(filtered, tol)
	}

	/// Parameters where the curve passes within `offset` of `target`
	/// (absolute). Rotates the segment in `pi/90` steps until neither `p1`
	/// nor `p2` is axis-aligned, to avoid divisions by zero in the root
	/// solver, then filters `roots` results by Euclidean distance.
	pub fn pos_at(&self, target: Point, start: Point, offset: f64) -> Vec<f64> {
		let mut angle = 0.0;
		let mut candidate = *self;
		let mut rotated_target = target;
		let step = std::f64::consts::PI / 90.;
		let mut attempts = 0;
		while (candidate.p1.x == 0. || candidate.p1.y == 0. || candidate.p2_or_default().x == 0. || candidate.p2_or_default().y == 0.) && attempts < 90 {
			angle += step;
			candidate = self.rotate(angle);
			rotated_target = start + (target - start).rotate(angle, None);
			attempts += 1;
		}

		let tol = offset / candidate.approximated_length(12).max(STRICT_MAX_ABSOLUTE_DIFFERENCE);
		let ts = candidate.roots(Some(rotated_target.x), Some(rotated_target.y), start, tol, (0., 1.));
		ts.into_iter().filter(|&t| self.value_at(t, Some(start)).distance(target) <= offset).collect()
	}

	/// Polyline-sampled approximation of the arc length, using `segments` samples.
	pub fn approximated_length(&self, segments: u32) -> f64 {
		let mut length = 0.0;
		let mut previous = Point::ORIGIN;
		for i in 1..=segments {
			let t = i as f64 / segments as f64;
			let current = self.value_at(t, None);
			length += previous.distance(current);
			previous = current;
		}
		length
	}

	/// Arc length from `0` to `t` via 8-point Gauss-Legendre quadrature of
	/// `||B'(u)||` over `[0, t]`.
	pub fn length_at(&self, t: f64) -> f64 {
		const NODES: [f64; 8] = [-0.1834346424956498, 0.1834346424956498, -0.5255324099163290, 0.5255324099163290, -0.7966664774136267, 0.7966664774136267, -0.9602898564975363, 0.9602898564975363];
		const WEIGHTS: [f64; 8] = [0.3626837833783620, 0.3626837833783620, 0.3137066458778873, 0.3137066458778873, 0.2223810344533745, 0.2223810344533745, 0.1012285362903763, 0.1012285362903763];

		let half = t / 2.;
		let mut sum = 0.0;
		for i in 0..8 {
			let u = half * NODES[i] + half;
			let speed = self.derivation(u, 1);
			sum += WEIGHTS[i] * (speed.x * speed.x + speed.y * speed.y).sqrt();
		}
		half * sum
	}

	/// Binary search for the `t` such that `length_at(t) / length_at(1) == pct`,
	/// within `tol`, capped at [`crate::consts::IN_DISTANCE_ITERATION_LIMIT`] iterations.
	pub fn in_distance(&self, pct: f64, tol: f64, interval: (f64, f64)) -> f64 {
		if pct <= 0. {
			return interval.0;
		}
		if pct >= 1. {
			return interval.1;
		}
		let total = self.length_at(1.);
		if total <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
			return interval.0;
		}
		let (mut lo, mut hi) = interval;
		let mut mid = (lo + hi) / 2.;
		for _ in 0..crate::consts::IN_DISTANCE_ITERATION_LIMIT {
			let current = self.length_at(mid) / total;
			if (current - pct).abs() <= tol {
				break;
			}
			if current < pct {
				lo = mid;
			} else {
				hi = mid;
			}
			mid = (lo + hi) / 2.;
		}
		mid
	}

	/// Reversed segment: `p1' = p2 - pos, p2' = p1 - pos, pos' = -pos`.
	pub fn reverse(&self) -> BezierCtrl {
		let p2 = self.p2_or_default();
		BezierCtrl::new(p2 - self.pos, Some(self.p1 - self.pos), -self.pos).normalize_sentinel()
	}

	pub fn rotate(&self, radian: f64) -> BezierCtrl {
		BezierCtrl::new(self.p1.rotate(radian, None), self.p2.map(|p| p.rotate(radian, None)), self.pos.rotate(radian, None))
	}

	/// Reflects all three component vectors across the line through the
	/// origin in the direction of `through` (relative-vector mirroring: the
	/// enclosing path is responsible for translating when the mirror line
	/// does not pass through the segment's absolute start).
	pub fn mirror(&self, through: Point) -> BezierCtrl {
		let origin = Point::ORIGIN;
		BezierCtrl::new(self.p1.mirror(origin, through), self.p2.map(|p| p.mirror(origin, through)), self.pos.mirror(origin, through))
	}

	pub fn scale(&self, k: f64) -> BezierCtrl {
		BezierCtrl::new(self.p1 * k, self.p2.map(|p| p * k), self.pos * k)
	}

	/// Sign of `cross(tangent(0), tangent(1))`, rounded to 3 decimals: the
	/// local turning direction, `-1`, `0` or `+1`.
	pub fn rotations(&self) -> i32 {
		let cross = (self.tangent(0.).cross(self.tangent(1.)) * 1000.).round() / 1000.;
		if cross > 0. {
			1
		} else if cross < 0. {
			-1
		} else {
			0
		}
	}

	/// Total signed turning angle from the `t=0` tangent to the `t=1`
	/// tangent, wrapped to `(-2*pi, 2*pi)` with sign matching [`Self::rotations`].
	pub fn curve(&self) -> f64 {
		let a0 = self.tangent(0.).radian(None, true);
		let a1 = self.tangent(1.).radian(None, true);
		let mut delta = a1 - a0;
		let turn = self.rotations();
		if turn > 0 && delta < 0. {
			delta += 2. * std::f64::consts::PI;
		} else if turn < 0 && delta > 0. {
			delta -= 2. * std::f64::consts::PI;
		}
		delta
	}

	/// Splits the segment into subsegments each turning no more than `delta`
	/// radians, by iteratively rotating and splitting at the first extremum
	/// root in `(0, 1]`.
	pub fn radian_segmentation(&self, delta: f64) -> Vec<BezierCtrl> {
		let mut result = Vec::new();
		let mut remainder = *self;
		loop {
			let turning = remainder.curve().abs();
			if turning <= delta {
				result.push(remainder);
				break;
			}
			let sign = remainder.rotations();
			let angle = -delta * sign as f64;
			let rotated = remainder.rotate(angle);
			let (first_derivative_roots, _) = rotated.extremes(0.);
			let mut candidates: Vec<f64> = first_derivative_roots.into_iter().filter(|&t| t > STRICT_MAX_ABSOLUTE_DIFFERENCE).collect();
			candidates.sort_by(|a, b| a.partial_cmp(b).unwrap());
			let Some(&t) = candidates.first() else {
				result.push(remainder);
				break;
			};
			let (left, right) = remainder.splitting(t);
			result.push(left);
			remainder = right;
		}
		result
	}

	/// Reconstructs a cubic through `start`, `mid`, `end` with the given
	/// tangent directions `tangents = [at_mid_incoming, at_mid_outgoing]` at
	/// `mid`, using the standard "ABC" construction (chord-ratio `t`, then
	/// the `u(t)`/`a`/`b`/`c` points of the projection identity).
	pub fn from_abc(tangents: [Point; 2], start: Point, mid: Point, end: Point) -> BezierCtrl {
		let d1 = start.distance(mid);
		let d2 = mid.distance(end);
		let t = if d1 + d2 > STRICT_MAX_ABSOLUTE_DIFFERENCE { d1 / (d1 + d2) } else { 0.5 };

		let [a, b, c] = utils::compute_abc_for_cubic_through_points(start.as_dvec2(), mid.as_dvec2(), end.as_dvec2(), t).map(Point::from_dvec2);
		let _ = (a, c); // `b` (== mid) anchors the construction; a/c bound the tangent lines below.

		let e1 = b + tangents[0] * (b.distance(start) / 3.).max(STRICT_MAX_ABSOLUTE_DIFFERENCE);
		let e2 = b + tangents[1] * (b.distance(end) / 3.).max(STRICT_MAX_ABSOLUTE_DIFFERENCE);

		BezierCtrl::new(e1 - start, Some(e2 - start), end - start)
	}

	/// A cubic through three points using a circle-center tangent heuristic:
	/// the tangent at `mid` is taken perpendicular to the radius from the
	/// circle through `start, mid, end`.
	pub fn three_point_ctrl(start: Point, mid: Point, end: Point) -> BezierCtrl {
		let center = utils::compute_circle_center_from_points(start.as_dvec2(), mid.as_dvec2(), end.as_dvec2()).map(Point::from_dvec2);
		let tangent = match center {
			Some(c) => (mid - c).perpendicular().normalization(1.).unwrap_or(Point::new(1., 0.)),
			None => (end - start).normalization(1.).unwrap_or(Point::new(1., 0.)),
		};
		BezierCtrl::from_abc([tangent, tangent], start, mid, end)
	}

	/// Adjusts `p1`/`p2` so that `value_at(t) == target_pos` while preserving
	/// the directions of `p1` and `pos -> p2`, by solving the 2x2 linear
	/// system in the scalar lengths of those two vectors.
	pub fn control_into(&self, t: f64, target_pos: Point) -> BezierCtrl {
		let dir1 = self.p1.normalization(1.);
		let dir2 = (self.p2_or_default() - self.pos).normalization(1.);

		let (Some(dir1), Some(dir2)) = (dir1, dir2) else {
			return *self;
		};

		// B(t) = (1-t)^3*0 + 3(1-t)^2 t * (len1*dir1) + 3(1-t) t^2 * (pos + len2*dir2) + t^3*pos
		// Solve for (len1, len2) such that this equals target_pos.
		let one_minus_t = 1. - t;
		let coeff1 = 3. * one_minus_t * one_minus_t * t;
		let coeff2 = 3. * one_minus_t * t * t;
		let constant = self.pos * (coeff2 + t * t * t);
		let rhs = target_pos - constant;

		// 2x2 system: coeff1*dir1.x*len1 + coeff2*dir2.x*len2 = rhs.x, (same for y)
		let det = coeff1 * dir1.x * coeff2 * dir2.y - coeff1 * dir1.y * coeff2 * dir2.x;
		if det.abs() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
			// Degenerate (collinear controls): rotate by 1 radian and retry, as the source does.
			let rotated = self.rotate(1.);
			let solved = rotated.control_into(t, target_pos.rotate(1., None));
			return solved.rotate(-1.);
		}
		let len1 = (rhs.x * coeff2 * dir2.y - rhs.y * coeff2 * dir2.x) / det;
		let len2 = (coeff1 * dir1.x * rhs.y - coeff1 * dir1.y * rhs.x) / det;

		BezierCtrl::new(dir1 * len1, Some(self.pos + dir2 * len2), self.pos)
	}

	/// Whether both controls are collinear with `(0,0) -> pos`, within `offset`.
	pub fn is_line(&self) -> bool {
		if self.pos.is_origin() {
			return self.p1.is_origin() && self.p2_or_default().is_origin();
		}
		(self.p1.is_origin() || utils::are_points_collinear(Point::ORIGIN.as_dvec2(), self.pos.as_dvec2(), self.p1.as_dvec2()))
			&& (self.p2_or_default() == self.pos || utils::are_points_collinear(Point::ORIGIN.as_dvec2(), self.pos.as_dvec2(), self.p2_or_default().as_dvec2()))
	}

	/// At least one coordinate magnitude exceeds `offset`: rejects
	/// zero-length (degenerate) segments.
	pub fn is_valid(&self, offset: f64) -> bool {
		self.pos.x.abs() > offset || self.pos.y.abs() > offset || self.p1.x.abs() > offset || self.p1.y.abs() > offset
	}
}

fn lerp(a: Point, b: Point, t: f64) -> Point {
	a + (b - a) * t
}

#[cfg(test)]
mod tests {
	use super::*;

	fn compare_points(a: Point, b: Point) -> bool {
		a.distance(b) < 1e-6
	}

	fn cubic() -> BezierCtrl {
		BezierCtrl::new(Point::new(25., 100.), Some(Point::new(75., -100.)), Point::new(100., 0.))
	}

	#[test]
	fn value_at_endpoints() {
		let c = cubic();
		assert!(compare_points(c.value_at(0., None), Point::ORIGIN));
		assert!(compare_points(c.value_at(1., None), c.pos));
	}

	#[test]
	fn splitting_preserves_pos_sum_invariant() {
		let c = cubic();
		for &t in &[0.1, 0.3, 0.5, 0.7, 0.9] {
			let (left, right) = c.splitting(t);
			assert!(compare_points(left.pos + right.pos, c.pos));
			assert!(compare_points(c.value_at(t, None), left.pos));
		}
	}

	#[test]
	fn reverse_is_involution() {
		let c = cubic();
		let reversed_twice = c.reverse().reverse();
		assert!(compare_points(reversed_twice.pos, c.pos));
		assert!(compare_points(reversed_twice.p1, c.p1));
	}

	#[test]
	fn length_at_one_bounds() {
		let c = cubic();
		let length = c.length_at(1.);
		let chord = c.pos.distance(Point::ORIGIN);
		let control_polygon = c.p1.distance(Point::ORIGIN) + c.p2_or_default().distance(c.p1) + c.pos.distance(c.p2_or_default());
		assert!(length >= chord - 1e-6);
		assert!(length <= control_polygon + 1e-6);
	}

	#[test]
	fn line_detection() {
		let line = BezierCtrl::line(Point::new(10., 0.));
		assert!(line.is_line());
		assert!(!cubic().is_line());
	}

	#[test]
	fn roots_on_horizontal_line_cubic() {
		// Matches the spec's line-cubic intersection scenario: a cubic from
		// (0,0) to (100,0) with controls (25,100) and (75,-100), intersected
		// with y=0, yields roots near 0, 0.5, 1.
		let c = cubic();
		let mut ts = c.roots(None, Some(0.), Point::ORIGIN, 1e-3, (0., 1.));
		ts.sort_by(|a, b| a.partial_cmp(b).unwrap());
		assert_eq!(ts.len(), 3);
		assert!((ts[0] - 0.0).abs() < 1e-2);
		assert!((ts[1] - 0.5).abs() < 1e-2);
		assert!((ts[2] - 1.0).abs() < 1e-2);
	}

	#[test]
	fn rotations_sign() {
		// A curve turning counter-clockwise (left) has rotations() == 1.
		let c = BezierCtrl::new(Point::new(100., 0.), Some(Point::new(100., 50.)), Point::new(0., 100.));
		assert_eq!(c.rotations(), 1);
	}
}
