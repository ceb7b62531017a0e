//! `BezierPath`: an ordered chain of [`BezierCtrl`] segments sharing a single
//! absolute start position, with optional closure.

use crate::bezier_ctrl::BezierCtrl;
use crate::consts::{self, RECONNECT_OFFSET, SEPARATE_OFFSET};
use crate::error::{KernelError, Result};
use crate::intersection;
use crate::point::Point;
use crate::rect::Rect;
use crate::utils;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// End cap used by [`BezierPath::to_outline`] on open paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cap {
	Butt,
	Round,
}

/// Join style used by [`BezierPath::to_outline`] between consecutive segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Join {
	Miter,
	Round,
}

/// A chain of cubic segments, each stored relative to the endpoint of the
/// one before it; `start_pos` is the only absolute coordinate carried.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BezierPath {
	pub start_pos: Point,
	segments: Vec<BezierCtrl>,
	closed: bool,
}

impl BezierPath {
	/// Opens a new, empty path at `pos`.
	pub fn start(pos: Point) -> Self {
		BezierPath {
			start_pos: pos,
			segments: Vec::new(),
			closed: false,
		}
	}

	pub fn is_closed(&self) -> bool {
		self.closed
	}

	pub fn segments(&self) -> &[BezierCtrl] {
		&self.segments
	}

	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	/// Appends a prebuilt segment (already relative to the current endpoint).
	pub fn append(&mut self, ctrl: BezierCtrl) -> Result<()> {
		if self.closed {
			return Err(KernelError::IllegalMutation("cannot append to a closed path".into()));
		}
		self.segments.push(ctrl);
		Ok(())
	}

	/// Connects a new segment from the current endpoint, given as a delta
	/// `pos` plus control deltas `p1`/`p2`. When `smooth` is set, `p1` is
	/// taken as the mirror of the previous segment's `p2` about its endpoint
	/// (i.e. `-previous.p2_or_default()` in the new segment's own relative frame).
	pub fn connect(&mut self, pos: Point, p1: Point, p2: Option<Point>, smooth: bool) -> Result<()> {
		if self.closed {
			return Err(KernelError::IllegalMutation("cannot connect to a closed path".into()));
		}
		let p1 = if smooth {
			self.segments.last().map(|previous| -(previous.p2_or_default() - previous.pos)).unwrap_or(Point::ORIGIN)
		} else {
			p1
		};
		self.segments.push(BezierCtrl::new(p1, p2, pos));
		Ok(())
	}

	/// Closes the path: if the endpoint isn't within `offset` of `start_pos`,
	/// a straight closing segment is appended first.
	pub fn close(&mut self, offset: f64) -> Result<()> {
		if self.closed {
			return Err(KernelError::IllegalMutation("path is already closed".into()));
		}
		if self.segments.is_empty() {
			return Err(KernelError::InvalidArgument("cannot close a path with no segments".into()));
		}
		let end = self.end_pos();
		if end.distance(self.start_pos) > offset {
			let delta = self.start_pos - end;
			self.segments.push(BezierCtrl::line(delta));
		}
		self.closed = true;
		Ok(())
	}

	/// The absolute position of the path's current endpoint.
	pub fn end_pos(&self) -> Point {
		self.segments.iter().fold(self.start_pos, |pos, seg| pos + seg.pos)
	}

	/// Absolute start position of each segment, in order.
	pub fn segment_starts(&self) -> Vec<Point> {
		let mut starts = Vec::with_capacity(self.segments.len());
		let mut pos = self.start_pos;
		for seg in &self.segments {
			starts.push(pos);
			pos = pos + seg.pos;
		}
		starts
	}

	/// Union of every segment's bounding box.
	pub fn bounding_box(&self) -> Rect {
		let starts = self.segment_starts();
		let boxes: Vec<Rect> = self.segments.iter().zip(starts).map(|(seg, start)| seg.bounding_box(Some(start))).collect();
		Rect::union_all(&boxes).unwrap_or(Rect::new(self.start_pos, self.start_pos))
	}

	/// Ray-cast containment test along `+y` from `q`. Rotates the whole path
	/// about `q` in [`consts::CONTAINS_POS_ROTATION_STEP`] increments, up to
	/// [`consts::CONTAINS_POS_ROTATION_LIMIT`] times, until `q` is not
	/// collinear with any segment's roots (an ambiguous ray direction).
	pub fn contains_pos(&self, q: Point) -> Result<bool> {
		let starts = self.segment_starts();

		for attempt in 0..consts::CONTAINS_POS_ROTATION_LIMIT {
			let angle = attempt as f64 * consts::CONTAINS_POS_ROTATION_STEP;
			let rotated_q = q.rotate(angle, Some(q));
			let mut hits = 0;
			let mut ambiguous = false;
			let mut on_boundary = false;

			for (seg, &start) in self.segments.iter().zip(starts.iter()) {
				let rotated_start = start.rotate(angle, Some(q));
				let rotated_seg = seg.rotate(angle);
				for t in rotated_seg.roots(Some(rotated_q.x), None, rotated_start, consts::STRICT_MAX_ABSOLUTE_DIFFERENCE, (0., 1.)) {
					let point = rotated_seg.value_at(t, Some(rotated_start));
					if (point.y - rotated_q.y).abs() <= consts::STRICT_MAX_ABSOLUTE_DIFFERENCE {
						on_boundary = true;
					}
					if (t - 0.).abs() <= consts::STRICT_MAX_ABSOLUTE_DIFFERENCE || (t - 1.).abs() <= consts::STRICT_MAX_ABSOLUTE_DIFFERENCE {
						ambiguous = true;
						break;
					}
					if point.y > rotated_q.y {
						hits += 1;
					}
				}
				if ambiguous {
					break;
				}
			}

			if on_boundary {
				return Ok(true);
			}
			if !ambiguous {
				return Ok(hits % 2 == 1);
			}
		}

		Err(KernelError::TopologyViolation("containsPos: no unambiguous ray direction found within a full rotation".into()))
	}

	/// Sum of `sign(cross(segment.pos - center, segment.value_at(0.5) - center))`,
	/// clamped to `{-1, 0, 1}`: `+1` counter-clockwise, `-1` clockwise.
	pub fn rotations(&self) -> i32 {
		let center = self.bounding_box().center();
		let starts = self.segment_starts();
		let total: f64 = self
			.segments
			.iter()
			.zip(starts)
			.map(|(seg, start)| {
				let endpoint = start + seg.pos;
				let mid = seg.value_at(0.5, Some(start));
				(endpoint - center).cross(mid - center)
			})
			.sum();
		if total > 0. {
			1
		} else if total < 0. {
			-1
		} else {
			0
		}
	}

	/// Rotates the whole path by `radian` about `center` (default the origin).
	/// Only `start_pos` moves relative to `center`; every segment's own
	/// control vectors rotate about the origin, since they are stored
	/// relative to their segment's own start.
	pub fn rotate(&self, radian: f64, center: Option<Point>) -> BezierPath {
		BezierPath {
			start_pos: self.start_pos.rotate(radian, center),
			segments: self.segments.iter().map(|seg| seg.rotate(radian)).collect(),
			closed: self.closed,
		}
	}

	/// Reversed path: segments emitted in reverse order, each with
	/// [`BezierCtrl::reverse`] applied; the new start is the original endpoint.
	pub fn reverse(&self) -> BezierPath {
		let mut reversed_segments: Vec<BezierCtrl> = self.segments.iter().rev().map(|seg| seg.reverse()).collect();
		let mut out = BezierPath {
			start_pos: self.end_pos(),
			segments: Vec::new(),
			closed: self.closed,
		};
		out.segments.append(&mut reversed_segments);
		out
	}

	/// Splits the path along the infinite line through `p1`/`p2`: rotates the
	/// path so the line becomes horizontal, sweeps segments splitting them at
	/// each `roots(y = lineY)` parameter, and alternates the output between
	/// two buckets at each crossing. When the path is closed and both ends
	/// land in the same bucket, that bucket's first and last sub-paths are
	/// stitched into one.
	pub fn split_along_line(&self, p1: Point, p2: Point) -> [Vec<BezierPath>; 2] {
		let direction = p2 - p1;
		let Some(_) = direction.normalization(1.) else {
			return [vec![self.clone()], Vec::new()];
		};
		let angle = -direction.radian(None, true);
		let line_y = p1.rotate(angle, None).y;

		let mut buckets: [Vec<BezierPath>; 2] = [Vec::new(), Vec::new()];
		let mut bucket_index = 0usize;
		let mut current = BezierPath::start(self.start_pos);

		let starts = self.segment_starts();
		for (seg, &start) in self.segments.iter().zip(starts.iter()) {
			let rotated_seg = seg.rotate(angle);
			let rotated_start = start.rotate(angle, None);
			let tol = consts::DEFAULT_PIXEL_TOLERANCE / seg.approximated_length(consts::DEFAULT_APPROXIMATION_SEGMENTS).max(1e-6);
			let mut ts = rotated_seg.roots(None, Some(line_y), rotated_start, tol, (0., 1.));
			ts.retain(|&t| t > tol && t < 1. - tol);

			if ts.is_empty() {
				let _ = current.append(*seg);
				continue;
			}

			let pieces = seg.splittings(&ts);
			for piece in pieces {
				let _ = current.append(piece);
				buckets[bucket_index].push(current.clone());
				bucket_index = 1 - bucket_index;
				current = BezierPath::start(current.end_pos());
			}
			// undo the push of the final piece; it continues into the next segment
			if let Some(last) = buckets[1 - bucket_index].pop() {
				current = last;
			}
			bucket_index = 1 - bucket_index;
		}
		if !current.is_empty() || current.start_pos != current.end_pos() {
			buckets[bucket_index].push(current);
		}

		if self.closed && !buckets[0].is_empty() && !buckets[1].is_empty() {
			// Stitch the first and last sub-path of whichever bucket the path
			// both began and ended in.
			for bucket in buckets.iter_mut() {
				if bucket.len() > 1 {
					let last = bucket.pop().unwrap();
					let first = bucket.first_mut().unwrap();
					let mut merged_segments = last.segments;
					merged_segments.append(&mut first.segments.clone());
					first.segments = merged_segments;
					first.start_pos = last.start_pos;
				}
			}
		}

		buckets
	}

	/// Offsets every segment of the path outward/inward by `radius` (see
	/// [`Self::to_outline`] for the full construction); returns the offset
	/// segments paired with their absolute starts, without joins.
	fn offset_segments(&self, radius: f64) -> Vec<(BezierCtrl, Point)> {
		let starts = self.segment_starts();
		let mut out = Vec::with_capacity(self.segments.len());
		for (seg, &start) in self.segments.iter().zip(starts.iter()) {
			let (n0, p0) = seg.normals(0., radius, Some(start));
			let (n1, p1) = seg.normals(1., radius, Some(start));
			let offset_start = p0 + n0;
			let offset_end = p1 + n1;
			let scaled_p1 = seg.p1 * (1. + radius / seg.approximated_length(consts::DEFAULT_APPROXIMATION_SEGMENTS).max(1e-6));
			let scaled_p2 = seg.p2.map(|p2| p2 * (1. + radius / seg.approximated_length(consts::DEFAULT_APPROXIMATION_SEGMENTS).max(1e-6)));
			let offset_ctrl = BezierCtrl::new(scaled_p1, scaled_p2, offset_end - offset_start);
			out.push((offset_ctrl, offset_start));
		}
		out
	}

	/// Stroke-to-outline: offsets both sides of the path by `width/2` and
	/// joins them with `join` at interior vertices and `cap` at open ends.
	pub fn to_outline(&self, width: f64, join: Join, cap: Cap) -> Result<BezierPath> {
		if self.segments.is_empty() {
			return Err(KernelError::InvalidArgument("cannot stroke an empty path".into()));
		}
		let radius = width / 2.;

		let outer = self.offset_segments(radius);
		let inner_path_reversed = self.reverse();
		let inner = inner_path_reversed.offset_segments(radius);

		let mut result = build_joined_chain(&outer, join, radius);

		if self.closed {
			close_loop_with_join(&mut result, join, radius, outer[0].1);
			result.closed = true;

			let mut hole = build_joined_chain(&inner, join, radius);
			close_loop_with_join(&mut hole, join, radius, inner[0].1);
			hole.closed = true;
			// Outline with a hole is represented as outer followed by the
			// reversed inner boundary's segments (a single closed path with
			// winding-number semantics), matching `GroupShape`'s region model.
			result.segments.extend(hole.segments);
		} else {
			push_cap(&mut result, cap, radius);
			for &(ctrl, start) in &inner {
				push_joined_segment(&mut result, join, radius, ctrl, start);
			}
			push_cap(&mut result, cap, radius);
			result.closed = true;
		}

		if !result.closed {
			return Err(KernelError::TopologyViolation("to_outline failed to close the resulting path".into()));
		}
		Ok(result)
	}

	/// `separateFromPath`: scans every segment pair between `self` and
	/// `other`, cutting both at intersection parameters (snapping cuts within
	/// [`SEPARATE_OFFSET`] of an existing endpoint to that endpoint instead of
	/// introducing a new one), and returns the resulting sub-paths of each
	/// side in path order.
	fn separate_from_path(&self, other: &BezierPath) -> (Vec<BezierPath>, Vec<BezierPath>) {
		let mut self_cuts: Vec<Vec<f64>> = vec![Vec::new(); self.segments.len()];
		let mut other_cuts: Vec<Vec<f64>> = vec![Vec::new(); other.segments.len()];

		let self_starts = self.segment_starts();
		let other_starts = other.segment_starts();

		for (i, (a, &a_start)) in self.segments.iter().zip(self_starts.iter()).enumerate() {
			for (j, (b, &b_start)) in other.segments.iter().zip(other_starts.iter()).enumerate() {
				for (ta, tb) in intersection::intersections(a, a_start, b, b_start, consts::DEFAULT_PIXEL_TOLERANCE) {
					if ta > SEPARATE_OFFSET / a.approximated_length(12).max(1e-6) && ta < 1. - SEPARATE_OFFSET / a.approximated_length(12).max(1e-6) {
						self_cuts[i].push(ta);
					}
					if tb > SEPARATE_OFFSET / b.approximated_length(12).max(1e-6) && tb < 1. - SEPARATE_OFFSET / b.approximated_length(12).max(1e-6) {
						other_cuts[j].push(tb);
					}
				}
			}
		}

		(split_into_subpaths(self, &mut self_cuts), split_into_subpaths(other, &mut other_cuts))
	}

	/// Greedy end-to-end stitch of `pieces` into closed paths, within
	/// [`RECONNECT_OFFSET`] of a match; pieces may be reversed to line up.
	fn connect_paths(pieces: Vec<BezierPath>) -> Vec<BezierPath> {
		let mut remaining = pieces;
		let mut closed_paths = Vec::new();

		while let Some(mut current) = remaining.pop() {
			if current.end_pos().distance(current.start_pos) <= RECONNECT_OFFSET {
				current.closed = true;
				closed_paths.push(current);
				continue;
			}
			loop {
				let end = current.end_pos();
				let found = remaining.iter().position(|candidate| candidate.start_pos.distance(end) <= RECONNECT_OFFSET || candidate.end_pos().distance(end) <= RECONNECT_OFFSET);
				let Some(index) = found else { break };
				let mut next = remaining.remove(index);
				if next.start_pos.distance(end) > RECONNECT_OFFSET {
					next = next.reverse();
				}
				current.segments.extend(next.segments);
				if current.end_pos().distance(current.start_pos) <= RECONNECT_OFFSET {
					break;
				}
			}
			current.closed = current.end_pos().distance(current.start_pos) <= RECONNECT_OFFSET;
			closed_paths.push(current);
		}
		closed_paths
	}

	fn classify(sub_paths: &[BezierPath], other: &BezierPath, keep_inside: bool) -> Vec<BezierPath> {
		sub_paths
			.iter()
			.filter(|path| {
				let Some(mid_segment) = path.segments.first() else { return false };
				let sample = mid_segment.value_at(0.5, Some(path.start_pos));
				let inside = other.contains_pos(sample).unwrap_or(false);
				inside == keep_inside
			})
			.cloned()
			.collect()
	}

	/// Intersection (`A & B`): sub-paths of `A` inside `B` plus sub-paths of
	/// `B` inside `A`, stitched.
	pub fn intersect(&self, other: &BezierPath) -> Result<Vec<BezierPath>> {
		if !self.closed || !other.closed {
			return Err(KernelError::IllegalMutation("boolean operations require closed paths".into()));
		}
		let (a_parts, b_parts) = self.separate_from_path(other);
		let mut kept = Self::classify(&a_parts, other, true);
		kept.extend(Self::classify(&b_parts, self, true));
		Ok(Self::connect_paths(kept))
	}

	/// Union (`A | B`): sub-paths of both outside the other, stitched.
	pub fn union(&self, other: &BezierPath) -> Result<Vec<BezierPath>> {
		if self.segments.is_empty() {
			return Ok(vec![other.clone()]);
		}
		if other.segments.is_empty() {
			return Ok(vec![self.clone()]);
		}
		if !self.closed || !other.closed {
			return Err(KernelError::IllegalMutation("boolean operations require closed paths".into()));
		}
		let (a_parts, b_parts) = self.separate_from_path(other);
		let mut kept = Self::classify(&a_parts, other, false);
		kept.extend(Self::classify(&b_parts, self, false));
		Ok(Self::connect_paths(kept))
	}

	/// Difference (`A − B`): `A` outside `B` plus `B` inside `A`, stitched.
	pub fn difference(&self, other: &BezierPath) -> Result<Vec<BezierPath>> {
		if !self.closed || !other.closed {
			return Ok(vec![self.clone()]);
		}
		let (a_parts, b_parts) = self.separate_from_path(other);
		let mut kept = Self::classify(&a_parts, other, false);
		kept.extend(Self::classify(&b_parts, self, true));
		Ok(Self::connect_paths(kept))
	}

	/// Four straight segments, closed, with bounding box `(x,y)-(x+w,y+h)`.
	pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
		let mut path = BezierPath::start(Point::new(x, y));
		let _ = path.connect(Point::new(width, 0.), Point::ORIGIN, None, false);
		let _ = path.connect(Point::new(0., height), Point::ORIGIN, None, false);
		let _ = path.connect(Point::new(-width, 0.), Point::ORIGIN, None, false);
		let _ = path.close(consts::STRICT_MAX_ABSOLUTE_DIFFERENCE);
		path
	}

	/// Four cubic quadrants approximating a circle, closed.
	pub fn from_circle(center: Point, radius: f64) -> Self {
		let k = consts::SEMICIRCLE * radius;
		let mut path = BezierPath::start(center + Point::new(radius, 0.));
		let quadrant_ends = [Point::new(0., radius), Point::new(-radius, 0.), Point::new(0., -radius), Point::new(radius, 0.)];
		let controls = [(Point::new(0., k), Point::new(-k, radius)), (Point::new(-k, 0.), Point::new(-radius, k)), (Point::new(0., -k), Point::new(k, -radius)), (Point::new(k, 0.), Point::new(radius, -k))];
		let mut previous_end = Point::new(radius, 0.);
		for (end, (p1, p2)) in quadrant_ends.into_iter().zip(controls) {
			let delta = end - previous_end;
			let _ = path.connect(delta, p1 - previous_end, Some(p2 - previous_end), false);
			previous_end = end;
		}
		let _ = path.close(consts::STRICT_MAX_ABSOLUTE_DIFFERENCE);
		path
	}

	/// A single straight, open segment.
	pub fn from_line(p1: Point, p2: Point) -> Self {
		let mut path = BezierPath::start(p1);
		let _ = path.append(BezierCtrl::line(p2 - p1));
		path
	}

	/// Straight segments between consecutive points.
	pub fn from_polyline(points: &[Point], closed: bool) -> Result<Self> {
		let Some((&first, rest)) = points.split_first() else {
			return Err(KernelError::InvalidArgument("polyline requires at least one point".into()));
		};
		let mut path = BezierPath::start(first);
		let mut previous = first;
		for &point in rest {
			path.append(BezierCtrl::line(point - previous))?;
			previous = point;
		}
		if closed {
			path.close(consts::STRICT_MAX_ABSOLUTE_DIFFERENCE)?;
		}
		Ok(path)
	}
}

/// Signed angle from `tangent_out` to `tangent_in`, in `(-pi, pi]`: positive
/// when the turn is counter-clockwise (a convex corner on this offset side).
fn signed_turn(tangent_out: Point, tangent_in: Point) -> f64 {
	tangent_out.cross(tangent_in).atan2(tangent_out.dot_product(tangent_in))
}

/// The connecting segment for a convex corner: `Miter` bridges the gap with
/// a straight line, `Round` with an arc sized to the actual turn angle
/// (`arcMagicNumber(radian)`, not a fixed flatness constant).
fn build_join_ctrl(join: Join, radius: f64, tangent_out: Point, tangent_in: Point, gap: Point) -> BezierCtrl {
	match join {
		Join::Miter => BezierCtrl::line(gap),
		Join::Round => {
			let radian = signed_turn(tangent_out, tangent_in).abs();
			let handle = consts::arc_magic_number(radian) * radius;
			let p1 = tangent_out.normalization(handle).unwrap_or(Point::ORIGIN);
			let p2 = gap - tangent_in.normalization(handle).unwrap_or(Point::ORIGIN);
			BezierCtrl::new(p1, Some(p2), gap)
		}
	}
}

/// Appends `next_ctrl` (starting, before any join, at the absolute point
/// `next_start`) onto `path`, bridging or trimming the vertex between it and
/// `path`'s current last segment: a convex turn gets an actual join segment
/// sized to the real corner angle (`build_join_ctrl`); a concave turn instead
/// trims both segments back to their mutual intersection (`splitting`),
/// since the two offset curves overlap there rather than leaving a gap.
fn push_joined_segment(path: &mut BezierPath, join: Join, radius: f64, next_ctrl: BezierCtrl, next_start: Point) {
	let Some(prev_ctrl) = path.segments.last().copied() else {
		let _ = path.append(next_ctrl);
		return;
	};
	let prev_end = path.end_pos();
	let gap = next_start - prev_end;
	if gap.distance(Point::ORIGIN) < consts::STRICT_MAX_ABSOLUTE_DIFFERENCE {
		let _ = path.append(next_ctrl);
		return;
	}

	let tangent_out = prev_ctrl.tangent(1.);
	let tangent_in = next_ctrl.tangent(0.);
	let radian = signed_turn(tangent_out, tangent_in);

	if radian > consts::STRICT_MAX_ABSOLUTE_DIFFERENCE {
		let join_ctrl = build_join_ctrl(join, radius, tangent_out, tangent_in, gap);
		let _ = path.append(join_ctrl);
		let _ = path.append(next_ctrl);
		return;
	}

	let prev_start = prev_end - prev_ctrl.pos;
	let hits = intersection::intersections(&prev_ctrl, prev_start, &next_ctrl, next_start, consts::DEFAULT_PIXEL_TOLERANCE);
	let trimmed = hits.into_iter().find(|&(t_prev, t_next)| t_prev > 1e-3 && t_prev < 1. - 1e-3 && t_next > 1e-3 && t_next < 1. - 1e-3);

	if let Some((t_prev, t_next)) = trimmed {
		if let Some(last) = path.segments.last_mut() {
			*last = prev_ctrl.splitting(t_prev).0;
		}
		let _ = path.append(next_ctrl.splitting(t_next).1);
	} else {
		// No clean crossing near the vertex (near-collinear corner): fall
		// back to bridging the gap rather than leaving it unjoined.
		let _ = path.append(BezierCtrl::line(gap));
		let _ = path.append(next_ctrl);
	}
}

/// Builds a path from a sequence of offset segments (as returned by
/// [`BezierPath::offset_segments`]), joining each consecutive pair.
fn build_joined_chain(offsets: &[(BezierCtrl, Point)], join: Join, radius: f64) -> BezierPath {
	let (first_ctrl, first_start) = offsets[0];
	let mut path = BezierPath::start(first_start);
	let _ = path.append(first_ctrl);
	for &(ctrl, start) in &offsets[1..] {
		push_joined_segment(&mut path, join, radius, ctrl, start);
	}
	path
}

/// Closes a chain built by [`build_joined_chain`] back onto its own start
/// (`first_start`), applying the same join-or-trim logic as
/// [`push_joined_segment`] at the wrap-around vertex. A concave wrap trims
/// the first segment too, which can move `path.start_pos` forward to the
/// trim point.
fn close_loop_with_join(path: &mut BezierPath, join: Join, radius: f64, first_start: Point) {
	let gap = first_start - path.end_pos();
	if gap.distance(Point::ORIGIN) < consts::STRICT_MAX_ABSOLUTE_DIFFERENCE {
		return;
	}
	let (Some(prev_ctrl), Some(first_ctrl)) = (path.segments.last().copied(), path.segments.first().copied()) else {
		return;
	};

	let tangent_out = prev_ctrl.tangent(1.);
	let tangent_in = first_ctrl.tangent(0.);
	let radian = signed_turn(tangent_out, tangent_in);

	if radian > consts::STRICT_MAX_ABSOLUTE_DIFFERENCE {
		let join_ctrl = build_join_ctrl(join, radius, tangent_out, tangent_in, gap);
		let _ = path.append(join_ctrl);
		return;
	}

	let prev_start = path.end_pos() - prev_ctrl.pos;
	let hits = intersection::intersections(&prev_ctrl, prev_start, &first_ctrl, first_start, consts::DEFAULT_PIXEL_TOLERANCE);
	let trimmed = hits.into_iter().find(|&(t_prev, t_first)| t_prev > 1e-3 && t_prev < 1. - 1e-3 && t_first > 1e-3 && t_first < 1. - 1e-3);

	if let Some((t_prev, t_first)) = trimmed {
		if let Some(last) = path.segments.last_mut() {
			*last = prev_ctrl.splitting(t_prev).0;
		}
		let (discarded, kept) = first_ctrl.splitting(t_first);
		if let Some(first) = path.segments.first_mut() {
			*first = kept;
		}
		path.start_pos = first_start + discarded.pos;
	} else {
		let _ = path.append(BezierCtrl::line(gap));
	}
}

fn push_cap(path: &mut BezierPath, cap: Cap, radius: f64) {
	let Some(last) = path.segments.last().copied() else { return };
	let tangent_out = last.tangent(1.);
	let across = tangent_out.perpendicular() * (2. * radius);
	match cap {
		Cap::Butt => {
			let _ = path.append(BezierCtrl::line(across));
		}
		Cap::Round => {
			let semicircle_handle = consts::SEMICIRCLE * radius;
			let normal = tangent_out.perpendicular().normalization(1.).unwrap_or(Point::new(1., 0.));
			let half = across / 2.;
			let first_half = BezierCtrl::new(tangent_out.normalization(semicircle_handle).unwrap_or(Point::ORIGIN), Some(half + normal.perpendicular() * semicircle_handle), half);
			let second_half = BezierCtrl::new(normal.perpendicular() * -semicircle_handle, Some(-tangent_out.normalization(semicircle_handle).unwrap_or(Point::ORIGIN)), half);
			let _ = path.append(first_half);
			let _ = path.append(second_half);
		}
	}
}

fn split_into_subpaths(path: &BezierPath, cuts: &mut [Vec<f64>]) -> Vec<BezierPath> {
	let mut sub_paths = Vec::new();
	let mut current = BezierPath::start(path.start_pos);
	for (seg, params) in path.segments.iter().zip(cuts.iter_mut()) {
		if params.is_empty() {
			let _ = current.append(*seg);
			continue;
		}
		params.sort_by(|a, b| a.partial_cmp(b).unwrap());
		*params = utils::dedupe_sorted_params(std::mem::take(params), consts::MAX_ABSOLUTE_DIFFERENCE);
		let pieces = seg.splittings(params);
		for piece in pieces {
			let _ = current.append(piece);
			sub_paths.push(current.clone());
			current = BezierPath::start(current.end_pos());
		}
	}
	if !current.is_empty() {
		sub_paths.push(current);
	}
	sub_paths
}

#[cfg(test)]
mod tests {
	use super::*;

	fn square() -> BezierPath {
		BezierPath::from_rect(0., 0., 100., 100.)
	}

	#[test]
	fn from_rect_matches_bbox_and_area() {
		let rect = square();
		let bbox = rect.bounding_box();
		assert!((bbox.width() - 100.).abs() < 1e-6);
		assert!((bbox.height() - 100.).abs() < 1e-6);
		assert!((bbox.area() - 10000.).abs() < 1e-3);
		assert!(rect.is_closed());
	}

	#[test]
	fn contains_pos_center_is_true() {
		let rect = square();
		assert!(rect.contains_pos(Point::new(50., 50.)).unwrap());
		assert!(!rect.contains_pos(Point::new(150., 50.)).unwrap());
	}

	#[test]
	fn reverse_preserves_endpoints() {
		let rect = square();
		let reversed = rect.reverse();
		assert!(reversed.start_pos.distance(rect.end_pos()) < 1e-9);
		assert!(reversed.end_pos().distance(rect.start_pos) < 1e-9);
	}

	#[test]
	fn rotations_of_ccw_rect_is_positive() {
		let rect = square();
		assert_eq!(rect.rotations(), 1);
	}

	#[test]
	fn from_polyline_open_by_default() {
		let points = [Point::new(0., 0.), Point::new(10., 0.), Point::new(10., 10.)];
		let path = BezierPath::from_polyline(&points, false).unwrap();
		assert!(!path.is_closed());
		assert_eq!(path.segments().len(), 2);
	}

	#[test]
	fn close_rejects_a_path_with_no_segments() {
		let mut empty = BezierPath::start(Point::ORIGIN);
		assert!(empty.close(1.0).is_err());
	}

	#[test]
	fn union_of_disjoint_squares_returns_both() {
		let a = BezierPath::from_rect(0., 0., 10., 10.);
		let b = BezierPath::from_rect(100., 100., 10., 10.);
		let result = a.union(&b).unwrap();
		assert_eq!(result.len(), 2);
	}

	#[test]
	fn intersect_of_disjoint_squares_is_empty() {
		let a = BezierPath::from_rect(0., 0., 10., 10.);
		let b = BezierPath::from_rect(100., 100., 10., 10.);
		let result = a.intersect(&b).unwrap();
		assert!(result.is_empty());
	}

	fn polygon_area(path: &BezierPath) -> f64 {
		let starts = path.segment_starts();
		let sum: f64 = path.segments().iter().zip(starts.iter()).map(|(seg, &start)| {
			let end = start + seg.pos;
			start.x * end.y - end.x * start.y
		}).sum();
		sum.abs() / 2.
	}

	#[test]
	fn circle_offset_segments_land_at_the_expected_radius() {
		let circle = BezierPath::from_circle(Point::ORIGIN, 100.);
		let radius = 10.;
		for (_, start) in circle.offset_segments(radius) {
			assert!((start.distance(Point::ORIGIN) - 110.).abs() < 1e-6);
		}
		for (_, start) in circle.reverse().offset_segments(radius) {
			assert!((start.distance(Point::ORIGIN) - 90.).abs() < 1e-6);
		}
	}

	#[test]
	fn stroking_a_circle_produces_closed_concentric_outline() {
		// Canonical scenario: a unit circle (radius 100) stroked with width 20
		// should bound two concentric circles of radius 110 and 90.
		let circle = BezierPath::from_circle(Point::ORIGIN, 100.);
		let outline = circle.to_outline(20., Join::Round, Cap::Butt).unwrap();
		assert!(outline.is_closed());
		let bbox = outline.bounding_box();
		assert!((bbox.width() - 220.).abs() < 1.0);
		assert!((bbox.height() - 220.).abs() < 1.0);
		assert!(bbox.center().distance(Point::ORIGIN) < 1.0);
	}

	#[test]
	fn stroking_a_closed_square_joins_real_corners_and_closes() {
		let rect = square();
		let outline = rect.to_outline(20., Join::Miter, Cap::Butt).unwrap();
		assert!(outline.is_closed());
		assert!(outline.segments().len() > rect.segments().len());
		let bbox = outline.bounding_box();
		assert!((bbox.width() - 120.).abs() < 1e-3);
		assert!((bbox.height() - 120.).abs() < 1e-3);
		assert!(bbox.center().distance(Point::new(50., 50.)) < 1e-3);
	}

	#[test]
	fn stroking_an_open_bent_line_closes_with_a_real_corner_join() {
		let line = BezierPath::from_polyline(&[Point::new(0., 0.), Point::new(100., 0.), Point::new(100., 100.)], false).unwrap();
		let outline = line.to_outline(20., Join::Round, Cap::Round).unwrap();
		assert!(outline.is_closed());
		let bbox = outline.bounding_box();
		// The stroked bend covers at least the original line's extent widened
		// by the stroke radius on every side that isn't an inside corner.
		assert!(bbox.width() >= 100.);
		assert!(bbox.height() >= 100.);
		assert!(bbox.width() <= 130.);
		assert!(bbox.height() <= 130.);
	}

	#[test]
	fn union_of_overlapping_rects_matches_canonical_scenario() {
		let a = BezierPath::from_rect(0., 0., 100., 100.);
		let b = BezierPath::from_rect(50., 50., 100., 100.);
		let result = a.union(&b).unwrap();
		assert_eq!(result.len(), 1);
		assert_eq!(result[0].segments().len(), 8);
		let bbox = result[0].bounding_box();
		assert!((bbox.width() - 150.).abs() < 1e-3);
		assert!((bbox.height() - 150.).abs() < 1e-3);
		assert!(bbox.center().distance(Point::new(75., 75.)) < 1e-3);
	}

	#[test]
	fn difference_of_overlapping_rects_matches_canonical_scenario() {
		let a = BezierPath::from_rect(0., 0., 100., 100.);
		let b = BezierPath::from_rect(50., 50., 100., 100.);
		let result = a.difference(&b).unwrap();
		assert_eq!(result.len(), 1);
		assert_eq!(result[0].segments().len(), 6);
		assert!((polygon_area(&result[0]) - 7500.).abs() < 1e-3);
	}
}
