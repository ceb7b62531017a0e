//! `GroupShape`: a forest of closed paths where each node's children are its
//! holes, their children nested solids inside those holes, and so on.

use crate::bezier_path::BezierPath;
use crate::bezier_shape::BezierShape;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One region of a [`GroupShape`]: a closed boundary plus its holes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroupNode {
	path: BezierPath,
	children: Vec<GroupNode>,
}

impl GroupNode {
	pub fn path(&self) -> &BezierPath {
		&self.path
	}

	pub fn children(&self) -> &[GroupNode] {
		&self.children
	}

	fn sample(&self) -> crate::point::Point {
		// `BezierPath::close` refuses to close a path with no segments, so
		// every closed path reaching `GroupShape` has at least one.
		let first = self.path.segments().first().expect("BezierPath::close rejects zero-segment paths");
		first.value_at(0.5, Some(self.path.start_pos))
	}
}

/// A forest of [`GroupNode`]s built from the closed paths of a [`BezierShape`],
/// capturing which regions are holes of which.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroupShape {
	roots: Vec<GroupNode>,
}

impl GroupShape {
	pub fn new() -> Self {
		GroupShape { roots: Vec::new() }
	}

	pub fn roots(&self) -> &[GroupNode] {
		&self.roots
	}

	/// Builds the forest by inserting each closed path of `shape`, one at a
	/// time, then fixing up winding direction so that it alternates with
	/// depth (roots wind clockwise, their holes counter-clockwise, and so on).
	pub fn from_shape(shape: &BezierShape) -> Self {
		let mut roots: Vec<GroupNode> = Vec::new();
		for path in shape.iter() {
			if path.is_closed() {
				let node = GroupNode { path: path.clone(), children: Vec::new() };
				roots = insert_node(node, roots);
			}
		}
		alternate_direction(-1, &mut roots);
		GroupShape { roots }
	}

	/// Flattens the forest back into a plain list of paths, depth-first.
	pub fn to_shape(&self) -> BezierShape {
		let mut shape = BezierShape::new();
		for node in &self.roots {
			flatten_into(node, &mut shape);
		}
		shape
	}

	/// Merges `self` with `other`, attempting to fuse each top-level region
	/// of `self` into the regions of `other` wherever their outer boundaries
	/// touch, recombining holes per [`attempt_merge`]; unmerged regions from
	/// both inputs survive as independent top-level nodes.
	pub fn union(&self, other: &GroupShape) -> GroupShape {
		if self.roots.is_empty() {
			return other.clone();
		}
		if other.roots.is_empty() {
			return self.clone();
		}

		let mut merged_pool: Vec<GroupNode> = other.roots.clone();
		let mut unmerged: Vec<GroupNode> = Vec::new();

		for node in &self.roots {
			let mut current = node.clone();
			let mut merged_at_least_once = false;
			let mut i = 0;
			while i < merged_pool.len() {
				if let Some(merged) = attempt_merge(&current, &merged_pool[i]) {
					current = merged;
					merged_pool.remove(i);
					merged_at_least_once = true;
					i = 0;
				} else {
					i += 1;
				}
			}
			if merged_at_least_once {
				merged_pool.push(current);
			} else {
				unmerged.push(current);
			}
		}

		merged_pool.extend(unmerged);
		GroupShape { roots: merged_pool }
	}
}

fn flatten_into(node: &GroupNode, out: &mut BezierShape) {
	out.add(node.path.clone());
	for child in &node.children {
		flatten_into(child, out);
	}
}

/// Inserts `new_node` into `existing`: recurse into the first node whose
/// region already contains a sample point of `new_node`, else adopt any
/// existing nodes that `new_node` itself contains, else append as a new root.
fn insert_node(new_node: GroupNode, mut existing: Vec<GroupNode>) -> Vec<GroupNode> {
	let sample = new_node.sample();
	for i in 0..existing.len() {
		if existing[i].path.contains_pos(sample).unwrap_or(false) {
			let parent = existing.remove(i);
			let children = insert_node(new_node, parent.children);
			existing.insert(i, GroupNode { path: parent.path, children });
			return existing;
		}
	}

	let mut adopted = Vec::new();
	let mut remaining = Vec::new();
	for node in existing {
		if new_node.path.contains_pos(node.sample()).unwrap_or(false) {
			adopted.push(node);
		} else {
			remaining.push(node);
		}
	}

	let mut new_node = new_node;
	new_node.children.extend(adopted);
	remaining.push(new_node);
	remaining
}

fn alternate_direction(winding: i32, nodes: &mut [GroupNode]) {
	for node in nodes.iter_mut() {
		let r = node.path.rotations();
		if r != winding && r != 0 {
			node.path = node.path.reverse();
		}
		alternate_direction(-winding, &mut node.children);
	}
}

/// Attempts to fuse two regions: if their outer boundaries' path-level union
/// is a single closed path (verified by re-grouping the union result and
/// requiring exactly one top-level node), returns the merged node with its
/// hole list rebuilt from: the holes the union itself introduced, each
/// original hole cut by the other region's outer boundary, and the mutual
/// intersection of both regions' original holes (nested one level deeper).
/// Returns `None` when the two boundaries don't touch.
fn attempt_merge(a: &GroupNode, b: &GroupNode) -> Option<GroupNode> {
	let union_paths = a.path.union(&b.path).ok()?;
	if union_paths.len() != 1 {
		return None;
	}
	let merged_path = union_paths.into_iter().next().unwrap();

	let mut scratch = BezierShape::new();
	scratch.add(merged_path.clone());
	let scratch_group = GroupShape::from_shape(&scratch);
	if scratch_group.roots.len() != 1 {
		return None;
	}
	let mut children = scratch_group.roots.into_iter().next().unwrap().children;

	distribute_cut_holes(&a.children, &b.path, &mut children);
	distribute_cut_holes(&b.children, &a.path, &mut children);

	for w1 in &a.children {
		for w2 in &b.children {
			if let Ok(pieces) = w1.path.intersect(&w2.path) {
				for piece in pieces {
					append_nested_hole(&mut children, GroupNode { path: piece, children: Vec::new() });
				}
			}
		}
	}

	Some(GroupNode { path: merged_path, children })
}

/// For each of `holes`, subtracts `cutter` and folds the remaining pieces
/// into `children`: a counter-clockwise (`+1`) piece becomes a new top-level
/// hole, anything else nests one level deeper under the hole just added.
fn distribute_cut_holes(holes: &[GroupNode], cutter: &BezierPath, children: &mut Vec<GroupNode>) {
	for hole in holes {
		if let Ok(pieces) = hole.path.difference(cutter) {
			for piece in pieces {
				append_nested_hole(children, GroupNode { path: piece, children: hole.children.clone() });
			}
		}
	}
}

fn append_nested_hole(children: &mut Vec<GroupNode>, node: GroupNode) {
	if node.path.rotations() == 1 || children.is_empty() {
		children.push(node);
	} else {
		let last = children.last_mut().unwrap();
		last.children.push(node);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::point::Point;

	#[test]
	fn single_rect_becomes_one_root_with_no_holes() {
		let mut shape = BezierShape::new();
		shape.add(BezierPath::from_rect(0., 0., 10., 10.));
		let group = GroupShape::from_shape(&shape);
		assert_eq!(group.roots().len(), 1);
		assert!(group.roots()[0].children().is_empty());
	}

	#[test]
	fn nested_rect_becomes_a_hole() {
		let mut shape = BezierShape::new();
		shape.add(BezierPath::from_rect(0., 0., 100., 100.));
		shape.add(BezierPath::from_rect(25., 25., 10., 10.));
		let group = GroupShape::from_shape(&shape);
		assert_eq!(group.roots().len(), 1);
		assert_eq!(group.roots()[0].children().len(), 1);
	}

	#[test]
	fn to_shape_round_trips_path_count() {
		let mut shape = BezierShape::new();
		shape.add(BezierPath::from_rect(0., 0., 100., 100.));
		shape.add(BezierPath::from_rect(25., 25., 10., 10.));
		let group = GroupShape::from_shape(&shape);
		let flattened = group.to_shape();
		assert_eq!(flattened.len(), 2);
	}

	#[test]
	fn union_of_disjoint_groups_keeps_both_roots() {
		let mut shape_a = BezierShape::new();
		shape_a.add(BezierPath::from_rect(0., 0., 10., 10.));
		let mut shape_b = BezierShape::new();
		shape_b.add(BezierPath::from_rect(100., 100., 10., 10.));
		let a = GroupShape::from_shape(&shape_a);
		let b = GroupShape::from_shape(&shape_b);
		let unioned = a.union(&b);
		assert_eq!(unioned.roots().len(), 2);
	}

	#[test]
	fn union_of_overlapping_squares_merges_to_one_root() {
		let mut shape_a = BezierShape::new();
		shape_a.add(BezierPath::from_rect(0., 0., 20., 20.));
		let mut shape_b = BezierShape::new();
		shape_b.add(BezierPath::from_rect(10., 10., 20., 20.));
		let a = GroupShape::from_shape(&shape_a);
		let b = GroupShape::from_shape(&shape_b);
		let unioned = a.union(&b);
		assert_eq!(unioned.roots().len(), 1);
		let bbox = unioned.roots()[0].path().bounding_box();
		assert!((bbox.width() - 30.).abs() < 1.0);
		assert!(bbox.center().distance(Point::new(15., 15.)) < 2.0);
	}
}
