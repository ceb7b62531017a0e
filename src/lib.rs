//! A planar cubic-Bezier geometry kernel: curve algebra, intersection,
//! stroking and boolean path combination.
//!
//! The core types form a small hierarchy: a [`Point`] is a 2D vector, a
//! [`BezierCtrl`] is one cubic segment stored relative to an implicit local
//! origin, a [`BezierPath`] chains segments into an open or closed contour
//! with one absolute `start_pos`, a [`BezierShape`] lists independent paths,
//! and a [`GroupShape`] arranges a shape's closed paths into a hole-aware
//! forest. Every type is pure data with value semantics; the kernel performs
//! no I/O and holds no mutable global state (see the crate's design notes
//! for the full concurrency model).

mod bezier_ctrl;
mod bezier_path;
mod bezier_shape;
mod consts;
mod error;
mod group_shape;
mod intersection;
mod point;
mod rect;
mod utils;

pub use bezier_ctrl::{BezierCtrl, CasteljauPoints};
pub use bezier_path::{BezierPath, Cap, Join};
pub use bezier_shape::BezierShape;
pub use error::{KernelError, Result};
pub use group_shape::{GroupNode, GroupShape};
pub use point::Point;
pub use rect::Rect;

pub use intersection::{intersections, line_intersections};

#[cfg(test)]
mod tests {
	use super::*;

	fn assert_send_sync<T: Send + Sync>() {}

	#[test]
	fn core_types_are_send_and_sync() {
		assert_send_sync::<Point>();
		assert_send_sync::<Rect>();
		assert_send_sync::<BezierCtrl>();
		assert_send_sync::<BezierPath>();
		assert_send_sync::<BezierShape>();
		assert_send_sync::<GroupShape>();
		assert_send_sync::<KernelError>();
	}

	#[test]
	fn rect_round_trips_through_shape_and_group() {
		let mut shape = BezierShape::new();
		shape.add(BezierPath::from_rect(0., 0., 40., 20.));
		let group = GroupShape::from_shape(&shape);
		let flattened = group.to_shape();
		assert_eq!(flattened.len(), 1);
		let bbox = flattened[0].bounding_box();
		assert!((bbox.area() - 800.).abs() < 1e-3);
	}
}
