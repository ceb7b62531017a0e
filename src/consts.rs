// Implementation constants

/// Constant used to determine if `f64`s are equivalent.
pub const MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-3;
/// A stricter constant used to determine if `f64`s are equivalent.
pub const STRICT_MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-6;

/// Default pixel tolerance used by intersection routines; per-curve parameter
/// tolerances are derived from this as `pixel_tolerance / approximated_length`.
pub const DEFAULT_PIXEL_TOLERANCE: f64 = 1.0;
/// Radian threshold below which a subcurve is treated as flat enough for the
/// recursive-subdivision intersection fallback to stop recursing.
pub const SUBDIVISION_FLATNESS_RADIANS: f64 = std::f64::consts::PI / 90.0;

/// Offset used by `separate_from_path` when deciding whether an intersection
/// falls close enough to an existing segment endpoint to be classified to
/// that segment rather than producing a new split.
///
/// Deliberately distinct from [`RECONNECT_OFFSET`]; the two are not unified.
pub const SEPARATE_OFFSET: f64 = 0.5;
/// Offset used by the greedy end-to-end stitching pass that reconnects kept
/// sub-paths after a boolean operation.
pub const RECONNECT_OFFSET: f64 = 2.0;

/// Maximum number of binary-search iterations performed by `in_distance`.
pub const IN_DISTANCE_ITERATION_LIMIT: u32 = 50;
/// Maximum recursion depth for `intersection::subdivide`'s bbox-halving
/// search; each level halves both curves, so this bounds the search to
/// `2^depth` leaf pairs per branch even when bounding boxes never shrink
/// below `error` (near-tangent or overlapping curves).
pub const MAX_SUBDIVISION_DEPTH: u32 = 32;
/// Maximum number of small rotation attempts `contains_pos` makes while
/// looking for a ray direction unambiguous with respect to the path's
/// vertices, before giving up with a topology error.
pub const CONTAINS_POS_ROTATION_LIMIT: u32 = 180;
/// Angular step used between successive `contains_pos` rotation attempts.
pub const CONTAINS_POS_ROTATION_STEP: f64 = std::f64::consts::PI / 90.0;

/// Default `t` value used for the `*_through_points` constructors.
pub const DEFAULT_T_VALUE: f64 = 0.5;
/// Default number of samples used by `approximated_length`'s polyline pass.
pub const DEFAULT_APPROXIMATION_SEGMENTS: u32 = 12;

/// The magic number giving the control-handle length that best approximates
/// a quarter circle with a single cubic Bézier segment: `(4/3)*tan(pi/8)`.
pub const SEMICIRCLE: f64 = (4.0 / 3.0) * 0.4142135623730951; // (4/3) * tan(pi/8)

/// Control-handle length approximating a circular arc of angle `radian`.
pub fn arc_magic_number(radian: f64) -> f64 {
	(4.0 / 3.0) * (radian / 4.0).tan()
}

// SVG path-data serialiser constants (used by `BezierShape::to_path_data`)
pub const SVG_ARG_CUBIC: &str = "C";
pub const SVG_ARG_CUBIC_RELATIVE: &str = "c";
pub const SVG_ARG_LINEAR: &str = "l";
pub const SVG_ARG_HORIZONTAL: &str = "h";
pub const SVG_ARG_VERTICAL: &str = "v";
pub const SVG_ARG_MOVE: &str = "M";
pub const SVG_ARG_CLOSED: &str = "z";
