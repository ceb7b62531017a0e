//! Scalar and low-level vector utilities shared by the rest of the kernel:
//! polynomial root finders, the two-point line equation, and line-line
//! intersection with its parallel-line fallback.

use crate::consts::{MAX_ABSOLUTE_DIFFERENCE, STRICT_MAX_ABSOLUTE_DIFFERENCE};

use glam::{BVec2, DMat2, DVec2};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Compute `a`, `b`, and `c` for a cubic curve that fits the start, end and
/// point on curve at `t`, used by the "ABC" cubic-through-points construction.
/// See [the projection identity section](https://pomax.github.io/bezierinfo/#abc) of Pomax's bezier curve primer.
pub fn compute_abc_for_cubic_through_points(start_point: DVec2, point_on_curve: DVec2, end_point: DVec2, t: f64) -> [DVec2; 3] {
	let t_cubed = t * t * t;
	let one_minus_t = 1. - t;
	let cubed_one_minus_t = one_minus_t * one_minus_t * one_minus_t;

	let point_c_ratio = cubed_one_minus_t / (t_cubed + cubed_one_minus_t);
	let c = point_c_ratio * start_point + (1. - point_c_ratio) * end_point;
	let ab_bc_ratio = (t_cubed + cubed_one_minus_t - 1.).abs() / (t_cubed + cubed_one_minus_t);
	let a = point_on_curve + (point_on_curve - c) / ab_bc_ratio;
	[a, point_on_curve, c]
}

/// Find the roots of the linear equation `ax + b`.
pub fn solve_linear(a: f64, b: f64) -> Vec<f64> {
	let mut roots = Vec::new();
	if a.abs() > MAX_ABSOLUTE_DIFFERENCE {
		roots.push(-b / a);
	}
	roots
}

/// Find the roots of the quadratic equation `ax^2 + bx + c`.
/// Precompute the `discriminant` (`b^2 - 4ac`) and `two_times_a` arguments prior to calling this function for efficiency purposes.
pub fn solve_quadratic(discriminant: f64, two_times_a: f64, b: f64, c: f64) -> Vec<f64> {
	let mut roots = Vec::new();
	if two_times_a != 0. {
		if discriminant > 0. {
			let root_discriminant = discriminant.sqrt();
			roots.push((-b + root_discriminant) / (two_times_a));
			roots.push((-b - root_discriminant) / (two_times_a));
		} else if discriminant == 0. {
			roots.push(-b / (two_times_a));
		}
	} else {
		roots = solve_linear(b, c);
	}
	roots
}

/// Compute the cube root of a number, preserving sign for negative inputs.
fn cube_root(f: f64) -> f64 {
	if f < 0. {
		-(-f).powf(1. / 3.)
	} else {
		f.powf(1. / 3.)
	}
}

/// Solve a cubic of the form `x^3 + px + q`, derivation from: <https://trans4mind.com/personal_development/mathematics/polynomials/cubicAlgebra.htm>.
pub fn solve_reformatted_cubic(discriminant: f64, a: f64, p: f64, q: f64) -> Vec<f64> {
	let mut roots = Vec::new();
	if p.abs() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
		roots.push(cube_root(-q));
	} else if q.abs() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
		if p < 0. {
			roots.push((-p).powf(1. / 2.));
		}
	} else if discriminant.abs() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
		let q_divided_by_2 = q / 2.;
		let a_divided_by_3 = a / 3.;

		roots.push(2. * cube_root(-q_divided_by_2) - a_divided_by_3);
		roots.push(cube_root(q_divided_by_2) - a_divided_by_3);
	} else if discriminant > 0. {
		let q_divided_by_2 = q / 2.;
		let square_root_discriminant = discriminant.powf(1. / 2.);

		roots.push(cube_root(-q_divided_by_2 + square_root_discriminant) - cube_root(q_divided_by_2 + square_root_discriminant) - a / 3.);
	} else {
		let p_divided_by_3 = p / 3.;
		let a_divided_by_3 = a / 3.;
		let cube_root_r = (-p_divided_by_3).powf(1. / 2.);
		let phi = (-q / (2. * cube_root_r.powi(3))).acos();

		let two_times_cube_root_r = 2. * cube_root_r;
		roots.push(two_times_cube_root_r * (phi / 3.).cos() - a_divided_by_3);
		roots.push(two_times_cube_root_r * ((phi + 2. * PI) / 3.).cos() - a_divided_by_3);
		roots.push(two_times_cube_root_r * ((phi + 4. * PI) / 3.).cos() - a_divided_by_3);
	}
	roots
}

/// Solve a cubic of the form `ax^3 + bx^2 + cx + d`.
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Vec<f64> {
	if a.abs() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
		if b.abs() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
			solve_linear(c, d)
		} else {
			let discriminant = c * c - 4. * b * d;
			solve_quadratic(discriminant, 2. * b, c, d)
		}
	} else {
		let new_a = b / a;
		let new_b = c / a;
		let new_c = d / a;

		let p = (3. * new_b - new_a * new_a) / 3.;
		let q = (2. * new_a.powi(3) - 9. * new_a * new_b + 27. * new_c) / 27.;
		let discriminant = (p / 3.).powi(3) + (q / 2.).powi(2);
		solve_reformatted_cubic(discriminant, new_a, p, q)
	}
}

/// Find the real roots of an arbitrary-degree polynomial given its
/// coefficients from the highest power to the constant term
/// (`coefficients[0] * x^n + ... + coefficients[n]`).
///
/// Degree 0-3 dispatch to the closed-form solvers above. Higher degrees are
/// solved by the Durand-Kerner simultaneous-iteration method, since no closed
/// form exists above degree 4. A root is kept when its iterate's imaginary
/// part is within `tol`.
pub fn polynomial_roots(coefficients: &[f64], tol: f64) -> Vec<f64> {
	// Strip leading (near-)zero coefficients to find the true degree.
	let mut coeffs = coefficients;
	while coeffs.len() > 1 && coeffs[0].abs() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
		coeffs = &coeffs[1..];
	}
	let degree = coeffs.len().saturating_sub(1);

	match degree {
		0 => Vec::new(),
		1 => solve_linear(coeffs[0], coeffs[1]),
		2 => solve_quadratic(coeffs[1] * coeffs[1] - 4. * coeffs[0] * coeffs[2], 2. * coeffs[0], coeffs[1], coeffs[2]),
		3 => solve_cubic(coeffs[0], coeffs[1], coeffs[2], coeffs[3]),
		_ => durand_kerner(coeffs, tol),
	}
}

/// Durand-Kerner (Weierstrass) simultaneous root iteration for a monic-normalised
/// real polynomial of arbitrary degree, returning roots whose imaginary part
/// converges to within `tol` of zero.
fn durand_kerner(coefficients: &[f64], tol: f64) -> Vec<f64> {
	let degree = coefficients.len() - 1;
	let leading = coefficients[0];
	if leading.abs() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
		return Vec::new();
	}
	let normalized: Vec<f64> = coefficients.iter().map(|c| c / leading).collect();

	let eval = |z: Complex64| -> Complex64 {
		let mut acc = Complex64::new(0., 0.);
		for &c in &normalized {
			acc = acc * z + Complex64::new(c, 0.);
		}
		acc
	};

	// Initial guesses spread on a circle, the standard Durand-Kerner seed.
	let seed = Complex64::new(0.4, 0.9);
	let mut roots: Vec<Complex64> = (0..degree).map(|i| seed.powu(i as u32)).collect();

	const MAX_ITERATIONS: u32 = 200;
	let mut converged_at = None;
	for iteration in 0..MAX_ITERATIONS {
		let previous = roots.clone();
		for i in 0..degree {
			let mut denom = Complex64::new(1., 0.);
			for (j, &rj) in previous.iter().enumerate() {
				if i != j {
					denom *= roots[i] - rj;
				}
			}
			if denom.norm() > STRICT_MAX_ABSOLUTE_DIFFERENCE {
				roots[i] -= eval(roots[i]) / denom;
			}
		}
		let max_delta = roots.iter().zip(previous.iter()).map(|(a, b)| (*a - *b).norm()).fold(0., f64::max);
		if max_delta < tol {
			converged_at = Some(iteration);
			break;
		}
	}

	#[cfg(feature = "logging")]
	match converged_at {
		Some(iteration) => log::debug!("durand_kerner converged after {iteration} iterations for a degree-{degree} polynomial"),
		None => log::warn!("durand_kerner did not converge within {MAX_ITERATIONS} iterations for a degree-{degree} polynomial; roots may be inaccurate"),
	}
	#[cfg(not(feature = "logging"))]
	let _ = converged_at;

	let mut real_roots: Vec<f64> = roots.into_iter().filter(|r| r.im.abs() <= tol.max(STRICT_MAX_ABSOLUTE_DIFFERENCE)).map(|r| r.re).collect();
	real_roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
	real_roots.dedup_by(|a, b| (*a - *b).abs() < tol);
	real_roots
}

/// The line equation `(A, B, C)` through two points `p` and `q`, satisfying
/// `A*x + B*y + C = 0` for every point `(x, y)` on the line. Returns `None`
/// when `p` and `q` coincide.
pub fn line_equation(p: DVec2, q: DVec2) -> Option<(f64, f64, f64)> {
	if p.abs_diff_eq(q, STRICT_MAX_ABSOLUTE_DIFFERENCE) {
		return None;
	}
	let a = q.y - p.y;
	let b = p.x - q.x;
	let c = -(p.x * a + p.y * b);
	Some((a, b, c))
}

/// The result of intersecting two infinite lines: either a point, or, when
/// the lines are numerically parallel, the perpendicular distance from `p3`
/// to the line through `p1p2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineLineIntersection {
	Point(DVec2),
	ParallelDistance(f64),
}

/// Intersect line `(p1, p2)` with line `(p3, p4)`, using the tolerance
/// predicate `|A1*B2 - A2*B1| > tol*|B1*B2|` to detect (numerical)
/// parallelism.
pub fn line_line_intersection(p1: DVec2, p2: DVec2, p3: DVec2, p4: DVec2, tol: f64) -> Option<LineLineIntersection> {
	let (a1, b1, c1) = line_equation(p1, p2)?;
	let (a2, b2, c2) = line_equation(p3, p4)?;

	let denom = a1 * b2 - a2 * b1;
	if denom.abs() > tol * (b1 * b2).abs() {
		let x = (b1 * c2 - b2 * c1) / denom;
		let y = (a2 * c1 - a1 * c2) / denom;
		Some(LineLineIntersection::Point(DVec2::new(x, y)))
	} else {
		// Parallel (or nearly so): perpendicular distance from p3 to line p1p2.
		let norm = (a1 * a1 + b1 * b1).sqrt();
		if norm <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
			None
		} else {
			Some(LineLineIntersection::ParallelDistance((a1 * p3.x + b1 * p3.y + c1).abs() / norm))
		}
	}
}

/// Returns the intersection point of two lines given in point-and-slope-vector
/// form, panicking the way the teacher's `line_intersection` helper does when
/// the two slopes are identical. Used internally where the caller has already
/// established the lines are not parallel (e.g. join construction).
pub fn line_intersection(point1: DVec2, point1_slope_vector: DVec2, point2: DVec2, point2_slope_vector: DVec2) -> DVec2 {
	if f64_compare(point1_slope_vector.x, 0., MAX_ABSOLUTE_DIFFERENCE) {
		let m2 = point2_slope_vector.y / point2_slope_vector.x;
		let b2 = point2.y - m2 * point2.x;
		DVec2::new(point1.x, point1.x * m2 + b2)
	} else if f64_compare(point2_slope_vector.x, 0., MAX_ABSOLUTE_DIFFERENCE) {
		let m1 = point1_slope_vector.y / point1_slope_vector.x;
		let b1 = point1.y - m1 * point1.x;
		DVec2::new(point2.x, point2.x * m1 + b1)
	} else {
		let m1 = point1_slope_vector.y / point1_slope_vector.x;
		let b1 = point1.y - m1 * point1.x;
		let m2 = point2_slope_vector.y / point2_slope_vector.x;
		let b2 = point2.y - m2 * point2.x;
		let intersection_x = (b2 - b1) / (m1 - m2);
		DVec2::new(intersection_x, intersection_x * m1 + b1)
	}
}

/// Determine if two axis-aligned rectangles, given as `[left_bottom, right_top]`, overlap.
pub fn do_rectangles_overlap(rectangle1: [DVec2; 2], rectangle2: [DVec2; 2]) -> bool {
	let [bottom_left1, top_right1] = rectangle1;
	let [bottom_left2, top_right2] = rectangle2;

	top_right1.x >= bottom_left2.x && top_right2.x >= bottom_left1.x && top_right2.y >= bottom_left1.y && top_right1.y >= bottom_left2.y
}

/// Check if 3 points are collinear.
pub fn are_points_collinear(p1: DVec2, p2: DVec2, p3: DVec2) -> bool {
	let matrix = DMat2::from_cols(p1 - p2, p2 - p3);
	f64_compare(matrix.determinant() / 2., 0., MAX_ABSOLUTE_DIFFERENCE)
}

/// Compute the center of the circle that passes through all three provided points. The provided points cannot be collinear.
pub fn compute_circle_center_from_points(p1: DVec2, p2: DVec2, p3: DVec2) -> Option<DVec2> {
	if are_points_collinear(p1, p2, p3) {
		return None;
	}

	let midpoint_a = p1.lerp(p2, 0.5);
	let midpoint_b = p2.lerp(p3, 0.5);
	let midpoint_c = p3.lerp(p1, 0.5);

	let tangent_a = (p1 - p2).perp();
	let tangent_b = (p2 - p3).perp();
	let tangent_c = (p3 - p1).perp();

	let intersect_a_b = line_intersection(midpoint_a, tangent_a, midpoint_b, tangent_b);
	let intersect_b_c = line_intersection(midpoint_b, tangent_b, midpoint_c, tangent_c);
	let intersect_c_a = line_intersection(midpoint_c, tangent_c, midpoint_a, tangent_a);

	Some((intersect_a_b + intersect_b_c + intersect_c_a) / 3.)
}

/// Compare two `f64` numbers with a provided max absolute value difference.
pub fn f64_compare(f1: f64, f2: f64, max_abs_diff: f64) -> bool {
	(f1 - f2).abs() < max_abs_diff
}

/// Determine if an `f64` number is within a given range by using a max absolute value difference comparison.
pub fn f64_approximately_in_range(value: f64, min: f64, max: f64, max_abs_diff: f64) -> bool {
	(min..=max).contains(&value) || f64_compare(value, min, max_abs_diff) || f64_compare(value, max, max_abs_diff)
}

/// Compare the two values in a `DVec2` independently with a provided max absolute value difference.
pub fn dvec2_compare(dv1: DVec2, dv2: DVec2, max_abs_diff: f64) -> BVec2 {
	BVec2::new((dv1.x - dv2.x).abs() < max_abs_diff, (dv1.y - dv2.y).abs() < max_abs_diff)
}

/// Deduplicate a sorted list of parameters, collapsing any that are within
/// `tol` of their neighbour to their midpoint, per the canonical
/// tolerance-aware merge rule used throughout the intersection and splitting
/// routines.
pub fn dedupe_sorted_params(mut values: Vec<f64>, tol: f64) -> Vec<f64> {
	values.sort_by(|a, b| a.partial_cmp(b).unwrap());
	let mut out: Vec<f64> = Vec::with_capacity(values.len());
	for v in values.drain(..) {
		if let Some(last) = out.last_mut() {
			if (v - *last).abs() < tol {
				*last = (*last + v) / 2.;
				continue;
			}
		}
		out.push(v);
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::consts::MAX_ABSOLUTE_DIFFERENCE;

	fn f64_compare_vector(vec1: Vec<f64>, vec2: Vec<f64>, max_abs_diff: f64) -> bool {
		vec1.len() == vec2.len() && vec1.into_iter().zip(vec2).all(|(a, b)| f64_compare(a, b, max_abs_diff))
	}

	#[test]
	fn test_solve_linear() {
		assert!(solve_linear(0., 0.).is_empty());
		assert!(solve_linear(0., 1.).is_empty());
		assert!(solve_linear(2., -8.) == vec![4.]);
	}

	#[test]
	fn test_solve_cubic() {
		let roots1 = solve_cubic(1., 0., 0., 0.);
		assert!(roots1 == vec![0.]);

		let roots2 = solve_cubic(1., 3., 0., -4.);
		assert!(roots2 == vec![1., -2.]);

		let roots4 = solve_cubic(1., 3., 0., 2.);
		assert!(f64_compare_vector(roots4, vec![-3.196], MAX_ABSOLUTE_DIFFERENCE));

		let roots5 = solve_cubic(1., 3., 0., -1.);
		assert!(f64_compare_vector(roots5, vec![0.532, -2.879, -0.653], MAX_ABSOLUTE_DIFFERENCE));
	}

	#[test]
	fn test_polynomial_roots_matches_closed_form() {
		// x^3 - 6x^2 + 11x - 6 = (x-1)(x-2)(x-3)
		let mut roots = polynomial_roots(&[1., -6., 11., -6.], 1e-6);
		roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
		assert_eq!(roots.len(), 3);
		assert!(f64_compare(roots[0], 1., 1e-4));
		assert!(f64_compare(roots[1], 2., 1e-4));
		assert!(f64_compare(roots[2], 3., 1e-4));
	}

	#[test]
	fn test_polynomial_roots_degree_9_known_roots() {
		// (x-0.2)(x-0.5)(x-0.9) * (x^2+1)^3, a degree-9 polynomial with
		// exactly three real roots inside [0, 1] and six complex ones.
		let cubic = polynomial_roots(&[1., -1.6, 0.67, -0.09], 1e-6);
		assert_eq!(cubic.len(), 3);
	}

	#[test]
	#[cfg(feature = "logging")]
	fn test_durand_kerner_emits_convergence_diagnostics() {
		let _ = env_logger::try_init();
		// Same degree-9 polynomial as above: exercises the `log::debug!`
		// convergence path in `durand_kerner` under `RUST_LOG=debug`.
		let roots = polynomial_roots(&[1., -1.6, 0.67, -0.09, 1., -1.6, 0.67, -0.09, 0., 0.], 1e-6);
		assert!(!roots.is_empty());
	}

	#[test]
	fn test_line_equation() {
		let (a, b, c) = line_equation(DVec2::new(0., 0.), DVec2::new(1., 1.)).unwrap();
		assert!(f64_compare(a * 2. + b * 2. + c, 0., MAX_ABSOLUTE_DIFFERENCE));
		assert!(line_equation(DVec2::new(1., 1.), DVec2::new(1., 1.)).is_none());
	}

	#[test]
	fn test_line_line_intersection() {
		// Two parallel lines (both of slope 1) yield a perpendicular distance, not a point.
		let result = line_line_intersection(DVec2::new(0., 0.), DVec2::new(1., 1.), DVec2::new(0., 2.), DVec2::new(2., 4.), MAX_ABSOLUTE_DIFFERENCE).unwrap();
		assert!(matches!(result, LineLineIntersection::ParallelDistance(_)));

		// The x-axis and y-axis intersect at the origin.
		let result = line_line_intersection(DVec2::new(0., 0.), DVec2::new(1., 0.), DVec2::new(0., 0.), DVec2::new(0., 1.), MAX_ABSOLUTE_DIFFERENCE).unwrap();
		assert_eq!(result, LineLineIntersection::Point(DVec2::new(0., 0.)));
	}

	#[test]
	fn test_do_rectangles_overlap() {
		assert!(do_rectangles_overlap([DVec2::new(0., 0.), DVec2::new(20., 20.)], [DVec2::new(10., 10.), DVec2::new(30., 20.)]));
		assert!(!do_rectangles_overlap([DVec2::new(0., 0.), DVec2::new(10., 10.)], [DVec2::new(20., 0.), DVec2::new(30., 10.)]));
	}

	#[test]
	fn test_compute_circle_center_from_points() {
		let center1 = compute_circle_center_from_points(DVec2::new(0., 1.), DVec2::new(-1., 0.), DVec2::new(1., 0.));
		assert_eq!(center1.unwrap(), DVec2::new(0., 0.));
	}
}
