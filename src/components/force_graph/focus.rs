//! Auto-focus: easing the view onto search matches and back home.

use super::state::ViewTransform;

/// Zoom used when exactly one node matches the search.
pub const SINGLE_MATCH_ZOOM: f64 = 1.5;
/// Zoom used when several nodes match.
pub const MULTI_MATCH_ZOOM: f64 = 2.0;

const EASE_SPEED: f64 = 4.0;

/// Who currently drives the view transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusMode {
	/// The user; nothing is eased.
	#[default]
	Free,
	/// Follow the centroid of the search matches.
	Search,
	/// Return to the initial view, then go `Free`.
	Home,
}

/// View that puts the world origin at the canvas midpoint at 100%.
pub fn home_transform(width: f64, height: f64) -> ViewTransform {
	ViewTransform {
		x: width / 2.0,
		y: height / 2.0,
		k: 1.0,
	}
}

/// View centred on the centroid of `points` (world coordinates).
pub fn focus_transform(points: &[(f64, f64)], width: f64, height: f64) -> Option<ViewTransform> {
	if points.is_empty() {
		return None;
	}
	let n = points.len() as f64;
	let (sx, sy) = points
		.iter()
		.fold((0.0, 0.0), |(ax, ay), (x, y)| (ax + x, ay + y));
	let (cx, cy) = (sx / n, sy / n);
	let k = if points.len() > 1 {
		MULTI_MATCH_ZOOM
	} else {
		SINGLE_MATCH_ZOOM
	};
	Some(ViewTransform {
		x: width / 2.0 - cx * k,
		y: height / 2.0 - cy * k,
		k,
	})
}

/// Move `current` a frame's worth toward `target` with exponential smoothing.
/// Returns `true` once the two are visually indistinguishable.
pub fn ease_toward(current: &mut ViewTransform, target: &ViewTransform, dt: f64) -> bool {
	let f = 1.0 - (-EASE_SPEED * dt).exp();
	current.x += (target.x - current.x) * f;
	current.y += (target.y - current.y) * f;
	current.k += (target.k - current.k) * f;
	(target.x - current.x).abs() < 0.5
		&& (target.y - current.y).abs() < 0.5
		&& (target.k - current.k).abs() < 0.001
}
