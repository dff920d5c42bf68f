//! Zoom-dependent scaling configuration for graph visuals.
//!
//! Sizes are expressed either in world units (they grow when zooming in) or
//! screen pixels (constant on screen, divided by the zoom factor `k` before
//! drawing under the canvas transform).
//!
//! Labels are the main reason this exists: with dozens of company names on
//! screen, unhighlighted labels fade out below a zoom threshold while
//! search matches keep a bold label at every zoom level.

/// Defines how a visual size scales with zoom level.
#[derive(Clone, Debug)]
pub enum ScaleBehavior {
	/// Constant screen-space size (pixels). Unaffected by zoom.
	Screen,
	/// World-space scaling, clamped to min/max screen-space bounds.
	Clamped {
		/// Smallest on-screen size in pixels.
		min_screen: f64,
		/// Largest on-screen size in pixels.
		max_screen: f64,
	},
}

impl ScaleBehavior {
	/// World-space value for `base` at zoom `k`.
	pub fn apply(&self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => base.clamp(min_screen / k, max_screen / k),
		}
	}
}

/// Defines how alpha/opacity scales with zoom level.
#[derive(Clone, Debug)]
pub enum AlphaBehavior {
	/// Always fully visible.
	Constant,
	/// Fully visible at `full_alpha_k`, fades to zero at `zero_alpha_k`.
	Fade {
		/// Zoom at and below which alpha is 0.
		zero_alpha_k: f64,
		/// Zoom at and above which alpha is 1.
		full_alpha_k: f64,
	},
}

impl AlphaBehavior {
	/// Alpha at zoom `k`, in `0.0..=1.0`.
	pub fn apply(&self, k: f64) -> f64 {
		match self {
			AlphaBehavior::Constant => 1.0,
			AlphaBehavior::Fade {
				zero_alpha_k,
				full_alpha_k,
			} => {
				if zero_alpha_k == full_alpha_k {
					return 1.0;
				}
				((k - zero_alpha_k) / (full_alpha_k - zero_alpha_k)).clamp(0.0, 1.0)
			}
		}
	}
}

/// Node sizes and label visibility.
#[derive(Clone, Debug)]
pub struct NodeScaleConfig {
	/// Base node radius in world units.
	pub radius: f64,
	/// How `radius` responds to zoom.
	pub radius_behavior: ScaleBehavior,
	/// Hit detection radius in world units.
	pub hit_radius: f64,
	/// How `hit_radius` responds to zoom.
	pub hit_behavior: ScaleBehavior,
	/// Label font size in screen pixels.
	pub label_size: f64,
	/// Zoom below which the label font stops shrinking.
	pub label_min_k: f64,
	/// Visibility of labels on nodes that are not highlighted.
	pub label_alpha_behavior: AlphaBehavior,
}

/// Link line sizing.
#[derive(Clone, Debug)]
pub struct EdgeScaleConfig {
	/// Line width in screen pixels.
	pub line_width: f64,
	/// Dash visibility; once faded out, dashed themes draw solid lines.
	pub dash_alpha_behavior: AlphaBehavior,
}

/// Hover ring around the node under the pointer.
#[derive(Clone, Debug)]
pub struct RingScaleConfig {
	/// Stroke width in screen pixels.
	pub width: f64,
	/// Offset from the node edge in screen pixels.
	pub offset: f64,
}

/// Complete scale configuration for all graph elements.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	/// Nodes and labels.
	pub node: NodeScaleConfig,
	/// Links.
	pub edge: EdgeScaleConfig,
	/// Hover and selection rings.
	pub ring: RingScaleConfig,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node: NodeScaleConfig {
				radius: 6.0,
				radius_behavior: ScaleBehavior::Clamped {
					min_screen: 4.0,
					max_screen: f64::INFINITY,
				},
				hit_radius: 12.0,
				hit_behavior: ScaleBehavior::Clamped {
					min_screen: 6.0,
					max_screen: f64::INFINITY,
				},
				label_size: 11.0,
				label_min_k: 0.5,
				label_alpha_behavior: AlphaBehavior::Fade {
					zero_alpha_k: 0.6,
					full_alpha_k: 1.1,
				},
			},
			edge: EdgeScaleConfig {
				line_width: 1.2,
				dash_alpha_behavior: AlphaBehavior::Fade {
					zero_alpha_k: 0.4,
					full_alpha_k: 0.9,
				},
			},
			ring: RingScaleConfig {
				width: 1.5,
				offset: 2.0,
			},
		}
	}
}

/// Pre-computed scale values for a specific zoom level.
///
/// Create this once per frame. All sizes are world-space, ready to use
/// after the canvas transform.
#[derive(Clone, Debug)]
pub struct ScaledValues {
	/// Zoom these values were computed for.
	pub k: f64,
	/// Base node radius before the per-node size multiplier.
	pub node_radius: f64,
	/// Pointer hit radius before the per-node size multiplier.
	pub hit_radius: f64,
	/// e.g. "11px sans-serif"
	pub label_font: String,
	/// Font for highlighted labels, e.g. "bold 13.2px sans-serif".
	pub label_font_bold: String,
	/// Alpha of labels on non-highlighted nodes.
	pub label_alpha: f64,
	/// Link stroke width.
	pub edge_line_width: f64,
	/// Scales the dash gap; near 0 the links are drawn solid.
	pub dash_alpha: f64,
	/// Ring stroke width.
	pub ring_width: f64,
	/// Gap between node rim and ring.
	pub ring_offset: f64,
}

impl ScaledValues {
	/// Resolve `config` at zoom `k`.
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		let label_font_size = config.node.label_size / k.max(config.node.label_min_k);

		Self {
			k,
			node_radius: config.node.radius_behavior.apply(config.node.radius, k),
			hit_radius: config.node.hit_behavior.apply(config.node.hit_radius, k),
			label_font: format!("{}px sans-serif", label_font_size),
			label_font_bold: format!("bold {}px sans-serif", label_font_size * 1.2),
			label_alpha: config.node.label_alpha_behavior.apply(k),
			edge_line_width: ScaleBehavior::Screen.apply(config.edge.line_width, k),
			dash_alpha: config.edge.dash_alpha_behavior.apply(k),
			ring_width: ScaleBehavior::Screen.apply(config.ring.width, k),
			ring_offset: ScaleBehavior::Screen.apply(config.ring.offset, k),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clamped_keeps_minimum_screen_size_when_zoomed_out() {
		let behavior = ScaleBehavior::Clamped {
			min_screen: 4.0,
			max_screen: f64::INFINITY,
		};
		assert_eq!(behavior.apply(6.0, 1.0), 6.0);
		// At k = 0.5 a 6-unit radius would be 3px on screen; clamp to 4px.
		assert_eq!(behavior.apply(6.0, 0.5), 8.0);
	}

	#[test]
	fn fade_is_linear_between_thresholds() {
		let fade = AlphaBehavior::Fade {
			zero_alpha_k: 0.5,
			full_alpha_k: 1.0,
		};
		assert_eq!(fade.apply(0.25), 0.0);
		assert_eq!(fade.apply(0.75), 0.5);
		assert_eq!(fade.apply(2.0), 1.0);
		assert_eq!(AlphaBehavior::Constant.apply(0.1), 1.0);
	}

	#[test]
	fn bold_label_font_is_larger() {
		let scaled = ScaledValues::new(&ScaleConfig::default(), 1.0);
		assert_eq!(scaled.label_font, "11px sans-serif");
		assert!(scaled.label_font_bold.starts_with("bold "));
		assert_eq!(scaled.edge_line_width, 1.2);
	}
}
