//! Visual theming for the force graph.
//!
//! Provides colors, group palettes, and the highlight style used for search
//! matches.

use std::collections::HashMap;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity, 0.0 to 1.0.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit opacity.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color, different opacity.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		self.lerp(Color::rgba(255, 255, 255, self.a), factor)
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		self.lerp(Color::rgba(0, 0, 0, self.a), factor)
	}

	/// Linear interpolation between two colors
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		let mix = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t).round() as u8;
		Self {
			r: mix(self.r, other.r),
			g: mix(self.g, other.g),
			b: mix(self.b, other.b),
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	/// CSS color string: `#rrggbb` when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// An ordered set of group colors. Groups are assigned colors by their
/// first-appearance index, wrapping when there are more groups than colors.
#[derive(Clone, Debug)]
pub struct NodePalette {
	/// Colors in assignment order.
	pub colors: Vec<Color>,
}

impl NodePalette {
	/// Muted slate blues, teals and accents for dark backgrounds.
	pub fn slate() -> Self {
		Self {
			colors: vec![
				Color::rgb(94, 129, 172),  // Steel blue
				Color::rgb(191, 128, 96),  // Terracotta
				Color::rgb(100, 160, 140), // Teal green
				Color::rgb(180, 160, 90),  // Ochre
				Color::rgb(150, 120, 170), // Wisteria
				Color::rgb(119, 158, 165), // Desaturated cyan
				Color::rgb(190, 110, 125), // Dusty rose
				Color::rgb(143, 163, 180), // Cool gray
			],
		}
	}

	/// Saturated tones that read on a light background.
	pub fn vivid() -> Self {
		Self {
			colors: vec![
				Color::rgb(31, 119, 180),
				Color::rgb(255, 127, 14),
				Color::rgb(44, 160, 44),
				Color::rgb(214, 39, 40),
				Color::rgb(148, 103, 189),
				Color::rgb(140, 86, 75),
				Color::rgb(227, 119, 194),
				Color::rgb(127, 127, 127),
			],
		}
	}

	/// Color for group `index`, wrapping around.
	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}

	/// Color per group name, indexed by position in `groups`.
	pub fn assign(&self, groups: &[&str]) -> HashMap<String, Color> {
		groups
			.iter()
			.enumerate()
			.map(|(i, g)| (g.to_string(), self.get(i)))
			.collect()
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Base fill.
	pub color: Color,
	/// Secondary color for gradients
	pub color_secondary: Color,
	/// Radial gradient from `color_secondary` at the centre to `color`.
	pub use_gradient: bool,
	/// Vignette intensity (0.0 = none, 1.0 = strong)
	pub vignette: f64,
}

/// Edge visual style.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Stroke color.
	pub color: Color,
	/// Dash pattern (dash, gap) in world units, `None` for solid lines.
	pub dash: Option<(f64, f64)>,
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Whether nodes have inner gradients
	pub use_gradient: bool,
	/// Border/stroke width (0 = no border)
	pub border_width: f64,
	/// Stroke color for the border.
	pub border_color: Color,
	/// Label fill for non-highlighted nodes.
	pub label_color: Color,
}

/// Emphasis for nodes matching the active search term.
#[derive(Clone, Debug)]
pub struct HighlightStyle {
	/// Fill the matched node fades toward.
	pub color: Color,
	/// Extra radius at full intensity (0.6 = 60% larger).
	pub radius_boost: f64,
	/// Bold label fill for matches.
	pub label_color: Color,
	/// Ring drawn around the hovered node.
	pub ring_color: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Preset name, also written to the page's `data-theme`.
	pub name: &'static str,
	/// Canvas background.
	pub background: BackgroundStyle,
	/// Links.
	pub edge: EdgeStyle,
	/// Nodes and labels.
	pub node: NodeStyle,
	/// Search matches and rings.
	pub highlight: HighlightStyle,
	/// Group colors.
	pub palette: NodePalette,
}

impl Theme {
	/// Dark theme (default).
	pub fn default_theme() -> Self {
		Self {
			name: "default",
			background: BackgroundStyle {
				color: Color::rgb(22, 27, 34),
				color_secondary: Color::rgb(30, 35, 42),
				use_gradient: true,
				vignette: 0.15,
			},
			edge: EdgeStyle {
				color: Color::rgba(140, 160, 180, 0.5),
				dash: None,
			},
			node: NodeStyle {
				use_gradient: true,
				border_width: 0.0,
				border_color: Color::rgba(255, 255, 255, 0.0),
				label_color: Color::rgba(255, 255, 255, 0.85),
			},
			highlight: HighlightStyle {
				color: Color::rgb(255, 196, 64),
				radius_boost: 0.6,
				label_color: Color::rgb(255, 230, 160),
				ring_color: Color::rgb(255, 255, 255),
			},
			palette: NodePalette::slate(),
		}
	}

	/// Light theme with dashed links.
	pub fn daylight() -> Self {
		Self {
			name: "daylight",
			background: BackgroundStyle {
				color: Color::rgb(246, 247, 249),
				color_secondary: Color::rgb(255, 255, 255),
				use_gradient: true,
				vignette: 0.0,
			},
			edge: EdgeStyle {
				color: Color::rgba(90, 100, 115, 0.55),
				dash: Some((6.0, 3.0)),
			},
			node: NodeStyle {
				use_gradient: false,
				border_width: 1.0,
				border_color: Color::rgb(255, 255, 255),
				label_color: Color::rgba(30, 34, 40, 0.9),
			},
			highlight: HighlightStyle {
				color: Color::rgb(220, 50, 47),
				radius_boost: 0.6,
				label_color: Color::rgb(160, 20, 20),
				ring_color: Color::rgb(30, 34, 40),
			},
			palette: NodePalette::vivid(),
		}
	}

	/// Preset by name.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"default" | "dark" => Some(Self::default_theme()),
			"daylight" | "light" => Some(Self::daylight()),
			_ => None,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_uses_hex_when_opaque() {
		assert_eq!(Color::rgb(31, 119, 180).to_css(), "#1f77b4");
		assert_eq!(
			Color::rgba(10, 20, 30, 0.5).to_css(),
			"rgba(10, 20, 30, 0.5)"
		);
	}

	#[test]
	fn lerp_endpoints() {
		let a = Color::rgb(0, 0, 0);
		let b = Color::rgb(200, 100, 50);
		assert_eq!(a.lerp(b, 0.0), a);
		assert_eq!(a.lerp(b, 1.0), b);
		assert_eq!(a.lerp(b, 0.5), Color::rgb(100, 50, 25));
	}

	#[test]
	fn palette_wraps_and_assigns_by_order() {
		let palette = NodePalette::vivid();
		assert_eq!(palette.get(0), palette.get(palette.colors.len()));
		let colors = palette.assign(&["Tennis", "Golf"]);
		assert_eq!(colors["Tennis"], palette.get(0));
		assert_eq!(colors["Golf"], palette.get(1));
	}

	#[test]
	fn themes_resolve_by_name() {
		assert_eq!(Theme::by_name("daylight").map(|t| t.name), Some("daylight"));
		assert_eq!(Theme::by_name("dark").map(|t| t.name), Some("default"));
		assert!(Theme::by_name("neon").is_none());
	}
}
