//! Canvas rendering for the force graph.
//!
//! Rendering uses multiple passes for correct z-ordering:
//! 1. Background (screen space)
//! 2. Edge lines (world space)
//! 3. Plain nodes, then hovered/selected/search-matched nodes on top
//! 4. Vignette (screen space)

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scale::{ScaleConfig, ScaledValues};
use super::state::{ForceGraphState, NodeInfo};
use super::theme::Theme;

type Node = force_graph::Node<NodeInfo>;

/// Ease-in-out curve so highlight changes don't start or stop abruptly.
fn smooth_step(t: f64) -> f64 {
	t * t * (3.0 - 2.0 * t)
}

/// Renders the complete graph to the canvas.
pub fn render(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	let scale = ScaledValues::new(config, state.transform.k);

	draw_background(state, ctx, theme);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_edges(state, ctx, &scale, theme);
	draw_nodes(state, ctx, &scale, theme);

	ctx.restore();

	if theme.background.vignette > 0.0 {
		draw_vignette(state, ctx, theme);
	}
}

fn draw_background(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let gradient = theme
		.background
		.use_gradient
		.then(|| {
			ctx.create_radial_gradient(
				state.width / 2.0,
				state.height / 2.0,
				0.0,
				state.width / 2.0,
				state.height / 2.0,
				state.width.max(state.height) * 0.8,
			)
			.ok()
		})
		.flatten();

	match gradient {
		Some(gradient) => {
			let _ = gradient.add_color_stop(0.0, &theme.background.color_secondary.to_css());
			let _ = gradient.add_color_stop(1.0, &theme.background.color.to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		None => ctx.set_fill_style_str(&theme.background.color.to_css()),
	}

	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_vignette(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let Ok(gradient) = ctx.create_radial_gradient(
		state.width / 2.0,
		state.height / 2.0,
		state.width.min(state.height) * 0.3,
		state.width / 2.0,
		state.height / 2.0,
		state.width.max(state.height) * 0.7,
	) else {
		return;
	};

	let _ = gradient.add_color_stop(0.0, "rgba(0, 0, 0, 0)");
	let _ = gradient.add_color_stop(
		1.0,
		&format!("rgba(0, 0, 0, {})", theme.background.vignette),
	);

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_edges(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let max_t = smooth_step(state.highlight.max_intensity());
	let edge_color = theme.edge.color;

	match theme.edge.dash {
		Some((dash, gap)) if gap * scale.dash_alpha > 0.1 => {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(gap * scale.dash_alpha),
			));
		}
		_ => {
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}
	}

	state.graph.visit_edges(|n1, n2, _| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}

		let edge_t = smooth_step(state.highlight.edge_intensity(n1.index(), n2.index()));
		let (alpha, width) = if edge_t > 0.01 {
			(0.7 + 0.3 * edge_t, scale.edge_line_width * (1.0 + 0.5 * edge_t))
		} else if max_t > 0.01 {
			(0.7 - 0.5 * max_t, scale.edge_line_width * (1.0 - 0.3 * max_t))
		} else {
			(0.7, scale.edge_line_width)
		};

		ctx.set_stroke_style_str(&edge_color.with_alpha(alpha * edge_color.a).to_css());
		ctx.set_line_width(width);

		// Stop at the node rims so lines don't cross the fills.
		let (ux, uy) = (dx / dist, dy / dist);
		let (r1, r2) = (
			scale.node_radius * n1.data.user_data.size,
			scale.node_radius * n2.data.user_data.size,
		);
		ctx.begin_path();
		ctx.move_to(x1 + ux * r1, y1 + uy * r1);
		ctx.line_to(x2 - ux * r2, y2 - uy * r2);
		ctx.stroke();
	});

	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

/// How a single node is drawn this frame.
struct NodeLook {
	alpha: f64,
	radius: f64,
	/// Search-match intensity after easing.
	search_t: f64,
	ring_t: f64,
}

fn node_look(state: &ForceGraphState, node: &Node, scale: &ScaledValues, theme: &Theme) -> NodeLook {
	let idx = node.index();
	let max_t = smooth_step(state.highlight.max_intensity());
	let hover_t = smooth_step(state.highlight.node_intensity(idx));
	let search_t = smooth_step(state.highlight.search_intensity(idx));
	let ring_t = smooth_step(state.highlight.ring_intensity(idx));

	// Everything outside the hover neighbourhood dims while something is hovered.
	let (dim_alpha, dim_radius) = if max_t > 0.01 {
		(1.0 - 0.7 * max_t, 1.0 - 0.15 * max_t)
	} else {
		(1.0, 1.0)
	};
	let emphasis = hover_t.max(search_t);
	let alpha = dim_alpha + (1.0 - dim_alpha) * emphasis;
	let hover_radius = dim_radius + (1.25 - dim_radius) * hover_t;
	let radius_mult = hover_radius * (1.0 + theme.highlight.radius_boost * search_t);

	NodeLook {
		alpha,
		radius: scale.node_radius * radius_mult * node.data.user_data.size,
		search_t,
		ring_t,
	}
}

fn draw_nodes(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let is_emphasised = |node: &Node| {
		let idx = node.index();
		state.highlight.node_intensity(idx) > 0.001
			|| state.highlight.search_intensity(idx) > 0.001
			|| state.highlight.ring_intensity(idx) > 0.001
			|| state.is_search_match(idx)
	};

	state.graph.visit_nodes(|node| {
		if !is_emphasised(node) {
			let look = node_look(state, node, scale, theme);
			draw_node(ctx, node, scale, theme, &look);
		}
	});

	state.graph.visit_nodes(|node| {
		if is_emphasised(node) {
			let look = node_look(state, node, scale, theme);
			draw_node(ctx, node, scale, theme, &look);
			if look.ring_t > 0.01 {
				draw_ring(ctx, node, scale, theme, &look);
			}
		}
	});
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	node: &Node,
	scale: &ScaledValues,
	theme: &Theme,
	look: &NodeLook,
) {
	let (x, y) = (node.x() as f64, node.y() as f64);
	let radius = look.radius;
	let base_color = node
		.data
		.user_data
		.color
		.lerp(theme.highlight.color, look.search_t);

	ctx.set_global_alpha(look.alpha);

	let gradient = theme
		.node
		.use_gradient
		.then(|| {
			ctx.create_radial_gradient(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius)
				.ok()
		})
		.flatten();

	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	match gradient {
		Some(gradient) => {
			let _ = gradient.add_color_stop(0.0, &base_color.lighten(0.4).to_css());
			let _ = gradient.add_color_stop(0.7, &base_color.to_css());
			let _ = gradient.add_color_stop(1.0, &base_color.darken(0.2).to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		None => ctx.set_fill_style_str(&base_color.to_css()),
	}
	ctx.fill();

	if theme.node.border_width > 0.0 {
		ctx.set_stroke_style_str(&theme.node.border_color.to_css());
		ctx.set_line_width(theme.node.border_width / scale.k);
		ctx.stroke();
	}

	ctx.set_global_alpha(1.0);
	draw_label(ctx, node, scale, theme, look);
}

/// Search matches always get a bold label; other labels fade with zoom and
/// only show while the node itself is mostly opaque.
fn draw_label(
	ctx: &CanvasRenderingContext2d,
	node: &Node,
	scale: &ScaledValues,
	theme: &Theme,
	look: &NodeLook,
) {
	let (x, y) = (node.x() as f64, node.y() as f64);
	let label = &node.data.user_data.id;

	if look.search_t > 0.01 {
		let color = theme.node.label_color.lerp(theme.highlight.label_color, look.search_t);
		ctx.set_fill_style_str(&color.to_css());
		ctx.set_font(&scale.label_font_bold);
	} else {
		let alpha = scale.label_alpha * look.alpha;
		if alpha < 0.05 || look.alpha <= 0.5 {
			return;
		}
		let color = theme.node.label_color;
		ctx.set_fill_style_str(&color.with_alpha(color.a * alpha).to_css());
		ctx.set_font(&scale.label_font);
	}
	let _ = ctx.fill_text(label, x + look.radius + 4.0, y + 3.0);
}

fn draw_ring(
	ctx: &CanvasRenderingContext2d,
	node: &Node,
	scale: &ScaledValues,
	theme: &Theme,
	look: &NodeLook,
) {
	let (x, y) = (node.x() as f64, node.y() as f64);
	let ring = theme.highlight.ring_color;

	ctx.begin_path();
	let _ = ctx.arc(x, y, look.radius + scale.ring_offset, 0.0, 2.0 * PI);
	ctx.set_stroke_style_str(&ring.with_alpha(0.8 * look.ring_t).to_css());
	ctx.set_line_width(scale.ring_width);
	ctx.stroke();

	ctx.begin_path();
	let _ = ctx.arc(x, y, look.radius + scale.ring_offset * 2.5, 0.0, 2.0 * PI);
	ctx.set_stroke_style_str(&ring.with_alpha(0.3 * look.ring_t).to_css());
	ctx.set_line_width(scale.ring_width * 0.5);
	ctx.stroke();
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::{GraphData, GraphNode};

	fn unlinked_state() -> ForceGraphState {
		let node = |id: &str| GraphNode {
			id: id.into(),
			group: "Running".into(),
		};
		let data = GraphData {
			nodes: vec![node("Acme"), node("Beta")],
			links: Vec::new(),
		};
		ForceGraphState::new(&data, 800.0, 600.0, &Theme::default())
	}

	fn look_of(state: &ForceGraphState, id: &str, theme: &Theme) -> NodeLook {
		let scale = ScaledValues::new(&ScaleConfig::default(), state.transform.k);
		let mut look = None;
		state.graph.visit_nodes(|node| {
			if node.data.user_data.id == id {
				look = Some(node_look(state, node, &scale, theme));
			}
		});
		look.unwrap()
	}

	#[test]
	fn search_match_is_drawn_larger_with_bold_label() {
		let theme = Theme::default();
		let mut state = unlinked_state();
		assert_eq!(state.set_search("acme"), 1);
		for _ in 0..60 {
			state.tick(0.016);
		}

		let matched = look_of(&state, "Acme", &theme);
		let plain = look_of(&state, "Beta", &theme);
		assert!(matched.radius > plain.radius);
		// Above this threshold draw_label switches to the bold font.
		assert!(matched.search_t > 0.01);
		assert!(plain.search_t <= 0.01);
		assert_eq!(matched.alpha, 1.0);
	}

	#[test]
	fn smooth_step_fixes_endpoints_and_midpoint() {
		assert_eq!(smooth_step(0.0), 0.0);
		assert_eq!(smooth_step(0.5), 0.5);
		assert_eq!(smooth_step(1.0), 1.0);
	}
}
