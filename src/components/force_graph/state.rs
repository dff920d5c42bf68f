//! Graph simulation state and interaction tracking.
//!
//! Wraps the `force_graph` physics simulation with per-node metadata, a
//! centering step, view transforms for pan/zoom, and highlight state with
//! smooth intensity transitions for hover, selection and search matches.

use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::focus::{self, FocusMode};
use super::scale::{ScaleConfig, ScaledValues};
use super::theme::{Color, Theme};
use super::types::GraphData;
use crate::filter::matches_search;

/// Fraction of the centroid offset removed from free nodes each tick.
const CENTERING_STRENGTH: f64 = 0.1;

/// Per-node display metadata attached to each node in the simulation.
#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	/// Company name; doubles as the label.
	pub id: String,
	pub color: Color,
	/// Size multiplier (1.0 = normal, >1.0 = more connected)
	pub size: f64,
}

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to 0.1..10.0).
	pub k: f64,
}

/// Tracks an in-progress node drag operation.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	/// Set once the pointer has travelled far enough to count as a drag
	/// rather than a click.
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Minimum time (seconds) a highlight must be held before it can fade out.
/// This prevents flashing when the mouse briefly touches a hover zone.
const MIN_HOLD_TIME: f64 = 0.12;

/// Per-node intensities (0.0 to 1.0) animated toward a target set with
/// exponential smoothing: fast ease-in, slower ease-out after a hold time.
#[derive(Clone, Debug, Default)]
struct Fader {
	target: HashSet<DefaultNodeIdx>,
	intensity: HashMap<DefaultNodeIdx, f64>,
	hold_timer: HashMap<DefaultNodeIdx, f64>,
	max: f64,
}

impl Fader {
	fn set_target(&mut self, target: HashSet<DefaultNodeIdx>) {
		for &idx in &target {
			self.hold_timer.insert(idx, MIN_HOLD_TIME);
		}
		self.target = target;
	}

	fn tick(&mut self, dt: f64) {
		const FADE_IN_SPEED: f64 = 6.0; // ~150ms to 95%
		const FADE_OUT_SPEED: f64 = 4.0; // ~250ms to 95%

		let fade_in = 1.0 - (-FADE_IN_SPEED * dt).exp();
		let fade_out = (-FADE_OUT_SPEED * dt).exp();

		for &idx in &self.target {
			let intensity = self.intensity.entry(idx).or_insert(0.0);
			*intensity += (1.0 - *intensity) * fade_in;
		}

		let target = &self.target;
		self.hold_timer.retain(|idx, timer| {
			if target.contains(idx) {
				true
			} else {
				*timer -= dt;
				*timer > 0.0
			}
		});

		let hold_timer = &self.hold_timer;
		let mut max: f64 = 0.0;
		self.intensity.retain(|idx, intensity| {
			if !target.contains(idx) && !hold_timer.contains_key(idx) {
				*intensity *= fade_out;
			}
			max = max.max(*intensity);
			*intensity > 0.005
		});
		self.max = max;
	}

	fn get(&self, idx: DefaultNodeIdx) -> f64 {
		self.intensity.get(&idx).copied().unwrap_or(0.0)
	}
}

/// Highlight state for hover, selection and search.
///
/// - hover: the hovered node plus its neighbours; everything else dims.
/// - ring: drawn around the hovered and the selected node.
/// - search: nodes whose id contains the search term; enlarged, recoloured
///   and labelled in bold.
#[derive(Clone, Debug, Default)]
pub struct HighlightState {
	pub hovered_node: Option<DefaultNodeIdx>,
	pub selected_node: Option<DefaultNodeIdx>,
	neighbourhood: Fader,
	ring: Fader,
	search: Fader,
}

impl HighlightState {
	/// Update the hovered node and recompute its neighbourhood.
	pub fn set_hover(
		&mut self,
		node: Option<DefaultNodeIdx>,
		edges: &[(DefaultNodeIdx, DefaultNodeIdx)],
	) {
		if self.hovered_node == node {
			return;
		}
		self.hovered_node = node;

		let mut target = HashSet::new();
		if let Some(idx) = node {
			target.insert(idx);
			for &(src, tgt) in edges {
				if src == idx {
					target.insert(tgt);
				} else if tgt == idx {
					target.insert(src);
				}
			}
		}
		self.neighbourhood.set_target(target);
		self.refresh_ring();
	}

	pub fn set_selected(&mut self, node: Option<DefaultNodeIdx>) {
		self.selected_node = node;
		self.refresh_ring();
	}

	pub fn set_search_matches(&mut self, matches: HashSet<DefaultNodeIdx>) {
		self.search.set_target(matches);
	}

	fn refresh_ring(&mut self) {
		let ring = self
			.hovered_node
			.into_iter()
			.chain(self.selected_node)
			.collect();
		self.ring.set_target(ring);
	}

	pub fn tick(&mut self, dt: f64) {
		self.neighbourhood.tick(dt);
		self.ring.tick(dt);
		self.search.tick(dt);
	}

	/// Hover-neighbourhood intensity for a node.
	pub fn node_intensity(&self, idx: DefaultNodeIdx) -> f64 {
		self.neighbourhood.get(idx)
	}

	pub fn ring_intensity(&self, idx: DefaultNodeIdx) -> f64 {
		self.ring.get(idx)
	}

	pub fn search_intensity(&self, idx: DefaultNodeIdx) -> f64 {
		self.search.get(idx)
	}

	/// Edge intensity as the geometric mean of its endpoints' intensities.
	pub fn edge_intensity(&self, idx1: DefaultNodeIdx, idx2: DefaultNodeIdx) -> f64 {
		(self.node_intensity(idx1) * self.node_intensity(idx2)).sqrt()
	}

	/// Strongest hover intensity, used to dim everything outside the hover set.
	pub fn max_intensity(&self) -> f64 {
		self.neighbourhood.max
	}
}

/// Core graph state combining physics simulation with interaction and highlight tracking.
///
/// Rebuilt whenever the graph data changes, then mutated each frame by the
/// animation loop.
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub highlight: HighlightState,
	pub focus: FocusMode,
	pub width: f64,
	pub height: f64,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
	ids: HashMap<String, DefaultNodeIdx>,
	search_matches: HashSet<DefaultNodeIdx>,
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64, theme: &Theme) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let group_colors = theme.palette.assign(&data.group_names());
		let mut ids = HashMap::new();
		let mut edges = Vec::new();

		let mut degree: HashMap<&str, usize> = HashMap::new();
		for link in &data.links {
			*degree.entry(&link.source).or_insert(0) += 1;
			*degree.entry(&link.target).or_insert(0) += 1;
		}
		let max_degree = degree.values().copied().max().unwrap_or(1).max(1);
		let spread = 40.0 * (data.nodes.len() as f64).sqrt().max(1.0);

		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let node_degree = degree.get(node.id.as_str()).copied().unwrap_or(0);
			// sqrt for softer scaling: 0.8x to 1.6x
			let size = 0.8 + 0.8 * (node_degree as f64 / max_degree as f64).sqrt();
			let color = group_colors
				.get(&node.group)
				.copied()
				.unwrap_or_else(|| theme.palette.get(0));

			let idx = graph.add_node(NodeData {
				x: (spread * angle.cos()) as f32,
				y: (spread * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					color,
					size,
				},
			});
			ids.insert(node.id.clone(), idx);
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) = (ids.get(&link.source), ids.get(&link.target)) {
				graph.add_edge(src, tgt, EdgeData::default());
				edges.push((src, tgt));
			}
		}

		Self {
			graph,
			edges,
			ids,
			search_matches: HashSet::new(),
			transform: focus::home_transform(width, height),
			drag: DragState::default(),
			pan: PanState::default(),
			highlight: HighlightState::default(),
			focus: FocusMode::Free,
			width,
			height,
		}
	}

	pub fn node_count(&self) -> usize {
		self.ids.len()
	}

	pub fn index_of(&self, id: &str) -> Option<DefaultNodeIdx> {
		self.ids.get(id).copied()
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(
		&self,
		sx: f64,
		sy: f64,
		config: &ScaleConfig,
	) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let scale = ScaledValues::new(config, self.transform.k);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let node_hit_radius = scale.hit_radius * node.data.user_data.size;
			if (dx * dx + dy * dy).sqrt() < node_hit_radius {
				found = Some(node.index());
			}
		});
		found
	}

	/// Id of the node at a simulation index.
	pub fn id_at(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut id = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				id = Some(node.data.user_data.id.clone());
			}
		});
		id
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		self.highlight.set_hover(node, &self.edges);
	}

	pub fn set_selected(&mut self, id: Option<&str>) {
		let idx = id.and_then(|id| self.index_of(id));
		self.highlight.set_selected(idx);
	}

	/// Highlight nodes whose id contains `term` (case-insensitive) and steer
	/// the view: onto the matches if there are any, otherwise back home if
	/// the view was following a previous search. Returns the match count.
	pub fn set_search(&mut self, term: &str) -> usize {
		self.search_matches = if term.is_empty() {
			HashSet::new()
		} else {
			self.ids
				.iter()
				.filter(|(id, _)| matches_search(id, term))
				.map(|(_, idx)| *idx)
				.collect()
		};
		self.highlight
			.set_search_matches(self.search_matches.clone());

		if !self.search_matches.is_empty() {
			self.focus = FocusMode::Search;
		} else if self.focus == FocusMode::Search {
			self.focus = FocusMode::Home;
		}
		self.search_matches.len()
	}

	pub fn is_search_match(&self, idx: DefaultNodeIdx) -> bool {
		self.search_matches.contains(&idx)
	}

	/// The user took over the view.
	pub fn release_focus(&mut self) {
		self.focus = FocusMode::Free;
	}

	fn search_match_positions(&self) -> Vec<(f64, f64)> {
		let mut points = Vec::with_capacity(self.search_matches.len());
		self.graph.visit_nodes(|node| {
			if self.search_matches.contains(&node.index()) {
				points.push((node.x() as f64, node.y() as f64));
			}
		});
		points
	}

	/// Shift free nodes so the centroid drifts to the world origin.
	fn apply_centering(&mut self) {
		let (mut sx, mut sy, mut n) = (0.0f64, 0.0f64, 0usize);
		self.graph.visit_nodes(|node| {
			sx += node.x() as f64;
			sy += node.y() as f64;
			n += 1;
		});
		if n == 0 {
			return;
		}
		let (shift_x, shift_y) = (
			(sx / n as f64 * CENTERING_STRENGTH) as f32,
			(sy / n as f64 * CENTERING_STRENGTH) as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if !node.data.is_anchor {
				node.data.x -= shift_x;
				node.data.y -= shift_y;
			}
		});
	}

	fn update_focus(&mut self, dt: f64) {
		match self.focus {
			FocusMode::Free => {}
			FocusMode::Search => {
				let points = self.search_match_positions();
				if let Some(target) = focus::focus_transform(&points, self.width, self.height) {
					focus::ease_toward(&mut self.transform, &target, dt);
				}
			}
			FocusMode::Home => {
				let home = focus::home_transform(self.width, self.height);
				if focus::ease_toward(&mut self.transform, &home, dt) {
					self.focus = FocusMode::Free;
				}
			}
		}
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.apply_centering();
		self.highlight.tick(dt as f64);
		self.update_focus(dt as f64);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::{GraphLink, GraphNode};

	fn data() -> GraphData {
		let node = |id: &str, group: &str| GraphNode {
			id: id.into(),
			group: group.into(),
		};
		GraphData {
			nodes: vec![
				node("Acme", "Running"),
				node("Acme Labs", "Running"),
				node("Beta", "Cycling"),
			],
			links: vec![GraphLink {
				source: "Acme".into(),
				target: "Beta".into(),
			}],
		}
	}

	fn state() -> ForceGraphState {
		ForceGraphState::new(&data(), 800.0, 600.0, &Theme::default())
	}

	#[test]
	fn nodes_coloured_by_group() {
		let state = state();
		let theme = Theme::default();
		let mut colors = HashMap::new();
		state.graph.visit_nodes(|node| {
			colors.insert(node.data.user_data.id.clone(), node.data.user_data.color);
		});
		assert_eq!(colors["Acme"], theme.palette.get(0));
		assert_eq!(colors["Acme Labs"], theme.palette.get(0));
		assert_eq!(colors["Beta"], theme.palette.get(1));
	}

	#[test]
	fn search_matches_ids_case_insensitively() {
		let mut state = state();
		assert_eq!(state.set_search("ACME"), 2);
		let acme = state.index_of("Acme").unwrap();
		let beta = state.index_of("Beta").unwrap();
		assert!(state.is_search_match(acme));
		assert!(!state.is_search_match(beta));
		assert_eq!(state.focus, FocusMode::Search);
	}

	#[test]
	fn empty_search_highlights_nothing_and_returns_home() {
		let mut state = state();
		assert_eq!(state.set_search("beta"), 1);
		assert_eq!(state.set_search(""), 0);
		assert_eq!(state.focus, FocusMode::Home);
		for _ in 0..600 {
			state.tick(0.016);
		}
		assert_eq!(state.focus, FocusMode::Free);
		assert!((state.transform.k - 1.0).abs() < 0.001);
	}

	#[test]
	fn unmatched_search_leaves_free_view_alone() {
		let mut state = state();
		state.transform.k = 3.0;
		assert_eq!(state.set_search("zzz"), 0);
		assert_eq!(state.focus, FocusMode::Free);
		state.tick(0.016);
		assert_eq!(state.transform.k, 3.0);
	}

	#[test]
	fn search_focus_zooms_in() {
		let mut state = state();
		state.set_search("beta");
		for _ in 0..300 {
			state.tick(0.016);
		}
		assert!((state.transform.k - focus::SINGLE_MATCH_ZOOM).abs() < 0.01);
	}

	#[test]
	fn search_highlight_fades_in() {
		let mut state = state();
		state.set_search("beta");
		let beta = state.index_of("Beta").unwrap();
		assert_eq!(state.highlight.search_intensity(beta), 0.0);
		for _ in 0..60 {
			state.tick(0.016);
		}
		assert!(state.highlight.search_intensity(beta) > 0.9);
	}

	#[test]
	fn hover_includes_neighbours() {
		let mut state = state();
		let acme = state.index_of("Acme").unwrap();
		let beta = state.index_of("Beta").unwrap();
		let labs = state.index_of("Acme Labs").unwrap();
		state.set_hover(Some(acme));
		for _ in 0..30 {
			state.tick(0.016);
		}
		assert!(state.highlight.node_intensity(beta) > 0.5);
		assert_eq!(state.highlight.node_intensity(labs), 0.0);
		assert!(state.highlight.ring_intensity(acme) > 0.5);
		assert_eq!(state.highlight.ring_intensity(beta), 0.0);
	}

	#[test]
	fn hover_fades_out_after_leaving() {
		let mut state = state();
		let acme = state.index_of("Acme").unwrap();
		state.set_hover(Some(acme));
		for _ in 0..30 {
			state.tick(0.016);
		}
		state.set_hover(None);
		for _ in 0..120 {
			state.tick(0.016);
		}
		assert_eq!(state.highlight.node_intensity(acme), 0.0);
	}

	#[test]
	fn selection_draws_a_ring() {
		let mut state = state();
		state.set_selected(Some("Beta"));
		for _ in 0..30 {
			state.tick(0.016);
		}
		let beta = state.index_of("Beta").unwrap();
		assert!(state.highlight.ring_intensity(beta) > 0.5);
		assert_eq!(state.id_at(beta).as_deref(), Some("Beta"));
	}

	#[test]
	fn centering_pulls_free_nodes_toward_origin() {
		let mut state = state();
		state.graph.visit_nodes_mut(|node| {
			node.data.x += 500.0;
			node.data.y -= 300.0;
		});
		for _ in 0..200 {
			state.tick(0.016);
		}
		let (mut sx, mut sy) = (0.0f64, 0.0f64);
		state.graph.visit_nodes(|node| {
			sx += node.x() as f64;
			sy += node.y() as f64;
		});
		let n = state.node_count() as f64;
		assert!((sx / n).abs() < 25.0, "centroid x = {}", sx / n);
		assert!((sy / n).abs() < 25.0, "centroid y = {}", sy / n);
	}

	#[test]
	fn click_hits_node_under_pointer() {
		let state = state();
		let config = ScaleConfig::default();
		let acme = state.index_of("Acme").unwrap();
		let mut pos = (0.0, 0.0);
		state.graph.visit_nodes(|node| {
			if node.index() == acme {
				pos = (node.x() as f64, node.y() as f64);
			}
		});
		let (sx, sy) = (
			pos.0 * state.transform.k + state.transform.x,
			pos.1 * state.transform.k + state.transform.y,
		);
		assert_eq!(state.node_at_position(sx, sy, &config), Some(acme));
	}
}
