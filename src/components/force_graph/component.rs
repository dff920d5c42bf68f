//! Leptos component wrapping the force-directed graph canvas.
//!
//! The component creates an HTML canvas element and wires up mouse/wheel event
//! handlers for node dragging, selection, panning, and zooming. An animation
//! loop runs via `requestAnimationFrame`, calling the physics simulation and
//! renderer each frame. Graph data, search term and selection are reactive:
//! a new graph rebuilds the simulation in place, keeping the loop and the
//! current view.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::render;
use super::scale::ScaleConfig;
use super::state::ForceGraphState;
use super::theme::Theme;
use super::types::GraphData;

/// Pointer travel (pixels) after which a press on a node becomes a drag.
const DRAG_THRESHOLD: f64 = 3.0;

/// Bundles graph simulation state with visual configuration.
struct GraphContext {
	state: ForceGraphState,
	scale: ScaleConfig,
	theme: Theme,
}

impl GraphContext {
	fn rebuild(&mut self, data: &GraphData, search: &str, selected: Option<&str>) {
		let mut state = ForceGraphState::new(data, self.state.width, self.state.height, &self.theme);
		state.transform = self.state.transform.clone();
		state.focus = self.state.focus;
		state.set_search(search);
		state.set_selected(selected);
		self.state = state;
	}
}

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn pointer_position(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	ev: &MouseEvent,
) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Renders an interactive force-directed graph on a canvas element.
///
/// Nodes whose id contains `search` (ignoring case) are highlighted and the
/// view eases onto them. Clicking a node reports its id via `on_select`;
/// the `selected` node gets a ring.
///
/// The component sizes itself to its parent container by default; set
/// `fullscreen = true` to fill the viewport and resize automatically with the
/// window. Explicit `width`/`height` override automatic sizing.
#[component]
pub fn ForceGraphCanvas(
	/// Graph to lay out; a new value rebuilds the simulation.
	#[prop(into)]
	data: Signal<GraphData>,
	/// Search term to highlight and focus on.
	#[prop(into, optional)]
	search: Signal<String>,
	/// Id of the node drawn with a ring.
	#[prop(into, optional)]
	selected: Signal<Option<String>>,
	/// Called with the id of a clicked node.
	#[prop(optional)]
	on_select: Option<Callback<String>>,
	/// Visual theme; defaults to [`Theme::default_theme`].
	#[prop(optional)]
	theme: Option<Theme>,
	/// Fill the viewport and follow window resizes.
	#[prop(default = false)]
	fullscreen: bool,
	/// Fixed width in pixels.
	#[prop(default = None)]
	width: Option<f64>,
	/// Fixed height in pixels.
	#[prop(default = None)]
	height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<GraphContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());
	let theme = theme.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if context_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window).unwrap_or((800.0, 600.0))
		} else {
			let parent = canvas.parent_element();
			(
				width.unwrap_or_else(|| {
					parent
						.as_ref()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					parent
						.as_ref()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("company-graph: canvas 2d context unavailable");
			return;
		};

		let theme = theme.clone();
		let mut state = ForceGraphState::new(&data.get_untracked(), w, h, &theme);
		state.set_search(&search.get_untracked());
		state.set_selected(selected.get_untracked().as_deref());
		*context_init.borrow_mut() = Some(GraphContext {
			state,
			scale: ScaleConfig::default(),
			theme,
		});

		if fullscreen {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.state.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.state.tick(0.016);
				render::render(&c.state, &ctx, &c.scale, &c.theme);
			}
			if let (Some(window), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_data = context.clone();
	Effect::new(move |_| {
		let graph = data.get();
		if let Some(ref mut c) = *context_data.borrow_mut() {
			c.rebuild(
				&graph,
				&search.get_untracked(),
				selected.get_untracked().as_deref(),
			);
			debug!(
				"company-graph: simulation rebuilt with {} nodes",
				c.state.node_count()
			);
		}
	});

	let context_search = context.clone();
	Effect::new(move |_| {
		let term = search.get();
		if let Some(ref mut c) = *context_search.borrow_mut() {
			let matches = c.state.set_search(&term);
			debug!("company-graph: {} nodes match {:?}", matches, term);
		}
	});

	let context_selected = context.clone();
	Effect::new(move |_| {
		let id = selected.get();
		if let Some(ref mut c) = *context_selected.borrow_mut() {
			c.state.set_selected(id.as_deref());
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};

		if let Some(ref mut c) = *context_md.borrow_mut() {
			if let Some(idx) = c.state.node_at_position(x, y, &c.scale) {
				c.state.drag.active = true;
				c.state.drag.moved = false;
				c.state.drag.node_idx = Some(idx);
				c.state.drag.start_x = x;
				c.state.drag.start_y = y;
				let mut start = (0.0, 0.0);
				c.state.graph.visit_nodes(|node| {
					if node.index() == idx {
						start = (node.x(), node.y());
					}
				});
				(c.state.drag.node_start_x, c.state.drag.node_start_y) = start;
			} else {
				c.state.pan.active = true;
				c.state.pan.start_x = x;
				c.state.pan.start_y = y;
				c.state.pan.transform_start_x = c.state.transform.x;
				c.state.pan.transform_start_y = c.state.transform.y;
			}
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};

		if let Some(ref mut c) = *context_mm.borrow_mut() {
			if !c.state.drag.active {
				let hovered = c.state.node_at_position(x, y, &c.scale);
				c.state.set_hover(hovered);
			}

			if c.state.drag.active {
				let (dx, dy) = (x - c.state.drag.start_x, y - c.state.drag.start_y);
				if !c.state.drag.moved && dx.hypot(dy) > DRAG_THRESHOLD {
					c.state.drag.moved = true;
					c.state.release_focus();
				}
				if let (true, Some(idx)) = (c.state.drag.moved, c.state.drag.node_idx) {
					let k = c.state.transform.k;
					let (nx, ny) = (
						c.state.drag.node_start_x + (dx / k) as f32,
						c.state.drag.node_start_y + (dy / k) as f32,
					);
					c.state.graph.visit_nodes_mut(|node| {
						if node.index() == idx {
							node.data.x = nx;
							node.data.y = ny;
							node.data.is_anchor = true;
						}
					});
				}
			} else if c.state.pan.active {
				c.state.release_focus();
				c.state.transform.x = c.state.pan.transform_start_x + (x - c.state.pan.start_x);
				c.state.transform.y = c.state.pan.transform_start_y + (y - c.state.pan.start_y);
			}
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |_: MouseEvent| {
		let clicked = match *context_mu.borrow_mut() {
			Some(ref mut c) => {
				let clicked = match (c.state.drag.active, c.state.drag.moved, c.state.drag.node_idx) {
					(true, false, Some(idx)) => c.state.id_at(idx),
					_ => None,
				};
				c.state.drag.active = false;
				c.state.drag.node_idx = None;
				c.state.pan.active = false;
				clicked
			}
			None => None,
		};
		if let (Some(id), Some(cb)) = (clicked, on_select) {
			cb.run(id);
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.drag.active = false;
			c.state.drag.node_idx = None;
			c.state.pan.active = false;
			c.state.set_hover(None);
		}
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};

		if let Some(ref mut c) = *context_wh.borrow_mut() {
			c.state.release_focus();
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			let new_k = (c.state.transform.k * factor).clamp(0.1, 10.0);
			let ratio = new_k / c.state.transform.k;
			c.state.transform.x = x - (x - c.state.transform.x) * ratio;
			c.state.transform.y = y - (y - c.state.transform.y) * ratio;
			c.state.transform.k = new_k;
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
