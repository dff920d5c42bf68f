//! company-graph: an interactive dashboard over a CSV dataset of sports
//! companies.
//!
//! The dataset is fetched once at startup and parsed into [`CompanyRow`]s.
//! A search term and per-column filters narrow it down; the remaining rows
//! feed a table, a details panel and a force-directed graph whose links
//! connect companies that mention each other in their acquisition history.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use log::{Level, info, warn};

pub mod components;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod graph;

pub use components::force_graph::{ForceGraphCanvas, GraphData, GraphLink, GraphNode, Theme};
pub use config::DashboardConfig;
pub use dashboard::{DashboardView, LoadState};
pub use dataset::{Column, CompanyRow};
pub use error::{LoadError, ParseError};
pub use filter::{Constraint, FilterState};

use components::{CompanyDetails, CompanyTable, FilterPanel, GraphSummary};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("company-graph: logging initialized");
}

fn resolve_theme(name: &str) -> Theme {
	Theme::by_name(name).unwrap_or_else(|| {
		warn!("company-graph: unknown theme {:?}, using default", name);
		Theme::default()
	})
}

/// Main application component.
/// Fetches the dataset and lays out the filter, graph and table panels.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = DashboardConfig::load();
	let theme = resolve_theme(&config.theme);
	let palette = theme.palette.clone();
	let theme_name = theme.name;

	let load_state = RwSignal::new(LoadState::Idle);
	let search = RwSignal::new(String::new());
	let filters = RwSignal::new(FilterState::new());
	let selected = RwSignal::new(None::<String>);

	let url = config.data_url();
	load_state.set(LoadState::Loading);
	spawn_local(async move {
		load_state.set(LoadState::settle(dataset::load(&url).await));
	});

	let view_model = Memo::new(move |_| {
		load_state.with(|state| {
			search.with(|term| filters.with(|f| dashboard::recompute(state, term, f)))
		})
	});
	let graph = Memo::new(move |_| {
		view_model.with(|v| v.as_ref().map(|v| v.graph.clone()).unwrap_or_default())
	});
	let rows = Memo::new(move |_| {
		view_model.with(|v| v.as_ref().map(|v| v.rows.clone()).unwrap_or_default())
	});
	let all_rows = Signal::derive(move || {
		load_state.with(|state| match state {
			LoadState::Ready(rows) => rows.clone(),
			_ => Arc::default(),
		})
	});
	let total = Signal::derive(move || all_rows.with(|rows| rows.len()));
	let selected_row = Signal::derive(move || {
		selected.with(|id| {
			let id = id.as_deref()?;
			all_rows.with(|rows| rows.iter().find(|row| row.company == id).cloned())
		})
	});
	let on_select = Callback::new(move |id: String| selected.set(Some(id)));

	let title = config.title.clone();
	let ready = move || {
		let theme = theme.clone();
		let palette = palette.clone();
		view! {
			<div class="dashboard">
				<aside class="sidebar">
					<FilterPanel rows=all_rows search filters />
					<GraphSummary graph total palette />
				</aside>
				<main class="content">
					<div class="graph-panel">
						<ForceGraphCanvas
							data=graph
							search=search
							selected=selected
							on_select=on_select
							theme=theme
						/>
					</div>
					<div class="lower">
						<CompanyTable rows selected on_select />
						<CompanyDetails company=selected_row />
					</div>
				</main>
			</div>
		}
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=theme_name />
		<Title text=title.clone() />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<header class="app-header">
			<h1>{title}</h1>
			<p class="subtitle">"Click a node or row for details. Scroll to zoom. Drag background to pan."</p>
		</header>
		{move || match load_state.get() {
			LoadState::Idle | LoadState::Loading => {
				view! { <p class="status loading">"Loading companies..."</p> }.into_any()
			}
			LoadState::Failed(message) => {
				view! { <p class="status error" role="alert">{message}</p> }.into_any()
			}
			LoadState::Ready(_) => ready().into_any(),
		}}
	}
}
