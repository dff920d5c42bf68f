//! Dataset lifecycle and the recompute pipeline feeding every view.
//!
//! The dataset moves `Idle -> Loading -> Ready | Failed` exactly once per
//! session. Only a `Ready` dataset is filtered and turned into a graph; the
//! filtered rows and graph are rebuilt from scratch on every change.

use std::sync::Arc;

use log::{debug, error};

use crate::components::force_graph::GraphData;
use crate::dataset::CompanyRow;
use crate::error::LoadError;
use crate::filter::{self, FilterState};
use crate::graph;

/// User-facing text shown for any load failure.
pub const LOAD_FAILED_MESSAGE: &str = "Could not load the company dataset.";

/// Lifecycle of the single dataset fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
	/// Nothing requested yet.
	#[default]
	Idle,
	/// Fetch in flight.
	Loading,
	/// Parsed rows, shared with every view.
	Ready(Arc<Vec<CompanyRow>>),
	/// Terminal. Holds the message shown to the user.
	Failed(String),
}

impl LoadState {
	/// Outcome of the single fetch. Errors are logged here and collapsed to
	/// one message; callers never see the error kind.
	pub fn settle(result: Result<Vec<CompanyRow>, LoadError>) -> Self {
		match result {
			Ok(rows) => LoadState::Ready(Arc::new(rows)),
			Err(err) => {
				error!("company-graph: {}", err);
				LoadState::Failed(format!("{} {}", LOAD_FAILED_MESSAGE, err))
			}
		}
	}

	/// All rows, once `Ready`.
	pub fn rows(&self) -> Option<&[CompanyRow]> {
		match self {
			LoadState::Ready(rows) => Some(rows.as_slice()),
			_ => None,
		}
	}

	/// `true` in either terminal state.
	pub fn is_settled(&self) -> bool {
		matches!(self, LoadState::Ready(_) | LoadState::Failed(_))
	}
}

/// Everything the views render for one (dataset, search, filters) triple.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardView {
	/// Rows passing search and filters, in dataset order.
	pub rows: Vec<CompanyRow>,
	/// Graph derived from `rows`.
	pub graph: GraphData,
}

/// Filter then derive the graph. `None` unless the dataset is ready.
pub fn recompute(state: &LoadState, search: &str, filters: &FilterState) -> Option<DashboardView> {
	let all = state.rows()?;
	let rows = filter::apply(all, search, filters);
	let graph = graph::derive(&rows);
	debug!(
		"company-graph: recomputed {} of {} rows, {} nodes, {} links",
		rows.len(),
		all.len(),
		graph.nodes.len(),
		graph.links.len()
	);
	Some(DashboardView { rows, graph })
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dataset::Column;
	use crate::error::ParseError;
	use crate::filter::Constraint;

	fn rows() -> Vec<CompanyRow> {
		vec![
			CompanyRow {
				company: "Acme".into(),
				main_sport_focus: "Running".into(),
				year_founded: "1990".into(),
				..Default::default()
			},
			CompanyRow {
				company: "Beta".into(),
				main_sport_focus: "Cycling".into(),
				year_founded: "1985".into(),
				acquisition_history: "Beta acquired Acme in 2020".into(),
				..Default::default()
			},
		]
	}

	#[test]
	fn transport_failure_is_terminal_with_message() {
		let state = LoadState::settle(Err(LoadError::Network {
			url: "/companies.csv".into(),
			reason: "connection refused".into(),
		}));
		assert!(state.is_settled());
		let LoadState::Failed(message) = &state else {
			panic!("expected failure, got {state:?}");
		};
		assert!(message.starts_with(LOAD_FAILED_MESSAGE));
		assert_eq!(recompute(&state, "", &FilterState::new()), None);
	}

	#[test]
	fn parse_failure_also_fails() {
		let state = LoadState::settle(Err(ParseError::MissingColumn("Company").into()));
		assert!(matches!(state, LoadState::Failed(ref m) if !m.is_empty()));
	}

	#[test]
	fn nothing_is_computed_before_ready() {
		for state in [LoadState::Idle, LoadState::Loading] {
			assert!(!state.is_settled());
			assert_eq!(recompute(&state, "", &FilterState::new()), None);
		}
	}

	#[test]
	fn ready_state_feeds_filter_and_graph() {
		let state = LoadState::settle(Ok(rows()));
		let view = recompute(&state, "", &FilterState::new()).unwrap();
		assert_eq!(view.rows.len(), 2);
		assert_eq!(view.graph.nodes.len(), 2);
		assert_eq!(view.graph.links.len(), 1);
		assert_eq!(view.graph.links[0].source, "Acme");
		assert_eq!(view.graph.links[0].target, "Beta");
	}

	#[test]
	fn filtering_drops_links_to_hidden_rows() {
		let state = LoadState::settle(Ok(rows()));
		let filters =
			FilterState::new().with(Column::YearFounded, Constraint::Range { min: 1984, max: 1986 });
		let view = recompute(&state, "", &filters).unwrap();
		assert_eq!(view.graph.nodes.len(), 1);
		assert!(view.graph.links.is_empty());
	}

	#[test]
	fn search_narrows_rows() {
		let state = LoadState::settle(Ok(rows()));
		let view = recompute(&state, "acme", &FilterState::new()).unwrap();
		assert_eq!(view.rows.len(), 1);
		assert_eq!(view.graph.nodes[0].id, "Acme");
	}
}
