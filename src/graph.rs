//! Derivation of the company relationship graph from filtered rows.
//!
//! Nodes are companies grouped by their primary sport. Links are inferred
//! heuristically: company A is linked to company B when B's acquisition
//! history mentions A's name verbatim. The match is a plain case-sensitive
//! substring test, so a name contained in a longer name ("Nike" inside
//! "Nikelab") yields a link too. Both directions are tested on their own and
//! a mutual mention produces two links.

use crate::components::force_graph::{GraphData, GraphLink, GraphNode};
use crate::dataset::CompanyRow;

/// Primary group of a company: the trimmed text before the first comma of
/// its Main Sport Focus.
pub fn primary_group(main_sport_focus: &str) -> String {
	main_sport_focus
		.split(',')
		.next()
		.unwrap_or_default()
		.trim()
		.to_string()
}

/// Build nodes (in row order) and links for `rows`.
pub fn derive(rows: &[CompanyRow]) -> GraphData {
	let nodes = rows
		.iter()
		.map(|row| GraphNode {
			id: row.company.clone(),
			group: primary_group(&row.main_sport_focus),
		})
		.collect();

	let mut links = Vec::new();
	for mentioned in rows {
		// An empty name is a substring of everything.
		if mentioned.company.is_empty() {
			continue;
		}
		for mentioning in rows {
			if mentioning.company == mentioned.company {
				continue;
			}
			if mentioning
				.acquisition_history
				.contains(mentioned.company.as_str())
			{
				links.push(GraphLink {
					source: mentioned.company.clone(),
					target: mentioning.company.clone(),
				});
			}
		}
	}

	GraphData { nodes, links }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn row(company: &str, focus: &str, history: &str) -> CompanyRow {
		CompanyRow {
			company: company.into(),
			main_sport_focus: focus.into(),
			acquisition_history: history.into(),
			..Default::default()
		}
	}

	fn link(source: &str, target: &str) -> GraphLink {
		GraphLink {
			source: source.into(),
			target: target.into(),
		}
	}

	#[test]
	fn history_mention_creates_link() {
		let rows = [
			row("Acme", "Running", ""),
			row("Beta", "Cycling", "Beta acquired Acme in 2020"),
		];
		let graph = derive(&rows);
		assert_eq!(graph.links, [link("Acme", "Beta")]);
	}

	#[test]
	fn nodes_follow_row_order_with_primary_group() {
		let rows = [
			row("Acme", " Running , Tennis", ""),
			row("Beta", "Cycling", ""),
			row("Gamma", "", ""),
		];
		let graph = derive(&rows);
		let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
		let groups: Vec<_> = graph.nodes.iter().map(|n| n.group.as_str()).collect();
		assert_eq!(ids, ["Acme", "Beta", "Gamma"]);
		assert_eq!(groups, ["Running", "Cycling", ""]);
	}

	#[test]
	fn match_is_case_sensitive() {
		let rows = [row("Acme", "", ""), row("Beta", "", "bought ACME")];
		assert!(derive(&rows).links.is_empty());
	}

	#[test]
	fn own_name_in_history_is_not_a_self_link() {
		let rows = [row("Acme", "", "Acme merged divisions")];
		assert!(derive(&rows).links.is_empty());
	}

	#[test]
	fn mutual_mentions_keep_both_links() {
		let rows = [
			row("Acme", "", "Merged with Beta"),
			row("Beta", "", "Merged with Acme"),
		];
		assert_eq!(
			derive(&rows).links,
			[link("Acme", "Beta"), link("Beta", "Acme")]
		);
	}

	#[test]
	fn substring_names_produce_false_positive_links() {
		let rows = [
			row("Nike", "", ""),
			row("Nikelab", "", ""),
			row("Holdco", "", "Acquired Nikelab"),
		];
		let links = derive(&rows).links;
		assert!(links.contains(&link("Nike", "Holdco")));
		assert!(links.contains(&link("Nikelab", "Holdco")));
		assert_eq!(links.len(), 2);
	}

	#[test]
	fn derivation_is_deterministic() {
		let rows = [
			row("Acme", "Running", "Beta and Gamma"),
			row("Beta", "Cycling", "Acme"),
			row("Gamma", "Tennis", "Beta"),
		];
		assert_eq!(derive(&rows), derive(&rows));
	}

	#[test]
	fn no_link_has_equal_endpoints() {
		let rows = [
			row("Acme", "", "Acme Beta Gamma"),
			row("Beta", "", "Acme Beta Gamma"),
			row("Gamma", "", "Acme Beta Gamma"),
		];
		let links = derive(&rows).links;
		assert_eq!(links.len(), 6);
		assert!(links.iter().all(|l| l.source != l.target));
	}

	#[test]
	fn group_names_in_first_appearance_order() {
		let rows = [
			row("A", "Tennis", ""),
			row("B", "Golf, Tennis", ""),
			row("C", "Tennis", ""),
		];
		assert_eq!(derive(&rows).group_names(), ["Tennis", "Golf"]);
	}
}
