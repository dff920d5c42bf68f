//! Graph data structures for input to the force graph component.

/// A node in the graph: one company.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphNode {
	/// Unique identifier, also drawn as the node label.
	pub id: String,
	/// Cluster name used for palette colouring (e.g., "Running").
	pub group: String,
}

/// An edge between two nodes, drawn without direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphLink {
	/// ID of the node whose name was found.
	pub source: String,
	/// ID of the node whose text mentions `source`.
	pub target: String,
}

/// Complete graph data: nodes and links.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphData {
	/// One node per company.
	pub nodes: Vec<GraphNode>,
	/// Links between node ids; may repeat a pair in both directions.
	pub links: Vec<GraphLink>,
}

impl GraphData {
	/// Distinct node groups in order of first appearance.
	pub fn group_names(&self) -> Vec<&str> {
		let mut groups: Vec<&str> = Vec::new();
		for node in &self.nodes {
			if !groups.contains(&node.group.as_str()) {
				groups.push(&node.group);
			}
		}
		groups
	}
}
