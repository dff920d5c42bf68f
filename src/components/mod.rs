//! UI components: the graph canvas and the dashboard panels around it.

pub mod company_details;
pub mod company_table;
pub mod filter_panel;
pub mod force_graph;
pub mod graph_summary;

pub use company_details::CompanyDetails;
pub use company_table::CompanyTable;
pub use filter_panel::FilterPanel;
pub use graph_summary::GraphSummary;
