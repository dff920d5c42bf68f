//! Force-directed graph visualization component.
//!
//! Renders an interactive force-directed graph on an HTML canvas with:
//! - Physics-based node positioning via force simulation, pulled toward
//!   the canvas midpoint
//! - Pan, zoom, node dragging and click-to-select
//! - Search highlighting with automatic focus on the matches
//! - Configurable theming and visual scaling
//!
//! # Example
//!
//! ```ignore
//! use company_graph::{ForceGraphCanvas, GraphData, GraphNode, GraphLink};
//!
//! let data = GraphData {
//!     nodes: vec![
//!         GraphNode { id: "Acme".into(), group: "Running".into() },
//!         GraphNode { id: "Beta".into(), group: "Cycling".into() },
//!     ],
//!     links: vec![
//!         GraphLink { source: "Acme".into(), target: "Beta".into() },
//!     ],
//! };
//!
//! view! { <ForceGraphCanvas data=data search=search /> }
//! ```

mod component;
mod focus;
mod render;
pub mod scale;
mod state;
pub mod theme;
mod types;

pub use component::ForceGraphCanvas;
pub use theme::Theme;
pub use types::{GraphData, GraphLink, GraphNode};
