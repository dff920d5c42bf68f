//! Deployment configuration.
//!
//! The page may embed a `<script id="dashboard-config" type="application/json">`
//! element to override the defaults; this is how a build served under a
//! subpath points the loader at the right CSV location.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

/// DOM id of the optional JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Compile-time base path, set by the build for subpath deployments.
const BUILD_BASE_PATH: Option<&str> = option_env!("COMPANY_GRAPH_BASE_PATH");

/// Where the dataset lives and how the page looks.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
	/// Path prefix the app is served from (`/` or e.g. `/atlas`).
	pub base_path: String,
	/// CSV file name relative to `base_path`.
	pub data_file: String,
	/// Name of a [`crate::components::force_graph::Theme`] preset.
	pub theme: String,
	/// Page heading and document title.
	pub title: String,
}

impl Default for DashboardConfig {
	fn default() -> Self {
		Self {
			base_path: BUILD_BASE_PATH.unwrap_or("/").to_string(),
			data_file: "companies.csv".to_string(),
			theme: "default".to_string(),
			title: "Sports Company Atlas".to_string(),
		}
	}
}

impl DashboardConfig {
	/// Parse a config object; absent keys keep their defaults.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Read the config element from the current document, falling back to
	/// defaults when it is absent or unreadable.
	pub fn load() -> Self {
		let Some(text) = config_element_text() else {
			return Self::default();
		};
		match Self::from_json(&text) {
			Ok(config) => {
				info!("company-graph: config loaded from #{}", CONFIG_ELEMENT_ID);
				config
			}
			Err(e) => {
				warn!("company-graph: ignoring malformed config: {}", e);
				Self::default()
			}
		}
	}

	/// URL of the dataset: base path and file joined by exactly one `/`.
	pub fn data_url(&self) -> String {
		let base = self.base_path.trim_end_matches('/');
		let file = self.data_file.trim_start_matches('/');
		if base.is_empty() || base.starts_with('/') || base.contains("://") {
			format!("{}/{}", base, file)
		} else {
			format!("/{}/{}", base, file)
		}
	}
}

fn config_element_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn with_base(base: &str) -> DashboardConfig {
		DashboardConfig {
			base_path: base.into(),
			..DashboardConfig::default()
		}
	}

	#[test]
	fn data_url_at_root() {
		assert_eq!(with_base("/").data_url(), "/companies.csv");
		assert_eq!(with_base("").data_url(), "/companies.csv");
	}

	#[test]
	fn data_url_under_subpath() {
		assert_eq!(with_base("/atlas").data_url(), "/atlas/companies.csv");
		assert_eq!(with_base("/atlas/").data_url(), "/atlas/companies.csv");
		assert_eq!(with_base("atlas").data_url(), "/atlas/companies.csv");
	}

	#[test]
	fn data_url_keeps_absolute_origin() {
		assert_eq!(
			with_base("https://cdn.example.com/data/").data_url(),
			"https://cdn.example.com/data/companies.csv"
		);
	}

	#[test]
	fn partial_json_keeps_other_defaults() {
		let config = DashboardConfig::from_json(r#"{"basePath": "/atlas", "theme": "daylight"}"#).unwrap();
		assert_eq!(config.base_path, "/atlas");
		assert_eq!(config.theme, "daylight");
		assert_eq!(config.data_file, "companies.csv");
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(DashboardConfig::from_json("{basePath:").is_err());
	}
}
