//! Fetching and parsing the company CSV.

use std::collections::HashSet;

use gloo_net::http::Request;
use log::{debug, info};

use super::row::{Column, CompanyRow};
use crate::error::{LoadError, ParseError};

/// Parse CSV text whose first line is the header row.
///
/// Headers are trimmed, values are kept exactly as written. Extra columns
/// are ignored; missing ones are an error, as are ragged rows and rows that
/// break the unique, non-empty `Company` invariant. Uniqueness ignores
/// surrounding whitespace, so `Acme` and `Acme ` collide.
pub fn parse_csv(text: &str) -> Result<Vec<CompanyRow>, ParseError> {
	let mut reader = csv::ReaderBuilder::new()
		.has_headers(true)
		.trim(csv::Trim::Headers)
		.from_reader(text.as_bytes());

	let headers = reader.headers()?.clone();
	if let Some(missing) = Column::ALL
		.iter()
		.find(|column| !headers.iter().any(|h| h == column.header()))
	{
		return Err(ParseError::MissingColumn(missing.header()));
	}

	let mut seen = HashSet::new();
	let mut rows = Vec::new();
	for record in reader.records() {
		let record = record?;
		let line = record.position().map(|p| p.line()).unwrap_or(0);
		let row: CompanyRow = record.deserialize(Some(&headers))?;

		if row.company.trim().is_empty() {
			return Err(ParseError::EmptyCompany { line });
		}
		if !seen.insert(row.company.trim().to_string()) {
			return Err(ParseError::DuplicateCompany {
				name: row.company,
				line,
			});
		}
		rows.push(row);
	}

	debug!("company-graph: parsed {} rows", rows.len());
	Ok(rows)
}

/// Fetch the dataset from `url` and parse it. Single attempt, no retry.
pub async fn load(url: &str) -> Result<Vec<CompanyRow>, LoadError> {
	let network = |reason: String| LoadError::Network {
		url: url.to_string(),
		reason,
	};

	let response = Request::get(url)
		.send()
		.await
		.map_err(|e| network(e.to_string()))?;
	if !response.ok() {
		return Err(network(format!(
			"HTTP {} {}",
			response.status(),
			response.status_text()
		)));
	}
	let text = response.text().await.map_err(|e| network(e.to_string()))?;

	let rows = parse_csv(&text)?;
	info!("company-graph: loaded {} companies from {}", rows.len(), url);
	Ok(rows)
}
