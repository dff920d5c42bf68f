//! Error types for loading the company dataset.

use thiserror::Error;

/// Failure while turning CSV text into company rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	/// The CSV reader rejected the input (bad quoting, ragged row, bad UTF-8).
	#[error("malformed CSV at line {line}: {reason}")]
	Malformed {
		/// 1-based line, counting the header.
		line: u64,
		/// Reader's description of the problem.
		reason: String,
	},
	/// A required header is absent from the first line.
	#[error("missing column `{0}`")]
	MissingColumn(&'static str),
	/// A data row has an empty `Company` value.
	#[error("empty company name at line {line}")]
	EmptyCompany {
		/// 1-based line, counting the header.
		line: u64,
	},
	/// Two data rows share the same `Company` value.
	#[error("duplicate company `{name}` at line {line}")]
	DuplicateCompany {
		/// The repeated name, as written on the later line.
		name: String,
		/// Line of the second occurrence.
		line: u64,
	},
}

impl From<csv::Error> for ParseError {
	fn from(err: csv::Error) -> Self {
		let line = err.position().map(|p| p.line()).unwrap_or(0);
		ParseError::Malformed {
			line,
			reason: err.to_string(),
		}
	}
}

/// Failure of the one-shot dataset fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
	/// Transport failure or a non-2xx response.
	#[error("failed to fetch {url}: {reason}")]
	Network {
		/// Requested URL.
		url: String,
		/// Transport error text or the HTTP status line.
		reason: String,
	},
	/// The body arrived but is not a valid dataset.
	#[error(transparent)]
	Parse(#[from] ParseError),
}
