//! Search and per-column filtering over the loaded rows.
//!
//! [`apply`] is the single entry point used by every view: it keeps the rows
//! that pass both the free-text search stage and every active column
//! constraint, preserving input order.

use std::collections::BTreeMap;

use crate::dataset::{Column, CompanyRow};

/// Columns the free-text search looks at.
pub const SEARCH_COLUMNS: [Column; 3] = [
	Column::Company,
	Column::MainSportFocus,
	Column::Headquarters,
];

/// A constraint on a single column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Constraint {
	/// Raw value must equal this string. An empty string constrains nothing.
	Exact(String),
	/// Value must parse as an integer within `min..=max`.
	Range {
		/// Inclusive lower bound.
		min: i32,
		/// Inclusive upper bound.
		max: i32,
	},
}

impl Constraint {
	fn admits(&self, value: &str) -> bool {
		match self {
			Constraint::Exact(expected) => expected.is_empty() || value == expected,
			Constraint::Range { min, max } => value
				.trim()
				.parse::<i32>()
				.is_ok_and(|year| (*min..=*max).contains(&year)),
		}
	}
}

/// Active per-column constraints. A column with no entry is unconstrained.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
	constraints: BTreeMap<Column, Constraint>,
}

impl FilterState {
	/// No constraints.
	pub fn new() -> Self {
		Self::default()
	}

	/// Constrain `column`, replacing any earlier constraint on it.
	pub fn set(&mut self, column: Column, constraint: Constraint) {
		self.constraints.insert(column, constraint);
	}

	/// Drop the constraint on `column`, if any.
	pub fn clear(&mut self, column: Column) {
		self.constraints.remove(&column);
	}

	/// Constraint currently set on `column`.
	pub fn get(&self, column: Column) -> Option<&Constraint> {
		self.constraints.get(&column)
	}

	/// `true` when no column is constrained.
	pub fn is_empty(&self) -> bool {
		self.constraints.is_empty()
	}

	/// Active constraints in column order.
	pub fn iter(&self) -> impl Iterator<Item = (Column, &Constraint)> {
		self.constraints.iter().map(|(c, k)| (*c, k))
	}

	/// Builder-style [`FilterState::set`].
	pub fn with(mut self, column: Column, constraint: Constraint) -> Self {
		self.set(column, constraint);
		self
	}

	fn admits(&self, row: &CompanyRow) -> bool {
		self.constraints
			.iter()
			.all(|(column, constraint)| constraint.admits(row.get(*column)))
	}
}

/// Case-insensitive containment. An empty term matches everything.
pub fn matches_search(haystack: &str, term: &str) -> bool {
	term.is_empty() || haystack.to_lowercase().contains(&term.to_lowercase())
}

fn passes_search(row: &CompanyRow, needle: &str) -> bool {
	needle.is_empty()
		|| SEARCH_COLUMNS
			.iter()
			.any(|column| row.get(*column).to_lowercase().contains(needle))
}

/// Rows passing the search stage and every constraint, in input order.
pub fn apply(rows: &[CompanyRow], search: &str, filters: &FilterState) -> Vec<CompanyRow> {
	let needle = search.to_lowercase();
	rows.iter()
		.filter(|row| passes_search(row, &needle) && filters.admits(row))
		.cloned()
		.collect()
}

/// Sorted distinct non-empty values of `column`, for dropdown options.
pub fn distinct_values(rows: &[CompanyRow], column: Column) -> Vec<String> {
	let mut values: Vec<String> = rows
		.iter()
		.map(|row| row.get(column))
		.filter(|v| !v.is_empty())
		.map(str::to_string)
		.collect();
	values.sort();
	values.dedup();
	values
}

/// Smallest and largest parseable Year Founded, if any row has one.
pub fn year_bounds(rows: &[CompanyRow]) -> Option<(i32, i32)> {
	rows.iter()
		.filter_map(CompanyRow::founded_year)
		.fold(None, |bounds, year| match bounds {
			None => Some((year, year)),
			Some((lo, hi)) => Some((lo.min(year), hi.max(year))),
		})
}

/// Range constraint from optional year bounds typed by the user. An open
/// side is unbounded; with both sides open there is no constraint.
pub fn year_constraint(min: Option<i32>, max: Option<i32>) -> Option<Constraint> {
	if min.is_none() && max.is_none() {
		return None;
	}
	Some(Constraint::Range {
		min: min.unwrap_or(i32::MIN),
		max: max.unwrap_or(i32::MAX),
	})
}

/// Inverse of [`year_constraint`]: the user-set sides of a range.
pub fn year_constraint_sides(constraint: Option<&Constraint>) -> (Option<i32>, Option<i32>) {
	match constraint {
		Some(Constraint::Range { min, max }) => (
			Some(*min).filter(|v| *v != i32::MIN),
			Some(*max).filter(|v| *v != i32::MAX),
		),
		_ => (None, None),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn row(company: &str, focus: &str, year: &str, hq: &str) -> CompanyRow {
		CompanyRow {
			company: company.into(),
			main_sport_focus: focus.into(),
			year_founded: year.into(),
			headquarters: hq.into(),
			..Default::default()
		}
	}

	fn sample() -> Vec<CompanyRow> {
		vec![
			row("Acme", "Running, Tennis", "1990", "Portland"),
			row("Beta", "Cycling", "1985", "Berlin"),
			row("Gamma", "Tennis", "2000", "Tokyo"),
			row("Delta", "Golf", "unknown", "Austin"),
		]
	}

	fn names(rows: &[CompanyRow]) -> Vec<&str> {
		rows.iter().map(|r| r.company.as_str()).collect()
	}

	#[test]
	fn empty_search_and_filters_is_identity() {
		let rows = sample();
		assert_eq!(apply(&rows, "", &FilterState::new()), rows);
	}

	#[test]
	fn unmatched_search_yields_nothing() {
		assert!(apply(&sample(), "zzz-no-match", &FilterState::new()).is_empty());
	}

	#[test]
	fn search_is_case_insensitive_over_company_focus_and_hq() {
		let rows = sample();
		assert_eq!(names(&apply(&rows, "acme", &FilterState::new())), ["Acme"]);
		assert_eq!(
			names(&apply(&rows, "TENNIS", &FilterState::new())),
			["Acme", "Gamma"]
		);
		assert_eq!(names(&apply(&rows, "berl", &FilterState::new())), ["Beta"]);
	}

	#[test]
	fn search_ignores_other_columns() {
		let mut rows = sample();
		rows[1].acquisition_history = "Bought Acme".into();
		rows[1].financials = "acme money".into();
		assert_eq!(names(&apply(&rows, "acme", &FilterState::new())), ["Acme"]);
	}

	#[test]
	fn year_range_is_inclusive_at_both_bounds() {
		let filters =
			FilterState::new().with(Column::YearFounded, Constraint::Range { min: 1990, max: 2000 });
		assert_eq!(names(&apply(&sample(), "", &filters)), ["Acme", "Gamma"]);
	}

	#[test]
	fn year_range_excludes_before_min() {
		let filters =
			FilterState::new().with(Column::YearFounded, Constraint::Range { min: 1990, max: 2000 });
		let kept = apply(&[row("Old", "", "1985", ""), row("New", "", "1990", "")], "", &filters);
		assert_eq!(names(&kept), ["New"]);
	}

	#[test]
	fn unparseable_year_is_excluded_by_any_range() {
		let filters = FilterState::new().with(
			Column::YearFounded,
			Constraint::Range {
				min: i32::MIN,
				max: i32::MAX,
			},
		);
		let kept = apply(&sample(), "delta", &filters);
		assert!(kept.is_empty());
	}

	#[test]
	fn exact_constraint_compares_raw_value() {
		let filters =
			FilterState::new().with(Column::Headquarters, Constraint::Exact("Tokyo".into()));
		assert_eq!(names(&apply(&sample(), "", &filters)), ["Gamma"]);

		let filters =
			FilterState::new().with(Column::Headquarters, Constraint::Exact("tokyo".into()));
		assert!(apply(&sample(), "", &filters).is_empty());
	}

	#[test]
	fn empty_exact_constraint_is_unset() {
		let filters = FilterState::new().with(Column::OwnershipStatus, Constraint::Exact(String::new()));
		assert_eq!(apply(&sample(), "", &filters), sample());
	}

	#[test]
	fn search_and_filters_combine() {
		let filters =
			FilterState::new().with(Column::YearFounded, Constraint::Range { min: 1995, max: 2010 });
		assert_eq!(names(&apply(&sample(), "tennis", &filters)), ["Gamma"]);
	}

	#[test]
	fn apply_is_idempotent() {
		let filters =
			FilterState::new().with(Column::YearFounded, Constraint::Range { min: 1980, max: 1995 });
		let once = apply(&sample(), "a", &filters);
		assert_eq!(apply(&once, "a", &filters), once);
	}

	#[test]
	fn clearing_a_column_removes_its_constraint() {
		let mut filters =
			FilterState::new().with(Column::Headquarters, Constraint::Exact("Tokyo".into()));
		filters.clear(Column::Headquarters);
		assert!(filters.is_empty());
		assert_eq!(filters.get(Column::Headquarters), None);
	}

	#[test]
	fn matches_search_folds_case() {
		assert!(matches_search("Acme Corp", "ACME"));
		assert!(matches_search("Acme Corp", ""));
		assert!(!matches_search("Acme Corp", "beta"));
	}

	#[test]
	fn distinct_values_are_sorted_and_skip_empty() {
		let mut rows = sample();
		rows.push(row("Epsilon", "Golf", "", ""));
		assert_eq!(
			distinct_values(&rows, Column::MainSportFocus),
			["Cycling", "Golf", "Running, Tennis", "Tennis"]
		);
		assert_eq!(
			distinct_values(&rows, Column::Headquarters),
			["Austin", "Berlin", "Portland", "Tokyo"]
		);
	}

	#[test]
	fn year_bounds_skip_unparseable() {
		assert_eq!(year_bounds(&sample()), Some((1985, 2000)));
		assert_eq!(year_bounds(&[row("X", "", "n/a", "")]), None);
	}

	#[test]
	fn year_constraint_leaves_open_sides_unbounded() {
		assert_eq!(year_constraint(None, None), None);
		let lower = year_constraint(Some(1990), None).unwrap();
		assert_eq!(
			lower,
			Constraint::Range {
				min: 1990,
				max: i32::MAX
			}
		);
		assert_eq!(year_constraint_sides(Some(&lower)), (Some(1990), None));

		let filters = FilterState::new().with(Column::YearFounded, lower);
		assert_eq!(names(&apply(&sample(), "", &filters)), ["Acme", "Gamma"]);
	}

	#[test]
	fn exact_constraint_has_no_year_sides() {
		let exact = Constraint::Exact("1990".into());
		assert_eq!(year_constraint_sides(Some(&exact)), (None, None));
		assert_eq!(year_constraint_sides(None), (None, None));
	}
}
