//! Row model for the company CSV.

use serde::Deserialize;

/// The fixed set of dataset columns, in header order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
	/// Company name; the row key.
	Company,
	/// Comma-separated sports, primary first.
	MainSportFocus,
	/// Founding year as written, usually a four-digit number.
	YearFounded,
	/// Free-text revenue or valuation summary.
	Financials,
	/// Public, private, subsidiary and so on.
	OwnershipStatus,
	/// City and country of the head office.
	Headquarters,
	/// Main production country.
	MainManufacturing,
	/// Environmental & Sustainability Policies.
	SustainabilityPolicies,
	/// Free text naming acquired or acquiring companies.
	AcquisitionHistory,
}

impl Column {
	/// Every column in the order it appears in the CSV header.
	pub const ALL: [Column; 9] = [
		Column::Company,
		Column::MainSportFocus,
		Column::YearFounded,
		Column::Financials,
		Column::OwnershipStatus,
		Column::Headquarters,
		Column::MainManufacturing,
		Column::SustainabilityPolicies,
		Column::AcquisitionHistory,
	];

	/// Exact header text for this column.
	pub const fn header(self) -> &'static str {
		match self {
			Column::Company => "Company",
			Column::MainSportFocus => "Main Sport Focus",
			Column::YearFounded => "Year Founded",
			Column::Financials => "Financials",
			Column::OwnershipStatus => "Ownership Status",
			Column::Headquarters => "Headquarters",
			Column::MainManufacturing => "Main Manufacturing",
			Column::SustainabilityPolicies => "Environmental & Sustainability Policies",
			Column::AcquisitionHistory => "Acquisition History",
		}
	}
}

/// One company record. Every field holds the raw CSV text; only `company`
/// is guaranteed non-empty (and unique) once the loader has validated it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CompanyRow {
	/// Unique, non-empty name.
	#[serde(rename = "Company")]
	pub company: String,
	/// See [`Column::MainSportFocus`].
	#[serde(rename = "Main Sport Focus")]
	pub main_sport_focus: String,
	/// See [`CompanyRow::founded_year`] for the parsed form.
	#[serde(rename = "Year Founded")]
	pub year_founded: String,
	/// See [`Column::Financials`].
	#[serde(rename = "Financials")]
	pub financials: String,
	/// See [`Column::OwnershipStatus`].
	#[serde(rename = "Ownership Status")]
	pub ownership_status: String,
	/// See [`Column::Headquarters`].
	#[serde(rename = "Headquarters")]
	pub headquarters: String,
	/// See [`Column::MainManufacturing`].
	#[serde(rename = "Main Manufacturing")]
	pub main_manufacturing: String,
	/// See [`Column::SustainabilityPolicies`].
	#[serde(rename = "Environmental & Sustainability Policies")]
	pub sustainability_policies: String,
	/// Text searched for other companies' names when deriving links.
	#[serde(rename = "Acquisition History")]
	pub acquisition_history: String,
}

impl CompanyRow {
	/// Raw value of `column` for this row.
	pub fn get(&self, column: Column) -> &str {
		match column {
			Column::Company => &self.company,
			Column::MainSportFocus => &self.main_sport_focus,
			Column::YearFounded => &self.year_founded,
			Column::Financials => &self.financials,
			Column::OwnershipStatus => &self.ownership_status,
			Column::Headquarters => &self.headquarters,
			Column::MainManufacturing => &self.main_manufacturing,
			Column::SustainabilityPolicies => &self.sustainability_policies,
			Column::AcquisitionHistory => &self.acquisition_history,
		}
	}

	/// Year Founded as an integer, if the raw value parses.
	pub fn founded_year(&self) -> Option<i32> {
		self.year_founded.trim().parse().ok()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn get_reads_every_column() {
		let row = CompanyRow {
			company: "Acme".into(),
			acquisition_history: "none".into(),
			sustainability_policies: "recycled fibres".into(),
			..Default::default()
		};
		assert_eq!(row.get(Column::Company), "Acme");
		assert_eq!(row.get(Column::AcquisitionHistory), "none");
		assert_eq!(row.get(Column::SustainabilityPolicies), "recycled fibres");
		assert_eq!(row.get(Column::Headquarters), "");
	}

	#[test]
	fn founded_year_tolerates_padding_only() {
		let mut row = CompanyRow {
			year_founded: " 1990 ".into(),
			..Default::default()
		};
		assert_eq!(row.founded_year(), Some(1990));
		row.year_founded = "c. 1990".into();
		assert_eq!(row.founded_year(), None);
		row.year_founded = String::new();
		assert_eq!(row.founded_year(), None);
	}
}
