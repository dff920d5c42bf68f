//! Every field of the selected company.

use leptos::prelude::*;

use crate::dataset::{Column, CompanyRow};

const MISSING: &str = "n/a";

/// All nine fields of `company`, with `n/a` for blanks, or a hint when
/// nothing is selected.
#[component]
pub fn CompanyDetails(
	/// Selected company, if any.
	#[prop(into)]
	company: Signal<Option<CompanyRow>>,
) -> impl IntoView {
	view! {
		<section class="panel company-details">
			{move || match company.get() {
				Some(row) => view! {
					<h2>{row.company.clone()}</h2>
					<dl>
						{Column::ALL
							.into_iter()
							.map(|column| {
								let value = match row.get(column) {
									"" => MISSING.to_string(),
									v => v.to_string(),
								};
								view! {
									<dt>{column.header()}</dt>
									<dd>{value}</dd>
								}
							})
							.collect_view()}
					</dl>
				}
				.into_any(),
				None => view! {
					<h2>"Details"</h2>
					<p class="hint">"Select a company in the graph or the table."</p>
				}
				.into_any(),
			}}
		</section>
	}
}
