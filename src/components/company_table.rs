//! Tabular list of the filtered companies.

use leptos::prelude::*;

use crate::dataset::{Column, CompanyRow};

/// Columns shown in the table; the details panel has the rest.
const TABLE_COLUMNS: [Column; 5] = [
	Column::Company,
	Column::MainSportFocus,
	Column::YearFounded,
	Column::OwnershipStatus,
	Column::Headquarters,
];

/// One row per company, in dataset order. Clicking a row reports the
/// company name through `on_select`.
#[component]
pub fn CompanyTable(
	/// Filtered rows.
	#[prop(into)]
	rows: Signal<Vec<CompanyRow>>,
	/// Name of the highlighted row.
	#[prop(into)]
	selected: Signal<Option<String>>,
	/// Called with the company name of a clicked row.
	on_select: Callback<String>,
) -> impl IntoView {
	view! {
		<section class="panel company-table">
			<h2>"Companies " <span class="count">{move || rows.with(Vec::len)}</span></h2>
			<Show
				when=move || rows.with(|r| !r.is_empty())
				fallback=|| view! { <p class="empty">"No companies match the current filters."</p> }
			>
				<table>
					<thead>
						<tr>
							{TABLE_COLUMNS
								.into_iter()
								.map(|column| view! { <th>{column.header()}</th> })
								.collect_view()}
						</tr>
					</thead>
					<tbody>
						<For
							each=move || rows.get()
							key=|row| row.company.clone()
							children=move |row: CompanyRow| {
								let name = row.company.clone();
								let is_selected = {
									let name = name.clone();
									move || selected.with(|s| s.as_deref() == Some(name.as_str()))
								};
								view! {
									<tr
										class:selected=is_selected
										on:click=move |_| on_select.run(name.clone())
									>
										{TABLE_COLUMNS
											.into_iter()
											.map(|column| view! { <td>{row.get(column).to_string()}</td> })
											.collect_view()}
									</tr>
								}
							}
						/>
					</tbody>
				</table>
			</Show>
		</section>
	}
}
