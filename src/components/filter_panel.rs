//! Search box and per-column filter controls.

use std::sync::Arc;

use leptos::prelude::*;

use crate::dataset::{Column, CompanyRow};
use crate::filter::{self, Constraint, FilterState};

/// Columns offered as exact-match dropdowns.
pub const DROPDOWN_COLUMNS: [Column; 4] = [
	Column::MainSportFocus,
	Column::OwnershipStatus,
	Column::Headquarters,
	Column::MainManufacturing,
];

#[derive(Clone, Copy)]
enum Side {
	Min,
	Max,
}

/// Search input, one dropdown per [`DROPDOWN_COLUMNS`] entry, a Year Founded
/// range and a reset button. Options come from the full dataset so that a
/// selection never removes its own alternatives.
#[component]
pub fn FilterPanel(
	/// Full dataset, source of the dropdown options.
	#[prop(into)]
	rows: Signal<Arc<Vec<CompanyRow>>>,
	/// Free-text search term.
	search: RwSignal<String>,
	/// Per-column constraints.
	filters: RwSignal<FilterState>,
) -> impl IntoView {
	let active = move || filters.with(|f| f.iter().count());
	let reset = move |_| {
		search.set(String::new());
		filters.set(FilterState::new());
	};

	view! {
		<section class="panel filters">
			<h2>"Filters"</h2>
			<input
				type="search"
				class="search"
				placeholder="Search company, sport or HQ"
				prop:value=move || search.get()
				on:input=move |ev| search.set(event_target_value(&ev))
			/>
			{DROPDOWN_COLUMNS
				.into_iter()
				.map(|column| view! { <ColumnSelect column rows filters /> })
				.collect_view()}
			<YearRange rows filters />
			<button class="reset" on:click=reset>
				"Reset"
				{move || match active() {
					0 => String::new(),
					n => format!(" ({n})"),
				}}
			</button>
		</section>
	}
}

#[component]
fn ColumnSelect(
	column: Column,
	rows: Signal<Arc<Vec<CompanyRow>>>,
	filters: RwSignal<FilterState>,
) -> impl IntoView {
	let options = Memo::new(move |_| rows.with(|rows| filter::distinct_values(rows, column)));
	let current = Signal::derive(move || {
		filters.with(|f| match f.get(column) {
			Some(Constraint::Exact(value)) => value.clone(),
			_ => String::new(),
		})
	});
	let on_change = move |ev| {
		let value = event_target_value(&ev);
		filters.update(|f| {
			if value.is_empty() {
				f.clear(column);
			} else {
				f.set(column, Constraint::Exact(value));
			}
		});
	};

	view! {
		<label class="filter-field">
			<span>{column.header()}</span>
			<select on:change=on_change>
				<option value="" selected=move || current.get().is_empty()>
					"All"
				</option>
				<For
					each=move || options.get()
					key=|value| value.clone()
					children=move |value: String| {
						let label = value.clone();
						let is_current = {
							let value = value.clone();
							move || current.get() == value
						};
						view! {
							<option value=value selected=is_current>
								{label}
							</option>
						}
					}
				/>
			</select>
		</label>
	}
}

#[component]
fn YearRange(rows: Signal<Arc<Vec<CompanyRow>>>, filters: RwSignal<FilterState>) -> impl IntoView {
	let bounds = Memo::new(move |_| rows.with(|rows| filter::year_bounds(rows)));
	let sides = Signal::derive(move || {
		filters.with(|f| filter::year_constraint_sides(f.get(Column::YearFounded)))
	});
	let update = move |side: Side, raw: String| {
		let typed = raw.trim().parse::<i32>().ok();
		filters.update(|f| {
			let (min, max) = filter::year_constraint_sides(f.get(Column::YearFounded));
			let (min, max) = match side {
				Side::Min => (typed, max),
				Side::Max => (min, typed),
			};
			match filter::year_constraint(min, max) {
				Some(constraint) => f.set(Column::YearFounded, constraint),
				None => f.clear(Column::YearFounded),
			}
		});
	};
	let shown = move |value: Option<i32>| value.map(|v| v.to_string()).unwrap_or_default();
	let hint = move |pick: fn((i32, i32)) -> i32| {
		bounds.get().map(|b| pick(b).to_string()).unwrap_or_default()
	};

	view! {
		<fieldset class="filter-field year-range">
			<legend>{Column::YearFounded.header()}</legend>
			<input
				type="number"
				placeholder=move || hint(|b| b.0)
				prop:value=move || shown(sides.get().0)
				on:change=move |ev| update(Side::Min, event_target_value(&ev))
			/>
			<span>"to"</span>
			<input
				type="number"
				placeholder=move || hint(|b| b.1)
				prop:value=move || shown(sides.get().1)
				on:change=move |ev| update(Side::Max, event_target_value(&ev))
			/>
		</fieldset>
	}
}
