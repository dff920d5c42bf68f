//! Node and link counts plus a colour legend for sport groups.

use leptos::prelude::*;

use super::force_graph::GraphData;
use super::force_graph::theme::NodePalette;

/// Counts for the current graph and one legend entry per sport group,
/// coloured the same way the canvas colours them.
#[component]
pub fn GraphSummary(
	/// Graph currently on the canvas.
	#[prop(into)]
	graph: Signal<GraphData>,
	/// Size of the unfiltered dataset.
	#[prop(into)]
	total: Signal<usize>,
	/// Palette of the active theme.
	palette: NodePalette,
) -> impl IntoView {
	let legend = Memo::new(move |_| {
		graph.with(|g| {
			let groups = g.group_names();
			let colors = palette.assign(&groups);
			groups
				.into_iter()
				.filter_map(|name| colors.get(name).map(|c| (name.to_string(), c.to_css())))
				.collect::<Vec<_>>()
		})
	});

	view! {
		<section class="panel graph-summary">
			<p class="counts">
				{move || {
					graph.with(|g| {
						format!(
							"{} of {} companies, {} acquisition links",
							g.nodes.len(),
							total.get(),
							g.links.len(),
						)
					})
				}}
			</p>
			<ul class="legend">
				<For
					each=move || legend.get()
					key=|(name, _)| name.clone()
					children=|(name, color): (String, String)| {
						view! {
							<li>
								<span class="swatch" style:background-color=color></span>
								{if name.is_empty() { "Unspecified".to_string() } else { name }}
							</li>
						}
					}
				/>
			</ul>
		</section>
	}
}
