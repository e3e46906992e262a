//! Marketplace browse page: search, category, and price filters over the
//! listed catalog. Filtering itself lives in the catalog module so the
//! predicates stay testable.

use crate::app_lib::theme::Theme;
use crate::components::{AppShell, AssetCard};
use crate::features::marketplace::catalog::{self, PriceBand};
use leptos::prelude::*;

#[component]
pub fn MarketplacePage() -> impl IntoView {
    let assets = StoredValue::new(catalog::marketplace_assets());
    let category_options = assets.with_value(|list| catalog::categories(list));

    let (query, set_query) = signal(String::new());
    let (category, set_category) = signal("All".to_string());
    let (band, set_band) = signal(PriceBand::All);

    let filtered = move || {
        assets.with_value(|list| {
            catalog::filter_assets(list, &query.get(), &category.get(), band.get())
        })
    };

    view! {
        <AppShell>
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Marketplace"</h1>

            <div class="mt-4 flex flex-col md:flex-row gap-3 md:items-center">
                <input
                    id="asset_search"
                    type="search"
                    class=Theme::INPUT
                    placeholder="Search by name or creator"
                    on:input=move |event| set_query.set(event_target_value(&event))
                />
                <select
                    id="category_filter"
                    class=Theme::INPUT
                    on:change=move |event| set_category.set(event_target_value(&event))
                >
                    {category_options
                        .iter()
                        .map(|option| {
                            let option = *option;
                            view! { <option value=option>{option}</option> }
                        })
                        .collect_view()}
                </select>
                <select
                    id="price_filter"
                    class=Theme::INPUT
                    on:change=move |event| {
                        set_band.set(PriceBand::from_label(&event_target_value(&event)))
                    }
                >
                    {PriceBand::ALL
                        .into_iter()
                        .map(|option| {
                            view! { <option value=option.label()>{option.label()}</option> }
                        })
                        .collect_view()}
                </select>
            </div>

            {move || {
                let hits = filtered();
                if hits.is_empty() {
                    view! {
                        <p class="mt-8 text-gray-500 dark:text-gray-400">
                            "No assets match your filters."
                        </p>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-4 mt-6">
                            {hits
                                .into_iter()
                                .map(|asset| view! { <AssetCard asset /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </AppShell>
    }
}
