//! Asset detail page with ownership and royalty facts.

use crate::components::AppShell;
use crate::features::marketplace::catalog;
use crate::routes::NotFoundContent;
use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

#[derive(Params, PartialEq, Clone)]
struct AssetParams {
    id: Option<String>,
}

#[component]
pub fn AssetDetailPage() -> impl IntoView {
    let params = use_params::<AssetParams>();
    let asset = move || {
        params
            .get()
            .ok()
            .and_then(|params| params.id)
            .and_then(|id| catalog::asset_by_id(&id))
    };

    view! {
        <AppShell>
            {move || match asset() {
                Some(asset) => view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        <div class="aspect-square overflow-hidden rounded-lg bg-gray-100 dark:bg-gray-700">
                            <img
                                src=asset.image_url
                                alt=asset.name
                                class="w-full h-full object-cover"
                            />
                        </div>
                        <div>
                            <p class="text-sm text-blue-600 dark:text-blue-400">{asset.category}</p>
                            <h1 class="mt-1 text-3xl font-bold text-gray-900 dark:text-white">
                                {asset.name}
                            </h1>
                            <p class="mt-4 text-gray-500 dark:text-gray-400">{asset.description}</p>

                            <dl class="mt-6 space-y-3">
                                <div class="flex justify-between text-sm">
                                    <dt class="text-gray-500 dark:text-gray-400">"Creator"</dt>
                                    <dd class="text-gray-900 dark:text-white">{asset.creator}</dd>
                                </div>
                                <div class="flex justify-between text-sm">
                                    <dt class="text-gray-500 dark:text-gray-400">"Owner"</dt>
                                    <dd class="text-gray-900 dark:text-white">{asset.owner}</dd>
                                </div>
                                <div class="flex justify-between text-sm">
                                    <dt class="text-gray-500 dark:text-gray-400">"Royalties"</dt>
                                    <dd class="text-gray-900 dark:text-white">
                                        {format!("{}%", asset.royalties)}
                                    </dd>
                                </div>
                            </dl>

                            <div class="mt-8 rounded-lg border border-gray-200 bg-gray-50 p-5 dark:border-gray-700 dark:bg-gray-800">
                                <p class="text-sm text-gray-500 dark:text-gray-400">
                                    "Current price"
                                </p>
                                <p class="text-2xl font-bold text-gray-900 dark:text-white">
                                    {format!("{:.2} SUI", asset.price)}
                                </p>
                            </div>
                        </div>
                    </div>
                }
                .into_any(),
                None => view! { <NotFoundContent /> }.into_any(),
            }}
        </AppShell>
    }
}
