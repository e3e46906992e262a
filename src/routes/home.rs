//! Landing page: hero, trending assets, and featured collections.

use crate::app_lib::theme::Theme;
use crate::components::{AppShell, AssetCard};
use crate::features::marketplace::catalog;
use crate::features::wallet::state::use_wallet;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let wallet = use_wallet();
    let trending = catalog::trending_assets();
    let collections = catalog::collections();

    view! {
        <AppShell>
            <section class="text-center py-12">
                <h1 class="text-4xl md:text-5xl font-extrabold text-gray-900 dark:text-white">
                    "Discover, collect, and trade digital art"
                </h1>
                <p class="mt-4 text-gray-500 dark:text-gray-400 max-w-xl mx-auto">
                    "SuiCollect is a home for curated NFTs, artist clubs, and the collectors who love them."
                </p>
                <div class="mt-6 flex items-center justify-center gap-4">
                    <A
                        href="/marketplace"
                        {..}
                        class="px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
                    >
                        "Browse Marketplace"
                    </A>
                    <Show when=move || !wallet.is_connected.get()>
                        <button
                            type="button"
                            class="px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-300 rounded-lg hover:bg-gray-100 dark:bg-gray-800 dark:text-white dark:border-gray-600 dark:hover:bg-gray-700"
                            on:click=move |_| wallet.open_modal()
                        >
                            "Connect Wallet"
                        </button>
                    </Show>
                </div>
            </section>

            <section class="mt-8">
                <h2 class=Theme::SECTION_TITLE>"Trending Assets"</h2>
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4 mt-4">
                    {trending
                        .into_iter()
                        .map(|asset| view! { <AssetCard asset /> })
                        .collect_view()}
                </div>
            </section>

            <section class="mt-12">
                <h2 class=Theme::SECTION_TITLE>"Featured Collections"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 mt-4">
                    {collections
                        .into_iter()
                        .map(|collection| {
                            view! {
                                <div class=Theme::CARD>
                                    <div class="aspect-video overflow-hidden bg-gray-100 dark:bg-gray-700">
                                        <img
                                            src=collection.image_url
                                            alt=collection.name
                                            class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-300"
                                            loading="lazy"
                                        />
                                    </div>
                                    <div class="p-4">
                                        <h3 class="font-semibold text-gray-900 dark:text-white">
                                            {collection.name}
                                        </h3>
                                        <p class="text-sm text-gray-500 dark:text-gray-400 mt-1">
                                            {collection.description}
                                        </p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </AppShell>
    }
}
