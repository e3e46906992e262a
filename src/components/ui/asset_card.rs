use crate::app_lib::theme::Theme;
use crate::features::marketplace::types::Asset;
use leptos::prelude::*;
use leptos_router::components::A;

/// Tile linking to an asset's detail page.
#[component]
pub fn AssetCard(asset: Asset) -> impl IntoView {
    let href = format!("/asset/{}", asset.id);

    view! {
        <A href={href} {..} class=Theme::CARD>
            <div class="aspect-square overflow-hidden bg-gray-100 dark:bg-gray-700">
                <img
                    src=asset.image_url
                    alt=asset.name
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-300"
                    loading="lazy"
                />
            </div>
            <div class="p-4">
                <h3 class="font-semibold text-gray-900 dark:text-white truncate">{asset.name}</h3>
                <p class="text-sm text-gray-500 dark:text-gray-400 mt-1">"by " {asset.creator}</p>
                <p class="text-sm font-medium text-gray-900 dark:text-white mt-2">
                    {format!("{:.2} SUI", asset.price)}
                </p>
            </div>
        </A>
    }
}
