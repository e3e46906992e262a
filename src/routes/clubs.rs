//! Club browsing: the list of communities and a detail page with members and
//! featured assets.

use crate::app_lib::theme::Theme;
use crate::components::{AppShell, AssetCard};
use crate::features::marketplace::catalog;
use crate::features::marketplace::types::Club;
use crate::routes::NotFoundContent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

#[component]
pub fn ClubsListPage() -> impl IntoView {
    let clubs = catalog::clubs();

    view! {
        <AppShell>
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Clubs"</h1>
            <p class="mt-1 text-gray-500 dark:text-gray-400">
                "Communities of artists and collectors."
            </p>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 mt-6">
                {clubs
                    .into_iter()
                    .map(|club| view! { <ClubCard club /> })
                    .collect_view()}
            </div>
        </AppShell>
    }
}

#[component]
fn ClubCard(club: Club) -> impl IntoView {
    let href = format!("/clubs/{}", club.id);

    view! {
        <A href={href} {..} class=Theme::CARD>
            <div class="aspect-video overflow-hidden bg-gray-100 dark:bg-gray-700">
                <img
                    src=club.image_url
                    alt=club.name
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-300"
                    loading="lazy"
                />
            </div>
            <div class="p-4">
                <h3 class="text-lg font-bold text-gray-900 dark:text-white truncate">
                    {club.name}
                </h3>
                <p class="text-sm text-gray-500 dark:text-gray-400 mt-1">{club.description}</p>
                <p class="text-sm text-gray-500 dark:text-gray-400 mt-4">
                    {format!("{} Members", club.member_count)}
                </p>
            </div>
        </A>
    }
}

#[derive(Params, PartialEq, Clone)]
struct ClubParams {
    id: Option<String>,
}

#[component]
pub fn ClubDetailPage() -> impl IntoView {
    let params = use_params::<ClubParams>();
    let club = move || {
        params
            .get()
            .ok()
            .and_then(|params| params.id)
            .and_then(|id| catalog::club(&id))
    };

    view! {
        <AppShell>
            {move || match club() {
                Some(club) => {
                    let featured: Vec<_> = club
                        .featured_asset_ids
                        .iter()
                        .filter_map(|id| catalog::asset_by_id(id))
                        .collect();
                    view! {
                        <div>
                            <div class="aspect-[3/1] overflow-hidden rounded-lg bg-gray-100 dark:bg-gray-700">
                                <img
                                    src=club.image_url
                                    alt=club.name
                                    class="w-full h-full object-cover"
                                />
                            </div>
                            <h1 class="mt-6 text-3xl font-bold text-gray-900 dark:text-white">
                                {club.name}
                            </h1>
                            <p class="mt-2 text-gray-500 dark:text-gray-400">{club.description}</p>
                            <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                                {format!("{} Members", club.member_count)}
                            </p>

                            <h2 class="mt-8 text-xl font-semibold text-gray-900 dark:text-white">
                                "Members"
                            </h2>
                            <div class="flex gap-4 mt-3">
                                {club
                                    .members
                                    .into_iter()
                                    .map(|member| {
                                        view! {
                                            <div class="flex items-center gap-2">
                                                <img
                                                    src=member.avatar_url
                                                    alt=member.name
                                                    class="w-8 h-8 rounded-full"
                                                />
                                                <span class="text-sm text-gray-900 dark:text-white">
                                                    {member.name}
                                                </span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            <h2 class="mt-8 text-xl font-semibold text-gray-900 dark:text-white">
                                "Featured Assets"
                            </h2>
                            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mt-3">
                                {featured
                                    .into_iter()
                                    .map(|asset| view! { <AssetCard asset /> })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                        .into_any()
                }
                None => view! { <NotFoundContent /> }.into_any(),
            }}
        </AppShell>
    }
}
