//! Profile page for the connected wallet: owned assets, created assets, and
//! a recent activity feed. Without a connected wallet it prompts for
//! connection instead of rendering an empty shell.

use crate::components::{Alert, AlertKind, AppShell, AssetCard, Button};
use crate::features::auth::state::use_auth;
use crate::features::marketplace::catalog;
use crate::features::marketplace::types::Asset;
use crate::features::wallet::{provider::short_address, state::use_wallet};
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ProfileTab {
    Owned,
    Created,
    Activity,
}

impl ProfileTab {
    const ALL: [ProfileTab; 3] = [ProfileTab::Owned, ProfileTab::Created, ProfileTab::Activity];

    fn label(self) -> &'static str {
        match self {
            ProfileTab::Owned => "Owned",
            ProfileTab::Created => "Created",
            ProfileTab::Activity => "Activity",
        }
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let wallet = use_wallet();
    let auth = use_auth();
    let (tab, set_tab) = signal(ProfileTab::Owned);

    let display_name = move || {
        auth.profile
            .get()
            .map(|profile| profile.display_name)
            .or_else(|| {
                wallet
                    .account
                    .get()
                    .map(|account| short_address(&account.address))
            })
            .unwrap_or_default()
    };
    let email = move || auth.profile.get().map(|profile| profile.email);
    let avatar_url = move || auth.profile.get().and_then(|profile| profile.avatar_url);

    view! {
        <AppShell>
            <Show
                when=move || wallet.is_connected.get()
                fallback=move || {
                    view! {
                        <div class="max-w-lg mx-auto mt-10 text-center">
                            <Alert
                                kind=AlertKind::Info
                                message="Connect a wallet to view your profile.".to_string()
                            />
                            <div class="mt-4">
                                <Button on_click=move |_| wallet.open_modal()>
                                    "Connect Wallet"
                                </Button>
                            </div>
                        </div>
                    }
                }
            >
                <div class="flex items-center gap-4">
                    {move || {
                        avatar_url()
                            .map(|url| {
                                view! {
                                    <img
                                        src=url
                                        alt="Avatar"
                                        class="w-16 h-16 rounded-full object-cover"
                                    />
                                }
                            })
                    }}
                    <div>
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            {display_name}
                        </h1>
                        {move || {
                            email()
                                .map(|address| {
                                    view! {
                                        <p class="text-sm text-gray-500 dark:text-gray-400">
                                            {address}
                                        </p>
                                    }
                                })
                        }}
                    </div>
                    <div class="ml-auto">
                        <A
                            href="/profile/setup"
                            {..}
                            class="text-sm font-medium text-blue-700 hover:underline dark:text-blue-400"
                        >
                            "Set up profile"
                        </A>
                    </div>
                </div>

                <div class="mt-8 flex gap-2">
                    {ProfileTab::ALL
                        .into_iter()
                        .map(|option| {
                            let class = move || {
                                if tab.get() == option {
                                    "px-4 py-2 text-sm font-medium rounded-lg bg-blue-700 text-white"
                                } else {
                                    "px-4 py-2 text-sm font-medium rounded-lg text-gray-500 hover:bg-gray-100 dark:hover:bg-gray-700"
                                }
                            };
                            view! {
                                <button
                                    type="button"
                                    class=class
                                    on:click=move |_| set_tab.set(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="mt-6">
                    {move || match tab.get() {
                        ProfileTab::Owned => asset_grid(catalog::owned_assets()).into_any(),
                        ProfileTab::Created => asset_grid(catalog::created_assets()).into_any(),
                        ProfileTab::Activity => activity_list().into_any(),
                    }}
                </div>
            </Show>
        </AppShell>
    }
}

fn asset_grid(assets: Vec<Asset>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">
            {assets
                .into_iter()
                .map(|asset| view! { <AssetCard asset /> })
                .collect_view()}
        </div>
    }
}

fn activity_list() -> impl IntoView {
    view! {
        <ul class="space-y-3">
            {catalog::activity_feed()
                .into_iter()
                .map(|item| {
                    view! {
                        <li class="flex items-center justify-between bg-gray-50 dark:bg-gray-900/50 p-3 rounded-lg border border-gray-200 dark:border-gray-700">
                            <div class="flex items-center gap-3">
                                <img
                                    src=item.asset_image_url
                                    alt=item.asset_name
                                    class="w-10 h-10 rounded"
                                />
                                <div>
                                    <p class="text-sm text-gray-900 dark:text-white">
                                        <span class="font-semibold">{item.user}</span>
                                        " "
                                        {item.action}
                                        " "
                                        <span class="font-semibold">{item.asset_name}</span>
                                    </p>
                                    <p class="text-xs text-gray-500 dark:text-gray-400">
                                        {item.timestamp}
                                    </p>
                                </div>
                            </div>
                            {item
                                .price
                                .map(|price| {
                                    view! {
                                        <span class="text-sm font-medium text-gray-900 dark:text-white">
                                            {format!("{price:.2} SUI")}
                                        </span>
                                    }
                                })}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
