//! Shared layout wrapper with navigation and content container. It
//! centralizes header markup, the mobile menu toggle, and the wallet/session
//! affordances so routes can focus on content.

use crate::app_lib::build_info::git_commit_hash;
use crate::features::auth::state::use_auth;
use crate::features::wallet::{provider::short_address, state::use_wallet};
use leptos::prelude::*;
use leptos_router::components::A;

const NAV_LINK: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0 dark:text-white md:dark:hover:text-blue-500 dark:hover:bg-gray-700 md:dark:hover:bg-transparent";

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let wallet = use_wallet();
    let auth = use_auth();

    let account_label = move || {
        wallet
            .account
            .get()
            .map(|account| short_address(&account.address))
            .unwrap_or_default()
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:border-gray-700 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href="/"
                        {..}
                        class="flex items-center space-x-3"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <span class="text-2xl font-extrabold text-gray-900 dark:text-white">
                            "SuiCollect"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <svg
                            class="w-5 h-5"
                            aria-hidden="true"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 17 14"
                        >
                            <path
                                stroke="currentColor"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M1 1h15M1 7h15M1 13h15"
                            ></path>
                        </svg>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 rounded-lg md:flex-row md:items-center md:space-x-8 md:mt-0 dark:bg-gray-900">
                            <li>
                                <A
                                    href="/marketplace"
                                    {..}
                                    class=NAV_LINK
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    "Marketplace"
                                </A>
                            </li>
                            <li>
                                <A
                                    href="/clubs"
                                    {..}
                                    class=NAV_LINK
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    "Clubs"
                                </A>
                            </li>
                            <li>
                                <Show
                                    when=move || wallet.is_connected.get()
                                    fallback=move || {
                                        view! {
                                            <button
                                                type="button"
                                                class=NAV_LINK
                                                on:click=move |_| {
                                                    wallet.open_modal();
                                                    set_menu_open.set(false);
                                                }
                                            >
                                                "Connect Wallet"
                                            </button>
                                        }
                                    }
                                >
                                    <A
                                        href="/profile"
                                        {..}
                                        class=NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {account_label}
                                    </A>
                                </Show>
                            </li>
                            <li>
                                <Show
                                    when=move || auth.is_authenticated.get()
                                    fallback=move || {
                                        view! {
                                            <Show when=move || wallet.is_connected.get()>
                                                <button
                                                    type="button"
                                                    class=NAV_LINK
                                                    on:click=move |_| {
                                                        wallet.open_modal();
                                                        set_menu_open.set(false);
                                                    }
                                                >
                                                    "Sign In"
                                                </button>
                                            </Show>
                                        }
                                    }
                                >
                                    <button
                                        type="button"
                                        class=NAV_LINK
                                        on:click=move |_| {
                                            auth.logout(wallet.account.get_untracked().is_some());
                                            set_menu_open.set(false);
                                        }
                                    >
                                        "Sign Out"
                                    </button>
                                </Show>
                            </li>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
            <footer class="border-t border-gray-200 dark:border-gray-700">
                <p class="max-w-screen-xl mx-auto p-4 text-xs text-gray-500 dark:text-gray-400">
                    "SuiCollect " {env!("CARGO_PKG_VERSION")} " · " {git_commit_hash()}
                </p>
            </footer>
        </div>
    }
}
