//! Connect-wallet dialog: provider list plus the Google zkLogin entry point.
//! Login initiation is gated on a connected wallet account and on no
//! verification exchange being in flight.

use crate::components::{Alert, AlertKind, Button, ButtonVariant};
use crate::features::auth::{login, state::use_auth, types::AuthError};
use crate::features::wallet::{provider::available_providers, state::use_wallet};
use leptos::prelude::*;

#[component]
pub fn WalletModal() -> impl IntoView {
    let wallet = use_wallet();
    let auth = use_auth();
    let (error, set_error) = signal::<Option<String>>(None);

    let on_google_signin = move |_| {
        set_error.set(None);
        if wallet.account.get_untracked().is_none() {
            set_error.set(Some(AuthError::NoWalletAvailable.to_string()));
            return;
        }
        if !auth.can_start_login() {
            return;
        }
        // start_login navigates away; control does not come back on success.
        if let Err(err) = login::start_login() {
            set_error.set(Some(err.to_string()));
        }
    };

    view! {
        <Show when=move || wallet.modal_open.get()>
            <div
                class="fixed inset-0 bg-black/70 flex items-center justify-center z-50"
                on:click=move |_| wallet.close_modal()
                role="dialog"
                aria-modal="true"
            >
                <div
                    class="bg-white dark:bg-gray-800 rounded-2xl p-8 w-full max-w-md"
                    on:click=move |event: leptos::ev::MouseEvent| event.stop_propagation()
                >
                    <h2 class="text-2xl font-bold text-center text-gray-900 dark:text-white">
                        "Connect Wallet"
                    </h2>
                    <p class="text-gray-500 dark:text-gray-400 text-center mt-2 mb-6">
                        "Choose your preferred wallet or sign in to continue."
                    </p>

                    <button
                        type="button"
                        class="w-full flex items-center justify-center gap-3 py-3 px-5 text-sm font-medium text-gray-900 bg-white border border-gray-300 rounded-lg hover:bg-gray-100 dark:bg-gray-700 dark:text-white dark:border-gray-600 dark:hover:bg-gray-600"
                        on:click=on_google_signin
                    >
                        "Sign in with Google"
                    </button>

                    <div class="flex items-center text-xs text-gray-500 dark:text-gray-400 my-4">
                        <div class="flex-grow border-t border-gray-200 dark:border-gray-600"></div>
                        <span class="mx-4">"OR CONNECT WITH A WALLET"</span>
                        <div class="flex-grow border-t border-gray-200 dark:border-gray-600"></div>
                    </div>

                    <div class="space-y-3">
                        {available_providers()
                            .iter()
                            .map(|provider| {
                                let provider = *provider;
                                let is_active = move || {
                                    wallet
                                        .account
                                        .get()
                                        .is_some_and(|account| account == provider.account())
                                };
                                view! {
                                    <div class="flex items-center p-4 rounded-lg border border-gray-200 dark:border-gray-700">
                                        <div class="w-10 h-10 rounded-full bg-gray-100 dark:bg-gray-700 flex items-center justify-center text-xs font-bold text-gray-500 dark:text-gray-300">
                                            {provider.name.chars().next().unwrap_or('?').to_string()}
                                        </div>
                                        <div class="ml-4 flex-grow">
                                            <h3 class="font-semibold text-gray-900 dark:text-white">
                                                {provider.name}
                                            </h3>
                                            <Show when=is_active>
                                                <p class="text-sm text-gray-500 dark:text-gray-400">
                                                    "Connected"
                                                </p>
                                            </Show>
                                        </div>
                                        <Show
                                            when=is_active
                                            fallback=move || {
                                                view! {
                                                    <Button
                                                        variant=ButtonVariant::Primary
                                                        on_click=move |_| wallet.connect(&provider)
                                                    >
                                                        "Connect"
                                                    </Button>
                                                }
                                            }
                                        >
                                            <Button
                                                variant=ButtonVariant::Secondary
                                                on_click=move |_| wallet.disconnect()
                                            >
                                                "Disconnect"
                                            </Button>
                                        </Show>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    {move || {
                        error
                            .get()
                            .map(|message| {
                                view! {
                                    <div class="mt-4">
                                        <Alert kind=AlertKind::Error message=message />
                                    </div>
                                }
                            })
                    }}
                </div>
            </div>
        </Show>
    }
}
