//! Wallet connection state shared through Leptos. The context tracks the
//! active account and the connect-dialog visibility; connecting persists the
//! address so the account survives a reload, disconnecting removes it while
//! leaving any stored identity token for a later reconnect.

use crate::features::auth::session;
use crate::features::wallet::provider::{WalletAccount, WalletProviderInfo};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct WalletContext {
    pub account: RwSignal<Option<WalletAccount>>,
    pub modal_open: RwSignal<bool>,
    pub is_connected: Signal<bool>,
}

impl WalletContext {
    fn new() -> Self {
        let account = RwSignal::new(None);
        let is_connected = Signal::derive(move || account.get().is_some());
        Self {
            account,
            modal_open: RwSignal::new(false),
            is_connected,
        }
    }

    pub fn connect(&self, provider: &WalletProviderInfo) {
        let connected = provider.account();
        session::set_wallet_address(&connected.address);
        self.account.set(Some(connected));
    }

    pub fn disconnect(&self) {
        session::clear_wallet_address();
        self.account.set(None);
    }

    pub fn open_modal(&self) {
        self.modal_open.set(true);
    }

    pub fn close_modal(&self) {
        self.modal_open.set(false);
    }

    /// Restores the last-connected account from durable storage, if any.
    fn auto_connect(&self) {
        if let Some(address) = session::wallet_address() {
            self.account.set(Some(WalletAccount { address }));
        }
    }
}

/// Provides wallet context and reconnects the previous account on mount.
#[component]
pub fn WalletProvider(children: Children) -> impl IntoView {
    let wallet = WalletContext::new();
    wallet.auto_connect();
    provide_context(wallet);

    view! { {children()} }
}

/// Returns the current wallet context or a fallback empty context.
pub fn use_wallet() -> WalletContext {
    use_context::<WalletContext>().unwrap_or_else(WalletContext::new)
}
