use crate::components::WalletModal;
use crate::features::auth::state::AuthProvider;
use crate::features::wallet::state::WalletProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <WalletProvider>
            <AuthProvider>
                <Router>
                    <AppRoutes />
                    <WalletModal />
                </Router>
            </AuthProvider>
        </WalletProvider>
    }
}
