mod asset;
mod auth_callback;
mod clubs;
mod home;
mod marketplace;
mod not_found;
mod profile;
mod profile_setup;

pub(crate) use asset::AssetDetailPage;
pub(crate) use auth_callback::AuthCallbackPage;
pub(crate) use clubs::{ClubDetailPage, ClubsListPage};
pub(crate) use home::HomePage;
pub(crate) use marketplace::MarketplacePage;
pub(crate) use not_found::{NotFoundContent, NotFoundPage};
pub(crate) use profile::ProfilePage;
pub(crate) use profile_setup::ProfileSetupPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route constants shared by redirects and links.
pub(crate) mod paths {
    pub const HOME: &str = "/";
    pub const MARKETPLACE: &str = "/marketplace";
    pub const CLUBS: &str = "/clubs";
    pub const AUTH_CALLBACK: &str = "/auth/callback";
    pub const PROFILE: &str = "/profile";
    pub const PROFILE_SETUP: &str = "/profile/setup";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/marketplace") view=MarketplacePage />
            <Route path=path!("/clubs") view=ClubsListPage />
            <Route path=path!("/clubs/:id") view=ClubDetailPage />
            <Route path=path!("/asset/:id") view=AssetDetailPage />
            <Route path=path!("/auth/callback") view=AuthCallbackPage />
            <Route path=path!("/profile") view=ProfilePage />
            <Route path=path!("/profile/setup") view=ProfileSetupPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
