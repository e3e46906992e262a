//! Auth session state and context for the frontend. The provider owns the
//! in-memory profile and an explicit session phase, and rehydrates the
//! session on mount and whenever the active wallet account changes. Only
//! non-sensitive profile metadata is held in memory; the raw token stays in
//! durable storage.

use crate::features::auth::{client, session, types::UserProfile};
use crate::features::wallet::state::use_wallet;
use leptos::{prelude::*, task::spawn_local};

/// Phases of the wallet-driven session machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// No wallet account is connected.
    NoWallet,
    /// A wallet is connected but no verified session exists.
    WalletNoSession,
    /// A verification exchange is in flight.
    Rehydrating,
    /// A verified profile is held for the connected account.
    SessionActive,
}

/// What the hydrator should do next, computed from observable state only so
/// the transitions stay testable off-browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HydratePlan {
    /// Nothing changes: no usable token, an exchange already in flight, or a
    /// session that is still fresh for the connected account.
    Stay,
    /// No wallet account: drop the in-memory profile, keep the durable token.
    IdleNoWallet,
    /// Wallet present but no durable token to exchange.
    IdleNoSession,
    /// Run the verification exchange for the stored token.
    Verify { id_token: String },
}

/// Decides the next hydration step.
///
/// `hydrated_for` is the wallet address the current profile was verified
/// against; an unchanged address with an active session short-circuits to
/// `Stay` so repeated hydration performs no extra network calls.
pub fn plan_hydration(
    phase: SessionPhase,
    wallet: Option<&str>,
    stored_token: Option<&str>,
    hydrated_for: Option<&str>,
) -> HydratePlan {
    let Some(address) = wallet else {
        return if phase == SessionPhase::NoWallet {
            HydratePlan::Stay
        } else {
            HydratePlan::IdleNoWallet
        };
    };

    if phase == SessionPhase::Rehydrating {
        return HydratePlan::Stay;
    }
    if phase == SessionPhase::SessionActive && hydrated_for == Some(address) {
        return HydratePlan::Stay;
    }

    match stored_token {
        Some(token) => HydratePlan::Verify {
            id_token: token.to_string(),
        },
        None => {
            if phase == SessionPhase::WalletNoSession {
                HydratePlan::Stay
            } else {
                HydratePlan::IdleNoSession
            }
        }
    }
}

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub profile: RwSignal<Option<UserProfile>>,
    pub phase: RwSignal<SessionPhase>,
    pub is_authenticated: Signal<bool>,
    hydrated_for: RwSignal<Option<String>>,
}

impl AuthContext {
    fn new() -> Self {
        let profile = RwSignal::new(None);
        let is_authenticated = Signal::derive(move || profile.get().is_some());
        Self {
            profile,
            phase: RwSignal::new(SessionPhase::NoWallet),
            is_authenticated,
            hydrated_for: RwSignal::new(None),
        }
    }

    /// Login triggers stay disabled while an exchange is in flight, so two
    /// verifications can never race to write the session.
    pub fn can_start_login(&self) -> bool {
        self.phase.get_untracked() != SessionPhase::Rehydrating
    }

    /// Installs the verified profile after a successful callback exchange.
    pub fn complete_login(&self, profile: UserProfile, wallet_address: Option<String>) {
        self.profile.set(Some(profile));
        self.hydrated_for.set(wallet_address);
        self.phase.set(SessionPhase::SessionActive);
    }

    /// Clears the durable keys and the in-memory profile.
    pub fn logout(&self, wallet_connected: bool) {
        session::clear_all();
        self.profile.set(None);
        self.hydrated_for.set(None);
        self.phase.set(if wallet_connected {
            SessionPhase::WalletNoSession
        } else {
            SessionPhase::NoWallet
        });
    }

    /// Re-establishes application identity for the given wallet account.
    /// Verification failures discard the stored token; a missing wallet only
    /// drops the in-memory profile.
    pub fn hydrate(&self, wallet: Option<&str>) {
        let plan = plan_hydration(
            self.phase.get_untracked(),
            wallet,
            session::stored_id_token().as_deref(),
            self.hydrated_for.get_untracked().as_deref(),
        );

        match plan {
            HydratePlan::Stay => {}
            HydratePlan::IdleNoWallet => {
                self.profile.set(None);
                self.hydrated_for.set(None);
                self.phase.set(SessionPhase::NoWallet);
            }
            HydratePlan::IdleNoSession => {
                self.profile.set(None);
                self.phase.set(SessionPhase::WalletNoSession);
            }
            HydratePlan::Verify { id_token } => {
                self.phase.set(SessionPhase::Rehydrating);
                let address = wallet.map(str::to_string);
                let auth = *self;
                // Teardown abandons this future; last write wins on storage.
                spawn_local(async move {
                    match client::verify_id_token(&id_token).await {
                        Ok(user) => {
                            auth.profile.set(Some(user));
                            auth.hydrated_for.set(address);
                            auth.phase.set(SessionPhase::SessionActive);
                        }
                        Err(_) => {
                            session::clear_id_token();
                            auth.profile.set(None);
                            auth.hydrated_for.set(None);
                            auth.phase.set(SessionPhase::WalletNoSession);
                        }
                    }
                });
            }
        }
    }
}

/// Provides auth context and rehydrates the session on mount and on every
/// wallet account change.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let wallet = use_wallet();
    let auth = AuthContext::new();
    provide_context(auth);

    Effect::new(move |_| {
        let account = wallet.account.get();
        auth.hydrate(account.as_ref().map(|account| account.address.as_str()));
    });

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(AuthContext::new)
}

#[cfg(test)]
mod tests {
    use super::{HydratePlan, SessionPhase, plan_hydration};

    const ADDRESS: Option<&str> = Some("0x7c3e");
    const TOKEN: Option<&str> = Some("abc.def.ghi");

    #[test]
    fn no_wallet_clears_profile_but_only_once() {
        assert_eq!(
            plan_hydration(SessionPhase::SessionActive, None, TOKEN, ADDRESS),
            HydratePlan::IdleNoWallet
        );
        assert_eq!(
            plan_hydration(SessionPhase::NoWallet, None, TOKEN, None),
            HydratePlan::Stay
        );
    }

    #[test]
    fn wallet_with_stored_token_triggers_verification() {
        assert_eq!(
            plan_hydration(SessionPhase::NoWallet, ADDRESS, TOKEN, None),
            HydratePlan::Verify {
                id_token: "abc.def.ghi".to_string()
            }
        );
    }

    #[test]
    fn wallet_without_token_goes_idle() {
        assert_eq!(
            plan_hydration(SessionPhase::NoWallet, ADDRESS, None, None),
            HydratePlan::IdleNoSession
        );
        assert_eq!(
            plan_hydration(SessionPhase::WalletNoSession, ADDRESS, None, None),
            HydratePlan::Stay
        );
    }

    #[test]
    fn fresh_session_is_idempotent() {
        // Hydrating twice with an unchanged account performs no further work.
        assert_eq!(
            plan_hydration(SessionPhase::SessionActive, ADDRESS, TOKEN, ADDRESS),
            HydratePlan::Stay
        );
    }

    #[test]
    fn switching_accounts_reverifies() {
        assert_eq!(
            plan_hydration(SessionPhase::SessionActive, Some("0x9f2a"), TOKEN, ADDRESS),
            HydratePlan::Verify {
                id_token: "abc.def.ghi".to_string()
            }
        );
    }

    #[test]
    fn inflight_exchange_suppresses_duplicates() {
        assert_eq!(
            plan_hydration(SessionPhase::Rehydrating, ADDRESS, TOKEN, None),
            HydratePlan::Stay
        );
    }
}
