//! Multi-step profile creation wizard. The draft outlives the step state, so
//! moving back never loses entered data; each step validates before the next
//! one becomes reachable, and review re-validates everything before the
//! draft is submitted.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Button, ButtonVariant, Spinner};
use crate::features::auth::session;
use crate::features::profile::types::ProfileDraft;
use crate::features::profile::wizard::{WizardStep, validate_step};
use crate::features::profile::client;
use crate::features::wallet::state::use_wallet;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn ProfileSetupPage() -> impl IntoView {
    let navigate = use_navigate();
    let wallet = use_wallet();
    let draft = RwSignal::new(ProfileDraft::default());
    let (step, set_step) = signal(WizardStep::BasicInfo);
    let (error, set_error) = signal::<Option<String>>(None);

    // Prefill the wallet address from the connected account, falling back to
    // the durable key from a previous visit.
    let prefill = wallet
        .account
        .get_untracked()
        .map(|account| account.address)
        .or_else(session::wallet_address);
    if let Some(address) = prefill {
        draft.update(|value| value.wallet_address = address);
    }

    let submit_action = Action::new_local(move |value: &ProfileDraft| {
        let value = value.clone();
        async move { client::register_profile(&value).await }
    });

    Effect::new(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(()) => navigate(paths::PROFILE, Default::default()),
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let on_next = move |_| {
        let current = step.get_untracked();
        match validate_step(current, &draft.get_untracked()) {
            Ok(()) => {
                set_error.set(None);
                if let Some(next) = current.next() {
                    set_step.set(next);
                }
            }
            Err(message) => set_error.set(Some(message)),
        }
    };

    let on_back = move |_| {
        if let Some(previous) = step.get_untracked().back() {
            set_step.set(previous);
            set_error.set(None);
        }
    };

    let on_submit = move |_| {
        let value = draft.get_untracked();
        match validate_step(WizardStep::Review, &value) {
            Ok(()) => {
                set_error.set(None);
                submit_action.dispatch(value);
            }
            Err(message) => set_error.set(Some(message)),
        }
    };

    view! {
        <AppShell>
            <div class="max-w-2xl mx-auto">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Create your profile"
                </h1>

                <ol class="mt-8 mb-10 flex items-center justify-between">
                    {WizardStep::ALL
                        .into_iter()
                        .map(|marker| {
                            let reached = move || step.get().number() >= marker.number();
                            view! {
                                <li class="flex flex-col items-center flex-1">
                                    <div
                                        class="flex items-center justify-center w-10 h-10 rounded-full border-2 text-sm font-semibold transition-colors"
                                        class:bg-blue-700=reached
                                        class:border-blue-700=reached
                                        class:text-white=reached
                                        class:border-gray-300=move || !reached()
                                        class:text-gray-500=move || !reached()
                                    >
                                        {marker.number()}
                                    </div>
                                    <span class="mt-2 text-xs font-medium text-gray-500 dark:text-gray-400">
                                        {marker.title()}
                                    </span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>

                <Show when=move || step.get() == WizardStep::BasicInfo>
                    <div class="space-y-5">
                        <TextField
                            id="name"
                            label="Full name"
                            placeholder="Emily Nguyen"
                            value=Signal::derive(move || draft.with(|value| value.name.clone()))
                            on_input=Callback::new(move |text: String| {
                                draft.update(|value| value.name = text)
                            })
                        />
                        <TextField
                            id="email"
                            label="Email"
                            input_type="email"
                            placeholder="name@inbox.im"
                            value=Signal::derive(move || draft.with(|value| value.email.clone()))
                            on_input=Callback::new(move |text: String| {
                                draft.update(|value| value.email = text)
                            })
                        />
                        <TextField
                            id="username"
                            label="Username"
                            placeholder="emily_nguyen"
                            value=Signal::derive(move || draft.with(|value| value.username.clone()))
                            on_input=Callback::new(move |text: String| {
                                draft.update(|value| value.username = text)
                            })
                        />
                    </div>
                </Show>

                <Show when=move || step.get() == WizardStep::ProfileDetails>
                    <div class="space-y-5">
                        <TextField
                            id="profession"
                            label="Profession"
                            placeholder="Digital artist"
                            value=Signal::derive(move || {
                                draft.with(|value| value.profession.clone())
                            })
                            on_input=Callback::new(move |text: String| {
                                draft.update(|value| value.profession = text)
                            })
                        />
                        <div>
                            <label class=Theme::LABEL for="bio">
                                "Bio"
                            </label>
                            <textarea
                                id="bio"
                                class=Theme::INPUT
                                rows="4"
                                placeholder="Tell collectors about yourself"
                                prop:value=move || draft.with(|value| value.bio.clone())
                                on:input=move |event| {
                                    draft.update(|value| value.bio = event_target_value(&event))
                                }
                            ></textarea>
                        </div>
                    </div>
                </Show>

                <Show when=move || step.get() == WizardStep::SocialLinks>
                    <div class="space-y-5">
                        <TextField
                            id="social_twitter"
                            label="Twitter"
                            placeholder="@handle"
                            value=Signal::derive(move || {
                                draft.with(|value| value.social_twitter.clone())
                            })
                            on_input=Callback::new(move |text: String| {
                                draft.update(|value| value.social_twitter = text)
                            })
                        />
                        <TextField
                            id="social_discord"
                            label="Discord"
                            placeholder="username"
                            value=Signal::derive(move || {
                                draft.with(|value| value.social_discord.clone())
                            })
                            on_input=Callback::new(move |text: String| {
                                draft.update(|value| value.social_discord = text)
                            })
                        />
                        <TextField
                            id="social_website"
                            label="Website"
                            placeholder="https://your.site"
                            value=Signal::derive(move || {
                                draft.with(|value| value.social_website.clone())
                            })
                            on_input=Callback::new(move |text: String| {
                                draft.update(|value| value.social_website = text)
                            })
                        />
                    </div>
                </Show>

                <Show when=move || step.get() == WizardStep::Review>
                    <div class="rounded-lg border border-gray-200 bg-white p-5 dark:border-gray-700 dark:bg-gray-800">
                        <h2 class="text-sm font-semibold text-gray-900 dark:text-white">
                            "Review your details"
                        </h2>
                        <dl class="mt-4 space-y-2">
                            {move || {
                                let value = draft.get();
                                [
                                    ("Full name", value.name),
                                    ("Email", value.email),
                                    ("Username", value.username),
                                    ("Wallet address", value.wallet_address),
                                    ("Profession", value.profession),
                                    ("Bio", value.bio),
                                    ("Twitter", value.social_twitter),
                                    ("Discord", value.social_discord),
                                    ("Website", value.social_website),
                                ]
                                    .into_iter()
                                    .map(|(label, entry)| {
                                        view! {
                                            <div class="flex justify-between gap-4 text-sm">
                                                <dt class="text-gray-500 dark:text-gray-400">
                                                    {label}
                                                </dt>
                                                <dd class="text-gray-900 dark:text-white text-right break-all">
                                                    {entry}
                                                </dd>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </dl>
                    </div>
                </Show>

                <div class="mt-8 flex items-center justify-between">
                    <div>
                        <Show when=move || step.get().back().is_some()>
                            <Button variant=ButtonVariant::Secondary on_click=on_back>
                                "Back"
                            </Button>
                        </Show>
                    </div>
                    <Show
                        when=move || step.get() == WizardStep::Review
                        fallback=move || view! { <Button on_click=on_next>"Next"</Button> }
                    >
                        <Button disabled=submit_action.pending() on_click=on_submit>
                            "Create Profile"
                        </Button>
                    </Show>
                </div>

                {move || {
                    submit_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
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
        </AppShell>
    }
}

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");

    view! {
        <div>
            <label class=Theme::LABEL for=id>
                {label}
            </label>
            <input
                id=id
                type=input_type
                class=Theme::INPUT
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |event| on_input.run(event_target_value(&event))
            />
        </div>
    }
}
