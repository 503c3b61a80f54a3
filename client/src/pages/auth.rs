//! Auth page: sign-in / sign-up card over a rotating promo background.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthController` decides; this page wires it to the browser. Submissions
//! run in `spawn_local` tasks and their `Effect`s are applied here (session
//! write, delayed navigation, alert). The panel swap is settled by each
//! panel's own `transitionend`, and the carousel task stops on cleanup.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::components::alert_banner::{AlertBanner, show_alert};
use crate::components::social_button::SocialButton;
use crate::config::AuthConfig;
use crate::net::types::{LoginRequest, Provider, SignupRequest};
use crate::state::alert::{Alert, AlertSlot};
use crate::state::auth::{AuthController, AuthMode, Effect, FormKind, FormPhase, SubmitError, Submission};
use crate::state::carousel::Carousel;
use crate::state::session::{BrowserStorage, KeyValueStore, Session};
use crate::util::browser::set_href_after;

fn login_button_label(phase: FormPhase) -> &'static str {
    match phase {
        FormPhase::Submitting(_) => "Signing In...",
        FormPhase::Succeeded => "Success! Redirecting...",
        FormPhase::Idle | FormPhase::Failed => "Sign In",
    }
}

fn signup_button_label(phase: FormPhase) -> &'static str {
    match phase {
        FormPhase::Submitting(_) => "Creating Account...",
        _ => "Create Account",
    }
}

/// Perform the effects of a settled submission, in order.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn apply_effects<S: KeyValueStore>(effects: Vec<Effect>, session: &Session<S>, alerts: RwSignal<AlertSlot>) {
    for effect in effects {
        match effect {
            Effect::StoreToken(token) => {
                session.store_token(&token);
            }
            Effect::Navigate { url, delay } => set_href_after(url, delay),
            Effect::ShowAlert(alert) => show_alert(alerts, alert),
        }
    }
}

fn submit_login(
    submission: Submission,
    request: LoginRequest,
    config: AuthConfig,
    session: Session<BrowserStorage>,
    controller: RwSignal<AuthController>,
    alerts: RwSignal<AlertSlot>,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::login(&config, &request).await;
        let page_url = crate::util::browser::current_href();
        let effects = controller
            .try_update(|c| c.finish_login(submission, outcome, &config, &page_url))
            .unwrap_or_default();
        apply_effects(effects, &session, alerts);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (submission, request, config, session, controller, alerts);
}

fn submit_signup(
    submission: Submission,
    request: SignupRequest,
    config: AuthConfig,
    session: Session<BrowserStorage>,
    controller: RwSignal<AuthController>,
    alerts: RwSignal<AlertSlot>,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::signup(&config, &request).await;
        let effects = controller.try_update(|c| c.finish_signup(submission, outcome)).unwrap_or_default();
        apply_effects(effects, &session, alerts);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (submission, request, config, session, controller, alerts);
}

fn report_refusal(alerts: RwSignal<AlertSlot>, err: SubmitError) {
    // Busy is already visible as the disabled button.
    if let SubmitError::Invalid(invalid) = err {
        show_alert(alerts, Alert::error(invalid.to_string()));
    }
}

/// Settle the panel swap when `panel` itself (not a descendant) finishes
/// its transition.
fn on_panel_transition_end(ev: &leptos::ev::TransitionEvent, controller: RwSignal<AuthController>, panel: AuthMode) {
    if ev.target() != ev.current_target() {
        return;
    }
    controller.update(|c| {
        c.panel.settle(panel);
    });
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let config = expect_context::<AuthConfig>();
    let session = expect_context::<Session<BrowserStorage>>();

    let controller = RwSignal::new(AuthController::default());
    let alerts = RwSignal::new(AlertSlot::default());
    let carousel = RwSignal::new(Carousel::default());

    let login_email = RwSignal::new(String::new());
    let login_password = RwSignal::new(String::new());
    let signup_name = RwSignal::new(String::new());
    let signup_email = RwSignal::new(String::new());
    let signup_password = RwSignal::new(String::new());
    let signup_confirm = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(crate::config::CAROUSEL_INTERVAL).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                carousel.try_update(Carousel::advance);
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_login = {
        let config = config.clone();
        let session = session.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let email = login_email.get_untracked();
            let password = login_password.get_untracked();
            let Some(begun) = controller.try_update(|c| c.begin_login(&email, &password)) else {
                return;
            };
            match begun {
                Ok((submission, request)) => {
                    submit_login(submission, request, config.clone(), session.clone(), controller, alerts);
                }
                Err(err) => report_refusal(alerts, err),
            }
        }
    };

    let on_signup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = signup_name.get_untracked();
        let email = signup_email.get_untracked();
        let password = signup_password.get_untracked();
        let confirm = signup_confirm.get_untracked();
        let Some(begun) = controller.try_update(|c| c.begin_signup(&name, &email, &password, &confirm)) else {
            return;
        };
        match begun {
            Ok((submission, request)) => {
                submit_signup(submission, request, config.clone(), session.clone(), controller, alerts);
            }
            Err(err) => report_refusal(alerts, err),
        }
    };

    let toggle = move |_: leptos::ev::MouseEvent| controller.update(|c| c.panel.toggle());
    let is_active = move |panel: AuthMode| controller.with(|c| c.panel.active() == panel);
    let is_animating = move |panel: AuthMode| controller.with(|c| c.panel.is_animating(panel));
    let phase = move |form: FormKind| controller.with(|c| c.phase(form));

    view! {
        <div class="auth-body">
            <div class="auth-carousel" aria-live="polite">
                {move || {
                    carousel
                        .with(|c| c.current())
                        .map(|slide| {
                            view! {
                                <div class="auth-carousel__slide">
                                    <h3>{slide.title}</h3>
                                    <p>{slide.caption}</p>
                                </div>
                            }
                        })
                }}
                <div class="auth-carousel__dots">
                    {move || {
                        let (index, count) = carousel.with(|c| (c.index(), c.slides().len()));
                        (0..count)
                            .map(|i| {
                                view! {
                                    <span
                                        class="auth-carousel__dot"
                                        class:auth-carousel__dot--active={i == index}
                                    ></span>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            <div class="container">
                <div class="auth-card">
                    <AlertBanner alerts=alerts/>

                    <div
                        class="form-container sign-up-container"
                        class:active=move || is_active(AuthMode::SignUp)
                        class:switching=move || is_animating(AuthMode::SignUp)
                        on:transitionend=move |ev| on_panel_transition_end(&ev, controller, AuthMode::SignUp)
                    >
                        <form class="auth-form" on:submit=on_signup>
                            <h2 class="signup-heading">"Create Account"</h2>
                            <div class="social-auth-section">
                                {Provider::ALL
                                    .into_iter()
                                    .map(|provider| view! { <SocialButton provider=provider/> })
                                    .collect_view()}
                            </div>
                            <div class="divider">
                                <span class="divider-text">"or sign up with email"</span>
                            </div>
                            <div class="input-group">
                                <label class="input-label" for="signup-name">"Name"</label>
                                <input
                                    id="signup-name"
                                    type="text"
                                    autocomplete="name"
                                    prop:value=move || signup_name.get()
                                    on:input=move |ev| signup_name.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="input-group">
                                <label class="input-label" for="signup-email">"Email Address"</label>
                                <input
                                    id="signup-email"
                                    type="email"
                                    autocomplete="email"
                                    prop:value=move || signup_email.get()
                                    on:input=move |ev| signup_email.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="input-group">
                                <label class="input-label" for="signup-password">"Password"</label>
                                <input
                                    id="signup-password"
                                    type="password"
                                    autocomplete="new-password"
                                    prop:value=move || signup_password.get()
                                    on:input=move |ev| signup_password.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="input-group">
                                <label class="input-label" for="signup-confirm">"Confirm Password"</label>
                                <input
                                    id="signup-confirm"
                                    type="password"
                                    autocomplete="new-password"
                                    prop:value=move || signup_confirm.get()
                                    on:input=move |ev| signup_confirm.set(event_target_value(&ev))
                                />
                            </div>
                            <button
                                type="submit"
                                class="primary-button"
                                disabled=move || phase(FormKind::Signup).is_busy()
                            >
                                {move || signup_button_label(phase(FormKind::Signup))}
                            </button>
                            <div class="toggle-section">
                                <p class="toggle-text">"Already have an account?"</p>
                                <button type="button" class="toggle-button" on:click=toggle>
                                    "Sign In"
                                </button>
                            </div>
                        </form>
                    </div>

                    <div
                        class="form-container sign-in-container"
                        class:active=move || is_active(AuthMode::SignIn)
                        class:switching=move || is_animating(AuthMode::SignIn)
                        on:transitionend=move |ev| on_panel_transition_end(&ev, controller, AuthMode::SignIn)
                    >
                        <form class="auth-form" on:submit=on_login>
                            <h1>"Welcome Back"</h1>
                            <div class="social-container">
                                {Provider::ALL
                                    .into_iter()
                                    .map(|provider| view! { <SocialButton provider=provider compact=true/> })
                                    .collect_view()}
                            </div>
                            <div class="divider">
                                <span class="divider-text">"or continue with email"</span>
                            </div>
                            <div class="input-group">
                                <label class="input-label" for="login-email">"Email Address"</label>
                                <input
                                    id="login-email"
                                    type="email"
                                    autocomplete="email"
                                    prop:value=move || login_email.get()
                                    on:input=move |ev| login_email.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="input-group">
                                <label class="input-label" for="login-password">"Password"</label>
                                <input
                                    id="login-password"
                                    type="password"
                                    autocomplete="current-password"
                                    prop:value=move || login_password.get()
                                    on:input=move |ev| login_password.set(event_target_value(&ev))
                                />
                            </div>
                            <button
                                type="submit"
                                class="primary-button"
                                disabled=move || phase(FormKind::Login).is_busy()
                            >
                                {move || login_button_label(phase(FormKind::Login))}
                            </button>
                            <div class="toggle-section">
                                <p class="toggle-text">"Don't have an account?"</p>
                                <button type="button" class="toggle-button" on:click=toggle>
                                    "Create Account"
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
