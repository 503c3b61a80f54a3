//! Sign-in / sign-up controller.
//!
//! DESIGN
//! ======
//! The controller is sans-IO: `begin_*` validates input and hands back the
//! request to send, `finish_*` consumes the backend outcome and returns the
//! `Effect`s the page must perform (store the token, navigate, show an
//! alert). Pages own the signals, timers, and network calls; this module owns
//! every decision.
//!
//! INVARIANTS
//! ==========
//! - Exactly one of sign-in / sign-up is active at any time.
//! - Each form has at most one submission in flight.
//! - A submission settles once; a second `finish_*` with the same ticket
//!   yields no effects, so a success can never navigate twice.
//! - Only a successful login yields `StoreToken` or `Navigate`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::time::Duration;

use url::Url;

use crate::config::AuthConfig;
use crate::net::types::{AuthOutcome, AuthResponseBody, LoginRequest, SignupRequest, is_success_status};
use crate::state::alert::Alert;
use crate::util::validation::{ValidationError, validate_login, validate_signup};

const LOGIN_FAILED: &str = "Login failed";
const SIGNUP_FAILED: &str = "Sign up failed";
const SIGNUP_SUCCEEDED: &str = "Account created. Please sign in.";

// =============================================================================
// MODE + PANEL SWITCH
// =============================================================================

/// Which form is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }
}

/// Panel swap state, settled by the panel's real `transitionend` event.
///
/// The active mode flips as soon as `toggle` is called; `Switching` only
/// records that the swap animation has not finished yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelSwitch {
    Settled(AuthMode),
    Switching { from: AuthMode, to: AuthMode },
}

impl Default for PanelSwitch {
    fn default() -> Self {
        Self::Settled(AuthMode::default())
    }
}

impl PanelSwitch {
    /// The mode whose form is active (the target while switching).
    #[must_use]
    pub fn active(self) -> AuthMode {
        match self {
            Self::Settled(mode) | Self::Switching { to: mode, .. } => mode,
        }
    }

    #[must_use]
    pub fn is_switching(self) -> bool {
        matches!(self, Self::Switching { .. })
    }

    /// Whether `panel` is mid-animation (leaving or entering).
    #[must_use]
    pub fn is_animating(self, panel: AuthMode) -> bool {
        match self {
            Self::Settled(_) => false,
            Self::Switching { from, to } => panel == from || panel == to,
        }
    }

    /// Flip the active mode. Toggling mid-switch retargets the animation.
    pub fn toggle(&mut self) {
        let from = self.active();
        *self = Self::Switching { from, to: from.other() };
    }

    /// Make `mode` active, animating only if it is not already.
    pub fn show(&mut self, mode: AuthMode) {
        if self.active() != mode {
            self.toggle();
        }
    }

    /// Record that `panel` finished its transition. Only the incoming panel
    /// settles the switch. Returns whether the state changed.
    pub fn settle(&mut self, panel: AuthMode) -> bool {
        match *self {
            Self::Switching { to, .. } if to == panel => {
                *self = Self::Settled(to);
                true
            }
            _ => false,
        }
    }
}

// =============================================================================
// SUBMISSIONS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Signup,
}

/// Ticket identifying one in-flight submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Submission {
    form: FormKind,
    id: u64,
}

impl Submission {
    #[must_use]
    pub fn form(self) -> FormKind {
        self.form
    }
}

/// Lifecycle of one form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting(u64),
    /// Login succeeded; the control stays disabled until navigation.
    Succeeded,
    Failed,
}

impl FormPhase {
    /// Whether the submit control should be disabled.
    #[must_use]
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Submitting(_) | Self::Succeeded)
    }
}

/// Why a submission was not started.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("A request is already in progress.")]
    Busy,
}

/// Side effect the page must perform after a submission settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    StoreToken(String),
    Navigate { url: String, delay: Duration },
    ShowAlert(Alert),
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Owns panel state and both forms' submission lifecycles.
#[derive(Clone, Debug, Default)]
pub struct AuthController {
    pub panel: PanelSwitch,
    login: FormPhase,
    signup: FormPhase,
    next_id: u64,
}

impl AuthController {
    #[must_use]
    pub fn mode(&self) -> AuthMode {
        self.panel.active()
    }

    #[must_use]
    pub fn phase(&self, form: FormKind) -> FormPhase {
        match form {
            FormKind::Login => self.login,
            FormKind::Signup => self.signup,
        }
    }

    fn phase_mut(&mut self, form: FormKind) -> &mut FormPhase {
        match form {
            FormKind::Login => &mut self.login,
            FormKind::Signup => &mut self.signup,
        }
    }

    fn start(&mut self, form: FormKind) -> Result<Submission, SubmitError> {
        if self.phase(form).is_busy() {
            return Err(SubmitError::Busy);
        }
        let id = self.next_id;
        self.next_id += 1;
        *self.phase_mut(form) = FormPhase::Submitting(id);
        Ok(Submission { form, id })
    }

    /// Validate the sign-in form and mark it submitting.
    ///
    /// # Errors
    ///
    /// `Busy` while a login is pending or has succeeded; `Invalid` when the
    /// input fails validation. Neither starts a request.
    pub fn begin_login(&mut self, email: &str, password: &str) -> Result<(Submission, LoginRequest), SubmitError> {
        if self.login.is_busy() {
            return Err(SubmitError::Busy);
        }
        let request = validate_login(email, password)?;
        Ok((self.start(FormKind::Login)?, request))
    }

    /// Validate the sign-up form and mark it submitting.
    ///
    /// # Errors
    ///
    /// `Busy` while a signup is pending; `Invalid` when the input fails
    /// validation. Neither starts a request.
    pub fn begin_signup(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<(Submission, SignupRequest), SubmitError> {
        if self.signup.is_busy() {
            return Err(SubmitError::Busy);
        }
        let request = validate_signup(name, email, password, confirm)?;
        Ok((self.start(FormKind::Signup)?, request))
    }

    /// Consume `submission` if it is the one pending for its form.
    fn take(&mut self, submission: Submission) -> bool {
        let phase = self.phase_mut(submission.form);
        if *phase == FormPhase::Submitting(submission.id) {
            *phase = FormPhase::Idle;
            return true;
        }
        false
    }

    fn fail(&mut self, form: FormKind, message: impl Into<String>) -> Vec<Effect> {
        *self.phase_mut(form) = FormPhase::Failed;
        vec![Effect::ShowAlert(Alert::error(message))]
    }

    /// Settle a login. `page_url` resolves relative destinations.
    pub fn finish_login(
        &mut self,
        submission: Submission,
        outcome: AuthOutcome,
        config: &AuthConfig,
        page_url: &str,
    ) -> Vec<Effect> {
        if submission.form != FormKind::Login || !self.take(submission) {
            return Vec::new();
        }
        let body = match outcome {
            AuthOutcome::Responded { status, body } if is_success_status(status) => body,
            AuthOutcome::Responded { body, .. } => {
                return self.fail(FormKind::Login, body.message().unwrap_or(LOGIN_FAILED));
            }
            AuthOutcome::Failed(err) => return self.fail(FormKind::Login, err.to_string()),
        };

        let url = match login_destination(&body, &config.post_login_page, page_url) {
            Ok(Some(url)) => url,
            Ok(None) => return self.fail(FormKind::Login, body.message().unwrap_or(LOGIN_FAILED)),
            Err(_) => return self.fail(FormKind::Login, LOGIN_FAILED),
        };

        self.login = FormPhase::Succeeded;
        let mut effects = Vec::with_capacity(2);
        if let Some(token) = body.token() {
            effects.push(Effect::StoreToken(token.to_owned()));
        }
        effects.push(Effect::Navigate { url, delay: config.redirect_delay });
        effects
    }

    /// Settle a signup. Success returns the user to the sign-in panel.
    pub fn finish_signup(&mut self, submission: Submission, outcome: AuthOutcome) -> Vec<Effect> {
        if submission.form != FormKind::Signup || !self.take(submission) {
            return Vec::new();
        }
        match outcome {
            AuthOutcome::Responded { status, body } if is_success_status(status) => {
                self.panel.show(AuthMode::SignIn);
                let message = body.message().unwrap_or(SIGNUP_SUCCEEDED);
                vec![Effect::ShowAlert(Alert::success(message))]
            }
            AuthOutcome::Responded { body, .. } => {
                self.fail(FormKind::Signup, body.message().unwrap_or(SIGNUP_FAILED))
            }
            AuthOutcome::Failed(err) => self.fail(FormKind::Signup, err.to_string()),
        }
    }
}

/// Where a successful login goes, or `None` if the body names neither a
/// token nor a redirect.
///
/// The server's `redirect` wins over `post_login_page`; both are resolved
/// against `page_url`, and the token is appended as the `token` query
/// parameter.
///
/// # Errors
///
/// Returns an error if `page_url` is not absolute or the target cannot be
/// joined onto it.
pub fn login_destination(
    body: &AuthResponseBody,
    post_login_page: &str,
    page_url: &str,
) -> Result<Option<String>, url::ParseError> {
    let token = body.token();
    let redirect = body.redirect();
    if token.is_none() && redirect.is_none() {
        return Ok(None);
    }
    let mut url = Url::parse(page_url)?.join(redirect.unwrap_or(post_login_page))?;
    if let Some(token) = token {
        url.query_pairs_mut().append_pair("token", token);
    }
    Ok(Some(url.into()))
}
