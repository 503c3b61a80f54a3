use super::*;

#[test]
fn login_label_tracks_phase() {
    assert_eq!(login_button_label(FormPhase::Idle), "Sign In");
    assert_eq!(login_button_label(FormPhase::Submitting(3)), "Signing In...");
    assert_eq!(login_button_label(FormPhase::Succeeded), "Success! Redirecting...");
    assert_eq!(login_button_label(FormPhase::Failed), "Sign In");
}

#[test]
fn signup_label_tracks_phase() {
    assert_eq!(signup_button_label(FormPhase::Idle), "Create Account");
    assert_eq!(signup_button_label(FormPhase::Submitting(0)), "Creating Account...");
    assert_eq!(signup_button_label(FormPhase::Failed), "Create Account");
}
