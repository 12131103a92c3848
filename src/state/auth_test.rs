use super::*;

// =============================================================
// login
// =============================================================

#[test]
fn demo_credentials_sign_in() {
    let mut state = AuthState::default();
    let user = state.login(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
    assert_eq!(user.name, DEMO_NAME);
    assert!(state.is_signed_in());
}

#[test]
fn demo_email_is_case_insensitive() {
    let mut state = AuthState::default();
    let user = state.login("  Demo@EvoNFT.io ", DEMO_PASSWORD).unwrap();
    assert_eq!(user.email, DEMO_EMAIL);
}

#[test]
fn unknown_credentials_are_rejected() {
    let mut state = AuthState::default();
    let err = state.login("nobody@example.com", "hunter2").unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
    assert!(!state.is_signed_in());
}

#[test]
fn wrong_password_is_rejected() {
    let mut state = AuthState::default();
    state.signup("Ada", "ada@example.com", "lovelace").unwrap();
    state.logout();

    let err = state.login("ada@example.com", "babbage").unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
    assert!(!state.is_signed_in());
}

// =============================================================
// signup
// =============================================================

#[test]
fn signup_registers_and_signs_in() {
    let mut state = AuthState::default();
    let user = state.signup(" Ada ", "Ada@Example.com", "lovelace").unwrap();
    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, "ada@example.com");
    assert!(state.is_signed_in());
    assert_eq!(state.accounts.len(), 1);
}

#[test]
fn registered_credentials_work_after_logout() {
    let mut state = AuthState::default();
    state.signup("Ada", "ada@example.com", "lovelace").unwrap();
    state.logout();
    assert!(!state.is_signed_in());

    let user = state.login("ada@example.com", "lovelace").unwrap();
    assert_eq!(user.name, "Ada");
}

#[test]
fn duplicate_email_is_rejected() {
    let mut state = AuthState::default();
    state.signup("Ada", "ada@example.com", "lovelace").unwrap();

    let err = state.signup("Imposter", "ADA@example.com", "other").unwrap_err();
    assert_eq!(err, AuthError::EmailTaken);
    assert_eq!(state.accounts.len(), 1);
}

#[test]
fn demo_email_cannot_be_registered() {
    let mut state = AuthState::default();
    let err = state.signup("Sneaky", DEMO_EMAIL, "evolve").unwrap_err();
    assert_eq!(err, AuthError::EmailTaken);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_the_user_but_keeps_the_registry() {
    let mut state = AuthState::default();
    state.signup("Ada", "ada@example.com", "lovelace").unwrap();
    state.logout();

    assert!(state.user.is_none());
    assert_eq!(state.accounts.len(), 1);
}

// =============================================================
// Error display
// =============================================================

#[test]
fn error_text_is_toast_ready() {
    assert_eq!(AuthError::InvalidCredentials.to_string(), "invalid email or password");
    assert_eq!(
        AuthError::EmailTaken.to_string(),
        "an account with this email already exists"
    );
}
