use super::*;

// =============================================================
// validate_login_input
// =============================================================

#[test]
fn login_requires_both_fields() {
    assert_eq!(validate_login_input("", ""), Err("Please fill in all fields"));
    assert_eq!(validate_login_input("a@b.c", ""), Err("Please fill in all fields"));
    assert_eq!(validate_login_input("", "secret"), Err("Please fill in all fields"));
    assert_eq!(validate_login_input("   ", "secret"), Err("Please fill in all fields"));
}

#[test]
fn login_accepts_filled_fields() {
    assert_eq!(validate_login_input("a@b.c", "secret"), Ok(()));
}

// =============================================================
// validate_signup_input
// =============================================================

#[test]
fn signup_requires_every_field() {
    assert_eq!(validate_signup_input("", "a@b.c", "longenough"), Err("Please fill in all fields"));
    assert_eq!(validate_signup_input("Ada", "", "longenough"), Err("Please fill in all fields"));
    assert_eq!(validate_signup_input("Ada", "a@b.c", ""), Err("Please fill in all fields"));
}

#[test]
fn signup_enforces_password_length() {
    assert_eq!(
        validate_signup_input("Ada", "a@b.c", "short"),
        Err("Password must be at least 6 characters")
    );
    assert_eq!(validate_signup_input("Ada", "a@b.c", "longer"), Ok(()));
}

#[test]
fn signup_password_length_counts_characters_not_bytes() {
    // Six multibyte characters must pass.
    assert_eq!(validate_signup_input("Ada", "a@b.c", "éééééé"), Ok(()));
}
