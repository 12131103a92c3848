use super::*;

// =============================================================
// login_redirect
// =============================================================

#[test]
fn login_redirect_records_the_origin() {
    assert_eq!(login_redirect("/my-nfts"), "/auth?redirect=/my-nfts");
}

// =============================================================
// redirect_target
// =============================================================

#[test]
fn redirect_target_honors_in_app_paths() {
    assert_eq!(redirect_target(Some("/my-nfts")), "/my-nfts");
    assert_eq!(redirect_target(Some("/auctions")), "/auctions");
}

#[test]
fn redirect_target_defaults_to_marketplace() {
    assert_eq!(redirect_target(None), DEFAULT_AFTER_LOGIN);
    assert_eq!(redirect_target(Some("")), DEFAULT_AFTER_LOGIN);
}

#[test]
fn redirect_target_rejects_external_targets() {
    assert_eq!(redirect_target(Some("https://evil.example")), DEFAULT_AFTER_LOGIN);
    assert_eq!(redirect_target(Some("//evil.example")), DEFAULT_AFTER_LOGIN);
    assert_eq!(redirect_target(Some("my-nfts")), DEFAULT_AFTER_LOGIN);
}

#[test]
fn guard_round_trip_returns_to_the_guarded_page() {
    let url = login_redirect("/my-nfts");
    let raw = url.split("redirect=").nth(1);
    assert_eq!(redirect_target(raw), "/my-nfts");
}
