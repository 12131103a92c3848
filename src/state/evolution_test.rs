use super::*;

fn make_nft(id: &str, name: &str) -> NftRecord {
    NftRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        image: "/placeholder.svg".to_owned(),
        tags: vec!["mystic".to_owned(), "owl".to_owned()],
        owner: None,
        price: None,
        evolution_count: Some(2),
    }
}

fn open_state(id: &str) -> EvolutionState {
    let mut state = EvolutionState::default();
    state.open(make_nft(id, "Mystic Owl"));
    state
}

// =============================================================
// open / close
// =============================================================

#[test]
fn open_starts_an_idle_session() {
    let state = open_state("owned-1");
    let session = state.session.as_ref().unwrap();
    assert_eq!(session.phase, EvolvePhase::Idle);
    assert_eq!(session.nft.id, "owned-1");
    assert_eq!(session.tags_input, "");
}

#[test]
fn close_discards_the_session_from_any_phase() {
    let mut state = open_state("owned-1");
    state.close();
    assert!(state.session.is_none());

    let mut state = open_state("owned-1");
    state.begin().unwrap();
    state.close();
    assert!(state.session.is_none());

    let mut state = open_state("owned-1");
    let epoch = state.begin().unwrap();
    state.complete_generation(epoch, "/evolved.svg");
    state.close();
    assert!(state.session.is_none());
}

#[test]
fn reopen_with_another_nft_starts_fresh() {
    let mut state = open_state("owned-1");
    state.set_tags_input("glowing".to_owned());
    state.begin().unwrap();
    let first_epoch = state.session.as_ref().unwrap().epoch;

    state.close();
    state.open(make_nft("owned-2", "Fire Sprite"));

    let session = state.session.as_ref().unwrap();
    assert_eq!(session.nft.id, "owned-2");
    assert_eq!(session.phase, EvolvePhase::Idle);
    assert_eq!(session.tags_input, "");
    assert_ne!(session.epoch, first_epoch);
}

// =============================================================
// begin
// =============================================================

#[test]
fn begin_moves_idle_to_generating() {
    let mut state = open_state("owned-1");
    let epoch = state.begin().unwrap();
    let session = state.session.as_ref().unwrap();
    assert_eq!(session.phase, EvolvePhase::Generating);
    assert_eq!(session.epoch, epoch);
}

#[test]
fn begin_outside_idle_is_rejected() {
    let mut state = EvolutionState::default();
    assert!(state.begin().is_none());

    let mut state = open_state("owned-1");
    state.begin().unwrap();
    assert!(state.begin().is_none());
    assert_eq!(state.session.as_ref().unwrap().phase, EvolvePhase::Generating);
}

// =============================================================
// complete_generation / fail_generation
// =============================================================

#[test]
fn completion_with_live_epoch_reaches_decision() {
    let mut state = open_state("owned-1");
    let epoch = state.begin().unwrap();

    assert!(state.complete_generation(epoch, "/evolved.svg"));
    assert_eq!(
        state.session.as_ref().unwrap().phase,
        EvolvePhase::Decision { image: "/evolved.svg".to_owned() }
    );
}

#[test]
fn completion_after_close_is_discarded() {
    let mut state = open_state("owned-1");
    let epoch = state.begin().unwrap();
    state.close();

    assert!(!state.complete_generation(epoch, "/evolved.svg"));
    assert!(state.session.is_none());
}

#[test]
fn completion_from_a_previous_session_never_lands_in_a_new_one() {
    let mut state = open_state("owned-1");
    let stale_epoch = state.begin().unwrap();

    // User closes the dialog mid-generation and evolves another NFT.
    state.close();
    state.open(make_nft("owned-2", "Fire Sprite"));
    let live_epoch = state.begin().unwrap();

    assert!(!state.complete_generation(stale_epoch, "/stale.svg"));
    assert_eq!(state.session.as_ref().unwrap().phase, EvolvePhase::Generating);

    assert!(state.complete_generation(live_epoch, "/evolved.svg"));
    assert_eq!(
        state.session.as_ref().unwrap().phase,
        EvolvePhase::Decision { image: "/evolved.svg".to_owned() }
    );
}

#[test]
fn completion_outside_generating_is_discarded() {
    let mut state = open_state("owned-1");
    let epoch = state.begin().unwrap();
    assert!(state.complete_generation(epoch, "/evolved.svg"));

    // A duplicate delivery must not overwrite the decision.
    assert!(!state.complete_generation(epoch, "/other.svg"));
    assert_eq!(
        state.session.as_ref().unwrap().phase,
        EvolvePhase::Decision { image: "/evolved.svg".to_owned() }
    );
}

#[test]
fn failure_with_live_epoch_reaches_failed() {
    let mut state = open_state("owned-1");
    let epoch = state.begin().unwrap();

    assert!(state.fail_generation(epoch, "generation backend error: overloaded"));
    assert_eq!(
        state.session.as_ref().unwrap().phase,
        EvolvePhase::Failed { message: "generation backend error: overloaded".to_owned() }
    );
}

#[test]
fn failure_with_stale_epoch_is_discarded() {
    let mut state = open_state("owned-1");
    let stale_epoch = state.begin().unwrap();
    state.close();
    state.open(make_nft("owned-2", "Fire Sprite"));

    assert!(!state.fail_generation(stale_epoch, "too late"));
    assert_eq!(state.session.as_ref().unwrap().phase, EvolvePhase::Idle);
}

// =============================================================
// retry
// =============================================================

#[test]
fn retry_returns_failed_to_idle_keeping_tags() {
    let mut state = open_state("owned-1");
    state.set_tags_input("glowing, mechanical".to_owned());
    let epoch = state.begin().unwrap();
    state.fail_generation(epoch, "boom");

    assert!(state.retry());
    let session = state.session.as_ref().unwrap();
    assert_eq!(session.phase, EvolvePhase::Idle);
    assert_eq!(session.tags_input, "glowing, mechanical");
}

#[test]
fn retry_outside_failed_is_rejected() {
    let mut state = open_state("owned-1");
    assert!(!state.retry());

    state.begin().unwrap();
    assert!(!state.retry());
    assert_eq!(state.session.as_ref().unwrap().phase, EvolvePhase::Generating);
}

#[test]
fn retried_session_can_generate_again() {
    let mut state = open_state("owned-1");
    let epoch = state.begin().unwrap();
    state.fail_generation(epoch, "boom");
    state.retry();

    let second = state.begin().unwrap();
    assert!(state.complete_generation(second, "/evolved.svg"));
}

// =============================================================
// keep / auction
// =============================================================

#[test]
fn keep_resolves_the_decision_and_closes() {
    let mut state = open_state("owned-1");
    state.set_tags_input("Glowing, aurora".to_owned());
    let epoch = state.begin().unwrap();
    state.complete_generation(epoch, "/evolved.svg");

    let outcome = state.keep().unwrap();
    assert_eq!(outcome.nft_id, "owned-1");
    assert_eq!(outcome.nft_name, "Mystic Owl");
    assert_eq!(outcome.image, "/evolved.svg");
    assert_eq!(outcome.tags, vec!["glowing".to_owned(), "aurora".to_owned()]);
    assert_eq!(outcome.disposition, Disposition::Kept);
    assert!(state.session.is_none());
}

#[test]
fn auction_resolves_the_decision_and_closes() {
    let mut state = open_state("owned-3");
    let epoch = state.begin().unwrap();
    state.complete_generation(epoch, "/evolved.svg");

    let outcome = state.auction().unwrap();
    assert_eq!(outcome.nft_id, "owned-3");
    assert_eq!(outcome.disposition, Disposition::Auctioned);
    assert!(state.session.is_none());
}

#[test]
fn keep_outside_decision_is_rejected() {
    let mut state = open_state("owned-1");
    assert!(state.keep().is_none());

    state.begin().unwrap();
    assert!(state.keep().is_none());
    assert!(state.auction().is_none());
    assert_eq!(state.session.as_ref().unwrap().phase, EvolvePhase::Generating);
}

#[test]
fn resolving_invalidates_the_finished_epoch() {
    let mut state = open_state("owned-1");
    let epoch = state.begin().unwrap();
    state.complete_generation(epoch, "/evolved.svg");
    state.keep().unwrap();

    state.open(make_nft("owned-2", "Fire Sprite"));
    state.begin().unwrap();
    assert!(!state.complete_generation(epoch, "/stale.svg"));
}

// =============================================================
// set_tags_input / parse_tags
// =============================================================

#[test]
fn set_tags_input_without_session_is_noop() {
    let mut state = EvolutionState::default();
    state.set_tags_input("glowing".to_owned());
    assert!(state.session.is_none());
}

#[test]
fn parse_tags_splits_trims_and_lowercases() {
    assert_eq!(
        parse_tags(" Glowing, mechanical ,ETHEREAL"),
        vec!["glowing".to_owned(), "mechanical".to_owned(), "ethereal".to_owned()]
    );
}

#[test]
fn parse_tags_drops_blank_segments() {
    assert_eq!(parse_tags("glowing,, ,aurora,"), vec!["glowing".to_owned(), "aurora".to_owned()]);
    assert!(parse_tags("").is_empty());
    assert!(parse_tags("  ,  ").is_empty());
}
