// Integration tests (native) for share-link reconciliation.
// These exercise the pure decision logic only, so they run under
// `cargo test` on the host without any browser APIs.

use beatline::{LoadedProfile, Profile, ProfileStore, Relation, reconcile};

fn loaded(name: Option<&str>, completion: u32) -> LoadedProfile {
    let profile = match name {
        Some(n) => Profile::named(n, completion),
        None => Profile::anonymous(completion),
    };
    LoadedProfile::new(profile)
}

#[test]
fn trivial_store_always_yields_all_trivial() {
    // Single anonymous save, link is ahead.
    let store = ProfileStore::from_profiles(vec![Profile::anonymous(3)]);
    let decision = reconcile(&loaded(Some("Sam"), 5), &store);
    assert_eq!(decision.relation, Relation::AllTrivial { target: 0 });
    assert!(!decision.offer_load_as_new, "AllTrivial must not offer load-as-new");

    // Still AllTrivial when the device save is ahead of the link.
    let store = ProfileStore::from_profiles(vec![Profile::anonymous(9)]);
    let decision = reconcile(&loaded(Some("Sam"), 1), &store);
    assert_eq!(decision.relation, Relation::AllTrivial { target: 0 });

    // And with several anonymous saves.
    let store =
        ProfileStore::from_profiles(vec![Profile::anonymous(1), Profile::anonymous(2)]);
    let decision = reconcile(&loaded(None, 0), &store);
    assert_eq!(decision.relation, Relation::AllTrivial { target: 0 });
    assert!(!decision.offer_load_as_new);
}

#[test]
fn named_match_strictly_behind_offers_replace() {
    let store = ProfileStore::from_profiles(vec![Profile::named("Sam", 3)]);
    let decision = reconcile(&loaded(Some("Sam"), 5), &store);
    assert_eq!(decision.relation, Relation::NamedExactMatchAhead { target: 0 });
    assert!(decision.offer_load_as_new, "replace state still offers load-as-new");
    assert!(decision.relation.update_label().is_some());
}

#[test]
fn named_match_equal_offers_no_mutation() {
    let store = ProfileStore::from_profiles(vec![Profile::named("Sam", 5)]);
    let decision = reconcile(&loaded(Some("Sam"), 5), &store);
    assert_eq!(decision.relation, Relation::NamedExactMatchEqual { matched: 0 });
    assert!(!decision.offer_load_as_new, "equal match means the link was already consumed");
    assert!(decision.relation.update_label().is_none());
}

#[test]
fn named_match_ahead_of_link_falls_through_to_no_match() {
    // Unique name match on "Sam", but the stored profile is further along,
    // so neither the ahead nor the equal state applies.
    let store = ProfileStore::from_profiles(vec![
        Profile::named("Sam", 9),
        Profile::named("Pat", 9),
    ]);
    let decision = reconcile(&loaded(Some("Sam"), 1), &store);
    assert_eq!(decision.relation, Relation::NoMatch);
    assert!(decision.offer_load_as_new);
    assert_eq!(decision.unique_name, "Sam 2");
}

#[test]
fn ambiguous_name_match_falls_through_to_no_match() {
    // Two stored profiles share the loaded name; the engine must not guess
    // which one to offer, even though both are strictly behind.
    let store = ProfileStore::from_profiles(vec![
        Profile::named("Sam", 1),
        Profile::named("Sam", 2),
    ]);
    let decision = reconcile(&loaded(Some("Sam"), 5), &store);
    assert_eq!(decision.relation, Relation::NoMatch);
    assert!(decision.offer_load_as_new);
}

#[test]
fn unrelated_names_yield_no_match() {
    let store = ProfileStore::from_profiles(vec![
        Profile::anonymous(3),
        Profile::named("Pat", 5),
    ]);
    let decision = reconcile(&loaded(Some("Sam"), 4), &store);
    assert_eq!(decision.relation, Relation::NoMatch);
    assert_eq!(decision.unique_name, "Sam");
}

#[test]
fn empty_store_yields_no_match() {
    // An empty store is not "all trivial" (that state requires at least one
    // profile), so the only offer is load-as-new.
    let store = ProfileStore::new();
    let decision = reconcile(&loaded(Some("Sam"), 5), &store);
    assert_eq!(decision.relation, Relation::NoMatch);
    assert!(decision.offer_load_as_new);
}

#[test]
fn reconciliation_is_idempotent() {
    let store = ProfileStore::from_profiles(vec![
        Profile::named("Sam", 3),
        Profile::named("Pat", 7),
    ]);
    let link = loaded(Some("Sam"), 5);
    let first = reconcile(&link, &store);
    let second = reconcile(&link, &store);
    assert_eq!(first, second, "same unmutated inputs must yield the same decision");
}

#[test]
fn target_index_matches_state() {
    let store = ProfileStore::from_profiles(vec![
        Profile::named("Pat", 1),
        Profile::named("Sam", 3),
    ]);
    let decision = reconcile(&loaded(Some("Sam"), 5), &store);
    assert_eq!(decision.relation, Relation::NamedExactMatchAhead { target: 1 });
    assert_eq!(decision.relation.target_index(), Some(1));
    assert_eq!(Relation::NoMatch.target_index(), None);
}
