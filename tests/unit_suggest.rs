// tests/unit_suggest.rs
//! Tests for friend-of-friend aggregation, reconciliation, and filtering.

use socnet_core::error::SocnetError;
use socnet_core::model::{Gender, Profile, ProfileId};
use socnet_core::store::ProfileStore;
use socnet_core::suggest::{self, SuggestionFilter};

fn pid(n: u128) -> ProfileId {
    ProfileId::from_u128(n)
}

fn add(store: &mut ProfileStore, n: u128, name: &str, age: u32, gender: Gender) {
    store
        .add(Profile::new(pid(n), name, age, gender).unwrap())
        .unwrap();
}

#[test]
fn test_excludes_requester_and_direct_friends() {
    let mut store = ProfileStore::new();
    add(&mut store, 1, "Req", 30, Gender::Female);
    add(&mut store, 2, "Friend", 30, Gender::Male);
    add(&mut store, 3, "Fof", 30, Gender::Male);
    assert!(store.connect(pid(1), pid(2), 5));
    assert!(store.connect(pid(2), pid(3), 5));

    let results = store
        .suggest_connections(pid(1), None, None, None, None)
        .unwrap();

    let ids: Vec<ProfileId> = results.iter().map(|s| s.profile().id()).collect();
    assert_eq!(ids, vec![pid(3)], "only the two-hop profile is suggested");
}

#[test]
fn test_direct_friends_never_suggested() {
    let mut store = ProfileStore::new();
    add(&mut store, 1, "Req", 30, Gender::Female);
    add(&mut store, 2, "A", 30, Gender::Male);
    add(&mut store, 3, "B", 30, Gender::Male);
    assert!(store.connect(pid(1), pid(2), 5));
    assert!(store.connect(pid(1), pid(3), 5));
    assert!(store.connect(pid(2), pid(3), 9));

    let results = store
        .suggest_connections(pid(1), None, None, None, None)
        .unwrap();
    assert!(
        results.is_empty(),
        "B is already a direct friend, not a candidate"
    );
}

#[test]
fn test_reconciliation_keeps_max_not_sum() {
    let mut store = ProfileStore::new();
    add(&mut store, 1, "Req", 30, Gender::Female);
    add(&mut store, 2, "Weak", 30, Gender::Male);
    add(&mut store, 3, "Strong", 30, Gender::Male);
    add(&mut store, 4, "Target", 30, Gender::Male);
    assert!(store.connect(pid(1), pid(2), 3));
    assert!(store.connect(pid(1), pid(3), 7));
    assert!(store.connect(pid(2), pid(4), 1));
    assert!(store.connect(pid(3), pid(4), 1));

    let results = store
        .suggest_connections(pid(1), None, None, None, None)
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].strength(), 7, "best first-hop path wins, not 3 + 7");
}

#[test]
fn test_concrete_two_hop_scenario() {
    // R has friends A:5 and B:9; A knows C, B knows C and D.
    // Contribution is the first-hop strength, so C reconciles to 9 and D
    // scores 9 as well; the name tie-break puts Dana before Cara.
    let mut store = ProfileStore::new();
    add(&mut store, 1, "Rita", 30, Gender::Female);
    add(&mut store, 2, "Ana", 30, Gender::Female);
    add(&mut store, 3, "Bea", 30, Gender::Female);
    add(&mut store, 4, "Cara", 30, Gender::Female);
    add(&mut store, 5, "Dana", 30, Gender::Female);
    assert!(store.connect(pid(1), pid(2), 5));
    assert!(store.connect(pid(1), pid(3), 9));
    assert!(store.connect(pid(2), pid(4), 2));
    assert!(store.connect(pid(3), pid(4), 1));
    assert!(store.connect(pid(3), pid(5), 4));

    let results = store
        .suggest_connections(pid(1), Some(10), None, None, None)
        .unwrap();

    let view: Vec<(&str, u32)> = results
        .iter()
        .map(|s| (s.profile().name(), s.strength()))
        .collect();
    assert_eq!(view, vec![("Dana", 9), ("Cara", 9)]);
}

#[test]
fn test_gender_filter_exact_match() {
    let mut store = ProfileStore::new();
    add(&mut store, 1, "Req", 30, Gender::Female);
    add(&mut store, 2, "Friend", 30, Gender::Male);
    add(&mut store, 3, "Match", 30, Gender::NonBinary);
    add(&mut store, 4, "NoMatch", 30, Gender::Male);
    assert!(store.connect(pid(1), pid(2), 5));
    assert!(store.connect(pid(2), pid(3), 5));
    assert!(store.connect(pid(2), pid(4), 5));

    let results = store
        .suggest_connections(pid(1), None, Some("non_binary"), None, None)
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].profile().name(), "Match");
}

#[test]
fn test_impossible_gender_filter_yields_empty_result() {
    let mut store = ProfileStore::new();
    add(&mut store, 1, "Req", 30, Gender::Female);
    add(&mut store, 2, "Friend", 30, Gender::Male);
    add(&mut store, 3, "Fof", 30, Gender::Male);
    assert!(store.connect(pid(1), pid(2), 5));
    assert!(store.connect(pid(2), pid(3), 5));

    let results = store
        .suggest_connections(pid(1), None, Some("female"), None, None)
        .unwrap();
    assert!(results.is_empty(), "no error, just an empty sequence");
}

#[test]
fn test_unknown_gender_filter_fails_before_aggregation() {
    let store = ProfileStore::new();
    let err = store
        .suggest_connections(pid(1), None, Some("martian"), None, None)
        .unwrap_err();
    assert!(
        matches!(err, SocnetError::InvalidArgument(_)),
        "filter validation precedes the NotFound lookup"
    );
}

#[test]
fn test_age_bounds_are_inclusive() {
    let mut store = ProfileStore::new();
    add(&mut store, 1, "Req", 30, Gender::Female);
    add(&mut store, 2, "Friend", 30, Gender::Male);
    add(&mut store, 3, "Edge", 40, Gender::Male);
    add(&mut store, 4, "Outside", 41, Gender::Male);
    assert!(store.connect(pid(1), pid(2), 5));
    assert!(store.connect(pid(2), pid(3), 5));
    assert!(store.connect(pid(2), pid(4), 5));

    let results = store
        .suggest_connections(pid(1), None, None, Some(40), Some(40))
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].profile().name(), "Edge");
}

#[test]
fn test_rejected_candidates_do_not_consume_budget() {
    // The strongest candidate fails the age filter; with a budget of one,
    // the next-ranked matching candidate is still returned.
    let mut store = ProfileStore::new();
    add(&mut store, 1, "Req", 30, Gender::Female);
    add(&mut store, 2, "Strong", 30, Gender::Male);
    add(&mut store, 3, "Weak", 30, Gender::Male);
    add(&mut store, 4, "TooOld", 80, Gender::Male);
    add(&mut store, 5, "JustRight", 31, Gender::Male);
    assert!(store.connect(pid(1), pid(2), 9));
    assert!(store.connect(pid(1), pid(3), 2));
    assert!(store.connect(pid(2), pid(4), 1));
    assert!(store.connect(pid(3), pid(5), 1));

    let results = store
        .suggest_connections(pid(1), Some(1), None, None, Some(50))
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].profile().name(), "JustRight");
}

#[test]
fn test_result_budget_truncates_ranked_list() {
    let mut store = ProfileStore::new();
    add(&mut store, 1, "Req", 30, Gender::Female);
    add(&mut store, 2, "Friend", 30, Gender::Male);
    for n in 3..8 {
        add(&mut store, n, &format!("Fof{n}"), 30, Gender::Male);
        assert!(store.connect(pid(2), pid(n), 5));
    }
    assert!(store.connect(pid(1), pid(2), 5));

    let results = store
        .suggest_connections(pid(1), Some(2), None, None, None)
        .unwrap();
    assert_eq!(results.len(), 2);
}

#[test]
fn test_unknown_requester_fails() {
    let store = ProfileStore::new();
    let filter = SuggestionFilter::default();
    let err = suggest::suggest(&store, pid(1), &filter).unwrap_err();
    assert!(matches!(err, SocnetError::NotFound(id) if id == pid(1)));
}
