//! Share-link reconciliation.
//!
//! Classifies how a link-derived profile relates to the profiles already on
//! the device and produces the structured decision the dialog renders. The
//! whole module is pure: no storage, no DOM, no globals — a function of the
//! (loaded profile, store snapshot) pair, which is what makes the decision
//! table below directly testable on the host.

use serde::Serialize;

use super::store::ProfileStore;
use super::{LoadedProfile, Profile};

// --- Decision states ---------------------------------------------------------

/// Relationship between the loaded profile and the store.
///
/// Mutually exclusive; [`reconcile`] evaluates them in declaration order and
/// the first match wins. Indices point into the store's ordered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state")]
pub enum Relation {
    /// Every stored profile is anonymous, so the link is assumed to be this
    /// very save shared back to itself. Offer to overwrite slot 0; loading
    /// as a separate new profile is not offered.
    AllTrivial { target: usize },
    /// Exactly one stored profile, unnamed, at or behind the link's
    /// progress. Offer an in-place update, with "load as new" as the
    /// alternative.
    SingleAnonymousBehind { target: usize },
    /// Exactly one stored profile shares the loaded name and is strictly
    /// behind it. Offer to replace that profile.
    NamedExactMatchAhead { target: usize },
    /// Exactly one stored profile shares the loaded name at identical
    /// progress: the link was already consumed on this device. No mutation
    /// is offered; the matched profile just becomes the current context.
    NamedExactMatchEqual { matched: usize },
    /// No applicable relationship; only "load as new" is offered.
    NoMatch,
}

impl Relation {
    /// Label for the update/replace button, when one is offered.
    pub fn update_label(&self) -> Option<&'static str> {
        match self {
            Relation::AllTrivial { .. } => Some("Overwrite saved game"),
            Relation::SingleAnonymousBehind { .. } => Some("Update saved game"),
            Relation::NamedExactMatchAhead { .. } => Some("Replace saved game"),
            Relation::NamedExactMatchEqual { .. } | Relation::NoMatch => None,
        }
    }

    /// Explanatory line for the dialog body, when the state warrants one.
    pub fn explanation(&self) -> Option<&'static str> {
        match self {
            Relation::AllTrivial { .. } => {
                Some("This link matches the unnamed save already on this device.")
            }
            Relation::SingleAnonymousBehind { .. } => {
                Some("The shared save is at least as far along as the unnamed save on this device.")
            }
            Relation::NamedExactMatchAhead { .. } => {
                Some("The shared save is further along than the profile with the same name.")
            }
            Relation::NamedExactMatchEqual { .. } => {
                Some("This save has already been loaded on this device.")
            }
            Relation::NoMatch => None,
        }
    }

    /// Index of the stored profile this state points at, if any.
    pub fn target_index(&self) -> Option<usize> {
        match *self {
            Relation::AllTrivial { target }
            | Relation::SingleAnonymousBehind { target }
            | Relation::NamedExactMatchAhead { target } => Some(target),
            Relation::NamedExactMatchEqual { matched } => Some(matched),
            Relation::NoMatch => None,
        }
    }
}

/// The full reconciliation outcome handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub relation: Relation,
    /// Whether "load as new" appears alongside (or instead of) the update
    /// action. Suppressed only for AllTrivial and NamedExactMatchEqual.
    pub offer_load_as_new: bool,
    /// Disambiguated display-name candidate for the "load as new" path.
    /// Empty when the loaded profile is unnamed. A candidate only — it is
    /// not reserved, and commit re-validates it against the store.
    pub unique_name: String,
}

// --- Engine ------------------------------------------------------------------

/// Computes the reconciliation decision for a link-derived profile.
///
/// Total over all (loaded, store) inputs and deterministic: the same
/// unmutated pair always yields the identical decision.
pub fn reconcile(loaded: &LoadedProfile, store: &ProfileStore) -> Decision {
    let relation = classify(loaded.profile(), store);
    let offer_load_as_new = !matches!(
        relation,
        Relation::AllTrivial { .. } | Relation::NamedExactMatchEqual { .. }
    );
    Decision {
        relation,
        offer_load_as_new,
        unique_name: make_name_unique(loaded.profile().name(), store),
    }
}

fn classify(loaded: &Profile, store: &ProfileStore) -> Relation {
    if store.all_are_trivial() {
        return Relation::AllTrivial { target: 0 };
    }

    // Single anonymous save at or behind the link's progress. Inclusive
    // comparison: an anonymous save with equal progress still gets the
    // in-place update offer.
    if let [only] = store.all() {
        if !only.has_name() && only.completion_value() <= loaded.completion_value() {
            return Relation::SingleAnonymousBehind { target: 0 };
        }
    }

    if let Some(name) = loaded.name() {
        let mut same_name = store
            .all()
            .iter()
            .enumerate()
            .filter(|(_, p)| p.name() == Some(name));
        // Exactly one name match; two or more is unresolvable ambiguity and
        // falls through to NoMatch instead of guessing which to offer.
        if let (Some((idx, found)), None) = (same_name.next(), same_name.next()) {
            if found.completion_value() < loaded.completion_value() {
                return Relation::NamedExactMatchAhead { target: idx };
            }
            if found.completion_value() == loaded.completion_value() {
                return Relation::NamedExactMatchEqual { matched: idx };
            }
        }
    }

    Relation::NoMatch
}

// --- Unique naming -----------------------------------------------------------

/// Derives a display name not currently present in the store.
///
/// `None` (an unnamed load) yields the empty string. Otherwise the desired
/// name is returned unchanged when free, or suffixed `"{name} 2"`,
/// `"{name} 3"`, ... until a free candidate is found. The store is finite,
/// so probing terminates after at most len + 1 candidates.
pub fn make_name_unique(desired: Option<&str>, store: &ProfileStore) -> String {
    let Some(desired) = desired else {
        return String::new();
    };
    if !store.contains_name(desired) {
        return desired.to_string();
    }
    let mut suffix = 2u32;
    loop {
        let candidate = format!("{} {}", desired, suffix);
        if !store.contains_name(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}
