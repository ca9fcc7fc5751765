//! Player profiles and share-link reconciliation.
//!
//! A profile is one player's saved progress. Profiles reach this module two
//! ways: loaded from device storage into the [`store::ProfileStore`], or
//! decoded from a shareable link into a transient [`LoadedProfile`]. The
//! [`reconcile`] module decides how a link-derived profile relates to the
//! stored ones; the [`session`] module is the wasm boundary that runs that
//! decision for the page and commits whichever action the player picks.

use serde::{Deserialize, Serialize};

pub mod reconcile;
pub mod session;
pub mod store;

// --- Profile ----------------------------------------------------------------

/// One player's saved progress.
///
/// `name` is `None` for anonymous saves (the implicit profile a player
/// accumulates before ever naming themselves). `completion` is a scalar
/// progress measure: the count of levels cleared, higher = further along.
/// It only grows under normal play, which is what lets reconciliation order
/// two saves as ahead / behind / equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    name: Option<String>,
    completion: u32,
}

impl Profile {
    /// An unnamed (trivial) profile.
    pub fn anonymous(completion: u32) -> Self {
        Self { name: None, completion }
    }

    /// A profile with an explicitly assigned display name.
    pub fn named(name: impl Into<String>, completion: u32) -> Self {
        Self { name: Some(name.into()), completion }
    }

    /// True iff a display name was explicitly set.
    pub fn has_name(&self) -> bool {
        self.name.is_some()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Assigns a display name, e.g. the disambiguated candidate picked when
    /// the player loads a shared save as a new profile.
    pub fn assign_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Scalar progress measure used to order two saves.
    pub fn completion_value(&self) -> u32 {
        self.completion
    }

    /// Short progress summary shown next to the profile name.
    pub fn completion_description(&self) -> String {
        match self.completion {
            0 => "No levels cleared yet".to_string(),
            1 => "1 level cleared".to_string(),
            n => format!("{} levels cleared", n),
        }
    }

    /// Longer progress line for the reconciliation dialog body.
    pub fn completion_details(&self) -> String {
        let who = match &self.name {
            Some(name) => name.as_str(),
            None => "This save",
        };
        format!("{}: {}", who, self.completion_description().to_lowercase())
    }
}

// --- LoadedProfile -----------------------------------------------------------

/// A profile decoded from a shareable link.
///
/// Not yet part of the store; it is owned by the current page load until the
/// player commits it via `add` or `replace_at`, at which point
/// [`into_profile`](Self::into_profile) consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadedProfile(Profile);

impl LoadedProfile {
    pub fn new(profile: Profile) -> Self {
        Self(profile)
    }

    pub fn profile(&self) -> &Profile {
        &self.0
    }

    pub fn into_profile(self) -> Profile {
        self.0
    }
}
