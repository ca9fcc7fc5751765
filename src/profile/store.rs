//! The ordered collection of locally saved profiles.
//!
//! The store is pure data: it knows nothing about localStorage or the DOM.
//! [`session`](super::session) feeds it the persisted JSON payload at page
//! load and writes the payload back after every mutation. Insertion order is
//! storage order and doubles as the profile's identity — reconciliation
//! refers to profiles by index, never by a stable ID.

use super::Profile;

/// Ordered list of locally saved profiles with primitive mutations.
///
/// Name uniqueness is advisory only: `add` performs no check, callers
/// disambiguate up front via [`make_name_unique`](super::reconcile::make_name_unique).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store directly from profiles (tests, and the session layer
    /// after parsing storage).
    pub fn from_profiles(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    /// Rebuilds the store from the persisted JSON payload.
    ///
    /// A missing or corrupt payload yields an empty store rather than an
    /// error; the worst outcome of a bad payload is starting fresh.
    pub fn load_all_from_storage(&mut self, payload: Option<&str>) {
        self.profiles = payload
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default();
    }

    /// Serializes the store for write-back to device storage.
    pub fn to_storage_payload(&self) -> String {
        // Vec<Profile> of plain strings/ints cannot fail to serialize.
        serde_json::to_string(&self.profiles).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn all(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Appends `profile`; it becomes the last element. No uniqueness check.
    pub fn add(&mut self, profile: Profile) {
        self.profiles.push(profile);
    }

    /// Overwrites the profile at `index`, preserving position.
    ///
    /// `index` must refer to a profile currently in the store; anything else
    /// is a caller bug and panics rather than writing to the wrong slot.
    pub fn replace_at(&mut self, index: usize, profile: Profile) {
        self.profiles[index] = profile;
    }

    /// True iff the store is non-empty and every profile is unnamed — the
    /// degenerate "single anonymous save" state.
    pub fn all_are_trivial(&self) -> bool {
        !self.profiles.is_empty() && self.profiles.iter().all(|p| !p.has_name())
    }

    /// True iff some stored profile carries exactly this display name.
    pub fn contains_name(&self, name: &str) -> bool {
        self.profiles.iter().any(|p| p.name() == Some(name))
    }
}
