//! Page-facing session layer (wasm boundary).
//!
//! Owns the page-lifetime [`ProfileStore`], loads it from localStorage at
//! init, and exposes the three entry points the share-link dialog wires its
//! buttons to: compute the reconciliation decision, commit a replace, or
//! commit an add. Decoding the link payload itself happens on the JS side;
//! this layer receives the already-decoded profile as JSON.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::window;

use super::LoadedProfile;
use super::reconcile::{make_name_unique, reconcile};
use super::store::ProfileStore;

const STORAGE_KEY: &str = "beatline-profiles";

thread_local! {
    static PROFILE_STORE: RefCell<ProfileStore> = RefCell::new(ProfileStore::new());
}

fn local_storage() -> Result<Option<web_sys::Storage>, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    win.local_storage()
}

/// Populates the session store from device storage.
///
/// Missing, disabled or corrupt storage all yield an empty store; a player
/// with unreadable saves starts fresh rather than hitting an error page.
#[wasm_bindgen]
pub fn profiles_init() -> Result<(), JsValue> {
    let payload = match local_storage()? {
        Some(storage) => storage.get_item(STORAGE_KEY)?,
        None => {
            web_sys::console::warn_1(&JsValue::from_str(
                "localStorage unavailable; profiles will not persist",
            ));
            None
        }
    };
    PROFILE_STORE.with(|store| {
        store.borrow_mut().load_all_from_storage(payload.as_deref());
    });
    Ok(())
}

fn persist(store: &ProfileStore) -> Result<(), JsValue> {
    if let Some(storage) = local_storage()? {
        storage.set_item(STORAGE_KEY, &store.to_storage_payload())?;
    }
    Ok(())
}

fn parse_loaded(payload: &str) -> Result<LoadedProfile, JsValue> {
    // The link decoder hands over well-formed JSON; anything else is its
    // bug surfacing here, so report it rather than papering over.
    serde_json::from_str(payload)
        .map_err(|e| JsValue::from_str(&format!("malformed profile payload: {}", e)))
}

/// Runs reconciliation for a link-derived profile and returns the decision
/// as a JSON string for the dialog to render.
#[wasm_bindgen]
pub fn reconcile_link_profile(payload: &str) -> Result<JsValue, JsValue> {
    let loaded = parse_loaded(payload)?;
    let body = PROFILE_STORE.with(|store| {
        let store = store.borrow();
        let decision = reconcile(&loaded, &store);
        let matched_details = decision
            .relation
            .target_index()
            .and_then(|i| store.all().get(i))
            .map(|p| p.completion_details());
        serde_json::json!({
            "relation": decision.relation,
            "offerLoadAsNew": decision.offer_load_as_new,
            "uniqueName": decision.unique_name,
            "updateLabel": decision.relation.update_label(),
            "explanation": decision.relation.explanation(),
            "matchedDetails": matched_details,
        })
        .to_string()
    });
    Ok(JsValue::from_str(&body))
}

/// Commits the "update/replace" action: overwrites the stored profile at
/// `index` with the link-derived one and persists the store.
#[wasm_bindgen]
pub fn commit_replace(index: usize, payload: &str) -> Result<(), JsValue> {
    let loaded = parse_loaded(payload)?;
    PROFILE_STORE.with(|store| {
        let mut store = store.borrow_mut();
        if index >= store.len() {
            return Err(JsValue::from_str("replace index out of range"));
        }
        store.replace_at(index, loaded.into_profile());
        persist(&store)
    })
}

/// Commits the "load as new" action: appends the link-derived profile and
/// persists the store.
///
/// The unique-name candidate shown in the dialog is re-derived here against
/// the current store, so the name is validated in the same step as the
/// append.
#[wasm_bindgen]
pub fn commit_add(payload: &str) -> Result<(), JsValue> {
    let loaded = parse_loaded(payload)?;
    PROFILE_STORE.with(|store| {
        let mut store = store.borrow_mut();
        let mut profile = loaded.into_profile();
        if profile.has_name() {
            let unique = make_name_unique(profile.name(), &store);
            profile.assign_name(unique);
        }
        store.add(profile);
        persist(&store)
    })
}
