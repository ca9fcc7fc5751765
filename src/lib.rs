//! Beatline profile core crate.
//!
//! Holds the player-profile subsystem of the Beatline rhythm game: the local
//! profile store, the share-link reconciliation engine, and the thin
//! wasm-bindgen session layer the page calls into. Notation rendering, audio
//! and clap grading live elsewhere; this crate only decides how an incoming
//! shared save relates to the saves already on the device.

use wasm_bindgen::prelude::*;

pub mod profile;

pub use profile::reconcile::{Decision, Relation, make_name_unique, reconcile};
pub use profile::store::ProfileStore;
pub use profile::{LoadedProfile, Profile};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
