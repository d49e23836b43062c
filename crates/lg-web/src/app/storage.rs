//! The profile-wide store shared by the session, the generator and logging.

#[cfg(feature = "web")]
use client_core::storage::BrowserStorage;
#[cfg(not(feature = "web"))]
use client_core::storage::{MemoryProfile, MemoryStore};
use client_core::{KeyValueStore, StorageError};
use dioxus::prelude::*;
use lg_types::{
    Gradient, gradient::{SAVED_GRADIENT_KEY, SavedGradient}
};

/// `localStorage` in the browser; an in-process profile elsewhere.
#[cfg(feature = "web")]
pub type ClientStore = BrowserStorage;
#[cfg(not(feature = "web"))]
pub type ClientStore = MemoryStore;

#[cfg(feature = "web")]
pub fn open_store() -> ClientStore {
    BrowserStorage::local()
}

#[cfg(not(feature = "web"))]
pub fn open_store() -> ClientStore {
    MemoryProfile::new().open_tab()
}

/// Provide the store to the component tree. Call once, from the root.
pub fn use_client_store_provider() -> ClientStore {
    use_context_provider(open_store)
}

pub fn use_client_store() -> ClientStore {
    use_context::<ClientStore>()
}

/// Gradient the generator starts from: the saved one, else the default pair.
pub fn load_saved_gradient(store: &impl KeyValueStore) -> Gradient {
    match store.get_json::<SavedGradient>(SAVED_GRADIENT_KEY) {
        Some(saved) => Gradient::diagonal(saved.color1, saved.color2),
        None => {
            let (start, end) = Gradient::default_pair();
            Gradient::diagonal(start, end)
        }
    }
}

pub fn save_gradient(store: &impl KeyValueStore, gradient: &Gradient) -> Result<(), StorageError> {
    store.set_json(SAVED_GRADIENT_KEY, &SavedGradient::from(gradient))
}

#[cfg(test)]
mod tests {
    use client_core::storage::MemoryProfile;
    use lg_types::HexColor;

    use super::*;

    #[test]
    fn saved_gradient_round_trips() {
        let store = MemoryProfile::new().open_tab();
        let gradient = Gradient::diagonal("#FF0000".parse().unwrap(), HexColor::from_rgb(0, 0xff, 0));

        save_gradient(&store, &gradient).unwrap();

        assert_eq!(
            store.get(SAVED_GRADIENT_KEY).unwrap().as_deref(),
            Some(r##"{"color1":"#ff0000","color2":"#00ff00"}"##)
        );
        assert_eq!(load_saved_gradient(&store), gradient);
    }

    #[test]
    fn missing_or_corrupt_save_falls_back_to_default() {
        let store = MemoryProfile::new().open_tab();
        let (start, end) = Gradient::default_pair();
        let default = Gradient::diagonal(start, end);

        assert_eq!(load_saved_gradient(&store), default);

        store.set(SAVED_GRADIENT_KEY, r##"{"color1":"red","color2":"#00ff00"}"##).unwrap();
        assert_eq!(load_saved_gradient(&store), default);
    }
}
