// SPDX-License-Identifier: MIT OR Apache-2.0

//! Browser-backed implementations of the storage and location seams used by
//! the auth gate and the hash synchronizer.

use tutorial_types::auth::TokenStorage;
use tutorial_types::navigation::{FragmentHost, FragmentWrite};
use wasm_bindgen::JsValue;

/// `window.localStorage`, or nothing when storage is unavailable
/// (private mode, sandboxed iframes).
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        Self {
            storage: web_sys::window().and_then(|w| w.local_storage().ok().flatten()),
        }
    }
}

impl TokenStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set_item(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("Failed to write {key} to localStorage: {e:?}");
            }
        }
    }

    fn remove_item(&mut self, key: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.remove_item(key) {
                log::warn!("Failed to remove {key} from localStorage: {e:?}");
            }
        }
    }
}

/// The page's `window.location`.
///
/// Writes go through `location.replace`, which keeps history flat and fires
/// `hashchange`. Clearing uses `history.replaceState`, which fires nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserLocation;

impl FragmentHost for BrowserLocation {
    fn fragment(&self) -> String {
        gloo_utils::window()
            .location()
            .hash()
            .map(|hash| hash.trim_start_matches('#').to_string())
            .unwrap_or_default()
    }

    fn replace_fragment(&mut self, fragment: &str) -> FragmentWrite {
        if self.fragment() == fragment {
            return FragmentWrite::Unchanged;
        }
        match gloo_utils::window().location().replace(&format!("#{fragment}")) {
            Ok(()) => FragmentWrite::EventPending,
            Err(e) => {
                log::warn!("Failed to update URL fragment to #{fragment}: {e:?}");
                FragmentWrite::Unchanged
            }
        }
    }

    fn clear_fragment(&mut self) -> FragmentWrite {
        if self.fragment().is_empty() {
            return FragmentWrite::Unchanged;
        }
        let window = gloo_utils::window();
        let location = window.location();
        let url = format!(
            "{}{}",
            location.pathname().unwrap_or_default(),
            location.search().unwrap_or_default()
        );
        let cleared = window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
        match cleared {
            Ok(()) => FragmentWrite::Silent,
            Err(e) => {
                log::warn!("Failed to clear URL fragment: {e:?}");
                FragmentWrite::Unchanged
            }
        }
    }
}

pub fn current_path() -> String {
    gloo_utils::window()
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_string())
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
