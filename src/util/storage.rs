//! Browser localStorage helpers with a JSON codec.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes browser-only read/write behavior so callers never repeat
//! web-sys glue. The codec half is pure and shared by native unit tests;
//! the I/O half exists only on wasm32 and no-ops elsewhere.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Decode a JSON value. Malformed input is treated as absent.
pub fn decode<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_str(raw).ok()
}

/// Encode a value as JSON.
pub fn encode<T: Serialize>(value: &T) -> Option<String> {
    serde_json::to_string(value).ok()
}

/// Load a JSON value from `localStorage` for `key`.
///
/// Returns `None` when storage is unavailable, the key is missing, or the
/// stored text does not parse as `T`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        decode(&raw)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`. Best effort.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::warn!("localStorage unavailable, not persisting {key}");
            return;
        };
        let Some(raw) = encode(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (key, value);
    }
}
