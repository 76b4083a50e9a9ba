//! `localStorage` access for persisted preferences.

use flownook::error::HostError;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read `key`. Missing storage (private mode, SSR) reads as absent.
pub fn load(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

pub fn store(key: &str, value: &str) -> Result<(), HostError> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()
            .ok_or_else(|| HostError::new("localStorage unavailable"))?
            .set_item(key, value)
            .map_err(|e| super::js::host_error("localStorage.setItem", &e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
        Err(HostError::new("localStorage is not available on server"))
    }
}
