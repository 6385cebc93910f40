//! Access-token persistence over the browser's localStorage.
//!
//! One named entry holds the raw bearer credential; absence of the entry
//! is the canonical logged-out state. Outside the browser (host tests,
//! non-`csr` builds) a thread-local slot stands in for localStorage so
//! the store keeps its contract.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

const STORAGE_KEY: &str = "accessToken";

#[cfg(not(feature = "csr"))]
thread_local! {
    static FALLBACK_SLOT: std::cell::RefCell<Option<String>> =
        const { std::cell::RefCell::new(None) };
}

/// Persist the credential, overwriting any existing one. The value is not
/// validated here; structural checks belong to the claims decoder.
pub fn save(credential: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(STORAGE_KEY, credential);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        FALLBACK_SLOT.with(|slot| *slot.borrow_mut() = Some(credential.to_owned()));
    }
}

/// Read the persisted credential, or `None` when logged out.
pub fn read() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        local_storage().and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
    }
    #[cfg(not(feature = "csr"))]
    {
        FALLBACK_SLOT.with(|slot| slot.borrow().clone())
    }
}

/// Remove the credential. Clearing an already-empty store is a no-op.
pub fn clear() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        FALLBACK_SLOT.with(|slot| *slot.borrow_mut() = None);
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
