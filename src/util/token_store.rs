//! Durable storage for the bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single well-known `localStorage` key holds the token verbatim;
//! absence of the key means "no prior session". The trait exists so the
//! session core can be exercised natively without a browser.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

/// `localStorage` key holding the bearer token verbatim.
pub const TOKEN_KEY: &str = "token";

/// A single-slot durable store for the session credential.
pub trait TokenStore {
    /// Read the stored token, if any.
    fn load(&self) -> Option<String>;
    /// Persist `token`, replacing any previous value.
    fn save(&self, token: &str);
    /// Remove the stored token. A no-op when nothing is stored.
    fn clear(&self);
}

/// `localStorage`-backed store used by the browser build.
///
/// Outside the browser every operation is a no-op and `load` returns
/// `None`, so native builds boot anonymous.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokens;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for BrowserTokens {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

/// Shared in-memory store for native tests.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryTokens(std::rc::Rc<std::cell::RefCell<Option<String>>>);

#[cfg(test)]
impl TokenStore for MemoryTokens {
    fn load(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}
