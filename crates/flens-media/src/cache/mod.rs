//! Session cache for listing data
//!
//! Provides the `SessionStore` port and the freshness-checked record format.

mod record;

pub use record::{CacheRecord, ListingCache, FRESHNESS_WINDOW_MS};

use std::rc::Rc;

use thiserror::Error;

/// Errors from a session store write
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store does not exist (storage disabled, private mode)
    #[error("session storage unavailable")]
    Unavailable,

    /// The store refused the write (quota, security)
    #[error("session storage rejected write: {0}")]
    Rejected(String),
}

/// Key-value store scoped to the browsing session.
///
/// On WASM this is `window.sessionStorage`. Reads never fail: an unreadable
/// key is simply absent.
pub trait SessionStore {
    /// Read a value
    fn get_item(&self, key: &str) -> Option<String>;

    /// Write a value
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }
}

impl<S: SessionStore + ?Sized> SessionStore for Rc<S> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }
}
