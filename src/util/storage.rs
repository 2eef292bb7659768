//! Session token persistence.
//!
//! The token is the only durable client-side state: conversations live in
//! memory and are lost on reload by design. Storage failures degrade to
//! "no token"; nothing here panics.

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "taxchat_token";

/// Read the stored session token, if any. Always `None` on the server.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a session token.
pub fn write_token(token: &str) {
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

/// Discard the stored session token. Used on logout and when startup
/// revalidation rejects the token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[cfg(feature = "hydrate")]
pub(crate) fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
