//! Dark mode preference and the `.dark-mode` class on `<html>`.
//!
//! The preference lives in `localStorage`; with nothing stored, the system
//! color-scheme preference wins. Requires a browser environment.

#[cfg(feature = "hydrate")]
const DARK_KEY: &str = "taxchat_dark";

/// Read the dark mode preference, falling back to the system preference.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = super::storage::local_storage() {
            if let Ok(Some(val)) = storage.get_item(DARK_KEY) {
                return val == "true";
            }
        }

        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `.dark-mode` class on the document element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = el.class_list();
            let _ = if enabled {
                class_list.add_1("dark-mode")
            } else {
                class_list.remove_1("dark-mode")
            };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip dark mode, apply it, and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = super::storage::local_storage() {
            let _ = storage.set_item(DARK_KEY, if next { "true" } else { "false" });
        }
    }
    next
}
