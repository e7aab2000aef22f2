use crate::models::AuthUser;
use serde::{Deserialize, Serialize};

pub(crate) const TOKEN_KEY: &str = "auth_token";
pub(crate) const USER_KEY: &str = "auth_user";
pub(crate) const THEME_KEY: &str = "theme";
pub(crate) const WALLET_KEY: &str = "wallet_address";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(crate) fn load_string(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub(crate) fn save_string(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

pub(crate) fn remove_key(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

pub(crate) fn load_json_from_storage<T: for<'de> Deserialize<'de>>(key: &str) -> Option<T> {
    let json = load_string(key)?;
    serde_json::from_str(&json).ok()
}

pub(crate) fn save_json_to_storage<T: Serialize>(key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        save_string(key, &json);
    }
}

pub(crate) fn save_user_to_storage(user: &AuthUser) {
    save_json_to_storage(USER_KEY, user);
}

pub(crate) fn load_user_from_storage() -> Option<AuthUser> {
    load_json_from_storage(USER_KEY)
}

pub(crate) fn load_wallet_address() -> Option<String> {
    load_string(WALLET_KEY).filter(|s| !s.trim().is_empty())
}

/// Persist the connected wallet; an empty address forgets it.
pub(crate) fn save_wallet_address(address: &str) {
    if address.trim().is_empty() {
        remove_key(WALLET_KEY);
    } else {
        save_string(WALLET_KEY, address);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_wallet_address_roundtrip() {
        save_wallet_address("0xabc");
        assert_eq!(load_wallet_address().as_deref(), Some("0xabc"));

        save_wallet_address("");
        assert!(load_wallet_address().is_none());
    }

    #[wasm_bindgen_test]
    fn test_user_storage_roundtrip() {
        let user = AuthUser {
            id: 1,
            wallet_address: "0xabc".to_string(),
            email: None,
            username: Some("u".to_string()),
            avatar_url: None,
        };
        save_user_to_storage(&user);
        let loaded = load_user_from_storage().expect("should load user from localStorage");
        assert_eq!(loaded.username.as_deref(), Some("u"));
        remove_key(USER_KEY);
    }
}
