//! Bridge to an injected EIP-1193 provider (`window.ethereum`).
//!
//! Only account discovery is used; nothing is signed.

use crate::storage::{load_wallet_address, save_wallet_address};
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("Please install MetaMask or another Web3 wallet")]
    NoProvider,
    #[error("Failed to connect wallet: {0}")]
    Request(String),
    #[error("Failed to connect wallet: no accounts returned")]
    NoAccounts,
}

fn js_error_message(e: &JsValue) -> String {
    Reflect::get(e, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| e.as_string())
        .unwrap_or_else(|| "unknown error".to_string())
}

fn provider() -> Option<Object> {
    let window = web_sys::window()?;
    let eth = Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
    if eth.is_undefined() || eth.is_null() {
        return None;
    }
    eth.dyn_into::<Object>().ok()
}

pub fn has_provider() -> bool {
    provider().is_some()
}

/// Trimmed, non-empty account strings in provider order.
pub fn clean_accounts<I: IntoIterator<Item = String>>(raw: I) -> Vec<String> {
    raw.into_iter()
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .collect()
}

fn accounts_from_js(v: &JsValue) -> Vec<String> {
    if !Array::is_array(v) {
        return Vec::new();
    }
    clean_accounts(Array::from(v).iter().filter_map(|a| a.as_string()))
}

async fn request(method: &str) -> Result<JsValue, WalletError> {
    let eth = provider().ok_or(WalletError::NoProvider)?;
    let request_fn = Reflect::get(&eth, &JsValue::from_str("request"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or(WalletError::NoProvider)?;

    let args = Object::new();
    Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method))
        .map_err(|e| WalletError::Request(js_error_message(&e)))?;

    let promise = request_fn
        .call1(&eth, &args)
        .map_err(|e| WalletError::Request(js_error_message(&e)))?;
    let promise = promise
        .dyn_into::<js_sys::Promise>()
        .map_err(|e| WalletError::Request(js_error_message(&e)))?;

    JsFuture::from(promise)
        .await
        .map_err(|e| WalletError::Request(js_error_message(&e)))
}

/// Prompt the user to connect (`eth_requestAccounts`) and persist the first account.
pub async fn connect() -> Result<String, WalletError> {
    let accounts = accounts_from_js(&request("eth_requestAccounts").await?);
    let first = accounts.into_iter().next().ok_or(WalletError::NoAccounts)?;
    save_wallet_address(&first);
    log::debug!("wallet connected: {first}");
    Ok(first)
}

/// Already-authorized accounts (`eth_accounts`); never prompts.
pub async fn accounts() -> Result<Vec<String>, WalletError> {
    Ok(accounts_from_js(&request("eth_accounts").await?))
}

/// Persisted address if the provider still exposes it, else `None`.
pub async fn restore() -> Option<String> {
    let saved = load_wallet_address()?;
    match accounts().await {
        Ok(list) if list.iter().any(|a| a.eq_ignore_ascii_case(&saved)) => Some(saved),
        Ok(_) => {
            save_wallet_address("");
            None
        }
        Err(e) => {
            log::warn!("wallet restore skipped: {e}");
            None
        }
    }
}

/// Subscribe to `accountsChanged`. The callback gets the new first account,
/// or `None` when the wallet disconnected.
pub fn on_accounts_changed(cb: impl Fn(Option<String>) + 'static) {
    let Some(eth) = provider() else {
        return;
    };
    let Some(on) = Reflect::get(&eth, &JsValue::from_str("on"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
    else {
        return;
    };

    let handler = Closure::<dyn Fn(JsValue)>::new(move |v: JsValue| {
        let first = accounts_from_js(&v).into_iter().next();
        save_wallet_address(first.as_deref().unwrap_or_default());
        cb(first);
    });
    if let Err(e) = on.call2(&eth, &JsValue::from_str("accountsChanged"), handler.as_ref()) {
        log::warn!("accountsChanged subscription failed: {}", js_error_message(&e));
    }
    // Provider subscriptions last as long as the page.
    handler.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            WalletError::NoProvider.to_string(),
            "Please install MetaMask or another Web3 wallet"
        );
        assert_eq!(
            WalletError::Request("User rejected the request.".to_string()).to_string(),
            "Failed to connect wallet: User rejected the request."
        );
    }

    #[test]
    fn test_clean_accounts() {
        let got = clean_accounts(vec![" 0xabc ".to_string(), String::new(), "0xdef".to_string()]);
        assert_eq!(got, vec!["0xabc", "0xdef"]);
    }
}
