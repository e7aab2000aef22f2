pub mod latch;
pub mod theme;

pub use latch::{RequestLatch, Ticket};
pub use theme::{ThemeController, ThemePreference};

use crate::api::{ApiClient, ApiError};
use crate::config::EnvConfig;
use crate::models::AuthUser;
use crate::storage::{load_user_from_storage, load_wallet_address, save_wallet_address};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub(crate) struct AppState {
    pub config: StoredValue<EnvConfig>,
    pub api_client: RwSignal<ApiClient>,
    pub current_user: RwSignal<Option<AuthUser>>,

    /// Connected wallet account, restored from storage on start.
    pub wallet_address: RwSignal<Option<String>>,
    pub wallet_error: RwSignal<Option<String>>,

    pub theme: ThemeController,
}

impl AppState {
    pub fn new() -> Self {
        let config = EnvConfig::new();
        let stored_client = ApiClient::load_from_storage(&config);
        let stored_user = load_user_from_storage();

        if config.use_mock {
            log::info!("mock mode: serving built-in ideas");
        }

        Self {
            config: StoredValue::new(config),
            api_client: RwSignal::new(stored_client),
            current_user: RwSignal::new(stored_user),
            wallet_address: RwSignal::new(load_wallet_address()),
            wallet_error: RwSignal::new(None),
            theme: ThemeController::load(),
        }
    }

    pub fn set_wallet(&self, address: Option<String>) {
        save_wallet_address(address.as_deref().unwrap_or_default());
        self.wallet_address.set(address);
    }

    /// Drop the session after a 401; other errors pass through untouched.
    pub fn note_api_error(&self, e: &ApiError) {
        if e.is_unauthorized() {
            let mut c = self.api_client.get_untracked();
            c.logout();
            self.api_client.set(c);
            self.current_user.set(None);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);
