//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::TaskClient;
use crate::config::ApiConfig;
use crate::store::AppStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Task state; write through `Dispatch`
    pub store: AppStore,
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, config: ApiConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    /// Client for the configured task service
    pub fn client(&self) -> TaskClient {
        TaskClient::new(self.config.get_value())
    }
}

/// Get the app context; panics outside of `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
