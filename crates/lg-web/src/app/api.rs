//! Backend client shared through context.

use client_core::{ApiClient, ClientConfig};
use dioxus::prelude::*;
use tracing::info;

use crate::app::storage::use_client_store;

pub fn use_api_provider() -> ApiClient {
    let store = use_client_store();
    use_context_provider(move || {
        let config = ClientConfig::load(&store);
        info!(base_url = %config.api_base_url, "backend configured");
        ApiClient::new(&config)
    })
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}
