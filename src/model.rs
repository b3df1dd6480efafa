//! Shared application state, stored in Serenity's global context behind a
//! `TypeMapKey` so every event handler and command can reach it.

use std::sync::Arc;

use serenity::prelude::TypeMapKey;

use crate::api::WebsiteClient;
use crate::router::CategoryRouter;
use crate::session::SessionStore;

/// The central, shared state of the bot. An `Arc<AppState>` lives in the
/// global context; all of its contents guard their own interior mutability.
pub struct AppState {
    /// In-progress post compositions, one per user.
    pub sessions: SessionStore,
    /// Runtime-mutable category -> destination channel mapping.
    pub channels: CategoryRouter,
    /// Client for the community website's upload endpoint.
    pub website: WebsiteClient,
}

impl AppState {
    pub fn new(website: WebsiteClient) -> Self {
        Self {
            sessions: SessionStore::new(),
            channels: CategoryRouter::new(),
            website,
        }
    }

    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
