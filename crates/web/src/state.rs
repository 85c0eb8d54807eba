use std::sync::Arc;

use storage::{repository::AthleteStore, services::classification::GenderPolicy};

use crate::features::chat::ChatHub;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AthleteStore>,
    pub gender_policy: GenderPolicy,
    pub chat: ChatHub,
}

impl AppState {
    pub fn new(store: Arc<dyn AthleteStore>, gender_policy: GenderPolicy, chat: ChatHub) -> Self {
        Self {
            store,
            gender_policy,
            chat,
        }
    }
}
