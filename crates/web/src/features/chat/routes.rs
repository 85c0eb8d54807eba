use axum::{Router, routing::get};

use super::handlers::chat_socket;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/chat/ws", get(chat_socket))
}
