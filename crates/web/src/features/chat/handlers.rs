use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use tokio::sync::broadcast;

use super::ChatHub;
use crate::state::AppState;

/// WebSocket upgrade handler for the chat room.
pub async fn chat_socket(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_chat_connection(socket, state.chat))
}

/// Relays text frames from this client to the room, and room messages back
/// to this client, until either side closes.
async fn handle_chat_connection(mut socket: WebSocket, hub: ChatHub) {
    let conn_id = uuid::Uuid::new_v4();
    let mut rx = hub.subscribe();
    tracing::info!(conn_id = %conn_id, connected = hub.connected(), "Chat client connected");

    loop {
        tokio::select! {
            msg = rx.recv() => {
                match msg {
                    Ok(text) => {
                        if socket.send(Message::Text(text)).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(conn_id = %conn_id, skipped, "Chat client lagged behind");
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        break;
                    }
                }
            }
            result = socket.recv() => {
                match result {
                    Some(Ok(Message::Text(text))) => {
                        hub.publish(text);
                    }
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        break;
                    }
                    Some(Err(e)) => {
                        tracing::debug!(conn_id = %conn_id, error = %e, "Chat receive error");
                        break;
                    }
                    _ => {}
                }
            }
        }
    }

    tracing::info!(conn_id = %conn_id, "Chat client disconnected");
}
