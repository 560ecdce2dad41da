use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use tracing::debug;

use crate::shared::infrastructure::live_sessions::SessionRegistry;
use crate::shared::infrastructure::live_sessions::channel::ChannelSink;
use crate::shell::state::AppState;

pub async fn handle(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| serve_session(socket, state.sessions))
}

/// Pumps broadcast payloads to one viewer until either side goes away.
/// Inbound frames are read only to notice the close.
async fn serve_session(socket: WebSocket, sessions: Arc<SessionRegistry>) {
    let (sink, mut outbound) = ChannelSink::channel();
    let id = sessions.register(Arc::new(sink)).await;
    let (mut sender, mut receiver) = socket.split();

    loop {
        tokio::select! {
            payload = outbound.recv() => {
                let Some(payload) = payload else { break };
                if sender.send(Message::Text(payload.into())).await.is_err() {
                    break;
                }
            }
            incoming = receiver.next() => match incoming {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
        }
    }

    sessions.unregister(id).await;
    debug!(session = %id, "viewer disconnected");
}
