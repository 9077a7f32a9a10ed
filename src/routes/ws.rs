//! WebSocket handler — hero snapshot stream.
//!
//! DESIGN
//! ======
//! Each connection is one mounted view: it gets its own `Animation` built
//! from the shared hero config, so views never share sequencer state. The
//! handler forwards every snapshot change as a JSON text message and ignores
//! inbound text.
//!
//! LIFECYCLE
//! =========
//! 1. Upgrade → start animation → send the current snapshot
//! 2. Snapshot changed → send
//! 3. Close, socket error, or send failure → stop animation

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::sequencer::Snapshot;
use crate::services::animation::Animation;
use crate::state::AppState;

/// `GET /api/hero/ws`
pub async fn handle_ws(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| run_ws(socket, state))
}

async fn run_ws(mut socket: WebSocket, state: AppState) {
    let client_id = Uuid::new_v4();

    let mut animation = match Animation::start(state.hero.as_ref().clone()) {
        Ok(animation) => animation,
        Err(e) => {
            error!(%client_id, error = %e, "ws: hero animation rejected config");
            let _ = socket.send(Message::Close(None)).await;
            return;
        }
    };
    let _stream = state.track_hero_stream();
    info!(%client_id, streams = state.hero_streams(), "ws: hero stream connected");

    let mut snapshots = animation.subscribe();
    let initial = snapshots.borrow_and_update().clone();

    if send_snapshot(&mut socket, &initial).await.is_ok() {
        loop {
            tokio::select! {
                msg = socket.recv() => {
                    match msg {
                        Some(Ok(Message::Close(_)) | Err(_)) | None => break,
                        Some(Ok(_)) => {}
                    }
                }
                changed = snapshots.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = snapshots.borrow_and_update().clone();
                    if send_snapshot(&mut socket, &snapshot).await.is_err() {
                        break;
                    }
                }
            }
        }
    }

    animation.stop().await;
    info!(%client_id, "ws: hero stream disconnected");
}

async fn send_snapshot(socket: &mut WebSocket, snapshot: &Snapshot) -> Result<(), ()> {
    let json = match serde_json::to_string(snapshot) {
        Ok(j) => j,
        Err(e) => {
            warn!(error = %e, "ws: failed to serialize snapshot");
            return Err(());
        }
    };
    socket.send(Message::Text(json.into())).await.map_err(|_| ())
}

#[cfg(test)]
#[path = "ws_test.rs"]
mod tests;
