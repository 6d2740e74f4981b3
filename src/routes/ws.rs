// WebSocket chart stream: re-fetch on an interval, aggregate once per batch, push.

use axum::{
    extract::{
        Path, Query, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use bytes::Bytes;
use std::sync::Arc;
use tokio::time::{Duration, timeout};

use super::AppState;
use super::http::ChartQuery;
use crate::models::TimeRange;
use crate::queue_repo::QueueRepo;
use crate::series::ViewerZone;

pub(super) const WS_PING_INTERVAL: Duration = Duration::from_secs(30);
pub(super) const WS_SEND_TIMEOUT: Duration = Duration::from_secs(10);

pub(super) async fn ws_chart(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Path(server_id): Path<String>,
    Query(query): Query<ChartQuery>,
) -> impl IntoResponse {
    let repo = state.queue_repo.clone();
    let zone = state.zone;
    let interval_ms = state.config.publishing.refresh_interval_ms;
    ws.on_upgrade(move |socket| async move {
        let stream = ChartStream {
            repo,
            zone,
            server_id,
            range: query.range,
            interval_ms,
        };
        if let Err(e) = stream.run(socket).await {
            tracing::info!("Chart stream error: {}", e);
        }
    })
}

struct ChartStream {
    repo: Arc<QueueRepo>,
    zone: ViewerZone,
    server_id: String,
    range: TimeRange,
    interval_ms: u64,
}

impl ChartStream {
    async fn run(self, mut socket: WebSocket) -> anyhow::Result<()> {
        tracing::info!(server_id = %self.server_id, range = %self.range, "Client connected to chart stream");
        let mut tick = tokio::time::interval(Duration::from_millis(self.interval_ms));
        tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut ping_interval = tokio::time::interval(WS_PING_INTERVAL);
        ping_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = tick.tick() => {
                    let samples = match self.repo.fetch_samples(&self.server_id, self.range).await {
                        Ok(samples) => samples,
                        Err(e) => {
                            tracing::warn!(error = %e, server_id = %self.server_id, "chart refresh skipped");
                            continue;
                        }
                    };
                    let series = self.zone.aggregate(&samples, &self.server_id, self.range);
                    let json = serde_json::to_string(&series)?;
                    let r = timeout(WS_SEND_TIMEOUT, socket.send(Message::Text(json.into()))).await;
                    if r.is_err() || r.unwrap_or(Ok(())).is_err() {
                        break;
                    }
                }
                _ = ping_interval.tick() => {
                    let r = timeout(WS_SEND_TIMEOUT, socket.send(Message::Ping(Bytes::new()))).await;
                    if r.is_err() || r.unwrap_or(Ok(())).is_err() {
                        break;
                    }
                }
                msg = socket.recv() => {
                    match msg {
                        Some(Ok(Message::Close(_))) | None | Some(Err(_)) => break,
                        Some(Ok(_)) => {}
                    }
                }
            }
        }
        Ok(())
    }
}
