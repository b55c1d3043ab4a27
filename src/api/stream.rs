use std::{convert::Infallible, sync::Arc, time::Duration};

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::{stream, Stream, StreamExt};
use tokio_stream::wrappers::BroadcastStream;

use crate::{
    app_state::AppState, config::constants::SSE_KEEP_ALIVE_SECS, view::board_view::BoardView,
};

/// Streams the current board on connect and every replacement after it.
pub async fn stream_supplies(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    // subscribe before reading the snapshot so no replacement falls in between
    let receiver = state.snapshots.subscribe();
    let current = BoardView::from(state.store.snapshot().as_ref());

    let updates = BroadcastStream::new(receiver).filter_map(|snapshot| async move {
        snapshot
            .inspect_err(|err| tracing::info!("stream client lagged behind: {err}"))
            .ok()
    });

    let events = stream::once(async move { current })
        .chain(updates)
        .map(|snapshot| Ok(snapshot_event(&snapshot)));

    Sse::new(events).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(SSE_KEEP_ALIVE_SECS))
            .text("keep-alive"),
    )
}

fn snapshot_event(snapshot: &BoardView) -> Event {
    match Event::default().event("snapshot").json_data(snapshot) {
        Ok(event) => event,
        Err(err) => {
            tracing::error!(error = %err, "unable to serialize board snapshot");
            Event::default().event("error").data("unable to serialize board snapshot")
        }
    }
}
