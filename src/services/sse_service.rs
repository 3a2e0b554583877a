use std::{convert::Infallible, time::Duration};

use axum::response::sse::{Event, KeepAlive, Sse};
use futures::Stream;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::{
    dto::sse::{Handshake, ServerEvent},
    state::SharedState,
};

const EVENT_HANDSHAKE: &str = "handshake";
const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(15);

/// Subscribe to the change feed and queue a handshake for this subscriber only.
pub async fn subscribe(state: &SharedState) -> (broadcast::Receiver<ServerEvent>, ServerEvent) {
    let receiver = state.events().subscribe();

    let (games, session_active) = {
        let model = state.model().read().await;
        (model.games().len(), model.selected_game().is_some())
    };
    let handshake = Handshake {
        message: "change feed connected".into(),
        games,
        session_active,
        subscribers: state.events().subscriber_count(),
    };
    let event = ServerEvent::json(EVENT_HANDSHAKE, &handshake).unwrap_or_else(|_| ServerEvent {
        name: EVENT_HANDSHAKE,
        data: handshake.message.clone(),
    });

    (receiver, event)
}

/// Turn a subscription into the `/sse` response: the greeting first, then
/// every change event until the client goes away.
pub fn to_sse_stream(
    receiver: broadcast::Receiver<ServerEvent>,
    greeting: ServerEvent,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let (tx, rx) = mpsc::channel::<Result<Event, Infallible>>(8);
    tokio::spawn(forward(receiver, tx, greeting));

    // Dropping the response stream closes `rx`, which stops the forwarder.
    Sse::new(ReceiverStream::new(rx)).keep_alive(
        KeepAlive::new()
            .interval(KEEP_ALIVE_INTERVAL)
            .text("keep-alive"),
    )
}

async fn forward(
    mut receiver: broadcast::Receiver<ServerEvent>,
    tx: mpsc::Sender<Result<Event, Infallible>>,
    greeting: ServerEvent,
) {
    if tx.send(Ok(to_event(greeting))).await.is_err() {
        return;
    }

    loop {
        let next = tokio::select! {
            _ = tx.closed() => break,
            next = receiver.recv() => next,
        };
        match next {
            Ok(event) => {
                if tx.send(Ok(to_event(event))).await.is_err() {
                    break;
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "SSE subscriber lagged; events skipped");
            }
            Err(RecvError::Closed) => break,
        }
    }

    tracing::info!("SSE subscriber disconnected");
}

fn to_event(payload: ServerEvent) -> Event {
    Event::default().event(payload.name).data(payload.data)
}
