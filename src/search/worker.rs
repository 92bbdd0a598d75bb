//! Search Worker Thread
//!
//! Runs search requests on a background thread so the UI never waits on the
//! network. Requests arrive over a tokio channel, each query runs as its own
//! task, and responses go back to the UI thread over a std channel that the
//! event loop polls.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use super::backend::SearchBackend;
use super::search_state::{SearchRequest, SearchResponse};

/// Spawn the search worker thread
///
/// The thread hosts a current-thread tokio runtime and exits once the
/// request channel is closed. If the runtime cannot be built the thread
/// exits immediately; the UI notices the closed response channel.
pub fn spawn_worker<B: SearchBackend>(
    backend: B,
    request_rx: UnboundedReceiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to start search runtime: {}", e);
                return;
            }
        };

        runtime.block_on(worker_loop(Arc::new(backend), request_rx, response_tx));
    });
}

/// Main worker loop - processes requests until the channel is closed
///
/// Only the most recent query is ever worth finishing, so a new query
/// cancels whichever one is still running.
pub(crate) async fn worker_loop<B: SearchBackend>(
    backend: Arc<B>,
    mut request_rx: UnboundedReceiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    let mut in_flight: Option<(u64, CancellationToken)> = None;

    while let Some(request) = request_rx.recv().await {
        match request {
            SearchRequest::Query { text, request_id } => {
                if let Some((previous_id, token)) = in_flight.take() {
                    token.cancel();
                    log::debug!("Request {} superseded by {}", previous_id, request_id);
                }

                let token = CancellationToken::new();
                in_flight = Some((request_id, token.clone()));
                tokio::spawn(run_query(
                    Arc::clone(&backend),
                    text,
                    request_id,
                    token,
                    response_tx.clone(),
                ));
            }
            SearchRequest::Cancel { request_id } => {
                match in_flight.take() {
                    Some((id, token)) if id == request_id => {
                        // The task reports Cancelled itself
                        token.cancel();
                    }
                    other => {
                        in_flight = other;
                        let _ = response_tx.send(SearchResponse::Cancelled { request_id });
                    }
                }
            }
        }
    }

    if let Some((_, token)) = in_flight {
        token.cancel();
    }
    log::debug!("Search worker shutting down");
}

/// Run one query, racing the backend against cancellation
async fn run_query<B: SearchBackend>(
    backend: Arc<B>,
    text: String,
    request_id: u64,
    cancel_token: CancellationToken,
    response_tx: Sender<SearchResponse>,
) {
    let response = tokio::select! {
        biased;
        _ = cancel_token.cancelled() => SearchResponse::Cancelled { request_id },
        result = backend.search(&text) => match result {
            Ok(suggestions) => SearchResponse::Results { request_id, suggestions },
            Err(e) => SearchResponse::Error { request_id, message: e.to_string() },
        },
    };

    // UI gone means nobody is listening
    let _ = response_tx.send(response);
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
