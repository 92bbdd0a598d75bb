#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc;

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::UnboundedReceiver;

    use crate::app::App;
    use crate::config::{Config, SearchConfig};
    use crate::search::{Navigator, Notifier, SearchGuard, SearchRequest, SearchResponse, Suggestion};

    pub fn guard(id: &str, first_name: &str, last_name: &str) -> Suggestion {
        Suggestion {
            id: id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            license_number: format!("L{}", id),
            state: "CA".to_string(),
        }
    }

    /// Collects every error the search box surfaces
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        pub messages: Vec<String>,
    }

    impl Notifier for RecordingNotifier {
        fn notify_error(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }
    }

    /// Collects every navigation request
    #[derive(Debug, Default)]
    pub struct RecordingNavigator {
        pub paths: Vec<String>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate_to(&mut self, path: &str) {
            self.paths.push(path.to_string());
        }
    }

    /// A search box wired to channels the test drives by hand
    pub struct TestSearch {
        pub search: SearchGuard,
        pub requests: UnboundedReceiver<SearchRequest>,
        pub responses: mpsc::Sender<SearchResponse>,
        pub notifier: RecordingNotifier,
        pub navigator: RecordingNavigator,
    }

    impl TestSearch {
        pub fn new() -> Self {
            Self::with_config(&SearchConfig::default())
        }

        pub fn with_config(config: &SearchConfig) -> Self {
            let (request_tx, requests) = tokio::sync::mpsc::unbounded_channel();
            let (responses, response_rx) = mpsc::channel();
            let mut search = SearchGuard::new(config);
            search.set_channels(request_tx, response_rx);

            Self {
                search,
                requests,
                responses,
                notifier: RecordingNotifier::default(),
                navigator: RecordingNavigator::default(),
            }
        }

        /// Type `text` and return the id of the query it sent
        pub fn type_text(&mut self, text: &str) -> Option<u64> {
            self.search.on_text_change(text);
            self.drain_requests()
                .into_iter()
                .rev()
                .find_map(|request| match request {
                    SearchRequest::Query { request_id, .. } => Some(request_id),
                    SearchRequest::Cancel { .. } => None,
                })
        }

        pub fn drain_requests(&mut self) -> Vec<SearchRequest> {
            let mut requests = Vec::new();
            while let Ok(request) = self.requests.try_recv() {
                requests.push(request);
            }
            requests
        }

        /// Deliver a response through the channel and poll it in
        pub fn deliver(&mut self, response: SearchResponse) {
            self.responses.send(response).unwrap();
            self.search.poll_responses(&mut self.notifier);
        }

        pub fn deliver_results(&mut self, request_id: u64, suggestions: Vec<Suggestion>) {
            self.deliver(SearchResponse::Results {
                request_id,
                suggestions,
            });
        }

        pub fn deliver_error(&mut self, request_id: u64, message: &str) {
            self.deliver(SearchResponse::Error {
                request_id,
                message: message.to_string(),
            });
        }
    }

    pub fn test_app() -> App {
        App::new(&Config::default())
    }

    /// An app whose search box talks to channels the test holds
    pub fn test_app_with_channels() -> (
        App,
        UnboundedReceiver<SearchRequest>,
        mpsc::Sender<SearchResponse>,
    ) {
        let mut app = test_app();
        let (request_tx, requests) = tokio::sync::mpsc::unbounded_channel();
        let (responses, response_rx) = mpsc::channel();
        app.search.set_channels(request_tx, response_rx);
        (app, requests, responses)
    }

    /// Id of the last query sent, discarding everything else queued
    pub fn last_query_id(requests: &mut UnboundedReceiver<SearchRequest>) -> Option<u64> {
        let mut last = None;
        while let Ok(request) = requests.try_recv() {
            if let SearchRequest::Query { request_id, .. } = request {
                last = Some(request_id);
            }
        }
        last
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
