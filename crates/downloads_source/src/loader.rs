use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use downloads_logging::{downloads_debug, downloads_error};

use crate::fetch::{fetch_records_lenient, FetchSettings, Fetcher, ReqwestFetcher};
use crate::{LoaderEvent, RequestId};

enum LoaderCommand {
    Load { request_id: RequestId, url: String },
}

/// Fetches raw collections on a background runtime so the caller's thread
/// never blocks. Results come back as [`LoaderEvent`]s.
pub struct LoaderHandle {
    cmd_tx: mpsc::Sender<LoaderCommand>,
    event_rx: mpsc::Receiver<LoaderEvent>,
    next_request: RequestId,
}

impl LoaderHandle {
    pub fn new(settings: FetchSettings) -> Self {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    downloads_error!("Failed to start loader runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
            downloads_debug!("Loader command channel closed");
        });

        Self {
            cmd_tx,
            event_rx,
            next_request: 1,
        }
    }

    /// Start loading `url`; the returned id tags the matching event.
    pub fn load(&mut self, url: impl Into<String>) -> RequestId {
        let request_id = self.next_request;
        self.next_request += 1;
        let _ = self.cmd_tx.send(LoaderCommand::Load {
            request_id,
            url: url.into(),
        });
        request_id
    }

    pub fn try_recv(&self) -> Option<LoaderEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<LoaderEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: LoaderCommand,
    event_tx: mpsc::Sender<LoaderEvent>,
) {
    match command {
        LoaderCommand::Load { request_id, url } => {
            let records = fetch_records_lenient(fetcher, &url).await;
            let _ = event_tx.send(LoaderEvent::RecordsLoaded {
                request_id,
                url,
                records,
            });
        }
    }
}
