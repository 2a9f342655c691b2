use super::engine::{CacheEngine, FetchRequest, Origin};
use super::store::FetchResponse;
use log::error;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// An inbound event for the engine task. Completion of each fetch is
/// signaled explicitly through the oneshot reply.
#[derive(Debug)]
pub enum EngineEvent {
    Fetch {
        request: FetchRequest,
        reply: oneshot::Sender<Result<FetchResponse, String>>,
    },
}

/// Clonable front end to the engine task, injected into the Actix
/// application state the same way the job controller state is.
#[derive(Clone)]
pub struct EngineHandle {
    tx: mpsc::Sender<EngineEvent>,
}

impl EngineHandle {
    pub async fn fetch(&self, request: FetchRequest) -> Result<FetchResponse, String> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(EngineEvent::Fetch { request, reply })
            .await
            .map_err(|_| "offline engine stopped".to_string())?;
        rx.await.map_err(|_| "offline engine dropped the request".to_string())?
    }
}

/// Moves the engine into a long-running dispatcher task and returns the
/// handle. Each fetch event is handled on its own task, so slow requests do
/// not serialize behind each other; they share only the bucket store.
pub fn spawn_engine<O: Origin + 'static>(engine: CacheEngine<O>) -> EngineHandle {
    let (tx, mut rx) = mpsc::channel::<EngineEvent>(100);
    let engine = Arc::new(engine);

    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let engine = engine.clone();
            tokio::spawn(async move {
                match event {
                    EngineEvent::Fetch { request, reply } => {
                        let result = engine.handle_fetch(&request).await;
                        if reply.send(result).is_err() {
                            error!("fetch reply receiver dropped for {}", request.path);
                        }
                    }
                }
            });
        }
    });

    EngineHandle { tx }
}
