use super::store::{CacheStore, FetchResponse};
use log::{debug, info, warn};
use std::future::Future;
use tokio::sync::RwLock;

/// Application prefix carried by every bucket this engine owns.
pub const BUCKET_PREFIX: &str = "sgm-";

const API_PREFIX: &str = "/api/";

/// Shell paths precached during install. Misses are logged and skipped;
/// install never aborts over an individual asset.
const PRECACHE_PATHS: [&str; 5] = [
    "/",
    "/index.html",
    "/manifest.json",
    "/icon-192.png",
    "/icon-512.png",
];

/// Body of the synthesized response for `/api/` requests with no network and
/// no cached entry.
const OFFLINE_BODY: &str = r#"{"error":"Offline - API não disponível"}"#;

/// Request classification, the analogue of `request.destination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Document,
    Script,
    Style,
    Image,
    Other,
}

impl Destination {
    /// Classifies a request path by its extension.
    pub fn classify(path: &str) -> Self {
        if path == "/" || path.ends_with('/') || path.ends_with(".html") {
            return Destination::Document;
        }
        match path.rsplit('.').next() {
            Some("js") => Destination::Script,
            Some("css") => Destination::Style,
            Some("png") | Some("jpg") | Some("jpeg") | Some("gif") | Some("svg")
            | Some("ico") | Some("webp") => Destination::Image,
            _ => Destination::Other,
        }
    }

    fn is_static_asset(self) -> bool {
        !matches!(self, Destination::Other)
    }
}

/// One inbound request as seen by the engine.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub path: String,
    pub destination: Destination,
}

impl FetchRequest {
    pub fn new(path: &str) -> Self {
        FetchRequest {
            path: path.to_string(),
            destination: Destination::classify(path),
        }
    }
}

/// The upstream the engine fetches from when it does not (or must not) serve
/// from cache. An `Err` means the origin was unreachable, the analogue of a
/// network failure; an HTTP error status is still an `Ok` response.
pub trait Origin: Send + Sync {
    fn fetch(
        &self,
        request: &FetchRequest,
    ) -> impl Future<Output = Result<FetchResponse, String>> + Send;
}

/// Engine lifecycle. There is no rollback state; a failed activation is
/// fatal to the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Installing,
    Installed,
    Activating,
    Activated,
}

/// Decides, per request, whether to serve from the origin, from a cache
/// bucket, or both, and evicts stale bucket generations on activation.
pub struct CacheEngine<O: Origin> {
    store: CacheStore,
    origin: O,
    version: String,
    phase: RwLock<Phase>,
}

impl<O: Origin> CacheEngine<O> {
    pub fn new(store: CacheStore, origin: O, version: &str) -> Self {
        CacheEngine {
            store,
            origin,
            version: version.to_string(),
            phase: RwLock::new(Phase::Installing),
        }
    }

    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    pub async fn phase(&self) -> Phase {
        *self.phase.read().await
    }

    fn static_bucket(&self) -> String {
        format!("{}static-{}", BUCKET_PREFIX, self.version)
    }

    fn api_bucket(&self) -> String {
        format!("{}api-{}", BUCKET_PREFIX, self.version)
    }

    fn runtime_bucket(&self) -> String {
        format!("{}runtime-{}", BUCKET_PREFIX, self.version)
    }

    /// Precaches the application shell, best effort. An asset the origin
    /// cannot produce is logged and skipped.
    pub async fn install(&self) {
        info!("offline engine installing, version {}", self.version);
        let bucket = self.static_bucket();
        for path in PRECACHE_PATHS {
            let request = FetchRequest::new(path);
            match self.origin.fetch(&request).await {
                Ok(response) if response.is_success() => {
                    self.store.put(&bucket, path, response).await;
                }
                Ok(response) => {
                    warn!("skipping precache of {}: status {}", path, response.status);
                }
                Err(e) => {
                    warn!("skipping precache of {}: {}", path, e);
                }
            }
        }
        *self.phase.write().await = Phase::Installed;
    }

    /// Evicts every bucket from a previous version, then reports activated.
    /// All deletions complete before the phase changes, so a new generation
    /// never serves alongside a stale one.
    pub async fn activate(&self) {
        *self.phase.write().await = Phase::Activating;
        let deleted = self.store.purge_stale(BUCKET_PREFIX, &self.version).await;
        for name in &deleted {
            info!("deleted stale cache bucket {}", name);
        }
        *self.phase.write().await = Phase::Activated;
        info!("offline engine activated, version {}", self.version);
    }

    /// Routes one request through the strategy matching its classification.
    pub async fn handle_fetch(&self, request: &FetchRequest) -> Result<FetchResponse, String> {
        if request.path.starts_with(API_PREFIX) {
            return self.network_first_api(request).await;
        }
        if request.destination.is_static_asset() {
            return self.cache_first(request).await;
        }
        self.network_first_runtime(request).await
    }

    /// Network-first for `/api/`: freshness wins, the cache is only a
    /// fallback, and with no fallback at all the caller still gets a
    /// resolved 503 rather than an error.
    async fn network_first_api(&self, request: &FetchRequest) -> Result<FetchResponse, String> {
        let bucket = self.api_bucket();
        match self.origin.fetch(request).await {
            Ok(response) => {
                if response.is_success() {
                    self.store.put(&bucket, &request.path, response.clone()).await;
                }
                Ok(response)
            }
            Err(e) => {
                debug!("network failed for {}: {}, trying cache", request.path, e);
                if let Some(cached) = self.store.lookup(&bucket, &request.path).await {
                    return Ok(cached);
                }
                Ok(offline_response())
            }
        }
    }

    /// Cache-first for shell assets: they only change on deploy, and the
    /// version tag invalidates them explicitly.
    async fn cache_first(&self, request: &FetchRequest) -> Result<FetchResponse, String> {
        let bucket = self.static_bucket();
        if let Some(cached) = self.store.lookup(&bucket, &request.path).await {
            return Ok(cached);
        }
        let response = self.origin.fetch(request).await?;
        if response.is_success() {
            self.store.put(&bucket, &request.path, response.clone()).await;
        }
        Ok(response)
    }

    /// Network-first for everything else, with the fallback chain
    /// runtime bucket → precache bucket → propagate the failure.
    async fn network_first_runtime(&self, request: &FetchRequest) -> Result<FetchResponse, String> {
        let bucket = self.runtime_bucket();
        match self.origin.fetch(request).await {
            Ok(response) => {
                if response.is_success() {
                    self.store.put(&bucket, &request.path, response.clone()).await;
                }
                Ok(response)
            }
            Err(e) => {
                if let Some(cached) = self.store.lookup(&bucket, &request.path).await {
                    return Ok(cached);
                }
                if let Some(cached) = self.store.lookup(&self.static_bucket(), &request.path).await
                {
                    return Ok(cached);
                }
                Err(e)
            }
        }
    }
}

/// The fixed response synthesized for `/api/` paths while offline.
pub fn offline_response() -> FetchResponse {
    FetchResponse::new(503, "application/json", OFFLINE_BODY.as_bytes().to_vec())
}
