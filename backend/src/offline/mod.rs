//! Offline-aware cache layer.
//!
//! Rust rendering of the browser service worker that shipped with the SGM
//! client: versioned cache buckets, a precached application shell, and
//! per-request fetch strategies (network-first for `/api/`, cache-first for
//! static assets, network-first with a fallback chain for everything else).
//!
//! The worker's event-listener lifecycle maps onto tasks and channels here:
//! `CacheEngine::install`/`activate` run once at startup, then
//! `spawn_engine` moves the engine into a long-running task that consumes
//! fetch events from an MPSC channel and signals completion of each one
//! through a oneshot reply (the `event.waitUntil` equivalent). Concurrent
//! fetches share only the bucket store, whose per-key put/lookup is atomic
//! under an `RwLock`.
//!
//! Bucket names carry the application prefix and a version tag
//! (`sgm-static-{v}`, ...). Activation deletes every prefixed bucket whose
//! name does not contain the current tag, and completes all deletions before
//! the engine reports itself activated. Bumping the version tag is the sole
//! mechanism for discarding cached data from a previous deployment.

mod engine;
mod events;
mod store;

pub use engine::{CacheEngine, Destination, FetchRequest, Origin, Phase, BUCKET_PREFIX};
pub use events::{spawn_engine, EngineHandle};
pub use store::{CacheStore, FetchResponse};
