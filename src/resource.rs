//! Translation resources: transport and per-language cache.

/// Per-language document cache
mod cache;
/// Resource transports
mod fetcher;

pub use cache::ResourceCache;
pub use fetcher::{
    FetchError,
    FileFetcher,
    HttpFetcher,
    ResourceFetcher,
};
