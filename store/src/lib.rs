//! Session-store adapter for the Verigate gateway.
//!
//! The Discord bot writes one document per verification session into an
//! external document store; this crate wraps that store behind a small
//! lookup trait. The rest of the codebase depends only on the trait, so the
//! MongoDB backend can be swapped for the in-memory one in tests.

pub mod error;
pub mod memory;
pub mod mongo;
pub mod record;

pub use error::StoreError;
pub use memory::MemorySessionStore;
pub use mongo::{MongoConfig, MongoSessionStore};
pub use record::SessionRecord;

use async_trait::async_trait;

/// Key-value lookup over the external session store.
///
/// Sessions are keyed by the `verifyUuid` field; the store enforces that at
/// most one record exists per uuid (assumed, not re-validated here).
/// Lookups are read-only and must be safe under concurrent callers.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Exact-match lookup by session UUID. `Ok(None)` means no such session.
    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<SessionRecord>, StoreError>;
}
