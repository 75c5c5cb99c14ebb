//! Mock data store for the Apokria dashboard
//!
//! Stands in for the backend during demos: the whole database is one JSON
//! blob persisted under a single fixed key, and the "AI" generators
//! fabricate plausible schedules, sponsorship tiers, deck assets, and
//! outreach copy entirely client-side.
//!
//! The blob lives behind the [`BlobStore`] trait: browser `localStorage`
//! in the app (`wasm` feature), an in-memory cell in tests. The store
//! implements the same [`EventsApi`](apokria_client::EventsApi) contract
//! as the real HTTP client.

mod blob;
mod conflict;
mod db;
mod error;
mod generate;
mod store;

#[cfg(feature = "wasm")]
mod local_storage;

pub use blob::{BlobStore, MemoryBlob};
pub use db::{Database, DB_KEY};
pub use error::StoreError;
pub use store::MockStore;

#[cfg(feature = "wasm")]
pub use local_storage::LocalStorageBlob;
