//! Browser localStorage backing store

use crate::blob::BlobStore;
use crate::db::DB_KEY;
use crate::error::StoreError;

/// Blob store over `window.localStorage`, always under [`DB_KEY`]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBlob;

impl LocalStorageBlob {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window object".to_string()))?;
        window
            .local_storage()
            .map_err(|_| StoreError::Unavailable("localStorage access denied".to_string()))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl BlobStore for LocalStorageBlob {
    fn load(&self) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(DB_KEY)
            .map_err(|_| StoreError::Unavailable("localStorage read failed".to_string()))
    }

    fn save(&self, blob: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(DB_KEY, blob)
            .map_err(|_| StoreError::Unavailable("localStorage write failed".to_string()))
    }
}
