//! Backing store for the database blob

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::StoreError;

/// A place to keep one string blob under the fixed database key.
pub trait BlobStore {
    /// Read the blob; `None` when nothing has been written yet
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Write (or overwrite) the blob
    fn save(&self, blob: &str) -> Result<(), StoreError>;
}

/// In-memory blob for tests and native builds.
///
/// Clones share the same cell, so two stores built over clones of one
/// `MemoryBlob` see each other's writes the way two page loads share
/// `localStorage`.
#[derive(Clone, Default)]
pub struct MemoryBlob {
    blob: Rc<RefCell<Option<String>>>,
}

impl MemoryBlob {
    /// Create an empty blob store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a blob store with pre-seeded contents
    pub fn with_contents(blob: impl Into<String>) -> Self {
        Self {
            blob: Rc::new(RefCell::new(Some(blob.into()))),
        }
    }
}

impl BlobStore for MemoryBlob {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.blob.borrow().clone())
    }

    fn save(&self, blob: &str) -> Result<(), StoreError> {
        *self.blob.borrow_mut() = Some(blob.to_string());
        Ok(())
    }
}
