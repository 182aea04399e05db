use destructure::Destructure;

use crate::collection::{Catalog, Directory, LendingLedger};
use crate::KernelError;

/// Result of reading the three persisted documents.
///
/// Each collection is loaded on its own; a corrupt document only affects
/// its own entry.
#[derive(Debug, Destructure)]
pub struct LibrarySnapshot {
    catalog: error_stack::Result<Catalog, KernelError>,
    directory: error_stack::Result<Directory, KernelError>,
    ledger: error_stack::Result<LendingLedger, KernelError>,
}

impl LibrarySnapshot {
    pub fn new(
        catalog: error_stack::Result<Catalog, KernelError>,
        directory: error_stack::Result<Directory, KernelError>,
        ledger: error_stack::Result<LendingLedger, KernelError>,
    ) -> Self {
        Self {
            catalog,
            directory,
            ledger,
        }
    }
}

#[async_trait::async_trait]
pub trait LibraryStorage: 'static + Sync + Send {
    async fn load(&self) -> LibrarySnapshot;

    /// Writes all three documents. A failure on one does not stop the others.
    async fn save(
        &self,
        catalog: &Catalog,
        directory: &Directory,
        ledger: &LendingLedger,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnLibraryStorage: 'static + Sync + Send {
    type LibraryStorage: LibraryStorage;
    fn library_storage(&self) -> &Self::LibraryStorage;
}
