mod book;
mod lending;
mod member;

pub use self::{book::*, lending::*, member::*};

use error_stack::Report;

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::library::{DependOnLibrary, DependOnLibraryConfig};
use kernel::interface::storage::{DependOnLibraryStorage, DestructLibrarySnapshot, LibraryStorage};
use kernel::prelude::collection::Library;
use kernel::prelude::config::LibraryConfig;
use kernel::KernelError;

/// Owns the in-memory library for the lifetime of a process.
///
/// Construct with [`LibraryService::open`] and release with
/// [`LibraryService::close`]. Every operation from the service traits in this
/// module flushes all three collections before it returns.
pub struct LibraryService<S, C> {
    library: Library,
    storage: S,
    clock: C,
    config: LibraryConfig,
    load_faults: Vec<Report<KernelError>>,
}

impl<S: LibraryStorage, C: Clock> LibraryService<S, C> {
    pub async fn open(storage: S, clock: C, config: LibraryConfig) -> Self {
        let DestructLibrarySnapshot {
            catalog,
            directory,
            ledger,
        } = storage.load().await.into_destruct();

        let mut load_faults = Vec::new();
        let catalog = recover(catalog, "books", &mut load_faults);
        let directory = recover(directory, "members", &mut load_faults);
        let ledger = recover(ledger, "lending", &mut load_faults);

        tracing::info!(
            books = catalog.len(),
            members = directory.len(),
            lending = ledger.len(),
            "Library opened"
        );

        Self {
            library: Library::new(catalog, directory, ledger),
            storage,
            clock,
            config,
            load_faults,
        }
    }

    /// Collections that were found corrupt and started empty.
    pub fn load_faults(&self) -> &[Report<KernelError>] {
        &self.load_faults
    }

    /// Retries the flush if the last one failed, then releases the state.
    pub async fn close(mut self) -> error_stack::Result<(), KernelError> {
        if self.library.has_pending_changes() {
            tracing::warn!("Unsaved changes found on close, flushing again");
            flush(&mut self).await?;
        }
        tracing::info!("Library closed");
        Ok(())
    }
}

fn recover<T: Default>(
    loaded: error_stack::Result<T, KernelError>,
    collection: &str,
    faults: &mut Vec<Report<KernelError>>,
) -> T {
    match loaded {
        Ok(value) => value,
        Err(report) => {
            tracing::error!(collection, error = ?report, "Persisted collection is corrupt, starting empty");
            faults.push(report);
            T::default()
        }
    }
}

/// Writes all three collections. A failed write keeps the in-memory state
/// and leaves the library marked as pending.
pub(crate) async fn flush<T>(module: &mut T) -> error_stack::Result<(), KernelError>
where
    T: ?Sized + DependOnLibrary + DependOnLibraryStorage,
{
    module.library_mut().mark_pending();
    let library = module.library();
    let result = module
        .library_storage()
        .save(library.catalog(), library.directory(), library.ledger())
        .await;
    match result {
        Ok(()) => {
            module.library_mut().mark_saved();
            tracing::debug!("Library flushed");
            Ok(())
        }
        Err(report) => {
            tracing::error!(error = ?report, "Failed to flush library, changes kept in memory");
            Err(report)
        }
    }
}

impl<S: LibraryStorage, C: Clock> DependOnLibrary for LibraryService<S, C> {
    fn library(&self) -> &Library {
        &self.library
    }

    fn library_mut(&mut self) -> &mut Library {
        &mut self.library
    }
}

impl<S: LibraryStorage, C: Clock> DependOnLibraryStorage for LibraryService<S, C> {
    type LibraryStorage = S;
    fn library_storage(&self) -> &Self::LibraryStorage {
        &self.storage
    }
}

impl<S: LibraryStorage, C: Clock> DependOnClock for LibraryService<S, C> {
    type Clock = C;
    fn clock(&self) -> &Self::Clock {
        &self.clock
    }
}

impl<S: LibraryStorage, C: Clock> DependOnLibraryConfig for LibraryService<S, C> {
    fn library_config(&self) -> &LibraryConfig {
        &self.config
    }
}
