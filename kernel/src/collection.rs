mod catalog;
mod directory;
mod ledger;

pub use self::{catalog::*, directory::*, ledger::*};

/// The three collections a library process owns, plus whether the latest
/// mutation has reached durable storage.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Library {
    catalog: Catalog,
    directory: Directory,
    ledger: LendingLedger,
    pending: bool,
}

impl Library {
    pub fn new(catalog: Catalog, directory: Directory, ledger: LendingLedger) -> Self {
        Self {
            catalog,
            directory,
            ledger,
            pending: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn directory_mut(&mut self) -> &mut Directory {
        &mut self.directory
    }

    pub fn ledger(&self) -> &LendingLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut LendingLedger {
        &mut self.ledger
    }

    pub fn has_pending_changes(&self) -> bool {
        self.pending
    }

    pub fn mark_pending(&mut self) {
        self.pending = true;
    }

    pub fn mark_saved(&mut self) {
        self.pending = false;
    }
}

pub trait DependOnLibrary: 'static + Sync + Send {
    fn library(&self) -> &Library;
    fn library_mut(&mut self) -> &mut Library;
}
