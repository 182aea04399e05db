use std::ffi::OsString;
use std::path::{Path, PathBuf};

use error_stack::{Report, ResultExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::AsyncWriteExt;

use kernel::interface::storage::{LibrarySnapshot, LibraryStorage};
use kernel::prelude::collection::{Catalog, Directory, LendingLedger};
use kernel::KernelError;

use crate::error::{ConvertError, DriverError};

use self::book::{catalog_from_rows, BookRow};
use self::lending::{ledger_from_rows, LendingRow};
use self::member::{directory_from_rows, MemberRow};

mod book;
mod lending;
mod member;

pub static BOOKS_FILE: &str = "books.json";
pub static MEMBERS_FILE: &str = "members.json";
pub static LENDING_FILE: &str = "lending.json";

/// Keeps each collection in its own pretty-printed JSON document under one
/// directory.
///
/// Every document is first written to a `.tmp` sibling and then renamed over
/// the previous version, so a single document is never left half written.
/// The three renames are not coordinated with each other.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait::async_trait]
impl LibraryStorage for JsonFileStorage {
    /// A document that fails to load is moved to a `.corrupt` sibling, so the
    /// empty collection written by the next save never replaces it.
    async fn load(&self) -> LibrarySnapshot {
        let books = self.dir.join(BOOKS_FILE);
        let catalog = read_document::<BookRow>(&books)
            .await
            .map(catalog_from_rows);
        let catalog = set_aside(&books, catalog).await;

        let members = self.dir.join(MEMBERS_FILE);
        let directory = read_document::<MemberRow>(&members)
            .await
            .map(directory_from_rows);
        let directory = set_aside(&members, directory).await;

        let lending = self.dir.join(LENDING_FILE);
        let ledger = read_document::<LendingRow>(&lending)
            .await
            .and_then(ledger_from_rows);
        let ledger = set_aside(&lending, ledger).await;

        LibrarySnapshot::new(catalog, directory, ledger)
    }

    async fn save(
        &self,
        catalog: &Catalog,
        directory: &Directory,
        ledger: &LendingLedger,
    ) -> error_stack::Result<(), KernelError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(DriverError::from)
            .convert_error(KernelError::StorageWriteFailure)
            .attach_printable_lazy(|| format!("Failed to create {}", self.dir.display()))?;

        let books = catalog.books().cloned().map(BookRow::from).collect::<Vec<_>>();
        let members = directory
            .members()
            .cloned()
            .map(MemberRow::from)
            .collect::<Vec<_>>();
        let lending = ledger
            .records()
            .cloned()
            .map(LendingRow::from)
            .collect::<Vec<_>>();

        let results = [
            write_document(&self.dir.join(BOOKS_FILE), &books).await,
            write_document(&self.dir.join(MEMBERS_FILE), &members).await,
            write_document(&self.dir.join(LENDING_FILE), &lending).await,
        ];
        results
            .into_iter()
            .fold(Ok(()), |merged, result| match (merged, result) {
                (Ok(()), result) => result,
                (Err(report), Ok(())) => Err(report),
                (Err(mut report), Err(other)) => {
                    report.extend_one(other);
                    Err(report)
                }
            })
    }
}

async fn read_document<R: DeserializeOwned + Send>(
    path: &Path,
) -> error_stack::Result<Vec<R>, KernelError> {
    let content = match tokio::fs::read(path).await {
        Ok(content) => content,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Document absent, starting empty");
            return Ok(Vec::new());
        }
        Err(error) => {
            return Err(Report::from(DriverError::from(error))
                .change_context(KernelError::CorruptState)
                .attach_printable(format!("Failed to read {}", path.display())));
        }
    };
    let rows = serde_json::from_slice::<Vec<R>>(&content)
        .map_err(DriverError::from)
        .convert_error(KernelError::CorruptState)
        .attach_printable_lazy(|| format!("Failed to parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "Document loaded");
    Ok(rows)
}

async fn write_document<R: Serialize + Sync>(
    path: &Path,
    rows: &[R],
) -> error_stack::Result<(), KernelError> {
    let staging = staging_path(path);
    let write = async {
        let mut content = serde_json::to_vec_pretty(rows)?;
        content.push(b'\n');
        let mut file = tokio::fs::File::create(&staging).await?;
        file.write_all(&content).await?;
        file.sync_all().await?;
        tokio::fs::rename(&staging, path).await?;
        Ok::<(), DriverError>(())
    };
    write
        .await
        .convert_error(KernelError::StorageWriteFailure)
        .attach_printable_lazy(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "Document written");
    Ok(())
}

async fn set_aside<T>(
    path: &Path,
    loaded: error_stack::Result<T, KernelError>,
) -> error_stack::Result<T, KernelError> {
    let report = match loaded {
        Ok(value) => return Ok(value),
        Err(report) => report,
    };
    let aside = corrupt_path(path).await;
    match tokio::fs::rename(path, &aside).await {
        Ok(()) => {
            tracing::warn!(path = %path.display(), aside = %aside.display(), "Corrupt document set aside");
            Err(report.attach_printable(format!(
                "{} could not be read and was moved to {}",
                path.display(),
                aside.display()
            )))
        }
        Err(error) => {
            tracing::error!(path = %path.display(), %error, "Failed to set corrupt document aside");
            Err(report.attach_printable(format!(
                "{} could not be read or moved aside: {error}",
                path.display()
            )))
        }
    }
}

/// First of `<name>.corrupt`, `<name>.corrupt.1`, ... that does not exist yet.
async fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".corrupt");
    let mut candidate = path.with_file_name(&name);
    let mut attempt = 0;
    while tokio::fs::symlink_metadata(&candidate).await.is_ok() {
        attempt += 1;
        let mut numbered = name.clone();
        numbered.push(format!(".{attempt}"));
        candidate = path.with_file_name(numbered);
    }
    candidate
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
