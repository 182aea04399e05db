use std::ops::{Deref, DerefMut};

use application::service::LibraryService;
use driver::clock::SystemClock;
use driver::config::DriverConfig;
use driver::storage::JsonFileStorage;
use kernel::KernelError;

pub type AppModule = LibraryService<JsonFileStorage, SystemClock>;

pub struct Handler(AppModule);

impl Handler {
    pub async fn init(clock: SystemClock) -> error_stack::Result<Self, KernelError> {
        let config = DriverConfig::from_env()?;
        let storage = JsonFileStorage::new(config.data_dir().clone());
        let module = LibraryService::open(storage, clock, config.library().clone()).await;

        Ok(Self(module))
    }

    pub async fn close(self) -> error_stack::Result<(), KernelError> {
        self.0.close().await
    }
}

impl Deref for Handler {
    type Target = AppModule;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Handler {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
