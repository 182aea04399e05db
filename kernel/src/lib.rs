pub use crate::error::*;

mod clock;
mod collection;
mod config;
mod entity;
mod error;
mod storage;

#[cfg(feature = "prelude")]
pub mod prelude {
    pub mod entity {
        pub use crate::entity::*;
    }
    pub mod collection {
        pub use crate::collection::*;
    }
    pub mod config {
        pub use crate::config::*;
    }
}

#[cfg(feature = "interface")]
pub mod interface {
    pub mod clock {
        pub use crate::clock::*;
    }
    pub mod library {
        pub use crate::collection::DependOnLibrary;
        pub use crate::config::DependOnLibraryConfig;
    }
    pub mod storage {
        pub use crate::storage::*;
    }
}
