use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookEdition(String);

impl BookEdition {
    pub fn new(edition: impl Into<String>) -> Self {
        Self(edition.into())
    }
}
