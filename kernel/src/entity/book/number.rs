use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookNumber(String);

impl BookNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }
}

impl Display for BookNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
