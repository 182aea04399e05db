use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct MemberAddress(String);

impl MemberAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }
}
