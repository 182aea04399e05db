use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct MemberPhone(String);

impl MemberPhone {
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }
}
