mod address;
mod name;
mod number;
mod phone;

pub use self::{address::*, name::*, number::*, phone::*};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Member {
    membership_number: MembershipNumber,
    name: MemberName,
    phone: MemberPhone,
    address: MemberAddress,
}

impl Member {
    pub fn new(
        membership_number: MembershipNumber,
        name: MemberName,
        phone: MemberPhone,
        address: MemberAddress,
    ) -> Self {
        Self {
            membership_number,
            name,
            phone,
            address,
        }
    }
}
