use kernel::prelude::entity::{DestructMember, Member};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MemberDto {
    pub membership_number: String,
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl From<Member> for MemberDto {
    fn from(value: Member) -> Self {
        let DestructMember {
            membership_number,
            name,
            phone,
            address,
        } = value.into_destruct();
        Self {
            membership_number: membership_number.into(),
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }
}

pub struct GetMemberDto {
    pub membership_number: String,
}

pub struct CreateMemberDto {
    pub membership_number: String,
    pub name: String,
    pub phone: String,
    pub address: String,
}

pub struct ReviseMemberDto {
    pub membership_number: String,
    pub name: Option<String>,
    pub address: Option<String>,
}
