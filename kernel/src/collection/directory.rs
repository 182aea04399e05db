use error_stack::Report;

use crate::entity::{Member, MemberAddress, MemberName, MemberPhone, MembershipNumber};
use crate::KernelError;

/// Members are only ever added; there is no removal.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Directory {
    members: Vec<Member>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_member(
        &mut self,
        membership_number: MembershipNumber,
        name: MemberName,
        phone: MemberPhone,
        address: MemberAddress,
    ) -> error_stack::Result<&Member, KernelError> {
        if self.find_member(&membership_number).is_some() {
            return Err(Report::new(KernelError::DuplicateIdentifier).attach_printable(
                format!("Membership number {membership_number} is already registered"),
            ));
        }
        let index = self.members.len();
        self.members
            .push(Member::new(membership_number, name, phone, address));
        Ok(&self.members[index])
    }

    pub fn find_member(&self, membership_number: &MembershipNumber) -> Option<&Member> {
        self.members
            .iter()
            .find(|member| member.membership_number() == membership_number)
    }

    pub fn revise_member(
        &mut self,
        membership_number: &MembershipNumber,
        name: Option<MemberName>,
        address: Option<MemberAddress>,
    ) -> Option<&Member> {
        let member = self
            .members
            .iter_mut()
            .find(|member| member.membership_number() == membership_number)?;
        member.substitute(|member| {
            if let Some(name) = name {
                *member.name = name;
            }
            if let Some(address) = address {
                *member.address = address;
            }
        });
        Some(member)
    }

    pub fn members(&self) -> impl Iterator<Item = &Member> + Clone {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
