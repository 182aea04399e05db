use error_stack::Report;

use kernel::interface::library::DependOnLibrary;
use kernel::interface::storage::DependOnLibraryStorage;
use kernel::prelude::entity::{MemberAddress, MemberName, MemberPhone, MembershipNumber};
use kernel::KernelError;

use crate::service::flush;
use crate::transfer::{CreateMemberDto, GetMemberDto, MemberDto, ReviseMemberDto};

pub trait GetMemberService: 'static + Sync + Send + DependOnLibrary {
    fn find_member(&self, dto: GetMemberDto) -> Option<MemberDto> {
        let membership_number = MembershipNumber::new(dto.membership_number);
        self.library()
            .directory()
            .find_member(&membership_number)
            .cloned()
            .map(MemberDto::from)
    }

    fn members(&self) -> Vec<MemberDto> {
        self.library()
            .directory()
            .members()
            .cloned()
            .map(MemberDto::from)
            .collect()
    }
}

impl<T> GetMemberService for T where T: DependOnLibrary {}

#[async_trait::async_trait]
pub trait CreateMemberService:
    'static + Sync + Send + DependOnLibrary + DependOnLibraryStorage
{
    async fn add_member(
        &mut self,
        dto: CreateMemberDto,
    ) -> error_stack::Result<MemberDto, KernelError> {
        let CreateMemberDto {
            membership_number,
            name,
            phone,
            address,
        } = dto;
        let member = self
            .library_mut()
            .directory_mut()
            .add_member(
                MembershipNumber::new(membership_number),
                MemberName::new(name),
                MemberPhone::new(phone),
                MemberAddress::new(address),
            )?
            .clone();
        tracing::info!(membership_number = %member.membership_number(), "Member added");

        flush(self).await?;

        Ok(MemberDto::from(member))
    }
}

impl<T> CreateMemberService for T where T: DependOnLibrary + DependOnLibraryStorage {}

#[async_trait::async_trait]
pub trait ReviseMemberService:
    'static + Sync + Send + DependOnLibrary + DependOnLibraryStorage
{
    async fn revise_member(
        &mut self,
        dto: ReviseMemberDto,
    ) -> error_stack::Result<MemberDto, KernelError> {
        let membership_number = MembershipNumber::new(dto.membership_number);
        let member = self
            .library_mut()
            .directory_mut()
            .revise_member(
                &membership_number,
                dto.name.map(MemberName::new),
                dto.address.map(MemberAddress::new),
            )
            .cloned()
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("No member with number {membership_number}"))
            })?;
        tracing::info!(%membership_number, "Member revised");

        flush(self).await?;

        Ok(MemberDto::from(member))
    }
}

impl<T> ReviseMemberService for T where T: DependOnLibrary + DependOnLibraryStorage {}
