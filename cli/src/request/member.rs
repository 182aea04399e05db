use clap::Args;

use application::transfer::{CreateMemberDto, ReviseMemberDto};

use crate::controller::Intake;

#[derive(Debug, Args)]
pub struct CreateMemberRequest {
    membership_number: String,
    name: String,
    phone: String,
    address: String,
}

#[derive(Debug, Args)]
pub struct ReviseMemberRequest {
    membership_number: String,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    address: Option<String>,
}

pub struct MemberTransformer;

impl Intake<CreateMemberRequest> for MemberTransformer {
    type To = CreateMemberDto;
    fn emit(&self, input: CreateMemberRequest) -> Self::To {
        CreateMemberDto {
            membership_number: input.membership_number,
            name: input.name,
            phone: input.phone,
            address: input.address,
        }
    }
}

impl Intake<ReviseMemberRequest> for MemberTransformer {
    type To = ReviseMemberDto;
    fn emit(&self, input: ReviseMemberRequest) -> Self::To {
        ReviseMemberDto {
            membership_number: input.membership_number,
            name: input.name,
            address: input.address,
        }
    }
}
