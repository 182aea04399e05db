use application::transfer::MemberDto;

use crate::controller::Exhaust;

pub struct MemberPresenter;

fn line(member: &MemberDto) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        member.membership_number, member.name, member.phone, member.address
    )
}

impl Exhaust<MemberDto> for MemberPresenter {
    type To = String;
    fn emit(&self, input: MemberDto) -> Self::To {
        line(&input)
    }
}

impl Exhaust<Vec<MemberDto>> for MemberPresenter {
    type To = String;
    fn emit(&self, input: Vec<MemberDto>) -> Self::To {
        if input.is_empty() {
            return "No members registered".to_string();
        }
        input.iter().map(line).collect::<Vec<_>>().join("\n")
    }
}
