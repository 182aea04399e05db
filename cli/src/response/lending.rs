use application::transfer::LendingRecordDto;

use crate::controller::Exhaust;

pub struct LendingPresenter;

fn line(record: &LendingRecordDto) -> String {
    format!(
        "{}\t{}\t{}",
        record.book_number, record.membership_number, record.return_date
    )
}

impl Exhaust<()> for LendingPresenter {
    type To = String;
    fn emit(&self, _: ()) -> Self::To {
        "Book returned".to_string()
    }
}

impl Exhaust<LendingRecordDto> for LendingPresenter {
    type To = String;
    fn emit(&self, input: LendingRecordDto) -> Self::To {
        format!(
            "{} lent to {}, due {}",
            input.book_number, input.membership_number, input.return_date
        )
    }
}

impl Exhaust<Vec<LendingRecordDto>> for LendingPresenter {
    type To = String;
    fn emit(&self, input: Vec<LendingRecordDto>) -> Self::To {
        if input.is_empty() {
            return "No lending records".to_string();
        }
        input.iter().map(line).collect::<Vec<_>>().join("\n")
    }
}
